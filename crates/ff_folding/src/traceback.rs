//! Reconstruction of one optimal structure from a filled `NussinovDP` table.

use log::trace;
use ff_structure::PairList;
use ff_structure::DotBracketVec;

use crate::NussinovDP;

/// Which partner of `j` to pick when several `k` reach the optimal count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// The smallest `k`.
    #[default]
    First,
    /// The largest `k`.
    Last,
}

impl NussinovDP {
    /// One optimal structure of the full sequence.
    pub fn traceback(&self, tie: TieBreak) -> PairList {
        match self.len() {
            0 => PairList::new(0),
            n => self.traceback_interval(0, n - 1, tie),
        }
    }

    /// The optimal structure with ties broken by lowest partner index.
    pub fn optimal_pairs(&self) -> PairList {
        self.traceback(TieBreak::First)
    }

    pub fn structure(&self, tie: TieBreak) -> DotBracketVec {
        DotBracketVec::from(&self.traceback(tie))
    }

    /// One optimal structure of the closed interval `[i, j]`.
    ///
    /// Pairs are emitted in the order of a depth-first walk: the pair
    /// closed by `j`, then the part to its left, then its interior.
    ///
    /// # Panics
    ///
    /// If `i < j` and `j` is outside the sequence.
    pub fn traceback_interval(&self, i: usize, j: usize, tie: TieBreak) -> PairList {
        let mut pairs = PairList::new(self.len());
        if j <= i {
            return pairs;
        }
        assert!(j < self.len(), "Invalid interval: j must be < length");

        let mut stack: Vec<(usize, usize)> = vec![(i, j)];
        while let Some((i, j)) = stack.pop() {
            if j <= i {
                continue;
            }
            let target = self.pair_count(i, j);
            if target == self.pair_count(i, j - 1) {
                stack.push((i, j - 1));
                continue;
            }

            let mut optimal = self.candidates(i, j)
                .filter(|&k| self.pair_score(i, k, j) == target);
            let k = match tie {
                TieBreak::First => optimal.next(),
                TieBreak::Last => optimal.next_back(),
            }.unwrap_or_else(|| {
                unreachable!("No partner of {} reproduces {} pairs on [{}, {}]", j, target, i, j)
            });

            trace!("pair ({k}, {j}) on [{i}, {j}]");
            pairs.push(k, j);
            stack.push((k + 1, j - 1));
            if k > i {
                stack.push((i, k - 1));
            }
        }
        pairs
    }
}

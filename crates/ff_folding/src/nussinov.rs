//! Nussinov-style base-pair maximization.
//!
//! Cell `(i, j)` of the table holds the maximum number of base pairs that
//! the closed interval `[i, j]` of the sequence can form. Position `j`
//! either stays unpaired, or it pairs with some compatible `k` which splits
//! the interval into the independent parts `[i, k-1]` and `[k+1, j-1]`.

use std::fmt;

use log::debug;
use ndarray::Array2;

use crate::NucleotideVec;
use crate::SequenceError;

/// Minimum distance `j - k` of a base pair `(k, j)`: a hairpin encloses at
/// least four unpaired nucleotides.
pub const MIN_PAIR_SPAN: usize = 5;

/// The filled dynamic programming table together with its sequence.
#[derive(Debug, Clone)]
pub struct NussinovDP {
    sequence: NucleotideVec,
    dp_table: Array2<usize>,
}

impl From<NucleotideVec> for NussinovDP {
    fn from(sequence: NucleotideVec) -> Self {
        NussinovDP::new(sequence)
    }
}

impl TryFrom<&str> for NussinovDP {
    type Error = SequenceError;

    fn try_from(sequence: &str) -> Result<Self, Self::Error> {
        Ok(NussinovDP::new(NucleotideVec::try_from(sequence)?))
    }
}

impl NussinovDP {
    pub fn new(sequence: NucleotideVec) -> Self {
        let n = sequence.len();
        // All intervals with j - i < MIN_PAIR_SPAN (and all i > j) stay 0.
        let dp_table = Array2::zeros((n, n));
        let mut dp = Self { sequence, dp_table };

        for span in MIN_PAIR_SPAN..n {
            for i in 0..n - span {
                let j = i + span;
                let unpaired = dp.dp_table[(i, j - 1)];
                let paired = dp.candidates(i, j)
                    .map(|k| dp.pair_score(i, k, j))
                    .max();
                dp.dp_table[(i, j)] = paired.map_or(unpaired, |p| p.max(unpaired));
            }
        }
        debug!("Filled {n}x{n} table: {} base pairs.", dp.max_pairs());
        dp
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn sequence(&self) -> &NucleotideVec {
        &self.sequence
    }

    pub fn table(&self) -> &Array2<usize> {
        &self.dp_table
    }

    /// Maximum number of pairs on the closed interval `[i, j]`, 0 if `j < i`.
    pub fn pair_count(&self, i: usize, j: usize) -> usize {
        if j < i { 0 } else { self.dp_table[(i, j)] }
    }

    /// Maximum number of pairs of the whole sequence.
    pub fn max_pairs(&self) -> usize {
        match self.len() {
            0 => 0,
            n => self.dp_table[(0, n - 1)],
        }
    }

    /// Same as `pair_count` on the half-open interval `[start, end)`.
    fn count_between(&self, start: usize, end: usize) -> usize {
        if end <= start { 0 } else { self.dp_table[(start, end - 1)] }
    }

    /// All `k` in `[i, j - MIN_PAIR_SPAN]` that can pair with `j`, in
    /// increasing order.
    pub fn candidates(&self, i: usize, j: usize) -> impl DoubleEndedIterator<Item = usize> + '_ {
        let end = (j + 1).saturating_sub(MIN_PAIR_SPAN).max(i);
        let bj = self.sequence[j];
        (i..end).filter(move |&k| self.sequence[k].pairs_with(bj))
    }

    /// Pairs in `[i, j]` if `(k, j)` is a base pair: the pair itself plus
    /// the best of `[i, k-1]` and `[k+1, j-1]`.
    pub fn pair_score(&self, i: usize, k: usize, j: usize) -> usize {
        debug_assert!(i <= k && k < j);
        1 + self.count_between(i, k) + self.count_between(k + 1, j)
    }
}

impl fmt::Display for NussinovDP {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.dp_table.rows() {
            let line = row.iter()
                .map(|v| format!("{:>2}", v))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

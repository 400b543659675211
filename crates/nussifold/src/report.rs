//! Folding one record and presenting the result.

use log::trace;
use serde::Serialize;
use ff_folding::NussinovDP;
use ff_folding::TieBreak;
use ff_folding::NucleotideVec;
use ff_structure::PairList;
use ff_structure::DotBracketVec;

use crate::input_parsers::header_name;
use crate::input_parsers::FastaRecord;

/// An optimal structure of one record.
#[derive(Debug, Clone)]
pub struct FoldResult {
    pub header: Option<String>,
    pub sequence: NucleotideVec,
    pub pairs: PairList,
    pub max_pairs: usize,
}

pub fn fold_record(record: FastaRecord, tie: TieBreak) -> FoldResult {
    let FastaRecord { header, sequence } = record;
    let dp = NussinovDP::new(sequence);
    trace!("DP table:\n{}", dp);
    let pairs = dp.traceback(tie);
    let max_pairs = dp.max_pairs();
    FoldResult {
        header,
        sequence: dp.sequence().clone(),
        pairs,
        max_pairs,
    }
}

impl FoldResult {
    pub fn structure(&self) -> DotBracketVec {
        DotBracketVec::from(&self.pairs)
    }

    /// The nucleotides of every pair, "{A,U} {G,C} ...".
    pub fn nucleotide_pairs(&self) -> String {
        self.pairs.iter()
            .map(|&(i, j)| format!("{{{},{}}}", self.sequence[i], self.sequence[j]))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Output file stem of the `idx`-th record: "{idx+1}_{name}", with every
    /// character of the header name outside `[A-Za-z0-9._-]` replaced by '_',
    /// or "seq{idx+1}" without header.
    pub fn file_stem(&self, idx: usize) -> String {
        match self.header.as_deref().and_then(header_name) {
            Some(name) => {
                let name: String = name.chars()
                    .map(|c| if c.is_ascii_alphanumeric() || "._-".contains(c) { c } else { '_' })
                    .collect();
                format!("{}_{}", idx + 1, name)
            }
            None => format!("seq{}", idx + 1),
        }
    }

    pub fn to_report(&self) -> FoldReport {
        FoldReport {
            header: self.header.clone(),
            sequence: self.sequence.to_string(),
            structure: self.structure().to_string(),
            pairs: self.pairs.pairs.clone(),
            num_pairs: self.pairs.num_pairs(),
        }
    }
}

/// Serializable view of a `FoldResult`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoldReport {
    pub header: Option<String>,
    pub sequence: String,
    pub structure: String,
    pub pairs: Vec<(usize, usize)>,
    pub num_pairs: usize,
}

//! The ff_folding crate.
//!
//! Base-pair maximization of RNA sequences:
//!  - nucleotides and the Watson-Crick compatibility predicate,
//!  - the Nussinov dynamic programming table (`NussinovDP`),
//!  - traceback of one optimal structure (`TieBreak`).
//!
//! ```
//! use ff_folding::NussinovDP;
//!
//! let dp = NussinovDP::try_from("GGGAAAUCCC").unwrap();
//! let pairs = dp.optimal_pairs();
//! assert_eq!(pairs.num_pairs(), dp.max_pairs());
//! ```

/// Base, NucleotideVec, PairType, ....
mod nucleotides;

/// Filling the DP table.
mod nussinov;

/// Reading one structure back out of the table.
mod traceback;

pub use nucleotides::*;
pub use nussinov::*;
pub use traceback::*;


//! # nussifold
//!
//! Maximum base-pair folding of RNA sequences.
//!
//! This crate re-exports the core crates and adds the input, report and
//! rendering layers used by the `ff-fold` binary.

pub mod input_parsers;
pub mod folding_parsers;
pub mod report;
pub mod render;

pub mod structure {
    pub use ::ff_structure::*;
}

pub mod folding {
    pub use ::ff_folding::*;
}

//! Secondary structure representations.
//!
//! A structure is a set of non-crossing base pairs `(i, j)` with `i < j`,
//! where every position takes part in at most one pair. It can be viewed as
//!  - a `PairList`: the pairs in the order they were produced,
//!  - a `PairTable`: the partner of every position,
//!  - a `DotBracketVec`: the linear `.()` notation.

mod error;
mod dotbracket;
mod pair_table;
mod pair_list;

pub use error::*;
pub use dotbracket::*;
pub use pair_table::*;
pub use pair_list::*;


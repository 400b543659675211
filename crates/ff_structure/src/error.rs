use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    UnmatchedOpen(usize),                 // '(' at this position was never closed
    UnmatchedClose(usize),                // ')' at this position has no matching '('
    InvalidToken(String, String, usize),  // token, source, position
    IndexOutOfRange(usize, usize),        // index, length
    SelfPairing(usize),
    SharedIndex(usize),
    CrossingPairs((usize, usize), (usize, usize)),
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::UnmatchedOpen(i) => {
                write!(f, "Unmatched '(' at position {}", i)
            }
            StructureError::UnmatchedClose(i) => {
                write!(f, "Unmatched ')' at position {}", i)
            }
            StructureError::InvalidToken(tok, src, i) => {
                write!(f, "Invalid {} in {} at position {}", tok, src, i)
            }
            StructureError::IndexOutOfRange(i, len) => {
                write!(f, "Index {} out of range for length {}", i, len)
            }
            StructureError::SelfPairing(i) => {
                write!(f, "Position {} pairs with itself", i)
            }
            StructureError::SharedIndex(i) => {
                write!(f, "Position {} is part of more than one pair", i)
            }
            StructureError::CrossingPairs((a, b), (c, d)) => {
                write!(f, "Pairs ({}, {}) and ({}, {}) cross", a, b, c, d)
            }
        }
    }
}

impl std::error::Error for StructureError {}


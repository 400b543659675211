use std::ops::{Deref, DerefMut};
use std::convert::TryFrom;

use crate::StructureError;
use crate::PairList;
use crate::{DotBracket, DotBracketVec};

/// The pairing partner of every position, `None` if unpaired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable(pub Vec<Option<usize>>);

impl Deref for PairTable {
    type Target = [Option<usize>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PairTable {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl TryFrom<&str> for PairTable {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let dbv = DotBracketVec::try_from(s)?;
        PairTable::try_from(&dbv)
    }
}

impl TryFrom<&DotBracketVec> for PairTable {
    type Error = StructureError;

    fn try_from(db: &DotBracketVec) -> Result<Self, Self::Error> {
        let mut stack: Vec<usize> = Vec::new();
        let mut table = vec![None; db.len()];

        for (i, dot) in db.iter().enumerate() {
            match dot {
                DotBracket::Open => stack.push(i),
                DotBracket::Close => {
                    let j = stack.pop().ok_or(StructureError::UnmatchedClose(i))?;
                    table[i] = Some(j);
                    table[j] = Some(i);
                }
                DotBracket::Unpaired => {}
            }
        }

        if let Some(i) = stack.pop() {
            return Err(StructureError::UnmatchedOpen(i));
        }

        Ok(PairTable(table))
    }
}

/// Fails on the first pair that is out of range, a self pair, reuses a
/// position, or crosses another pair.
impl TryFrom<&PairList> for PairTable {
    type Error = StructureError;

    fn try_from(pl: &PairList) -> Result<Self, Self::Error> {
        let n = pl.length;
        let mut table = vec![None; n];

        for &(i, j) in pl.iter() {
            if let Some(&k) = [i, j].iter().find(|&&k| k >= n) {
                return Err(StructureError::IndexOutOfRange(k, n));
            }
            if i == j {
                return Err(StructureError::SelfPairing(i));
            }
            if let Some(&k) = [i, j].iter().find(|&&k| table[k].is_some()) {
                return Err(StructureError::SharedIndex(k));
            }
            table[i] = Some(j);
            table[j] = Some(i);
        }

        // Non-crossing pairs close in reverse order of opening.
        let mut stack: Vec<(usize, usize)> = Vec::new();
        for p in 0..n {
            match table[p] {
                Some(q) if q > p => stack.push((p, q)),
                Some(q) => match stack.pop() {
                    Some((open, _)) if open == q => (),
                    Some(other) => return Err(StructureError::CrossingPairs((q, p), other)),
                    None => unreachable!("partner {} of {} was never opened", q, p),
                },
                None => (),
            }
        }

        Ok(PairTable(table))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pair_table() {
        let pt = PairTable::try_from("((..))").unwrap();
        assert_eq!(pt.len(), 6);
        assert_eq!(pt[0], Some(5));
        assert_eq!(pt[1], Some(4));
        assert_eq!(pt[2], None);
        assert_eq!(pt[3], None);
        assert_eq!(pt[4], Some(1));
        assert_eq!(pt[5], Some(0));
    }

    #[test]
    fn test_unmatched_open() {
        let err = PairTable::try_from("(()").unwrap_err();
        assert_eq!(format!("{}", err), "Unmatched '(' at position 0");
    }

    #[test]
    fn test_unmatched_close() {
        let err = PairTable::try_from("())").unwrap_err();
        assert_eq!(format!("{}", err), "Unmatched ')' at position 2");
    }

    #[test]
    fn test_invalid_token() {
        let err = PairTable::try_from("(x)").unwrap_err();
        assert_eq!(format!("{}", err), "Invalid character 'x' in dot-bracket at position 1");
    }

    #[test]
    fn test_from_pair_list() {
        let mut pl = PairList::new(12);
        pl.push(0, 11);
        pl.push(1, 10);
        pl.push(6, 9);
        let pt = PairTable::try_from(&pl).unwrap();
        assert_eq!(DotBracketVec::from(&pt).to_string(), "((....(..)))");
    }

    #[test]
    fn test_from_pair_list_errors() {
        let mut pl = PairList::new(6);
        pl.push(0, 6);
        assert_eq!(PairTable::try_from(&pl), Err(StructureError::IndexOutOfRange(6, 6)));

        let mut pl = PairList::new(6);
        pl.push(2, 2);
        assert_eq!(PairTable::try_from(&pl), Err(StructureError::SelfPairing(2)));

        let mut pl = PairList::new(10);
        pl.push(0, 5);
        pl.push(5, 9);
        assert_eq!(PairTable::try_from(&pl), Err(StructureError::SharedIndex(5)));

        let mut pl = PairList::new(10);
        pl.push(0, 5);
        pl.push(2, 8);
        assert_eq!(PairTable::try_from(&pl), Err(StructureError::CrossingPairs((0, 5), (2, 8))));
    }
}

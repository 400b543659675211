use std::fmt;
use std::convert::TryFrom;

use crate::PairTable;
use crate::StructureError;

/// Base pairs `(i, j)`, 0-based with `i < j`, in the order they were
/// produced, together with the length of the underlying sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PairList {
    pub length: usize,
    pub pairs: Vec<(usize, usize)>,
}

impl PairList {
    pub fn new(length: usize) -> Self {
        Self { length, pairs: Vec::new() }
    }

    pub fn push(&mut self, i: usize, j: usize) {
        self.pairs.push((i, j));
    }

    pub fn num_pairs(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(usize, usize)> {
        self.pairs.iter()
    }

    /// Checks that the pairs form a secondary structure: indices in range,
    /// no self pairs, no shared positions, no crossings.
    pub fn validate(&self) -> Result<(), StructureError> {
        PairTable::try_from(self).map(|_| ())
    }

    /// The flat comma separated index list "i0,j0,i1,j1,...".
    pub fn index_csv(&self) -> String {
        self.pairs.iter()
            .flat_map(|&(i, j)| [i, j])
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl TryFrom<&PairTable> for PairList {
    type Error = StructureError;

    fn try_from(pt: &PairTable) -> Result<Self, Self::Error> {
        let mut pairs = Vec::new();
        for (i, &j_opt) in pt.iter().enumerate() {
            if let Some(j) = j_opt {
                if j == i {
                    return Err(StructureError::SelfPairing(i));
                }
                if j >= pt.len() {
                    return Err(StructureError::IndexOutOfRange(j, pt.len()));
                }
                match pt[j] {
                    Some(k) if k == i => {
                        if i < j {
                            pairs.push((i, j));
                        }
                    }
                    _ => return Err(StructureError::SharedIndex(j)),
                }
            }
        }
        Ok(PairList {
            length: pt.len(),
            pairs,
        })
    }
}

impl fmt::Display for PairList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, j) in &self.pairs {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{{{},{}}}", i, j)?;
            first = false;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_list_from_pair_table() {
        let pt = PairTable::try_from("((.....))").unwrap();
        let pl = PairList::try_from(&pt).unwrap();

        assert_eq!(pl.length, 9);
        assert_eq!(pl.pairs, vec![(0, 8), (1, 7)]);
    }

    #[test]
    fn test_pair_list_from_inconsistent_table() {
        let pt = PairTable(vec![Some(2), None, Some(1)]);
        assert_eq!(PairList::try_from(&pt), Err(StructureError::SharedIndex(2)));
    }

    #[test]
    fn test_index_csv() {
        let mut pl = PairList::new(20);
        assert_eq!(pl.index_csv(), "");
        pl.push(0, 11);
        assert_eq!(pl.index_csv(), "0,11");
        pl.push(12, 19);
        assert_eq!(pl.index_csv(), "0,11,12,19");
    }

    #[test]
    fn test_display() {
        let mut pl = PairList::new(20);
        assert_eq!(pl.to_string(), "");
        pl.push(3, 8);
        pl.push(0, 11);
        assert_eq!(pl.to_string(), "{3,8} {0,11}");
    }

    #[test]
    fn test_validate() {
        let mut pl = PairList::new(16);
        pl.push(0, 15);
        pl.push(1, 6);
        pl.push(8, 14);
        assert!(pl.validate().is_ok());
        pl.push(4, 10);
        assert_eq!(pl.validate(), Err(StructureError::CrossingPairs((1, 6), (4, 10))));
    }
}

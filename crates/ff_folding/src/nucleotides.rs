use std::fmt;
use std::borrow::Borrow;
use std::ops::Deref;

use log::warn;
use colored::*;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    InvalidSymbol { symbol: char, position: usize },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::InvalidSymbol { symbol, position } => {
                write!(f, "Unsupported nucleotide '{}' at position {}", symbol, position)
            }
        }
    }
}

impl std::error::Error for SequenceError {}


/// RNA nucleotides. `N` stands in for symbols outside the alphabet and never
/// pairs with anything.
#[derive(Clone, Hash, Copy, Debug, Eq, PartialEq)]
pub enum Base { A, C, G, U, N }
pub const BCOUNT: usize = 5; // 5 Base variants for tables.

impl TryFrom<char> for Base {
    type Error = SequenceError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'U' => Ok(Base::U),
            _ => Err(SequenceError::InvalidSymbol { symbol: c, position: 0 }),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
            Base::N => 'N',
        };
        write!(f, "{}", c)
    }
}

impl Base {
    /// True iff `{self, other}` is `{A, U}` or `{G, C}`.
    pub fn pairs_with(self, other: Base) -> bool {
        PairType::from((self, other)).can_pair()
    }
}

/// The compatibility predicate on two nucleotides.
pub fn can_pair(a: Base, b: Base) -> bool {
    a.pairs_with(b)
}


#[derive(Clone, Hash, Debug, Default, Eq, PartialEq)]
pub struct NucleotideVec(pub Vec<Base>);

impl Deref for NucleotideVec {
    type Target = [Base];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<[Base]> for NucleotideVec {
    fn borrow(&self) -> &[Base] {
        &self.0
    }
}

/// Strict conversion: fails on the first symbol outside `ACGU` (any case).
impl TryFrom<&str> for NucleotideVec {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut vec = Vec::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            match Base::try_from(c) {
                Ok(b) => vec.push(b),
                Err(SequenceError::InvalidSymbol { symbol, .. }) => {
                    return Err(SequenceError::InvalidSymbol { symbol, position: i });
                }
            }
        }
        Ok(NucleotideVec(vec))
    }
}

impl fmt::Display for NucleotideVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.0 {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

impl NucleotideVec {
    /// Lenient conversion: symbols outside the alphabet become `N`.
    pub fn from_lossy(s: &str) -> Self {
        let vec = s.chars().enumerate().map(|(i, c)| {
            Base::try_from(c).unwrap_or_else(|_| {
                let e = SequenceError::InvalidSymbol { symbol: c, position: i };
                warn!("{} {} -> converted to 'N'", "WARNING:".red(), e);
                Base::N
            })
        }).collect();
        NucleotideVec(vec)
    }
}

const PAIR_LOOKUP: [[PairType; BCOUNT]; BCOUNT] = {
    use Base::*;
    use PairType::*;
    let mut table = [[NN; BCOUNT]; BCOUNT];
    table[A as usize][U as usize] = AU;
    table[U as usize][A as usize] = UA;
    table[C as usize][G as usize] = CG;
    table[G as usize][C as usize] = GC;
    table
};

/// Watson-Crick pair types; everything else is `NN`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PairType { AU, UA, CG, GC, NN }

impl From<(Base, Base)> for PairType {
    fn from(pair: (Base, Base)) -> Self {
        PAIR_LOOKUP[pair.0 as usize][pair.1 as usize]
    }
}

impl PairType {
    pub fn can_pair(&self) -> bool {
       self != &PairType::NN
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Base; BCOUNT] = [Base::A, Base::C, Base::G, Base::U, Base::N];

    #[test]
    fn test_base_from_char() {
        assert_eq!(Base::try_from('a').unwrap(), Base::A);
        assert_eq!(Base::try_from('U').unwrap(), Base::U);
        assert_eq!(Base::try_from('g').unwrap(), Base::G);
        assert!(Base::try_from('T').is_err());
        assert!(Base::try_from('N').is_err());
    }

    #[test]
    fn test_strict_sequence() {
        let seq = NucleotideVec::try_from("acguACGU").unwrap();
        assert_eq!(seq.to_string(), "ACGUACGU");

        let err = NucleotideVec::try_from("AXUGC").unwrap_err();
        assert_eq!(err, SequenceError::InvalidSymbol { symbol: 'X', position: 1 });
        assert_eq!(err.to_string(), "Unsupported nucleotide 'X' at position 1");
    }

    #[test]
    fn test_lossy_sequence() {
        let seq = NucleotideVec::from_lossy("aXu-gc");
        assert_eq!(seq.to_string(), "ANUNGC");
        assert!(NucleotideVec::from_lossy("").is_empty());
    }

    #[test]
    fn test_compatibility() {
        assert!(can_pair(Base::A, Base::U));
        assert!(can_pair(Base::U, Base::A));
        assert!(can_pair(Base::G, Base::C));
        assert!(can_pair(Base::C, Base::G));
        assert!(!can_pair(Base::G, Base::U));
        assert!(!can_pair(Base::A, Base::A));
        assert!(!can_pair(Base::U, Base::C));
        assert!(!can_pair(Base::G, Base::G));
    }

    #[test]
    fn test_compatibility_symmetric() {
        for &a in &ALL {
            for &b in &ALL {
                assert_eq!(can_pair(a, b), can_pair(b, a), "{}-{}", a, b);
            }
            assert!(!can_pair(a, Base::N));
        }
    }

    #[test]
    fn test_pair_type_lookup() {
        assert_eq!(PairType::from((Base::G, Base::C)), PairType::GC);
        assert_eq!(PairType::from((Base::C, Base::G)), PairType::CG);
        assert_eq!(PairType::from((Base::G, Base::U)), PairType::NN);
        assert!(!PairType::from((Base::N, Base::N)).can_pair());
    }
}

//! Immutable input sequences.
//!
//! A `Sequence` keeps the raw input bytes. Nothing is rejected on the
//! character level: bytes outside of {A, C, G, U} are retained and will
//! never pair according to the `ComplementTable`. The only constraint is
//! the length, as every half-open range end must fit into `NAIDX`.
//!
//! Text input has one position per character. Non-ASCII characters are
//! stored as `Sequence::FOREIGN`.
//!

use std::fmt;
use std::ops::Index;

use crate::NAIDX;
use crate::StructureError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    bases: Vec<u8>,
}

impl Sequence {
    /// Stand-in byte for a character that has no single-byte encoding.
    pub const FOREIGN: u8 = b'?';

    /// Number of bases.
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// The length as an index (safe by construction).
    pub fn end(&self) -> NAIDX {
        self.bases.len() as NAIDX
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    /// True if every byte is one of the four bases.
    pub fn is_canonical(&self) -> bool {
        self.bases.iter().all(|b| matches!(b, b'A' | b'C' | b'G' | b'U'))
    }
}

impl TryFrom<Vec<u8>> for Sequence {
    type Error = StructureError;

    fn try_from(bases: Vec<u8>) -> Result<Self, Self::Error> {
        if bases.len() > NAIDX::MAX as usize {
            return Err(StructureError::SequenceTooLong {
                length: bases.len(),
                max: NAIDX::MAX as usize,
            });
        }
        Ok(Sequence { bases })
    }
}

impl TryFrom<&str> for Sequence {
    type Error = StructureError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let bases: Vec<u8> = s
            .chars()
            .map(|c| if c.is_ascii() { c as u8 } else { Sequence::FOREIGN })
            .collect();
        Sequence::try_from(bases)
    }
}

impl Index<NAIDX> for Sequence {
    type Output = u8;

    fn index(&self, i: NAIDX) -> &u8 {
        &self.bases[i as usize]
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bases))
    }
}

//! Nucleotides and the Watson-Crick complement table.
//!
//! The `ComplementTable` is a plain value: build it once, then hand out
//! references to whoever needs to test pairing. Bytes that are not one of
//! the four bases have no complement, so they simply never pair.
//!

use std::fmt;

use crate::StructureError;

/// One of the four RNA bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base {
    A,
    C,
    G,
    U,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::U];

    /// The Watson-Crick partner (A-U, C-G).
    pub fn complement(self) -> Base {
        match self {
            Base::A => Base::U,
            Base::U => Base::A,
            Base::G => Base::C,
            Base::C => Base::G,
        }
    }
}

impl TryFrom<u8> for Base {
    type Error = StructureError;

    fn try_from(b: u8) -> Result<Self, Self::Error> {
        match b {
            b'A' => Ok(Base::A),
            b'C' => Ok(Base::C),
            b'G' => Ok(Base::G),
            b'U' => Ok(Base::U),
            _ => Err(StructureError::InvalidBase(b as char)),
        }
    }
}

impl TryFrom<char> for Base {
    type Error = StructureError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        u8::try_from(c)
            .map_err(|_| StructureError::InvalidBase(c))
            .and_then(Base::try_from)
    }
}

impl From<Base> for u8 {
    fn from(b: Base) -> Self {
        match b {
            Base::A => b'A',
            Base::C => b'C',
            Base::G => b'G',
            Base::U => b'U',
        }
    }
}

impl From<Base> for char {
    fn from(b: Base) -> Self {
        u8::from(b) as char
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/// Byte-indexed complement lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplementTable {
    table: [Option<Base>; 256],
}

impl ComplementTable {
    /// The canonical A-U / C-G table.
    pub fn watson_crick() -> Self {
        let mut table = [None; 256];
        for base in Base::ALL {
            table[u8::from(base) as usize] = Some(base.complement());
        }
        Self { table }
    }

    /// Complement of an arbitrary input byte, if it has one.
    pub fn complement(&self, b: u8) -> Option<Base> {
        self.table[b as usize]
    }

    /// True iff `b` is the complement of `a`.
    pub fn pairs(&self, a: u8, b: u8) -> bool {
        self.complement(a).is_some_and(|c| u8::from(c) == b)
    }
}

impl Default for ComplementTable {
    fn default() -> Self {
        Self::watson_crick()
    }
}

//! Stem-compressed perfect ranges.
//!
//! A `Stem` (begin, end, stem) packs a maximal run of nested base pairs
//! into one record. The outer `stem` bases on either side pair with each
//! other (position `begin + k` with `end - 1 - k`), and the run cannot be
//! extended by another pair around it. What is left inside is the crown,
//! `[begin + stem, end - stem)`.
//!
//! A stem stands for the family of ranges obtained by peeling `m` pairs,
//! `[begin + m, end - m)` for `0 <= m <= stem`. Hence a range boundary
//! can sit anywhere within the *begin window* `[begin, begin + stem]` or
//! the *end window* `[end - stem, end]`.
//!
//! Stems are ordered by `(begin, begin + stem, end)`, so that `begin`,
//! the inner boundary and `end` all serve as sort keys.
//!

use std::cmp::Ordering;
use std::fmt;

use crate::NAIDX;
use crate::S1KEY;
use crate::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stem {
    begin: NAIDX,
    end: NAIDX,
    stem: NAIDX,
}

impl Stem {
    /// Create a new stem. Panics in debug if the stem is longer than half
    /// of the range.
    pub fn new(begin: NAIDX, end: NAIDX, stem: NAIDX) -> Self {
        debug_assert!(begin < end);
        debug_assert!(2 * stem as usize <= (end - begin) as usize);
        Stem { begin, end, stem }
    }

    pub fn begin(&self) -> NAIDX {
        self.begin
    }

    pub fn end(&self) -> NAIDX {
        self.end
    }

    /// Number of nested pairs that can be peeled off.
    pub fn stem(&self) -> NAIDX {
        self.stem
    }

    /// First index of the crown, upper bound of the begin window.
    pub fn inner_begin(&self) -> NAIDX {
        self.begin + self.stem
    }

    /// End of the crown, lower bound of the end window.
    pub fn inner_end(&self) -> NAIDX {
        self.end - self.stem
    }

    /// The part of the range that is not explained by simple nesting.
    pub fn crown(&self) -> Option<Range> {
        (self.inner_begin() < self.inner_end())
            .then(|| Range::new(self.inner_begin(), self.inner_end()))
    }

    /// The outer range, i.e. no pairs peeled.
    pub fn range(&self) -> Range {
        Range::new(self.begin, self.end)
    }

    /// The range after peeling `m` pairs off the stem.
    pub fn peel(&self, m: NAIDX) -> Range {
        debug_assert!(m <= self.stem);
        Range::new(self.begin + m, self.end - m)
    }

    /// All ranges of the family, outermost first.
    pub fn ranges(&self) -> impl Iterator<Item = Range> + '_ {
        (0..=self.stem)
            .map(move |m| (self.begin + m, self.end - m))
            .take_while(|(b, e)| b < e)
            .map(|(b, e)| Range::new(b, e))
    }

    /// Compact 64-bit key encoding all three fields.
    pub fn key(&self) -> S1KEY {
        ((self.begin as S1KEY) << 32) | ((self.end as S1KEY) << 16) | (self.stem as S1KEY)
    }

    /// Decode a key back into a `Stem`.
    pub fn from_key(key: S1KEY) -> Self {
        Stem::new(
            ((key >> 32) & 0xFFFF) as NAIDX,
            ((key >> 16) & 0xFFFF) as NAIDX,
            (key & 0xFFFF) as NAIDX,
        )
    }

    fn sort_key(&self) -> (NAIDX, NAIDX, NAIDX) {
        (self.begin, self.inner_begin(), self.end)
    }
}

impl Ord for Stem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Stem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{};{})", self.begin, self.end, self.stem)
    }
}

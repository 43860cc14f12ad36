//! Range and RangeSet definitions.
//!
//! A `Range` is a half-open interval `[begin, end)` of sequence indices.
//! Within a closure it means "this substring derives from the nonterminal
//! that the containing index tracks".
//!
//! Both indices are 16-bit (`NAIDX`) and packed into a 32-bit integer
//! key (`R1KEY`) for efficient set and map storage.
//!

use std::fmt;
use nohash_hasher::IntSet;

use crate::NAIDX;
use crate::R1KEY;


/// A half-open range [begin, end) with begin < end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Range {
    begin: NAIDX,
    end: NAIDX,
}

impl Range {
    /// Create a new range [begin, end). Panics in debug if begin >= end.
    pub fn new(begin: NAIDX, end: NAIDX) -> Self {
        debug_assert!(begin < end);
        Range { begin, end }
    }

    /// First index inside the range.
    pub fn begin(&self) -> NAIDX {
        self.begin
    }

    /// First index after the range.
    pub fn end(&self) -> NAIDX {
        self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.begin) as usize
    }

    /// Ranges are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Compact 32-bit key encoding both indices.
    pub fn key(&self) -> R1KEY {
        ((self.begin as R1KEY) << 16) | (self.end as R1KEY)
    }

    /// Decode a key back into a `Range`.
    pub fn from_key(key: R1KEY) -> Self {
        let begin = (key >> 16) as NAIDX;
        let end = (key & 0xFFFF) as NAIDX;
        debug_assert!(begin < end);
        Range { begin, end }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.begin, self.end)
    }
}

/// A set of ranges represented as compact integer keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    ranges: IntSet<R1KEY>,
}

impl RangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ranges contained in the set.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns true if there are no ranges.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Insert a new range; returns true if it was newly inserted.
    pub fn insert(&mut self, range: Range) -> bool {
        self.ranges.insert(range.key())
    }

    /// Check if a range exists in the set.
    pub fn contains(&self, range: &Range) -> bool {
        self.ranges.contains(&range.key())
    }

    /// Iterator over all ranges in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Range> + '_ {
        self.ranges.iter().map(|&k| Range::from_key(k))
    }

    /// Return all ranges as a sorted Vec (for deterministic inspection).
    pub fn to_vec(&self) -> Vec<Range> {
        let mut v: Vec<_> = self.iter().collect();
        v.sort_unstable();
        v
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for range in self.to_vec() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", range)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_key_roundtrip() {
        let r = Range::new(1, 42);
        assert_eq!(r, Range::from_key(r.key()));
        let r = Range::new(0, NAIDX::MAX);
        assert_eq!(r, Range::from_key(r.key()));
    }

    #[test]
    fn test_range_set() {
        let mut set = RangeSet::new();
        assert!(set.insert(Range::new(2, 4)));
        assert!(set.insert(Range::new(0, 2)));
        assert!(!set.insert(Range::new(2, 4)));

        assert_eq!(set.len(), 2);
        assert!(set.contains(&Range::new(0, 2)));
        assert!(!set.contains(&Range::new(0, 4)));
        assert_eq!(set.to_vec(), vec![Range::new(0, 2), Range::new(2, 4)]);
    }

    #[test]
    fn test_display() {
        let mut set = RangeSet::new();
        set.insert(Range::new(3, 5));
        set.insert(Range::new(0, 3));
        assert_eq!(format!("{}", set), "[0,3),[3,5)");
    }
}


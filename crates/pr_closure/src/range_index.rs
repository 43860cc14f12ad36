//! Ordered index of derivable plain ranges.
//!
//! Each range is anchored twice, under its begin (mapping to all known
//! ends) and under its end (mapping to all known begins). The anchors are
//! ordered, so partners can be enumerated by directional scans starting
//! at a position. The index is append-only.
//!

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use pr_structure::NAIDX;
use pr_structure::Range;
use pr_structure::RangeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeIndex {
    facts: RangeSet,
    by_begin: BTreeMap<NAIDX, BTreeSet<NAIDX>>, // begin -> ends
    by_end: BTreeMap<NAIDX, BTreeSet<NAIDX>>,   // end -> begins
}

impl RangeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a derivable range; returns true if it was not known before.
    pub fn insert(&mut self, range: Range) -> bool {
        if !self.facts.insert(range) {
            return false;
        }
        self.by_begin.entry(range.begin()).or_default().insert(range.end());
        self.by_end.entry(range.end()).or_default().insert(range.begin());
        true
    }

    pub fn contains(&self, range: &Range) -> bool {
        self.facts.contains(range)
    }

    /// Number of known ranges.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Ends of all known ranges starting at `begin`, ascending.
    pub fn ends_from(&self, begin: NAIDX) -> impl Iterator<Item = NAIDX> + '_ {
        self.by_begin.get(&begin).into_iter().flatten().copied()
    }

    /// Begins of all known ranges ending at `end`, ascending.
    pub fn begins_to(&self, end: NAIDX) -> impl Iterator<Item = NAIDX> + '_ {
        self.by_end.get(&end).into_iter().flatten().copied()
    }

    /// Ranges with `begin >= position`, by ascending begin.
    pub fn ranges_beginning_near(&self, position: NAIDX) -> impl Iterator<Item = Range> + '_ {
        self.by_begin
            .range(position..)
            .flat_map(|(&b, ends)| ends.iter().map(move |&e| Range::new(b, e)))
    }

    /// Ranges with `end <= position`, by descending end.
    pub fn ranges_ending_near(&self, position: NAIDX) -> impl Iterator<Item = Range> + '_ {
        self.by_end
            .range(..=position)
            .rev()
            .flat_map(|(&e, begins)| begins.iter().rev().map(move |&b| Range::new(b, e)))
    }

    /// All known ranges, sorted.
    pub fn to_vec(&self) -> Vec<Range> {
        self.ranges_beginning_near(0).collect()
    }
}

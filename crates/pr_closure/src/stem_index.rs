//! Ordered index of stem-compressed perfect ranges.
//!
//! A stem `(b, e, k)` stands for a subset of the family of `(b, e, k')`
//! whenever `k <= k'`. Such a stem is rejected on insertion if a stem at
//! least as long is already known for the same outer range. Facts are
//! never removed, so a shorter stem inserted first stays.
//!
//! Every stem is listed under each position of its begin window
//! `[begin, begin + stem]` in the by-begin map, and under each position of
//! its end window `[end - stem, end]` in the by-end map. A window query
//! then only visits stems whose window intersects the query window, once
//! per common position.
//!

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use nohash_hasher::IntMap;
use nohash_hasher::IntSet;

use pr_structure::NAIDX;
use pr_structure::R1KEY;
use pr_structure::S1KEY;
use pr_structure::Range;
use pr_structure::Stem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StemIndex {
    facts: IntSet<S1KEY>,
    longest: IntMap<R1KEY, NAIDX>, // outer range -> longest stem
    by_begin: BTreeMap<NAIDX, BTreeSet<Stem>>, // begin window positions -> stems
    by_end: BTreeMap<NAIDX, BTreeSet<Stem>>, // end window positions -> stems
    max_stem: NAIDX,
}

impl StemIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a stem under its windows. Returns false if the stem is known,
    /// or if its family is covered by a longer stem over the same range.
    pub fn insert(&mut self, stem: Stem) -> bool {
        let outer = stem.range().key();
        if self.longest.get(&outer).is_some_and(|&k| k >= stem.stem()) {
            return false;
        }
        self.facts.insert(stem.key());
        self.longest.insert(outer, stem.stem());
        for p in stem.begin()..=stem.inner_begin() {
            self.by_begin.entry(p).or_default().insert(stem);
        }
        for p in stem.inner_end()..=stem.end() {
            self.by_end.entry(p).or_default().insert(stem);
        }
        self.max_stem = self.max_stem.max(stem.stem());
        true
    }

    pub fn contains(&self, stem: &Stem) -> bool {
        self.facts.contains(&stem.key())
    }

    /// The longest known stem over an outer range.
    pub fn longest(&self, outer: &Range) -> Option<Stem> {
        self.longest
            .get(&outer.key())
            .map(|&k| Stem::new(outer.begin(), outer.end(), k))
    }

    /// Number of known stems.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Longest stem seen so far.
    pub fn max_stem(&self) -> NAIDX {
        self.max_stem
    }

    /// (position, stem) for all begin window positions `>= position`, ascending.
    pub fn stems_beginning_near(
        &self,
        position: NAIDX,
    ) -> impl Iterator<Item = (NAIDX, Stem)> + '_ {
        self.by_begin
            .range(position..)
            .flat_map(|(&k, stems)| stems.iter().map(move |&s| (k, s)))
    }

    /// (position, stem) for all end window positions `<= position`, descending.
    pub fn stems_ending_near(
        &self,
        position: NAIDX,
    ) -> impl Iterator<Item = (NAIDX, Stem)> + '_ {
        self.by_end
            .range(..=position)
            .rev()
            .flat_map(|(&k, stems)| stems.iter().rev().map(move |&s| (k, s)))
    }

    /// Stems whose begin window intersects `[lo, hi]`, each reported once.
    pub fn successors(&self, lo: NAIDX, hi: NAIDX) -> impl Iterator<Item = Stem> + '_ {
        self.stems_beginning_near(lo)
            .take_while(move |&(k, _)| k <= hi)
            .filter(move |&(k, s)| k == s.begin().max(lo))
            .map(|(_, s)| s)
    }

    /// Stems whose end window intersects `[lo, hi]`, each reported once.
    pub fn predecessors(&self, lo: NAIDX, hi: NAIDX) -> impl Iterator<Item = Stem> + '_ {
        self.stems_ending_near(hi)
            .take_while(move |&(k, _)| k >= lo)
            .filter(move |&(k, s)| k == s.end().min(hi))
            .map(|(_, s)| s)
    }

    /// Ends of all perfect ranges `[begin, k)` in any stem family.
    pub fn ends_from(&self, begin: NAIDX) -> BTreeSet<NAIDX> {
        self.successors(begin, begin)
            .map(|s| s.end() - (begin - s.begin()))
            .filter(|&k| k > begin)
            .collect()
    }

    /// Begins of all perfect ranges `[h, end)` in any stem family.
    pub fn begins_to(&self, end: NAIDX) -> BTreeSet<NAIDX> {
        self.predecessors(end, end)
            .map(|s| s.begin() + (s.end() - end))
            .filter(|&h| h < end)
            .collect()
    }

    /// True if `range` is a member of some stem family.
    pub fn covers(&self, range: &Range) -> bool {
        self.ends_from(range.begin()).contains(&range.end())
    }

    /// All known stems, sorted.
    pub fn to_vec(&self) -> Vec<Stem> {
        let mut v: Vec<_> = self.facts.iter().map(|&k| Stem::from_key(k)).collect();
        v.sort_unstable();
        v
    }
}

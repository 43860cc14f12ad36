//! Perfect substrings as seen by the almost perfect closure.

use pr_structure::NAIDX;

use crate::RangeIndex;
use crate::StemIndex;

/// Read-only access to a completed closure of `P`.
///
/// The almost-perfect closure plugs perfect substrings next to almost
/// perfect ones (`A P` and `P A`), so it needs every perfect range
/// anchored at a given position. Both strategies provide that.
pub trait PerfectRanges {
    /// Ends `k` of all perfect ranges `[begin, k)`, ascending.
    fn perfect_ends(&self, begin: NAIDX) -> Vec<NAIDX>;

    /// Begins `h` of all perfect ranges `[h, end)`, ascending.
    fn perfect_begins(&self, end: NAIDX) -> Vec<NAIDX>;
}

impl PerfectRanges for RangeIndex {
    fn perfect_ends(&self, begin: NAIDX) -> Vec<NAIDX> {
        self.ends_from(begin).collect()
    }

    fn perfect_begins(&self, end: NAIDX) -> Vec<NAIDX> {
        self.begins_to(end).collect()
    }
}

impl PerfectRanges for StemIndex {
    fn perfect_ends(&self, begin: NAIDX) -> Vec<NAIDX> {
        self.ends_from(begin).into_iter().collect()
    }

    fn perfect_begins(&self, end: NAIDX) -> Vec<NAIDX> {
        self.begins_to(end).into_iter().collect()
    }
}


//! Base pairing primitives on a fixed sequence.

use pr_structure::ComplementTable;
use pr_structure::NAIDX;
use pr_structure::Range;
use pr_structure::Sequence;
use pr_structure::Stem;

/// A sequence together with the complement table used to pair it.
#[derive(Debug, Clone, Copy)]
pub struct Pairing<'a> {
    sequence: &'a Sequence,
    table: &'a ComplementTable,
}

impl<'a> Pairing<'a> {
    pub fn new(sequence: &'a Sequence, table: &'a ComplementTable) -> Self {
        Self { sequence, table }
    }

    pub fn sequence(&self) -> &'a Sequence {
        self.sequence
    }

    /// Sequence length as an index.
    pub fn len(&self) -> NAIDX {
        self.sequence.end()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// True if the bases at `i` and `j` are complementary.
    pub fn pairs(&self, i: NAIDX, j: NAIDX) -> bool {
        self.table.pairs(self.sequence[i], self.sequence[j])
    }

    /// All `B B'` ranges `[i, i+2)`, left to right.
    pub fn adjacent_pairs(self) -> impl Iterator<Item = Range> + 'a {
        (1..self.len())
            .filter(move |&j| self.pairs(j - 1, j))
            .map(|j| Range::new(j - 1, j + 1))
    }

    /// Surround a range by one complementary pair, if the flanking bases pair.
    pub fn wrap_once(&self, range: Range) -> Option<Range> {
        let (b, e) = (range.begin(), range.end());
        (b > 0 && e < self.len() && self.pairs(b - 1, e))
            .then(|| Range::new(b - 1, e + 1))
    }

    /// Maximal outward complementary wrap.
    ///
    /// Extends `range` by one pair on either side for as long as the
    /// flanking bases pair. The number of added pairs is the stem of the
    /// result, so the input range becomes its crown.
    pub fn wrap(&self, range: Range) -> Stem {
        let (mut u, mut v) = (range.begin(), range.end());
        let mut k = 0;
        while u > 0 && v < self.len() && self.pairs(u - 1, v) {
            u -= 1;
            v += 1;
            k += 1;
        }
        Stem::new(u, v, k)
    }
}

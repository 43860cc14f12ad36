//! Stem-compressed closure of the perfect grammar.
//!
//! Instead of one `Range` per derivable substring, the closure keeps one
//! `Stem` per maximal run of nested pairs. All `B P B'` steps are folded
//! into the stem by the maximal outward wrap, so only the `P P` rule has
//! to be closed over explicitly:
//!
//! A perfect range from the family of `x` (peeling `m` pairs) followed by
//! one from the family of `y` (peeling `n` pairs) meet at a split point
//! `i = x.end - m = y.begin + n`. Hence `i` lies in the end window of `x`
//! and in the begin window of `y`. Every such `i` yields a concatenation
//! `[x.begin + m, y.end - n)`, which is then maximally wrapped into a new
//! stem.
//!
//! Seeds are the maximal wraps of adjacent complementary pairs, so every
//! stem has a non-empty perfect crown and the whole family
//! `[begin + m, end - m)` for `0 <= m <= stem` is perfect. A derived stem
//! whose family is covered by a longer stem over the same outer range is
//! dropped by the index and never expanded.
//!

use log::debug;
use log::trace;
use pr_structure::NAIDX;
use pr_structure::Range;
use pr_structure::Stem;

use crate::ClosureStats;
use crate::FifoSet;
use crate::Pairing;
use crate::StemIndex;

#[derive(Debug, Clone)]
pub struct StemClosure {
    length: NAIDX,
    index: StemIndex,
    stats: ClosureStats,
}

impl StemClosure {
    /// Run the closure to its fixpoint.
    pub fn new(pairing: Pairing<'_>) -> Self {
        let mut index = StemIndex::new();
        let mut queue = FifoSet::new();

        for range in pairing.adjacent_pairs() {
            let stem = pairing.wrap(range);
            if index.insert(stem) {
                queue.insert(stem);
            }
        }
        let seeds = index.len();
        debug!("Stem closure: {} seeds for length {}.", seeds, pairing.len());

        let mut expansions = 0;
        let mut derived = Vec::new();
        while let Some(x) = queue.pop_front() {
            expansions += 1;

            for y in index.successors(x.inner_end(), x.end()) {
                concatenate(pairing, x, y, &mut derived);
            }
            for w in index.predecessors(x.begin(), x.inner_begin()) {
                concatenate(pairing, w, x, &mut derived);
            }

            for new in derived.drain(..) {
                if index.insert(new) {
                    trace!("{} derives {}", x, new);
                    queue.insert(new);
                }
            }
        }

        let stats = ClosureStats { seeds, facts: index.len(), expansions };
        debug!("Stem closure: {} (longest stem {}).", stats, index.max_stem());
        Self { length: pairing.len(), index, stats }
    }

    pub fn index(&self) -> &StemIndex {
        &self.index
    }

    pub fn stats(&self) -> ClosureStats {
        self.stats
    }

    /// True if `[0, n)` is derivable from `P`.
    pub fn is_whole_perfect(&self) -> bool {
        self.length > 0
            && self.length % 2 == 0
            && self.index.longest(&Range::new(0, self.length)).is_some()
    }
}

/// All stems formed by a range of `left` followed by a range of `right`.
fn concatenate(pairing: Pairing<'_>, left: Stem, right: Stem, out: &mut Vec<Stem>) {
    let lo = left.inner_end().max(right.begin());
    let hi = left.end().min(right.inner_begin());
    for i in lo..=hi {
        let m = left.end() - i;
        let n = i - right.begin();
        let (b, e) = (left.begin() + m, right.end() - n);
        if b < i && i < e {
            out.push(pairing.wrap(Range::new(b, e)));
        }
    }
}

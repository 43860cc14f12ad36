//! Closure of the almost perfect grammar.
//!
//! ```text
//! A ::= B C B' | B A B' | C P | P C | A P | P A
//! ```
//!
//! A lone base is treated as a degenerate `A`, which turns the productions
//! involving `C` into instances of `B A B'`, `A P` and `P A`. The closure is
//! therefore seeded with every `[i, i+1)`; as a consequence a sequence of
//! length one is *not* accepted as a whole (it has no derivation from `A`).
//!
//! Perfect substrings are taken from a completed closure of `P`, which is
//! only read.
//!

use log::debug;
use log::trace;
use pr_structure::NAIDX;
use pr_structure::Range;

use crate::ClosureStats;
use crate::FifoSet;
use crate::Pairing;
use crate::PerfectRanges;
use crate::RangeIndex;

#[derive(Debug, Clone)]
pub struct AlmostPerfectClosure {
    length: NAIDX,
    index: RangeIndex,
    stats: ClosureStats,
}

impl AlmostPerfectClosure {
    /// Run the closure to its fixpoint, using `perfect` for `P`.
    pub fn new<P>(pairing: Pairing<'_>, perfect: &P) -> Self
    where
        P: PerfectRanges + ?Sized,
    {
        let mut index = RangeIndex::new();
        let mut queue = FifoSet::new();

        for i in 0..pairing.len() {
            let single = Range::new(i, i + 1);
            index.insert(single);
            queue.insert(single);
        }
        let seeds = index.len();

        let mut expansions = 0;
        let mut derived = Vec::new();
        while let Some(range) = queue.pop_front() {
            expansions += 1;
            let (i, j) = (range.begin(), range.end());

            // B A B'
            derived.extend(pairing.wrap_once(range));
            // A P
            derived.extend(perfect.perfect_ends(j).into_iter().map(|k| Range::new(i, k)));
            // P A
            derived.extend(perfect.perfect_begins(i).into_iter().map(|h| Range::new(h, j)));

            for new in derived.drain(..) {
                if index.insert(new) {
                    trace!("{} derives {}", range, new);
                    queue.insert(new);
                }
            }
        }

        let stats = ClosureStats { seeds, facts: index.len(), expansions };
        debug!("Almost perfect closure: {}.", stats);
        Self { length: pairing.len(), index, stats }
    }

    pub fn index(&self) -> &RangeIndex {
        &self.index
    }

    pub fn stats(&self) -> ClosureStats {
        self.stats
    }

    /// True if `[0, n)` is derivable from `A`.
    pub fn is_whole_almost_perfect(&self) -> bool {
        self.length >= 3
            && self.length % 2 == 1
            && self.index.contains(&Range::new(0, self.length))
    }
}

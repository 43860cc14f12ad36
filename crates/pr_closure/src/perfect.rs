//! Baseline closure of the perfect grammar.
//!
//! ```text
//! P ::= B B' | B P B' | P P
//! ```
//!
//! Every derivable substring is a separate `Range` in a `RangeIndex`.
//! The closure is seeded with all adjacent complementary pairs and then
//! expands each range exactly once by wrapping it in a flanking pair and
//! by concatenating it with every known neighbor on either side.
//!

use log::debug;
use log::trace;
use pr_structure::NAIDX;
use pr_structure::Range;

use crate::ClosureStats;
use crate::FifoSet;
use crate::Pairing;
use crate::RangeIndex;

#[derive(Debug, Clone)]
pub struct PerfectClosure {
    length: NAIDX,
    index: RangeIndex,
    stats: ClosureStats,
}

impl PerfectClosure {
    /// Run the closure to its fixpoint.
    pub fn new(pairing: Pairing<'_>) -> Self {
        let mut index = RangeIndex::new();
        let mut queue = FifoSet::new();

        for range in pairing.adjacent_pairs() {
            index.insert(range);
            queue.insert(range);
        }
        let seeds = index.len();
        debug!("Baseline closure: {} seeds for length {}.", seeds, pairing.len());

        let mut expansions = 0;
        let mut derived = Vec::new();
        while let Some(range) = queue.pop_front() {
            expansions += 1;
            let (i, j) = (range.begin(), range.end());

            // B P B'
            derived.extend(pairing.wrap_once(range));
            // P P, with range as the first P.
            derived.extend(index.ends_from(j).map(|k| Range::new(i, k)));
            // P P, with range as the second P.
            derived.extend(index.begins_to(i).map(|h| Range::new(h, j)));

            for new in derived.drain(..) {
                if index.insert(new) {
                    trace!("{} derives {}", range, new);
                    queue.insert(new);
                }
            }
        }

        let stats = ClosureStats { seeds, facts: index.len(), expansions };
        debug!("Baseline closure: {}.", stats);
        Self { length: pairing.len(), index, stats }
    }

    pub fn index(&self) -> &RangeIndex {
        &self.index
    }

    pub fn stats(&self) -> ClosureStats {
        self.stats
    }

    /// True if `[0, n)` is derivable from `P`.
    pub fn is_whole_perfect(&self) -> bool {
        self.length > 0
            && self.length % 2 == 0
            && self.index.contains(&Range::new(0, self.length))
    }
}

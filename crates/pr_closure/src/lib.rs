//! The pr_closure crate.
//!
//! Decides membership of a sequence in the grammars of perfect
//! and almost perfect base pairing:
//!
//! ```text
//! P ::= B B' | B P B' | P P
//! A ::= B C B' | B A B' | C P | P C | A P | P A
//! ```
//!
//! Provides the building blocks:
//!  - the dedup worklist (`FifoSet`),
//!  - ordered range indices (`RangeIndex`, `StemIndex`),
//!  - closures for `P` (baseline and stem-compressed) and for `A`.
//!
//! And the entry point `classify()`.
//!

mod stats;
mod fifo_set;
mod pairing;
mod range_index;
mod stem_index;
mod perfect_ranges;
mod perfect;
mod stem_closure;
mod almost;
mod classify;

pub use stats::*;
pub use fifo_set::*;
pub use pairing::*;
pub use range_index::*;
pub use stem_index::*;
pub use perfect_ranges::*;
pub use perfect::*;
pub use stem_closure::*;
pub use almost::*;
pub use classify::*;


//! Closure statistics.

use std::fmt;

/// Counters collected while running a closure to its fixpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosureStats {
    /// Facts inserted before the first expansion.
    pub seeds: usize,
    /// Distinct facts in the final index.
    pub facts: usize,
    /// Facts popped from the worklist and expanded.
    pub expansions: usize,
}

impl fmt::Display for ClosureStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} seeds, {} facts, {} expansions", self.seeds, self.facts, self.expansions)
    }
}

//! A FIFO worklist with set semantics.
//!
//! Every distinct item is scheduled at most once during the lifetime of
//! the worklist, also after it has been popped again. That is what makes
//! the closure loops terminate: the number of distinct facts is finite.
//!

use std::collections::VecDeque;
use std::hash::Hash;
use ahash::AHashSet;

#[derive(Debug, Clone)]
pub struct FifoSet<T> {
    seen: AHashSet<T>,
    order: VecDeque<T>,
}

impl<T> Default for FifoSet<T> {
    fn default() -> Self {
        Self {
            seen: AHashSet::default(),
            order: VecDeque::new(),
        }
    }
}

impl<T: Copy + Eq + Hash> FifoSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an item; returns false if it was ever scheduled before.
    pub fn insert(&mut self, item: T) -> bool {
        if !self.seen.insert(item) {
            return false;
        }
        self.order.push_back(item);
        true
    }

    /// Oldest pending item, `None` once the worklist is drained.
    pub fn pop_front(&mut self) -> Option<T> {
        self.order.pop_front()
    }

    /// True if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of pending items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Number of items ever scheduled.
    pub fn scheduled(&self) -> usize {
        self.seen.len()
    }
}

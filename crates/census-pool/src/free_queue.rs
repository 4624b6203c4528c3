//! FIFO store of freed slot indices.
//!
//! [`FreeQueue`] is the default [`Recycler`] for a population. Indices come
//! back out in the order they went in, so the slot that has been free the
//! longest is reused first.

use std::collections::vec_deque::{self, VecDeque};
use std::collections::TryReserveError;

use census_core::Recycler;

/// First-in-first-out queue of freed slot indices.
#[derive(Clone, Debug, Default)]
pub struct FreeQueue {
    indices: VecDeque<u32>,
}

impl FreeQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            indices: VecDeque::new(),
        }
    }

    /// Create an empty queue with room for `capacity` indices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: VecDeque::with_capacity(capacity),
        }
    }

    /// Reserve room for `additional` more indices, reporting allocation
    /// failure instead of aborting.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.indices.try_reserve(additional)
    }

    /// Append an index at the back.
    pub fn push(&mut self, index: u32) {
        self.indices.push_back(index);
    }

    /// Remove and return the oldest index.
    pub fn pop(&mut self) -> Option<u32> {
        self.indices.pop_front()
    }

    /// The oldest index, without removing it.
    pub fn peek(&self) -> Option<u32> {
        self.indices.front().copied()
    }

    /// Number of stored indices.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Remove all indices, keeping the allocation.
    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Iterate over stored indices, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter().copied()
    }

    /// Remove and yield every stored index, oldest first.
    ///
    /// Dropping the iterator early still empties the queue.
    pub fn drain(&mut self) -> vec_deque::Drain<'_, u32> {
        self.indices.drain(..)
    }
}

impl Recycler for FreeQueue {
    fn push(&mut self, index: u32) {
        FreeQueue::push(self, index);
    }

    fn pop(&mut self) -> Option<u32> {
        FreeQueue::pop(self)
    }

    fn len(&self) -> usize {
        FreeQueue::len(self)
    }
}

//! Test utilities and reference models for census development.
//!
//! Provides a recording implementation of [`Recycler`], a
//! [`ModelPopulation`] oracle to check the real allocator against, and
//! the [`ops`] module with a proptest strategy over allocator operations.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod ops;

use std::collections::VecDeque;

use census_core::{Member, Recycler};

pub use ops::{pop_ops, PopOp};

/// One call observed by a [`RecordingRecycler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecyclerEvent {
    Push(u32),
    Pop(Option<u32>),
}

/// FIFO [`Recycler`] that logs every push and pop.
///
/// Lets tests assert on exactly how an allocator drives its recycler,
/// e.g. that it never pops while the recycler is empty.
#[derive(Debug, Default)]
pub struct RecordingRecycler {
    queue: VecDeque<u32>,
    events: Vec<RecyclerEvent>,
}

impl RecordingRecycler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call so far, in order.
    pub fn events(&self) -> &[RecyclerEvent] {
        &self.events
    }

    /// Indices currently queued, oldest first.
    pub fn queued(&self) -> Vec<u32> {
        self.queue.iter().copied().collect()
    }
}

impl Recycler for RecordingRecycler {
    fn push(&mut self, index: u32) {
        self.events.push(RecyclerEvent::Push(index));
        self.queue.push_back(index);
    }

    fn pop(&mut self) -> Option<u32> {
        let index = self.queue.pop_front();
        self.events.push(RecyclerEvent::Pop(index));
        index
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Straightforward reference model of a population.
///
/// Tracks liveness per slot explicitly and keeps freed indices in a plain
/// `Vec` scanned from the front. Slow, but with no shared code paths with
/// the real allocator.
#[derive(Debug, Default)]
pub struct ModelPopulation {
    slots: Vec<ModelSlot>,
    freed: Vec<u32>,
}

#[derive(Clone, Copy, Debug)]
struct ModelSlot {
    generation: u32,
    live: bool,
}

impl ModelPopulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<T>(&mut self) -> Member<T> {
        let index = if self.freed.is_empty() {
            self.slots.push(ModelSlot {
                generation: 1,
                live: false,
            });
            self.slots.len() as u32 - 1
        } else {
            self.freed.remove(0)
        };
        let slot = &mut self.slots[index as usize];
        slot.live = true;
        Member::new(index, slot.generation)
    }

    pub fn remove<T>(&mut self, member: Member<T>) -> bool {
        if !self.has(member) {
            return false;
        }
        let index = member.index();
        let slot = &mut self.slots[index as usize];
        slot.live = false;
        slot.generation += 1;
        self.freed.push(index);
        true
    }

    pub fn has<T>(&self, member: Member<T>) -> bool {
        self.slots
            .get(member.index() as usize)
            .is_some_and(|s| s.live && s.generation == member.generation())
    }

    pub fn alive(&self) -> u32 {
        self.slots.iter().filter(|s| s.live).count() as u32
    }

    pub fn capacity(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Freed indices awaiting reuse, oldest first.
    pub fn freed(&self) -> &[u32] {
        &self.freed
    }
}

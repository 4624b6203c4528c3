//! The recycler seam consumed by the allocator.

/// Store of freed slot indices awaiting reuse.
///
/// Implemented by `census-pool`'s `FreeQueue`. The allocator relies only
/// on the ordering contract below; it never inspects the stored indices
/// beyond what `pop` hands back.
pub trait Recycler {
    /// Enqueue a freed slot index.
    fn push(&mut self, index: u32);

    /// Dequeue the oldest freed index, or `None` when empty.
    ///
    /// Implementations must be FIFO: a population reuses the slot that has
    /// been free the longest, spreading generation growth across slots.
    fn pop(&mut self) -> Option<u32>;

    /// Number of indices currently held.
    fn len(&self) -> usize;

    /// Whether no indices are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

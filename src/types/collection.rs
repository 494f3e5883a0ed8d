//! The minimal contract shared by container types.

/// Size query, emptiness query and clear.
pub trait Collection {
    /// Number of elements held by the container.
    fn count(&self) -> usize;

    /// Whether the container holds nothing of interest.
    fn is_empty(&self) -> bool;

    /// Drop all contents.
    fn clear(&mut self);
}

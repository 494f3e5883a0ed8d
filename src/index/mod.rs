//! Index structures for fast lookup. Each index is independent and incrementally updateable.

pub mod node_index;
pub mod reverse_index;

pub use node_index::NodeIndex;
pub use reverse_index::ReverseIndex;

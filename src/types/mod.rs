//! All data types for the directed graph library.

pub mod collection;
pub mod edge;
pub mod error;
pub mod node;

pub use collection::Collection;
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};

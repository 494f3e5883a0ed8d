//! In-memory graph operations, the core data structure.

mod arena;
pub mod builder;
pub mod directed_graph;
pub mod iter;

pub use builder::GraphBuilder;
pub use directed_graph::{DirectedGraph, GraphStats};
pub use iter::{AdjacencyRow, Iter, Neighbors, Nodes};

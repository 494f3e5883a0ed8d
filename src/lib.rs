//! DirectedGraph: an in-memory directed graph container.
//!
//! Callers create [`Node`] handles around arbitrary payloads, register them
//! with a [`DirectedGraph`], then add, query and remove weighted edges between
//! registered nodes. Node equality is identity: two nodes with equal payloads
//! are still distinct vertices.
//!
//! ```
//! use directed_graph::{DirectedGraph, Node};
//!
//! let a = Node::new("a");
//! let b = Node::new("b");
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_node(&a);
//! graph.add_node(&b);
//! graph.add_edge(&a, &b, 5).unwrap();
//!
//! assert!(graph.is_adjacent(&a, &b).unwrap());
//! assert!(!graph.is_adjacent(&b, &a).unwrap());
//! assert_eq!(graph.edge_weight(&a, &b).unwrap(), &5);
//! ```

pub mod config;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::GraphConfig;
pub use graph::{AdjacencyRow, DirectedGraph, GraphBuilder, GraphStats, Iter, Neighbors, Nodes};
pub use index::{NodeIndex, ReverseIndex};
pub use types::{Collection, Edge, GraphError, GraphResult, Node, NodeId};

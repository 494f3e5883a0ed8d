//! Graph construction settings.

use serde::{Deserialize, Serialize};

/// Settings applied when a [`DirectedGraph`](crate::DirectedGraph) is created.
///
/// The default accepts self-edges and places no bound on out-degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Number of nodes to reserve space for up front.
    pub capacity: usize,
    /// Whether an edge may start and end at the same node.
    pub allow_self_loops: bool,
    /// Upper bound on the number of out-edges per node.
    pub max_out_degree: Option<usize>,
}

impl GraphConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve space for `capacity` nodes.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Accept or reject self-edges.
    pub fn allow_self_loops(mut self, allow: bool) -> Self {
        self.allow_self_loops = allow;
        self
    }

    /// Bound the out-degree of every node.
    pub fn max_out_degree(mut self, max: usize) -> Self {
        self.max_out_degree = Some(max);
        self
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            capacity: 0,
            allow_self_loops: true,
            max_out_degree: None,
        }
    }
}

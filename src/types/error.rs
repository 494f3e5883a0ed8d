//! Error types for the directed graph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the directed graph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Node is not registered with the graph.
    #[error("Node {0} not found in graph")]
    NodeNotFound(NodeId),

    /// No edge exists between the given nodes.
    #[error("No edge from node {from} to node {to}")]
    EdgeNotFound { from: NodeId, to: NodeId },

    /// An edge between the given nodes already exists.
    #[error("Edge from node {from} to node {to} already exists")]
    DuplicateEdge { from: NodeId, to: NodeId },

    /// Self-edge rejected by the graph configuration.
    #[error("Self-edge not allowed on node {0}")]
    SelfLoop(NodeId),

    /// Out-degree limit from the graph configuration reached.
    #[error("Maximum edges per node exceeded on node {node}: {max}")]
    TooManyEdges { node: NodeId, max: usize },

    /// Registry, rows and indexes disagree with each other.
    #[error("Inconsistent graph state: {0}")]
    InconsistentState(String),
}

impl GraphError {
    /// Whether this error reports a missing node or a missing edge.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound(_) | Self::EdgeNotFound { .. })
    }

    /// Build an [`GraphError::InconsistentState`] and report it through the log facade.
    pub(crate) fn inconsistent(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        log::error!("graph invariant violated: {}", detail);
        Self::InconsistentState(detail)
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

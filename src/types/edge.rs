//! The edge record stored in a node's adjacency row.

use std::fmt;

use super::Node;

/// A directed edge as seen from its start node: the end node plus the edge weight.
///
/// Target and weight live in one record, so a weight can never drift away
/// from the neighbor it belongs to.
pub struct Edge<T, W> {
    pub(crate) target: Node<T>,
    pub(crate) weight: W,
}

impl<T, W> Edge<T, W> {
    pub(crate) fn new(target: Node<T>, weight: W) -> Self {
        Self { target, weight }
    }

    /// The end node of this edge.
    pub fn target(&self) -> &Node<T> {
        &self.target
    }

    /// The edge weight.
    pub fn weight(&self) -> &W {
        &self.weight
    }

    /// Split into end node and weight.
    pub fn into_parts(self) -> (Node<T>, W) {
        (self.target, self.weight)
    }
}

impl<T, W: Clone> Clone for Edge<T, W> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            weight: self.weight.clone(),
        }
    }
}

impl<T, W: fmt::Debug> fmt::Debug for Edge<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("target", &self.target.id())
            .field("weight", &self.weight)
            .finish()
    }
}

//! Index by node identity: maps each NodeId to its arena slot.

use std::collections::HashMap;

use crate::types::NodeId;

/// Maps each registered NodeId to the arena slot holding its row.
#[derive(Debug, Clone, Default)]
pub struct NodeIndex {
    index: HashMap<NodeId, usize>,
}

impl NodeIndex {
    /// Create a new, empty node index.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
        }
    }

    /// Create an index with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Slot of a registered node.
    pub fn get(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Whether the node is registered.
    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Record the slot of a node, returning the previous slot if any.
    pub fn insert(&mut self, id: NodeId, slot: usize) -> Option<usize> {
        self.index.insert(id, slot)
    }

    /// Forget a node.
    pub fn remove(&mut self, id: NodeId) -> Option<usize> {
        self.index.remove(&id)
    }

    /// Clear the index.
    pub fn clear(&mut self) {
        self.index.clear();
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

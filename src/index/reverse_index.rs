//! Inbound adjacency: maps each target node to the nodes with an edge into it.

use std::collections::HashMap;

use crate::types::NodeId;

/// Maps target NodeId -> source NodeIds, in edge creation order.
#[derive(Debug, Clone, Default)]
pub struct ReverseIndex {
    index: HashMap<NodeId, Vec<NodeId>>,
    entries: usize,
}

impl ReverseIndex {
    /// Create a new, empty reverse index.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: 0,
        }
    }

    /// Sources with an edge into `target`.
    pub fn sources(&self, target: NodeId) -> &[NodeId] {
        self.index
            .get(&target)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the edge `source -> target` is recorded.
    pub fn contains(&self, target: NodeId, source: NodeId) -> bool {
        self.sources(target).contains(&source)
    }

    /// Record the edge `source -> target`.
    pub fn insert(&mut self, target: NodeId, source: NodeId) {
        self.index.entry(target).or_default().push(source);
        self.entries += 1;
    }

    /// Forget the edge `source -> target`. Returns whether it was recorded.
    pub fn remove(&mut self, target: NodeId, source: NodeId) -> bool {
        let Some(list) = self.index.get_mut(&target) else {
            return false;
        };
        let Some(pos) = list.iter().position(|&s| s == source) else {
            return false;
        };
        list.remove(pos);
        if list.is_empty() {
            self.index.remove(&target);
        }
        self.entries -= 1;
        true
    }

    /// Forget every edge into `target`, returning their sources.
    pub fn remove_target(&mut self, target: NodeId) -> Vec<NodeId> {
        let removed = self.index.remove(&target).unwrap_or_default();
        self.entries -= removed.len();
        removed
    }

    /// Number of inbound edges recorded for `target`.
    pub fn in_degree(&self, target: NodeId) -> usize {
        self.sources(target).len()
    }

    /// Largest in-degree over all targets.
    pub fn max_in_degree(&self) -> usize {
        self.index.values().map(|v| v.len()).max().unwrap_or(0)
    }

    /// Clear the index.
    pub fn clear(&mut self) {
        self.index.clear();
        self.entries = 0;
    }

    /// Total number of recorded edges.
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}

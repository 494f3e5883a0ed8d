//! Core graph structure: node registry plus per-node adjacency rows with weights.

use std::fmt;

use serde::Serialize;

use crate::config::GraphConfig;
use crate::index::{NodeIndex, ReverseIndex};
use crate::types::{Collection, Edge, GraphError, GraphResult, Node, NodeId};

use super::arena::Arena;
use super::iter::{AdjacencyRow, Iter, Neighbors, Nodes};

/// A registered node together with its out-edges.
pub(crate) struct Row<T, W> {
    pub(crate) node: Node<T>,
    pub(crate) edges: Vec<Edge<T, W>>,
}

impl<T, W> Row<T, W> {
    fn new(node: Node<T>) -> Self {
        Self {
            node,
            edges: Vec::new(),
        }
    }

    /// Position of the edge pointing at `target`.
    fn position_of(&self, target: NodeId) -> Option<usize> {
        self.edges.iter().position(|e| e.target.id() == target)
    }
}

impl<T, W: Clone> Clone for Row<T, W> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
            edges: self.edges.clone(),
        }
    }
}

/// Summary figures for a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub self_loops: usize,
    pub max_out_degree: usize,
    pub max_in_degree: usize,
    /// Nodes with neither inbound nor outbound edges.
    pub isolated_nodes: usize,
}

/// A directed graph over caller-supplied [`Node`] handles.
///
/// Nodes are registered with [`add_node`](Self::add_node); edges may only
/// connect registered nodes, at most one per ordered pair. Removing a node
/// removes every edge that starts or ends at it.
///
/// All lookups go through identity indexes, so the cost of an operation does
/// not depend on where a node sits in registration order.
pub struct DirectedGraph<T, W> {
    /// Rows in stable slots, linked in registration order.
    rows: Arena<Row<T, W>>,
    /// NodeId -> slot.
    node_index: NodeIndex,
    /// Target -> sources.
    reverse_index: ReverseIndex,
    edge_count: usize,
    config: GraphConfig,
}

impl<T, W> DirectedGraph<T, W> {
    /// Create a new empty graph with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(GraphConfig::default().capacity(capacity))
    }

    /// Create a new empty graph with the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            rows: Arena::with_capacity(config.capacity),
            node_index: NodeIndex::with_capacity(config.capacity),
            reverse_index: ReverseIndex::new(),
            edge_count: 0,
            config,
        }
    }

    /// The configuration this graph was created with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True when the graph has no nodes or no edges.
    pub fn is_empty(&self) -> bool {
        self.node_count() == 0 || self.edge_count() == 0
    }

    /// Drop all nodes and edges.
    pub fn clear(&mut self) {
        log::debug!(
            "clearing graph: {} nodes, {} edges",
            self.node_count(),
            self.edge_count
        );
        self.rows.clear();
        self.node_index.clear();
        self.reverse_index.clear();
        self.edge_count = 0;
    }

    /// Register a node. Returns `false` (and changes nothing) if it was already registered.
    pub fn add_node(&mut self, node: &Node<T>) -> bool {
        if self.node_index.contains(node.id()) {
            return false;
        }
        let slot = self.rows.insert(Row::new(node.clone()));
        self.node_index.insert(node.id(), slot);
        log::debug!("registered node {} at slot {}", node.id(), slot);
        true
    }

    /// Whether the node is registered.
    pub fn contains(&self, node: &Node<T>) -> bool {
        self.node_index.contains(node.id())
    }

    /// Registered nodes in registration order.
    pub fn nodes(&self) -> Nodes<'_, T, W> {
        Nodes::new(self.rows.iter())
    }

    /// `(node, row)` pairs in registration order.
    pub fn iter(&self) -> Iter<'_, T, W> {
        Iter::new(self.rows.iter())
    }

    /// Add the edge `from -> to`.
    pub fn add_edge(&mut self, from: &Node<T>, to: &Node<T>, weight: W) -> GraphResult<()> {
        let slot = self.slot_of(from)?;
        self.slot_of(to)?;

        if from == to && !self.config.allow_self_loops {
            return Err(GraphError::SelfLoop(from.id()));
        }

        let row = self.row(slot)?;
        if row.position_of(to.id()).is_some() {
            return Err(GraphError::DuplicateEdge {
                from: from.id(),
                to: to.id(),
            });
        }
        if let Some(max) = self.config.max_out_degree {
            if row.edges.len() >= max {
                return Err(GraphError::TooManyEdges {
                    node: from.id(),
                    max,
                });
            }
        }

        self.row_mut(slot)?.edges.push(Edge::new(to.clone(), weight));
        self.reverse_index.insert(to.id(), from.id());
        self.edge_count += 1;
        log::trace!("added edge {} -> {}", from.id(), to.id());
        Ok(())
    }

    /// Add the edge `from -> to` carrying the default weight.
    pub fn connect(&mut self, from: &Node<T>, to: &Node<T>) -> GraphResult<()>
    where
        W: Default,
    {
        self.add_edge(from, to, W::default())
    }

    /// Whether the edge `from -> to` exists. `from` must be registered; `to` need not be.
    pub fn is_adjacent(&self, from: &Node<T>, to: &Node<T>) -> GraphResult<bool> {
        let slot = self.slot_of(from)?;
        Ok(self.row(slot)?.position_of(to.id()).is_some())
    }

    /// `(neighbor, weight)` pairs for the out-edges of `node`, in edge creation order.
    pub fn neighbors(&self, node: &Node<T>) -> GraphResult<Neighbors<'_, T, W>> {
        Ok(self.adjacency(node)?.iter())
    }

    /// The out-edge row of `node`.
    pub fn adjacency(&self, node: &Node<T>) -> GraphResult<AdjacencyRow<'_, T, W>> {
        let slot = self.slot_of(node)?;
        Ok(AdjacencyRow::new(&self.row(slot)?.edges))
    }

    /// `(source, weight)` pairs for the edges pointing at `node`.
    pub fn edges_to(&self, node: &Node<T>) -> GraphResult<Vec<(&Node<T>, &W)>> {
        self.slot_of(node)?;
        let id = node.id();
        let mut inbound = Vec::with_capacity(self.reverse_index.in_degree(id));
        for &source in self.reverse_index.sources(id) {
            let (slot, pos) = self.inbound_edge(source, id)?;
            let row = self.row(slot)?;
            inbound.push((&row.node, &row.edges[pos].weight));
        }
        Ok(inbound)
    }

    /// Number of out-edges of `node`.
    pub fn out_degree(&self, node: &Node<T>) -> GraphResult<usize> {
        let slot = self.slot_of(node)?;
        Ok(self.row(slot)?.edges.len())
    }

    /// Number of edges pointing at `node`.
    pub fn in_degree(&self, node: &Node<T>) -> GraphResult<usize> {
        self.slot_of(node)?;
        Ok(self.reverse_index.in_degree(node.id()))
    }

    /// Unregister a node, dropping its out-edges and every edge pointing at it.
    ///
    /// Returns the registry's handle to the node.
    pub fn remove_node(&mut self, node: &Node<T>) -> GraphResult<Node<T>> {
        let id = node.id();
        let slot = self.slot_of(node)?;
        let row = self.row(slot)?;

        if self.reverse_index.len() != self.edge_count {
            return Err(GraphError::inconsistent(format!(
                "reverse index holds {} edges, graph counts {}",
                self.reverse_index.len(),
                self.edge_count
            )));
        }
        for edge in &row.edges {
            if !self.reverse_index.contains(edge.target.id(), id) {
                return Err(GraphError::inconsistent(format!(
                    "edge {} -> {} missing from reverse index",
                    id,
                    edge.target.id()
                )));
            }
        }

        // Locate every inbound edge before touching anything.
        let mut inbound: Vec<(usize, usize)> = Vec::new();
        for &source in self.reverse_index.sources(id) {
            if source == id {
                continue;
            }
            let (source_slot, pos) = self.inbound_edge(source, id)?;
            if inbound.iter().any(|&(s, _)| s == source_slot) {
                return Err(GraphError::inconsistent(format!(
                    "reverse index lists {} -> {} twice",
                    source, id
                )));
            }
            inbound.push((source_slot, pos));
        }

        let removed = self.rows.remove(slot).ok_or_else(|| {
            GraphError::inconsistent(format!("slot {} of node {} is vacant", slot, id))
        })?;
        self.node_index.remove(id);

        for (source_slot, pos) in &inbound {
            if let Some(row) = self.rows.get_mut(*source_slot) {
                row.edges.remove(*pos);
            }
        }
        for edge in &removed.edges {
            self.reverse_index.remove(edge.target.id(), id);
        }
        self.reverse_index.remove_target(id);

        let dropped = removed.edges.len() + inbound.len();
        self.edge_count -= dropped;
        log::debug!("removed node {} and {} edges", id, dropped);
        Ok(removed.node)
    }

    /// Remove the edge `from -> to`, returning its weight.
    pub fn remove_edge(&mut self, from: &Node<T>, to: &Node<T>) -> GraphResult<W> {
        let (slot, pos) = self.edge_position(from, to)?;
        if !self.reverse_index.contains(to.id(), from.id()) {
            return Err(GraphError::inconsistent(format!(
                "edge {} -> {} missing from reverse index",
                from.id(),
                to.id()
            )));
        }

        let edge = self.row_mut(slot)?.edges.remove(pos);
        self.reverse_index.remove(to.id(), from.id());
        self.edge_count -= 1;
        log::trace!("removed edge {} -> {}", from.id(), to.id());
        Ok(edge.weight)
    }

    /// Weight of the edge `from -> to`.
    pub fn edge_weight(&self, from: &Node<T>, to: &Node<T>) -> GraphResult<&W> {
        let (slot, pos) = self.edge_position(from, to)?;
        Ok(&self.row(slot)?.edges[pos].weight)
    }

    /// Mutable weight of the edge `from -> to`.
    pub fn edge_weight_mut(&mut self, from: &Node<T>, to: &Node<T>) -> GraphResult<&mut W> {
        let (slot, pos) = self.edge_position(from, to)?;
        Ok(&mut self.row_mut(slot)?.edges[pos].weight)
    }

    /// Replace the weight of the edge `from -> to`, returning the previous weight.
    pub fn set_edge_weight(&mut self, from: &Node<T>, to: &Node<T>, weight: W) -> GraphResult<W> {
        let current = self.edge_weight_mut(from, to)?;
        log::trace!("updated weight of edge {} -> {}", from.id(), to.id());
        Ok(std::mem::replace(current, weight))
    }

    /// Check that registry, rows and indexes agree.
    ///
    /// Every edge must end at a registered node, no ordered pair may have two
    /// edges, and the reverse index must mirror the rows exactly.
    pub fn verify_integrity(&self) -> GraphResult<()> {
        if self.node_index.len() != self.rows.len() {
            return Err(GraphError::inconsistent(format!(
                "node index holds {} entries for {} rows",
                self.node_index.len(),
                self.rows.len()
            )));
        }

        let mut edges = 0;
        for (slot, row) in self.rows.iter() {
            let source = row.node.id();
            if self.node_index.get(source) != Some(slot) {
                return Err(GraphError::inconsistent(format!(
                    "node {} stored at slot {} but indexed elsewhere",
                    source, slot
                )));
            }
            for (pos, edge) in row.edges.iter().enumerate() {
                let target = edge.target.id();
                if !self.node_index.contains(target) {
                    return Err(GraphError::inconsistent(format!(
                        "edge {} -> {} ends at an unregistered node",
                        source, target
                    )));
                }
                if row.position_of(target) != Some(pos) {
                    return Err(GraphError::inconsistent(format!(
                        "parallel edges {} -> {}",
                        source, target
                    )));
                }
                if !self.reverse_index.contains(target, source) {
                    return Err(GraphError::inconsistent(format!(
                        "edge {} -> {} missing from reverse index",
                        source, target
                    )));
                }
            }
            edges += row.edges.len();
        }

        if edges != self.edge_count || self.reverse_index.len() != self.edge_count {
            return Err(GraphError::inconsistent(format!(
                "edge count {} disagrees with rows ({}) or reverse index ({})",
                self.edge_count,
                edges,
                self.reverse_index.len()
            )));
        }
        Ok(())
    }

    /// Summary figures for the current state.
    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            nodes: self.node_count(),
            edges: self.edge_count,
            max_in_degree: self.reverse_index.max_in_degree(),
            ..GraphStats::default()
        };
        for (_, row) in self.rows.iter() {
            let id = row.node.id();
            stats.max_out_degree = stats.max_out_degree.max(row.edges.len());
            if row.position_of(id).is_some() {
                stats.self_loops += 1;
            }
            if row.edges.is_empty() && self.reverse_index.in_degree(id) == 0 {
                stats.isolated_nodes += 1;
            }
        }
        stats
    }

    fn slot_of(&self, node: &Node<T>) -> GraphResult<usize> {
        self.node_index
            .get(node.id())
            .ok_or(GraphError::NodeNotFound(node.id()))
    }

    fn row(&self, slot: usize) -> GraphResult<&Row<T, W>> {
        self.rows
            .get(slot)
            .ok_or_else(|| GraphError::inconsistent(format!("indexed slot {} is vacant", slot)))
    }

    fn row_mut(&mut self, slot: usize) -> GraphResult<&mut Row<T, W>> {
        self.rows
            .get_mut(slot)
            .ok_or_else(|| GraphError::inconsistent(format!("indexed slot {} is vacant", slot)))
    }

    /// Slot of `source` and position of its edge to `target`, as claimed by the reverse index.
    fn inbound_edge(&self, source: NodeId, target: NodeId) -> GraphResult<(usize, usize)> {
        let slot = self.node_index.get(source).ok_or_else(|| {
            GraphError::inconsistent(format!(
                "inbound source {} of node {} is not registered",
                source, target
            ))
        })?;
        let pos = self.row(slot)?.position_of(target).ok_or_else(|| {
            GraphError::inconsistent(format!(
                "reverse index lists {} -> {} but the row has no such edge",
                source, target
            ))
        })?;
        Ok((slot, pos))
    }

    /// Slot of `from` and position of its edge to `to`.
    fn edge_position(&self, from: &Node<T>, to: &Node<T>) -> GraphResult<(usize, usize)> {
        let slot = self.slot_of(from)?;
        self.slot_of(to)?;
        let pos = self
            .row(slot)?
            .position_of(to.id())
            .ok_or(GraphError::EdgeNotFound {
                from: from.id(),
                to: to.id(),
            })?;
        Ok((slot, pos))
    }
}

impl<T, W> Default for DirectedGraph<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W: Clone> Clone for DirectedGraph<T, W> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            node_index: self.node_index.clone(),
            reverse_index: self.reverse_index.clone(),
            edge_count: self.edge_count,
            config: self.config,
        }
    }
}

impl<T: fmt::Debug, W: fmt::Debug> fmt::Debug for DirectedGraph<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(node, row)| (node, row.edges())))
            .finish()
    }
}

impl<T, W> Collection for DirectedGraph<T, W> {
    fn count(&self) -> usize {
        self.node_count()
    }

    fn is_empty(&self) -> bool {
        DirectedGraph::is_empty(self)
    }

    fn clear(&mut self) {
        DirectedGraph::clear(self)
    }
}

impl<'a, T, W> IntoIterator for &'a DirectedGraph<T, W> {
    type Item = (&'a Node<T>, AdjacencyRow<'a, T, W>);
    type IntoIter = Iter<'a, T, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

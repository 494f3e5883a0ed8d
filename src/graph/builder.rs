//! Fluent API for building DirectedGraph instances.

use crate::config::GraphConfig;
use crate::types::{GraphResult, Node};

use super::DirectedGraph;

/// Fluent builder for constructing a DirectedGraph.
///
/// Nodes and edges are recorded as given and applied in order by
/// [`build`](Self::build); an edge registers its endpoints if they were not
/// added explicitly.
pub struct GraphBuilder<T, W> {
    config: GraphConfig,
    nodes: Vec<Node<T>>,
    edges: Vec<(Node<T>, Node<T>, W)>,
}

impl<T, W> GraphBuilder<T, W> {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create a new builder with a specific configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Register a node.
    pub fn node(&mut self, node: &Node<T>) -> &mut Self {
        self.nodes.push(node.clone());
        self
    }

    /// Register several nodes.
    pub fn nodes<'a, I>(&mut self, nodes: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Node<T>>,
        T: 'a,
    {
        self.nodes.extend(nodes.into_iter().cloned());
        self
    }

    /// Add an edge between two nodes.
    pub fn edge(&mut self, from: &Node<T>, to: &Node<T>, weight: W) -> &mut Self {
        self.edges.push((from.clone(), to.clone(), weight));
        self
    }

    /// Build the final DirectedGraph.
    pub fn build(self) -> GraphResult<DirectedGraph<T, W>> {
        let mut graph = DirectedGraph::with_config(self.config);
        for node in &self.nodes {
            graph.add_node(node);
        }
        for (from, to, weight) in self.edges {
            graph.add_node(&from);
            graph.add_node(&to);
            graph.add_edge(&from, &to, weight)?;
        }
        log::debug!(
            "built graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl<T, W> Default for GraphBuilder<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

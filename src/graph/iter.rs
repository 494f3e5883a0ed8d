//! Borrowing views over a graph: rows, neighbor lists and node iteration.

use std::iter::FusedIterator;
use std::slice;

use crate::types::{Edge, Node};

use super::arena::ArenaIter;
use super::directed_graph::Row;

/// The out-edges of one node, in edge creation order.
///
/// `targets()` is the adjacency row and `weights()` the weight row; both walk
/// the same records, so position `j` of one always pairs with position `j` of
/// the other.
pub struct AdjacencyRow<'a, T, W> {
    edges: &'a [Edge<T, W>],
}

impl<'a, T, W> AdjacencyRow<'a, T, W> {
    pub(crate) fn new(edges: &'a [Edge<T, W>]) -> Self {
        Self { edges }
    }

    /// Out-neighbors in edge creation order.
    pub fn targets(&self) -> impl ExactSizeIterator<Item = &'a Node<T>> + 'a {
        self.edges.iter().map(Edge::target)
    }

    /// Edge weights, positionally paired with [`targets`](Self::targets).
    pub fn weights(&self) -> impl ExactSizeIterator<Item = &'a W> + 'a {
        self.edges.iter().map(Edge::weight)
    }

    /// The edge records themselves.
    pub fn edges(&self) -> &'a [Edge<T, W>] {
        self.edges
    }

    /// `(neighbor, weight)` pairs.
    pub fn iter(&self) -> Neighbors<'a, T, W> {
        Neighbors::new(self.edges)
    }

    /// Out-degree.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<T, W> Clone for AdjacencyRow<'_, T, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, W> Copy for AdjacencyRow<'_, T, W> {}

impl<'a, T, W> IntoIterator for AdjacencyRow<'a, T, W> {
    type Item = (&'a Node<T>, &'a W);
    type IntoIter = Neighbors<'a, T, W>;

    fn into_iter(self) -> Self::IntoIter {
        Neighbors::new(self.edges)
    }
}

/// Iterator over `(neighbor, weight)` pairs of one node.
pub struct Neighbors<'a, T, W> {
    inner: slice::Iter<'a, Edge<T, W>>,
}

impl<'a, T, W> Neighbors<'a, T, W> {
    pub(crate) fn new(edges: &'a [Edge<T, W>]) -> Self {
        Self {
            inner: edges.iter(),
        }
    }
}

impl<T, W> Clone for Neighbors<'_, T, W> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T, W> Iterator for Neighbors<'a, T, W> {
    type Item = (&'a Node<T>, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.target, &e.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, W> DoubleEndedIterator for Neighbors<'_, T, W> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|e| (&e.target, &e.weight))
    }
}

impl<T, W> ExactSizeIterator for Neighbors<'_, T, W> {}

impl<T, W> FusedIterator for Neighbors<'_, T, W> {}

/// Iterator over `(node, row)` pairs in registration order.
///
/// The iterator borrows the graph, so the graph cannot change while it is alive.
/// Calling [`DirectedGraph::iter`](super::DirectedGraph::iter) again restarts it.
pub struct Iter<'a, T, W> {
    rows: ArenaIter<'a, Row<T, W>>,
}

impl<'a, T, W> Iter<'a, T, W> {
    pub(crate) fn new(rows: ArenaIter<'a, Row<T, W>>) -> Self {
        Self { rows }
    }
}

impl<T, W> Clone for Iter<'_, T, W> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }
}

impl<'a, T, W> Iterator for Iter<'a, T, W> {
    type Item = (&'a Node<T>, AdjacencyRow<'a, T, W>);

    fn next(&mut self) -> Option<Self::Item> {
        self.rows
            .next()
            .map(|(_, row)| (&row.node, AdjacencyRow::new(&row.edges)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl<T, W> ExactSizeIterator for Iter<'_, T, W> {}

impl<T, W> FusedIterator for Iter<'_, T, W> {}

/// Iterator over registered nodes in registration order.
pub struct Nodes<'a, T, W> {
    rows: ArenaIter<'a, Row<T, W>>,
}

impl<'a, T, W> Nodes<'a, T, W> {
    pub(crate) fn new(rows: ArenaIter<'a, Row<T, W>>) -> Self {
        Self { rows }
    }
}

impl<T, W> Clone for Nodes<'_, T, W> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }
}

impl<'a, T, W> Iterator for Nodes<'a, T, W> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next().map(|(_, row)| &row.node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl<T, W> ExactSizeIterator for Nodes<'_, T, W> {}

impl<T, W> FusedIterator for Nodes<'_, T, W> {}

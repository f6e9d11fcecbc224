//! Edge identifiers for [`AdjacencyGraph`](crate::graph::AdjacencyGraph).
//!
//! Edges are identity-bearing: two parallel edges between the same pair of nodes have
//! different [`EdgeId`]s, and the depth-first views tell them apart (a parallel edge
//! closes a cycle, so neither copy is a bridge).

use std::fmt;

/// A strongly-typed identifier for an edge of an [`AdjacencyGraph`](crate::graph::AdjacencyGraph).
///
/// Edge IDs are assigned sequentially starting from 0 when edges are added, regardless of
/// whether the edge is directed or undirected. The type is distinct from
/// [`NodeId`](crate::graph::NodeId), so node and edge handles cannot be mixed up.
///
/// # Examples
///
/// ```rust
/// use forestview::graph::{AdjacencyGraph, EdgeId};
///
/// let mut graph: AdjacencyGraph<&str, u32> = AdjacencyGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let road = graph.add_undirected_edge(a, b, 12)?;
///
/// assert_eq!(road, EdgeId::new(0));
/// assert_eq!(graph.edge_endpoints(road), Some((a, b)));
/// # Ok::<(), forestview::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw 0-based index of this edge.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}

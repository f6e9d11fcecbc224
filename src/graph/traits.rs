//! Trait definitions for graph abstractions.
//!
//! Depth-first views never own or build the graphs they look at. They only require the
//! capabilities defined here, so any graph (an adjacency list, an implicit grid, a
//! domain model exposing supply chains) can be viewed without being copied.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Node handles, node enumeration and node containment
//! - [`EdgeSet`] - Edge containment and endpoint resolution
//! - [`Incidence`] - Incident edges of a node, tagged with their [`Direction`]
//!
//! Node and edge handles are associated types bounded by `Copy + Eq + Hash + Debug`:
//! they must have stable identity and equality for as long as a view borrows the graph.

use std::{fmt::Debug, hash::Hash};

use crate::graph::Direction;

/// Base trait providing node handles and node enumeration.
///
/// # Examples
///
/// ```rust
/// use forestview::graph::{AdjacencyGraph, GraphBase};
///
/// let mut graph: AdjacencyGraph<&str, ()> = AdjacencyGraph::new();
/// graph.add_node("A");
/// graph.add_node("B");
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.node_ids().count(), 2);
/// ```
pub trait GraphBase {
    /// Handle identifying a node.
    type Node: Copy + Eq + Hash + Debug;

    /// Handle identifying an edge.
    type Edge: Copy + Eq + Hash + Debug;

    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all nodes of the graph.
    ///
    /// The order must be stable for a given graph instance; forest views use it to decide
    /// which nodes become tree roots.
    fn node_ids(&self) -> impl Iterator<Item = Self::Node>;

    /// Returns `true` if the graph contains `node`.
    fn contains_node(&self, node: Self::Node) -> bool;
}

/// Trait for graphs that can resolve edge handles.
pub trait EdgeSet: GraphBase {
    /// Returns `true` if the graph contains `edge`.
    fn contains_edge(&self, edge: Self::Edge) -> bool;

    /// Returns the `(tail, head)` endpoints of `edge`, or `None` if the graph does not
    /// contain it. For undirected edges the order is the order the endpoints were given in.
    fn edge_endpoints(&self, edge: Self::Edge) -> Option<(Self::Node, Self::Node)>;

    /// Returns the endpoint of `edge` opposite to `node`.
    ///
    /// For a self-loop this is `node` itself. Returns `None` if the edge is unknown or
    /// `node` is not one of its endpoints.
    fn other_endpoint(&self, edge: Self::Edge, node: Self::Node) -> Option<Self::Node> {
        let (tail, head) = self.edge_endpoints(edge)?;
        if tail == node {
            Some(head)
        } else if head == node {
            Some(tail)
        } else {
            None
        }
    }
}

/// One edge incident on a node, as seen from that node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Incident<N, E> {
    /// The incident edge.
    pub edge: E,
    /// The endpoint of `edge` opposite to the node being inspected.
    pub neighbor: N,
    /// How the edge is oriented relative to the node being inspected.
    pub direction: Direction,
}

/// Trait for graphs that enumerate the incident edges of a node.
///
/// # Required Methods
///
/// - [`incident_edges`](Incidence::incident_edges) - Incident edges in a stable order
pub trait Incidence: GraphBase {
    /// Returns the edges incident on `node`.
    ///
    /// Self-loops are reported once. A directed self-loop carries both
    /// [`Direction::DIRECTED_OUT`] and [`Direction::DIRECTED_IN`]. Unknown nodes yield
    /// nothing.
    fn incident_edges(
        &self,
        node: Self::Node,
    ) -> impl Iterator<Item = Incident<Self::Node, Self::Edge>>;
}

//! Adjacency-list graph with mixed directed and undirected edges.
//!
//! This module provides [`AdjacencyGraph`], the reference implementation of the graph
//! traits. Each node keeps a single incidence list (in edge insertion order), so one
//! lookup answers "which edges touch this node" for outgoing, incoming and undirected
//! edges alike. Self-loops are stored once in that list.

use crate::{
    graph::{
        edge::EdgeId,
        node::NodeId,
        traits::{EdgeSet, GraphBase, Incidence, Incident},
        Direction,
    },
    Error, Result,
};

/// Internal storage for edge data and endpoints.
#[derive(Debug, Clone)]
struct EdgeData<E> {
    /// First endpoint (the source for directed edges)
    tail: NodeId,
    /// Second endpoint (the target for directed edges)
    head: NodeId,
    /// Whether the edge is directed from `tail` to `head`
    directed: bool,
    /// User-provided edge data
    data: E,
}

/// A graph with typed node and edge data, mixing directed and undirected edges.
///
/// `AdjacencyGraph` supports:
///
/// - Generic node data (`N`) and edge data (`E`)
/// - Directed and undirected edges in the same graph
/// - Self-loops and parallel edges, each with its own [`EdgeId`]
/// - Incidence queries in edge insertion order via [`Incidence`]
///
/// # Thread Safety
///
/// `AdjacencyGraph<N, E>` is [`Send`] and [`Sync`] when both `N` and `E` are. Views borrow
/// the graph immutably, so it cannot change underneath a view.
///
/// # Examples
///
/// ```rust
/// use forestview::graph::AdjacencyGraph;
///
/// let mut graph: AdjacencyGraph<&str, &str> = AdjacencyGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
///
/// graph.add_directed_edge(a, b, "A->B")?;
/// graph.add_undirected_edge(b, c, "B-C")?;
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.degree(b), 2);
/// # Ok::<(), forestview::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, E> {
    /// Node data storage
    nodes: Vec<N>,
    /// Edge data storage
    edges: Vec<EdgeData<E>>,
    /// Incident edges per node, in insertion order
    incident: Vec<Vec<EdgeId>>,
}

impl<N, E> Default for AdjacencyGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> AdjacencyGraph<N, E> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        AdjacencyGraph {
            nodes: Vec::new(),
            edges: Vec::new(),
            incident: Vec::new(),
        }
    }

    /// Creates a new empty graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        AdjacencyGraph {
            nodes: Vec::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
            incident: Vec::with_capacity(node_capacity),
        }
    }

    /// Adds a node and returns its identifier.
    ///
    /// Identifiers are assigned sequentially, so enumeration order equals insertion order.
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(data);
        self.incident.push(Vec::new());
        id
    }

    /// Adds a directed edge from `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if either endpoint does not exist.
    pub fn add_directed_edge(&mut self, source: NodeId, target: NodeId, data: E) -> Result<EdgeId> {
        self.add_edge(source, target, true, data)
    }

    /// Adds an undirected edge between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if either endpoint does not exist.
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, data: E) -> Result<EdgeId> {
        self.add_edge(a, b, false, data)
    }

    /// Adds an edge between `tail` and `head`, directed from `tail` to `head` when
    /// `directed` is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if either endpoint does not exist.
    pub fn add_edge(
        &mut self,
        tail: NodeId,
        head: NodeId,
        directed: bool,
        data: E,
    ) -> Result<EdgeId> {
        for (role, node) in [("tail", tail), ("head", head)] {
            if node.index() >= self.nodes.len() {
                return Err(Error::GraphError(format!(
                    "{role} node {node} does not exist in graph with {} nodes",
                    self.nodes.len()
                )));
            }
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(EdgeData {
            tail,
            head,
            directed,
            data,
        });

        self.incident[tail.index()].push(id);
        if head != tail {
            self.incident[head.index()].push(id);
        }

        Ok(id)
    }

    /// Returns the data stored for `node`.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&N> {
        self.nodes.get(node.index())
    }

    /// Returns the data stored for `node` mutably.
    pub fn node_mut(&mut self, node: NodeId) -> Option<&mut N> {
        self.nodes.get_mut(node.index())
    }

    /// Returns the data stored for `edge`.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&E> {
        self.edges.get(edge.index()).map(|e| &e.data)
    }

    /// Returns the `(tail, head)` endpoints of `edge`.
    #[must_use]
    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges.get(edge.index()).map(|e| (e.tail, e.head))
    }

    /// Returns whether `edge` is directed, or `None` if it does not exist.
    #[must_use]
    pub fn is_directed(&self, edge: EdgeId) -> Option<bool> {
        self.edges.get(edge.index()).map(|e| e.directed)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over all edge identifiers.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// Returns the number of edges incident on `node`, counting self-loops twice.
    ///
    /// Unknown nodes have degree 0.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.incident.get(node.index()).map_or(0, |edges| {
            edges
                .iter()
                .map(|&id| {
                    let edge = &self.edges[id.index()];
                    if edge.tail == edge.head {
                        2
                    } else {
                        1
                    }
                })
                .sum()
        })
    }

    /// Describes `edge` as seen from `node`.
    fn incident_from(&self, node: NodeId, id: EdgeId) -> Incident<NodeId, EdgeId> {
        let edge = &self.edges[id.index()];
        let neighbor = if edge.tail == node { edge.head } else { edge.tail };
        let direction = if !edge.directed {
            Direction::UNDIRECTED
        } else if edge.tail == edge.head {
            Direction::DIRECTED
        } else if edge.tail == node {
            Direction::DIRECTED_OUT
        } else {
            Direction::DIRECTED_IN
        };
        Incident {
            edge: id,
            neighbor,
            direction,
        }
    }
}

impl<N, E> GraphBase for AdjacencyGraph<N, E> {
    type Node = NodeId;
    type Edge = EdgeId;

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }

    fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.nodes.len()
    }
}

impl<N, E> EdgeSet for AdjacencyGraph<N, E> {
    fn contains_edge(&self, edge: EdgeId) -> bool {
        edge.index() < self.edges.len()
    }

    fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        AdjacencyGraph::edge_endpoints(self, edge)
    }
}

impl<N, E> Incidence for AdjacencyGraph<N, E> {
    fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = Incident<NodeId, EdgeId>> {
        self.incident
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&id| self.incident_from(node, id))
    }
}

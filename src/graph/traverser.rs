//! Adjacency traversers.
//!
//! A [`Traverser`] decides, for one node, which `(neighbor, edge)` pairs a depth-first
//! view may follow and in which order. It is the only knob that shapes a view: a
//! traverser that offers every edge from both endpoints yields a direction agnostic view
//! (articulation points and bridges are available), while one that follows directed edges
//! forward only does not.
//!
//! Two kinds of traverser are provided:
//!
//! - [`DirectionTraverser`] - follows the incident edges whose [`Direction`] matches a mask
//! - any closure `Fn(&G, G::Node) -> Result<Vec<(G::Node, G::Edge)>>`, for custom filtering
//!   or for graphs that only know their neighbors implicitly

use crate::{
    graph::{Direction, GraphBase, Incidence},
    Error, Result,
};

/// Produces the ordered adjacency of a node for a depth-first walk.
///
/// Implementations must be deterministic for the lifetime of a view: child queries call
/// the traverser again and rely on it returning the same edges.
///
/// # Errors
///
/// Any error returned while a view is being built aborts construction and is returned
/// from the view constructor.
pub trait Traverser<G: GraphBase> {
    /// Returns the `(neighbor, edge)` pairs to follow from `node`, in order.
    fn adjacent(&self, graph: &G, node: G::Node) -> Result<Vec<(G::Node, G::Edge)>>;
}

impl<G, F> Traverser<G> for F
where
    G: GraphBase,
    F: Fn(&G, G::Node) -> Result<Vec<(G::Node, G::Edge)>>,
{
    fn adjacent(&self, graph: &G, node: G::Node) -> Result<Vec<(G::Node, G::Edge)>> {
        self(graph, node)
    }
}

/// Follows the incident edges whose direction intersects a mask.
///
/// # Examples
///
/// ```rust
/// use forestview::graph::{AdjacencyGraph, DirectionTraverser, Traverser};
///
/// let mut graph: AdjacencyGraph<&str, ()> = AdjacencyGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let ab = graph.add_directed_edge(a, b, ())?;
///
/// assert_eq!(DirectionTraverser::outgoing().adjacent(&graph, a)?, vec![(b, ab)]);
/// assert!(DirectionTraverser::outgoing().adjacent(&graph, b)?.is_empty());
/// assert_eq!(DirectionTraverser::any().adjacent(&graph, b)?, vec![(a, ab)]);
/// # Ok::<(), forestview::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionTraverser {
    mask: Direction,
}

impl Default for DirectionTraverser {
    fn default() -> Self {
        Self::any()
    }
}

impl DirectionTraverser {
    /// Creates a traverser following incidences that intersect `mask`.
    #[must_use]
    pub const fn new(mask: Direction) -> Self {
        DirectionTraverser { mask }
    }

    /// Follows every edge from both endpoints. Views built with this traverser are
    /// direction agnostic.
    #[must_use]
    pub const fn any() -> Self {
        Self::new(Direction::ANY)
    }

    /// Follows undirected edges and directed edges from tail to head.
    #[must_use]
    pub const fn outgoing() -> Self {
        Self::new(Direction::UNDIRECTED.union(Direction::DIRECTED_OUT))
    }

    /// Follows undirected edges and directed edges from head to tail.
    #[must_use]
    pub const fn incoming() -> Self {
        Self::new(Direction::UNDIRECTED.union(Direction::DIRECTED_IN))
    }

    /// Follows undirected edges only.
    #[must_use]
    pub const fn undirected() -> Self {
        Self::new(Direction::UNDIRECTED)
    }

    /// Returns the direction mask.
    #[must_use]
    pub const fn mask(&self) -> Direction {
        self.mask
    }
}

impl<G: Incidence> Traverser<G> for DirectionTraverser {
    fn adjacent(&self, graph: &G, node: G::Node) -> Result<Vec<(G::Node, G::Edge)>> {
        if !graph.contains_node(node) {
            return Err(Error::NoSuchNode(format!("{node:?}")));
        }
        Ok(graph
            .incident_edges(node)
            .filter(|incident| incident.direction.intersects(self.mask))
            .map(|incident| (incident.neighbor, incident.edge))
            .collect())
    }
}

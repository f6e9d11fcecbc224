//! Pull-based depth-first walk.
//!
//! [`DepthFirstTraverser`] turns a [`Traverser`] into the sequence of descending and
//! ascending steps a depth-first search makes. It is iterative: each node being explored
//! is a frame on an explicit stack holding the not yet consumed part of its adjacency, so
//! deep graphs cannot overflow the call stack.
//!
//! The walk does not remember which nodes it has seen. Whoever consumes it decides when a
//! descending step reached a node that must not be expanded again and calls
//! [`DepthFirstTraverser::prune`] before asking for the next step.

use std::vec;

use crate::{
    graph::{GraphBase, Traverser},
    Result,
};

/// One step of a depth-first walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DfsStep<N, E> {
    /// Node reached (descending) or finished (ascending)
    pub node: N,
    /// Edge the node was reached through; `None` for the root
    pub edge: Option<E>,
    /// `true` when moving away from the root, `false` when finishing `node`
    pub descending: bool,
}

impl<N, E> DfsStep<N, E> {
    /// Returns `true` for a step that reaches `node`.
    #[must_use]
    pub fn is_descending(&self) -> bool {
        self.descending
    }

    /// Returns `true` for a step that finishes `node`.
    #[must_use]
    pub fn is_ascending(&self) -> bool {
        !self.descending
    }
}

/// A node being explored, with the rest of its adjacency.
struct Frame<N, E> {
    node: N,
    edge: Option<E>,
    adjacency: vec::IntoIter<(N, E)>,
}

/// Iterative depth-first walk over the adjacency produced by a [`Traverser`].
///
/// The first step descends to the root with no edge. Every later descending step offers
/// one `(neighbor, edge)` pair of the node on top of the stack, in traverser order; unless
/// pruned, the next call expands that neighbor. When a node's adjacency is exhausted an
/// ascending step finishes it, carrying the edge it was reached through.
///
/// A traverser error is yielded once as `Some(Err(_))`; the walk is over after that.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashSet;
/// use forestview::{forest::DepthFirstTraverser, graph::{AdjacencyGraph, DirectionTraverser}};
///
/// let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::new();
/// let a = graph.add_node(());
/// let b = graph.add_node(());
/// graph.add_undirected_edge(a, b, ())?;
///
/// let traverser = DirectionTraverser::any();
/// let mut walk = DepthFirstTraverser::new(&graph, &traverser, a);
/// let mut seen = HashSet::new();
/// while let Some(step) = walk.next() {
///     let step = step?;
///     if step.is_descending() && !seen.insert(step.node) {
///         walk.prune();
///     }
/// }
/// # Ok::<(), forestview::Error>(())
/// ```
pub struct DepthFirstTraverser<'a, G: GraphBase, T> {
    graph: &'a G,
    traverser: &'a T,
    root: Option<G::Node>,
    pending: Option<(G::Node, Option<G::Edge>)>,
    stack: Vec<Frame<G::Node, G::Edge>>,
}

impl<'a, G, T> DepthFirstTraverser<'a, G, T>
where
    G: GraphBase,
    T: Traverser<G>,
{
    /// Creates a walk starting at `root`.
    #[must_use]
    pub fn new(graph: &'a G, traverser: &'a T, root: G::Node) -> Self {
        DepthFirstTraverser {
            graph,
            traverser,
            root: Some(root),
            pending: None,
            stack: Vec::new(),
        }
    }

    /// Refuses to expand the node of the most recent descending step.
    ///
    /// Has no effect if the last step was ascending or has already been expanded.
    pub fn prune(&mut self) {
        self.pending = None;
    }

    /// Returns the number of nodes currently being explored.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn expand(&mut self, node: G::Node, edge: Option<G::Edge>) -> Result<()> {
        let adjacency = self.traverser.adjacent(self.graph, node)?;
        self.stack.push(Frame {
            node,
            edge,
            adjacency: adjacency.into_iter(),
        });
        Ok(())
    }
}

impl<G, T> Iterator for DepthFirstTraverser<'_, G, T>
where
    G: GraphBase,
    T: Traverser<G>,
{
    type Item = Result<DfsStep<G::Node, G::Edge>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((node, edge)) = self.pending.take() {
            if let Err(error) = self.expand(node, edge) {
                self.stack.clear();
                return Some(Err(error));
            }
        }

        if let Some(root) = self.root.take() {
            self.pending = Some((root, None));
            return Some(Ok(DfsStep {
                node: root,
                edge: None,
                descending: true,
            }));
        }

        match self.stack.last_mut()?.adjacency.next() {
            Some((node, edge)) => {
                self.pending = Some((node, Some(edge)));
                Some(Ok(DfsStep {
                    node,
                    edge: Some(edge),
                    descending: true,
                }))
            }
            None => {
                let frame = self.stack.pop()?;
                Some(Ok(DfsStep {
                    node: frame.node,
                    edge: frame.edge,
                    descending: false,
                }))
            }
        }
    }
}

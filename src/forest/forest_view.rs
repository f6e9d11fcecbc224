//! Depth-first forest covering every node of a graph.

use crate::{
    config::ViewConfig,
    forest::view::{DepthFirstView, Forest},
    graph::{GraphBase, Traverser},
    Result,
};

/// Depth-first forest over a whole graph.
///
/// Nodes are taken in the graph's enumeration order; every node not reached by an earlier
/// tree becomes the root of a new one. Time stamps keep counting across trees, so interval
/// containment never relates nodes of different trees.
///
/// # Examples
///
/// ```rust
/// use forestview::{forest::DepthFirstForestView, graph::{AdjacencyGraph, DirectionTraverser}};
///
/// // Pump station feeding two districts, plus an isolated well.
/// let mut graph: AdjacencyGraph<&str, ()> = AdjacencyGraph::new();
/// let pump = graph.add_node("pump");
/// let north = graph.add_node("north");
/// let south = graph.add_node("south");
/// let well = graph.add_node("well");
/// graph.add_undirected_edge(pump, north, ())?;
/// graph.add_undirected_edge(pump, south, ())?;
///
/// let view = DepthFirstForestView::new(&graph, DirectionTraverser::any())?;
/// assert_eq!(view.roots(), &[pump, well]);
/// assert!(view.is_articulation_point(pump)?);
/// # Ok::<(), forestview::Error>(())
/// ```
pub type DepthFirstForestView<'g, G, T> = DepthFirstView<'g, G, T, Forest>;

impl<'g, G, T> DepthFirstView<'g, G, T, Forest>
where
    G: GraphBase,
    T: Traverser<G>,
{
    /// Builds the depth-first forest of `graph` with the default [`ViewConfig`].
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `traverser`.
    pub fn new(graph: &'g G, traverser: T) -> Result<Self> {
        Self::with_config(graph, traverser, ViewConfig::default())
    }

    /// Builds the depth-first forest of `graph` with an explicit configuration.
    ///
    /// # Arguments
    ///
    /// * `graph` - The graph to view, borrowed for the lifetime of the view
    /// * `traverser` - Produces the adjacency followed from each node
    /// * `config` - Controls structural analysis and the edge-classification log
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `traverser`.
    pub fn with_config(graph: &'g G, traverser: T, config: ViewConfig) -> Result<Self> {
        Self::build(graph, traverser, config, graph.node_ids())
    }

    /// Returns the tree roots in the order the trees were built.
    #[must_use]
    pub fn roots(&self) -> &[G::Node] {
        &self.roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::{AdjacencyGraph, DirectionTraverser, EdgeId, NodeId},
        Error,
    };

    #[test]
    fn test_roots_follow_enumeration_order() {
        // 0 -> 1, 2 -> 1, 3 isolated
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::new();
        let n: Vec<_> = (0..4).map(|_| graph.add_node(())).collect();
        graph.add_directed_edge(n[0], n[1], ()).unwrap();
        graph.add_directed_edge(n[2], n[1], ()).unwrap();

        let view = DepthFirstForestView::new(&graph, DirectionTraverser::outgoing()).unwrap();
        assert_eq!(view.roots(), &[n[0], n[2], n[3]]);

        let times: Vec<_> = n
            .iter()
            .map(|&node| {
                (
                    view.discovery_time(node).unwrap(),
                    view.finishing_time(node).unwrap(),
                )
            })
            .collect();
        assert_eq!(times, vec![(1, 4), (2, 3), (5, 6), (7, 8)]);

        assert_eq!(view.root_of(n[1]).unwrap(), n[0]);
        assert_eq!(view.least_common_ancestor(n[1], n[2]).unwrap(), None);
        assert!(!view.is_ancestor(n[0], n[2]).unwrap());
        assert_eq!(view.node_count(), 4);
    }

    #[test]
    fn test_every_root_is_a_root() {
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::new();
        let n: Vec<_> = (0..6).map(|_| graph.add_node(())).collect();
        graph.add_undirected_edge(n[0], n[3], ()).unwrap();
        graph.add_undirected_edge(n[4], n[5], ()).unwrap();

        let view = DepthFirstForestView::new(&graph, DirectionTraverser::any()).unwrap();
        for &node in &n {
            assert!(view.roots().contains(&view.root_of(node).unwrap()));
        }
        for &root in view.roots() {
            assert_eq!(view.parent_edge(root).unwrap(), None);
            assert_eq!(view.depth(root).unwrap(), 0);
        }
    }

    #[test]
    fn test_empty_graph() {
        let graph: AdjacencyGraph<(), ()> = AdjacencyGraph::new();
        let view = DepthFirstForestView::new(&graph, DirectionTraverser::any()).unwrap();
        assert!(view.roots().is_empty());
        assert!(!view.is_cyclic());
        assert!(view.is_direction_agnostic());
        assert_eq!(view.nodes().count(), 0);
    }

    #[test]
    fn test_traverser_error_aborts_construction() {
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_undirected_edge(a, b, ()).unwrap();

        let failing = |_: &AdjacencyGraph<(), ()>, _: NodeId| -> Result<Vec<(NodeId, EdgeId)>> {
            Err(Error::Traversal("index unavailable".into()))
        };
        let result = DepthFirstForestView::new(&graph, failing);
        assert!(matches!(result, Err(Error::Traversal(_))));
    }

    #[test]
    fn test_queries_are_idempotent() {
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::new();
        let n: Vec<_> = (0..4).map(|_| graph.add_node(())).collect();
        graph.add_undirected_edge(n[0], n[1], ()).unwrap();
        graph.add_undirected_edge(n[1], n[2], ()).unwrap();
        graph.add_undirected_edge(n[2], n[0], ()).unwrap();
        graph.add_undirected_edge(n[2], n[3], ()).unwrap();

        let view = DepthFirstForestView::new(&graph, DirectionTraverser::any()).unwrap();
        for &node in &n {
            assert_eq!(view.is_articulation_point(node), view.is_articulation_point(node));
            assert_eq!(
                view.children(node).unwrap().collect::<Vec<_>>(),
                view.children(node).unwrap().collect::<Vec<_>>()
            );
            assert_eq!(view.discovery_time(node), view.discovery_time(node));
        }
        assert!(view.is_articulation_point(n[2]).unwrap());
    }
}

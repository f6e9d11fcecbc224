//! Query API shared by depth-first forest and tree views.
//!
//! A [`DepthFirstView`] is computed once, eagerly, by its constructor and never changes
//! afterwards. Every per-node query is a lookup in the records collected during the walk;
//! only [`DepthFirstView::children`] consults the traverser again.
//!
//! The shape parameter distinguishes the two flavours of view:
//!
//! - [`Forest`] - one tree per unvisited node, see [`DepthFirstForestView`](crate::forest::DepthFirstForestView)
//! - [`Tree`] - a single tree from a fixed start node, see [`DepthFirstTreeView`](crate::forest::DepthFirstTreeView)

use std::{marker::PhantomData, vec};

use crate::{
    config::ViewConfig,
    forest::{builder::ForestBuilder, kind::ClassifiedEdge, record::RecordStore},
    graph::{EdgeSet, GraphBase, Traverser},
    Error, Result,
};

/// Shape marker for views covering every node of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Forest;

/// Shape marker for views rooted at a single start node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tree;

/// Depth-first view over a borrowed graph.
///
/// Holds the discovery and finishing time, parent edge, reachable ancestor and
/// articulation flag of every visited node, together with the cyclic and direction
/// agnostic flags of the whole view. The graph stays borrowed for the lifetime of the
/// view, so it cannot be mutated underneath it.
///
/// Use the [`DepthFirstForestView`](crate::forest::DepthFirstForestView) and
/// [`DepthFirstTreeView`](crate::forest::DepthFirstTreeView) aliases to build one.
pub struct DepthFirstView<'g, G: GraphBase, T, S = Forest> {
    graph: &'g G,
    traverser: T,
    config: ViewConfig,
    records: RecordStore<G::Node, G::Edge>,
    edge_kinds: Vec<ClassifiedEdge<G::Node, G::Edge>>,
    pub(crate) roots: Vec<G::Node>,
    cyclic: bool,
    direction_agnostic: bool,
    shape: PhantomData<S>,
}

impl<'g, G, T, S> DepthFirstView<'g, G, T, S>
where
    G: GraphBase,
    T: Traverser<G>,
{
    /// Builds a view by exploring one tree from each of `starts` that is still unvisited.
    pub(crate) fn build(
        graph: &'g G,
        traverser: T,
        config: ViewConfig,
        starts: impl IntoIterator<Item = G::Node>,
    ) -> Result<Self> {
        let mut builder = ForestBuilder::new(config);
        let mut roots = Vec::new();
        for start in starts {
            if builder.records.index_of(start).is_some() {
                continue;
            }
            builder.visit_tree(graph, &traverser, start)?;
            roots.push(start);
        }

        Ok(DepthFirstView {
            graph,
            traverser,
            config,
            records: builder.records,
            edge_kinds: builder.edge_kinds,
            roots,
            cyclic: builder.cyclic,
            direction_agnostic: builder.direction_agnostic,
            shape: PhantomData,
        })
    }

    /// Returns the edge through which `node` was discovered, or `None` for a tree root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchNode`] if `node` was never visited.
    pub fn parent_edge(&self, node: G::Node) -> Result<Option<G::Edge>> {
        Ok(self.records.record(node)?.parent_edge)
    }

    /// Returns the parent of `node` in its depth-first tree, or `None` for a tree root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchNode`] if `node` was never visited.
    pub fn parent(&self, node: G::Node) -> Result<Option<G::Node>> {
        let record = self.records.record(node)?;
        Ok(record.parent.map(|parent| self.records.get(parent).node))
    }

    /// Returns the tree-edge children of `node` as `(child, edge)` pairs.
    ///
    /// The traverser is asked for the adjacency of `node` again and its output is
    /// filtered down to the pairs whose edge discovered the far node, preserving the
    /// traverser's order. For a leaf the traverser is not consulted at all.
    ///
    /// # Arguments
    ///
    /// * `node` - A visited node
    ///
    /// # Returns
    ///
    /// A finite iterator over `(child, edge)` pairs, consumed once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchNode`] if `node` was never visited, or the error of the
    /// traverser.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let view = DepthFirstTreeView::new(&graph, DirectionTraverser::any(), root)?;
    /// for (child, edge) in view.children(root)? {
    ///     println!("{child} via {edge}");
    /// }
    /// ```
    pub fn children(&self, node: G::Node) -> Result<Children<'_, G::Node, G::Edge>> {
        let record = self.records.record(node)?;
        let adjacency = if record.is_leaf() {
            None
        } else {
            Some(self.traverser.adjacent(self.graph, node)?.into_iter())
        };
        Ok(Children {
            records: &self.records,
            adjacency,
        })
    }

    /// Returns `true` if `node` has no tree-edge children.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchNode`] if `node` was never visited.
    pub fn is_leaf(&self, node: G::Node) -> Result<bool> {
        Ok(self.records.record(node)?.is_leaf())
    }

    /// Returns `true` if `ancestor` is an ancestor of `node` (every node is its own ancestor).
    ///
    /// Answered by interval containment of discovery and finishing times.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchNode`] if either node was never visited.
    pub fn is_ancestor(&self, ancestor: G::Node, node: G::Node) -> Result<bool> {
        let ancestor = self.records.record(ancestor)?;
        let node = self.records.record(node)?;
        Ok(ancestor.discovery <= node.discovery && ancestor.finishing >= node.finishing)
    }

    /// Returns the deepest node that is an ancestor of both `a` and `b`.
    ///
    /// Returns `None` when the nodes belong to different trees of a forest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchNode`] if either node was never visited.
    pub fn least_common_ancestor(&self, a: G::Node, b: G::Node) -> Result<Option<G::Node>> {
        let mut a = self.records.lookup(a)?;
        let mut b = self.records.lookup(b)?;
        if self.records.get(a).root != self.records.get(b).root {
            return Ok(None);
        }
        if self.records.get(a).discovery > self.records.get(b).discovery {
            std::mem::swap(&mut a, &mut b);
        }

        let finishing = self.records.get(b).finishing;
        while self.records.get(a).finishing < finishing {
            match self.records.get(a).parent {
                Some(parent) => a = parent,
                None => break,
            }
        }
        Ok(Some(self.records.get(a).node))
    }

    /// Returns the time stamp at which `node` was discovered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchNode`] if `node` was never visited.
    pub fn discovery_time(&self, node: G::Node) -> Result<usize> {
        Ok(self.records.record(node)?.discovery)
    }

    /// Returns the time stamp at which the subtree of `node` was fully explored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchNode`] if `node` was never visited.
    pub fn finishing_time(&self, node: G::Node) -> Result<usize> {
        Ok(self.records.record(node)?.finishing)
    }

    /// Returns the root of the tree containing `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchNode`] if `node` was never visited.
    pub fn root_of(&self, node: G::Node) -> Result<G::Node> {
        let record = self.records.record(node)?;
        Ok(self.records.get(record.root).node)
    }

    /// Returns the number of tree edges between `node` and its root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchNode`] if `node` was never visited.
    pub fn depth(&self, node: G::Node) -> Result<usize> {
        Ok(self.records.record(node)?.depth)
    }

    /// Returns the length of the longest downward tree path starting at `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchNode`] if `node` was never visited.
    pub fn height(&self, node: G::Node) -> Result<usize> {
        let index = self.records.lookup(node)?;
        let depth = self.records.get(index).depth;
        Ok(self
            .records
            .subtree(index)
            .map(|member| self.records.get(member).depth - depth)
            .max()
            .unwrap_or(0))
    }

    /// Returns `node` and every node below it, in pre-order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchNode`] if `node` was never visited.
    pub fn descendants(&self, node: G::Node) -> Result<impl Iterator<Item = G::Node> + '_> {
        let index = self.records.lookup(node)?;
        Ok(self
            .records
            .subtree(index)
            .map(|member| self.records.get(member).node))
    }

    /// Returns `true` if `edge` discovered some node of this view.
    #[must_use]
    pub fn is_forest_edge(&self, edge: G::Edge) -> bool {
        self.records.child_by_edge(edge).is_some()
    }

    /// Returns `true` if a back edge or self-loop was found.
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// Returns `true` if every edge met during the walk was offered from both of its
    /// endpoints.
    ///
    /// Articulation point and bridge queries are only answered by direction agnostic
    /// views. A view built with [`ViewConfig::minimal`] is never direction agnostic.
    #[must_use]
    pub fn is_direction_agnostic(&self) -> bool {
        self.direction_agnostic
    }

    /// Returns `true` if removing `node` disconnects its tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotDirectionAgnostic`] unless the view is direction agnostic, and
    /// [`Error::NoSuchNode`] if `node` was never visited.
    pub fn is_articulation_point(&self, node: G::Node) -> Result<bool> {
        self.require_direction_agnostic()?;
        Ok(self.records.record(node)?.articulation)
    }

    /// Returns the configuration the view was built with.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Returns the viewed graph.
    #[must_use]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Returns the traverser the view was built with.
    #[must_use]
    pub fn traverser(&self) -> &T {
        &self.traverser
    }

    /// Returns the number of visited nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if `node` was visited.
    #[must_use]
    pub fn contains(&self, node: G::Node) -> bool {
        self.records.index_of(node).is_some()
    }

    /// Returns the visited nodes in discovery order.
    pub fn nodes(&self) -> impl Iterator<Item = G::Node> + '_ {
        self.records.iter().map(|record| record.node)
    }

    /// Returns every classified edge offer, in walk order.
    ///
    /// Empty unless the view was built with
    /// [`ViewConfig::record_edge_kinds`](crate::ViewConfig::record_edge_kinds) set.
    #[must_use]
    pub fn edge_kinds(&self) -> &[ClassifiedEdge<G::Node, G::Edge>] {
        &self.edge_kinds
    }

    fn require_direction_agnostic(&self) -> Result<()> {
        if self.direction_agnostic {
            Ok(())
        } else {
            Err(Error::NotDirectionAgnostic)
        }
    }
}

impl<G, T, S> DepthFirstView<'_, G, T, S>
where
    G: EdgeSet,
    T: Traverser<G>,
{
    /// Returns `true` if removing `edge` disconnects its tree.
    ///
    /// An edge is a bridge when it discovered one of its endpoints and no back edge leaves
    /// that endpoint's subtree. Parallel edges are never bridges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotDirectionAgnostic`] unless the view is direction agnostic, and
    /// [`Error::EdgeNotInGraph`] if the graph does not contain `edge`.
    pub fn is_bridge(&self, edge: G::Edge) -> Result<bool> {
        self.require_direction_agnostic()?;
        let (tail, head) = self
            .graph
            .edge_endpoints(edge)
            .ok_or_else(|| Error::EdgeNotInGraph(format!("{edge:?}")))?;

        for endpoint in [tail, head] {
            let Some(index) = self.records.index_of(endpoint) else {
                continue;
            };
            let record = self.records.get(index);
            if record.parent_edge == Some(edge) {
                return Ok(record.reachable_ancestor == index);
            }
        }
        Ok(false)
    }
}

/// Tree-edge children of a node, see [`DepthFirstView::children`].
pub struct Children<'v, N, E> {
    records: &'v RecordStore<N, E>,
    adjacency: Option<vec::IntoIter<(N, E)>>,
}

impl<N, E> Iterator for Children<'_, N, E>
where
    N: Copy + Eq + std::hash::Hash + std::fmt::Debug,
    E: Copy + Eq + std::hash::Hash + std::fmt::Debug,
{
    type Item = (N, E);

    fn next(&mut self) -> Option<Self::Item> {
        let adjacency = self.adjacency.as_mut()?;
        adjacency.find(|&(neighbor, edge)| {
            self.records
                .record(neighbor)
                .is_ok_and(|record| record.parent_edge == Some(edge))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{
        forest::{DepthFirstForestView, DepthFirstTreeView},
        graph::{AdjacencyGraph, DirectionTraverser, EdgeId, NodeId},
    };

    /// Triangles a-b-c and x-y-z joined by the edge c-x.
    fn bowtie() -> (AdjacencyGraph<(), ()>, [NodeId; 6], EdgeId) {
        let mut graph = AdjacencyGraph::new();
        let nodes: Vec<_> = (0..6).map(|_| graph.add_node(())).collect();
        let [a, b, c, x, y, z] = [nodes[0], nodes[1], nodes[2], nodes[3], nodes[4], nodes[5]];
        for (u, v) in [(a, b), (b, c), (c, a), (x, y), (y, z), (z, x)] {
            graph.add_undirected_edge(u, v, ()).unwrap();
        }
        let bridge = graph.add_undirected_edge(c, x, ()).unwrap();
        (graph, [a, b, c, x, y, z], bridge)
    }

    #[test]
    fn test_bridge_and_articulation_points() {
        let (graph, nodes, bridge) = bowtie();
        let [a, b, c, x, y, z] = nodes;
        let view = DepthFirstForestView::new(&graph, DirectionTraverser::any()).unwrap();

        assert!(view.is_direction_agnostic());
        assert!(view.is_cyclic());
        assert!(view.is_bridge(bridge).unwrap());
        for edge in graph.edge_ids().filter(|&edge| edge != bridge) {
            assert!(!view.is_bridge(edge).unwrap(), "{edge} should not be a bridge");
        }

        for node in [a, b, y, z] {
            assert!(!view.is_articulation_point(node).unwrap());
        }
        assert!(view.is_articulation_point(c).unwrap());
        assert!(view.is_articulation_point(x).unwrap());
    }

    #[test]
    fn test_directed_cycle_is_not_direction_agnostic() {
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        let ab = graph.add_directed_edge(a, b, ()).unwrap();
        graph.add_directed_edge(b, c, ()).unwrap();
        graph.add_directed_edge(c, a, ()).unwrap();

        let view = DepthFirstTreeView::new(&graph, DirectionTraverser::outgoing(), a).unwrap();
        assert!(view.is_cyclic());
        assert!(!view.is_direction_agnostic());
        assert_eq!(view.is_articulation_point(a), Err(Error::NotDirectionAgnostic));
        assert_eq!(view.is_bridge(ab), Err(Error::NotDirectionAgnostic));
    }

    #[test]
    fn test_cross_edge_disqualifies() {
        // a -> b, a -> c, c -> b
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.add_directed_edge(a, b, ()).unwrap();
        graph.add_directed_edge(a, c, ()).unwrap();
        graph.add_directed_edge(c, b, ()).unwrap();

        let view = DepthFirstTreeView::with_config(
            &graph,
            DirectionTraverser::outgoing(),
            a,
            ViewConfig::comprehensive(),
        )
        .unwrap();
        assert!(!view.is_cyclic());
        assert!(!view.is_direction_agnostic());
        assert!(view
            .edge_kinds()
            .iter()
            .any(|entry| entry.kind == crate::forest::EdgeKind::Cross));
    }

    #[test]
    fn test_self_loops_keep_direction_agnosticism() {
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let ab = graph.add_undirected_edge(a, b, ()).unwrap();
        let loop_a = graph.add_undirected_edge(a, a, ()).unwrap();
        graph.add_directed_edge(b, b, ()).unwrap();

        let view = DepthFirstForestView::new(&graph, DirectionTraverser::any()).unwrap();
        assert!(view.is_cyclic());
        assert!(view.is_direction_agnostic());
        assert!(view.is_bridge(ab).unwrap());
        assert!(!view.is_bridge(loop_a).unwrap());
        assert!(!view.is_articulation_point(a).unwrap());
    }

    #[test]
    fn test_parallel_edges_are_not_bridges() {
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let first = graph.add_undirected_edge(a, b, ()).unwrap();
        let second = graph.add_undirected_edge(a, b, ()).unwrap();

        let view = DepthFirstForestView::new(&graph, DirectionTraverser::any()).unwrap();
        assert!(view.is_direction_agnostic());
        assert!(view.is_cyclic());
        assert!(!view.is_bridge(first).unwrap());
        assert!(!view.is_bridge(second).unwrap());
    }

    #[test]
    fn test_unknown_edge_is_rejected() {
        let (graph, _, _) = bowtie();
        let view = DepthFirstForestView::new(&graph, DirectionTraverser::any()).unwrap();
        assert!(matches!(
            view.is_bridge(EdgeId::new(99)),
            Err(Error::EdgeNotInGraph(_))
        ));
    }

    #[test]
    fn test_tree_queries() {
        let (graph, nodes, bridge) = bowtie();
        let [a, b, c, x, y, z] = nodes;
        let view = DepthFirstTreeView::new(&graph, DirectionTraverser::any(), a).unwrap();

        // a, b, c then x, y, z down a single path
        assert_eq!(view.nodes().collect::<Vec<_>>(), vec![a, b, c, x, y, z]);
        assert_eq!(view.parent(a).unwrap(), None);
        assert_eq!(view.parent(x).unwrap(), Some(c));
        assert_eq!(view.parent_edge(x).unwrap(), Some(bridge));
        assert_eq!(view.depth(z).unwrap(), 5);
        assert_eq!(view.height(a).unwrap(), 5);
        assert_eq!(view.height(z).unwrap(), 0);
        assert!(view.is_leaf(z).unwrap());
        assert!(view.is_ancestor(b, y).unwrap());
        assert!(!view.is_ancestor(y, b).unwrap());
        assert!(view.is_ancestor(c, c).unwrap());
        assert_eq!(view.least_common_ancestor(z, b).unwrap(), Some(b));
        assert_eq!(view.least_common_ancestor(y, y).unwrap(), Some(y));
        assert_eq!(view.descendants(x).unwrap().collect::<Vec<_>>(), vec![x, y, z]);
        assert!(view.is_forest_edge(bridge));
        assert_eq!(view.children(c).unwrap().collect::<Vec<_>>(), vec![(x, bridge)]);
    }

    #[test]
    fn test_leaf_children_skip_traverser() {
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_undirected_edge(a, b, ()).unwrap();

        let calls = Cell::new(0);
        let counting = |g: &AdjacencyGraph<(), ()>, node: NodeId| {
            calls.set(calls.get() + 1);
            DirectionTraverser::any().adjacent(g, node)
        };
        let view = DepthFirstTreeView::new(&graph, counting, a).unwrap();
        let after_build = calls.get();

        assert_eq!(view.children(b).unwrap().count(), 0);
        assert_eq!(calls.get(), after_build);
        assert_eq!(view.children(a).unwrap().count(), 1);
        assert_eq!(calls.get(), after_build + 1);
    }

    #[test]
    fn test_unvisited_node_queries() {
        let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::new();
        let a = graph.add_node(());
        let lonely = graph.add_node(());

        let view = DepthFirstTreeView::new(&graph, DirectionTraverser::any(), a).unwrap();
        assert!(!view.contains(lonely));
        assert!(matches!(view.discovery_time(lonely), Err(Error::NoSuchNode(_))));
        assert!(matches!(view.children(lonely), Err(Error::NoSuchNode(_))));
        assert!(matches!(view.is_ancestor(a, lonely), Err(Error::NoSuchNode(_))));
        assert!(matches!(view.is_articulation_point(lonely), Err(Error::NoSuchNode(_))));
    }
}

//! Depth-first tree grown from a single start node.

use crate::{
    config::ViewConfig,
    forest::view::{DepthFirstView, Tree},
    graph::{GraphBase, Traverser},
    Error, Result,
};

/// Depth-first tree of the nodes reachable from a fixed root.
///
/// Nodes the traverser never reaches from the root are not part of the view; queries about
/// them fail with [`Error::NoSuchNode`].
pub type DepthFirstTreeView<'g, G, T> = DepthFirstView<'g, G, T, Tree>;

impl<'g, G, T> DepthFirstView<'g, G, T, Tree>
where
    G: GraphBase,
    T: Traverser<G>,
{
    /// Builds the depth-first tree of `graph` rooted at `root` with the default
    /// [`ViewConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchNode`] if `root` is not in `graph`, or the first error
    /// produced by `traverser`.
    pub fn new(graph: &'g G, traverser: T, root: G::Node) -> Result<Self> {
        Self::with_config(graph, traverser, root, ViewConfig::default())
    }

    /// Builds the depth-first tree of `graph` rooted at `root` with an explicit
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchNode`] if `root` is not in `graph`, or the first error
    /// produced by `traverser`.
    pub fn with_config(
        graph: &'g G,
        traverser: T,
        root: G::Node,
        config: ViewConfig,
    ) -> Result<Self> {
        if !graph.contains_node(root) {
            return Err(Error::NoSuchNode(format!("{root:?}")));
        }
        Self::build(graph, traverser, config, [root])
    }

    /// Returns the root the tree was grown from.
    #[must_use]
    pub fn root(&self) -> G::Node {
        self.roots[0]
    }

    /// Tree views are immutable once built.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::ImmutableRoot`].
    pub fn set_root(&mut self, _root: G::Node) -> Result<()> {
        Err(Error::ImmutableRoot)
    }

    /// Returns `true` if `node` is reachable from the root.
    #[must_use]
    pub fn is_tree_node(&self, node: G::Node) -> bool {
        self.contains(node)
    }
}

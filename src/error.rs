use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every query on a depth-first view reports failures synchronously through this enum. Nothing
/// is retried or suppressed internally, and a view whose construction failed is never handed
/// out to the caller.
///
/// # Error Categories
///
/// ## Query Errors
/// - [`Error::NoSuchNode`] - The node was never visited by the view (or is absent from the graph)
/// - [`Error::NotDirectionAgnostic`] - A structural query on a view that cannot answer it
/// - [`Error::EdgeNotInGraph`] - A bridge query naming an edge the graph does not contain
/// - [`Error::ImmutableRoot`] - Attempted to reassign the fixed root of a tree view
///
/// ## Graph and Traversal Errors
/// - [`Error::GraphError`] - Invalid graph construction (for example a dangling endpoint)
/// - [`Error::Traversal`] - A caller-supplied traverser failed while a view was being built
///
/// # Examples
///
/// ```rust
/// use forestview::{Error, graph::{AdjacencyGraph, DirectionTraverser}, forest::DepthFirstForestView};
///
/// let mut graph: AdjacencyGraph<&str, ()> = AdjacencyGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// graph.add_directed_edge(a, b, ())?;
///
/// let view = DepthFirstForestView::new(&graph, DirectionTraverser::outgoing())?;
/// match view.is_articulation_point(a) {
///     Ok(flag) => println!("articulation point: {flag}"),
///     Err(Error::NotDirectionAgnostic) => println!("traversal only follows edges one way"),
///     Err(e) => println!("Error: {e}"),
/// }
/// # Ok::<(), forestview::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The node is not part of the view.
    ///
    /// Returned by every per-node query when the node was never reached by the traversal,
    /// and by tree views whose start node is absent from the graph. The payload is the
    /// `Debug` rendering of the offending node.
    #[error("Node is not in this view: {0}")]
    NoSuchNode(String),

    /// The traversal was not direction agnostic.
    ///
    /// Articulation point and bridge answers are only meaningful when every encountered
    /// edge could be traversed from both of its endpoints. Views built from one-way
    /// traversals (or with structural analysis disabled) report this for those queries.
    #[error("This traversal is not direction agnostic")]
    NotDirectionAgnostic,

    /// The edge is not part of the underlying graph.
    ///
    /// The payload is the `Debug` rendering of the offending edge.
    #[error("Edge is not in this graph: {0}")]
    EdgeNotInGraph(String),

    /// The root of a tree view cannot be changed.
    ///
    /// Views are computed once, eagerly, and are immutable afterwards.
    #[error("The root of a depth-first tree view cannot be changed")]
    ImmutableRoot,

    /// Graph construction error.
    ///
    /// Raised when building an [`crate::graph::AdjacencyGraph`] with edges that reference
    /// nodes which do not exist, or when a graph reports an edge endpoint it cannot resolve.
    #[error("{0}")]
    GraphError(String),

    /// A caller-supplied traverser failed.
    ///
    /// Closure traversers use this variant to abort the construction of a view. The
    /// error propagates out of the constructor unchanged.
    #[error("Traversal failed - {0}")]
    Traversal(String),
}

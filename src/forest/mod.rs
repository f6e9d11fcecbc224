//! Depth-first forest and tree views.
//!
//! A view explores a graph once, at construction, with a [`Traverser`](crate::graph::Traverser)
//! and keeps one record per visited node. All later queries are answered from those records.
//!
//! # Architecture
//!
//! - [`DepthFirstTraverser`] - Iterative walk yielding descending and ascending steps
//! - `builder` - Turns walk steps into records, classifies edges and tracks unresolved
//!   edges for direction agnosticism
//! - [`DepthFirstView`] - Query API shared by both kinds of view
//! - [`DepthFirstForestView`] - Every node of the graph, one tree per unvisited node
//! - [`DepthFirstTreeView`] - The nodes reachable from one start node
//!
//! # Examples
//!
//! ```rust
//! use forestview::{forest::DepthFirstTreeView, graph::{AdjacencyGraph, DirectionTraverser}};
//!
//! let mut graph: AdjacencyGraph<(), ()> = AdjacencyGraph::new();
//! let a = graph.add_node(());
//! let b = graph.add_node(());
//! let c = graph.add_node(());
//! graph.add_undirected_edge(a, b, ())?;
//! graph.add_undirected_edge(b, c, ())?;
//!
//! let view = DepthFirstTreeView::new(&graph, DirectionTraverser::any(), a)?;
//! assert_eq!(view.least_common_ancestor(b, c)?, Some(b));
//! assert!(view.is_articulation_point(b)?);
//! # Ok::<(), forestview::Error>(())
//! ```

mod builder;
mod forest_view;
mod kind;
mod record;
mod tracker;
mod tree_view;
mod view;
mod walk;

pub use forest_view::DepthFirstForestView;
pub use kind::{ClassifiedEdge, EdgeKind};
pub use tree_view::DepthFirstTreeView;
pub use view::{Children, DepthFirstView, Forest, Tree};
pub use walk::{DepthFirstTraverser, DfsStep};

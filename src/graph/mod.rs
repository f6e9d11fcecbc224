//! Graph contracts and a reference graph implementation.
//!
//! The depth-first views in [`crate::forest`] only talk to graphs through the traits
//! defined here, so they work on any graph that can enumerate its nodes, resolve its
//! edges and list the edges incident on a node.
//!
//! # Key Components
//!
//! - [`GraphBase`], [`EdgeSet`], [`Incidence`] - Capabilities a graph exposes to views
//! - [`Traverser`] - Decides which `(neighbor, edge)` pairs a walk follows from a node
//! - [`DirectionTraverser`] - Traverser filtering incident edges by [`Direction`]
//! - [`AdjacencyGraph`] - Adjacency-list graph with mixed directed and undirected edges
//! - [`NodeId`], [`EdgeId`] - Strongly-typed handles used by [`AdjacencyGraph`]
//!
//! # Examples
//!
//! ```rust
//! use forestview::graph::{AdjacencyGraph, DirectionTraverser, Traverser};
//!
//! // Habitat -> greenhouse, greenhouse - lab (corridor)
//! let mut graph: AdjacencyGraph<&str, ()> = AdjacencyGraph::new();
//! let habitat = graph.add_node("habitat");
//! let greenhouse = graph.add_node("greenhouse");
//! let lab = graph.add_node("lab");
//! graph.add_directed_edge(habitat, greenhouse, ())?;
//! graph.add_undirected_edge(greenhouse, lab, ())?;
//!
//! let from_greenhouse = DirectionTraverser::outgoing().adjacent(&graph, greenhouse)?;
//! assert_eq!(from_greenhouse.len(), 1);
//! # Ok::<(), forestview::Error>(())
//! ```

mod adjacency;
mod direction;
mod edge;
mod node;
mod traits;
mod traverser;

pub use adjacency::AdjacencyGraph;
pub use direction::Direction;
pub use edge::EdgeId;
pub use node::NodeId;
pub use traits::{EdgeSet, GraphBase, Incidence, Incident};
pub use traverser::{DirectionTraverser, Traverser};

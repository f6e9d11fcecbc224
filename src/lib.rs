// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # forestview
//!
//! Depth-first forest and tree views over abstract graphs.
//!
//! `forestview` explores any graph exposing the small set of traits in [`graph`] and
//! records, for every visited node, its discovery and finishing time, the edge it was
//! discovered through and its low-link data. On top of these records a view answers
//! structural queries without walking the graph again:
//!
//! - ancestry by interval containment, least common ancestors, depth, height, subtrees
//! - whether the graph contains a cycle reachable by the traversal
//! - articulation points and bridges, when the traversal offered every edge from both
//!   of its endpoints (the view is *direction agnostic*)
//!
//! ## Features
//!
//! - **Graph agnostic** - Views borrow any [`graph::GraphBase`] implementation; no copy is made
//! - **Pluggable traversal** - A [`graph::Traverser`] (or a plain closure) decides which edges are followed
//! - **Mixed graphs** - [`graph::AdjacencyGraph`] holds directed and undirected edges, self-loops and parallel edges
//! - **Iterative** - Walks use an explicit stack and handle deep graphs without recursion
//! - **Eager and immutable** - Views are computed once; every query is a lookup
//!
//! ## Quick Start
//!
//! ```rust
//! use forestview::prelude::*;
//!
//! // Two rings of rooms joined by a single corridor.
//! let mut station: AdjacencyGraph<&str, ()> = AdjacencyGraph::new();
//! let rooms: Vec<_> = ["dock", "galley", "bridge", "lab", "bay", "vault"]
//!     .into_iter()
//!     .map(|name| station.add_node(name))
//!     .collect();
//! for (a, b) in [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)] {
//!     station.add_undirected_edge(rooms[a], rooms[b], ())?;
//! }
//! let corridor = station.add_undirected_edge(rooms[2], rooms[3], ())?;
//!
//! let view = DepthFirstForestView::new(&station, DirectionTraverser::any())?;
//! assert!(view.is_direction_agnostic());
//! assert!(view.is_bridge(corridor)?);
//! assert!(view.is_articulation_point(rooms[2])?);
//! # Ok::<(), forestview::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`]. Querying a node the view never visited
//! yields [`Error::NoSuchNode`]; structural queries on a view that is not direction
//! agnostic yield [`Error::NotDirectionAgnostic`].
//!
//! ## Logging
//!
//! View construction emits [`tracing`] events: `debug` for tree-level events (new trees,
//! loss of direction agnosticism) and `trace` for every classified edge. The library never
//! installs a subscriber.

pub(crate) mod error;

/// View configuration.
///
/// See [`ViewConfig`] for the available options and presets.
pub mod config;

/// Graph contracts, traversers and the reference [`graph::AdjacencyGraph`].
///
/// # Key Types
///
/// - [`graph::GraphBase`], [`graph::EdgeSet`], [`graph::Incidence`] - What a view needs from a graph
/// - [`graph::Traverser`], [`graph::DirectionTraverser`] - Which edges a walk follows
/// - [`graph::Direction`] - Edge direction flags relative to a node
pub mod graph;

/// Depth-first views and the walk they are built on.
///
/// # Key Types
///
/// - [`forest::DepthFirstForestView`] - One tree per unvisited node of the graph
/// - [`forest::DepthFirstTreeView`] - A single tree from a fixed start node
/// - [`forest::DepthFirstTraverser`] - Iterative depth-first walk with pruning
/// - [`forest::EdgeKind`] - Classification of every offered edge
pub mod forest;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use forestview::prelude::*;
///
/// let graph: AdjacencyGraph<(), ()> = AdjacencyGraph::new();
/// let view = DepthFirstForestView::new(&graph, DirectionTraverser::any())?;
/// assert!(view.roots().is_empty());
/// # Ok::<(), forestview::Error>(())
/// ```
pub mod prelude;

/// `forestview` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `forestview` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;

/// Configuration controlling how much a view computes while it is built.
pub use config::ViewConfig;

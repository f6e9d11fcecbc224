//! # forestview Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the forestview library. Import this module to get quick access to graphs,
//! traversers and depth-first views.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all forestview operations
pub use crate::Error;

/// The result type used throughout forestview
pub use crate::Result;

/// Configuration for building depth-first views
pub use crate::ViewConfig;

// ================================================================================================
// Graphs and Traversal
// ================================================================================================

/// Capabilities a graph exposes to depth-first views
pub use crate::graph::{EdgeSet, GraphBase, Incidence, Incident};

/// Reference graph implementation and its handles
pub use crate::graph::{AdjacencyGraph, EdgeId, NodeId};

/// Edge direction flags and traversers
pub use crate::graph::{Direction, DirectionTraverser, Traverser};

// ================================================================================================
// Depth-First Views
// ================================================================================================

/// Forest and tree views
pub use crate::forest::{DepthFirstForestView, DepthFirstTreeView, DepthFirstView};

/// Iterative depth-first walk
pub use crate::forest::{DepthFirstTraverser, DfsStep};

/// Edge classification
pub use crate::forest::{ClassifiedEdge, EdgeKind};

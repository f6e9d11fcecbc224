//! View configuration
//!
//! This module provides the options that control how much bookkeeping a depth-first view
//! performs while it is being built. Discovery and finishing times, parent edges and the
//! cyclic flag are always computed; structural analysis and the edge-classification log
//! are optional.

/// Configuration for building a depth-first view
///
/// Structural analysis (direction agnosticism, articulation points, bridges) costs an
/// amortized constant per edge and is on by default. The edge-classification log costs one
/// entry per traversal step and is off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    /// Track unresolved edges to decide direction agnosticism and compute articulation points
    /// and bridges. When disabled, the view is never direction agnostic.
    pub structural_analysis: bool,

    /// Keep an ordered log of every classified edge, see
    /// [`DepthFirstView::edge_kinds`](crate::forest::DepthFirstView::edge_kinds)
    pub record_edge_kinds: bool,

    /// Capacity hint for the number of nodes the view will visit (default: 0)
    pub expected_nodes: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            structural_analysis: true,
            record_edge_kinds: false,
            expected_nodes: 0,
        }
    }
}

impl ViewConfig {
    /// Creates a minimal configuration: times, parents and the cyclic flag only
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            structural_analysis: false,
            record_edge_kinds: false,
            expected_nodes: 0,
        }
    }

    /// Creates a configuration with every analysis and the classification log enabled
    #[must_use]
    pub fn comprehensive() -> Self {
        Self {
            structural_analysis: true,
            record_edge_kinds: true,
            expected_nodes: 0,
        }
    }

    /// Sets the node capacity hint
    #[must_use]
    pub fn with_expected_nodes(mut self, expected_nodes: usize) -> Self {
        self.expected_nodes = expected_nodes;
        self
    }
}

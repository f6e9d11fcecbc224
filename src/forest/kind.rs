//! Edge classification produced while a view is built.

use strum::{Display, EnumCount, EnumIter};

/// How a depth-first walk classified an offered `(node, edge)` pair.
///
/// The same undirected edge is usually offered twice, once from each endpoint, and is
/// classified once per offer: a tree edge is later seen as a [`EdgeKind::Parent`] edge, a
/// back edge as a [`EdgeKind::Forward`] edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum EdgeKind {
    /// Led to a node that had not been visited yet
    Tree,
    /// The edge through which the exploring node was itself discovered
    Parent,
    /// Led to an ancestor that is still being explored
    Back,
    /// Led from a node to itself
    #[strum(serialize = "self-loop")]
    SelfLoop,
    /// Led to an already finished descendant
    Forward,
    /// Led to an already finished node that is not a descendant
    Cross,
}

impl EdgeKind {
    /// Returns `true` for the kinds that close a cycle.
    #[must_use]
    pub fn is_cyclic(self) -> bool {
        matches!(self, EdgeKind::Back | EdgeKind::SelfLoop)
    }
}

/// One entry of a view's edge-classification log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassifiedEdge<N, E> {
    /// Node whose adjacency offered the edge
    pub from: N,
    /// Node the edge leads to
    pub to: N,
    /// The offered edge
    pub edge: E,
    /// Classification of the offer
    pub kind: EdgeKind,
}

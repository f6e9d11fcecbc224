//! Node identifiers for [`AdjacencyGraph`](crate::graph::AdjacencyGraph).
//!
//! [`NodeId`] is the handle the bundled graph hands out for its nodes. Views never
//! require it: any `Copy + Eq + Hash + Debug` type can serve as a node handle through
//! [`GraphBase::Node`](crate::graph::GraphBase::Node).

use std::fmt;

/// A strongly-typed identifier for a node of an [`AdjacencyGraph`](crate::graph::AdjacencyGraph).
///
/// Node IDs are assigned sequentially starting from 0 by
/// [`AdjacencyGraph::add_node`](crate::graph::AdjacencyGraph::add_node), which makes the
/// graph's natural enumeration order the order in which nodes were added. That order is
/// what decides which nodes become roots of a
/// [`DepthFirstForestView`](crate::forest::DepthFirstForestView).
///
/// # Examples
///
/// ```rust
/// use forestview::graph::{AdjacencyGraph, NodeId};
///
/// let mut graph: AdjacencyGraph<&str, ()> = AdjacencyGraph::new();
/// let depot = graph.add_node("depot");
/// let mine = graph.add_node("mine");
///
/// assert_eq!(depot, NodeId::new(0));
/// assert!(depot < mine);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// Intended for tests and for graphs that manage their own index space. Normal usage
    /// obtains IDs from [`AdjacencyGraph::add_node`](crate::graph::AdjacencyGraph::add_node).
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw 0-based index of this node.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_id_roundtrips_index() {
        let node = NodeId::new(42);
        assert_eq!(node.index(), 42);

        let raw: usize = node.into();
        assert_eq!(raw, 42);
        assert_eq!(NodeId::from(raw), node);
    }

    #[test]
    fn test_node_id_ordering_follows_index() {
        let mut nodes = vec![NodeId::new(3), NodeId::new(1), NodeId::new(2)];
        nodes.sort();
        assert_eq!(nodes, vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
    }

    #[test]
    fn test_node_id_identity_in_sets() {
        let mut set = HashSet::new();
        set.insert(NodeId::new(1));
        set.insert(NodeId::new(1));
        set.insert(NodeId::new(2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_node_id_formatting() {
        let node = NodeId::new(7);
        assert_eq!(format!("{node:?}"), "NodeId(7)");
        assert_eq!(format!("{node}"), "n7");
    }
}

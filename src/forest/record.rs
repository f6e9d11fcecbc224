//! Per-node records kept by a depth-first view.
//!
//! Records are appended in discovery order and never removed. They reference each other
//! by their position in the store, so the subtree of a node is the contiguous run of
//! records starting at its own position.

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use indexmap::IndexMap;

use crate::{Error, Result};

/// What a depth-first view remembers about one visited node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NodeRecord<N, E> {
    pub(crate) node: N,
    /// Edge the node was discovered through, `None` for a tree root
    pub(crate) parent_edge: Option<E>,
    pub(crate) parent: Option<usize>,
    pub(crate) root: usize,
    pub(crate) depth: usize,
    pub(crate) discovery: usize,
    /// 0 until the subtree has been explored
    pub(crate) finishing: usize,
    /// Earliest-discovered record reachable from the subtree through one back edge
    pub(crate) reachable_ancestor: usize,
    pub(crate) articulation: bool,
    /// Number of tree-edge children
    pub(crate) children: usize,
}

impl<N, E> NodeRecord<N, E> {
    pub(crate) fn is_finished(&self) -> bool {
        self.finishing != 0
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.finishing == self.discovery + 1
    }
}

/// Records of a view, keyed by node and ordered by discovery.
#[derive(Debug, Clone)]
pub(crate) struct RecordStore<N, E> {
    records: IndexMap<N, NodeRecord<N, E>>,
    forest_edges: HashMap<E, usize>,
}

impl<N, E> RecordStore<N, E>
where
    N: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Hash + Debug,
{
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        RecordStore {
            records: IndexMap::with_capacity(capacity),
            forest_edges: HashMap::with_capacity(capacity),
        }
    }

    /// Appends the record of a newly discovered node and returns its position.
    pub(crate) fn discover(
        &mut self,
        node: N,
        parent_edge: Option<E>,
        parent: Option<usize>,
        discovery: usize,
    ) -> usize {
        let index = self.records.len();
        let (root, depth) = match parent {
            Some(parent) => (self.records[parent].root, self.records[parent].depth + 1),
            None => (index, 0),
        };
        if let Some(edge) = parent_edge {
            self.forest_edges.insert(edge, index);
        }
        if let Some(parent) = parent {
            self.records[parent].children += 1;
        }
        self.records.insert(
            node,
            NodeRecord {
                node,
                parent_edge,
                parent,
                root,
                depth,
                discovery,
                finishing: 0,
                reachable_ancestor: index,
                articulation: false,
                children: 0,
            },
        );
        index
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn index_of(&self, node: N) -> Option<usize> {
        self.records.get_index_of(&node)
    }

    /// Returns the position of `node`, or [`Error::NoSuchNode`] if it was never visited.
    pub(crate) fn lookup(&self, node: N) -> Result<usize> {
        self.index_of(node)
            .ok_or_else(|| Error::NoSuchNode(format!("{node:?}")))
    }

    pub(crate) fn get(&self, index: usize) -> &NodeRecord<N, E> {
        &self.records[index]
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut NodeRecord<N, E> {
        &mut self.records[index]
    }

    /// Returns the record of `node`, or [`Error::NoSuchNode`].
    pub(crate) fn record(&self, node: N) -> Result<&NodeRecord<N, E>> {
        let index = self.lookup(node)?;
        Ok(self.get(index))
    }

    /// Returns the position of the record discovered through `edge`.
    pub(crate) fn child_by_edge(&self, edge: E) -> Option<usize> {
        self.forest_edges.get(&edge).copied()
    }

    /// Returns the discovery time of the reachable ancestor of the record at `index`.
    pub(crate) fn reach_discovery(&self, index: usize) -> usize {
        self.records[self.records[index].reachable_ancestor].discovery
    }

    /// Returns the positions of the subtree rooted at `index`, in discovery order.
    pub(crate) fn subtree(&self, index: usize) -> std::ops::Range<usize> {
        let finishing = self.records[index].finishing;
        let end = self
            .records
            .values()
            .skip(index)
            .position(|record| record.discovery > finishing)
            .map_or(self.records.len(), |offset| index + offset);
        index..end
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &NodeRecord<N, E>> {
        self.records.values()
    }
}

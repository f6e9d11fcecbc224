//! Unresolved-edge bookkeeping for direction agnosticism.
//!
//! An edge is *unresolved* while it has been offered from one endpoint and is still
//! expected from the other. The builder holds such edges against a record and releases
//! them when the reciprocal offer arrives. A tree whose walk ends with every edge released
//! was explored by a traverser that offers each edge from both sides.

use std::{collections::HashMap, hash::Hash};

/// Edge to holding-record map plus per-record outstanding counts.
#[derive(Debug)]
pub(crate) struct EdgeTracker<E> {
    owners: HashMap<E, usize>,
    outstanding: HashMap<usize, usize>,
}

impl<E: Copy + Eq + Hash> EdgeTracker<E> {
    pub(crate) fn new() -> Self {
        EdgeTracker {
            owners: HashMap::new(),
            outstanding: HashMap::new(),
        }
    }

    /// Holds `edge` against the record at `owner`.
    ///
    /// An edge already held stays with its first owner.
    pub(crate) fn hold(&mut self, edge: E, owner: usize) {
        if self.owners.contains_key(&edge) {
            return;
        }
        self.owners.insert(edge, owner);
        *self.outstanding.entry(owner).or_insert(0) += 1;
    }

    /// Releases `edge`, returning `false` if it was not held.
    pub(crate) fn release(&mut self, edge: E) -> bool {
        let Some(owner) = self.owners.remove(&edge) else {
            return false;
        };
        if let Some(count) = self.outstanding.get_mut(&owner) {
            *count -= 1;
            if *count == 0 {
                self.outstanding.remove(&owner);
            }
        }
        true
    }

    /// Returns `true` if no edge is held against `owner`.
    pub(crate) fn is_settled(&self, owner: usize) -> bool {
        !self.outstanding.contains_key(&owner)
    }

    /// Returns the number of edges still held.
    pub(crate) fn len(&self) -> usize {
        self.owners.len()
    }
}

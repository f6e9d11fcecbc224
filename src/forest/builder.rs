//! Construction of depth-first trees.
//!
//! [`ForestBuilder`] runs one depth-first walk per tree and turns every step into record
//! updates: discovery and finishing times, parent links, the cyclic flag and, while the
//! walk can still prove that every edge was offered from both of its endpoints, the
//! low-link data behind articulation points and bridges.
//!
//! # Classification
//!
//! With `current` the node whose adjacency is being explored, an offer of `(target, edge)`
//! is classified as:
//!
//! | target                                   | kind      | effect                             |
//! |------------------------------------------|-----------|------------------------------------|
//! | not visited                              | tree      | new record, edge held by target    |
//! | `current` itself                         | self-loop | cyclic                             |
//! | unfinished, `edge` is `current`'s parent | parent    | edge released                      |
//! | unfinished, otherwise                    | back      | cyclic, edge held by target        |
//! | finished, discovered after `current`     | forward   | edge released, or tracking stops   |
//! | finished, otherwise                      | cross     | tracking stops                     |
//!
//! Tracking also stops when a node finishes while edges are still held against it. A tree
//! whose walk ends with tracking active leaves the view direction agnostic.

use tracing::{debug, trace};

use crate::{
    config::ViewConfig,
    forest::{
        kind::{ClassifiedEdge, EdgeKind},
        record::RecordStore,
        tracker::EdgeTracker,
        walk::DepthFirstTraverser,
    },
    graph::{GraphBase, Traverser},
    Result,
};

/// Accumulates the records of every tree of a view under construction.
pub(crate) struct ForestBuilder<N, E> {
    pub(crate) records: RecordStore<N, E>,
    pub(crate) edge_kinds: Vec<ClassifiedEdge<N, E>>,
    pub(crate) cyclic: bool,
    pub(crate) direction_agnostic: bool,
    /// Last time stamp handed out, shared by every tree of the view
    time: usize,
    config: ViewConfig,
}

impl<N, E> ForestBuilder<N, E>
where
    N: Copy + Eq + std::hash::Hash + std::fmt::Debug,
    E: Copy + Eq + std::hash::Hash + std::fmt::Debug,
{
    pub(crate) fn new(config: ViewConfig) -> Self {
        ForestBuilder {
            records: RecordStore::with_capacity(config.expected_nodes),
            edge_kinds: Vec::new(),
            cyclic: false,
            direction_agnostic: config.structural_analysis,
            time: 0,
            config,
        }
    }

    /// Explores the tree rooted at `root` and returns the position of its root record.
    ///
    /// `root` must not have been visited by an earlier tree.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `traverser`. The builder is left partially
    /// filled and must be discarded.
    pub(crate) fn visit_tree<G, T>(&mut self, graph: &G, traverser: &T, root: N) -> Result<usize>
    where
        G: GraphBase<Node = N, Edge = E>,
        T: Traverser<G>,
    {
        let root_index = self.records.len();
        debug!(root = ?root, time = self.time, "exploring depth-first tree");

        let mut tracker = self.config.structural_analysis.then(EdgeTracker::new);
        let mut walk = DepthFirstTraverser::new(graph, traverser, root);
        let mut current: Option<usize> = None;

        while let Some(step) = walk.next() {
            let step = step?;

            if step.is_ascending() {
                let Some(index) = current else {
                    break;
                };
                self.time += 1;
                self.records.get_mut(index).finishing = self.time;
                self.ascend(index, &mut tracker);
                current = self.records.get(index).parent;
                continue;
            }

            let Some(target) = self.records.index_of(step.node) else {
                self.time += 1;
                let index = self
                    .records
                    .discover(step.node, step.edge, current, self.time);
                if let Some(edge) = step.edge {
                    if let Some(tracker) = tracker.as_mut() {
                        tracker.hold(edge, index);
                    }
                    if let Some(from) = current {
                        self.classify(from, index, edge, EdgeKind::Tree);
                    }
                }
                current = Some(index);
                continue;
            };

            walk.prune();
            let (Some(from), Some(edge)) = (current, step.edge) else {
                continue;
            };
            let kind = self.revisit(from, target, edge, &mut tracker);
            self.classify(from, target, edge, kind);
        }

        if tracker.is_some() {
            let root_record = self.records.get_mut(root_index);
            root_record.articulation = root_record.children >= 2;
        } else if self.config.structural_analysis {
            debug!(root = ?root, "tree is not direction agnostic");
        }
        self.direction_agnostic &= tracker.is_some();

        Ok(root_index)
    }

    /// Classifies an offer reaching the already visited record at `target`.
    fn revisit(
        &mut self,
        from: usize,
        target: usize,
        edge: E,
        tracker: &mut Option<EdgeTracker<E>>,
    ) -> EdgeKind {
        if from == target {
            self.cyclic = true;
            return EdgeKind::SelfLoop;
        }

        let target_record = self.records.get(target);
        if !target_record.is_finished() {
            if self.records.get(from).parent_edge == Some(edge) {
                if let Some(tracker) = tracker.as_mut() {
                    tracker.release(edge);
                }
                return EdgeKind::Parent;
            }

            self.cyclic = true;
            if let Some(tracker) = tracker.as_mut() {
                tracker.hold(edge, target);
                let target_discovery = target_record.discovery;
                if target_discovery < self.records.reach_discovery(from) {
                    self.records.get_mut(from).reachable_ancestor = target;
                }
            }
            return EdgeKind::Back;
        }

        if target_record.discovery > self.records.get(from).discovery {
            let released = tracker
                .as_mut()
                .is_some_and(|tracker| tracker.release(edge));
            if !released {
                Self::stop_tracking(tracker, "unresolved forward edge");
            }
            return EdgeKind::Forward;
        }

        Self::stop_tracking(tracker, "cross edge");
        EdgeKind::Cross
    }

    /// Propagates low-link data from the record at `index` to its parent.
    fn ascend(&mut self, index: usize, tracker: &mut Option<EdgeTracker<E>>) {
        let Some(active) = tracker.as_ref() else {
            return;
        };
        if !active.is_settled(index) {
            Self::stop_tracking(tracker, "node finished with unresolved edges");
            return;
        }

        let Some(parent) = self.records.get(index).parent else {
            return;
        };
        let reach = self.records.get(index).reachable_ancestor;
        let reach_discovery = self.records.get(reach).discovery;
        if reach_discovery >= self.records.get(parent).discovery {
            let parent_record = self.records.get_mut(parent);
            if !parent_record.articulation {
                trace!(node = ?parent_record.node, "articulation point");
            }
            parent_record.articulation = true;
        } else if reach_discovery < self.records.reach_discovery(parent) {
            self.records.get_mut(parent).reachable_ancestor = reach;
        }
    }

    fn stop_tracking(tracker: &mut Option<EdgeTracker<E>>, reason: &str) {
        if let Some(dropped) = tracker.take() {
            debug!(reason, unresolved = dropped.len(), "stopped tracking unresolved edges");
        }
    }

    fn classify(&mut self, from: usize, to: usize, edge: E, kind: EdgeKind) {
        let from = self.records.get(from).node;
        let to = self.records.get(to).node;
        trace!(from = ?from, to = ?to, edge = ?edge, %kind, "classified edge");
        if self.config.record_edge_kinds {
            self.edge_kinds.push(ClassifiedEdge {
                from,
                to,
                edge,
                kind,
            });
        }
    }
}

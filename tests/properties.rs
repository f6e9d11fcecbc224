//! Property tests for depth-first views on random graphs.
//!
//! Articulation points and bridges are checked against brute-force component counting on
//! random undirected multigraphs (self-loops and parallel edges included). Time stamp and
//! ancestry invariants are checked on random mixed graphs.

use forestview::prelude::*;
use proptest::prelude::*;

/// Undirected multigraph as a node count and an edge list.
fn undirected_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..10).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..24)))
}

/// Mixed graph as a node count and an edge list with direction flags.
fn mixed_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, bool)>)> {
    (1usize..10).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, any::<bool>()), 0..24),
        )
    })
}

fn build(n: usize, edges: &[(usize, usize, bool)]) -> (AdjacencyGraph<(), ()>, Vec<NodeId>) {
    let mut graph = AdjacencyGraph::new();
    let nodes: Vec<_> = (0..n).map(|_| graph.add_node(())).collect();
    for &(u, v, directed) in edges {
        graph.add_edge(nodes[u], nodes[v], directed, ()).unwrap();
    }
    (graph, nodes)
}

/// Counts connected components, ignoring `skip_node` and the edge at `skip_edge`.
fn components(
    n: usize,
    edges: &[(usize, usize)],
    skip_node: Option<usize>,
    skip_edge: Option<usize>,
) -> usize {
    let mut parent: Vec<usize> = (0..n).collect();
    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }

    for (index, &(u, v)) in edges.iter().enumerate() {
        if Some(index) == skip_edge || Some(u) == skip_node || Some(v) == skip_node {
            continue;
        }
        let (ru, rv) = (find(&mut parent, u), find(&mut parent, v));
        parent[ru] = rv;
    }

    (0..n)
        .filter(|&x| Some(x) != skip_node)
        .filter(|&x| find(&mut parent, x) == x)
        .count()
}

proptest! {
    #[test]
    fn articulation_points_match_component_counting((n, edges) in undirected_graph()) {
        let mixed: Vec<_> = edges.iter().map(|&(u, v)| (u, v, false)).collect();
        let (graph, nodes) = build(n, &mixed);
        let view = DepthFirstForestView::new(&graph, DirectionTraverser::any()).unwrap();
        prop_assert!(view.is_direction_agnostic());

        let baseline = components(n, &edges, None, None);
        for (index, &node) in nodes.iter().enumerate() {
            let expected = components(n, &edges, Some(index), None) > baseline;
            prop_assert_eq!(view.is_articulation_point(node).unwrap(), expected, "node {}", index);
        }
    }

    #[test]
    fn bridges_match_component_counting((n, edges) in undirected_graph()) {
        let mixed: Vec<_> = edges.iter().map(|&(u, v)| (u, v, false)).collect();
        let (graph, _) = build(n, &mixed);
        let view = DepthFirstForestView::new(&graph, DirectionTraverser::any()).unwrap();

        let baseline = components(n, &edges, None, None);
        for (index, edge) in graph.edge_ids().enumerate() {
            let expected = components(n, &edges, None, Some(index)) > baseline;
            prop_assert_eq!(view.is_bridge(edge).unwrap(), expected, "edge {}", index);
        }
    }

    #[test]
    fn cyclic_matches_forest_edge_count((n, edges) in undirected_graph()) {
        let mixed: Vec<_> = edges.iter().map(|&(u, v)| (u, v, false)).collect();
        let (graph, _) = build(n, &mixed);
        let view = DepthFirstForestView::new(&graph, DirectionTraverser::any()).unwrap();

        // An undirected forest has exactly n - components edges
        let acyclic = edges.len() == n - components(n, &edges, None, None);
        prop_assert_eq!(view.is_cyclic(), !acyclic);
    }

    #[test]
    fn time_stamps_are_a_permutation((n, edges) in mixed_graph()) {
        let (graph, nodes) = build(n, &edges);
        let view = DepthFirstForestView::new(&graph, DirectionTraverser::outgoing()).unwrap();

        let mut stamps: Vec<_> = nodes
            .iter()
            .flat_map(|&node| {
                [
                    view.discovery_time(node).unwrap(),
                    view.finishing_time(node).unwrap(),
                ]
            })
            .collect();
        stamps.sort_unstable();
        prop_assert_eq!(stamps, (1..=2 * n).collect::<Vec<_>>());

        for &node in &nodes {
            let finishing = view.finishing_time(node).unwrap();
            prop_assert!(finishing > view.discovery_time(node).unwrap());
            if let Some(parent) = view.parent(node).unwrap() {
                prop_assert!(view.finishing_time(parent).unwrap() > finishing);
            }
        }
    }

    #[test]
    fn ancestry_matches_parent_chains((n, edges) in mixed_graph()) {
        let (graph, nodes) = build(n, &edges);
        let view = DepthFirstForestView::new(&graph, DirectionTraverser::outgoing()).unwrap();

        for &u in &nodes {
            prop_assert_eq!(view.least_common_ancestor(u, u).unwrap(), Some(u));
            prop_assert!(view.roots().contains(&view.root_of(u).unwrap()));
            if view.is_leaf(u).unwrap() {
                prop_assert_eq!(view.children(u).unwrap().count(), 0);
            }

            for &v in &nodes {
                let mut chain = Some(v);
                let mut on_chain = false;
                while let Some(current) = chain {
                    if current == u {
                        on_chain = true;
                        break;
                    }
                    chain = view.parent(current).unwrap();
                }
                prop_assert_eq!(view.is_ancestor(u, v).unwrap(), on_chain);

                if let Some(lca) = view.least_common_ancestor(u, v).unwrap() {
                    prop_assert!(view.is_ancestor(lca, u).unwrap());
                    prop_assert!(view.is_ancestor(lca, v).unwrap());
                } else {
                    prop_assert_ne!(view.root_of(u).unwrap(), view.root_of(v).unwrap());
                }
            }
        }
    }

    #[test]
    fn children_partition_descendants((n, edges) in mixed_graph()) {
        let (graph, nodes) = build(n, &edges);
        let view = DepthFirstForestView::new(&graph, DirectionTraverser::any()).unwrap();

        for &node in &nodes {
            let below: usize = view
                .children(node)
                .unwrap()
                .map(|(child, _)| view.descendants(child).unwrap().count())
                .sum();
            prop_assert_eq!(view.descendants(node).unwrap().count(), below + 1);
        }
    }
}

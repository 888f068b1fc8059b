use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::Arc;

use algoviz::graph::{bfs, dfs, dijkstra};
use algoviz::search::{binary_search, linear_search};
use algoviz::sorting::{bubble_sort, heap_sort, merge_sort, quick_sort};
use algoviz_frames::{Edge, Graph, GraphEvent, Node, NodeId, SearchEvent, SortFrame};
use proptest::prelude::*;

type Sorter = fn(&[f64]) -> Vec<SortFrame>;

const SORTERS: [(&str, Sorter); 4] = [
    ("bubble", bubble_sort),
    ("quick", quick_sort),
    ("merge", merge_sort),
    ("heap", heap_sort),
];

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

fn values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((-50i32..50).prop_map(f64::from), 0..24)
}

/// Graph on `n` nodes with at most one edge per ordered pair.
fn graphs() -> impl Strategy<Value = Graph> {
    (1u32..9).prop_flat_map(|n| {
        prop::collection::btree_map((0..n, 0..n), 0u32..20, 0..(n * n) as usize).prop_map(
            move |edges| {
                let nodes = (0..n).map(|id| Node::new(id, f64::from(id), 0.0)).collect();
                let edges = edges
                    .into_iter()
                    .filter(|((s, t), _)| s != t)
                    .map(|((source, target), weight)| Edge {
                        source,
                        target,
                        weight,
                    })
                    .collect();
                Graph::new(nodes, edges)
            },
        )
    })
}

fn reachable(graph: &Graph, start: NodeId) -> BTreeSet<NodeId> {
    let mut seen = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(n) = queue.pop_front() {
        for e in graph.edges.iter().filter(|e| e.source == n) {
            if seen.insert(e.target) {
                queue.push_back(e.target);
            }
        }
    }
    seen
}

fn hop_distances(graph: &Graph, start: NodeId) -> BTreeMap<NodeId, usize> {
    let mut dist = BTreeMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(n) = queue.pop_front() {
        let d = dist[&n];
        for e in graph.edges.iter().filter(|e| e.source == n) {
            if !dist.contains_key(&e.target) {
                dist.insert(e.target, d + 1);
                queue.push_back(e.target);
            }
        }
    }
    dist
}

/// Bellman-Ford over non-negative weights.
fn shortest(graph: &Graph, start: NodeId) -> BTreeMap<NodeId, Option<u64>> {
    let mut dist: BTreeMap<NodeId, Option<u64>> = graph
        .nodes
        .iter()
        .map(|n| (n.id, (n.id == start).then_some(0)))
        .collect();
    for _ in 0..graph.nodes.len() {
        for e in &graph.edges {
            if let Some(Some(d)) = dist.get(&e.source).copied() {
                let nd = d + u64::from(e.weight);
                let slot = dist.entry(e.target).or_insert(None);
                if slot.map_or(true, |cur| nd < cur) {
                    *slot = Some(nd);
                }
            }
        }
    }
    dist
}

fn path_weight(graph: &Graph, path: &[NodeId]) -> Option<u64> {
    path.windows(2)
        .map(|w| graph.weight(w[0], w[1]).map(u64::from))
        .sum()
}

proptest! {
    #[test]
    fn sorters_sort_and_are_idempotent(values in values()) {
        let expected = sorted(&values);
        for (name, sort) in SORTERS {
            let frames = sort(&values);
            prop_assert_eq!(&frames.last().unwrap().array, &expected, "{}", name);

            let again = sort(&expected);
            prop_assert_eq!(&again.first().unwrap().array, &again.last().unwrap().array, "{}", name);
        }
    }

    #[test]
    fn every_sort_frame_is_a_permutation(values in values()) {
        let expected = sorted(&values);
        for (name, sort) in SORTERS {
            for frame in sort(&values) {
                prop_assert_eq!(sorted(&frame.array), expected.clone(), "{}", name);
            }
        }
    }

    #[test]
    fn binary_search_is_sound(values in values(), target in -50i32..50) {
        let values = sorted(&values);
        let target = f64::from(target);
        let frames = binary_search(&values, target);
        let found = frames.last().unwrap().found_index;
        match found {
            Some(i) => prop_assert_eq!(values[i], target),
            None => prop_assert!(!values.contains(&target)),
        }
    }

    #[test]
    fn linear_search_finds_first_occurrence(values in values(), target in -50i32..50) {
        let target = f64::from(target);
        let frames = linear_search(&values, target);
        let first = values.iter().position(|&v| v == target);
        prop_assert_eq!(frames.last().unwrap().found_index, first);
    }

    #[test]
    fn unsorted_input_is_rejected_without_bisection(values in values(), target in -50i32..50) {
        prop_assume!(values.windows(2).any(|w| w[0] > w[1]));
        let frames = binary_search(&values, f64::from(target));
        prop_assert_eq!(frames.len(), 2);
        prop_assert_eq!(frames[1].event, SearchEvent::Rejected);
        prop_assert!(frames.iter().all(|f| f.current_index.is_none()));
    }

    #[test]
    fn traversals_visit_exactly_the_reachable_set(graph in graphs(), start in 0u32..9) {
        let start = start % graph.nodes.len() as u32;
        let expected = reachable(&graph, start);
        let graph = Arc::new(graph);
        for frames in [bfs(graph.clone(), start), dfs(graph.clone(), start)] {
            let last = frames.last().unwrap();
            prop_assert_eq!(last.event, GraphEvent::Conclude);
            let visited: BTreeSet<NodeId> = last.visited_nodes.iter().copied().collect();
            prop_assert_eq!(visited.len(), last.visited_nodes.len());
            prop_assert_eq!(&visited, &expected);
        }
    }

    #[test]
    fn bfs_visits_by_hop_distance(graph in graphs(), start in 0u32..9) {
        let start = start % graph.nodes.len() as u32;
        let hops = hop_distances(&graph, start);
        let frames = bfs(Arc::new(graph), start);
        let order = &frames.last().unwrap().visited_nodes;
        prop_assert!(order.windows(2).all(|w| hops[&w[0]] <= hops[&w[1]]));
    }

    #[test]
    fn dijkstra_matches_bellman_ford(graph in graphs(), start in 0u32..9, end in 0u32..9) {
        let n = graph.nodes.len() as u32;
        let (start, end) = (start % n, end % n);
        let expected = shortest(&graph, start);
        let frames = dijkstra(Arc::new(graph.clone()), start, end);
        let last = frames.last().unwrap();
        let distances = last.distances().unwrap();

        prop_assert_eq!(distances[&end], expected[&end]);
        for v in &last.visited_nodes {
            prop_assert_eq!(distances[v], expected[v]);
        }
        match expected[&end] {
            Some(d) => {
                prop_assert_eq!(last.path.first(), Some(&start));
                prop_assert_eq!(last.path.last(), Some(&end));
                prop_assert_eq!(path_weight(&graph, &last.path), Some(d));
            }
            None => prop_assert!(last.path.is_empty()),
        }
    }
}

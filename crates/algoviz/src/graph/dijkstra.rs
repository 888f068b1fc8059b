use std::collections::BTreeMap;
use std::sync::Arc;

use algoviz_frames::{Frontier, Graph, GraphEvent, GraphFrame, NodeId};

use super::Recorder;

type Distances = BTreeMap<NodeId, Option<u64>>;
type Previous = BTreeMap<NodeId, Option<NodeId>>;

/// Walks `previous` back from `to` and returns the route start-first.
///
/// The walk is bounded by the number of entries, so a malformed map cannot
/// loop forever.
pub fn reconstruct_path(previous: &Previous, to: NodeId) -> Vec<NodeId> {
    let mut path = vec![to];
    let mut at = to;
    while let Some(&Some(prev)) = previous.get(&at) {
        if path.len() > previous.len() {
            break;
        }
        path.push(prev);
        at = prev;
    }
    path.reverse();
    path
}

fn show(d: Option<u64>) -> String {
    d.map_or_else(|| "infinity".to_string(), |d| d.to_string())
}

/// Shortest paths from `start` with a linear minimum scan.
///
/// Each round picks the unvisited node with the strictly smallest known
/// distance (first in node order on ties). The search stops when no
/// reachable candidate is left or when `end` is picked. The final frame's
/// `path` is empty if `end` is unreachable.
pub fn dijkstra(graph: Arc<Graph>, start: NodeId, end: NodeId) -> Vec<GraphFrame> {
    let ids: Vec<NodeId> = graph.nodes.iter().map(|n| n.id).collect();
    let adjacency = graph.adjacency();
    let mut rec = Recorder::new(graph);

    let mut distances: Distances = ids
        .iter()
        .map(|&id| (id, (id == start).then_some(0)))
        .collect();
    let mut previous: Previous = ids.iter().map(|&id| (id, None)).collect();
    let mut unvisited = vec![true; ids.len()];
    let visited_of = |unvisited: &[bool]| -> Vec<NodeId> {
        ids.iter()
            .zip(unvisited)
            .filter(|(_, &open)| !open)
            .map(|(&id, _)| id)
            .collect()
    };
    let frontier = |d: &Distances, p: &Previous| Frontier::Distances {
        distances: d.clone(),
        previous: p.clone(),
    };

    rec.push(
        None,
        &[],
        frontier(&distances, &previous),
        &[],
        GraphEvent::Start,
        format!("Starting Dijkstra's algorithm from node {start}"),
    );

    loop {
        let mut best: Option<(usize, u64)> = None;
        for (slot, id) in ids.iter().enumerate() {
            if !unvisited[slot] {
                continue;
            }
            if let Some(Some(d)) = distances.get(id) {
                if best.map_or(true, |(_, b)| *d < b) {
                    best = Some((slot, *d));
                }
            }
        }
        let Some((slot, dist)) = best else { break };
        let current = ids[slot];
        if current == end {
            break;
        }

        unvisited[slot] = false;
        let visited = visited_of(&unvisited);
        rec.push(
            Some(current),
            &visited,
            frontier(&distances, &previous),
            &reconstruct_path(&previous, current),
            GraphEvent::Visit,
            format!("Visiting node {current} with current distance {dist}"),
        );

        for &(next, weight) in adjacency.get(&current).into_iter().flatten() {
            let candidate = dist + u64::from(weight);
            let known = distances.get(&next).copied();
            rec.push(
                Some(current),
                &visited,
                frontier(&distances, &previous),
                &reconstruct_path(&previous, current),
                GraphEvent::Relax,
                format!(
                    "Checking neighbor {next}, current distance: {}, new potential distance: {candidate}",
                    show(known.flatten())
                ),
            );
            // Targets that are not listed nodes have no distance slot.
            let Some(known) = known else { continue };
            if known.map_or(true, |k| candidate < k) {
                distances.insert(next, Some(candidate));
                previous.insert(next, Some(current));
                rec.push(
                    Some(current),
                    &visited,
                    frontier(&distances, &previous),
                    &reconstruct_path(&previous, next),
                    GraphEvent::Update,
                    format!("Updated distance to node {next} to {candidate}"),
                );
            }
        }
    }

    let reached = distances.get(&end).copied().flatten();
    let (path, description) = match reached {
        Some(d) => (
            reconstruct_path(&previous, end),
            format!("Found shortest path with distance {d}"),
        ),
        None => (Vec::new(), format!("No path found to node {end}")),
    };
    rec.push(
        None,
        &visited_of(&unvisited),
        frontier(&distances, &previous),
        &path,
        GraphEvent::Conclude,
        description,
    );
    rec.finish("dijkstra")
}

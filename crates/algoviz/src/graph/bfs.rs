use std::collections::{BTreeSet, VecDeque};
use std::sync::Arc;

use algoviz_frames::{Frontier, Graph, GraphEvent, GraphFrame, NodeId};

use super::Recorder;

/// Breadth-first traversal following directed edges in edge-list order.
///
/// A neighbour is enqueued only if it is neither visited nor already waiting
/// in the queue. `path` and `visited_nodes` both hold the visit order.
pub fn bfs(graph: Arc<Graph>, start: NodeId) -> Vec<GraphFrame> {
    let adjacency = graph.adjacency();
    let mut rec = Recorder::new(graph);
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut seen: BTreeSet<NodeId> = BTreeSet::new();
    let mut order: Vec<NodeId> = Vec::new();
    let snapshot = |q: &VecDeque<NodeId>| Frontier::Queue(q.iter().copied().collect());

    rec.push(
        None,
        &[],
        Frontier::Queue(Vec::new()),
        &[],
        GraphEvent::Start,
        format!("Starting BFS from node {start}"),
    );
    queue.push_back(start);
    rec.push(
        None,
        &[],
        snapshot(&queue),
        &[],
        GraphEvent::Enqueue,
        format!("Enqueued start node {start}"),
    );

    while let Some(node) = queue.pop_front() {
        rec.push(
            Some(node),
            &order,
            snapshot(&queue),
            &order,
            GraphEvent::Dequeue,
            format!("Dequeued node {node}"),
        );
        if seen.contains(&node) {
            rec.push(
                Some(node),
                &order,
                snapshot(&queue),
                &order,
                GraphEvent::Skip,
                format!("Node {node} has already been visited, skipping"),
            );
            continue;
        }
        seen.insert(node);
        order.push(node);
        rec.push(
            Some(node),
            &order,
            snapshot(&queue),
            &order,
            GraphEvent::Visit,
            format!("Marked node {node} as visited"),
        );

        for &(next, _) in adjacency.get(&node).into_iter().flatten() {
            if !seen.contains(&next) && !queue.contains(&next) {
                queue.push_back(next);
                rec.push(
                    Some(node),
                    &order,
                    snapshot(&queue),
                    &order,
                    GraphEvent::Enqueue,
                    format!("Enqueued unvisited neighbor {next}"),
                );
            } else {
                let why = if seen.contains(&next) { "visited" } else { "enqueued" };
                rec.push(
                    Some(node),
                    &order,
                    snapshot(&queue),
                    &order,
                    GraphEvent::Ignore,
                    format!("Neighbor {next} has already been {why}, not enqueueing"),
                );
            }
        }
    }

    rec.push(
        None,
        &order,
        Frontier::Queue(Vec::new()),
        &order,
        GraphEvent::Conclude,
        "BFS traversal complete! All reachable nodes have been visited.".into(),
    );
    rec.finish("bfs")
}

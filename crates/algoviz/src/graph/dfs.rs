use std::collections::BTreeSet;
use std::sync::Arc;

use algoviz_frames::{Frontier, Graph, GraphEvent, GraphFrame, NodeId};

use super::Recorder;

/// Iterative depth-first traversal.
///
/// Neighbours are pushed in reverse edge order so they pop in edge order.
/// Unlike [`bfs`](super::bfs), a node may sit on the stack more than once;
/// the extra copies are skipped when popped.
pub fn dfs(graph: Arc<Graph>, start: NodeId) -> Vec<GraphFrame> {
    let adjacency = graph.adjacency();
    let mut rec = Recorder::new(graph);
    let mut stack: Vec<NodeId> = Vec::new();
    let mut seen: BTreeSet<NodeId> = BTreeSet::new();
    let mut order: Vec<NodeId> = Vec::new();

    rec.push(
        None,
        &[],
        Frontier::Stack(Vec::new()),
        &[],
        GraphEvent::Start,
        format!("Starting DFS from node {start}"),
    );
    stack.push(start);
    rec.push(
        None,
        &[],
        Frontier::Stack(stack.clone()),
        &[],
        GraphEvent::Enqueue,
        format!("Pushed start node {start} to the stack"),
    );

    while let Some(node) = stack.pop() {
        rec.push(
            Some(node),
            &order,
            Frontier::Stack(stack.clone()),
            &order,
            GraphEvent::Dequeue,
            format!("Popped node {node} from stack"),
        );
        if !seen.insert(node) {
            rec.push(
                Some(node),
                &order,
                Frontier::Stack(stack.clone()),
                &order,
                GraphEvent::Skip,
                format!("Node {node} has already been visited, skipping"),
            );
            continue;
        }
        order.push(node);
        rec.push(
            Some(node),
            &order,
            Frontier::Stack(stack.clone()),
            &order,
            GraphEvent::Visit,
            format!("Marked node {node} as visited"),
        );

        for &(next, _) in adjacency.get(&node).into_iter().flatten().rev() {
            if seen.contains(&next) {
                rec.push(
                    Some(node),
                    &order,
                    Frontier::Stack(stack.clone()),
                    &order,
                    GraphEvent::Ignore,
                    format!("Neighbor {next} has already been visited, not pushing to stack"),
                );
            } else {
                stack.push(next);
                rec.push(
                    Some(node),
                    &order,
                    Frontier::Stack(stack.clone()),
                    &order,
                    GraphEvent::Enqueue,
                    format!("Pushed unvisited neighbor {next} to stack"),
                );
            }
        }
    }

    rec.push(
        None,
        &order,
        Frontier::Stack(Vec::new()),
        &order,
        GraphEvent::Conclude,
        "DFS traversal complete! All reachable nodes have been visited.".into(),
    );
    rec.finish("dfs")
}

//! Graph traversal tracers.
//!
//! All three share one immutable [`Graph`] behind an `Arc`; frames clone the
//! handle, not the graph. Only the traversal state (current node, visited
//! set, frontier, path) differs between frames.

mod bfs;
mod dfs;
mod dijkstra;

pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;

use std::sync::Arc;

use algoviz_frames::{Frontier, Graph, GraphEvent, GraphFrame, NodeId};

/// Accumulates frames that all point at the same graph.
struct Recorder {
    graph: Arc<Graph>,
    frames: Vec<GraphFrame>,
}

impl Recorder {
    fn new(graph: Arc<Graph>) -> Self {
        Self {
            graph,
            frames: Vec::new(),
        }
    }

    fn push(
        &mut self,
        current_node: Option<NodeId>,
        visited_nodes: &[NodeId],
        frontier: Frontier,
        path: &[NodeId],
        event: GraphEvent,
        description: String,
    ) {
        self.frames.push(GraphFrame {
            graph: Arc::clone(&self.graph),
            current_node,
            visited_nodes: visited_nodes.to_vec(),
            frontier,
            path: path.to_vec(),
            description,
            event,
        });
    }

    fn finish(self, algorithm: &str) -> Vec<GraphFrame> {
        tracing::debug!(
            algorithm,
            nodes = self.graph.nodes.len(),
            edges = self.graph.edges.len(),
            frames = self.frames.len(),
            "graph traced"
        );
        self.frames
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use algoviz_frames::{Edge, Graph, Node};

    pub fn graph(n: u32, edges: &[(u32, u32, u32)]) -> Graph {
        Graph::new(
            (0..n).map(|i| Node::new(i, f64::from(i), 0.0)).collect(),
            edges
                .iter()
                .map(|&(source, target, weight)| Edge {
                    source,
                    target,
                    weight,
                })
                .collect(),
        )
    }
}

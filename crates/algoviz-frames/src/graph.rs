use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Graph node identifier.
pub type NodeId = u32;

/// Graph vertex. `x`/`y` are layout coordinates only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Self {
            id,
            label: id.to_string(),
            x,
            y,
        }
    }
}

/// Directed, weighted edge `source -> target`.
///
/// Undirected links are modelled as two edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: u32,
}

/// Directed weighted graph. Immutable for the duration of a trace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Out-neighbours per node, in edge-list order.
    ///
    /// Every node gets an entry (possibly empty). Edges whose source is not a
    /// listed node still get an entry so that traversal from such a source is
    /// well defined.
    pub fn adjacency(&self) -> BTreeMap<NodeId, Vec<(NodeId, u32)>> {
        let mut adj: BTreeMap<NodeId, Vec<(NodeId, u32)>> = BTreeMap::new();
        for node in &self.nodes {
            adj.entry(node.id).or_default();
        }
        for edge in &self.edges {
            adj.entry(edge.source)
                .or_default()
                .push((edge.target, edge.weight));
        }
        adj
    }

    /// Weight of the first edge `source -> target`, if any.
    pub fn weight(&self, source: NodeId, target: NodeId) -> Option<u32> {
        self.edges
            .iter()
            .find(|e| e.source == source && e.target == target)
            .map(|e| e.weight)
    }
}

/// Algorithm-specific traversal state carried by a [`GraphFrame`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Frontier {
    /// BFS queue, front first.
    Queue(Vec<NodeId>),
    /// DFS stack, bottom first.
    Stack(Vec<NodeId>),
    /// Dijkstra bookkeeping. A `None` distance means unreachable.
    Distances {
        distances: BTreeMap<NodeId, Option<u64>>,
        previous: BTreeMap<NodeId, Option<NodeId>>,
    },
}

/// What a [`GraphFrame`] depicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GraphEvent {
    Start,
    /// A node entered the queue or stack.
    Enqueue,
    /// A node left the queue or stack.
    Dequeue,
    /// A dequeued node had already been visited.
    Skip,
    /// A node was marked visited.
    Visit,
    /// A neighbour was not added because it was already seen.
    Ignore,
    /// Dijkstra compared a candidate distance with the best known one.
    Relax,
    /// Dijkstra improved a distance.
    Update,
    /// Terminal summary.
    Conclude,
}

/// One observable moment of a graph trace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphFrame {
    pub graph: Arc<Graph>,
    pub current_node: Option<NodeId>,
    pub visited_nodes: Vec<NodeId>,
    pub frontier: Frontier,
    pub path: Vec<NodeId>,
    pub description: String,
    pub event: GraphEvent,
}

impl GraphFrame {
    pub fn queue(&self) -> Option<&[NodeId]> {
        match &self.frontier {
            Frontier::Queue(q) => Some(q),
            _ => None,
        }
    }

    pub fn stack(&self) -> Option<&[NodeId]> {
        match &self.frontier {
            Frontier::Stack(s) => Some(s),
            _ => None,
        }
    }

    pub fn distances(&self) -> Option<&BTreeMap<NodeId, Option<u64>>> {
        match &self.frontier {
            Frontier::Distances { distances, .. } => Some(distances),
            _ => None,
        }
    }

    pub fn previous(&self) -> Option<&BTreeMap<NodeId, Option<NodeId>>> {
        match &self.frontier {
            Frontier::Distances { previous, .. } => Some(previous),
            _ => None,
        }
    }
}

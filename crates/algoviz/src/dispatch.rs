//! Picks the tracer for an algorithm and runs it on a typed request.

use std::collections::BTreeSet;
use std::sync::Arc;

use algoviz_frames::{
    Frame, Graph, GraphFrame, Key, NodeId, SearchFrame, SortFrame, TreeFrame, TreeSnapshot,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{Algorithm, AlgorithmConfig, AlgorithmKind};
use crate::{search, sorting};

/// Input for one trace, tagged by family.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TraceRequest {
    Sort {
        values: Vec<f64>,
    },
    Search {
        values: Vec<f64>,
        target: f64,
    },
    Graph {
        graph: Graph,
        start: NodeId,
        /// Required by Dijkstra, ignored by BFS and DFS.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end: Option<NodeId>,
    },
    Tree {
        keys: Vec<Key>,
    },
}

impl TraceRequest {
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            TraceRequest::Sort { .. } => AlgorithmKind::Sorting,
            TraceRequest::Search { .. } => AlgorithmKind::Search,
            TraceRequest::Graph { .. } => AlgorithmKind::Graph,
            TraceRequest::Tree { .. } => AlgorithmKind::Tree,
        }
    }
}

/// A finished trace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trace {
    Sort(Vec<SortFrame>),
    Search(Vec<SearchFrame>),
    Graph(Vec<GraphFrame>),
    Tree(Vec<TreeFrame>),
}

impl Trace {
    pub fn len(&self) -> usize {
        match self {
            Trace::Sort(f) => f.len(),
            Trace::Search(f) => f.len(),
            Trace::Graph(f) => f.len(),
            Trace::Tree(f) => f.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Trace::Sort(_) => AlgorithmKind::Sorting,
            Trace::Search(_) => AlgorithmKind::Search,
            Trace::Graph(_) => AlgorithmKind::Graph,
            Trace::Tree(_) => AlgorithmKind::Tree,
        }
    }

    /// Family-tagged frames, for consumers that want one sequence type.
    pub fn into_frames(self) -> Vec<Frame> {
        match self {
            Trace::Sort(f) => f.into_iter().map(Frame::Sort).collect(),
            Trace::Search(f) => f.into_iter().map(Frame::Search).collect(),
            Trace::Graph(f) => f.into_iter().map(Frame::Graph).collect(),
            Trace::Tree(f) => f.into_iter().map(Frame::Tree).collect(),
        }
    }

    /// Description of the terminal frame.
    pub fn summary(&self) -> Option<&str> {
        match self {
            Trace::Sort(f) => f.last().map(|f| f.description.as_str()),
            Trace::Search(f) => f.last().map(|f| f.description.as_str()),
            Trace::Graph(f) => f.last().map(|f| f.description.as_str()),
            Trace::Tree(f) => f.last().map(|f| f.description.as_str()),
        }
    }

    /// The tree as it stands in the terminal frame of a tree trace.
    pub fn final_tree(&self) -> Option<&TreeSnapshot> {
        match self {
            Trace::Tree(f) => f.last().map(|f| &f.tree),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    #[error("{algorithm} expects {expected} input, got {actual} input")]
    Mismatch {
        algorithm: Algorithm,
        expected: AlgorithmKind,
        actual: AlgorithmKind,
    },
    #[error("{0} needs an end node")]
    MissingEnd(Algorithm),
    #[error("node {0} is not in the graph")]
    UnknownNode(NodeId),
    #[error("node {0} appears more than once in the graph")]
    DuplicateNode(NodeId),
    #[error("{0:?} has no tracer")]
    Unsupported(String),
}

fn check_unique(graph: &Graph) -> Result<(), TraceError> {
    let mut seen = BTreeSet::new();
    match graph.nodes.iter().find(|n| !seen.insert(n.id)) {
        Some(n) => Err(TraceError::DuplicateNode(n.id)),
        None => Ok(()),
    }
}

fn check_node(graph: &Graph, id: NodeId) -> Result<(), TraceError> {
    if graph.contains(id) {
        Ok(())
    } else {
        Err(TraceError::UnknownNode(id))
    }
}

/// Runs `algorithm` on `request`.
///
/// Fails only when the request does not fit the algorithm; the tracers
/// themselves always produce a trace.
#[tracing::instrument(level = "debug", skip(request), fields(input = %request.kind()))]
pub fn run(algorithm: Algorithm, request: TraceRequest) -> Result<Trace, TraceError> {
    let actual = request.kind();
    let expected = algorithm.kind();
    let trace = match (algorithm, request) {
        (Algorithm::BubbleSort, TraceRequest::Sort { values }) => {
            Trace::Sort(sorting::bubble_sort(&values))
        }
        (Algorithm::QuickSort, TraceRequest::Sort { values }) => {
            Trace::Sort(sorting::quick_sort(&values))
        }
        (Algorithm::MergeSort, TraceRequest::Sort { values }) => {
            Trace::Sort(sorting::merge_sort(&values))
        }
        (Algorithm::HeapSort, TraceRequest::Sort { values }) => {
            Trace::Sort(sorting::heap_sort(&values))
        }
        (Algorithm::LinearSearch, TraceRequest::Search { values, target }) => {
            Trace::Search(search::linear_search(&values, target))
        }
        (Algorithm::BinarySearch, TraceRequest::Search { values, target }) => {
            Trace::Search(search::binary_search(&values, target))
        }
        (Algorithm::Bfs, TraceRequest::Graph { graph, start, .. }) => {
            check_unique(&graph)?;
            check_node(&graph, start)?;
            Trace::Graph(crate::graph::bfs(Arc::new(graph), start))
        }
        (Algorithm::Dfs, TraceRequest::Graph { graph, start, .. }) => {
            check_unique(&graph)?;
            check_node(&graph, start)?;
            Trace::Graph(crate::graph::dfs(Arc::new(graph), start))
        }
        (Algorithm::Dijkstra, TraceRequest::Graph { graph, start, end }) => {
            let end = end.ok_or(TraceError::MissingEnd(algorithm))?;
            check_unique(&graph)?;
            check_node(&graph, start)?;
            check_node(&graph, end)?;
            Trace::Graph(crate::graph::dijkstra(Arc::new(graph), start, end))
        }
        (Algorithm::Bst, TraceRequest::Tree { keys }) => {
            Trace::Tree(algoviz_forest::trace_bst(&keys))
        }
        (Algorithm::Avl, TraceRequest::Tree { keys }) => {
            Trace::Tree(algoviz_forest::trace_avl(&keys))
        }
        (Algorithm::RedBlack, TraceRequest::Tree { keys }) => {
            Trace::Tree(algoviz_forest::trace_red_black(&keys))
        }
        (algorithm, _) => {
            return Err(TraceError::Mismatch {
                algorithm,
                expected,
                actual,
            })
        }
    };
    tracing::debug!(frames = trace.len(), "trace finished");
    Ok(trace)
}

/// Runs the tracer behind a catalog entry.
pub fn run_config(config: &AlgorithmConfig, request: TraceRequest) -> Result<Trace, TraceError> {
    let algorithm =
        Algorithm::from_config(config).ok_or_else(|| TraceError::Unsupported(config.name.clone()))?;
    run(algorithm, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_frames::{Edge, Node};

    fn line_graph() -> Graph {
        Graph::new(
            vec![Node::new(0, 0.0, 0.0), Node::new(1, 1.0, 0.0)],
            vec![Edge {
                source: 0,
                target: 1,
                weight: 3,
            }],
        )
    }

    #[test]
    fn routes_each_family() {
        let sort = run(Algorithm::HeapSort, TraceRequest::Sort { values: vec![2.0, 1.0] }).unwrap();
        assert_eq!(sort.kind(), AlgorithmKind::Sorting);
        assert_eq!(
            sort.summary(),
            Some("Sorting complete! The array is now sorted in ascending order.")
        );

        let tree = run(Algorithm::RedBlack, TraceRequest::Tree { keys: vec![1, 2, 3] }).unwrap();
        assert_eq!(tree.summary(), Some("Red-Black Tree construction complete"));

        let path = run(
            Algorithm::Dijkstra,
            TraceRequest::Graph {
                graph: line_graph(),
                start: 0,
                end: Some(1),
            },
        )
        .unwrap();
        assert_eq!(path.summary(), Some("Found shortest path with distance 3"));
    }

    #[test]
    fn family_mismatch_is_an_error() {
        let err = run(Algorithm::Bfs, TraceRequest::Sort { values: vec![1.0] }).unwrap_err();
        assert_eq!(
            err,
            TraceError::Mismatch {
                algorithm: Algorithm::Bfs,
                expected: AlgorithmKind::Graph,
                actual: AlgorithmKind::Sorting,
            }
        );
        assert_eq!(
            err.to_string(),
            "Breadth-First Search expects graph input, got sorting input"
        );
    }

    #[test]
    fn dijkstra_needs_known_end() {
        let request = |end| TraceRequest::Graph {
            graph: line_graph(),
            start: 0,
            end,
        };
        assert_eq!(
            run(Algorithm::Dijkstra, request(None)),
            Err(TraceError::MissingEnd(Algorithm::Dijkstra))
        );
        assert_eq!(
            run(Algorithm::Dijkstra, request(Some(9))),
            Err(TraceError::UnknownNode(9))
        );
        // BFS ignores `end`
        assert!(run(Algorithm::Bfs, request(Some(9))).is_ok());
    }

    #[test]
    fn unknown_start_is_rejected() {
        let err = run(
            Algorithm::Dfs,
            TraceRequest::Graph {
                graph: line_graph(),
                start: 5,
                end: None,
            },
        )
        .unwrap_err();
        assert_eq!(err, TraceError::UnknownNode(5));
    }

    #[test]
    fn duplicate_node_ids_are_rejected() {
        let mut graph = line_graph();
        graph.nodes.push(Node::new(1, 2.0, 0.0));
        for algorithm in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra] {
            let err = run(
                algorithm,
                TraceRequest::Graph {
                    graph: graph.clone(),
                    start: 0,
                    end: Some(1),
                },
            )
            .unwrap_err();
            assert_eq!(err, TraceError::DuplicateNode(1), "{algorithm}");
        }
        assert_eq!(
            TraceError::DuplicateNode(1).to_string(),
            "node 1 appears more than once in the graph"
        );
    }

    #[test]
    fn final_tree_only_for_tree_traces() {
        let tree = run(Algorithm::Avl, TraceRequest::Tree { keys: vec![1, 2, 3] }).unwrap();
        let last = tree.final_tree().unwrap();
        assert_eq!(last.root_node().map(|n| n.key), Some(2));
        assert_eq!(last.to_string(), "2 (h=2)\n  L: 1 (h=1)\n  R: 3 (h=1)\n");

        let sort = run(Algorithm::BubbleSort, TraceRequest::Sort { values: vec![1.0] }).unwrap();
        assert!(sort.final_tree().is_none());
    }

    #[test]
    fn catalog_entry_without_tracer() {
        let catalog = crate::catalog::Catalog::builtin().unwrap();
        let err = run_config(
            catalog.get("jump-search").unwrap(),
            TraceRequest::Search {
                values: vec![1.0],
                target: 1.0,
            },
        )
        .unwrap_err();
        assert_eq!(err, TraceError::Unsupported("Jump Search".into()));
    }

    #[test]
    fn request_json_is_tagged() {
        let request: TraceRequest =
            serde_json::from_str(r#"{"kind":"search","values":[1,2,3],"target":2}"#).unwrap();
        assert_eq!(
            request,
            TraceRequest::Search {
                values: vec![1.0, 2.0, 3.0],
                target: 2.0,
            }
        );
    }

    #[test]
    fn into_frames_keeps_order() {
        let trace = run(Algorithm::LinearSearch, TraceRequest::Search {
            values: vec![4.0, 5.0],
            target: 5.0,
        })
        .unwrap();
        let n = trace.len();
        let frames = trace.into_frames();
        assert_eq!(frames.len(), n);
        assert_eq!(
            frames.last().map(Frame::description),
            Some("Linear search complete. Target 5 found at index 1.")
        );
    }
}

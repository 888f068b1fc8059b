//! Operation counts and rough cost figures for a finished trace.

use std::mem::size_of;
use std::time::{Duration, Instant};

use algoviz_frames::{Edge, GraphEvent, Node, NodeId, SearchEvent, SnapshotNode, SortEvent, TreeEvent};
use serde::Serialize;

use crate::catalog::Algorithm;
use crate::dispatch::{run, Trace, TraceError, TraceRequest};

/// Counts derived from frame events.
///
/// | Family | comparisons | mutations | visits | updates |
/// |--------|-------------|-----------|--------|---------|
/// | sort | compare frames | swaps + placements | - | - |
/// | search | compare frames | - | - | - |
/// | graph | relax frames | enqueue/push frames | visit frames | distance updates |
/// | tree | key comparisons | inserted nodes | - | rotations + recolors |
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceMetrics {
    pub frames: usize,
    pub comparisons: usize,
    pub mutations: usize,
    pub visits: usize,
    pub updates: usize,
    pub elapsed: Duration,
    /// Rough footprint of the recorded frames.
    pub estimated_bytes: usize,
}

impl TraceMetrics {
    pub fn from_trace(trace: &Trace, elapsed: Duration) -> Self {
        let mut m = TraceMetrics {
            frames: trace.len(),
            elapsed,
            ..Default::default()
        };
        match trace {
            Trace::Sort(frames) => {
                for f in frames {
                    match f.event {
                        SortEvent::Compare => m.comparisons += 1,
                        e if e.is_mutation() => m.mutations += 1,
                        _ => {}
                    }
                }
                // working copy, frame copy, output copy
                let len = frames.first().map_or(0, |f| f.array.len());
                m.estimated_bytes = len * size_of::<f64>() * 3;
            }
            Trace::Search(frames) => {
                m.comparisons = frames
                    .iter()
                    .filter(|f| f.event == SearchEvent::Compare)
                    .count();
                let len = frames.first().map_or(0, |f| f.array.len());
                m.estimated_bytes = len * size_of::<f64>() * 3;
            }
            Trace::Graph(frames) => {
                for f in frames {
                    match f.event {
                        GraphEvent::Relax => m.comparisons += 1,
                        GraphEvent::Enqueue => m.mutations += 1,
                        GraphEvent::Visit => m.visits += 1,
                        GraphEvent::Update => m.updates += 1,
                        _ => {}
                    }
                }
                let shared = frames.first().map_or(0, |f| {
                    f.graph.nodes.len() * size_of::<Node>() + f.graph.edges.len() * size_of::<Edge>()
                });
                let per_frame: usize = frames
                    .iter()
                    .map(|f| (f.visited_nodes.len() + f.path.len()) * size_of::<NodeId>())
                    .sum();
                m.estimated_bytes = shared + per_frame;
            }
            Trace::Tree(frames) => {
                for f in frames {
                    match f.event {
                        TreeEvent::Compare => m.comparisons += 1,
                        TreeEvent::Insert => m.mutations += 1,
                        TreeEvent::Rotate | TreeEvent::Recolor => m.updates += 1,
                        _ => {}
                    }
                }
                m.estimated_bytes = frames
                    .iter()
                    .map(|f| f.tree.len() * size_of::<SnapshotNode>())
                    .sum();
            }
        }
        m
    }
}

/// Runs a trace and measures it.
pub fn run_measured(
    algorithm: Algorithm,
    request: TraceRequest,
) -> Result<(Trace, TraceMetrics), TraceError> {
    let started = Instant::now();
    let trace = run(algorithm, request)?;
    let metrics = TraceMetrics::from_trace(&trace, started.elapsed());
    tracing::debug!(
        %algorithm,
        frames = metrics.frames,
        comparisons = metrics.comparisons,
        elapsed_us = metrics.elapsed.as_micros() as u64,
        "trace measured"
    );
    Ok((trace, metrics))
}

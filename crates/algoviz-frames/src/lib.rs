//! Frame records for step-by-step algorithm playback.
//!
//! A tracer runs one algorithm to completion and returns a `Vec` of frames.
//! Each frame is an owned snapshot: nothing in a frame aliases state from
//! another frame, so a playback layer can index, scrub, and serialize them
//! freely.
//!
//! | Module | Family | Frame |
//! |--------|--------|-------|
//! [`sort`] | bubble / quick / merge / heap sort | [`SortFrame`] |
//! [`search`] | linear / binary search | [`SearchFrame`] |
//! [`graph`] | BFS / DFS / Dijkstra | [`GraphFrame`] |
//! [`tree`] | BST / AVL / Red-Black insertion | [`TreeFrame`] |
//!
//! Every frame carries an `event` tag next to its human-readable
//! `description`, so consumers never have to string-match descriptions to
//! classify steps.
//!
//! # Example
//!
//! ```
//! use algoviz_frames::{SortEvent, SortFrame};
//!
//! let frame = SortFrame::compare(&[3.0, 1.0], 0, 1, "Comparing 3 and 1");
//! assert_eq!(frame.event, SortEvent::Compare);
//! assert!(frame.swapped_indices.is_empty());
//! ```

pub mod graph;
pub mod search;
pub mod sort;
pub mod tree;

pub use graph::{Edge, Frontier, Graph, GraphEvent, GraphFrame, Node, NodeId};
pub use search::{SearchEvent, SearchFrame};
pub use sort::{SortEvent, SortFrame};
pub use tree::{
    Color, InvariantError, Key, NodeShape, RotationEdge, SnapshotNode, TreeEvent, TreeFrame,
    TreeSnapshot,
};

/// Any frame, tagged by family.
///
/// Used where a single sequence type is needed regardless of which tracer
/// produced it (for example when writing mixed traces to a file).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Frame {
    Sort(SortFrame),
    Search(SearchFrame),
    Graph(GraphFrame),
    Tree(TreeFrame),
}

impl Frame {
    pub fn description(&self) -> &str {
        match self {
            Frame::Sort(f) => &f.description,
            Frame::Search(f) => &f.description,
            Frame::Graph(f) => &f.description,
            Frame::Tree(f) => &f.description,
        }
    }
}

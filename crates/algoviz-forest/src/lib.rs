//! Arena-based binary search trees that narrate their own insertions.
//!
//! Three families share one node arena idiom: nodes are stored in a
//! `Vec<N>` owned by the tracer, and every parent/left/right "pointer" is an
//! `Option<u32>` index into it. Parent links are plain back-indices, so the
//! tree has a single ownership direction.
//!
//! | Module | Tracer | Balancing |
//! |--------|--------|-----------|
//! [`bst`] | [`BstTracer`] | none |
//! [`avl`] | [`AvlTracer`] | height-based rotations |
//! [`red_black`] | [`RbTracer`] | recoloring + rotations |
//!
//! Each recorded [`TreeFrame`](algoviz_frames::TreeFrame) owns a copy of the
//! arena taken at that instant, so no frame aliases another.
//!
//! # Example
//!
//! ```
//! use algoviz_forest::{trace_insert_all, RbTracer};
//! use algoviz_frames::Color;
//!
//! let frames = trace_insert_all::<RbTracer>(&[30, 20, 40, 10]);
//! let tree = &frames.last().unwrap().tree;
//! assert_eq!(tree.in_order_keys(), vec![10, 20, 30, 40]);
//! assert_eq!(tree.root_node().unwrap().color(), Some(Color::Black));
//! ```

pub mod avl;
pub mod bst;
pub mod red_black;
pub mod tracer;
pub mod types;
pub mod util;

pub use avl::{AvlNode, AvlTracer};
pub use bst::{BstNode, BstTracer};
pub use red_black::{RbNode, RbTracer};
pub use tracer::{build, trace_insert_all, Located, TreeTracer};
pub use types::Node;

use algoviz_frames::{Key, TreeFrame};

/// Default key sequence used by the tree demos.
pub const SAMPLE_KEYS: [Key; 7] = [30, 20, 40, 10, 25, 35, 50];

pub fn trace_bst(keys: &[Key]) -> Vec<TreeFrame> {
    trace_insert_all::<BstTracer>(keys)
}

pub fn trace_avl(keys: &[Key]) -> Vec<TreeFrame> {
    trace_insert_all::<AvlTracer>(keys)
}

pub fn trace_red_black(keys: &[Key]) -> Vec<TreeFrame> {
    trace_insert_all::<RbTracer>(keys)
}

/// Builds a BST from `keys` silently, then records a lookup of `target`.
pub fn trace_bst_search(keys: &[Key], target: Key) -> Vec<TreeFrame> {
    let (tree, _) = build::<BstTracer>(keys);
    let frames = tree.search(target);
    tracing::debug!(target_key = target, frames = frames.len(), "bst search recorded");
    frames
}

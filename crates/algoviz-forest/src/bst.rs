//! Unbalanced binary search tree.

use algoviz_frames::{Key, NodeShape, TreeEvent, TreeFrame};

use crate::tracer::{Located, TreeTracer};
use crate::types::{impl_links, Node};

#[derive(Clone, Debug)]
pub struct BstNode {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: Key,
}

impl BstNode {
    pub fn new(k: Key) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
        }
    }
}

impl Node for BstNode {
    impl_links!();

    fn shape(&self) -> NodeShape {
        NodeShape::Bst
    }
}

/// Plain BST insertion; duplicates are a no-op.
#[derive(Clone, Debug, Default)]
pub struct BstTracer {
    arena: Vec<BstNode>,
    root: Option<u32>,
}

impl TreeTracer for BstTracer {
    type Node = BstNode;

    const NAME: &'static str = "Binary Search Tree";

    fn arena(&self) -> &[BstNode] {
        &self.arena
    }

    fn arena_mut(&mut self) -> &mut Vec<BstNode> {
        &mut self.arena
    }

    fn root(&self) -> Option<u32> {
        self.root
    }

    fn insert(&mut self, key: Key, frames: &mut Vec<TreeFrame>) {
        frames.push(self.frame(
            TreeEvent::InsertStart,
            format!("Starting insertion of key {key}"),
        ));
        match self.locate(key, frames) {
            Located::Empty => {
                self.root = Some(self.alloc(BstNode::new(key)));
                frames.push(
                    self.frame(
                        TreeEvent::Insert,
                        format!("Inserted {key} as the root of an empty tree"),
                    )
                    .changed([key]),
                );
            }
            Located::Duplicate(_) => {}
            Located::Vacant { parent, left } => {
                let n = self.alloc(BstNode::new(key));
                self.link(parent, n, left);
                let side = if left { "left" } else { "right" };
                let pk = self.arena[parent as usize].k;
                frames.push(
                    self.frame(
                        TreeEvent::Insert,
                        format!("Inserted {key} as {side} child of {pk}"),
                    )
                    .changed([key]),
                );
            }
        }
        frames.push(self.frame(TreeEvent::InsertComplete, "Insertion complete".into()));
    }
}

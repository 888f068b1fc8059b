//! Height-balanced AVL tree.
//!
//! After linking a new leaf the tracer walks parent links back to the root,
//! refreshing each ancestor's `height` and inspecting its balance factor
//! (`height(left) - height(right)`). An ancestor with `|bf| > 1` is fixed
//! with one of the four classic rotations; the child's balance factor sign
//! picks single vs double rotation.

use std::collections::BTreeMap;

use algoviz_frames::{Key, NodeShape, TreeEvent, TreeFrame};

use crate::tracer::{Located, TreeTracer};
use crate::types::{impl_links, Node};
use crate::util::{key, rotate_left, rotate_right};

#[derive(Clone, Debug)]
pub struct AvlNode {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: Key,
    /// Leaf height is 1.
    pub height: u32,
}

impl AvlNode {
    pub fn new(k: Key) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            height: 1,
        }
    }
}

impl Node for AvlNode {
    impl_links!();

    fn shape(&self) -> NodeShape {
        NodeShape::Avl {
            height: self.height,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AvlTracer {
    arena: Vec<AvlNode>,
    root: Option<u32>,
}

impl AvlTracer {
    fn height(&self, i: Option<u32>) -> u32 {
        i.map_or(0, |i| self.arena[i as usize].height)
    }

    fn balance(&self, i: u32) -> i32 {
        let n = &self.arena[i as usize];
        self.height(n.l) as i32 - self.height(n.r) as i32
    }

    fn update_height(&mut self, i: u32) {
        let n = &self.arena[i as usize];
        let h = 1 + self.height(n.l).max(self.height(n.r));
        self.arena[i as usize].height = h;
    }

    /// Balance factor of every node, from stored heights.
    pub fn balance_factors(&self) -> BTreeMap<Key, i32> {
        (0..self.arena.len() as u32)
            .map(|i| (self.arena[i as usize].k, self.balance(i)))
            .collect()
    }

    fn rotate_right_at(&mut self, n: u32) -> u32 {
        let top = rotate_right(&mut self.arena, n);
        self.after_rotation(n, top)
    }

    fn rotate_left_at(&mut self, n: u32) -> u32 {
        let top = rotate_left(&mut self.arena, n);
        self.after_rotation(n, top)
    }

    fn after_rotation(&mut self, n: u32, top: u32) -> u32 {
        self.update_height(n);
        self.update_height(top);
        if self.arena[top as usize].p.is_none() {
            self.root = Some(top);
        }
        top
    }

    /// Restores balance at `n`, returning the subtree's new top.
    fn rebalance(&mut self, n: u32, frames: &mut Vec<TreeFrame>) -> u32 {
        let bf = self.balance(n);
        let nk = key(&self.arena, n);
        if bf > 1 {
            let Some(l) = self.arena[n as usize].l else {
                return n;
            };
            let lk = key(&self.arena, l);
            if self.balance(l) >= 0 {
                frames.push(
                    self.frame(
                        TreeEvent::Rotate,
                        format!("Left-Left Case: Performing right rotation at node {nk}"),
                    )
                    .highlight([nk, lk]),
                );
                let top = self.rotate_right_at(n);
                frames.push(
                    self.frame(
                        TreeEvent::Rotate,
                        format!("Completed right rotation. {lk} is now the parent of {nk}"),
                    )
                    .changed([lk, nk])
                    .rotation(nk, lk),
                );
                return top;
            }
            let Some(lr) = self.arena[l as usize].r else {
                return n;
            };
            let lrk = key(&self.arena, lr);
            frames.push(
                self.frame(
                    TreeEvent::Rotate,
                    format!("Left-Right Case: First performing left rotation at node {lk}"),
                )
                .highlight([nk, lk, lrk]),
            );
            self.rotate_left_at(l);
            frames.push(
                self.frame(
                    TreeEvent::Rotate,
                    format!("Then performing right rotation at node {nk}"),
                )
                .highlight([nk, lrk])
                .changed([lrk, lk])
                .rotation(lk, lrk),
            );
            let top = self.rotate_right_at(n);
            frames.push(
                self.frame(
                    TreeEvent::Rotate,
                    format!("Completed left-right rotations. {lrk} is now the parent of {lk} and {nk}"),
                )
                .changed([lrk, nk])
                .rotation(nk, lrk),
            );
            return top;
        }
        if bf < -1 {
            let Some(r) = self.arena[n as usize].r else {
                return n;
            };
            let rk = key(&self.arena, r);
            if self.balance(r) <= 0 {
                frames.push(
                    self.frame(
                        TreeEvent::Rotate,
                        format!("Right-Right Case: Performing left rotation at node {nk}"),
                    )
                    .highlight([nk, rk]),
                );
                let top = self.rotate_left_at(n);
                frames.push(
                    self.frame(
                        TreeEvent::Rotate,
                        format!("Completed left rotation. {rk} is now the parent of {nk}"),
                    )
                    .changed([rk, nk])
                    .rotation(nk, rk),
                );
                return top;
            }
            let Some(rl) = self.arena[r as usize].l else {
                return n;
            };
            let rlk = key(&self.arena, rl);
            frames.push(
                self.frame(
                    TreeEvent::Rotate,
                    format!("Right-Left Case: First performing right rotation at node {rk}"),
                )
                .highlight([nk, rk, rlk]),
            );
            self.rotate_right_at(r);
            frames.push(
                self.frame(
                    TreeEvent::Rotate,
                    format!("Then performing left rotation at node {nk}"),
                )
                .highlight([nk, rlk])
                .changed([rlk, rk])
                .rotation(rk, rlk),
            );
            let top = self.rotate_left_at(n);
            frames.push(
                self.frame(
                    TreeEvent::Rotate,
                    format!("Completed right-left rotations. {rlk} is now the parent of {nk} and {rk}"),
                )
                .changed([rlk, nk])
                .rotation(nk, rlk),
            );
            return top;
        }
        n
    }
}

impl TreeTracer for AvlTracer {
    type Node = AvlNode;

    const NAME: &'static str = "AVL Tree";

    fn arena(&self) -> &[AvlNode] {
        &self.arena
    }

    fn arena_mut(&mut self) -> &mut Vec<AvlNode> {
        &mut self.arena
    }

    fn root(&self) -> Option<u32> {
        self.root
    }

    fn frame(&self, event: TreeEvent, description: String) -> TreeFrame {
        TreeFrame::new(self.snapshot(), event, description).balance(self.balance_factors())
    }

    fn insert(&mut self, key: Key, frames: &mut Vec<TreeFrame>) {
        frames.push(self.frame(
            TreeEvent::InsertStart,
            format!("Starting insertion of key {key}"),
        ));
        match self.locate(key, frames) {
            Located::Empty => {
                self.root = Some(self.alloc(AvlNode::new(key)));
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
                let n = self.alloc(AvlNode::new(key));
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

                let mut curr = Some(parent);
                while let Some(c) = curr {
                    self.update_height(c);
                    let ck = self.arena[c as usize].k;
                    frames.push(
                        self.frame(
                            TreeEvent::BalanceCheck,
                            format!(
                                "Checking balance at node {ck}. Balance factor: {}",
                                self.balance(c)
                            ),
                        )
                        .highlight([ck]),
                    );
                    let top = self.rebalance(c, frames);
                    curr = self.arena[top as usize].p;
                }
            }
        }
        frames.push(self.frame(
            TreeEvent::InsertComplete,
            "Insertion complete. Tree is balanced.".into(),
        ));
    }
}

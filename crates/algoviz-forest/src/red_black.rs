//! Red-Black tree insertion with the classic bottom-up fix-up.
//!
//! Absent children read as the black sentinel leaf (see [`RbTracer::color_of`]),
//! so color checks never branch on a missing node.

use algoviz_frames::{Color, Key, NodeShape, TreeEvent, TreeFrame};

use crate::tracer::{Located, TreeTracer};
use crate::types::{impl_links, Node};
use crate::util::{key, rotate_left, rotate_right};

#[derive(Clone, Debug)]
pub struct RbNode {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: Key,
    pub color: Color,
}

impl RbNode {
    /// New nodes are red.
    pub fn new(k: Key) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            color: Color::Red,
        }
    }
}

impl Node for RbNode {
    impl_links!();

    fn shape(&self) -> NodeShape {
        NodeShape::RedBlack { color: self.color }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RbTracer {
    arena: Vec<RbNode>,
    root: Option<u32>,
}

impl RbTracer {
    /// Color of a possibly absent node; `None` is the black sentinel.
    pub fn color_of(&self, i: Option<u32>) -> Color {
        i.map_or(Color::Black, |i| self.arena[i as usize].color)
    }

    fn set_color(&mut self, i: u32, color: Color) {
        self.arena[i as usize].color = color;
    }

    fn parent(&self, i: u32) -> Option<u32> {
        self.arena[i as usize].p
    }

    fn left_rotate(&mut self, x: u32, frames: &mut Vec<TreeFrame>) {
        let y = rotate_left(&mut self.arena, x);
        if self.arena[y as usize].p.is_none() {
            self.root = Some(y);
        }
        let (xk, yk) = (key(&self.arena, x), key(&self.arena, y));
        frames.push(
            self.frame(
                TreeEvent::Rotate,
                format!("Left rotation: {xk} becomes the left child of {yk}"),
            )
            .highlight([xk, yk])
            .changed([xk, yk])
            .rotation(xk, yk),
        );
    }

    fn right_rotate(&mut self, y: u32, frames: &mut Vec<TreeFrame>) {
        let x = rotate_right(&mut self.arena, y);
        if self.arena[x as usize].p.is_none() {
            self.root = Some(x);
        }
        let (xk, yk) = (key(&self.arena, x), key(&self.arena, y));
        frames.push(
            self.frame(
                TreeEvent::Rotate,
                format!("Right rotation: {yk} becomes the right child of {xk}"),
            )
            .highlight([xk, yk])
            .changed([xk, yk])
            .rotation(yk, xk),
        );
    }

    /// Walks up from the freshly inserted red node `z` while its parent is
    /// red.
    fn fix_up(&mut self, mut z: u32, frames: &mut Vec<TreeFrame>) {
        while let Some(p) = self.parent(z) {
            if self.color_of(Some(p)) == Color::Black {
                break;
            }
            // A red parent is never the root, so the grandparent exists.
            let Some(g) = self.parent(p) else { break };
            let parent_is_left = self.arena[g as usize].l == Some(p);
            let u = if parent_is_left {
                self.arena[g as usize].r
            } else {
                self.arena[g as usize].l
            };

            if let Some(u) = u.filter(|&u| self.color_of(Some(u)) == Color::Red) {
                self.set_color(p, Color::Black);
                self.set_color(u, Color::Black);
                self.set_color(g, Color::Red);
                let (zk, pk, uk, gk) = (
                    key(&self.arena, z),
                    key(&self.arena, p),
                    key(&self.arena, u),
                    key(&self.arena, g),
                );
                frames.push(
                    self.frame(
                        TreeEvent::Recolor,
                        format!("Case 1: Uncle {uk} is RED. Recoloring parent {pk} and uncle {uk} to BLACK, grandparent {gk} to RED"),
                    )
                    .highlight([zk, pk, uk, gk])
                    .changed([pk, uk, gk]),
                );
                z = g;
                continue;
            }

            let inner = if parent_is_left {
                self.arena[p as usize].r == Some(z)
            } else {
                self.arena[p as usize].l == Some(z)
            };
            if inner {
                z = p;
                let zk = key(&self.arena, z);
                let side = if parent_is_left { "right" } else { "left" };
                frames.push(
                    self.frame(
                        TreeEvent::Rotate,
                        format!("Case 2: Current node is a {side} child of {zk}, rotating {zk}"),
                    )
                    .highlight([zk]),
                );
                if parent_is_left {
                    self.left_rotate(z, frames);
                } else {
                    self.right_rotate(z, frames);
                }
            }

            let Some(p) = self.parent(z) else { break };
            let Some(g) = self.parent(p) else { break };
            self.set_color(p, Color::Black);
            self.set_color(g, Color::Red);
            let (pk, gk) = (key(&self.arena, p), key(&self.arena, g));
            frames.push(
                self.frame(
                    TreeEvent::Recolor,
                    format!("Case 3: Recoloring parent {pk} to BLACK and grandparent {gk} to RED"),
                )
                .highlight([pk, gk])
                .changed([pk, gk]),
            );
            if parent_is_left {
                self.right_rotate(g, frames);
            } else {
                self.left_rotate(g, frames);
            }
        }

        if let Some(root) = self.root {
            let was = self.color_of(Some(root));
            self.set_color(root, Color::Black);
            if was != Color::Black {
                let rk = key(&self.arena, root);
                frames.push(
                    self.frame(TreeEvent::Recolor, "Ensuring root is BLACK".into())
                        .highlight([rk])
                        .changed([rk]),
                );
            }
        }
    }
}

impl TreeTracer for RbTracer {
    type Node = RbNode;

    const NAME: &'static str = "Red-Black Tree";

    fn arena(&self) -> &[RbNode] {
        &self.arena
    }

    fn arena_mut(&mut self) -> &mut Vec<RbNode> {
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
                let n = self.alloc(RbNode::new(key));
                self.set_color(n, Color::Black);
                self.root = Some(n);
                frames.push(
                    self.frame(
                        TreeEvent::Insert,
                        format!("Created new tree with root node {key} (BLACK)"),
                    )
                    .highlight([key])
                    .changed([key]),
                );
            }
            Located::Duplicate(_) => {}
            Located::Vacant { parent, left } => {
                let n = self.alloc(RbNode::new(key));
                self.link(parent, n, left);
                let side = if left { "left" } else { "right" };
                let pk = self.arena[parent as usize].k;
                frames.push(
                    self.frame(
                        TreeEvent::Insert,
                        format!("Inserted new node {key} (RED) as {side} child of {pk}"),
                    )
                    .highlight([pk])
                    .changed([key]),
                );
                self.fix_up(n, frames);
            }
        }
        frames.push(self.frame(
            TreeEvent::InsertComplete,
            format!("Insertion of {key} complete"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracer::build;

    #[test]
    fn sample_keys_keep_root_black() {
        let (t, frames) = build::<RbTracer>(&[30, 20, 40, 10, 25, 35, 50]);
        let snap = t.snapshot();
        let root = snap.root_node().unwrap();
        assert_eq!(root.key, 30);
        assert_eq!(root.color(), Some(Color::Black));
        assert_eq!(snap.validate_red_black(), Ok(3));
        // inserting 10 forces a case 1 recolor and a root repaint
        assert!(frames.iter().any(|f| f.description.starts_with("Case 1")));
        assert!(frames.iter().any(|f| f.description == "Ensuring root is BLACK"));
    }

    #[test]
    fn straight_line_triggers_case_three() {
        let (t, frames) = build::<RbTracer>(&[1, 2, 3]);
        let snap = t.snapshot();
        assert_eq!(snap.root_node().map(|n| n.key), Some(2));
        snap.validate_red_black().unwrap();
        assert!(frames.iter().any(|f| f.description.starts_with("Case 3")));
        assert!(frames
            .iter()
            .any(|f| f.description == "Left rotation: 1 becomes the left child of 2"));
    }

    #[test]
    fn zigzag_triggers_case_two() {
        let (t, frames) = build::<RbTracer>(&[3, 1, 2]);
        let snap = t.snapshot();
        assert_eq!(snap.root_node().map(|n| n.key), Some(2));
        snap.validate_red_black().unwrap();
        let rotations = frames.iter().filter(|f| f.event == TreeEvent::Rotate).count();
        // case 2 announcement, then two rotations
        assert_eq!(rotations, 3);
    }

    #[test]
    fn sentinel_is_black() {
        let t = RbTracer::default();
        assert_eq!(t.color_of(None), Color::Black);
    }

    #[test]
    fn invariants_hold_after_every_insertion() {
        let keys = [41, 38, 31, 12, 19, 8, 45, 1, 60, 59, 58, 57, 2, 3, 4];
        let (_, frames) = build::<RbTracer>(&keys);
        for f in frames.iter().filter(|f| f.event == TreeEvent::InsertComplete) {
            f.tree.validate_red_black().unwrap();
        }
    }
}

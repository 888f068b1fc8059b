//! Frame recording shared by the tree families.

use algoviz_frames::{Key, TreeEvent, TreeFrame, TreeSnapshot};

use crate::types::Node;
use crate::util::{key, set_l, set_p, set_r, snapshot};

/// Where a key belongs in the current tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Located {
    /// The tree has no root yet.
    Empty,
    /// A node with this key already exists.
    Duplicate(u32),
    /// The key goes below `parent` on the given side.
    Vacant { parent: u32, left: bool },
}

/// A tree that records a [`TreeFrame`] for every observable step of an
/// insertion.
///
/// Implementors own their node arena; a tracer value carries its root from
/// one [`insert`](TreeTracer::insert) to the next, so repeated calls build
/// the tree incrementally.
pub trait TreeTracer: Default {
    type Node: Node;

    /// Display name, e.g. `"AVL Tree"`.
    const NAME: &'static str;

    fn arena(&self) -> &[Self::Node];
    fn arena_mut(&mut self) -> &mut Vec<Self::Node>;
    fn root(&self) -> Option<u32>;

    /// Inserts `key`, appending one sub-trace to `frames`.
    ///
    /// The sub-trace always begins with [`TreeEvent::InsertStart`] and ends
    /// with [`TreeEvent::InsertComplete`].
    fn insert(&mut self, key: Key, frames: &mut Vec<TreeFrame>);

    fn snapshot(&self) -> TreeSnapshot {
        snapshot(self.arena(), self.root())
    }

    /// A frame over the current tree. Families that show extra per-node
    /// data (AVL balance factors) override this.
    fn frame(&self, event: TreeEvent, description: String) -> TreeFrame {
        TreeFrame::new(self.snapshot(), event, description)
    }

    /// Appends a node to the arena, unlinked.
    fn alloc(&mut self, node: Self::Node) -> u32 {
        let arena = self.arena_mut();
        arena.push(node);
        (arena.len() - 1) as u32
    }

    /// Hangs `n` below `parent`.
    fn link(&mut self, parent: u32, n: u32, left: bool) {
        let arena = self.arena_mut();
        if left {
            set_l(arena, parent, Some(n));
        } else {
            set_r(arena, parent, Some(n));
        }
        set_p(arena, n, Some(parent));
    }

    /// Walks down from the root, recording each comparison.
    ///
    /// Emits a [`TreeEvent::Duplicate`] frame when the key is present.
    fn locate(&self, k: Key, frames: &mut Vec<TreeFrame>) -> Located {
        let Some(mut curr) = self.root() else {
            return Located::Empty;
        };
        loop {
            let ck = key(self.arena(), curr);
            frames.push(
                self.frame(TreeEvent::Compare, format!("Comparing {k} with {ck}"))
                    .highlight([ck]),
            );
            let (next, left) = if k < ck {
                frames.push(
                    self.frame(
                        TreeEvent::Descend,
                        format!("{k} is less than {ck}, going left"),
                    )
                    .highlight([ck]),
                );
                (self.arena()[curr as usize].l(), true)
            } else if k > ck {
                frames.push(
                    self.frame(
                        TreeEvent::Descend,
                        format!("{k} is greater than {ck}, going right"),
                    )
                    .highlight([ck]),
                );
                (self.arena()[curr as usize].r(), false)
            } else {
                frames.push(
                    self.frame(
                        TreeEvent::Duplicate,
                        format!("Key {k} already exists in the tree, no insertion needed"),
                    )
                    .highlight([ck]),
                );
                return Located::Duplicate(curr);
            };
            match next {
                Some(next) => curr = next,
                None => return Located::Vacant { parent: curr, left },
            }
        }
    }

    /// Records a lookup of `k` without modifying the tree.
    fn search(&self, k: Key) -> Vec<TreeFrame> {
        let mut frames = vec![self.frame(
            TreeEvent::SearchStart,
            format!("Starting search for key {k}"),
        )];
        let Some(mut curr) = self.root() else {
            frames.push(self.frame(TreeEvent::NotFound, "Tree is empty, search failed".into()));
            return frames;
        };
        loop {
            let ck = key(self.arena(), curr);
            frames.push(
                self.frame(TreeEvent::Compare, format!("Comparing {k} with {ck}"))
                    .highlight([ck]),
            );
            let next = if k == ck {
                frames.push(
                    self.frame(TreeEvent::Found, format!("Found key {k}!"))
                        .highlight([ck])
                        .changed([ck]),
                );
                break;
            } else if k < ck {
                frames.push(
                    self.frame(
                        TreeEvent::Descend,
                        format!("{k} is less than {ck}, going left"),
                    )
                    .highlight([ck]),
                );
                self.arena()[curr as usize].l()
            } else {
                frames.push(
                    self.frame(
                        TreeEvent::Descend,
                        format!("{k} is greater than {ck}, going right"),
                    )
                    .highlight([ck]),
                );
                self.arena()[curr as usize].r()
            };
            match next {
                Some(next) => curr = next,
                None => {
                    frames.push(self.frame(
                        TreeEvent::NotFound,
                        format!("Reached a null node, key {k} not found"),
                    ));
                    break;
                }
            }
        }
        frames.push(self.frame(TreeEvent::Complete, "Search complete".into()));
        frames
    }
}

/// Inserts `keys` one at a time into an empty tree of family `T`.
///
/// The trace opens with an empty-tree frame, contains one insertion
/// sub-trace per key (duplicates included), and closes with a summary frame
/// over the finished tree.
pub fn trace_insert_all<T: TreeTracer>(keys: &[Key]) -> Vec<TreeFrame> {
    let mut tracer = T::default();
    let frames = record(&mut tracer, keys);
    tracing::debug!(
        tree = T::NAME,
        keys = keys.len(),
        frames = frames.len(),
        "tree trace recorded"
    );
    frames
}

/// Like [`trace_insert_all`] but hands back the tracer so callers can keep
/// working with the built tree (for example to [`search`](TreeTracer::search) it).
pub fn build<T: TreeTracer>(keys: &[Key]) -> (T, Vec<TreeFrame>) {
    let mut tracer = T::default();
    let frames = record(&mut tracer, keys);
    (tracer, frames)
}

fn record<T: TreeTracer>(tracer: &mut T, keys: &[Key]) -> Vec<TreeFrame> {
    let mut frames = vec![TreeFrame::new(
        TreeSnapshot::empty(),
        TreeEvent::Start,
        format!("Starting with an empty {}", T::NAME),
    )];
    for &k in keys {
        tracer.insert(k, &mut frames);
    }
    frames.push(tracer.frame(
        TreeEvent::Complete,
        format!("{} construction complete", T::NAME),
    ));
    frames
}

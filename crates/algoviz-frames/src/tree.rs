//! Index-based tree snapshots.
//!
//! A [`TreeSnapshot`] is a copy of the tracer's node arena: nodes refer to
//! each other by `u32` index, `parent` is a plain back-index and never an
//! owning edge. Copying the arena per frame is what gives every frame its own
//! independent tree.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Tree key.
pub type Key = i64;

/// Red-Black node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => f.write_str("RED"),
            Color::Black => f.write_str("BLACK"),
        }
    }
}

/// Family-specific node data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodeShape {
    Bst,
    Avl { height: u32 },
    RedBlack { color: Color },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub key: Key,
    pub parent: Option<u32>,
    pub left: Option<u32>,
    pub right: Option<u32>,
    pub shape: NodeShape,
}

impl SnapshotNode {
    pub fn color(&self) -> Option<Color> {
        match self.shape {
            NodeShape::RedBlack { color } => Some(color),
            _ => None,
        }
    }

    pub fn stored_height(&self) -> Option<u32> {
        match self.shape {
            NodeShape::Avl { height } => Some(height),
            _ => None,
        }
    }
}

/// Owned copy of a tree at one instant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    pub root: Option<u32>,
    pub nodes: Vec<SnapshotNode>,
}

impl TreeSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn node(&self, i: u32) -> &SnapshotNode {
        &self.nodes[i as usize]
    }

    pub fn root_node(&self) -> Option<&SnapshotNode> {
        self.root.map(|r| self.node(r))
    }

    /// Keys in symmetric order.
    pub fn in_order_keys(&self) -> Vec<Key> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut curr = self.root;
        while curr.is_some() || !stack.is_empty() {
            while let Some(i) = curr {
                stack.push(i);
                curr = self.node(i).left;
            }
            let Some(i) = stack.pop() else { break };
            out.push(self.node(i).key);
            curr = self.node(i).right;
        }
        out
    }

    /// Number of nodes reachable from the root.
    pub fn len(&self) -> usize {
        self.in_order_keys().len()
    }

    /// Structural height of the subtree at `i` (0 for an absent subtree).
    pub fn height(&self, i: Option<u32>) -> u32 {
        match i {
            None => 0,
            Some(i) => {
                let n = self.node(i);
                1 + self.height(n.left).max(self.height(n.right))
            }
        }
    }

    /// `height(left) - height(right)` for every reachable node, computed
    /// from the structure rather than stored heights.
    pub fn balance_factors(&self) -> BTreeMap<Key, i32> {
        let mut out = BTreeMap::new();
        self.collect_balance(self.root, &mut out);
        out
    }

    fn collect_balance(&self, i: Option<u32>, out: &mut BTreeMap<Key, i32>) -> u32 {
        let Some(i) = i else { return 0 };
        let n = self.node(i);
        let l = self.collect_balance(n.left, out);
        let r = self.collect_balance(n.right, out);
        out.insert(n.key, l as i32 - r as i32);
        1 + l.max(r)
    }

    /// Checks ordering, uniqueness and parent back-links.
    pub fn validate_bst(&self) -> Result<(), InvariantError> {
        if let Some(root) = self.root_node() {
            if root.parent.is_some() {
                return Err(InvariantError::RootHasParent(root.key));
            }
        }
        let keys = self.in_order_keys();
        if let Some(w) = keys.windows(2).find(|w| w[0] >= w[1]) {
            return Err(InvariantError::OutOfOrder {
                before: w[0],
                after: w[1],
            });
        }
        for (i, n) in self.nodes.iter().enumerate() {
            for child in [n.left, n.right].into_iter().flatten() {
                if self.node(child).parent != Some(i as u32) {
                    return Err(InvariantError::BrokenBackLink {
                        child: self.node(child).key,
                        parent: n.key,
                    });
                }
            }
        }
        Ok(())
    }

    /// Checks the AVL balance condition and stored heights.
    pub fn validate_avl(&self) -> Result<(), InvariantError> {
        self.validate_bst()?;
        if let Some((&key, &factor)) = self.balance_factors().iter().find(|(_, bf)| bf.abs() > 1) {
            return Err(InvariantError::Unbalanced { key, factor });
        }
        for i in 0..self.nodes.len() as u32 {
            let n = self.node(i);
            if let Some(stored) = n.stored_height() {
                let actual = self.height(Some(i));
                if stored != actual {
                    return Err(InvariantError::StaleHeight {
                        key: n.key,
                        stored,
                        actual,
                    });
                }
            }
        }
        Ok(())
    }

    /// Checks the Red-Black properties and returns the black height.
    pub fn validate_red_black(&self) -> Result<u32, InvariantError> {
        self.validate_bst()?;
        if let Some(root) = self.root_node() {
            if root.color() != Some(Color::Black) {
                return Err(InvariantError::RedRoot(root.key));
            }
        }
        self.black_height(self.root)
    }

    fn black_height(&self, i: Option<u32>) -> Result<u32, InvariantError> {
        let Some(i) = i else { return Ok(1) };
        let n = self.node(i);
        let color = n.color().ok_or(InvariantError::Uncolored(n.key))?;
        if color == Color::Red {
            for child in [n.left, n.right].into_iter().flatten() {
                if self.node(child).color() == Some(Color::Red) {
                    return Err(InvariantError::RedRed {
                        parent: n.key,
                        child: self.node(child).key,
                    });
                }
            }
        }
        let left = self.black_height(n.left)?;
        let right = self.black_height(n.right)?;
        if left != right {
            return Err(InvariantError::BlackHeight {
                key: n.key,
                left,
                right,
            });
        }
        Ok(left + u32::from(color == Color::Black))
    }

    fn write_subtree(&self, f: &mut fmt::Formatter<'_>, i: u32, depth: usize) -> fmt::Result {
        let n = self.node(i);
        match n.shape {
            NodeShape::Bst => writeln!(f, "{}", n.key)?,
            NodeShape::Avl { height } => writeln!(f, "{} (h={height})", n.key)?,
            NodeShape::RedBlack { color } => writeln!(f, "{} {color}", n.key)?,
        }
        if n.left.is_none() && n.right.is_none() {
            return Ok(());
        }
        for (side, child) in [("L", n.left), ("R", n.right)] {
            write!(f, "{:width$}{side}: ", "", width = 2 * (depth + 1))?;
            match child {
                Some(c) => self.write_subtree(f, c, depth + 1)?,
                None => writeln!(f, "-")?,
            }
        }
        Ok(())
    }
}

/// Outline rendering, one node per line with its children indented below as
/// `L:` and `R:`. A leaf prints no child lines; a missing child of an inner
/// node prints `-`.
///
/// ```
/// use algoviz_frames::{NodeShape, SnapshotNode, TreeSnapshot};
///
/// let leaf = |key, parent| SnapshotNode { key, parent, left: None, right: None, shape: NodeShape::Bst };
/// let mut root = leaf(2, None);
/// root.right = Some(1);
/// let tree = TreeSnapshot { root: Some(0), nodes: vec![root, leaf(3, Some(0))] };
/// assert_eq!(tree.to_string(), "2\n  L: -\n  R: 3\n");
/// ```
impl fmt::Display for TreeSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            None => writeln!(f, "(empty)"),
            Some(root) => self.write_subtree(f, root, 0),
        }
    }
}

/// A broken structural invariant found by one of the `validate_*` checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantError {
    #[error("root {0} has a parent")]
    RootHasParent(Key),
    #[error("keys out of order: {before} before {after}")]
    OutOfOrder { before: Key, after: Key },
    #[error("node {child} does not point back to parent {parent}")]
    BrokenBackLink { child: Key, parent: Key },
    #[error("node {key} has balance factor {factor}")]
    Unbalanced { key: Key, factor: i32 },
    #[error("node {key} stores height {stored}, actual {actual}")]
    StaleHeight { key: Key, stored: u32, actual: u32 },
    #[error("root {0} is not black")]
    RedRoot(Key),
    #[error("node {0} has no color")]
    Uncolored(Key),
    #[error("red node {parent} has red child {child}")]
    RedRed { parent: Key, child: Key },
    #[error("black height mismatch under {key}: {left} vs {right}")]
    BlackHeight { key: Key, left: u32, right: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationEdge {
    pub from: Key,
    pub to: Key,
}

/// What a [`TreeFrame`] depicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TreeEvent {
    /// Empty tree before the first key.
    Start,
    /// A single key insertion begins.
    InsertStart,
    /// A key lookup begins; the tree is left untouched.
    SearchStart,
    /// The key is compared with a node.
    Compare,
    /// The descent chose a side.
    Descend,
    /// A new node was linked into the tree.
    Insert,
    /// The key was already present; nothing changes.
    Duplicate,
    /// AVL balance inspection at a node.
    BalanceCheck,
    Rotate,
    Recolor,
    /// A single key insertion finished.
    InsertComplete,
    Found,
    NotFound,
    /// All keys inserted, or a search finished.
    Complete,
}

/// One observable moment of a tree trace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeFrame {
    pub tree: TreeSnapshot,
    pub highlighted_nodes: Vec<Key>,
    pub changed_nodes: Vec<Key>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_edge: Option<RotationEdge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_factor: Option<BTreeMap<Key, i32>>,
    pub description: String,
    pub event: TreeEvent,
}

impl TreeFrame {
    pub fn new(tree: TreeSnapshot, event: TreeEvent, description: impl Into<String>) -> Self {
        Self {
            tree,
            highlighted_nodes: Vec::new(),
            changed_nodes: Vec::new(),
            rotation_edge: None,
            balance_factor: None,
            description: description.into(),
            event,
        }
    }

    pub fn highlight(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.highlighted_nodes.extend(keys);
        self
    }

    pub fn changed(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.changed_nodes.extend(keys);
        self
    }

    pub fn rotation(mut self, from: Key, to: Key) -> Self {
        self.rotation_edge = Some(RotationEdge { from, to });
        self
    }

    pub fn balance(mut self, factors: BTreeMap<Key, i32>) -> Self {
        self.balance_factor = Some(factors);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(key: Key, parent: Option<u32>, left: Option<u32>, right: Option<u32>) -> SnapshotNode {
        SnapshotNode {
            key,
            parent,
            left,
            right,
            shape: NodeShape::Bst,
        }
    }

    // 20 <- 10 -> 30, stored out of index order on purpose
    fn small() -> TreeSnapshot {
        TreeSnapshot {
            root: Some(1),
            nodes: vec![
                node(10, Some(1), None, None),
                node(20, None, Some(0), Some(2)),
                node(30, Some(1), None, None),
            ],
        }
    }

    #[test]
    fn in_order_and_height() {
        let t = small();
        assert_eq!(t.in_order_keys(), vec![10, 20, 30]);
        assert_eq!(t.len(), 3);
        assert_eq!(t.height(t.root), 2);
        t.validate_bst().unwrap();
    }

    #[test]
    fn validate_bst_reports_broken_back_link() {
        let mut t = small();
        t.nodes[2].parent = Some(0);
        assert_eq!(
            t.validate_bst(),
            Err(InvariantError::BrokenBackLink {
                child: 30,
                parent: 20
            })
        );
    }

    #[test]
    fn validate_bst_reports_keys_out_of_order() {
        let mut t = small();
        t.nodes[0].key = 25;
        let err = t.validate_bst().unwrap_err();
        assert_eq!(
            err,
            InvariantError::OutOfOrder {
                before: 25,
                after: 20
            }
        );
        assert_eq!(err.to_string(), "keys out of order: 25 before 20");
    }

    #[test]
    fn validate_avl_reports_stale_height() {
        let mut t = small();
        for (n, height) in t.nodes.iter_mut().zip([1, 3, 1]) {
            n.shape = NodeShape::Avl { height };
        }
        assert_eq!(
            t.validate_avl(),
            Err(InvariantError::StaleHeight {
                key: 20,
                stored: 3,
                actual: 2
            })
        );
        t.nodes[1].shape = NodeShape::Avl { height: 2 };
        assert_eq!(t.validate_avl(), Ok(()));
    }

    #[test]
    fn red_black_validation_catches_red_red() {
        let mut t = small();
        t.nodes[1].shape = NodeShape::RedBlack { color: Color::Black };
        t.nodes[0].shape = NodeShape::RedBlack { color: Color::Red };
        t.nodes[2].shape = NodeShape::RedBlack { color: Color::Red };
        assert_eq!(t.validate_red_black(), Ok(2));

        // red root first, then a red parent over a red child
        t.nodes[1].shape = NodeShape::RedBlack { color: Color::Red };
        assert_eq!(t.validate_red_black(), Err(InvariantError::RedRoot(20)));
        t.root = None;
        assert_eq!(t.validate_red_black(), Ok(1));

        let mut t = small();
        t.nodes[1].shape = NodeShape::RedBlack { color: Color::Black };
        t.nodes[2].shape = NodeShape::RedBlack { color: Color::Black };
        t.nodes[0].shape = NodeShape::Bst;
        assert_eq!(t.validate_red_black(), Err(InvariantError::Uncolored(10)));
    }

    #[test]
    fn display_outlines_the_tree() {
        let mut t = small();
        assert_eq!(t.to_string(), "20\n  L: 10\n  R: 30\n");

        // 10 gains a left child so its missing right side shows up
        t.nodes.push(node(5, Some(0), None, None));
        t.nodes[0].left = Some(3);
        t.nodes[1].shape = NodeShape::RedBlack { color: Color::Black };
        assert_eq!(
            t.to_string(),
            "20 BLACK\n  L: 10\n    L: 5\n    R: -\n  R: 30\n"
        );
        assert_eq!(TreeSnapshot::empty().to_string(), "(empty)\n");
    }
}

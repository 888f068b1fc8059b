use algoviz_frames::{Key, SnapshotNode, TreeSnapshot};

use crate::types::Node;

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], i: u32, v: Option<u32>) {
    arena[i as usize].set_r(v);
}

#[inline]
pub(crate) fn key<N: Node>(arena: &[N], i: u32) -> Key {
    arena[i as usize].key()
}

/// Points `p`'s link that used to reference `old` at `new`.
fn relink_parent<N: Node>(arena: &mut [N], p: Option<u32>, old: u32, new: u32) {
    if let Some(p) = p {
        if arena[p as usize].l() == Some(old) {
            set_l(arena, p, Some(new));
        } else {
            set_r(arena, p, Some(new));
        }
    }
}

/// Right rotation at `n`: its left child `nl` takes its place and `n`
/// becomes `nl`'s right child. Returns `nl`.
///
/// # Panics
///
/// If `n` has no left child.
pub fn rotate_right<N: Node>(arena: &mut [N], n: u32) -> u32 {
    let nl = arena[n as usize].l().expect("right rotation needs a left child");
    let p = arena[n as usize].p();
    let nlr = arena[nl as usize].r();

    set_r(arena, nl, Some(n));
    set_l(arena, n, nlr);
    if let Some(nlr) = nlr {
        set_p(arena, nlr, Some(n));
    }

    set_p(arena, n, Some(nl));
    set_p(arena, nl, p);
    relink_parent(arena, p, n, nl);
    nl
}

/// Left rotation at `n`: its right child `nr` takes its place and `n`
/// becomes `nr`'s left child. Returns `nr`.
///
/// # Panics
///
/// If `n` has no right child.
pub fn rotate_left<N: Node>(arena: &mut [N], n: u32) -> u32 {
    let nr = arena[n as usize].r().expect("left rotation needs a right child");
    let p = arena[n as usize].p();
    let nrl = arena[nr as usize].l();

    set_l(arena, nr, Some(n));
    set_r(arena, n, nrl);
    if let Some(nrl) = nrl {
        set_p(arena, nrl, Some(n));
    }

    set_p(arena, n, Some(nr));
    set_p(arena, nr, p);
    relink_parent(arena, p, n, nr);
    nr
}

/// Copies the arena into an owned snapshot.
pub fn snapshot<N: Node>(arena: &[N], root: Option<u32>) -> TreeSnapshot {
    TreeSnapshot {
        root,
        nodes: arena
            .iter()
            .map(|n| SnapshotNode {
                key: n.key(),
                parent: n.p(),
                left: n.l(),
                right: n.r(),
                shape: n.shape(),
            })
            .collect(),
    }
}

//! Node trait shared by the three tree families.
//!
//! Nodes live in a `Vec<N>` arena owned by a tracer. Every link is an
//! `Option<u32>` index into that arena; `p` is a non-owning back-index.

use algoviz_frames::{Key, NodeShape};

/// Parent/left/right links plus the key.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
    fn key(&self) -> Key;
    /// Family-specific data as it appears in a snapshot.
    fn shape(&self) -> NodeShape;
}

macro_rules! impl_links {
    () => {
        fn p(&self) -> Option<u32> {
            self.p
        }

        fn l(&self) -> Option<u32> {
            self.l
        }

        fn r(&self) -> Option<u32> {
            self.r
        }

        fn set_p(&mut self, v: Option<u32>) {
            self.p = v;
        }

        fn set_l(&mut self, v: Option<u32>) {
            self.l = v;
        }

        fn set_r(&mut self, v: Option<u32>) {
            self.r = v;
        }

        fn key(&self) -> Key {
            self.k
        }
    };
}

pub(crate) use impl_links;

//! Sample data for driving the tracers.
//!
//! The free functions draw from `rand::thread_rng()`; use [`Generator`] when
//! the output has to be reproducible (tests, recorded demos).

pub mod config;
pub mod generator;

pub use config::GeneratorConfig;
pub use generator::{circle_layout, layout_weight, node_ids, Generator};

use algoviz_frames::{Graph, Key};

/// `size` integer values in `0..max_value`.
pub fn random_array(size: usize, max_value: u32) -> Vec<f64> {
    generator::array_with(&mut rand::thread_rng(), size, max_value)
}

/// Same as [`random_array`], sorted ascending.
pub fn random_sorted_array(size: usize, max_value: u32) -> Vec<f64> {
    generator::sorted_array_with(&mut rand::thread_rng(), size, max_value)
}

/// Random directed graph laid out on a circle of the default radius (150),
/// weakly connected along `0 -> 1 -> ... -> n-1`.
pub fn random_connected_graph(node_count: u32, edge_density: f64) -> Graph {
    generator::connected_graph_with(
        &mut rand::thread_rng(),
        node_count,
        edge_density,
        GeneratorConfig::default().radius,
    )
}

/// `count` distinct keys from `1..=max_key`.
pub fn random_keys(count: usize, max_key: Key) -> Vec<Key> {
    generator::keys_with(&mut rand::thread_rng(), count, max_key)
}

impl GeneratorConfig {
    /// A generator honouring `seed`, or an OS-seeded one.
    pub fn generator(&self) -> Generator {
        match self.seed {
            Some(seed) => Generator::from_u64(seed),
            None => Generator::new(None),
        }
    }
}

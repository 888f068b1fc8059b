use algoviz_frames::Key;
use serde::{Deserialize, Serialize};

/// Knobs for the sample-data generators.
///
/// Every field has a default, so a TOML file only needs the keys it wants to
/// override:
///
/// ```
/// use algoviz_random::GeneratorConfig;
///
/// let config = GeneratorConfig::from_toml_str("node_count = 8").unwrap();
/// assert_eq!(config.node_count, 8);
/// assert_eq!(config.array_size, 15);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub array_size: usize,
    /// Exclusive upper bound for generated array values.
    pub max_value: u32,
    pub node_count: u32,
    /// Probability of each directed edge `i -> j` (`i != j`).
    pub edge_density: f64,
    /// Radius of the circle the graph nodes are laid out on.
    pub radius: f64,
    pub tree_keys: Vec<Key>,
    /// Fixed seed for reproducible output. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            array_size: 15,
            max_value: 100,
            node_count: 6,
            edge_density: 0.4,
            radius: 150.0,
            tree_keys: vec![30, 20, 40, 10, 25, 35, 50],
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(src)
    }
}

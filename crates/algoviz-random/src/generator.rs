use algoviz_frames::{Edge, Graph, Key, Node, NodeId};
use rand::{rngs::OsRng, seq::index, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Seedable sample-data generator.
///
/// Uses the xoshiro256** PRNG, so two generators built from the same seed
/// produce the same arrays and graphs.
///
/// ```
/// use algoviz_random::Generator;
///
/// let mut a = Generator::from_u64(42);
/// let mut b = Generator::from_u64(42);
/// assert_eq!(a.array(10, 100), b.array(10, 100));
/// ```
pub struct Generator {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Generator {
    /// Creates a generator; without a seed one is drawn from `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Expands a short seed the same way `SeedableRng::seed_from_u64` does.
    pub fn from_u64(seed: u64) -> Self {
        let rng = Xoshiro256StarStar::seed_from_u64(seed);
        let mut bytes = [0u8; 32];
        let mut expand = Xoshiro256StarStar::seed_from_u64(seed);
        expand.fill_bytes(&mut bytes);
        Self { seed: bytes, rng }
    }

    pub fn array(&mut self, size: usize, max_value: u32) -> Vec<f64> {
        array_with(&mut self.rng, size, max_value)
    }

    pub fn sorted_array(&mut self, size: usize, max_value: u32) -> Vec<f64> {
        sorted_array_with(&mut self.rng, size, max_value)
    }

    pub fn connected_graph(&mut self, node_count: u32, edge_density: f64, radius: f64) -> Graph {
        connected_graph_with(&mut self.rng, node_count, edge_density, radius)
    }

    pub fn keys(&mut self, count: usize, max_key: Key) -> Vec<Key> {
        keys_with(&mut self.rng, count, max_key)
    }
}

/// `size` integers drawn uniformly from `0..max_value`, as `f64`.
pub fn array_with<R: Rng + ?Sized>(rng: &mut R, size: usize, max_value: u32) -> Vec<f64> {
    if max_value == 0 {
        return vec![0.0; size];
    }
    (0..size)
        .map(|_| f64::from(rng.gen_range(0..max_value)))
        .collect()
}

pub fn sorted_array_with<R: Rng + ?Sized>(rng: &mut R, size: usize, max_value: u32) -> Vec<f64> {
    let mut values = array_with(rng, size, max_value);
    values.sort_by(f64::total_cmp);
    values
}

/// Places `node_count` nodes evenly on a circle of `radius`, offset so the
/// whole layout sits in the positive quadrant with a 50 unit margin.
pub fn circle_layout(node_count: u32, radius: f64) -> Vec<Node> {
    (0..node_count)
        .map(|i| {
            let angle = f64::from(i) / f64::from(node_count) * 2.0 * std::f64::consts::PI;
            Node::new(
                i,
                angle.cos() * radius + radius + 50.0,
                angle.sin() * radius + radius + 50.0,
            )
        })
        .collect()
}

/// Edge weight between two laid-out nodes: Euclidean distance / 10, rounded.
pub fn layout_weight(a: &Node, b: &Node) -> u32 {
    ((a.x - b.x).hypot(a.y - b.y) / 10.0).round() as u32
}

/// Random directed graph whose nodes `0..node_count` are weakly connected
/// along the chain `0 - 1 - ... - n-1`.
///
/// Each ordered pair `(i, j)` with `i != j` gets an edge with probability
/// `edge_density`. Afterwards every consecutive pair with no edge in either
/// direction is patched with `i -> i+1`.
pub fn connected_graph_with<R: Rng + ?Sized>(
    rng: &mut R,
    node_count: u32,
    edge_density: f64,
    radius: f64,
) -> Graph {
    let nodes = circle_layout(node_count, radius);
    let density = if edge_density.is_nan() {
        0.0
    } else {
        edge_density.clamp(0.0, 1.0)
    };
    let mut edges = Vec::new();
    for i in 0..node_count {
        for j in 0..node_count {
            if i != j && rng.gen_bool(density) {
                edges.push(Edge {
                    source: i,
                    target: j,
                    weight: layout_weight(&nodes[i as usize], &nodes[j as usize]),
                });
            }
        }
    }
    for i in 0..node_count.saturating_sub(1) {
        let linked = edges.iter().any(|e| {
            (e.source == i && e.target == i + 1) || (e.source == i + 1 && e.target == i)
        });
        if !linked {
            edges.push(Edge {
                source: i,
                target: i + 1,
                weight: layout_weight(&nodes[i as usize], &nodes[i as usize + 1]),
            });
        }
    }
    Graph::new(nodes, edges)
}

/// `count` distinct keys from `1..=max_key`, in random insertion order.
/// Asking for more keys than the range holds returns the whole range.
pub fn keys_with<R: Rng + ?Sized>(rng: &mut R, count: usize, max_key: Key) -> Vec<Key> {
    let span = usize::try_from(max_key.max(0)).unwrap_or(usize::MAX);
    index::sample(rng, span, count.min(span))
        .into_iter()
        .map(|i| i as Key + 1)
        .collect()
}

/// Node ids in layout order; handy for picking a start node.
pub fn node_ids(graph: &Graph) -> Vec<NodeId> {
    graph.nodes.iter().map(|n| n.id).collect()
}

//! Algorithm catalog.
//!
//! The catalog is a fixed table of algorithm metadata seeded from an embedded
//! TOML document. Entries are unique by `(type, name)` and by `id`; both are
//! enforced when an entry is inserted, so lookups never have to deduplicate.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const BUILTIN: &str = include_str!("catalog.toml");

/// Algorithm family. Serialized as the lowercase `type` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Sorting,
    Search,
    Graph,
    Tree,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 4] = [
        AlgorithmKind::Sorting,
        AlgorithmKind::Search,
        AlgorithmKind::Graph,
        AlgorithmKind::Tree,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmKind::Sorting => "sorting",
            AlgorithmKind::Search => "search",
            AlgorithmKind::Graph => "graph",
            AlgorithmKind::Tree => "tree",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownKind(s.to_string()))
    }
}

/// Every algorithm that has a tracer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    BubbleSort,
    QuickSort,
    MergeSort,
    HeapSort,
    LinearSearch,
    BinarySearch,
    Bfs,
    Dfs,
    Dijkstra,
    Bst,
    Avl,
    RedBlack,
}

impl Algorithm {
    pub const ALL: [Algorithm; 12] = [
        Algorithm::BubbleSort,
        Algorithm::QuickSort,
        Algorithm::MergeSort,
        Algorithm::HeapSort,
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Bst,
        Algorithm::Avl,
        Algorithm::RedBlack,
    ];

    pub fn kind(self) -> AlgorithmKind {
        match self {
            Algorithm::BubbleSort
            | Algorithm::QuickSort
            | Algorithm::MergeSort
            | Algorithm::HeapSort => AlgorithmKind::Sorting,
            Algorithm::LinearSearch | Algorithm::BinarySearch => AlgorithmKind::Search,
            Algorithm::Bfs | Algorithm::Dfs | Algorithm::Dijkstra => AlgorithmKind::Graph,
            Algorithm::Bst | Algorithm::Avl | Algorithm::RedBlack => AlgorithmKind::Tree,
        }
    }

    /// Display name, as used by catalog entries.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::HeapSort => "Heap Sort",
            Algorithm::LinearSearch => "Linear Search",
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::Bfs => "Breadth-First Search",
            Algorithm::Dfs => "Depth-First Search",
            Algorithm::Dijkstra => "Dijkstra's Algorithm",
            Algorithm::Bst => "Binary Search Tree",
            Algorithm::Avl => "AVL Tree",
            Algorithm::RedBlack => "Red-Black Tree",
        }
    }

    /// Resolves a tracer by `(kind, name)`; the name match ignores ASCII case
    /// and surrounding whitespace.
    pub fn lookup(kind: AlgorithmKind, name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.kind() == kind && a.name().eq_ignore_ascii_case(name))
    }

    /// The tracer for a catalog entry, if it has one.
    pub fn from_config(config: &AlgorithmConfig) -> Option<Self> {
        Self::lookup(config.kind, &config.name)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An algorithm shown next to a catalog entry. `kind` is set only when the
/// related algorithm belongs to a family the catalog covers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelatedAlgorithm {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<AlgorithmKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Asymptotic cost of an algorithm, as big-O strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complexity {
    pub best: String,
    pub average: String,
    pub worst: String,
    pub space: String,
    /// Whether equal elements keep their relative order. Sorts only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stable: Option<bool>,
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AlgorithmKind,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,
    #[serde(default)]
    pub parameters: BTreeMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<RelatedAlgorithm>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{kind} algorithm {name:?} is already in the catalog")]
    Duplicate { kind: AlgorithmKind, name: String },
    #[error("algorithm id {0:?} is already in the catalog")]
    DuplicateId(String),
    #[error("unknown algorithm type {0:?}")]
    UnknownKind(String),
    #[error("invalid catalog document: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    algorithm: Vec<AlgorithmConfig>,
}

fn name_key(kind: AlgorithmKind, name: &str) -> (AlgorithmKind, String) {
    (kind, name.trim().to_lowercase())
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<AlgorithmConfig>,
    by_name: BTreeMap<(AlgorithmKind, String), usize>,
    by_id: BTreeMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the embedded catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN)
    }

    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        catalog.extend_from_toml(src)?;
        Ok(catalog)
    }

    /// Adds every `[[algorithm]]` entry of `src`. Nothing is added if any
    /// entry is rejected. Returns the number of entries added.
    pub fn extend_from_toml(&mut self, src: &str) -> Result<usize, CatalogError> {
        let doc: CatalogDocument = toml::from_str(src)?;
        let mut next = self.clone();
        let added = doc.algorithm.len();
        for config in doc.algorithm {
            next.insert(config)?;
        }
        *self = next;
        tracing::debug!(added, total = self.len(), "catalog extended");
        Ok(added)
    }

    /// Inserts an entry, rejecting a repeated `(type, name)` or `id`.
    pub fn insert(&mut self, config: AlgorithmConfig) -> Result<&AlgorithmConfig, CatalogError> {
        let key = name_key(config.kind, &config.name);
        if self.by_name.contains_key(&key) {
            return Err(CatalogError::Duplicate {
                kind: config.kind,
                name: config.name,
            });
        }
        if self.by_id.contains_key(&config.id) {
            return Err(CatalogError::DuplicateId(config.id));
        }
        let slot = self.entries.len();
        self.by_name.insert(key, slot);
        self.by_id.insert(config.id.clone(), slot);
        self.entries.push(config);
        Ok(&self.entries[slot])
    }

    pub fn get(&self, id: &str) -> Option<&AlgorithmConfig> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    /// Case-insensitive lookup by family and name.
    pub fn find(&self, kind: AlgorithmKind, name: &str) -> Option<&AlgorithmConfig> {
        self.by_name
            .get(&name_key(kind, name))
            .map(|&i| &self.entries[i])
    }

    /// Looks an entry up by id first, then by name within any family.
    pub fn resolve(&self, query: &str) -> Option<&AlgorithmConfig> {
        self.get(query).or_else(|| {
            AlgorithmKind::ALL
                .into_iter()
                .find_map(|kind| self.find(kind, query))
        })
    }

    pub fn by_kind(&self, kind: AlgorithmKind) -> impl Iterator<Item = &AlgorithmConfig> + '_ {
        self.entries.iter().filter(move |c| c.kind == kind)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmConfig> + '_ {
        self.entries.iter()
    }

    /// Related algorithms of `entry`, each paired with its own catalog entry
    /// when it has a `type` and is listed.
    pub fn related<'a>(
        &'a self,
        entry: &'a AlgorithmConfig,
    ) -> Vec<(&'a RelatedAlgorithm, Option<&'a AlgorithmConfig>)> {
        entry
            .related
            .iter()
            .map(|r| (r, r.kind.and_then(|kind| self.find(kind, &r.name))))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

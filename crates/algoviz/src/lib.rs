//! Frame recorders for classic algorithms.
//!
//! Every tracer takes plain input and returns the full list of frames that a
//! step-by-step player would show: one frame per comparison, mutation or
//! traversal decision, each carrying its own copy of the state and a
//! human-readable description. Nothing is animated here; playback is the
//! consumer's job.
//!
//! | Family | Module | Frame type |
//! |--------|--------|------------|
//! | sorting | [`sorting`] | [`SortFrame`](algoviz_frames::SortFrame) |
//! | search | [`search`] | [`SearchFrame`](algoviz_frames::SearchFrame) |
//! | graph | [`graph`] | [`GraphFrame`](algoviz_frames::GraphFrame) |
//! | tree | [`algoviz_forest`] | [`TreeFrame`](algoviz_frames::TreeFrame) |
//!
//! [`dispatch::run`] routes an [`Algorithm`] and a [`TraceRequest`] to the
//! right tracer; [`Catalog`] holds the descriptive metadata.
//!
//! ```
//! use algoviz::{run, Algorithm, TraceRequest};
//!
//! let trace = run(Algorithm::QuickSort, TraceRequest::Sort { values: vec![3.0, 1.0, 2.0] }).unwrap();
//! assert_eq!(
//!     trace.summary(),
//!     Some("Sorting complete! The array is now sorted in ascending order.")
//! );
//! ```

pub mod catalog;
pub mod dispatch;
pub mod graph;
pub mod input;
pub mod metrics;
pub mod search;
pub mod sorting;
pub mod tracing_setup;

pub use catalog::{Algorithm, AlgorithmConfig, AlgorithmKind, Catalog, CatalogError, Complexity};
pub use dispatch::{run, run_config, Trace, TraceError, TraceRequest};
pub use input::{parse_keys, parse_values, InputError};
pub use metrics::{run_measured, TraceMetrics};

pub use algoviz_forest::{trace_avl, trace_bst, trace_bst_search, trace_red_black, SAMPLE_KEYS};
pub use algoviz_frames::Frame;

use serde::{Deserialize, Serialize};

/// What a [`SearchFrame`] depicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchEvent {
    Start,
    /// Binary search bounds were (re)set.
    Bounds,
    /// A midpoint was computed.
    Midpoint,
    /// An element is compared with the target.
    Compare,
    /// Half of the range was discarded.
    Narrow,
    Found,
    NotFound,
    /// The precondition of the search failed (unsorted or empty input).
    Rejected,
    /// Terminal summary after a match.
    Complete,
}

/// One observable moment of a search trace.
///
/// Once `found_index` is set it stays set for the rest of the trace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFrame {
    pub array: Vec<f64>,
    pub current_index: Option<usize>,
    pub found_index: Option<usize>,
    pub description: String,
    pub event: SearchEvent,
}

impl SearchFrame {
    pub fn new(
        array: &[f64],
        current_index: Option<usize>,
        found_index: Option<usize>,
        event: SearchEvent,
        description: impl Into<String>,
    ) -> Self {
        Self {
            array: array.to_vec(),
            current_index,
            found_index,
            description: description.into(),
            event,
        }
    }
}

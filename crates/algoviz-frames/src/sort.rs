use serde::{Deserialize, Serialize};

/// What a [`SortFrame`] depicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortEvent {
    /// Untouched input.
    Start,
    /// Two positions are being compared.
    Compare,
    /// Two positions were exchanged.
    Swap,
    /// One position was overwritten (merge sort placement).
    Place,
    /// A comparison kept the current order.
    Keep,
    /// A quick sort pivot was chosen.
    Pivot,
    /// A merge sort range was split in half.
    Split,
    /// A bubble sort pass or the heap build phase finished.
    Pass,
    /// Fully sorted output.
    Complete,
}

impl SortEvent {
    /// `true` for events that changed the array.
    pub fn is_mutation(self) -> bool {
        matches!(self, SortEvent::Swap | SortEvent::Place)
    }
}

/// One observable moment of a sorting trace.
///
/// At most one of `comparing_indices` / `swapped_indices` is non-empty: a
/// frame shows either a comparison or a mutation, never both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortFrame {
    pub array: Vec<f64>,
    pub comparing_indices: Vec<usize>,
    pub swapped_indices: Vec<usize>,
    pub description: String,
    pub event: SortEvent,
}

impl SortFrame {
    /// A frame with no highlighted indices.
    pub fn plain(array: &[f64], event: SortEvent, description: impl Into<String>) -> Self {
        Self {
            array: array.to_vec(),
            comparing_indices: Vec::new(),
            swapped_indices: Vec::new(),
            description: description.into(),
            event,
        }
    }

    pub fn compare(array: &[f64], i: usize, j: usize, description: impl Into<String>) -> Self {
        Self {
            array: array.to_vec(),
            comparing_indices: vec![i, j],
            swapped_indices: Vec::new(),
            description: description.into(),
            event: SortEvent::Compare,
        }
    }

    pub fn swap(array: &[f64], i: usize, j: usize, description: impl Into<String>) -> Self {
        Self {
            array: array.to_vec(),
            comparing_indices: Vec::new(),
            swapped_indices: vec![i, j],
            description: description.into(),
            event: SortEvent::Swap,
        }
    }

    pub fn place(array: &[f64], k: usize, description: impl Into<String>) -> Self {
        Self {
            array: array.to_vec(),
            comparing_indices: Vec::new(),
            swapped_indices: vec![k],
            description: description.into(),
            event: SortEvent::Place,
        }
    }
}

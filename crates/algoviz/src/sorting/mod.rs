//! Sorting tracers.
//!
//! Each tracer sorts a private copy of its input ascending and records a
//! [`SortFrame`] per comparison and per mutation. The first frame is always
//! the untouched input and the last is the sorted array; inputs of length 0
//! or 1 produce a single frame.

mod bubble;
mod heap;
mod merge;
mod quick;

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;

use algoviz_frames::{SortEvent, SortFrame};

const COMPLETE: &str = "Sorting complete! The array is now sorted in ascending order.";

/// Frames for inputs that need no work, or `None` when there is sorting to do.
fn trivially_sorted(values: &[f64]) -> Option<Vec<SortFrame>> {
    (values.len() <= 1).then(|| {
        vec![SortFrame::plain(
            values,
            SortEvent::Complete,
            format!(
                "Array has {} element{}, it is already sorted",
                values.len(),
                if values.len() == 1 { "" } else { "s" }
            ),
        )]
    })
}

fn start(values: &[f64], name: &str) -> SortFrame {
    SortFrame::plain(values, SortEvent::Start, format!("Starting {name} algorithm"))
}

fn finish(name: &str, array: &[f64], mut frames: Vec<SortFrame>) -> Vec<SortFrame> {
    frames.push(SortFrame::plain(array, SortEvent::Complete, COMPLETE));
    tracing::debug!(algorithm = name, len = array.len(), frames = frames.len(), "sort traced");
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    type Tracer = fn(&[f64]) -> Vec<SortFrame>;

    const ALL: [(&str, Tracer); 4] = [
        ("bubble", bubble_sort),
        ("quick", quick_sort),
        ("merge", merge_sort),
        ("heap", heap_sort),
    ];

    #[test]
    fn trivial_inputs_yield_one_frame() {
        for (name, trace) in ALL {
            for input in [&[][..], &[4.0][..]] {
                let frames = trace(input);
                assert_eq!(frames.len(), 1, "{name}");
                assert_eq!(frames[0].array, input);
                assert_eq!(frames[0].event, SortEvent::Complete);
            }
        }
    }

    #[test]
    fn bracketed_by_start_and_complete() {
        let input = [4.0, -1.5, 9.0, 4.0, 0.0, 2.0];
        for (name, trace) in ALL {
            let frames = trace(&input);
            let first = frames.first().unwrap();
            let last = frames.last().unwrap();
            assert_eq!(first.array, input, "{name}");
            assert!(first.description.starts_with("Starting "));
            assert_eq!(last.array, vec![-1.5, 0.0, 2.0, 4.0, 4.0, 9.0], "{name}");
            assert_eq!(last.description, COMPLETE);
        }
    }

    #[test]
    fn compare_and_mutation_never_share_a_frame() {
        let input = [5.0, 1.0, 4.0, 2.0, 8.0, 0.0, 2.0];
        for (_, trace) in ALL {
            for f in trace(&input) {
                assert!(f.comparing_indices.is_empty() || f.swapped_indices.is_empty());
                assert!(f.comparing_indices.len() <= 2 && f.swapped_indices.len() <= 2);
            }
        }
    }
}

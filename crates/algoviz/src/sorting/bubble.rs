use algoviz_frames::{SortEvent, SortFrame};

use super::{finish, start, trivially_sorted};

/// Bubble sort with early exit once a pass makes no swap.
pub fn bubble_sort(values: &[f64]) -> Vec<SortFrame> {
    if let Some(frames) = trivially_sorted(values) {
        return frames;
    }
    let mut a = values.to_vec();
    let n = a.len();
    let mut frames = vec![start(&a, "Bubble Sort")];

    for i in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            frames.push(SortFrame::compare(
                &a,
                j,
                j + 1,
                format!(
                    "Comparing elements at indices {j} ({}) and {} ({})",
                    a[j],
                    j + 1,
                    a[j + 1]
                ),
            ));
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                swapped = true;
                frames.push(SortFrame::swap(
                    &a,
                    j,
                    j + 1,
                    format!("{} is less than {}, so we swap them", a[j], a[j + 1]),
                ));
            } else {
                let mut keep = SortFrame::compare(
                    &a,
                    j,
                    j + 1,
                    format!(
                        "{} is already less than or equal to {}, no swap needed",
                        a[j],
                        a[j + 1]
                    ),
                );
                keep.event = SortEvent::Keep;
                frames.push(keep);
            }
        }
        if !swapped {
            break;
        }
        let done = i + 1;
        frames.push(SortFrame::plain(
            &a,
            SortEvent::Pass,
            format!(
                "Completed iteration {done}. The largest {done} element{} now at the end of the array.",
                if done > 1 { "s are" } else { " is" }
            ),
        ));
    }

    finish("bubble", &a, frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_small_example() {
        let frames = bubble_sort(&[5.0, 3.0, 8.0, 1.0]);
        assert_eq!(frames.last().unwrap().array, vec![1.0, 3.0, 5.0, 8.0]);
        assert!(frames.iter().any(|f| !f.swapped_indices.is_empty()));
        assert_eq!(
            frames[1].description,
            "Comparing elements at indices 0 (5) and 1 (3)"
        );
        assert_eq!(frames[2].description, "3 is less than 5, so we swap them");
        assert_eq!(frames[2].swapped_indices, vec![0, 1]);
    }

    #[test]
    fn sorted_input_stops_after_one_pass() {
        let frames = bubble_sort(&[1.0, 2.0, 3.0, 4.0]);
        // start, 3 x (compare + keep), complete
        assert_eq!(frames.len(), 8);
        assert!(frames.iter().all(|f| f.event != SortEvent::Swap));
        assert!(frames.iter().all(|f| f.event != SortEvent::Pass));
        assert_eq!(
            frames[2].description,
            "1 is already less than or equal to 2, no swap needed"
        );
    }

    #[test]
    fn pass_frames_use_plural_after_first() {
        let frames = bubble_sort(&[3.0, 2.0, 1.0]);
        let passes: Vec<&str> = frames
            .iter()
            .filter(|f| f.event == SortEvent::Pass)
            .map(|f| f.description.as_str())
            .collect();
        assert_eq!(
            passes,
            vec![
                "Completed iteration 1. The largest 1 element is now at the end of the array.",
                "Completed iteration 2. The largest 2 elements are now at the end of the array.",
            ]
        );
    }
}

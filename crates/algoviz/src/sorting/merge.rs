use algoviz_frames::{SortEvent, SortFrame};

use super::{finish, start, trivially_sorted};

/// Top-down merge sort. Ties take the left run first, so equal values keep
/// their input order.
pub fn merge_sort(values: &[f64]) -> Vec<SortFrame> {
    if let Some(frames) = trivially_sorted(values) {
        return frames;
    }
    let mut a = values.to_vec();
    let mut frames = vec![start(&a, "Merge Sort")];
    let high = a.len() - 1;
    split(&mut a, 0, high, &mut frames);
    finish("merge", &a, frames)
}

fn split(a: &mut [f64], low: usize, high: usize, frames: &mut Vec<SortFrame>) {
    if low >= high {
        return;
    }
    let mid = low + (high - low) / 2;
    frames.push(SortFrame::plain(
        a,
        SortEvent::Split,
        format!("Splitting indices {low} to {high} into {low} to {mid} and {} to {high}", mid + 1),
    ));
    split(a, low, mid, frames);
    split(a, mid + 1, high, frames);
    merge(a, low, mid, high, frames);
}

/// Merges `a[low..=mid]` with `a[mid + 1..=high]` in place. A right head that
/// wins is rotated into position, so every snapshot is a permutation of the
/// input.
fn merge(a: &mut [f64], low: usize, mid: usize, high: usize, frames: &mut Vec<SortFrame>) {
    // the right run always starts at `mid + 1`; `mid` moves right as it shrinks
    let (mut k, mut mid) = (low, mid);

    while k <= mid && mid < high {
        let (l, r) = (a[k], a[mid + 1]);
        frames.push(SortFrame::compare(
            a,
            k,
            mid + 1,
            format!("Comparing {l} from the left half with {r} from the right half"),
        ));
        let description = if l <= r {
            format!("Placing {l} from the left half at index {k}")
        } else {
            a[k..=mid + 1].rotate_right(1);
            mid += 1;
            format!("Placing {r} from the right half at index {k}")
        };
        frames.push(SortFrame::place(a, k, description));
        k += 1;
    }
    // whatever is left already sits in its final slot
    let from_left = k <= mid;
    while k <= high {
        let v = a[k];
        let description = if from_left {
            format!("Right half exhausted, placing {v} from the left half at index {k}")
        } else {
            format!("Left half exhausted, placing {v} from the right half at index {k}")
        };
        frames.push(SortFrame::place(a, k, description));
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_lower_midpoint() {
        let frames = merge_sort(&[4.0, 3.0, 2.0, 1.0, 0.0]);
        let splits: Vec<&str> = frames
            .iter()
            .filter(|f| f.event == SortEvent::Split)
            .map(|f| f.description.as_str())
            .collect();
        assert_eq!(splits[0], "Splitting indices 0 to 4 into 0 to 2 and 3 to 4");
        // ranges of size >= 2: [0..4], [0..2], [0..1], [3..4]
        assert_eq!(splits.len(), 4);
        assert_eq!(frames.last().unwrap().array, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn each_placement_writes_one_slot() {
        let input = [3.0, 1.0, 2.0, 1.0];
        let frames = merge_sort(&input);
        let places = frames.iter().filter(|f| f.event == SortEvent::Place);
        for f in places.clone() {
            assert_eq!(f.swapped_indices.len(), 1);
        }
        // every merge level writes every element of its range once: 2 + 2 + 4
        assert_eq!(places.count(), 8);
    }

    #[test]
    fn exhausted_run_is_named() {
        let frames = merge_sort(&[1.0, 2.0]);
        let descriptions: Vec<&str> = frames.iter().map(|f| f.description.as_str()).collect();
        assert!(descriptions.contains(&"Placing 1 from the left half at index 0"));
        assert!(descriptions.contains(&"Left half exhausted, placing 2 from the right half at index 1"));
    }

    #[test]
    fn snapshots_never_lose_a_value() {
        for input in [
            vec![0.0, -1.0],
            vec![5.0, 1.0, 4.0, 2.0, 3.0],
            vec![2.0, 2.0, 1.0, 1.0, 0.0, 3.0],
        ] {
            let mut expected = input.clone();
            expected.sort_by(f64::total_cmp);
            for (n, f) in merge_sort(&input).iter().enumerate() {
                let mut seen = f.array.clone();
                seen.sort_by(f64::total_cmp);
                assert_eq!(seen, expected, "frame {n}: {}", f.description);
            }
        }
    }

    #[test]
    fn right_head_moves_into_place() {
        let frames = merge_sort(&[0.0, -1.0]);
        let placed = frames
            .iter()
            .find(|f| f.description == "Placing -1 from the right half at index 0")
            .unwrap();
        assert_eq!(placed.array, vec![-1.0, 0.0]);
        assert_eq!(placed.swapped_indices, vec![0]);
    }

    #[test]
    fn ties_prefer_left_run() {
        let frames = merge_sort(&[2.0, 2.0]);
        assert!(frames
            .iter()
            .any(|f| f.description == "Placing 2 from the left half at index 0"));
    }
}

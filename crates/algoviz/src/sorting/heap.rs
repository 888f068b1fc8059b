use algoviz_frames::{SortEvent, SortFrame};

use super::{finish, start, trivially_sorted};

/// Heap sort: bottom-up max-heap build, then repeated root extraction.
pub fn heap_sort(values: &[f64]) -> Vec<SortFrame> {
    if let Some(frames) = trivially_sorted(values) {
        return frames;
    }
    let mut a = values.to_vec();
    let n = a.len();
    let mut frames = vec![start(&a, "Heap Sort")];

    for i in (0..n / 2).rev() {
        sift_down(&mut a, n, i, &mut frames);
    }
    frames.push(SortFrame::plain(
        &a,
        SortEvent::Pass,
        format!("Max-heap built, largest value {} is at the root", a[0]),
    ));

    for end in (1..n).rev() {
        a.swap(0, end);
        frames.push(SortFrame::swap(
            &a,
            0,
            end,
            format!("Moving max {} from the root to index {end}", a[end]),
        ));
        sift_down(&mut a, end, 0, &mut frames);
    }

    finish("heap", &a, frames)
}

/// Restores the max-heap property below `i` within `a[..n]`.
fn sift_down(a: &mut [f64], n: usize, mut i: usize, frames: &mut Vec<SortFrame>) {
    loop {
        let mut largest = i;
        let (left, right) = (2 * i + 1, 2 * i + 2);
        if left < n {
            frames.push(SortFrame::compare(
                a,
                largest,
                left,
                format!(
                    "Comparing parent {} at index {largest} with left child {} at index {left}",
                    a[largest], a[left]
                ),
            ));
            if a[left] > a[largest] {
                largest = left;
            }
        }
        if right < n {
            frames.push(SortFrame::compare(
                a,
                largest,
                right,
                format!(
                    "Comparing largest so far {} at index {largest} with right child {} at index {right}",
                    a[largest], a[right]
                ),
            ));
            if a[right] > a[largest] {
                largest = right;
            }
        }
        if largest == i {
            return;
        }
        a.swap(i, largest);
        frames.push(SortFrame::swap(
            a,
            i,
            largest,
            format!("Swapping {} and {} to restore the heap", a[i], a[largest]),
        ));
        i = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_built_before_extraction() {
        let frames = heap_sort(&[1.0, 5.0, 3.0, 9.0]);
        let built = frames
            .iter()
            .position(|f| f.event == SortEvent::Pass)
            .unwrap();
        assert_eq!(frames[built].array[0], 9.0);
        assert_eq!(
            frames[built].description,
            "Max-heap built, largest value 9 is at the root"
        );
        let first_extract = &frames[built + 1];
        assert_eq!(first_extract.swapped_indices, vec![0, 3]);
        assert_eq!(frames.last().unwrap().array, vec![1.0, 3.0, 5.0, 9.0]);
    }

    #[test]
    fn right_child_compared_against_current_largest() {
        // root 1, left 2, right 3: the right comparison is against the left child
        let frames = heap_sort(&[1.0, 2.0, 3.0]);
        assert_eq!(frames[1].comparing_indices, vec![0, 1]);
        assert_eq!(frames[2].comparing_indices, vec![1, 2]);
        assert_eq!(frames[3].swapped_indices, vec![0, 2]);
    }
}

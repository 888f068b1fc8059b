use algoviz_frames::{SortEvent, SortFrame};

use super::{finish, start, trivially_sorted};

/// Quick sort with Lomuto partitioning; the pivot is the last element of the
/// active range.
pub fn quick_sort(values: &[f64]) -> Vec<SortFrame> {
    if let Some(frames) = trivially_sorted(values) {
        return frames;
    }
    let mut a = values.to_vec();
    let mut frames = vec![start(&a, "Quick Sort")];
    let high = a.len() - 1;
    sort(&mut a, 0, high, &mut frames);
    finish("quick", &a, frames)
}

fn sort(a: &mut [f64], low: usize, high: usize, frames: &mut Vec<SortFrame>) {
    if low >= high {
        return;
    }
    let p = partition(a, low, high, frames);
    if p > low {
        sort(a, low, p - 1, frames);
    }
    sort(a, p + 1, high, frames);
}

fn partition(a: &mut [f64], low: usize, high: usize, frames: &mut Vec<SortFrame>) -> usize {
    let pivot = a[high];
    let mut pick = SortFrame::plain(
        a,
        SortEvent::Pivot,
        format!("Selecting pivot {pivot} (last element of indices {low} to {high})"),
    );
    pick.comparing_indices = vec![high];
    frames.push(pick);

    let mut store = low;
    for j in low..high {
        frames.push(SortFrame::compare(
            a,
            j,
            high,
            format!("Comparing {} at index {j} with pivot {pivot}", a[j]),
        ));
        if a[j] <= pivot {
            a.swap(store, j);
            frames.push(SortFrame::swap(
                a,
                store,
                j,
                format!("{} <= {pivot}, moving it to index {store}", a[store]),
            ));
            store += 1;
        }
    }
    a.swap(store, high);
    frames.push(SortFrame::swap(
        a,
        store,
        high,
        format!("Placing pivot {pivot} at its final index {store}"),
    ));
    store
}

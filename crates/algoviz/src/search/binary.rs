use algoviz_frames::{SearchEvent, SearchFrame};

use super::is_sorted;

/// Bisection over an ascending array.
///
/// An empty or unsorted input ends the trace right after the start frame
/// with a single [`SearchEvent::Rejected`] frame.
pub fn binary_search(values: &[f64], target: f64) -> Vec<SearchFrame> {
    let frame = |current, found, event, description: String| {
        SearchFrame::new(values, current, found, event, description)
    };
    let mut frames = vec![frame(
        None,
        None,
        SearchEvent::Start,
        format!(
            "Starting binary search for target value {target} in array of length {}",
            values.len()
        ),
    )];

    if values.is_empty() {
        frames.push(frame(
            None,
            None,
            SearchEvent::Rejected,
            "Array is empty, search cannot be performed".into(),
        ));
        return frames;
    }
    if !is_sorted(values) {
        frames.push(frame(
            None,
            None,
            SearchEvent::Rejected,
            "Binary search requires a sorted array. This array is not sorted!".into(),
        ));
        tracing::debug!(len = values.len(), "binary search rejected unsorted input");
        return frames;
    }

    // `right` is one past the inclusive upper bound so it never underflows.
    let (mut left, mut right) = (0usize, values.len());
    frames.push(frame(
        None,
        None,
        SearchEvent::Bounds,
        format!("Setting initial search boundaries: left = {left}, right = {}", right - 1),
    ));

    while left < right {
        let hi = right - 1;
        let mid = (left + hi) / 2;
        let v = values[mid];
        frames.push(frame(
            Some(mid),
            None,
            SearchEvent::Midpoint,
            format!("Calculating middle index: ({left} + {hi}) / 2 = {mid}"),
        ));
        frames.push(frame(
            Some(mid),
            None,
            SearchEvent::Compare,
            format!("Comparing element at index {mid} (value: {v}) with target {target}"),
        ));

        if v == target {
            frames.push(frame(
                None,
                Some(mid),
                SearchEvent::Found,
                format!("Found target {target} at index {mid}!"),
            ));
            frames.push(frame(
                None,
                Some(mid),
                SearchEvent::Complete,
                format!("Binary search complete. Target {target} found at index {mid}."),
            ));
            tracing::debug!(len = values.len(), found = mid, frames = frames.len(), "binary search traced");
            return frames;
        }

        if v < target {
            left = mid + 1;
            frames.push(frame(
                None,
                None,
                SearchEvent::Narrow,
                format!(
                    "{v} < {target}, so target must be in the right half. Setting left = {left}, right remains {hi}"
                ),
            ));
        } else {
            right = mid;
            frames.push(frame(
                None,
                None,
                SearchEvent::Narrow,
                format!(
                    "{v} > {target}, so target must be in the left half. Setting right = {}, left remains {left}",
                    mid as i64 - 1
                ),
            ));
        }

        if left < right {
            frames.push(frame(
                None,
                None,
                SearchEvent::Bounds,
                format!("New search range: indices {left} to {}", right - 1),
            ));
        }
    }

    frames.push(frame(
        None,
        None,
        SearchEvent::NotFound,
        format!("Binary search complete. Target {target} not found in the array."),
    ));
    tracing::debug!(len = values.len(), frames = frames.len(), "binary search traced");
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_in_fibonacci_like_array() {
        let frames = binary_search(&[1.0, 2.0, 5.0, 9.0, 13.0, 21.0, 34.0, 55.0, 89.0], 21.0);
        let last = frames.last().unwrap();
        assert_eq!(last.found_index, Some(5));
        assert_eq!(frames[1].description, "Setting initial search boundaries: left = 0, right = 8");
        assert_eq!(frames[2].description, "Calculating middle index: (0 + 8) / 2 = 4");
        assert_eq!(
            frames[4].description,
            "13 < 21, so target must be in the right half. Setting left = 5, right remains 8"
        );
        assert_eq!(frames[5].description, "New search range: indices 5 to 8");
    }

    #[test]
    fn unsorted_input_is_rejected_in_two_frames() {
        let frames = binary_search(&[5.0, 2.0, 9.0, 1.0], 2.0);
        assert_eq!(frames.len(), 2);
        assert!(frames.iter().all(|f| f.current_index.is_none()));
        assert_eq!(
            frames[1].description,
            "Binary search requires a sorted array. This array is not sorted!"
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        let frames = binary_search(&[], 3.0);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].description, "Array is empty, search cannot be performed");
    }

    #[test]
    fn miss_left_of_first_element() {
        let frames = binary_search(&[10.0, 20.0], 5.0);
        let descriptions: Vec<&str> = frames.iter().map(|f| f.description.as_str()).collect();
        assert!(descriptions
            .contains(&"10 > 5, so target must be in the left half. Setting right = -1, left remains 0"));
        assert_eq!(
            descriptions.last(),
            Some(&"Binary search complete. Target 5 not found in the array.")
        );
        assert!(frames.iter().all(|f| f.found_index.is_none()));
    }
}

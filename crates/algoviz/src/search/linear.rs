use algoviz_frames::{SearchEvent, SearchFrame};

/// Scans left to right and stops at the first match.
pub fn linear_search(values: &[f64], target: f64) -> Vec<SearchFrame> {
    let mut frames = vec![SearchFrame::new(
        values,
        None,
        None,
        SearchEvent::Start,
        format!(
            "Starting linear search for target value {target} in array of length {}",
            values.len()
        ),
    )];

    for (i, &v) in values.iter().enumerate() {
        frames.push(SearchFrame::new(
            values,
            Some(i),
            None,
            SearchEvent::Compare,
            format!("Comparing element at index {i} (value: {v}) with target {target}"),
        ));
        if v == target {
            frames.push(SearchFrame::new(
                values,
                Some(i),
                Some(i),
                SearchEvent::Found,
                format!("Found target {target} at index {i}!"),
            ));
            frames.push(SearchFrame::new(
                values,
                None,
                Some(i),
                SearchEvent::Complete,
                format!("Linear search complete. Target {target} found at index {i}."),
            ));
            tracing::debug!(len = values.len(), found = i, frames = frames.len(), "linear search traced");
            return frames;
        }
    }

    frames.push(SearchFrame::new(
        values,
        None,
        None,
        SearchEvent::NotFound,
        format!("Linear search complete. Target {target} not found in the array."),
    ));
    tracing::debug!(len = values.len(), frames = frames.len(), "linear search traced");
    frames
}

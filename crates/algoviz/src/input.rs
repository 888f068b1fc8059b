//! Boundary validation for user-typed input.
//!
//! Tracers assume well-formed input (finite numbers, non-empty where it
//! matters); everything a user types goes through here first.

use algoviz_frames::Key;

/// Largest array or key list accepted from the boundary.
pub const MAX_ELEMENTS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Array cannot be empty")]
    Empty,
    #[error("Array has {len} elements, at most {max} are allowed")]
    TooLarge { len: usize, max: usize },
}

fn split_items(text: &str) -> Result<Vec<&str>, InputError> {
    let items: Vec<&str> = text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if items.is_empty() {
        return Err(InputError::Empty);
    }
    if items.len() > MAX_ELEMENTS {
        return Err(InputError::TooLarge {
            len: items.len(),
            max: MAX_ELEMENTS,
        });
    }
    Ok(items)
}

/// Parses a single finite number.
pub fn parse_number(item: &str) -> Result<f64, InputError> {
    let item = item.trim();
    item.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::InvalidNumber(item.to_string()))
}

/// Parses `"5, 3, 8"` into `[5.0, 3.0, 8.0]`.
pub fn parse_values(text: &str) -> Result<Vec<f64>, InputError> {
    split_items(text)?.into_iter().map(parse_number).collect()
}

/// Parses comma separated integer tree keys.
pub fn parse_keys(text: &str) -> Result<Vec<Key>, InputError> {
    split_items(text)?
        .into_iter()
        .map(|item| {
            item.parse::<Key>()
                .map_err(|_| InputError::InvalidNumber(item.to_string()))
        })
        .collect()
}

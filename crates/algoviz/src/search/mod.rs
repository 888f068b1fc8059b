//! Search tracers over numeric arrays.
//!
//! Once a frame reports `found_index`, every later frame repeats it.

mod binary;
mod linear;

pub use binary::binary_search;
pub use linear::linear_search;

/// `true` when `values` is ascending (equal neighbours allowed).
pub fn is_sorted(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

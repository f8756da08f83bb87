//! Benchmark fixtures for the array1d one-indexed sequence.
//!
//! - [`ramp`]: `[1.0, 2.0, ..., n]` as an `f64` sequence
//! - [`SMALL`] / [`LARGE`]: lengths shared by the benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use array1d::OneIndexedSequence;

/// Length of the small benchmark sequence.
pub const SMALL: usize = 64;

/// Length of the large benchmark sequence (a year of hourly timesteps).
pub const LARGE: usize = 8_760;

/// Build the sequence `[1.0, 2.0, ..., n as f64]`, so that `get(i) == i`.
pub fn ramp(n: usize) -> OneIndexedSequence<f64> {
    (1..=n).map(|i| i as f64).collect()
}

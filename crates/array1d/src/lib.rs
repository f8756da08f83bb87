//! One-indexed, strongly-typed sequences for ported simulation code.
//!
//! Engineering-simulation languages address arrays from `1`. Code ported
//! from them into Rust tends to pick up off-by-one shifts wherever an index
//! crosses the boundary between the two conventions. This crate provides
//! [`OneIndexedSequence<T>`], a `Vec`-backed container that keeps the
//! one-based convention at its API:
//!
//! - `get(1)` is the first element and `get(len)` the last; `get(0)` is an
//!   error, never an alias.
//! - Negative indices count from the end (`-1` is the last element).
//! - [`slice`](OneIndexedSequence::slice) is inclusive of both bounds.
//! - Values are converted to `T` on the way in through [`Coerce<T>`].
//! - The legacy *allocated* marker and its lifecycle operations
//!   (`allocate`, `dimension`, `resize`, `assign`, `deallocate`) are
//!   mirrored in [`lifecycle`].
//!
//! # Architecture
//!
//! ```text
//! OneIndexedSequence<T> (sequence)
//! ├── Vec<T> storage, zero-based
//! ├── index::translate / resolve → logical index to storage offset
//! ├── index::slice_offsets       → inclusive, clamped slice plans
//! ├── coerce::Coerce<T>          → fallible value conversion
//! └── lifecycle                  → allocated marker + sizing operations
//! ```
//!
//! Every operation either succeeds or returns a [`SequenceError`] with the
//! sequence unchanged.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coerce;
pub mod error;
pub mod index;
pub mod lifecycle;
pub mod sequence;

// Public re-exports for the primary API surface.
pub use coerce::Coerce;
pub use error::SequenceError;
pub use sequence::OneIndexedSequence;

//! Error types for one-indexed sequences.
//!
//! Every fallible operation on [`OneIndexedSequence`](crate::OneIndexedSequence)
//! returns a [`SequenceError`]. The container is left untouched whenever one
//! is returned.

use std::error::Error;
use std::fmt;

/// Errors from indexing, slicing, and coercion on a one-indexed sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// Logical index 0 was used. One-indexed sequences have no element 0.
    InvalidIndex,
    /// The resolved position lies outside the current bounds.
    IndexOutOfRange {
        /// The logical index supplied by the caller.
        index: isize,
        /// Length of the sequence at the time of the access.
        len: usize,
    },
    /// A value could not be converted to the sequence's element type.
    TypeCoercionError {
        /// Type name of the supplied value.
        from: &'static str,
        /// Type name of the element type.
        to: &'static str,
        /// Message from the failed conversion.
        reason: String,
    },
    /// A slice was requested with a step of zero.
    ZeroStep,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex => {
                write!(f, "one-indexed sequences have no index 0")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::TypeCoercionError { from, to, reason } => {
                write!(f, "cannot coerce {from} to {to}: {reason}")
            }
            Self::ZeroStep => write!(f, "slice step cannot be zero"),
        }
    }
}

impl Error for SequenceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_index_and_len() {
        let err = SequenceError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for length 3");
    }

    #[test]
    fn display_coercion_names_both_types() {
        let err = SequenceError::TypeCoercionError {
            from: "i64",
            to: "u8",
            reason: "out of range integral type conversion attempted".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("i64"));
        assert!(msg.contains("u8"));
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn Error> = Box::new(SequenceError::InvalidIndex);
        assert!(err.source().is_none());
    }
}

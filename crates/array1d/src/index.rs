//! Translation from one-based logical indices to zero-based storage offsets.
//!
//! Callers speak in logical indices (`1` is the first element). Storage is a
//! plain `Vec`, so every access goes through [`translate`] and then through
//! one of the bounds-checking resolvers in this module.
//!
//! Negative logical indices are not shifted. A negative offset `k` is later
//! resolved to `len + k`, so `-1` names the last element, `-2` the one before
//! it, and so on.

use crate::error::SequenceError;

/// Translate a logical index into an internal offset.
///
/// - `0` fails with [`SequenceError::InvalidIndex`].
/// - Positive `i` maps to `i - 1`.
/// - Negative `i` is returned unchanged.
///
/// No bounds checking is performed.
///
/// ```
/// use array1d::index::translate;
///
/// assert_eq!(translate(1), Ok(0));
/// assert_eq!(translate(10), Ok(9));
/// assert_eq!(translate(-1), Ok(-1));
/// assert!(translate(0).is_err());
/// ```
pub fn translate(logical: isize) -> Result<isize, SequenceError> {
    match logical {
        0 => Err(SequenceError::InvalidIndex),
        i if i > 0 => Ok(i - 1),
        i => Ok(i),
    }
}

/// Resolve a logical index to an in-bounds storage offset for a sequence of
/// length `len`.
///
/// Used by element reads, writes and deletes. The returned offset is always
/// `< len`.
pub fn resolve(logical: isize, len: usize) -> Result<usize, SequenceError> {
    let offset = translate(logical)?;
    let out_of_range = SequenceError::IndexOutOfRange {
        index: logical,
        len,
    };
    if offset >= 0 {
        let offset = offset as usize;
        if offset < len {
            Ok(offset)
        } else {
            Err(out_of_range)
        }
    } else {
        from_end(offset, len).ok_or(out_of_range)
    }
}

/// Resolve a logical index to an insertion offset for a sequence of length
/// `len`.
///
/// Like [`resolve`], but the position one past the end (`len + 1` in logical
/// terms) is accepted, so the returned offset is `<= len`.
pub fn resolve_insert(logical: isize, len: usize) -> Result<usize, SequenceError> {
    let offset = translate(logical)?;
    let out_of_range = SequenceError::IndexOutOfRange {
        index: logical,
        len,
    };
    if offset >= 0 {
        let offset = offset as usize;
        if offset <= len {
            Ok(offset)
        } else {
            Err(out_of_range)
        }
    } else {
        from_end(offset, len).ok_or(out_of_range)
    }
}

/// `len + offset` for a negative offset, or `None` if that is still negative.
fn from_end(offset: isize, len: usize) -> Option<usize> {
    len.checked_sub(offset.unsigned_abs())
}

/// Saturating `len as isize`. Only zero-sized element types can exceed it.
fn signed_len(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}

/// Storage offsets selected by an inclusive slice, in visiting order.
///
/// Built by [`slice_offsets`]. Yields zero-based offsets that are always in
/// bounds for the length it was planned against.
#[derive(Clone, Debug)]
pub struct SliceOffsets {
    next: isize,
    step: isize,
    remaining: usize,
}

impl Iterator for SliceOffsets {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next += self.step;
        }
        Some(current as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SliceOffsets {}

/// Plan an inclusive slice `start..=stop` with the given `step` over a
/// sequence of length `len`.
///
/// Bounds are logical indices. Negative bounds count from the end (`-1` is
/// the last element). Bounds outside the sequence are clamped rather than
/// rejected, so the plan may be empty. A positive `step` walks forward from
/// `start`, a negative one walks backward; either way `stop` is included when
/// the walk lands on it.
///
/// Fails with [`SequenceError::ZeroStep`] if `step == 0` and with
/// [`SequenceError::InvalidIndex`] if `start == 0`.
pub fn slice_offsets(
    start: isize,
    stop: isize,
    step: isize,
    len: usize,
) -> Result<SliceOffsets, SequenceError> {
    if step == 0 {
        return Err(SequenceError::ZeroStep);
    }
    if start == 0 {
        return Err(SequenceError::InvalidIndex);
    }
    let n = signed_len(len);
    let normalize = |bound: isize| if bound < 0 { bound + n + 1 } else { bound };
    let (start, stop) = (normalize(start), normalize(stop));

    let empty = SliceOffsets {
        next: 0,
        step,
        remaining: 0,
    };
    let stride = step.unsigned_abs();

    if step > 0 {
        let lo = start.max(1);
        let hi = stop.min(n);
        if lo > hi {
            return Ok(empty);
        }
        Ok(SliceOffsets {
            next: lo - 1,
            step,
            remaining: (hi - lo) as usize / stride + 1,
        })
    } else {
        let hi = start.min(n);
        let lo = stop.max(1);
        if hi < lo {
            return Ok(empty);
        }
        Ok(SliceOffsets {
            next: hi - 1,
            step,
            remaining: (hi - lo) as usize / stride + 1,
        })
    }
}

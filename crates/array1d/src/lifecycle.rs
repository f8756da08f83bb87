//! Legacy allocation lifecycle.
//!
//! Legacy simulation arrays must be explicitly sized before use. A sequence
//! remembers whether that happened with its *allocated* marker, which is
//! separate from whether it currently holds elements:
//!
//! | Operation | Marker | Elements |
//! |---|---|---|
//! | [`allocate`](OneIndexedSequence::allocate) | set | `n` defaults |
//! | [`dimension`](OneIndexedSequence::dimension) | set | `n` copies of a value |
//! | [`resize`](OneIndexedSequence::resize) | set | padded with defaults or truncated |
//! | [`resize_with_value`](OneIndexedSequence::resize_with_value) | set | padded with a value or truncated |
//! | [`assign`](OneIndexedSequence::assign) | unchanged | every element replaced |
//! | [`clear`](OneIndexedSequence::clear) / [`deallocate`](OneIndexedSequence::deallocate) | cleared | emptied |
//!
//! Each operation coerces its value before touching storage, so a coercion
//! failure leaves both the marker and the elements as they were.
//! [`resize_with_value`](OneIndexedSequence::resize_with_value) only needs
//! its value when it grows, and never fails otherwise.

use crate::coerce::Coerce;
use crate::error::SequenceError;
use crate::sequence::OneIndexedSequence;

impl<T> OneIndexedSequence<T> {
    /// Returns `true` if the sequence was sized by an allocation-style
    /// operation and currently holds at least one element.
    pub fn is_allocated(&self) -> bool {
        self.allocated && !self.elements.is_empty()
    }

    /// Empty the sequence and clear the allocated marker.
    pub fn clear(&mut self) {
        tracing::trace!(
            message = "deallocate",
            previous_len = self.elements.len()
        );
        self.allocated = false;
        self.elements.clear();
    }

    /// Alias for [`clear`](Self::clear).
    pub fn deallocate(&mut self) {
        self.clear();
    }
}

impl<T: Default> OneIndexedSequence<T> {
    /// Replace the contents with `n` default values and mark the sequence
    /// allocated.
    ///
    /// ```
    /// use array1d::OneIndexedSequence;
    ///
    /// let mut s: OneIndexedSequence<i32> = OneIndexedSequence::new();
    /// s.allocate(3);
    /// assert_eq!(s, [0, 0, 0]);
    /// assert!(s.is_allocated());
    ///
    /// s.deallocate();
    /// assert!(!s.is_allocated());
    /// assert!(s.is_empty());
    /// ```
    pub fn allocate(&mut self, n: usize) {
        tracing::trace!(
            message = "allocate",
            len = n,
            previous_len = self.elements.len()
        );
        self.elements = std::iter::repeat_with(T::default).take(n).collect();
        self.allocated = true;
    }

    /// Grow or shrink to exactly `n` elements and mark the sequence
    /// allocated.
    ///
    /// New slots are filled with `T::default()`. Shrinking keeps the first
    /// `n` elements untouched.
    pub fn resize(&mut self, n: usize) {
        tracing::trace!(
            message = "resize",
            len = n,
            previous_len = self.elements.len()
        );
        self.elements.resize_with(n, T::default);
        self.allocated = true;
    }
}

impl<T: Clone> OneIndexedSequence<T> {
    /// Replace the contents with `n` copies of `value` coerced to `T` and
    /// mark the sequence allocated.
    pub fn dimension<V: Coerce<T>>(&mut self, n: usize, value: V) -> Result<(), SequenceError> {
        let value = value.coerce()?;
        tracing::trace!(
            message = "dimension",
            len = n,
            previous_len = self.elements.len()
        );
        self.elements = vec![value; n];
        self.allocated = true;
        Ok(())
    }

    /// Grow or shrink to exactly `n` elements and mark the sequence
    /// allocated.
    ///
    /// New slots are filled with copies of `value` coerced to `T`. The value
    /// is only coerced when there are new slots to fill, so shrinking or
    /// keeping the length never fails.
    pub fn resize_with_value<V: Coerce<T>>(
        &mut self,
        n: usize,
        value: V,
    ) -> Result<(), SequenceError> {
        let previous_len = self.elements.len();
        if n > previous_len {
            let value = value.coerce()?;
            self.elements.resize(n, value);
        } else {
            self.elements.truncate(n);
        }
        tracing::trace!(message = "resize", len = n, previous_len);
        self.allocated = true;
        Ok(())
    }

    /// Overwrite every element with `value` coerced to `T`. The length and
    /// the allocated marker are unchanged.
    pub fn assign<V: Coerce<T>>(&mut self, value: V) -> Result<(), SequenceError> {
        let value = value.coerce()?;
        self.elements.fill(value);
        Ok(())
    }
}

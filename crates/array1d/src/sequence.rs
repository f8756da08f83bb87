//! The [`OneIndexedSequence`] container.

use std::fmt;

use crate::coerce::{coerce_all, Coerce};
use crate::error::SequenceError;
use crate::index::{resolve, resolve_insert, slice_offsets};

/// A resizable, strongly-typed sequence addressed with one-based indices.
///
/// Logical index `1` is the first element and `len()` the last. Index `0`
/// never names an element. Negative indices count from the end, so `-1` is
/// the last element.
///
/// Every value stored in the sequence is converted to `T` through
/// [`Coerce<T>`] on the way in. A value that fails to convert is rejected
/// with [`SequenceError::TypeCoercionError`] and the sequence is left as it
/// was.
///
/// Besides its elements the sequence carries the legacy *allocated* marker,
/// set by the allocation-style operations in [`lifecycle`](crate::lifecycle)
/// and reported by [`is_allocated`](Self::is_allocated).
///
/// # Examples
///
/// ```
/// use array1d::OneIndexedSequence;
///
/// let mut temps: OneIndexedSequence<f64> =
///     OneIndexedSequence::from_values([18.0f32, 19.5, 21.0]).unwrap();
///
/// assert_eq!(temps.get(1), Ok(&18.0));
/// assert_eq!(temps.get(3), Ok(&21.0));
/// assert!(temps.get(0).is_err());
///
/// temps.set(2, 20i32).unwrap();
/// assert_eq!(temps.slice(2, 3).unwrap(), [20.0, 21.0]);
/// ```
#[derive(Clone, Debug)]
pub struct OneIndexedSequence<T> {
    pub(crate) elements: Vec<T>,
    pub(crate) allocated: bool,
}

impl<T> OneIndexedSequence<T> {
    /// Create an empty, unallocated sequence.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            allocated: false,
        }
    }

    /// Create an empty, unallocated sequence with room for `capacity`
    /// elements before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            allocated: false,
        }
    }

    /// Create a sequence from initial values, coercing each to `T`.
    ///
    /// Order is preserved. The sequence is marked allocated if at least one
    /// value was supplied. Fails on the first value that cannot be coerced.
    pub fn from_values<V, I>(values: I) -> Result<Self, SequenceError>
    where
        I: IntoIterator<Item = V>,
        V: Coerce<T>,
    {
        Ok(Self::from_vec(coerce_all(values)?))
    }

    fn from_vec(elements: Vec<T>) -> Self {
        let allocated = !elements.is_empty();
        Self {
            elements,
            allocated,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Borrow the element at logical index `index`.
    pub fn get(&self, index: isize) -> Result<&T, SequenceError> {
        let offset = resolve(index, self.elements.len())?;
        Ok(&self.elements[offset])
    }

    /// Mutably borrow the element at logical index `index`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, SequenceError> {
        let offset = resolve(index, self.elements.len())?;
        Ok(&mut self.elements[offset])
    }

    /// The first element, if any. Same as `get(1)`.
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// The last element, if any. Same as `get(len)`.
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Replace the element at logical index `index` with `value` coerced to
    /// `T`, returning the previous element.
    pub fn set<V: Coerce<T>>(&mut self, index: isize, value: V) -> Result<T, SequenceError> {
        let offset = resolve(index, self.elements.len())?;
        let value = value.coerce()?;
        Ok(std::mem::replace(&mut self.elements[offset], value))
    }

    /// Remove and return the element at logical index `index`, shifting
    /// later elements down by one.
    pub fn delete(&mut self, index: isize) -> Result<T, SequenceError> {
        let offset = resolve(index, self.elements.len())?;
        Ok(self.elements.remove(offset))
    }

    /// Coerce `value` to `T` and push it onto the end.
    pub fn append<V: Coerce<T>>(&mut self, value: V) -> Result<(), SequenceError> {
        self.elements.push(value.coerce()?);
        Ok(())
    }

    /// Coerce `value` to `T` and insert it before logical index `index`.
    ///
    /// `index == len() + 1` appends. Negative indices count from the end, so
    /// `-1` inserts before the last element.
    pub fn insert<V: Coerce<T>>(&mut self, index: isize, value: V) -> Result<(), SequenceError> {
        let offset = resolve_insert(index, self.elements.len())?;
        let value = value.coerce()?;
        self.elements.insert(offset, value);
        Ok(())
    }

    /// Iterate over the elements in logical order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Iterate mutably over the elements in logical order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// The elements as a zero-based slice.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consume the sequence, returning its elements as a zero-based `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Clone> OneIndexedSequence<T> {
    /// Copy the elements from logical index `start` through `stop`
    /// inclusive into a new sequence, re-indexed from 1.
    ///
    /// Bounds outside the sequence are clamped. `start == 0` fails with
    /// [`SequenceError::InvalidIndex`].
    ///
    /// ```
    /// use array1d::OneIndexedSequence;
    ///
    /// let s: OneIndexedSequence<char> = "abcde".chars().collect();
    /// assert_eq!(s.slice(2, 4).unwrap(), ['b', 'c', 'd']);
    /// assert_eq!(s.slice(4, 99).unwrap(), ['d', 'e']);
    /// ```
    pub fn slice(&self, start: isize, stop: isize) -> Result<Self, SequenceError> {
        self.slice_step(start, stop, 1)
    }

    /// Like [`slice`](Self::slice), visiting every `step`-th element.
    ///
    /// A negative `step` walks backward from `start` down to `stop`. The
    /// element at `stop` is included whenever the walk lands on it. Fails
    /// with [`SequenceError::ZeroStep`] if `step == 0`.
    pub fn slice_step(
        &self,
        start: isize,
        stop: isize,
        step: isize,
    ) -> Result<Self, SequenceError> {
        let offsets = slice_offsets(start, stop, step, self.elements.len())?;
        let elements = offsets.map(|i| self.elements[i].clone()).collect();
        Ok(Self::from_vec(elements))
    }
}

impl<T> Default for OneIndexedSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for OneIndexedSequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T> FromIterator<T> for OneIndexedSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for OneIndexedSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OneIndexedSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut OneIndexedSequence<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter_mut()
    }
}

/// Renders the elements the way `Vec<T>` debug-prints them, e.g. `[1, 2, 3]`.
impl<T: fmt::Debug> fmt::Display for OneIndexedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.elements)
    }
}

// Equality is element-wise. Neither the element type nor the allocated
// marker takes part.

impl<T: PartialEq<U>, U> PartialEq<OneIndexedSequence<U>> for OneIndexedSequence<T> {
    fn eq(&self, other: &OneIndexedSequence<U>) -> bool {
        self.elements[..] == other.elements[..]
    }
}

impl<T: Eq> Eq for OneIndexedSequence<T> {}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for OneIndexedSequence<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.elements[..] == other[..]
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for OneIndexedSequence<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.elements[..] == *other
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for OneIndexedSequence<T> {
    fn eq(&self, other: &&[U]) -> bool {
        self.elements[..] == **other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for OneIndexedSequence<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.elements[..] == other[..]
    }
}

impl<T: PartialEq<U>, U> PartialEq<OneIndexedSequence<U>> for Vec<T> {
    fn eq(&self, other: &OneIndexedSequence<U>) -> bool {
        self[..] == other.elements[..]
    }
}

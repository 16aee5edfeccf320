//! The immutable side of the sequence seal protocol.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::RangeBounds;

use sealed_common::{Error, Result};

/// An immutable ordered sequence.
///
/// A `Sequence` is obtained by sealing a [`SequenceBuilder`](crate::SequenceBuilder)
/// and is the sole owner of its buffer. No accessor hands out mutable access.
/// `Sequence::default()` is a valid empty sequence.
///
/// Cloning performs a deep copy; the clone owns an independent buffer.
#[derive(Clone)]
pub struct Sequence<T> {
    values: Vec<T>,
}

/// Iterator over `(index, &element)` pairs of a [`Sequence`].
pub type Iter<'a, T> = std::iter::Enumerate<std::slice::Iter<'a, T>>;

impl<T> Sequence<T> {
    /// Wraps a buffer whose previous owner has already given it up.
    pub(crate) fn from_sealed(values: Vec<T>) -> Sequence<T> {
        Sequence { values }
    }

    /// Returns an empty `Sequence`.
    pub fn empty() -> Sequence<T> {
        Sequence { values: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`, exactly like raw slice indexing.
    #[inline]
    pub fn get(&self, index: usize) -> &T {
        match self.values.get(index) {
            Some(value) => value,
            None => out_of_range(index, self.values.len()),
        }
    }

    /// Returns the element at `index`, or an `IndexOutOfRange` error.
    pub fn try_get(&self, index: usize) -> Result<&T> {
        self.values
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.values.len()))
    }

    /// Returns the first element, or `None` if the sequence is empty.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.values.first()
    }

    /// Returns the last element, or `None` if the sequence is empty.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.values.last()
    }

    pub fn first_or_default(&self) -> T
    where
        T: Default + Clone,
    {
        self.first().cloned().unwrap_or_default()
    }

    pub fn last_or_default(&self) -> T
    where
        T: Default + Clone,
    {
        self.last().cloned().unwrap_or_default()
    }

    /// Returns a lazy iterator over `(index, &element)` pairs in storage order.
    ///
    /// The iterator can be dropped at any point to stop early, and a fresh one
    /// can be created as many times as needed.
    pub fn iter(&self) -> Iter<'_, T> {
        self.values.iter().enumerate()
    }

    /// Returns an iterator over the elements alone.
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Returns a borrowed view of a sub-range.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn slice<R>(&self, range: R) -> &[T]
    where
        R: RangeBounds<usize>,
    {
        use std::ops::Bound::*;
        let len = self.values.len();
        let start = match range.start_bound() {
            Included(&n) => Some(n),
            Excluded(&n) => n.checked_add(1),
            Unbounded => Some(0),
        };
        let end = match range.end_bound() {
            Included(&n) => n.checked_add(1),
            Excluded(&n) => Some(n),
            Unbounded => Some(len),
        };
        match (start, end) {
            (Some(start), Some(end)) if start <= end && end <= len => &self.values[start..end],
            _ => panic!(
                "slice ({:?}, {:?}) out of bounds for sequence of length {len}",
                range.start_bound(),
                range.end_bound()
            ),
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.values.contains(value)
    }

    /// Returns the index of the first element matching `predicate`.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.values.iter().position(predicate)
    }

    /// Returns the index of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.position(|v| v == value)
    }

    /// Copies the elements into a new, independently owned `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.clone()
    }

    /// Consumes the sequence and moves its buffer out.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn out_of_range(index: usize, len: usize) -> ! {
    panic!("index {index} out of range for sequence of length {len}")
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::empty()
    }
}

impl<T> std::ops::Index<usize> for Sequence<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sequence").field(&self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = (usize, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// By-value iteration yields the elements alone, moving them out of the buffer.
impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.values.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Sequence<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Sequence<T>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(crate::SequenceBuilder::from(values).into_sealed())
    }
}

use std::cmp::Ordering;

use sealed_common::{Error, Result};

use crate::{Sequence, SequenceBuilderConfig};

/// A write-only, append-oriented buffer used to create sealed [`Sequence`]s.
///
/// All mutating methods return `&mut Self`, so calls can be chained:
///
/// ```
/// use sealed_sequence::SequenceBuilder;
///
/// let mut builder = SequenceBuilder::new();
/// builder
///     .append([2, 1, 3])
///     .collect_from([6, 5, 4].into_iter().enumerate())
///     .sort_by(|a, b| a.cmp(b));
/// let seq = builder.seal();
/// assert_eq!(seq.as_slice(), &[1, 2, 3, 4, 5, 6]);
/// ```
#[derive(Clone)]
pub struct SequenceBuilder<T> {
    values: Vec<T>,
    shrink_on_seal: bool,
}

impl<T> Default for SequenceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SequenceBuilder<T> {
    /// Creates an empty builder. Nothing is allocated until the first append.
    pub fn new() -> SequenceBuilder<T> {
        SequenceBuilder {
            values: Vec::new(),
            shrink_on_seal: false,
        }
    }

    /// Creates an empty builder with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> SequenceBuilder<T> {
        SequenceBuilder {
            values: Vec::with_capacity(capacity),
            shrink_on_seal: false,
        }
    }

    /// Creates a builder holding `length` default-valued elements, with at least
    /// `capacity` reserved slots. A `capacity` below `length` is raised to `length`.
    pub fn with_len_and_capacity(length: usize, capacity: usize) -> SequenceBuilder<T>
    where
        T: Default,
    {
        let mut values = Vec::with_capacity(capacity.max(length));
        values.resize_with(length, T::default);
        SequenceBuilder {
            values,
            shrink_on_seal: false,
        }
    }

    /// Creates a builder from a validated configuration.
    ///
    /// The initial capacity is reserved fallibly, so an unreasonable capacity is
    /// reported as an error instead of aborting.
    pub fn with_config(config: &SequenceBuilderConfig) -> Result<SequenceBuilder<T>>
    where
        T: Default,
    {
        let mut builder = Self::new();
        config
            .validate()
            .and_then(|_| builder.try_reserve(config.capacity).map(|_| ()))
            .inspect_err(|e| {
                log::debug!("rejected sequence builder config {config:?}: {e}");
            })?;
        builder.values.resize_with(config.length, T::default);
        builder.shrink_on_seal = config.shrink_on_seal;
        Ok(builder)
    }

    /// Transfers the accumulated buffer into a new [`Sequence`].
    ///
    /// The builder is reset to the empty, unallocated state: its length and
    /// capacity both read zero afterwards, and further mutation starts a new
    /// buffer. Sealing again without intervening mutation yields an empty sequence.
    pub fn seal(&mut self) -> Sequence<T> {
        let mut values = std::mem::take(&mut self.values);
        if self.shrink_on_seal {
            values.shrink_to_fit();
        }
        log::trace!(
            "sealing sequence: len={}, capacity={}",
            values.len(),
            values.capacity()
        );
        Sequence::from_sealed(values)
    }

    /// Consumes the builder and seals its buffer.
    pub fn into_sealed(mut self) -> Sequence<T> {
        self.seal()
    }

    pub fn push(&mut self, elem: T) -> &mut Self {
        self.values.push(elem);
        self
    }

    /// Appends every element of `elems`, preserving order.
    pub fn append<I>(&mut self, elems: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.values.extend(elems);
        self
    }

    pub fn extend_from_slice(&mut self, elems: &[T]) -> &mut Self
    where
        T: Clone,
    {
        self.values.extend_from_slice(elems);
        self
    }

    /// Appends the values of an indexed producer in production order.
    ///
    /// The indices are ignored. If the number of elements is known up front it is
    /// usually worth calling [`reserve`](Self::reserve) first.
    pub fn collect_from<I>(&mut self, seq: I) -> &mut Self
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        self.values.extend(seq.into_iter().map(|(_, elem)| elem));
        self
    }

    /// Ensures there is capacity for another `additional` elements without
    /// reallocation.
    pub fn reserve(&mut self, additional: usize) -> &mut Self {
        self.values.reserve(additional);
        self
    }

    /// Fallible version of [`reserve`](Self::reserve).
    pub fn try_reserve(&mut self, additional: usize) -> Result<&mut Self> {
        self.values
            .try_reserve(additional)
            .map_err(|e| Error::reserve_failed(additional, e))?;
        Ok(self)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Returns the elements accumulated so far.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Stable sort with a total-order comparator. Equal elements keep their
    /// relative order.
    pub fn sort_by<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.values.sort_by(compare);
        self
    }

    pub fn sort_by_key<K, F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.values.sort_by_key(f);
        self
    }

    pub fn sort(&mut self) -> &mut Self
    where
        T: Ord,
    {
        self.values.sort();
        self
    }

    pub fn reverse(&mut self) -> &mut Self {
        self.values.reverse();
        self
    }

    /// Removes all elements, keeping the allocated capacity.
    pub fn clear(&mut self) -> &mut Self {
        self.values.clear();
        self
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.values.pop()
    }

    /// Removes and returns the first element. This shifts the remaining
    /// elements and is O(n).
    pub fn pop_front(&mut self) -> Option<T> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.remove(0))
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SequenceBuilder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceBuilder")
            .field("values", &self.values)
            .field("capacity", &self.values.capacity())
            .finish()
    }
}

impl<T> Extend<T> for SequenceBuilder<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

impl<T> FromIterator<T> for SequenceBuilder<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SequenceBuilder {
            values: iter.into_iter().collect(),
            shrink_on_seal: false,
        }
    }
}

/// Takes ownership of `values`; no copy is made.
impl<T> From<Vec<T>> for SequenceBuilder<T> {
    fn from(values: Vec<T>) -> Self {
        SequenceBuilder {
            values,
            shrink_on_seal: false,
        }
    }
}

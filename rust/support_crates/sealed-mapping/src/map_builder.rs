use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use ahash::RandomState;
use sealed_common::{Error, Result};

use crate::{MapBuilderConfig, Mapping};

/// A mutable key-value accumulator used to create sealed [`Mapping`]s.
///
/// Keys are unique; every insertion path overwrites an existing value for the
/// same key, so the last write wins.
#[derive(Clone)]
pub struct MapBuilder<K, V, S = RandomState> {
    entries: HashMap<K, V, S>,
    shrink_on_seal: bool,
}

impl<K, V> MapBuilder<K, V> {
    /// Creates an empty builder. Nothing is allocated until the first insert.
    pub fn new() -> MapBuilder<K, V> {
        Self::with_hasher(RandomState::new())
    }

    pub fn with_capacity(capacity: usize) -> MapBuilder<K, V> {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }

    /// Creates a builder from a validated configuration.
    ///
    /// The initial table is reserved fallibly, so an unreasonable capacity is
    /// reported as an error instead of aborting.
    pub fn with_config(config: &MapBuilderConfig) -> Result<MapBuilder<K, V>>
    where
        K: Eq + Hash,
    {
        let mut builder = Self::new();
        config
            .validate()
            .and_then(|_| builder.try_reserve(config.capacity).map(|_| ()))
            .inspect_err(|e| {
                log::debug!("rejected map builder config {config:?}: {e}");
            })?;
        builder.shrink_on_seal = config.shrink_on_seal;
        Ok(builder)
    }
}

impl<K, V> Default for MapBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> MapBuilder<K, V, S> {
    pub fn with_hasher(hash_builder: S) -> MapBuilder<K, V, S> {
        MapBuilder {
            entries: HashMap::with_hasher(hash_builder),
            shrink_on_seal: false,
        }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> MapBuilder<K, V, S> {
        MapBuilder {
            entries: HashMap::with_capacity_and_hasher(capacity, hash_builder),
            shrink_on_seal: false,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Consumes the builder and seals its table.
    pub fn into_sealed(self) -> Mapping<K, V, S>
    where
        K: Eq + Hash,
        S: BuildHasher,
    {
        let mut entries = self.entries;
        if self.shrink_on_seal {
            entries.shrink_to_fit();
        }
        log::trace!(
            "sealing mapping: len={}, capacity={}",
            entries.len(),
            entries.capacity()
        );
        Mapping::from_sealed(entries)
    }
}

impl<K, V, S> MapBuilder<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Transfers the accumulated table into a new [`Mapping`].
    ///
    /// The builder keeps its hasher but is left with a fresh, unallocated table,
    /// so a second seal without intervening mutation yields an empty mapping.
    pub fn seal(&mut self) -> Mapping<K, V, S>
    where
        S: Clone,
    {
        let fresh = HashMap::with_hasher(self.entries.hasher().clone());
        let entries = std::mem::replace(&mut self.entries, fresh);
        MapBuilder {
            entries,
            shrink_on_seal: self.shrink_on_seal,
        }
        .into_sealed()
    }

    /// Inserts or overwrites the value for `key`.
    pub fn put(&mut self, key: K, value: V) -> &mut Self {
        self.entries.insert(key, value);
        self
    }

    /// Copies every entry of a borrowed source, overwriting existing keys.
    ///
    /// Accepts anything that iterates `(&K, &V)`, such as `&HashMap<K, V>` or
    /// `&Mapping<K, V>`. Source iteration order does not matter.
    pub fn copy_from<'a, I>(&mut self, src: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'a K, &'a V)>,
        K: Clone + 'a,
        V: Clone + 'a,
    {
        self.entries
            .extend(src.into_iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Inserts every pair produced by `seq`, in production order.
    pub fn collect_from<I>(&mut self, seq: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.entries.extend(seq);
        self
    }

    pub fn reserve(&mut self, additional: usize) -> &mut Self {
        self.entries.reserve(additional);
        self
    }

    pub fn try_reserve(&mut self, additional: usize) -> Result<&mut Self> {
        self.entries
            .try_reserve(additional)
            .map_err(|e| Error::reserve_failed(additional, e))?;
        Ok(self)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Removes `key` from the pending table. Sealed mappings cannot be changed.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key)
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug, S> std::fmt::Debug for MapBuilder<K, V, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapBuilder")
            .field("entries", &self.entries)
            .finish()
    }
}

impl<K, V, S> Extend<(K, V)> for MapBuilder<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K, V, S> FromIterator<(K, V)> for MapBuilder<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MapBuilder {
            entries: iter.into_iter().collect(),
            shrink_on_seal: false,
        }
    }
}

/// Takes ownership of `entries`; no copy is made.
impl<K, V, S> From<HashMap<K, V, S>> for MapBuilder<K, V, S> {
    fn from(entries: HashMap<K, V, S>) -> Self {
        MapBuilder {
            entries,
            shrink_on_seal: false,
        }
    }
}

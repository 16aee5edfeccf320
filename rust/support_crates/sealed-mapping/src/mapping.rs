use std::borrow::Borrow;
use std::collections::{HashMap, hash_map};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use ahash::RandomState;

/// An immutable associative view with unique keys.
///
/// Obtained by sealing a [`MapBuilder`](crate::MapBuilder); the mapping is the
/// sole owner of its table. Iteration order is unspecified and may differ
/// between mappings holding the same entries.
///
/// Missing keys are never an error: lookups return `Option` or a caller-supplied
/// default.
#[derive(Clone)]
pub struct Mapping<K, V, S = RandomState> {
    entries: HashMap<K, V, S>,
}

impl<K, V, S> Mapping<K, V, S> {
    /// Wraps a table whose previous owner has already given it up.
    pub(crate) fn from_sealed(entries: HashMap<K, V, S>) -> Mapping<K, V, S> {
        Mapping { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a lazy iterator over `(&key, &value)` pairs in unspecified order.
    ///
    /// Dropping the iterator stops the traversal.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.entries.keys()
    }

    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Consumes the mapping and moves its table out.
    pub fn into_hash_map(self) -> HashMap<K, V, S> {
        self.entries
    }
}

impl<K, V, S> Mapping<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns the value for `key`, or `default` when the key is absent.
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).unwrap_or(default)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.contains(key)
    }
}

impl<K, V, S: Default> Default for Mapping<K, V, S> {
    fn default() -> Self {
        Mapping {
            entries: HashMap::with_hasher(S::default()),
        }
    }
}

impl<K, Q, V, S> std::ops::Index<&Q> for Mapping<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present, like `HashMap` indexing.
    fn index(&self, key: &Q) -> &V {
        self.entries.get(key).expect("key not present in mapping")
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for Mapping<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Mapping").field(&self.entries).finish()
    }
}

impl<K, V, S> PartialEq for Mapping<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V, S> Eq for Mapping<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<'a, K, V, S> IntoIterator for &'a Mapping<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, S> IntoIterator for Mapping<K, V, S> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(feature = "serde")]
impl<K, V, S> serde::Serialize for Mapping<K, V, S>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        serializer.collect_map(self.entries.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::Deserialize<'de> for Mapping<K, V, S>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Mapping<K, V, S>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = <HashMap<K, V, S> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(crate::MapBuilder::from(entries).into_sealed())
    }
}

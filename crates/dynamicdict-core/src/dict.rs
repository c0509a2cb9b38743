//! The dynamic dictionary container
//!
//! `DynamicDict` behaves like an insertion-ordered map in every respect but
//! one: an optional default factory is consulted when an absent key is
//! accessed through [`DynamicDict::resolve`]. The factory is called with
//! the key, the produced value is stored under it, and the stored value is
//! returned. Present keys never reach the factory.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::ops::BitOr;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use dynamicdict_errors::{DictError, DictResult};

use crate::factory::Factory;

/// Dictionary that creates values for missing keys in terms of the key.
///
/// Entries keep insertion order. The factory participates in derivation
/// only; it is ignored by equality and excluded from serialization.
#[derive(Clone)]
pub struct DynamicDict<K, V> {
    /// Factory for values of missing keys, called from `resolve`
    factory: Option<Factory<K, V>>,
    /// Stored entries in insertion order
    entries: IndexMap<K, V>,
}

impl<K, V> DynamicDict<K, V> {
    /// Create an empty dictionary with no factory
    pub fn new() -> Self {
        Self {
            factory: None,
            entries: IndexMap::new(),
        }
    }

    /// Create an empty dictionary with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            factory: None,
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Create an empty dictionary with a default factory
    pub fn with_factory(factory: Factory<K, V>) -> Self {
        Self {
            factory: Some(factory),
            entries: IndexMap::new(),
        }
    }

    /// Get the default factory, if one is configured
    pub fn factory(&self) -> Option<&Factory<K, V>> {
        self.factory.as_ref()
    }

    /// Set or replace the default factory
    pub fn set_factory(&mut self, factory: Factory<K, V>) {
        self.factory = Some(factory);
    }

    /// Remove and return the default factory
    pub fn take_factory(&mut self) -> Option<Factory<K, V>> {
        self.factory.take()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries; the factory is kept
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    /// Iterate over entries with mutable values
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&K, &mut V)> {
        self.entries.iter_mut()
    }

    /// Iterate over keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Iterate over values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    /// Iterate over mutable values in insertion order
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.values_mut()
    }

    /// View the entries as a plain ordered map
    pub fn as_map(&self) -> &IndexMap<K, V> {
        &self.entries
    }

    /// Consume the dictionary, returning its entries and dropping the factory
    pub fn into_entries(self) -> IndexMap<K, V> {
        self.entries
    }
}

impl<K, V> DynamicDict<K, V>
where
    K: Hash + Eq,
{
    /// Create a dictionary with a factory and initial entries
    pub fn with_factory_and_entries(
        factory: Factory<K, V>,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Self {
            factory: Some(factory),
            entries: entries.into_iter().collect(),
        }
    }

    /// Get a stored value. Never invokes the factory.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Get a mutable reference to a stored value. Never invokes the factory.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_mut(key)
    }

    /// Check whether a key is stored. Never invokes the factory.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Insert a value, returning the displaced value if the key was present.
    ///
    /// Re-inserting an existing key keeps its original position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Remove a key, preserving the relative order of the remaining entries
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.shift_remove(key)
    }

    /// Look up a key, deriving and storing its value if absent.
    ///
    /// A present key is returned as-is. For an absent key the default
    /// factory is called with the key, the produced value is stored, and a
    /// reference to the stored value is returned. Without a factory an
    /// absent key is an error carrying the key's rendering; a factory
    /// failure propagates and stores nothing.
    pub fn resolve(&mut self, key: K) -> DictResult<&V>
    where
        K: fmt::Debug,
    {
        self.resolve_mut(key).map(|value| &*value)
    }

    /// Mutable variant of [`resolve`](Self::resolve)
    pub fn resolve_mut(&mut self, key: K) -> DictResult<&mut V>
    where
        K: fmt::Debug,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let Some(factory) = &self.factory else {
                    return Err(DictError::key_not_found(format!("{:?}", entry.key())));
                };
                log::trace!(
                    "deriving value for missing key {:?} via factory `{}`",
                    entry.key(),
                    factory.name()
                );
                let value = factory.produce(entry.key())?;
                Ok(entry.insert(value))
            }
        }
    }
}

impl<K, V> DynamicDict<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Merged copy: this dictionary's entries updated with `other`'s.
    ///
    /// The receiver's factory, or its absence, carries into the result.
    /// Overlapping keys take `other`'s value but keep their original
    /// position. Neither operand is mutated.
    pub fn merged(&self, other: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut out = self.clone();
        out.entries.extend(other);
        out
    }
}

impl<K, V> Default for DynamicDict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for DynamicDict<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.factory {
            Some(factory) => write!(f, "dynamicdict({}, {:?})", factory.name(), self.entries),
            None => write!(f, "dynamicdict(None, {:?})", self.entries),
        }
    }
}

impl<K, V> PartialEq for DynamicDict<K, V>
where
    K: Hash + Eq,
    V: PartialEq,
{
    /// Entries only; the factory does not participate. Order-insensitive.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V> Eq for DynamicDict<K, V>
where
    K: Hash + Eq,
    V: Eq,
{
}

impl<K, V> PartialEq<IndexMap<K, V>> for DynamicDict<K, V>
where
    K: Hash + Eq,
    V: PartialEq,
{
    fn eq(&self, other: &IndexMap<K, V>) -> bool {
        self.entries == *other
    }
}

impl<K, V> FromIterator<(K, V)> for DynamicDict<K, V>
where
    K: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            factory: None,
            entries: IndexMap::from_iter(iter),
        }
    }
}

impl<K, V> Extend<(K, V)> for DynamicDict<K, V>
where
    K: Hash + Eq,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K, V> IntoIterator for DynamicDict<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a DynamicDict<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut DynamicDict<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = indexmap::map::IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}

impl<K, V> BitOr for &DynamicDict<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    type Output = DynamicDict<K, V>;

    /// Merge, keeping the left operand's factory
    fn bitor(self, rhs: &DynamicDict<K, V>) -> DynamicDict<K, V> {
        self.merged(rhs.entries.iter().map(|(k, v)| (k.clone(), v.clone())))
    }
}

impl<K, V> BitOr<&IndexMap<K, V>> for &DynamicDict<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    type Output = DynamicDict<K, V>;

    fn bitor(self, rhs: &IndexMap<K, V>) -> DynamicDict<K, V> {
        self.merged(rhs.iter().map(|(k, v)| (k.clone(), v.clone())))
    }
}

impl<K, V> BitOr for DynamicDict<K, V>
where
    K: Hash + Eq,
{
    type Output = DynamicDict<K, V>;

    fn bitor(mut self, rhs: DynamicDict<K, V>) -> DynamicDict<K, V> {
        self.entries.extend(rhs.entries);
        self
    }
}

// Serialization captures the entry state only. Factories are code, not
// data; a deserialized dictionary has no factory until one is re-attached
// with `set_factory`.

impl<K, V> Serialize for DynamicDict<K, V>
where
    K: Serialize + Hash + Eq,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de, K, V> Deserialize<'de> for DynamicDict<K, V>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = IndexMap::deserialize(deserializer)?;
        Ok(Self {
            factory: None,
            entries,
        })
    }
}

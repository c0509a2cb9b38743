//! Thread-safe shared handle to a dynamic dictionary
//!
//! A dynamic dictionary often serves as a lazily-populated lookup table
//! shared between threads. `SharedDict` makes that safe: a cloneable
//! handle around `Arc<RwLock<...>>` whose operations take the lock for the
//! duration of one call and hand back owned values.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;

use dynamicdict_errors::DictResult;

use crate::dict::DynamicDict;
use crate::factory::Factory;

/// Cloneable, thread-safe handle to a [`DynamicDict`].
///
/// All clones share one dictionary. Readers proceed concurrently;
/// `resolve` and the mutating operations take the write lock.
#[derive(Clone)]
pub struct SharedDict<K, V> {
    inner: Arc<RwLock<DynamicDict<K, V>>>,
}

impl<K, V> SharedDict<K, V> {
    /// Create an empty shared dictionary with no factory
    pub fn new() -> Self {
        Self::from_dict(DynamicDict::new())
    }

    /// Create an empty shared dictionary with a default factory
    pub fn with_factory(factory: Factory<K, V>) -> Self {
        Self::from_dict(DynamicDict::with_factory(factory))
    }

    /// Wrap an existing dictionary in a shared handle
    pub fn from_dict(dict: DynamicDict<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dict)),
        }
    }

    /// Set or replace the default factory
    pub fn set_factory(&self, factory: Factory<K, V>) {
        self.inner.write().set_factory(factory);
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Remove all entries; the factory is kept
    pub fn clear(&self) {
        self.inner.write().clear();
    }
}

impl<K, V> SharedDict<K, V>
where
    K: Hash + Eq,
{
    /// Insert a value, returning the displaced value if the key was present
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.write().insert(key, value)
    }

    /// Remove a key, preserving the relative order of the remaining entries
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.write().remove(key)
    }

    /// Check whether a key is stored. Never invokes the factory.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().contains_key(key)
    }
}

impl<K, V> SharedDict<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    /// Get a copy of a stored value. Never invokes the factory.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read().get(key).cloned()
    }

    /// Look up a key, deriving and storing its value if absent.
    ///
    /// Returns a copy of the stored value; the lock is released before the
    /// call returns. The write lock is held for the whole derivation, so
    /// concurrent resolvers of the same key observe a single stored value.
    pub fn resolve(&self, key: K) -> DictResult<V>
    where
        K: fmt::Debug,
    {
        self.inner.write().resolve(key).map(|value| value.clone())
    }
}

impl<K, V> SharedDict<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Copy out the current dictionary state, factory included
    pub fn snapshot(&self) -> DynamicDict<K, V> {
        self.inner.read().clone()
    }
}

impl<K, V> Default for SharedDict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for SharedDict<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedDict").field(&*self.inner.read()).finish()
    }
}

//! Default factory abstraction
//!
//! The factory is the callable half of a dynamic dictionary: a function of
//! the missing key that produces the value to store for it. Factories carry
//! a name so that dictionary reprs have something readable to show for the
//! callable.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use dynamicdict_errors::DictResult;

/// Type alias for factory implementations
pub type FactoryFn<K, V> = Arc<dyn Fn(&K) -> DictResult<V> + Send + Sync>;

/// A named default factory called with a missing key to produce its value.
///
/// Cloning a factory clones the handle, not the function; a dictionary and
/// its shallow copies share one underlying factory.
pub struct Factory<K, V> {
    name: Cow<'static, str>,
    func: FactoryFn<K, V>,
}

impl<K, V> Factory<K, V> {
    /// Create a factory from an infallible function of the key
    pub fn new<F>(name: impl Into<Cow<'static, str>>, func: F) -> Self
    where
        F: Fn(&K) -> V + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(move |key| Ok(func(key))),
        }
    }

    /// Create a factory from a fallible function of the key.
    ///
    /// A factory error propagates out of `resolve` and nothing is stored.
    pub fn try_new<F>(name: impl Into<Cow<'static, str>>, func: F) -> Self
    where
        F: Fn(&K) -> DictResult<V> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Get the factory name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Produce the value for a missing key
    pub fn produce(&self, key: &K) -> DictResult<V> {
        (self.func)(key)
    }
}

impl<K, V> Clone for Factory<K, V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            func: Arc::clone(&self.func),
        }
    }
}

impl<K, V> fmt::Debug for Factory<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Factory").field(&self.name).finish()
    }
}

impl<K, V> fmt::Display for Factory<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

//! Compute-once cache.
//!
//! Values are computed outside the internal borrow so a supplier may itself
//! consult the cache. When two computations race for the same key the value
//! stored first wins.

use crate::CacheError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

pub struct Cache<K, V> {
    entries: RefCell<HashMap<K, V>>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + fmt::Debug,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Look up a value that must already be cached.
    pub fn get(&self, key: &K) -> Result<V, CacheError> {
        self.entries
            .borrow()
            .get(key)
            .cloned()
            .ok_or_else(|| CacheError::Missing(format!("{:?}", key)))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Return the cached value for `key`, computing it on first use.
    pub fn get_or_insert_with(&self, key: K, supplier: impl FnOnce() -> V) -> V {
        if let Some(value) = self.entries.borrow().get(&key) {
            return value.clone();
        }
        let value = supplier();
        self.entries
            .borrow_mut()
            .entry(key)
            .or_insert(value)
            .clone()
    }

    /// Like [`Cache::get_or_insert_with`], caching only successful results.
    pub fn try_get_or_insert_with<E>(
        &self,
        key: K,
        supplier: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(value) = self.entries.borrow().get(&key) {
            return Ok(value.clone());
        }
        let value = supplier()?;
        Ok(self
            .entries
            .borrow_mut()
            .entry(key)
            .or_insert(value)
            .clone())
    }
}

impl<K, V> Default for Cache<K, V>
where
    K: Eq + Hash + fmt::Debug,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Implementation of the keyed store.
//!
//! Each bucket is a short vector of `(normalized key, value)` pairs scanned
//! linearly on lookup.

use std::borrow::Cow;

use crate::data_structures::keyed_store::config::KeyedStoreConfig;
use crate::data_structures::keyed_store::error::{KeyedStoreError, Result};
use crate::data_structures::keyed_store::hash::bucket_index;

/// A fixed-bucket chaining hash table with case-insensitive string keys.
///
/// # Type Parameters
///
/// * `V` - The value type.
#[derive(Debug)]
pub struct KeyedStore<V> {
    /// Chaining buckets, never resized
    buckets: Vec<Vec<(String, V)>>,

    /// The configuration for the table
    config: KeyedStoreConfig,

    /// Current number of entries
    item_count: usize,
}

impl<V> KeyedStore<V> {
    /// Creates a new empty store with default configuration.
    pub fn new() -> Self {
        Self::with_config(KeyedStoreConfig::default())
    }

    /// Creates a new empty store with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the store.
    pub fn with_config(config: KeyedStoreConfig) -> Self {
        let bucket_count = config.bucket_count.max(1);
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Vec::new);
        Self {
            buckets,
            config,
            item_count: 0,
        }
    }

    fn normalize<'a>(&self, key: &'a str) -> Cow<'a, str> {
        if self.config.case_sensitive {
            Cow::Borrowed(key)
        } else {
            Cow::Owned(key.to_lowercase())
        }
    }

    /// Returns the number of entries in the store.
    pub fn len(&self) -> usize {
        self.item_count
    }

    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Returns the number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Associates `value` with `key`.
    ///
    /// An existing entry for the same normalized key is overwritten in place;
    /// a new key is appended to its bucket chain.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the key was new, `Ok(false)` if an entry was overwritten,
    /// `Err(KeyedStoreError::EmptyKey)` for an empty key.
    pub fn set<K>(&mut self, key: K, value: V) -> Result<bool>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(KeyedStoreError::EmptyKey);
        }

        let normalized = self.normalize(key).into_owned();
        let index = bucket_index(&normalized, self.buckets.len());
        let bucket = &mut self.buckets[index];

        if let Some(entry) = bucket.iter_mut().find(|(k, _)| *k == normalized) {
            entry.1 = value;
            return Ok(false);
        }

        bucket.push((normalized, value));
        self.item_count += 1;
        Ok(true)
    }

    /// Gets the value associated with `key`, if any.
    pub fn get<K>(&self, key: K) -> Option<&V>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return None;
        }

        let normalized = self.normalize(key);
        let index = bucket_index(&normalized, self.buckets.len());
        self.buckets[index]
            .iter()
            .find(|(k, _)| *k == normalized)
            .map(|(_, v)| v)
    }

    /// Checks if the key exists in the store.
    pub fn contains_key<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.get(key).is_some()
    }

    /// Iterates over all `(normalized key, value)` pairs in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Length of the longest bucket chain.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl<V> Default for KeyedStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

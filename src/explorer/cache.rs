// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bounded memo of search results.

use std::collections::VecDeque;
use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::Mutex;

use crate::catalog::Destination;

type QueryKey = (String, usize);

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<QueryKey, Vec<Arc<Destination>>>,
    order: VecDeque<QueryKey>,
}

/// Search results keyed by normalized query and limit. When full, the oldest
/// insertion is evicted. A capacity of zero disables caching.
#[derive(Debug)]
pub struct QueryCache {
    capacity: usize,
    state: Mutex<CacheState>,
}

impl QueryCache {
    /// Creates a cache holding at most `capacity` queries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Cached results for a query, if present.
    pub fn get(&self, query: &str, limit: usize) -> Option<Vec<Arc<Destination>>> {
        if self.capacity == 0 {
            return None;
        }
        let state = self.state.lock();
        state.entries.get(&(query.to_string(), limit)).cloned()
    }

    /// Stores results for a query.
    pub fn insert(&self, query: &str, limit: usize, results: Vec<Arc<Destination>>) {
        if self.capacity == 0 {
            return;
        }
        let key = (query.to_string(), limit);
        let mut state = self.state.lock();

        if state.entries.insert(key.clone(), results).is_some() {
            return;
        }
        state.order.push_back(key);

        while state.order.len() > self.capacity {
            if let Some(oldest) = state.order.pop_front() {
                state.entries.remove(&oldest);
            }
        }
    }

    /// Number of cached queries.
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached query.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.entries.clear();
        state.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let cache = QueryCache::new(2);
        assert!(cache.get("goa", 10).is_none());

        cache.insert("goa", 10, Vec::new());
        assert!(cache.get("goa", 10).is_some());
        assert!(cache.get("goa", 5).is_none());
    }

    #[test]
    fn test_oldest_evicted() {
        let cache = QueryCache::new(2);
        cache.insert("a", 1, Vec::new());
        cache.insert("b", 1, Vec::new());
        cache.insert("a", 1, Vec::new());
        cache.insert("c", 1, Vec::new());

        assert_eq!(cache.len(), 2);
        assert!(cache.get("a", 1).is_none());
        assert!(cache.get("b", 1).is_some());
        assert!(cache.get("c", 1).is_some());

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_zero_capacity_disables() {
        let cache = QueryCache::new(0);
        cache.insert("goa", 10, Vec::new());
        assert!(cache.is_empty());
        assert!(cache.get("goa", 10).is_none());
    }
}

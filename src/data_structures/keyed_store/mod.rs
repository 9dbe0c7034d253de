// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Keyed store for exact-name lookups.
//!
//! A fixed-size array of chaining buckets keyed by normalized names. The
//! table never resizes: it is sized once for a small, static catalog and
//! keeps expected O(1) lookups as long as the entry count stays well under
//! the bucket count.
//!
//! # Example
//!
//! ```
//! use yatra_lib::data_structures::keyed_store::KeyedStore;
//!
//! let mut store = KeyedStore::new();
//! assert!(store.set("Goa", 95).unwrap());
//! assert_eq!(store.get("GOA"), Some(&95));
//!
//! // Setting an existing key overwrites in place
//! assert!(!store.set("goa", 96).unwrap());
//! assert_eq!(store.get("Goa"), Some(&96));
//! assert_eq!(store.get("Agra"), None);
//! ```

mod config;
mod error;
mod hash;
mod table;

pub use config::KeyedStoreConfig;
pub use error::{KeyedStoreError, Result};
pub use table::KeyedStore;

// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration options for the keyed store.

/// Configuration for the keyed store.
#[derive(Debug, Clone)]
pub struct KeyedStoreConfig {
    /// Number of chaining buckets. The table never resizes, so this should
    /// comfortably exceed the expected entry count.
    pub bucket_count: usize,

    /// Whether keys are compared case-sensitively.
    pub case_sensitive: bool,
}

impl KeyedStoreConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of buckets.
    ///
    /// # Arguments
    ///
    /// * `bucket_count` - The number of buckets (at least 1).
    ///
    /// # Returns
    ///
    /// Self with the updated configuration.
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count.max(1);
        self
    }

    /// Sets whether keys are compared case-sensitively.
    pub fn with_case_sensitivity(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

impl Default for KeyedStoreConfig {
    fn default() -> Self {
        Self {
            bucket_count: 100,
            case_sensitive: false,
        }
    }
}

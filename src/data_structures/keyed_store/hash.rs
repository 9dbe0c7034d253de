// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bucket hashing for the keyed store.
//!
//! Keys are hashed with FNV-1a, which distributes short ASCII names well and
//! is cheap enough to run on every lookup.

use std::hash::Hasher;

use fnv::FnvHasher;

/// Computes the bucket index for an already-normalized key.
///
/// # Arguments
///
/// * `key` - The normalized key.
/// * `bucket_count` - The number of buckets (must be non-zero).
pub fn bucket_index(key: &str, bucket_count: usize) -> usize {
    let mut hasher = FnvHasher::default();
    hasher.write(key.as_bytes());
    (hasher.finish() % bucket_count as u64) as usize
}

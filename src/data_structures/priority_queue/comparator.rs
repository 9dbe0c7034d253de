// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Comparator strategies for the priority queue.
//!
//! A comparator is a three-way comparison `(a, b) -> Ordering`: `Less` means
//! `a` leaves the queue before `b`, `Greater` means after, and `Equal` leaves
//! their relative order unspecified.

use std::cmp::Ordering;

/// Boxed comparator owned by a queue.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Ascending order over `Ord` items (min-heap).
pub fn ascending<T: Ord + 'static>() -> Comparator<T> {
    Box::new(|a: &T, b: &T| a.cmp(b))
}

/// Descending order over `Ord` items (max-heap).
pub fn descending<T: Ord + 'static>() -> Comparator<T> {
    Box::new(|a: &T, b: &T| b.cmp(a))
}

/// Flips an existing comparator.
pub fn reverse<T: 'static>(inner: Comparator<T>) -> Comparator<T> {
    Box::new(move |a: &T, b: &T| inner(b, a))
}

/// Orders items by a partially ordered key, treating incomparable keys
/// (NaN) as equal.
pub fn by_partial_key<T, K, F>(key: F) -> Comparator<T>
where
    T: 'static,
    K: PartialOrd + 'static,
    F: Fn(&T) -> K + Send + Sync + 'static,
{
    Box::new(move |a: &T, b: &T| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal))
}

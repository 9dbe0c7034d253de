// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Merge sort and binary search.
//!
//! `merge_sort_by` is a top-down stable merge sort: items that compare equal
//! keep their original relative order, which the ranking code relies on for
//! deterministic popularity ties.

use std::cmp::Ordering;

/// Returns a stably sorted copy of `items` ordered by `compare`.
pub fn merge_sort_by<T, F>(items: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_slice(items, &mut compare)
}

/// Stably sorts by a derived key.
pub fn merge_sort_by_key<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    sort_slice(items, &mut |a: &T, b: &T| key(a).cmp(&key(b)))
}

fn sort_slice<T, F>(items: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = sort_slice(&items[..mid], compare);
    let right = sort_slice(&items[mid..], compare);
    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            // Ties go left to keep the sort stable
            (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };

        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}

/// Binary search over a slice sorted consistently with `compare`.
///
/// `compare` reports how a probed element relates to the target. Returns
/// the index of a matching element, or `None`.
pub fn binary_search_by<T, F>(items: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match compare(&items[mid]) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Some(mid),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_merge_sort_basic() {
        let sorted = merge_sort_by(&[5, 3, 9, 1, 3], |a, b| a.cmp(b));
        assert_eq!(sorted, vec![1, 3, 3, 5, 9]);
        assert!(merge_sort_by::<i32, _>(&[], |a, b| a.cmp(b)).is_empty());
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let items = [("Goa", 95), ("Agra", 98), ("Kochi", 95), ("Jaipur", 90), ("Hampi", 95)];
        let sorted = merge_sort_by(&items, |a, b| b.1.cmp(&a.1));
        let names: Vec<&str> = sorted.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["Agra", "Goa", "Kochi", "Hampi", "Jaipur"]);
    }

    #[test]
    fn test_sorted_and_reversed_inputs_agree() {
        let ascending: Vec<u32> = (0..40).collect();
        let descending: Vec<u32> = ascending.iter().rev().copied().collect();

        let a = merge_sort_by_key(&ascending, |v| std::cmp::Reverse(*v));
        let b = merge_sort_by_key(&descending, |v| std::cmp::Reverse(*v));
        assert_eq!(a, b);
        assert_eq!(a, descending);
    }

    #[test]
    fn test_binary_search() {
        let cities = ["agra", "delhi", "goa", "jaipur", "mumbai"];
        assert_eq!(binary_search_by(&cities, |c| c.cmp(&"goa")), Some(2));
        assert_eq!(binary_search_by(&cities, |c| c.cmp(&"agra")), Some(0));
        assert_eq!(binary_search_by(&cities, |c| c.cmp(&"mumbai")), Some(4));
        assert_eq!(binary_search_by(&cities, |c| c.cmp(&"pune")), None);
        assert_eq!(binary_search_by::<&str, _>(&[], |c| c.cmp(&"goa")), None);
    }

    proptest! {
        #[test]
        fn prop_merge_sort_matches_std_stable_sort(
            items in prop::collection::vec((0u8..10, any::<u16>()), 0..100)
        ) {
            let ours = merge_sort_by(&items, |a, b| a.0.cmp(&b.0));
            let mut expected = items.clone();
            expected.sort_by(|a, b| a.0.cmp(&b.0));
            prop_assert_eq!(ours, expected);
        }
    }
}

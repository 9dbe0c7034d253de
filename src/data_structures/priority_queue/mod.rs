// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Binary Heap Priority Queue
//!
//! An array-backed binary heap ordered by a caller-supplied comparator.
//! The item that compares least is always at the root, so the default
//! comparator yields a min-heap and a reversed one yields a max-heap.
//!
//! There is no decrease-key. Callers that need to lower a priority push a
//! new entry and discard the stale one when it surfaces (see the shortest
//! path search in `routing::graph`).

mod comparator;

use std::cmp::Ordering;
use std::fmt;

pub use comparator::{ascending, by_partial_key, descending, reverse, Comparator};

/// A binary heap keyed by an explicit comparator strategy.
///
/// # Type Parameters
///
/// * `T` - Type of items stored in the queue.
pub struct PriorityQueue<T> {
    /// Heap-ordered storage
    items: Vec<T>,

    /// Three-way comparison deciding dequeue order
    compare: Comparator<T>,
}

impl<T: Ord + 'static> PriorityQueue<T> {
    /// Creates a min-heap over the natural ordering of `T`.
    pub fn new() -> Self {
        Self::with_comparator(ascending())
    }

    /// Creates a max-heap over the natural ordering of `T`.
    pub fn max() -> Self {
        Self::with_comparator(descending())
    }
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue ordered by `compare`.
    ///
    /// # Arguments
    ///
    /// * `compare` - Three-way comparison; the least item is dequeued first.
    pub fn with_comparator(compare: Comparator<T>) -> Self {
        Self {
            items: Vec::new(),
            compare,
        }
    }

    /// Creates an empty queue from a closure comparator.
    pub fn by<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::with_comparator(Box::new(compare))
    }

    /// Returns the number of queued items.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Alias of [`PriorityQueue::size`].
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item that would be dequeued next.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Adds an item, sifting it up to restore the heap invariant.
    pub fn enqueue(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the root item.
    ///
    /// The root is swapped with the last item, the vector shrinks, and the new
    /// root sifts down.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let root = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        root
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over the queued items in heap (not priority) order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Drains the queue into a vector in dequeue order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(item) = self.dequeue() {
            sorted.push(item);
        }
        sorted
    }

    fn precedes(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.items[a], &self.items[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.precedes(index, parent) {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut best = index;

            if left < len && self.precedes(left, best) {
                best = left;
            }
            if right < len && self.precedes(right, best) {
                best = right;
            }
            if best == index {
                break;
            }
            self.items.swap(index, best);
            index = best;
        }
    }
}

impl<T: Ord + 'static> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl<T> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

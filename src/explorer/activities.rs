// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Activity ranking across the whole catalog.
//!
//! Every activity of every destination is scored once at build time and kept
//! in a max-priority queue. Reading the top entries drains the queue and puts
//! the drained entries back, so repeated reads see the same ranking.

use std::cmp::Ordering;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

use crate::catalog::Destination;
use crate::data_structures::PriorityQueue;

/// An activity with its ranking score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedActivity {
    /// Activity name
    pub name: String,
    /// Destination offering it
    pub destination: String,
    /// Destination popularity plus a bonus for early listing
    pub score: u32,
    #[serde(skip)]
    sequence: usize,
}

impl RankedActivity {
    /// Ranking order: higher score first, then earlier catalog position.
    fn compare(a: &Self, b: &Self) -> Ordering {
        b.score.cmp(&a.score).then(a.sequence.cmp(&b.sequence))
    }
}

/// Positional bonus: the first of `count` activities earns `count`, the last earns 1.
fn positional_bonus(count: usize, position: usize) -> u32 {
    u32::try_from(count - position).unwrap_or(u32::MAX)
}

/// Shared, non-destructive top-k view over every activity in the catalog.
pub struct ActivityRanker {
    queue: Mutex<PriorityQueue<RankedActivity>>,
}

impl ActivityRanker {
    /// Scores every activity of `destinations`.
    pub fn build(destinations: &[Arc<Destination>]) -> Self {
        let mut queue = PriorityQueue::by(RankedActivity::compare);
        let mut sequence = 0;

        for destination in destinations {
            let count = destination.activities.len();
            for (position, activity) in destination.activities.iter().enumerate() {
                queue.enqueue(RankedActivity {
                    name: activity.clone(),
                    destination: destination.name.clone(),
                    score: destination
                        .popularity
                        .saturating_add(positional_bonus(count, position)),
                    sequence,
                });
                sequence += 1;
            }
        }

        tracing::debug!(activities = queue.len(), "Activity ranking built");
        Self {
            queue: Mutex::new(queue),
        }
    }

    /// Number of ranked activities.
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    /// Whether nothing is ranked.
    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    /// The `count` highest-scoring activities, best first.
    pub fn top(&self, count: usize) -> Vec<RankedActivity> {
        let mut queue = self.queue.lock();
        let mut top = Vec::with_capacity(count.min(queue.len()));

        while top.len() < count {
            match queue.dequeue() {
                Some(activity) => top.push(activity),
                None => break,
            }
        }
        queue.extend(top.iter().cloned());

        top
    }
}

impl std::fmt::Debug for ActivityRanker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityRanker").field("len", &self.len()).finish()
    }
}

// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Conjunctive destination filters.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Destination;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most popular first
    Popularity,
    /// Cheapest first
    Cost,
    /// Alphabetical, case-insensitive
    Name,
}

impl SortKey {
    /// Three-way comparison implementing this ordering.
    pub fn compare(&self, a: &Destination, b: &Destination) -> Ordering {
        match self {
            Self::Popularity => b.popularity.cmp(&a.popularity),
            Self::Cost => a.cost.cmp(&b.cost),
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

/// Error returned for an unrecognized sort key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort key: {0} (expected popularity, cost or name)")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "popularity" => Ok(Self::Popularity),
            "cost" => Ok(Self::Cost),
            "name" => Ok(Self::Name),
            _ => Err(UnknownSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Popularity => "popularity",
            Self::Cost => "cost",
            Self::Name => "name",
        })
    }
}

/// Filter predicates; every present field must hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Category label, compared case-insensitively
    #[serde(rename = "type")]
    pub category: Option<String>,
    /// State, compared case-insensitively
    pub state: Option<String>,
    /// Inclusive upper bound on cost
    pub max_cost: Option<u32>,
    /// Inclusive lower bound on popularity
    pub min_popularity: Option<u32>,
    /// Ordering of the result; `None` keeps catalog order
    pub sort_by: Option<SortKey>,
}

impl FilterCriteria {
    /// Criteria with no predicates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to a category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restricts to a state.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Caps the cost.
    pub fn max_cost(mut self, max_cost: u32) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    /// Sets a popularity floor.
    pub fn min_popularity(mut self, min_popularity: u32) -> Self {
        self.min_popularity = Some(min_popularity);
        self
    }

    /// Orders the result.
    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort_by = Some(key);
        self
    }

    /// Whether `destination` satisfies every present predicate.
    pub fn matches(&self, destination: &Destination) -> bool {
        if let Some(category) = &self.category {
            if !destination.category.matches(category) {
                return false;
            }
        }
        if let Some(state) = &self.state {
            if destination.state.to_lowercase() != state.trim().to_lowercase() {
                return false;
            }
        }
        if let Some(max_cost) = self.max_cost {
            if destination.cost > max_cost {
                return false;
            }
        }
        if let Some(min_popularity) = self.min_popularity {
            if destination.popularity < min_popularity {
                return false;
            }
        }
        true
    }
}

//! Destination records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::routing::TransportMode;

/// Category tag of a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Coastal destinations
    Beach,
    /// Forts, temples and historic towns
    Heritage,
    /// Parks, backwaters and wildlife
    Nature,
    /// Mountain resorts
    HillStation,
    /// Large cities
    Metropolitan,
    /// Pilgrimage sites
    Spiritual,
    /// Trekking, rafting and similar
    Adventure,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 7] = [
        Category::Beach,
        Category::Heritage,
        Category::Nature,
        Category::HillStation,
        Category::Metropolitan,
        Category::Spiritual,
        Category::Adventure,
    ];

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beach => "Beach",
            Self::Heritage => "Heritage",
            Self::Nature => "Nature",
            Self::HillStation => "Hill Station",
            Self::Metropolitan => "Metropolitan",
            Self::Spiritual => "Spiritual",
            Self::Adventure => "Adventure",
        }
    }

    /// Case-insensitive match against a label, ignoring spaces, dashes and
    /// underscores, so "hill station", "Hill-Station" and "HillStation" agree.
    pub fn matches(&self, label: &str) -> bool {
        fold(label) == fold(self.label())
    }
}

fn fold(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Error returned when a category label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown destination category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.matches(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A hint on how to reach a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportHint {
    /// Mode of transport
    pub mode: TransportMode,
    /// Where the leg starts
    pub from: String,
    /// Where the leg ends
    pub to: String,
    /// Free-text note
    #[serde(default)]
    pub note: String,
}

/// An immutable destination record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    /// Unique, case-insensitive name
    pub name: String,
    /// State or union territory
    pub state: String,
    /// Category tag
    pub category: Category,
    /// Suggested stay, e.g. "3-5 days"
    pub duration: String,
    /// Best months to visit
    pub best_time: String,
    /// Accommodation summary
    #[serde(default)]
    pub accommodation: String,
    /// Activities, most characteristic first
    #[serde(default)]
    pub activities: Vec<String>,
    /// Ways to get there
    #[serde(default)]
    pub transportation: Vec<TransportHint>,
    /// Geographic position
    pub location: Coordinate,
    /// Popularity score, higher is more popular
    pub popularity: u32,
    /// Base cost in currency units
    pub cost: u32,
}

impl Destination {
    /// Minimal record with the fields the index and router care about.
    pub fn new<N, S>(name: N, state: S, category: Category, location: Coordinate, popularity: u32, cost: u32) -> Self
    where
        N: Into<String>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            state: state.into(),
            category,
            duration: String::new(),
            best_time: String::new(),
            accommodation: String::new(),
            activities: Vec::new(),
            transportation: Vec::new(),
            location,
            popularity,
            cost,
        }
    }

    /// Adds activities, keeping their order.
    pub fn with_activities<I, A>(mut self, activities: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.activities.extend(activities.into_iter().map(Into::into));
        self
    }

    /// Lowercased name used as the index key.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

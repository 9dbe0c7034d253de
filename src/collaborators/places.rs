// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lodging and dining lookups with a static fallback.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive stay window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First night
    pub check_in: NaiveDate,
    /// Departure day
    pub check_out: NaiveDate,
}

impl DateRange {
    /// Returns `None` when `check_out` precedes `check_in`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Option<Self> {
        (check_out >= check_in).then_some(Self { check_in, check_out })
    }

    /// A stay of `nights` starting on `check_in`.
    pub fn starting(check_in: NaiveDate, nights: u32) -> Option<Self> {
        let check_out = check_in.checked_add_days(chrono::Days::new(u64::from(nights)))?;
        Self::new(check_in, check_out)
    }

    /// Number of nights in the stay.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// A hotel or restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Display name
    pub name: String,
    /// Rating out of 5
    pub rating: f32,
    /// Price band or street address
    pub detail: String,
}

impl Listing {
    fn new(name: String, rating: f32, detail: impl Into<String>) -> Self {
        Self {
            name,
            rating,
            detail: detail.into(),
        }
    }
}

/// Remote source of lodging and dining listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceProvider: Send + Sync {
    /// Hotels in `city` with availability over `dates`.
    async fn hotels(&self, city: &str, dates: &DateRange) -> anyhow::Result<Vec<Listing>>;

    /// Restaurants in `city`.
    async fn restaurants(&self, city: &str) -> anyhow::Result<Vec<Listing>>;
}

/// Canned listings generated from the city name. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPlaces;

impl StaticPlaces {
    /// Three hotels across budget bands, priced for the length of the stay.
    pub fn hotels_for(&self, city: &str, dates: &DateRange) -> Vec<Listing> {
        let nights = dates.nights().max(1);
        [("Grand Residency", 4.5, 6500), ("Comfort Inn", 4.0, 3200), ("Backpackers Hostel", 3.6, 900)]
            .into_iter()
            .map(|(suffix, rating, nightly)| {
                Listing::new(
                    format!("{city} {suffix}"),
                    rating,
                    format!("₹{} for {nights} night(s)", nightly * nights),
                )
            })
            .collect()
    }

    /// Three restaurants near the centre of `city`.
    pub fn restaurants_for(&self, city: &str) -> Vec<Listing> {
        [("Spice Route", 4.4, "Main Bazaar"), ("Thali House", 4.2, "Station Road"), ("Chai Corner", 4.0, "Old Town")]
            .into_iter()
            .map(|(suffix, rating, street)| Listing::new(format!("{city} {suffix}"), rating, format!("{street}, {city}")))
            .collect()
    }
}

#[async_trait]
impl PlaceProvider for StaticPlaces {
    async fn hotels(&self, city: &str, dates: &DateRange) -> anyhow::Result<Vec<Listing>> {
        Ok(self.hotels_for(city, dates))
    }

    async fn restaurants(&self, city: &str) -> anyhow::Result<Vec<Listing>> {
        Ok(self.restaurants_for(city))
    }
}

/// Where a list of listings came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingSource {
    /// The remote provider answered
    Remote,
    /// Canned data was substituted
    Fallback,
}

/// Hotels and restaurants for one city.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceReport {
    /// City looked up
    pub city: String,
    /// Hotels
    pub hotels: Vec<Listing>,
    /// Where `hotels` came from
    pub hotels_source: ListingSource,
    /// Restaurants
    pub restaurants: Vec<Listing>,
    /// Where `restaurants` came from
    pub restaurants_source: ListingSource,
}

/// Queries a remote provider and substitutes canned data, per kind, when it
/// fails or comes back empty.
#[derive(Clone, Default)]
pub struct PlaceLookup {
    remote: Option<Arc<dyn PlaceProvider>>,
    fallback: StaticPlaces,
}

impl PlaceLookup {
    /// Lookup backed by `remote`.
    pub fn new(remote: Arc<dyn PlaceProvider>) -> Self {
        Self {
            remote: Some(remote),
            fallback: StaticPlaces,
        }
    }

    /// Lookup that only ever serves canned data.
    pub fn offline() -> Self {
        Self::default()
    }

    /// Fetches hotels and restaurants concurrently. Never fails.
    pub async fn lookup(&self, city: &str, dates: &DateRange) -> PlaceReport {
        let (hotels, restaurants) = match &self.remote {
            Some(remote) => futures::join!(remote.hotels(city, dates), remote.restaurants(city)),
            None => (Ok(Vec::new()), Ok(Vec::new())),
        };

        let (hotels, hotels_source) = recover("hotels", city, hotels, || self.fallback.hotels_for(city, dates));
        let (restaurants, restaurants_source) =
            recover("restaurants", city, restaurants, || self.fallback.restaurants_for(city));

        PlaceReport {
            city: city.to_string(),
            hotels,
            hotels_source,
            restaurants,
            restaurants_source,
        }
    }
}

impl std::fmt::Debug for PlaceLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceLookup")
            .field("remote", &self.remote.is_some())
            .finish()
    }
}

fn recover<F>(kind: &str, city: &str, fetched: anyhow::Result<Vec<Listing>>, fallback: F) -> (Vec<Listing>, ListingSource)
where
    F: FnOnce() -> Vec<Listing>,
{
    match fetched {
        Ok(listings) if !listings.is_empty() => (listings, ListingSource::Remote),
        Ok(_) => {
            tracing::debug!(kind, city, "No remote listings, using canned data");
            (fallback(), ListingSource::Fallback)
        }
        Err(e) => {
            tracing::warn!(kind, city, error = %e, "Place lookup failed, using canned data");
            (fallback(), ListingSource::Fallback)
        }
    }
}

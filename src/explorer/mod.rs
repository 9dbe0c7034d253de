// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The travel index façade.
//!
//! `TravelIndex` is constructed once from a destination list and is
//! read-only afterwards. It owns every index over that list: an exact-name
//! store, a prefix trie, the routing graph, the activity ranking and the
//! transport estimator. Nothing is shared through statics; callers hold the
//! index and pass it where it is needed.

mod activities;
mod cache;
mod filter;
mod similarity;

use std::sync::Arc;

use hashbrown::HashSet;

pub use activities::{ActivityRanker, RankedActivity};
pub use cache::QueryCache;
pub use filter::{FilterCriteria, SortKey, UnknownSortKey};
pub use similarity::Similarity;

use crate::catalog::{self, Destination};
use crate::collaborators::MarkerSurface;
use crate::config::search::SearchConfig;
use crate::config::YatraConfig;
use crate::data_structures::sorting::merge_sort_by;
use crate::data_structures::{KeyedStore, KeyedStoreConfig, LexiconTrie, LexiconTrieConfig};
use crate::error::YatraResult;
use crate::estimator::{TransportEstimator, TripEstimate};
use crate::routing::{DestinationGraph, EdgePolicy, FullMeshPolicy, RouteOutcome, TransportMode};

/// Searchable, routable view over a fixed destination list.
#[derive(Debug)]
pub struct TravelIndex {
    destinations: Vec<Arc<Destination>>,
    by_name: KeyedStore<Arc<Destination>>,
    by_prefix: LexiconTrie<Arc<Destination>>,
    graph: DestinationGraph,
    activities: ActivityRanker,
    estimator: TransportEstimator,
    cache: QueryCache,
    search: SearchConfig,
}

impl TravelIndex {
    /// Loads the configured catalog and builds an index over it.
    pub fn from_config(config: &YatraConfig) -> YatraResult<Self> {
        let destinations = catalog::load(&config.catalog)?;
        Self::build(destinations, config)
    }

    /// Builds an index whose graph links every pair of destinations by
    /// flight, train and car.
    pub fn build(destinations: Vec<Destination>, config: &YatraConfig) -> YatraResult<Self> {
        let policy = FullMeshPolicy::from(&config.routing.mesh);
        Self::build_with_policy(destinations, &policy, config)
    }

    /// Builds an index whose graph edges come from `policy`.
    pub fn build_with_policy<P>(destinations: Vec<Destination>, policy: &P, config: &YatraConfig) -> YatraResult<Self>
    where
        P: EdgePolicy + ?Sized,
    {
        let graph = DestinationGraph::build(&destinations, policy, &config.routing)?;
        let destinations: Vec<Arc<Destination>> = destinations.into_iter().map(Arc::new).collect();

        let mut by_name = KeyedStore::with_config(
            KeyedStoreConfig::default().with_bucket_count(config.search.bucket_count),
        );
        let mut by_prefix = LexiconTrie::with_config(LexiconTrieConfig {
            max_depth: config.search.max_key_length,
            ..LexiconTrieConfig::default()
        });
        for destination in &destinations {
            by_name.set(&destination.name, Arc::clone(destination))?;
            by_prefix.insert(&destination.name, Arc::clone(destination))?;
        }

        let index = Self {
            activities: ActivityRanker::build(&destinations),
            estimator: TransportEstimator::new(config.estimator.clone()),
            cache: QueryCache::new(config.search.cache_capacity),
            search: config.search.clone(),
            destinations,
            by_name,
            by_prefix,
            graph,
        };

        tracing::info!(
            destinations = index.destinations.len(),
            names = index.by_name.len(),
            activities = index.activities.len(),
            longest_chain = index.by_name.longest_chain(),
            "Travel index built"
        );
        Ok(index)
    }

    /// Every destination, in catalog order.
    pub fn destinations(&self) -> &[Arc<Destination>] {
        &self.destinations
    }

    /// Number of destination records, duplicates included.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Whether the index holds no destinations.
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// The routing graph.
    pub fn graph(&self) -> &DestinationGraph {
        &self.graph
    }

    /// The search settings this index was built with.
    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// Ranked search over names.
    ///
    /// Exact, prefix and fuzzy matches are merged, deduplicated by name,
    /// ordered by popularity (ties keep catalog order) and truncated to
    /// `limit`. An empty or blank query returns nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<Arc<Destination>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        if let Some(hit) = self.cache.get(&query, limit) {
            tracing::trace!(query = %query, limit, "Search cache hit");
            return hit;
        }

        let mut matched: HashSet<String> = HashSet::new();

        if let Some(exact) = self.by_name.get(&query) {
            matched.insert(exact.key());
        }
        for (key, _) in self.by_prefix.search_with_prefix(&query) {
            matched.insert(key);
        }
        for destination in &self.destinations {
            if Similarity::between(&query, &destination.name).qualifies(self.search.min_leading_run) {
                matched.insert(destination.key());
            }
        }

        // Walk the catalog so equal-popularity ties come out in a stable order.
        // A duplicated name resolves to the record the keyed store kept.
        let mut emitted = HashSet::with_capacity(matched.len());
        let candidates: Vec<Arc<Destination>> = self
            .destinations
            .iter()
            .filter_map(|destination| {
                let key = destination.key();
                if !matched.contains(&key) || !emitted.insert(key) {
                    return None;
                }
                Some(self.canonical(destination))
            })
            .collect();

        let mut results = merge_sort_by(&candidates, |a, b| b.popularity.cmp(&a.popularity));
        results.truncate(limit);

        tracing::debug!(query = %query, matched = candidates.len(), returned = results.len(), "Search");
        self.cache.insert(&query, limit, results.clone());
        results
    }

    /// Looks up a destination by name, case-insensitively.
    pub fn get_destination(&self, name: &str) -> Option<Arc<Destination>> {
        self.by_name.get(name.trim()).cloned()
    }

    /// Names of the `limit` most popular destinations, most popular first.
    pub fn get_popular(&self, limit: usize) -> Vec<String> {
        merge_sort_by(&self.destinations, |a, b| b.popularity.cmp(&a.popularity))
            .into_iter()
            .take(limit)
            .map(|destination| destination.name.clone())
            .collect()
    }

    /// Destinations satisfying every present predicate of `criteria`.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Arc<Destination>> {
        let filtered: Vec<Arc<Destination>> = self
            .destinations
            .iter()
            .filter(|destination| criteria.matches(destination))
            .cloned()
            .collect();

        match criteria.sort_by {
            Some(key) => merge_sort_by(&filtered, |a, b| key.compare(a, b)),
            None => filtered,
        }
    }

    /// Cheapest route between two destinations.
    ///
    /// With a preferred mode, edges of that mode are favoured when choosing
    /// the path, but reported costs are always undiscounted.
    pub fn find_route(&self, start: &str, end: &str, preferred: Option<&TransportMode>) -> RouteOutcome {
        let start = self.resolve(start);
        let end = self.resolve(end);
        tracing::debug!(start = %start, end = %end, preferred = ?preferred, "Route request");
        self.graph.find_shortest_path(&start, &end, preferred)
    }

    /// The `count` highest-ranked activities across the catalog.
    pub fn top_activities(&self, count: usize) -> Vec<RankedActivity> {
        self.activities.top(count)
    }

    /// Cost and time of a trip between two cities by one mode.
    pub fn estimate(&self, origin: &str, destination: &str, mode: &TransportMode) -> Option<TripEstimate> {
        self.estimator.estimate(origin, destination, mode)
    }

    /// The transport estimator.
    pub fn estimator(&self) -> &TransportEstimator {
        &self.estimator
    }

    /// Places one marker per destination on `surface`, labelled with its name.
    pub fn place_markers(&self, surface: &mut dyn MarkerSurface, destinations: &[Arc<Destination>]) {
        for destination in destinations {
            surface.place_marker(&destination.name, destination.location);
        }
    }

    fn canonical(&self, destination: &Arc<Destination>) -> Arc<Destination> {
        self.by_name
            .get(&destination.name)
            .cloned()
            .unwrap_or_else(|| Arc::clone(destination))
    }

    /// Canonical spelling of a destination name, or the input when unknown.
    fn resolve(&self, name: &str) -> String {
        let name = name.trim();
        self.by_name
            .get(name)
            .map(|destination| destination.name.clone())
            .unwrap_or_else(|| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::collaborators::MarkerLog;
    use crate::geo::Coordinate;
    use crate::routing::TablePolicy;

    fn place(name: &str, category: Category, popularity: u32, cost: u32) -> Destination {
        Destination::new(name, "Somewhere", category, Coordinate::new(20.0, 78.0), popularity, cost)
    }

    fn small_index() -> TravelIndex {
        let destinations = vec![
            place("Goa", Category::Beach, 95, 15000),
            place("Agra", Category::Heritage, 98, 5000),
            place("Jaipur", Category::Heritage, 90, 8000),
        ];
        TravelIndex::build(destinations, &YatraConfig::default()).unwrap()
    }

    #[test]
    fn test_get_popular_example() {
        let index = small_index();
        assert_eq!(index.get_popular(2), vec!["Agra", "Goa"]);
        assert_eq!(index.get_popular(10).len(), 3);
        assert!(index.get_popular(0).is_empty());
    }

    #[test]
    fn test_get_destination_any_case() {
        let index = small_index();
        assert_eq!(index.get_destination("jAIPUR").unwrap().name, "Jaipur");
        assert!(index.get_destination("Paris").is_none());
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let index = small_index();
        assert!(index.search("", 10).is_empty());
        assert!(index.search("   \t", 10).is_empty());
    }

    #[test]
    fn test_search_merges_and_ranks() {
        let destinations = vec![
            place("Mahabaleshwar", Category::HillStation, 70, 7000),
            place("Madurai", Category::Spiritual, 80, 6000),
            place("Manali", Category::HillStation, 92, 12000),
            place("Mysore", Category::Heritage, 85, 6000),
        ];
        let index = TravelIndex::build(destinations, &YatraConfig::default()).unwrap();

        // "ma" is a prefix of three names; Mysore shares only one leading character
        let names: Vec<String> = index.search("ma", 10).iter().map(|d| d.name.clone()).collect();
        assert_eq!(names, vec!["Manali", "Madurai", "Mahabaleshwar"]);

        let limited = index.search("MA", 2);
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].name, "Manali");
    }

    #[test]
    fn test_search_fuzzy_leading_run() {
        let index = small_index();
        // No substring relation, but "jai" is a shared leading run of three
        let results = index.search("jaisalmer", 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Jaipur");

        // A single shared leading character is not enough
        assert!(index.search("gx", 10).is_empty());
    }

    #[test]
    fn test_search_is_cached() {
        let index = small_index();
        let first = index.search("Goa", 5);
        let second = index.search("  goa ", 5);
        assert_eq!(first, second);
        assert_eq!(index.cache.len(), 1);
    }

    #[test]
    fn test_duplicate_names_collapse_in_search() {
        let destinations = vec![place("Goa", Category::Beach, 80, 9000), place("GOA", Category::Beach, 95, 15000)];
        let index = TravelIndex::build(destinations, &YatraConfig::default()).unwrap();

        let results = index.search("goa", 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].popularity, 95);
        assert_eq!(index.get_popular(5).len(), 2);
    }

    #[test]
    fn test_filter_beach_under_budget() {
        let destinations = vec![
            place("Goa", Category::Beach, 95, 15000),
            place("Gokarna", Category::Beach, 78, 6000),
            place("Hampi", Category::Heritage, 84, 7000),
            place("Varkala", Category::Beach, 80, 8000),
        ];
        let index = TravelIndex::build(destinations, &YatraConfig::default()).unwrap();

        let criteria = FilterCriteria::new().category("beach").max_cost(10000);
        let names: Vec<String> = index.filter(&criteria).iter().map(|d| d.name.clone()).collect();
        assert_eq!(names, vec!["Gokarna", "Varkala"]);

        let sorted = index.filter(&criteria.sort_by(SortKey::Popularity));
        assert_eq!(sorted[0].name, "Varkala");

        let by_name = index.filter(&FilterCriteria::new().sort_by(SortKey::Name));
        assert_eq!(by_name[0].name, "Goa");
        let by_cost = index.filter(&FilterCriteria::new().sort_by(SortKey::Cost));
        assert_eq!(by_cost[0].name, "Gokarna");
    }

    #[test]
    fn test_find_route_resolves_names() {
        let destinations = vec![
            place("A", Category::Nature, 50, 1000),
            place("B", Category::Nature, 50, 1000),
            place("C", Category::Nature, 50, 1000),
        ];
        let policy = TablePolicy::new()
            .with_edge("A", "B", TransportMode::Flight, 10.0)
            .with_edge("A", "C", TransportMode::Bus, 1.0)
            .with_edge("C", "B", TransportMode::Bus, 1.0);
        let index = TravelIndex::build_with_policy(destinations, &policy, &YatraConfig::default()).unwrap();

        let outcome = index.find_route(" a ", "b", None);
        let route = outcome.route().unwrap();
        assert_eq!(route.hops.len(), 2);
        assert_eq!(route.hops[0].from, "A");
        assert_eq!(route.total_cost, 3.0);

        assert!(matches!(
            index.find_route("A", "Nowhere", None),
            RouteOutcome::UnknownEndpoint { .. }
        ));
    }

    #[test]
    fn test_place_markers() {
        let index = small_index();
        let mut log = MarkerLog::new();
        index.place_markers(&mut log, &index.search("goa", 1));
        assert_eq!(log.len(), 1);
        assert_eq!(log.markers()[0].label, "Goa");
    }
}

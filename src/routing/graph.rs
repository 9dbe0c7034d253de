// Copyright (c) 2025 Yatra Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Weighted undirected destination graph and shortest-path search.

use hashbrown::HashMap;
use serde::Serialize;

use crate::catalog::Destination;
use crate::config::routing::{ModeRates, RoutingConfig};
use crate::data_structures::priority_queue::{by_partial_key, PriorityQueue};
use crate::routing::error::{RoutingError, RoutingResult};
use crate::routing::policy::EdgePolicy;
use crate::routing::TransportMode;

/// One directed half of an undirected edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Display id of the neighbor vertex
    pub neighbor: String,
    /// Distance-like weight
    pub weight: f64,
    /// Mode of transport
    pub mode: TransportMode,
    /// `weight * rate(mode)`
    pub cost: f64,
    #[serde(skip)]
    target: usize,
}

#[derive(Debug)]
struct Vertex {
    id: String,
    edges: Vec<Edge>,
}

/// One leg of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hop {
    /// Where the leg starts
    pub from: String,
    /// Where the leg ends
    pub to: String,
    /// Mode of the leg
    pub mode: TransportMode,
    /// Undiscounted weight of the leg
    pub distance: f64,
    /// True cost of the leg
    pub cost: f64,
}

/// A found route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Legs from start to end; empty when start and end coincide
    pub hops: Vec<Hop>,
    /// Sum of true leg costs, unaffected by any mode preference
    pub total_cost: f64,
    /// Sum of undiscounted leg weights
    pub total_distance: f64,
}

/// Result of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    /// A path exists
    Found(Route),
    /// Both endpoints exist but no path joins them
    Unreachable,
    /// The named vertex is not in the graph
    UnknownEndpoint {
        /// The unresolved name
        name: String,
    },
}

impl RouteOutcome {
    /// The route, if one was found.
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Found(route) => Some(route),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the route if one was found.
    pub fn into_route(self) -> Option<Route> {
        match self {
            Self::Found(route) => Some(route),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Frontier {
    distance: f64,
    vertex: usize,
}

/// Weighted undirected graph keyed by destination name.
///
/// Vertex ids are matched case-insensitively. Every edge is stored as two
/// directed records with identical weight and cost; `add_edge` is the only
/// mutator and always writes both.
#[derive(Debug)]
pub struct DestinationGraph {
    vertices: Vec<Vertex>,
    index: HashMap<String, usize>,
    rates: ModeRates,
    preference_discount: f64,
    edge_count: usize,
}

impl DestinationGraph {
    /// Creates an empty graph with default rates.
    pub fn new() -> Self {
        Self::with_config(&RoutingConfig::default())
    }

    /// Creates an empty graph using the rates and discount from `config`.
    pub fn with_config(config: &RoutingConfig) -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            rates: config.rates.clone(),
            preference_discount: config.preference_discount,
            edge_count: 0,
        }
    }

    /// Builds a graph with one vertex per destination and the edges `policy`
    /// proposes for every unordered pair.
    pub fn build<P>(destinations: &[Destination], policy: &P, config: &RoutingConfig) -> RoutingResult<Self>
    where
        P: EdgePolicy + ?Sized,
    {
        let mut graph = Self::with_config(config);
        for destination in destinations {
            graph.add_vertex(&destination.name)?;
        }

        for (i, a) in destinations.iter().enumerate() {
            for b in &destinations[i + 1..] {
                // Duplicate names collapse to one vertex; skip the self-pair
                if a.key() == b.key() {
                    continue;
                }
                for spec in policy.edges_between(a, b) {
                    graph.add_edge(&a.name, &b.name, spec.weight, spec.mode)?;
                }
            }
        }

        tracing::info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "Destination graph built"
        );
        Ok(graph)
    }

    fn lookup(&self, id: &str) -> Option<usize> {
        self.index.get(&id.to_lowercase()).copied()
    }

    /// Adds a vertex if it is not present. Returns its index either way.
    pub fn add_vertex(&mut self, id: &str) -> RoutingResult<usize> {
        if id.is_empty() {
            return Err(RoutingError::EmptyVertex);
        }
        if let Some(existing) = self.lookup(id) {
            return Ok(existing);
        }

        let position = self.vertices.len();
        self.vertices.push(Vertex {
            id: id.to_string(),
            edges: Vec::new(),
        });
        self.index.insert(id.to_lowercase(), position);
        Ok(position)
    }

    /// Cost of travelling `weight` distance units by `mode`.
    pub fn cost_of(&self, mode: &TransportMode, weight: f64) -> f64 {
        weight * self.rates.rate_for(mode)
    }

    /// Adds an undirected edge as two symmetric records, creating missing
    /// vertices.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64, mode: TransportMode) -> RoutingResult<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(RoutingError::InvalidWeight {
                from: a.to_string(),
                to: b.to_string(),
                weight,
            });
        }

        let from = self.add_vertex(a)?;
        let to = self.add_vertex(b)?;
        let cost = self.cost_of(&mode, weight);

        let forward = Edge {
            neighbor: self.vertices[to].id.clone(),
            weight,
            mode: mode.clone(),
            cost,
            target: to,
        };
        let backward = Edge {
            neighbor: self.vertices[from].id.clone(),
            weight,
            mode,
            cost,
            target: from,
        };
        self.vertices[from].edges.push(forward);
        self.vertices[to].edges.push(backward);
        self.edge_count += 1;
        Ok(())
    }

    /// Whether `id` is a vertex.
    pub fn contains_vertex(&self, id: &str) -> bool {
        self.lookup(id).is_some()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Outgoing edges of `id`, in insertion order.
    pub fn neighbors(&self, id: &str) -> Option<&[Edge]> {
        self.lookup(id).map(|i| self.vertices[i].edges.as_slice())
    }

    fn traversal_weight(&self, edge: &Edge, preferred: Option<&TransportMode>) -> f64 {
        match preferred {
            Some(mode) if *mode == edge.mode => edge.weight * self.preference_discount,
            _ => edge.weight,
        }
    }

    /// Dijkstra search from `start` to `end`.
    ///
    /// Edges in `preferred` mode are compared at a discounted weight, which
    /// can change the chosen path; the reported costs and distances always use
    /// the undiscounted edge values.
    ///
    /// The frontier has no decrease-key: an improved distance is pushed as a
    /// new entry and the superseded one is skipped when it surfaces. With
    /// non-negative weights a vertex's distance is final the first time it is
    /// dequeued, so the search stops as soon as `end` is dequeued.
    pub fn find_shortest_path(&self, start: &str, end: &str, preferred: Option<&TransportMode>) -> RouteOutcome {
        let Some(source) = self.lookup(start) else {
            return RouteOutcome::UnknownEndpoint {
                name: start.to_string(),
            };
        };
        let Some(target) = self.lookup(end) else {
            return RouteOutcome::UnknownEndpoint {
                name: end.to_string(),
            };
        };

        let count = self.vertices.len();
        let mut best = vec![f64::INFINITY; count];
        let mut settled = vec![false; count];
        // (predecessor vertex, index of the edge taken in its adjacency list)
        let mut via: Vec<Option<(usize, usize)>> = vec![None; count];

        let mut frontier = PriorityQueue::with_comparator(by_partial_key(|entry: &Frontier| entry.distance));
        best[source] = 0.0;
        frontier.enqueue(Frontier {
            distance: 0.0,
            vertex: source,
        });

        while let Some(Frontier { distance, vertex }) = frontier.dequeue() {
            if settled[vertex] || distance > best[vertex] {
                continue;
            }
            settled[vertex] = true;
            if vertex == target {
                break;
            }

            for (edge_index, edge) in self.vertices[vertex].edges.iter().enumerate() {
                if settled[edge.target] {
                    continue;
                }
                let candidate = distance + self.traversal_weight(edge, preferred);
                if candidate < best[edge.target] {
                    best[edge.target] = candidate;
                    via[edge.target] = Some((vertex, edge_index));
                    frontier.enqueue(Frontier {
                        distance: candidate,
                        vertex: edge.target,
                    });
                }
            }
        }

        if !settled[target] {
            tracing::debug!(start, end, "No route between destinations");
            return RouteOutcome::Unreachable;
        }

        let mut hops = Vec::new();
        let mut current = target;
        while let Some((previous, edge_index)) = via[current] {
            let edge = &self.vertices[previous].edges[edge_index];
            hops.push(Hop {
                from: self.vertices[previous].id.clone(),
                to: edge.neighbor.clone(),
                mode: edge.mode.clone(),
                distance: edge.weight,
                cost: edge.cost,
            });
            current = previous;
        }
        hops.reverse();

        let total_cost = hops.iter().map(|hop| hop.cost).sum();
        let total_distance = hops.iter().map(|hop| hop.distance).sum();
        RouteOutcome::Found(Route {
            hops,
            total_cost,
            total_distance,
        })
    }
}

impl Default for DestinationGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::geo::Coordinate;
    use crate::routing::policy::{FullMeshPolicy, TablePolicy};

    fn triangle() -> DestinationGraph {
        let mut graph = DestinationGraph::new();
        graph.add_edge("A", "B", 10.0, TransportMode::Flight).unwrap();
        graph.add_edge("A", "C", 1.0, TransportMode::Flight).unwrap();
        graph.add_edge("C", "B", 1.0, TransportMode::Flight).unwrap();
        graph
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = DestinationGraph::new();
        let first = graph.add_vertex("Goa").unwrap();
        let second = graph.add_vertex("GOA").unwrap();
        assert_eq!(first, second);
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.add_vertex(""), Err(RoutingError::EmptyVertex));
    }

    #[test]
    fn test_edges_are_symmetric_with_mode_cost() {
        let mut graph = DestinationGraph::new();
        graph.add_edge("Delhi", "Agra", 200.0, TransportMode::Train).unwrap();
        graph
            .add_edge("Delhi", "Agra", 200.0, TransportMode::Other("ferry".to_string()))
            .unwrap();

        let forward = graph.neighbors("delhi").unwrap();
        let backward = graph.neighbors("agra").unwrap();
        assert_eq!(forward.len(), 2);
        assert_eq!(backward.len(), 2);
        assert_eq!(forward[0].neighbor, "Agra");
        assert_eq!(backward[0].neighbor, "Delhi");
        assert_eq!(forward[0].cost, 400.0);
        assert_eq!(backward[0].cost, forward[0].cost);
        // Unknown modes use the default rate
        assert_eq!(forward[1].cost, 1000.0);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_rejects_negative_weight() {
        let mut graph = DestinationGraph::new();
        assert!(matches!(
            graph.add_edge("A", "B", -1.0, TransportMode::Car),
            Err(RoutingError::InvalidWeight { .. })
        ));
        assert!(graph.add_edge("A", "B", f64::NAN, TransportMode::Car).is_err());
    }

    #[test]
    fn test_prefers_cheaper_two_hop_path() {
        let graph = triangle();
        let route = graph.find_shortest_path("A", "B", None).into_route().unwrap();

        let stops: Vec<&str> = route.hops.iter().map(|hop| hop.to.as_str()).collect();
        assert_eq!(stops, vec!["C", "B"]);
        assert_eq!(route.total_cost, 16.0);
        assert_eq!(route.total_distance, 2.0);
    }

    #[test]
    fn test_preference_changes_path_but_not_cost_accounting() {
        let mut graph = DestinationGraph::new();
        // Direct train leg: weight 10, discounted to 8 when trains are preferred
        graph.add_edge("A", "B", 10.0, TransportMode::Train).unwrap();
        // Two car legs: weight 9 total, never discounted
        graph.add_edge("A", "C", 4.5, TransportMode::Car).unwrap();
        graph.add_edge("C", "B", 4.5, TransportMode::Car).unwrap();

        let plain = graph.find_shortest_path("A", "B", None).into_route().unwrap();
        assert_eq!(plain.hops.len(), 2);
        assert_eq!(plain.total_cost, 27.0);

        let preferred = graph
            .find_shortest_path("A", "B", Some(&TransportMode::Train))
            .into_route()
            .unwrap();
        assert_eq!(preferred.hops.len(), 1);
        assert_eq!(preferred.hops[0].mode, TransportMode::Train);
        // 10 * 2.0, not 8 * 2.0
        assert_eq!(preferred.total_cost, 20.0);
        assert_eq!(preferred.total_distance, 10.0);
    }

    #[test]
    fn test_unreachable_is_distinct_from_zero_cost() {
        let mut graph = triangle();
        graph.add_vertex("Island").unwrap();

        assert_eq!(graph.find_shortest_path("A", "Island", None), RouteOutcome::Unreachable);

        let same = graph.find_shortest_path("A", "a", None);
        assert_eq!(
            same,
            RouteOutcome::Found(Route {
                hops: Vec::new(),
                total_cost: 0.0,
                total_distance: 0.0,
            })
        );

        assert_eq!(
            graph.find_shortest_path("A", "Nowhere", None),
            RouteOutcome::UnknownEndpoint {
                name: "Nowhere".to_string()
            }
        );
    }

    #[test]
    fn test_zero_weight_edge_is_a_found_route() {
        let mut graph = DestinationGraph::new();
        graph.add_edge("A", "B", 0.0, TransportMode::Bus).unwrap();
        let route = graph.find_shortest_path("A", "B", None).into_route().unwrap();
        assert_eq!(route.hops.len(), 1);
        assert_eq!(route.total_cost, 0.0);
    }

    #[test]
    fn test_stale_entries_do_not_corrupt_result() {
        // B is first reached at 100, then improved to 3 via C and D, leaving a
        // stale entry in the frontier.
        let mut graph = DestinationGraph::new();
        graph.add_edge("A", "B", 100.0, TransportMode::Bus).unwrap();
        graph.add_edge("A", "C", 1.0, TransportMode::Bus).unwrap();
        graph.add_edge("C", "D", 1.0, TransportMode::Bus).unwrap();
        graph.add_edge("D", "B", 1.0, TransportMode::Bus).unwrap();
        graph.add_edge("B", "E", 1.0, TransportMode::Bus).unwrap();

        let route = graph.find_shortest_path("A", "E", None).into_route().unwrap();
        assert_eq!(route.total_distance, 4.0);
        assert_eq!(route.hops.len(), 4);
    }

    #[test]
    fn test_build_full_mesh() {
        let destinations = vec![
            Destination::new("Delhi", "Delhi", Category::Metropolitan, Coordinate::new(28.6139, 77.2090), 94, 10000),
            Destination::new("Agra", "Uttar Pradesh", Category::Heritage, Coordinate::new(27.1767, 78.0081), 98, 8000),
            Destination::new("Jaipur", "Rajasthan", Category::Heritage, Coordinate::new(26.9124, 75.7873), 90, 10000),
        ];

        let graph = DestinationGraph::build(&destinations, &FullMeshPolicy::default(), &RoutingConfig::default()).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 9);
        assert_eq!(graph.neighbors("Agra").unwrap().len(), 6);

        // Flights are the lightest edges in a full mesh, so the direct flight wins
        let route = graph.find_shortest_path("Delhi", "Agra", None).into_route().unwrap();
        assert_eq!(route.hops.len(), 1);
        assert_eq!(route.hops[0].mode, TransportMode::Flight);
    }

    #[test]
    fn test_build_from_table_policy() {
        let destinations = vec![
            Destination::new("A", "X", Category::Nature, Coordinate::new(0.0, 0.0), 1, 1),
            Destination::new("B", "X", Category::Nature, Coordinate::new(0.0, 1.0), 1, 1),
            Destination::new("C", "X", Category::Nature, Coordinate::new(1.0, 0.0), 1, 1),
        ];
        let policy = TablePolicy::new().with_edge("A", "B", TransportMode::Train, 5.0);

        let graph = DestinationGraph::build(&destinations, &policy, &RoutingConfig::default()).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.find_shortest_path("A", "B", None).route().is_some());
        assert_eq!(graph.find_shortest_path("A", "C", None), RouteOutcome::Unreachable);
    }
}

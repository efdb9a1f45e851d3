//! Graph construction from trip records.

use crate::agglomeration::Agglomerations;
use crate::domain::TripRecord;

use super::model::{EdgeId, Graph, RouteInfo};

/// Counters collected while building a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Number of trip records turned into edges.
    pub trips: usize,

    /// Number of records whose negative weight was clamped to zero.
    pub clamped_weights: usize,
}

/// Builds a [`Graph`] from trip records.
///
/// Departure and arrival codes are resolved through an agglomeration
/// table before they become vertices. Vertices are created on first
/// reference and reused afterwards, so the builder can be fed overlapping
/// record sets. Every record becomes its own edge; parallel trips are
/// never merged.
#[derive(Debug)]
pub struct GraphBuilder<'a> {
    graph: Graph,
    agglomerations: &'a Agglomerations,
    stats: BuildStats,
}

impl<'a> GraphBuilder<'a> {
    /// Create a builder for an empty graph.
    pub fn new(agglomerations: &'a Agglomerations) -> Self {
        Self::from_graph(Graph::new(), agglomerations)
    }

    /// Create a builder that keeps adding to an existing graph.
    pub fn from_graph(graph: Graph, agglomerations: &'a Agglomerations) -> Self {
        Self {
            graph,
            agglomerations,
            stats: BuildStats::default(),
        }
    }

    /// Add one trip as a directed edge.
    pub fn add_trip(&mut self, trip: &TripRecord) -> EdgeId {
        let departure = self
            .graph
            .ensure_vertex(self.agglomerations.resolve(&trip.departure));
        let arrival = self
            .graph
            .ensure_vertex(self.agglomerations.resolve(&trip.arrival));

        let weight = u64::try_from(trip.weight).unwrap_or_else(|_| {
            self.stats.clamped_weights += 1;
            0
        });
        let route = RouteInfo::new(trip.provider.clone(), trip.carrier.clone(), trip.segments);

        self.stats.trips += 1;
        self.graph.insert_edge(departure, arrival, weight, route)
    }

    /// Add every trip in order.
    pub fn extend<'t>(&mut self, trips: impl IntoIterator<Item = &'t TripRecord>) -> &mut Self {
        for trip in trips {
            self.add_trip(trip);
        }
        self
    }

    /// Returns the counters collected so far.
    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Finish building and return the graph.
    pub fn build(self) -> Graph {
        self.graph
    }

    /// Finish building and return the graph with its counters.
    pub fn finish(self) -> (Graph, BuildStats) {
        (self.graph, self.stats)
    }
}

/// Build a graph from `trips`, resolving locations through `agglomerations`.
pub fn build_graph<'t>(
    trips: impl IntoIterator<Item = &'t TripRecord>,
    agglomerations: &Agglomerations,
) -> Graph {
    let mut builder = GraphBuilder::new(agglomerations);
    builder.extend(trips);
    builder.build()
}

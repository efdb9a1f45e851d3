//! Route search between two locations.
//!
//! Each call runs a fresh Dijkstra search rooted at the departure and
//! extracts the walk to the arrival. Nothing is shared between calls except
//! the read-only graph.

use crate::graph::{Graph, GraphError};

use super::config::SearchConfig;
use super::dijkstra::{SearchOutcome, ShortestPaths};

/// Route planner over a built graph.
///
/// Walks borrow only the graph, so they outlive the configuration.
pub struct Planner<'g, 'c> {
    graph: &'g Graph,
    config: &'c SearchConfig,
}

impl<'g, 'c> Planner<'g, 'c> {
    /// Create a new planner.
    pub fn new(graph: &'g Graph, config: &'c SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Find a minimum-weight walk from `departure` to `arrival`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either location is not in
    /// the graph. A target that exists but cannot be reached is reported as
    /// [`SearchOutcome::Unreachable`] instead.
    pub fn search(&self, departure: &str, arrival: &str) -> Result<SearchOutcome<'g>, GraphError> {
        let source = self.graph.vertex_id(departure)?;
        let target = self.graph.vertex_id(arrival)?;

        let stop_at = self.config.stop_at_target.then_some(target);
        ShortestPaths::run(self.graph, source, stop_at).walk_to_vertex(target)
    }
}

/// Find a minimum-weight walk from `source` to `target` with the default
/// search configuration.
///
/// # Examples
///
/// ```
/// use route_graph::agglomeration::Agglomerations;
/// use route_graph::domain::{LocationId, TripRecord};
/// use route_graph::graph::build_graph;
/// use route_graph::planner::search;
///
/// let loc = |s| LocationId::parse(s).unwrap();
/// let trips = vec![
///     TripRecord::new(loc("X"), loc("Y"), 10, "P1", "C1", 1),
///     TripRecord::new(loc("Y"), loc("Z"), 10, "P1", "C1", 1),
///     TripRecord::new(loc("X"), loc("Z"), 25, "P2", "C2", 1),
/// ];
/// let graph = build_graph(&trips, &Agglomerations::new());
///
/// let walk = search("X", "Z", &graph).unwrap().into_walk().unwrap();
/// assert_eq!(walk.total_weight(), 20);
/// ```
pub fn search<'g>(
    source: &str,
    target: &str,
    graph: &'g Graph,
) -> Result<SearchOutcome<'g>, GraphError> {
    let config = SearchConfig::default();
    Planner::new(graph, &config).search(source, target)
}

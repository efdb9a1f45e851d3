//! Concurrent search over a list of direction queries.
//!
//! Searches are CPU-bound, so each one runs on tokio's blocking pool. The
//! graph is shared through an `Arc`; every search owns its own state.
//! Queries are processed `batch_size` at a time and results come back in
//! query order.

use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use tracing::debug;

use crate::agglomeration::Agglomerations;
use crate::domain::DirectionQuery;
use crate::graph::{Graph, GraphError};

use super::config::SearchConfig;
use super::search::Planner;
use super::walk::RouteSummary;

/// What happened to one direction query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DirectionResult {
    /// A route was found
    Found(RouteSummary),
    /// Both locations exist but no route connects them
    Unreachable,
    /// A location of the query is not in the graph
    Missing(String),
    /// The search task did not complete
    Failed(String),
}

/// A query together with its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionOutcome {
    /// The query as it was read, before agglomeration
    pub query: DirectionQuery,
    /// What the search produced for it
    pub result: DirectionResult,
}

impl DirectionOutcome {
    /// Returns the route if one was found.
    pub fn found(&self) -> Option<&RouteSummary> {
        match &self.result {
            DirectionResult::Found(summary) => Some(summary),
            _ => None,
        }
    }
}

/// Results of a batch of searches, in query order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// One outcome per query, in query order
    pub outcomes: Vec<DirectionOutcome>,
}

impl BatchReport {
    /// Iterates over the outcomes that found a route.
    pub fn found(&self) -> impl Iterator<Item = (&DirectionQuery, &RouteSummary)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|o| o.found().map(|summary| (&o.query, summary)))
    }

    /// Returns the number of queries that found a route.
    pub fn found_count(&self) -> usize {
        self.found().count()
    }

    /// Returns the number of queries whose locations exist but are not connected.
    pub fn unreachable_count(&self) -> usize {
        self.count(|r| matches!(r, DirectionResult::Unreachable))
    }

    /// Returns the number of queries naming a location that is not in the graph.
    pub fn missing_count(&self) -> usize {
        self.count(|r| matches!(r, DirectionResult::Missing(_)))
    }

    /// Returns the number of searches that did not complete.
    pub fn failed_count(&self) -> usize {
        self.count(|r| matches!(r, DirectionResult::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&DirectionResult) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.result)).count()
    }
}

/// Search every query against `graph`.
///
/// Query locations are resolved through `agglomerations`, the same way trip
/// locations were when the graph was built.
pub async fn search_directions(
    graph: Arc<Graph>,
    agglomerations: Arc<Agglomerations>,
    queries: Vec<DirectionQuery>,
    config: &SearchConfig,
) -> BatchReport {
    let mut outcomes = Vec::with_capacity(queries.len());

    for batch in queries.chunks(config.effective_batch_size()) {
        let handles: Vec<_> = batch
            .iter()
            .cloned()
            .map(|query| {
                let graph = Arc::clone(&graph);
                let agglomerations = Arc::clone(&agglomerations);
                let config = config.clone();
                tokio::task::spawn_blocking(move || {
                    let result = search_one(&graph, &agglomerations, &query, &config);
                    DirectionOutcome { query, result }
                })
            })
            .collect();

        let results = join_all(handles).await;

        for (query, joined) in batch.iter().zip(results) {
            match joined {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    debug!(
                        departure = %query.departure,
                        arrival = %query.arrival,
                        error = %e,
                        "Search task failed"
                    );
                    outcomes.push(DirectionOutcome {
                        query: query.clone(),
                        result: DirectionResult::Failed(e.to_string()),
                    });
                }
            }
        }
    }

    BatchReport { outcomes }
}

fn search_one(
    graph: &Graph,
    agglomerations: &Agglomerations,
    query: &DirectionQuery,
    config: &SearchConfig,
) -> DirectionResult {
    let departure = agglomerations.resolve(&query.departure);
    let arrival = agglomerations.resolve(&query.arrival);

    match Planner::new(graph, config).search(departure.as_str(), arrival.as_str()) {
        Ok(outcome) => match outcome.into_walk() {
            Some(walk) => DirectionResult::Found(walk.summary()),
            None => DirectionResult::Unreachable,
        },
        Err(GraphError::VertexNotFound(id)) => {
            debug!(
                departure = %query.departure,
                arrival = %query.arrival,
                missing = %id,
                "Direction skipped: location not in graph"
            );
            DirectionResult::Missing(id)
        }
        Err(e) => DirectionResult::Failed(e.to_string()),
    }
}

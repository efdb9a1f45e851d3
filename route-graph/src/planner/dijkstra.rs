//! Single-source Dijkstra over the route graph.
//!
//! The frontier is a binary min-heap keyed by `(distance, vertex index)`.
//! Outgoing edges are relaxed in insertion order and a tentative distance
//! is only replaced by a strictly smaller one, so among equally cheap
//! predecessor edges the one inserted first is kept. Together with the
//! vertex-index tie-break on the heap this makes every search deterministic
//! for a given graph.
//!
//! Edge weights are unsigned, which is all Dijkstra needs to be exact.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use crate::graph::{EdgeId, Graph, GraphError, VertexId};

use super::walk::Walk;

/// Result of extracting a walk to one target.
#[derive(Debug, Clone)]
pub enum SearchOutcome<'g> {
    /// A minimum-weight walk from source to target
    Found(Walk<'g>),
    /// The target exists but no directed path leads to it
    Unreachable,
}

impl<'g> SearchOutcome<'g> {
    /// Returns the walk if one was found.
    pub fn walk(&self) -> Option<&Walk<'g>> {
        match self {
            SearchOutcome::Found(walk) => Some(walk),
            SearchOutcome::Unreachable => None,
        }
    }

    /// Consumes the outcome, returning the walk if one was found.
    pub fn into_walk(self) -> Option<Walk<'g>> {
        match self {
            SearchOutcome::Found(walk) => Some(walk),
            SearchOutcome::Unreachable => None,
        }
    }

    /// Returns true if the target could not be reached.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, SearchOutcome::Unreachable)
    }
}

/// A shortest-path tree rooted at one source vertex.
///
/// Each instance owns its own distance and predecessor tables, so any
/// number of trees can be computed over the same graph at once.
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g> {
    graph: &'g Graph,
    source: VertexId,
    distances: Vec<Option<u64>>,
    predecessors: Vec<Option<EdgeId>>,
    finalized: Vec<bool>,
}

impl<'g> ShortestPaths<'g> {
    /// Settle every vertex reachable from `source`.
    pub fn from_source(graph: &'g Graph, source: &str) -> Result<Self, GraphError> {
        let source = graph.vertex_id(source)?;
        Ok(Self::run(graph, source, None))
    }

    /// Run the search from `source`, stopping once `stop_at` is finalized.
    ///
    /// Distances of vertices that were still in the frontier when the search
    /// stopped are tentative; the walk to `stop_at` is not.
    pub(crate) fn run(graph: &'g Graph, source: VertexId, stop_at: Option<VertexId>) -> Self {
        let n = graph.vertex_count();
        let mut distances: Vec<Option<u64>> = vec![None; n];
        let mut predecessors: Vec<Option<EdgeId>> = vec![None; n];
        let mut finalized = vec![false; n];
        let mut frontier = BinaryHeap::new();

        distances[source.0] = Some(0);
        frontier.push(Reverse((0u64, source)));

        while let Some(Reverse((distance, vertex))) = frontier.pop() {
            if finalized[vertex.0] {
                continue;
            }
            finalized[vertex.0] = true;

            if stop_at == Some(vertex) {
                break;
            }

            for &edge_id in graph.outgoing(vertex) {
                let edge = graph.edge(edge_id);
                let next = edge.to();
                if finalized[next.0] {
                    continue;
                }

                let candidate = distance.saturating_add(edge.weight());
                if distances[next.0].is_none_or(|current| candidate < current) {
                    distances[next.0] = Some(candidate);
                    predecessors[next.0] = Some(edge_id);
                    frontier.push(Reverse((candidate, next)));
                }
            }
        }

        trace!(
            source = %graph.location(source),
            finalized = finalized.iter().filter(|f| **f).count(),
            "Dijkstra search complete"
        );

        Self {
            graph,
            source,
            distances,
            predecessors,
            finalized,
        }
    }

    /// Returns the source vertex of the tree.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the shortest distance to `target`, or `None` if it is
    /// unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `target` is not in the graph.
    pub fn distance_to(&self, target: &str) -> Result<Option<u64>, GraphError> {
        let target = self.graph.vertex_id(target)?;
        Ok(self.distances[target.0])
    }

    /// Returns the number of vertices the search finalized, source included.
    pub fn reached_count(&self) -> usize {
        self.finalized.iter().filter(|f| **f).count()
    }

    /// Extracts the walk to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `target` is not in the graph.
    pub fn walk_to(&self, target: &str) -> Result<SearchOutcome<'g>, GraphError> {
        let target = self.graph.vertex_id(target)?;
        self.walk_to_vertex(target)
    }

    pub(crate) fn walk_to_vertex(&self, target: VertexId) -> Result<SearchOutcome<'g>, GraphError> {
        if target != self.source && self.predecessors[target.0].is_none() {
            return Ok(SearchOutcome::Unreachable);
        }

        let mut edges = Vec::new();
        let mut at = target;
        while at != self.source {
            // Predecessor chains are acyclic, so this always ends at the source.
            let Some(edge_id) = self.predecessors[at.0] else {
                return Ok(SearchOutcome::Unreachable);
            };
            edges.push(edge_id);
            at = self.graph.edge(edge_id).from();
        }
        edges.reverse();

        Walk::new(self.graph, self.source, target, edges).map(SearchOutcome::Found)
    }
}

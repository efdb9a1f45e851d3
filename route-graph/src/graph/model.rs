//! Graph storage.
//!
//! Vertices and edges live in arenas addressed by [`VertexId`] and
//! [`EdgeId`]. Each vertex keeps the indices of its outgoing edges in
//! insertion order, which is the order the search relaxes them in.

use std::collections::HashMap;
use std::collections::hash_map::{Entry, VacantEntry};

use serde::Serialize;

use crate::domain::LocationId;

use super::GraphError;

/// Index of a vertex in its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// Index of an edge in its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// Who sells and operates the trip an edge stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    /// Provider offering the trip
    pub provider: String,
    /// Carrier operating the trip
    pub carrier: String,
    /// Number of segments in the trip
    pub segments: u32,
}

impl RouteInfo {
    /// Creates route info from its parts.
    pub fn new(provider: impl Into<String>, carrier: impl Into<String>, segments: u32) -> Self {
        Self {
            provider: provider.into(),
            carrier: carrier.into(),
            segments,
        }
    }
}

/// A location in the graph.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: LocationId,
    outgoing: Vec<EdgeId>,
}

impl Vertex {
    /// Returns the location code of this vertex.
    pub fn id(&self) -> &LocationId {
        &self.id
    }

    /// Returns the outgoing edges of this vertex in insertion order.
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }
}

/// A directed, weighted edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    from: VertexId,
    to: VertexId,
    weight: u64,
    route: RouteInfo,
}

impl Edge {
    /// Returns the origin vertex.
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// Returns the destination vertex.
    pub fn to(&self) -> VertexId {
        self.to
    }

    /// Returns the edge cost.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Returns the provider, carrier and segment count of the trip.
    pub fn route(&self) -> &RouteInfo {
        &self.route
    }
}

/// A directed multigraph of locations and trips.
///
/// Parallel edges between the same ordered pair of vertices are kept
/// distinct. Once built, a graph is only read; it is `Send + Sync` and can
/// be shared between concurrent searches.
///
/// # Invariants
///
/// - Location codes are unique across vertices
/// - Every edge endpoint is a vertex of this graph
/// - Vertices and edges iterate in insertion order
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<LocationId, VertexId>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a vertex for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateVertex`] if the location already exists.
    /// Use [`Graph::ensure_vertex`] for create-if-absent.
    pub fn create_vertex(&mut self, id: LocationId) -> Result<VertexId, GraphError> {
        match self.index.entry(id) {
            Entry::Occupied(entry) => Err(GraphError::DuplicateVertex(entry.key().clone())),
            Entry::Vacant(entry) => Ok(push_vertex(&mut self.vertices, entry)),
        }
    }

    /// Returns the vertex for `id`, creating it first if it does not exist.
    pub fn ensure_vertex(&mut self, id: LocationId) -> VertexId {
        match self.index.entry(id) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => push_vertex(&mut self.vertices, entry),
        }
    }

    /// Returns true if `id` is a vertex of this graph.
    pub fn has_vertex(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Looks up the index of the vertex for `id`.
    pub fn vertex_id(&self, id: &str) -> Result<VertexId, GraphError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::VertexNotFound(id.to_string()))
    }

    /// Looks up the vertex for `id`.
    pub fn vertex(&self, id: &str) -> Result<&Vertex, GraphError> {
        let vertex = self.vertex_id(id)?;
        Ok(&self.vertices[vertex.0])
    }

    /// Returns the location code of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` does not belong to this graph.
    pub fn location(&self, vertex: VertexId) -> &LocationId {
        &self.vertices[vertex.0].id
    }

    /// Returns an edge by index.
    ///
    /// # Panics
    ///
    /// Panics if `edge` does not belong to this graph.
    pub fn edge(&self, edge: EdgeId) -> &Edge {
        &self.edges[edge.0]
    }

    /// Returns the outgoing edges of a vertex in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` does not belong to this graph.
    pub fn outgoing(&self, vertex: VertexId) -> &[EdgeId] {
        &self.vertices[vertex.0].outgoing
    }

    /// Adds a directed edge between two existing locations.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is missing.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        weight: u64,
        route: RouteInfo,
    ) -> Result<EdgeId, GraphError> {
        let from = self.vertex_id(from)?;
        let to = self.vertex_id(to)?;
        Ok(self.insert_edge(from, to, weight, route))
    }

    /// Adds a directed edge between two vertex indices already known to be
    /// part of this graph.
    pub(crate) fn insert_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: u64,
        route: RouteInfo,
    ) -> EdgeId {
        let edge = EdgeId(self.edges.len());
        self.edges.push(Edge {
            from,
            to,
            weight,
            route,
        });
        self.vertices[from.0].outgoing.push(edge);
        edge
    }

    /// Iterates over vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId(i), v))
    }

    /// Iterates over edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

fn push_vertex(vertices: &mut Vec<Vertex>, entry: VacantEntry<'_, LocationId, VertexId>) -> VertexId {
    let vertex = VertexId(vertices.len());
    vertices.push(Vertex {
        id: entry.key().clone(),
        outgoing: Vec::new(),
    });
    entry.insert(vertex);
    vertex
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(s: &str) -> LocationId {
        LocationId::parse(s).unwrap()
    }

    fn route(provider: &str) -> RouteInfo {
        RouteInfo::new(provider, "C1", 1)
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.has_vertex("MOW"));
    }

    #[test]
    fn create_and_lookup_vertex() {
        let mut graph = Graph::new();
        let mow = graph.create_vertex(loc("MOW")).unwrap();

        assert!(graph.has_vertex("MOW"));
        assert_eq!(graph.vertex_id("MOW").unwrap(), mow);
        assert_eq!(graph.vertex("MOW").unwrap().id().as_str(), "MOW");
        assert_eq!(graph.location(mow).as_str(), "MOW");
    }

    #[test]
    fn duplicate_vertex_rejected() {
        let mut graph = Graph::new();
        graph.create_vertex(loc("MOW")).unwrap();

        let err = graph.create_vertex(loc("MOW")).unwrap_err();
        assert_eq!(err, GraphError::DuplicateVertex(loc("MOW")));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn ensure_vertex_is_idempotent() {
        let mut graph = Graph::new();
        let a = graph.ensure_vertex(loc("MOW"));
        let b = graph.ensure_vertex(loc("MOW"));
        let c = graph.ensure_vertex(loc("LED"));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn missing_vertex_lookup_fails() {
        let graph = Graph::new();
        assert_eq!(
            graph.vertex("MOW").unwrap_err(),
            GraphError::VertexNotFound("MOW".into())
        );
    }

    #[test]
    fn add_edge_requires_both_endpoints() {
        let mut graph = Graph::new();
        graph.create_vertex(loc("MOW")).unwrap();

        let err = graph.add_edge("MOW", "LED", 10, route("P1")).unwrap_err();
        assert_eq!(err, GraphError::VertexNotFound("LED".into()));

        let err = graph.add_edge("LED", "MOW", 10, route("P1")).unwrap_err();
        assert_eq!(err, GraphError::VertexNotFound("LED".into()));

        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut graph = Graph::new();
        let mow = graph.create_vertex(loc("MOW")).unwrap();
        let led = graph.create_vertex(loc("LED")).unwrap();

        let e1 = graph.add_edge("MOW", "LED", 5, route("P1")).unwrap();
        let e2 = graph.add_edge("MOW", "LED", 3, route("P2")).unwrap();

        assert_ne!(e1, e2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.outgoing(mow), &[e1, e2]);
        assert!(graph.outgoing(led).is_empty());

        let edge = graph.edge(e2);
        assert_eq!(edge.from(), mow);
        assert_eq!(edge.to(), led);
        assert_eq!(edge.weight(), 3);
        assert_eq!(edge.route().provider, "P2");
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut graph = Graph::new();
        for code in ["C", "A", "B"] {
            graph.ensure_vertex(loc(code));
        }
        graph.add_edge("C", "A", 1, route("P1")).unwrap();
        graph.add_edge("A", "B", 2, route("P2")).unwrap();
        graph.add_edge("C", "B", 3, route("P3")).unwrap();

        let codes: Vec<&str> = graph.vertices().map(|(_, v)| v.id().as_str()).collect();
        assert_eq!(codes, vec!["C", "A", "B"]);

        let weights: Vec<u64> = graph.edges().map(|(_, e)| e.weight()).collect();
        assert_eq!(weights, vec![1, 2, 3]);
    }

    #[test]
    fn graph_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Graph>();
    }
}

//! Walk types.
//!
//! A [`Walk`] is the ordered list of edges a search found between two
//! vertices. It borrows the graph it came from and offers read-only
//! projections for reporting.

use serde::Serialize;

use crate::domain::LocationId;
use crate::graph::{Edge, EdgeId, Graph, GraphError, VertexId};

/// An ordered sequence of connected edges from a source to a target vertex.
///
/// # Invariants
///
/// - The first edge starts at the source, the last edge ends at the target
/// - Consecutive edges connect (`to` of one = `from` of the next)
/// - An empty walk has source equal to target
#[derive(Debug, Clone)]
pub struct Walk<'g> {
    graph: &'g Graph,
    source: VertexId,
    target: VertexId,
    edges: Vec<EdgeId>,
}

impl<'g> Walk<'g> {
    /// Constructs a walk, checking that the edges connect `source` to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DisconnectedWalk`] with the index of the first
    /// edge that does not continue from the previous vertex. An index equal
    /// to the number of edges means the walk does not end at `target`.
    pub fn new(
        graph: &'g Graph,
        source: VertexId,
        target: VertexId,
        edges: Vec<EdgeId>,
    ) -> Result<Self, GraphError> {
        let mut at = source;
        for (i, edge) in edges.iter().enumerate() {
            let edge = graph.edge(*edge);
            if edge.from() != at {
                return Err(GraphError::DisconnectedWalk { at: i });
            }
            at = edge.to();
        }
        if at != target {
            return Err(GraphError::DisconnectedWalk { at: edges.len() });
        }

        Ok(Walk {
            graph,
            source,
            target,
            edges,
        })
    }

    /// Returns the source vertex.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the target vertex.
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Returns the edge indices in walk order.
    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Iterates over the edges in walk order.
    pub fn edges(&self) -> impl Iterator<Item = &'g Edge> + '_ {
        let graph = self.graph;
        self.edges.iter().map(move |id| graph.edge(*id))
    }

    /// Returns the number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the walk has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the sum of the edge weights, saturating at `u64::MAX`.
    pub fn total_weight(&self) -> u64 {
        self.edges().map(Edge::weight).fold(0, u64::saturating_add)
    }

    /// Returns the visited locations: the source, then each edge destination.
    pub fn route(&self) -> Vec<&'g LocationId> {
        let graph = self.graph;
        std::iter::once(graph.location(self.source))
            .chain(self.edges().map(move |e| graph.location(e.to())))
            .collect()
    }

    /// Returns the provider of each edge.
    pub fn providers(&self) -> Vec<&'g str> {
        self.edges().map(|e| e.route().provider.as_str()).collect()
    }

    /// Returns the carrier of each edge.
    pub fn carriers(&self) -> Vec<&'g str> {
        self.edges().map(|e| e.route().carrier.as_str()).collect()
    }

    /// Returns the weight of each edge.
    pub fn weights(&self) -> Vec<u64> {
        self.edges().map(Edge::weight).collect()
    }

    /// Returns the segment count of each edge.
    pub fn segments(&self) -> Vec<u32> {
        self.edges().map(|e| e.route().segments).collect()
    }

    /// Returns an owned projection that no longer borrows the graph.
    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            route: self.route().into_iter().cloned().collect(),
            providers: self.providers().into_iter().map(str::to_string).collect(),
            carriers: self.carriers().into_iter().map(str::to_string).collect(),
            weights: self.weights(),
            total_weight: self.total_weight(),
        }
    }
}

/// Owned, display-ready view of a walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    /// Visited locations, source first
    pub route: Vec<LocationId>,
    /// Provider of each edge
    pub providers: Vec<String>,
    /// Carrier of each edge
    pub carriers: Vec<String>,
    /// Weight of each edge
    pub weights: Vec<u64>,
    /// Sum of `weights`
    pub total_weight: u64,
}

impl RouteSummary {
    /// Returns the number of trips in the route.
    pub fn trip_count(&self) -> usize {
        self.weights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RouteInfo;

    fn loc(s: &str) -> LocationId {
        LocationId::parse(s).unwrap()
    }

    /// X -> Y (10, P1/C1), Y -> Z (7, P2/C2), X -> Z (25, P3/C3)
    fn sample_graph() -> (Graph, Vec<EdgeId>) {
        let mut graph = Graph::new();
        for code in ["X", "Y", "Z"] {
            graph.create_vertex(loc(code)).unwrap();
        }
        let edges = vec![
            graph
                .add_edge("X", "Y", 10, RouteInfo::new("P1", "C1", 1))
                .unwrap(),
            graph
                .add_edge("Y", "Z", 7, RouteInfo::new("P2", "C2", 2))
                .unwrap(),
            graph
                .add_edge("X", "Z", 25, RouteInfo::new("P3", "C3", 1))
                .unwrap(),
        ];
        (graph, edges)
    }

    fn vid(graph: &Graph, s: &str) -> VertexId {
        graph.vertex_id(s).unwrap()
    }

    #[test]
    fn connected_walk_projections() {
        let (graph, edges) = sample_graph();
        let walk = Walk::new(
            &graph,
            vid(&graph, "X"),
            vid(&graph, "Z"),
            vec![edges[0], edges[1]],
        )
        .unwrap();

        assert_eq!(walk.len(), 2);
        assert_eq!(walk.total_weight(), 17);
        let route: Vec<&str> = walk.route().iter().map(|l| l.as_str()).collect();
        assert_eq!(route, vec!["X", "Y", "Z"]);
        assert_eq!(walk.providers(), vec!["P1", "P2"]);
        assert_eq!(walk.carriers(), vec!["C1", "C2"]);
        assert_eq!(walk.weights(), vec![10, 7]);
        assert_eq!(walk.segments(), vec![1, 2]);
    }

    #[test]
    fn summary_matches_walk() {
        let (graph, edges) = sample_graph();
        let walk = Walk::new(&graph, vid(&graph, "X"), vid(&graph, "Z"), vec![edges[2]]).unwrap();

        let summary = walk.summary();
        assert_eq!(summary.route, vec![loc("X"), loc("Z")]);
        assert_eq!(summary.providers, vec!["P3".to_string()]);
        assert_eq!(summary.carriers, vec!["C3".to_string()]);
        assert_eq!(summary.weights, vec![25]);
        assert_eq!(summary.total_weight, 25);
        assert_eq!(summary.trip_count(), 1);
    }

    #[test]
    fn empty_walk_requires_same_endpoints() {
        let (graph, _) = sample_graph();
        let walk = Walk::new(&graph, vid(&graph, "Y"), vid(&graph, "Y"), vec![]).unwrap();
        assert!(walk.is_empty());
        assert_eq!(walk.total_weight(), 0);
        assert_eq!(walk.route(), vec![&loc("Y")]);

        let err = Walk::new(&graph, vid(&graph, "X"), vid(&graph, "Y"), vec![]).unwrap_err();
        assert_eq!(err, GraphError::DisconnectedWalk { at: 0 });
    }

    #[test]
    fn disconnected_edges_rejected() {
        let (graph, edges) = sample_graph();

        // X -> Y then X -> Z: second edge does not start at Y
        let err = Walk::new(
            &graph,
            vid(&graph, "X"),
            vid(&graph, "Z"),
            vec![edges[0], edges[2]],
        )
        .unwrap_err();
        assert_eq!(err, GraphError::DisconnectedWalk { at: 1 });

        // First edge does not start at the source
        let err = Walk::new(&graph, vid(&graph, "Y"), vid(&graph, "Z"), vec![edges[0]]).unwrap_err();
        assert_eq!(err, GraphError::DisconnectedWalk { at: 0 });
    }

    #[test]
    fn summary_serializes_to_json() {
        let (graph, edges) = sample_graph();
        let walk = Walk::new(&graph, vid(&graph, "Y"), vid(&graph, "Z"), vec![edges[1]]).unwrap();

        let json = serde_json::to_value(walk.summary()).unwrap();
        assert_eq!(json["route"], serde_json::json!(["Y", "Z"]));
        assert_eq!(json["total_weight"], 7);
    }

    #[test]
    fn total_weight_saturates() {
        let mut graph = Graph::new();
        for code in ["X", "Y", "Z"] {
            graph.create_vertex(loc(code)).unwrap();
        }
        let edges = vec![
            graph
                .add_edge("X", "Y", u64::MAX, RouteInfo::new("P1", "C1", 1))
                .unwrap(),
            graph
                .add_edge("Y", "Z", 1, RouteInfo::new("P2", "C2", 1))
                .unwrap(),
        ];
        let walk = Walk::new(&graph, vid(&graph, "X"), vid(&graph, "Z"), edges).unwrap();

        assert_eq!(walk.total_weight(), u64::MAX);
        assert_eq!(walk.summary().total_weight, u64::MAX);
    }
}

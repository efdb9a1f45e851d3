//! Text report for a batch run.

use std::fmt;
use std::time::Duration;

use crate::domain::DirectionQuery;
use crate::planner::{BatchReport, RouteSummary};

/// One found route, formatted as a single report line.
///
/// ```text
/// X Z (25) FOUND: X -> Y -> Z via P1 -> P1 with costs 10 -> 10 (20)
/// ```
pub struct FoundRoute<'a> {
    /// The direction as it was asked, before agglomeration
    pub query: &'a DirectionQuery,
    /// The route found for it
    pub summary: &'a RouteSummary,
}

impl fmt::Display for FoundRoute<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) FOUND: {} via {} with costs {} ({})",
            self.query.departure,
            self.query.arrival,
            self.query.expected_weight,
            join(&self.summary.route),
            join(&self.summary.providers),
            join(&self.summary.weights),
            self.summary.total_weight,
        )
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Totals for a run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Trip rows loaded
    pub trips: usize,
    /// Trip rows dropped as malformed
    pub skipped_trips: usize,
    /// Direction rows dropped as malformed
    pub skipped_directions: usize,
    /// Vertices in the built graph
    pub vertices: usize,
    /// Edges in the built graph
    pub edges: usize,
    /// Wall time from loading to the end of the searches
    pub elapsed: Duration,
    /// Directions with a route
    pub found: usize,
    /// Directions whose locations exist but are not connected
    pub unreachable: usize,
    /// Directions naming a location that is not in the graph
    pub missing: usize,
}

impl RunSummary {
    /// Fill the search totals from a batch report.
    pub fn with_batch(mut self, batch: &BatchReport) -> Self {
        self.found = batch.found_count();
        self.unreachable = batch.unreachable_count();
        self.missing = batch.missing_count();
        self
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trips: {}", self.trips)?;
        if self.skipped_trips > 0 {
            writeln!(f, "Skipped trip rows: {}", self.skipped_trips)?;
        }
        if self.skipped_directions > 0 {
            writeln!(f, "Skipped direction rows: {}", self.skipped_directions)?;
        }
        writeln!(f, "Vertices: {}", self.vertices)?;
        writeln!(f, "Edges: {}", self.edges)?;
        writeln!(f, "Processing time: {} seconds", self.elapsed.as_secs_f64())?;
        writeln!(f, "Unreachable: {}", self.unreachable)?;
        writeln!(f, "Unknown locations: {}", self.missing)?;
        write!(f, "Found {} shortest routes", self.found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocationId;

    fn loc(s: &str) -> LocationId {
        LocationId::parse(s).unwrap()
    }

    #[test]
    fn found_route_line() {
        let query = DirectionQuery::new(loc("X"), loc("Z"), 25, 3);
        let summary = RouteSummary {
            route: vec![loc("X"), loc("Y"), loc("Z")],
            providers: vec!["P1".into(), "P2".into()],
            carriers: vec!["C1".into(), "C2".into()],
            weights: vec![10, 10],
            total_weight: 20,
        };

        let line = FoundRoute {
            query: &query,
            summary: &summary,
        }
        .to_string();
        assert_eq!(
            line,
            "X Z (25) FOUND: X -> Y -> Z via P1 -> P2 with costs 10 -> 10 (20)"
        );
    }

    #[test]
    fn empty_route_line() {
        let query = DirectionQuery::new(loc("X"), loc("X"), 0, 0);
        let summary = RouteSummary {
            route: vec![loc("X")],
            providers: vec![],
            carriers: vec![],
            weights: vec![],
            total_weight: 0,
        };

        let line = FoundRoute {
            query: &query,
            summary: &summary,
        }
        .to_string();
        assert_eq!(line, "X X (0) FOUND: X via  with costs  (0)");
    }

    #[test]
    fn run_summary_text() {
        let summary = RunSummary {
            trips: 3,
            skipped_trips: 1,
            skipped_directions: 0,
            vertices: 3,
            edges: 3,
            elapsed: Duration::from_millis(1500),
            found: 2,
            unreachable: 1,
            missing: 0,
        };

        let text = summary.to_string();
        assert!(text.starts_with("Trips: 3\nSkipped trip rows: 1\nVertices: 3\nEdges: 3\n"));
        assert!(text.contains("Processing time: 1.5 seconds"));
        assert!(text.ends_with("Found 2 shortest routes"));
    }

    #[test]
    fn run_summary_reports_direction_skips() {
        let summary = RunSummary {
            trips: 3,
            skipped_directions: 2,
            ..RunSummary::default()
        };

        let text = summary.to_string();
        assert!(text.starts_with("Trips: 3\nSkipped direction rows: 2\nVertices: 0\n"));
        assert!(!text.contains("Skipped trip rows"));
    }
}

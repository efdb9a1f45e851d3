//! Graph error types.
//!
//! These are caller-input and contract failures of the graph layer. An
//! unreachable target is not an error; see [`crate::planner::SearchOutcome`].

use crate::domain::LocationId;

/// Errors raised by graph lookups, mutation and walk construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Referenced location is not a vertex of the graph
    #[error("location {0} not found in graph")]
    VertexNotFound(String),

    /// Attempted to create a vertex that already exists
    #[error("location {0} already exists in graph")]
    DuplicateVertex(LocationId),

    /// Consecutive walk edges do not share a vertex
    #[error("walk is disconnected at edge {at}")]
    DisconnectedWalk { at: usize },
}

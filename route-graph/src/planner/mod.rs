//! Route planner using Dijkstra search.
//!
//! This module answers: "what is the cheapest chain of trips from this
//! location to that one?"
//!
//! Every search is single-source Dijkstra over the immutable route graph.
//! Searches share nothing but the graph, so a batch of direction queries
//! can run concurrently (see [`search_directions`]).

mod batch;
mod config;
mod dijkstra;
mod search;
mod walk;

pub use batch::{BatchReport, DirectionOutcome, DirectionResult, search_directions};
pub use config::SearchConfig;
pub use dijkstra::{SearchOutcome, ShortestPaths};
pub use search::{Planner, search};
pub use walk::{RouteSummary, Walk};

//! Route graph engine.
//!
//! Builds a weighted, directed multigraph from point-to-point trip records
//! and answers: "what is the cheapest chain of trips from here to there?"

pub mod agglomeration;
pub mod config;
pub mod domain;
pub mod graph;
pub mod input;
pub mod planner;
pub mod report;

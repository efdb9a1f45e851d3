//! Route graph model and builder.
//!
//! A [`Graph`] is a directed multigraph whose vertices are locations and
//! whose edges are trips. It is built once by [`GraphBuilder`] and only read
//! afterwards.

mod builder;
mod error;
mod model;

pub use builder::{BuildStats, GraphBuilder, build_graph};
pub use error::GraphError;
pub use model::{Edge, EdgeId, Graph, RouteInfo, Vertex, VertexId};

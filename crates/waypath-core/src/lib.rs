//! **waypath-core**: graph data for route search.
//!
//! This crate provides the data the search strategies in `waypath-paths`
//! operate on: node identifiers and 2-D coordinates, the read-only
//! [`Graph`] store with sorted forward and reverse adjacency, the textual
//! [`Problem`] format, and a seeded [`ProblemGen`] for synthetic instances.

pub mod generate;
pub mod geom;
pub mod graph;
pub mod problem;

pub use generate::{GenParams, ProblemGen};
pub use geom::Point;
pub use graph::{Cost, Graph, Neighbor, NodeId};
pub use problem::{Problem, ProblemError};

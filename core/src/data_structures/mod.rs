//! Core data structures shared by the algorithms

pub mod disjoint_set;
pub mod graph;

pub use self::disjoint_set::DisjointSet;
pub use self::graph::{Edge, EdgeReport, Graph, GraphError, MatchingReport};

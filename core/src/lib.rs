//! Blossom: maximum-cardinality matching in general graphs
//!
//! This crate implements Edmonds' blossom algorithm for maximum-cardinality
//! matching in arbitrary undirected graphs, providing:
//! - A graph model holding edges, adjacency, and the in-place matching state.
//! - A union-find partition with intra-class member enumeration, the
//!   structure that lets the search treat a contracted odd cycle as a single
//!   node while still reaching every original incident edge.
//! - The alternating-tree search with blossom contraction and expansion.
//! - Independent validation utilities for checking results.
//!
//! # Example
//!
//! ```
//! use blossom_core::{find_maximum_matching, Graph};
//!
//! // A 5-cycle with a pendant edge: the matching must use (4, 5).
//! let mut graph = Graph::new(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (4, 5)]).unwrap();
//! let result = find_maximum_matching(&mut graph);
//! assert_eq!(result.size, 3);
//! assert!(graph.is_matched(5));
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod validation;

pub use crate::algorithm::graph::matching::{
    find_maximum_matching, MatchingResult, MatchingStatistics, MaximumMatching,
};
pub use crate::data_structures::disjoint_set::DisjointSet;
pub use crate::data_structures::graph::{Edge, EdgeReport, Graph, GraphError, MatchingReport};
pub use crate::validation::correctness::{validate_matching, ValidationError};

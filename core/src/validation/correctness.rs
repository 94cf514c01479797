//! Independent correctness checks for matchings
//!
//! Structural validation of a matching held on a graph's edge flags, plus an
//! exhaustive optimum computation usable as a test oracle on small graphs.
//! Both are deliberately independent of the blossom solver: they read nothing
//! but the graph, so a solver bug cannot hide inside a shared helper.

use thiserror::Error;

use crate::data_structures::graph::Graph;

/// Violations of the matching invariants.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("node {node} is covered by matched edges {first} and {second}")]
    NodeCoveredTwice {
        node: usize,
        first: usize,
        second: usize,
    },

    #[error("matched edge {edge} is a self-loop on node {node}")]
    MatchedSelfLoop { edge: usize, node: usize },
}

/// Check that the matched edge flags form a valid matching: no self-loop is
/// matched and no node is an endpoint of two distinct matched edges. O(n + m).
pub fn validate_matching(graph: &Graph) -> Result<(), ValidationError> {
    let mut cover: Vec<Option<usize>> = vec![None; graph.node_count()];
    for edge in graph.matching() {
        let (u, v) = graph.endpoints(edge);
        if u == v {
            return Err(ValidationError::MatchedSelfLoop { edge, node: u });
        }
        for node in [u, v] {
            if let Some(first) = cover[node] {
                return Err(ValidationError::NodeCoveredTwice {
                    node,
                    first,
                    second: edge,
                });
            }
            cover[node] = Some(edge);
        }
    }
    Ok(())
}

/// Cardinality of a maximum matching, found by exhaustive branch-and-bound
/// over edge subsets. Exponential in the edge count; a test oracle for small
/// graphs, not a production path.
pub fn exhaustive_maximum_matching_size(graph: &Graph) -> usize {
    fn recurse(graph: &Graph, edge: usize, used: &mut [bool]) -> usize {
        if edge == graph.edge_count() {
            return 0;
        }
        let mut best = recurse(graph, edge + 1, used);
        let (u, v) = graph.endpoints(edge);
        if u != v && !used[u] && !used[v] {
            used[u] = true;
            used[v] = true;
            best = best.max(1 + recurse(graph, edge + 1, used));
            used[u] = false;
            used[v] = false;
        }
        best
    }

    let mut used = vec![false; graph.node_count()];
    recurse(graph, 0, &mut used)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_matching_is_valid() {
        let graph = Graph::new(3, &[(0, 1), (1, 2)]).unwrap();
        assert!(validate_matching(&graph).is_ok());
    }

    #[test]
    fn test_detects_double_cover() {
        let mut graph = Graph::new(3, &[(0, 1), (1, 2)]).unwrap();
        graph.set_matched(0, true);
        graph.set_matched(1, true);
        match validate_matching(&graph) {
            Err(ValidationError::NodeCoveredTwice { node, first, second }) => {
                assert_eq!(node, 1);
                assert_eq!(first, 0);
                assert_eq!(second, 1);
            }
            other => panic!("expected double-cover error, got {other:?}"),
        }
    }

    #[test]
    fn test_detects_matched_self_loop() {
        let mut graph = Graph::new(2, &[(0, 0), (0, 1)]).unwrap();
        graph.set_matched(0, true);
        assert!(matches!(
            validate_matching(&graph),
            Err(ValidationError::MatchedSelfLoop { edge: 0, node: 0 })
        ));
    }

    #[test]
    fn test_exhaustive_optimum_on_known_graphs() {
        let triangle = Graph::new(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        assert_eq!(exhaustive_maximum_matching_size(&triangle), 1);

        let path = Graph::new(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        assert_eq!(exhaustive_maximum_matching_size(&path), 2);

        let pendant =
            Graph::new(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (4, 5)]).unwrap();
        assert_eq!(exhaustive_maximum_matching_size(&pendant), 3);

        let loops = Graph::new(2, &[(0, 0), (1, 1)]).unwrap();
        assert_eq!(exhaustive_maximum_matching_size(&loops), 0);
    }
}

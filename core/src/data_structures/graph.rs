//! Graph model for the matching algorithm
//!
//! An undirected graph held as an edge arena plus per-node adjacency lists of
//! edge indices, built once at construction time. The only state that mutates
//! afterwards is the per-edge `matched` flag and the per-node matching
//! bookkeeping derived from it; nodes are never removed, only marked erased.
//!
//! Self-loops and parallel edges are stored exactly as given. A self-loop can
//! never be part of a matching and is ignored when node flags are recomputed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Construction-time errors. Everything after a successful construction is
/// covered by the index contract and panics on misuse instead of returning
/// errors.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("graph must contain at least one node")]
    EmptyUniverse,

    #[error("edge ({src}, {target}) references node {offending}, but the graph has {nodes} nodes")]
    EndpointOutOfRange {
        src: usize,
        target: usize,
        offending: usize,
        nodes: usize,
    },
}

/// One undirected edge. Endpoints are fixed at construction; only `matched`
/// ever changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub matched: bool,
}

impl Edge {
    fn new(source: usize, target: usize) -> Self {
        Self {
            source,
            target,
            matched: false,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

#[derive(Debug, Clone)]
struct Node {
    /// Indices of incident edges, in input order. A self-loop appears once.
    adjacency: Vec<usize>,
    /// Removed from all further consideration; monotonic, never unset.
    erased: bool,
    /// Whether this node (or, mid-search, the class it represents) currently
    /// carries a matched edge.
    matched: bool,
    /// The matched incident edge, when `matched` holds.
    matcher: Option<usize>,
}

impl Node {
    fn new() -> Self {
        Self {
            adjacency: Vec::new(),
            erased: false,
            matched: false,
            matcher: None,
        }
    }
}

/// The mutable state the matching algorithm operates on in place.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Build a graph over nodes `0..n` from an endpoint list. O(n + m).
    pub fn new(n: usize, endpoint_pairs: &[(usize, usize)]) -> Result<Self, GraphError> {
        if n == 0 {
            return Err(GraphError::EmptyUniverse);
        }

        let mut nodes: Vec<Node> = (0..n).map(|_| Node::new()).collect();
        let mut edges = Vec::with_capacity(endpoint_pairs.len());

        for &(source, target) in endpoint_pairs {
            for endpoint in [source, target] {
                if endpoint >= n {
                    return Err(GraphError::EndpointOutOfRange {
                        src: source,
                        target,
                        offending: endpoint,
                        nodes: n,
                    });
                }
            }

            let index = edges.len();
            edges.push(Edge::new(source, target));
            nodes[source].adjacency.push(index);
            if target != source {
                nodes[target].adjacency.push(index);
            }
        }

        Ok(Self { nodes, edges })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, index: usize) -> &Edge {
        &self.edges[index]
    }

    pub fn endpoints(&self, index: usize) -> (usize, usize) {
        let edge = &self.edges[index];
        (edge.source, edge.target)
    }

    /// The endpoint of `index` that is not `node`. For a self-loop this is
    /// the node itself.
    pub fn other_endpoint(&self, index: usize, node: usize) -> usize {
        let edge = &self.edges[index];
        debug_assert!(self.is_incident(index, node));
        if edge.source == node {
            edge.target
        } else {
            edge.source
        }
    }

    pub fn is_incident(&self, index: usize, node: usize) -> bool {
        let edge = &self.edges[index];
        edge.source == node || edge.target == node
    }

    /// Incident edge indices of `node`, in input order.
    pub fn adjacency(&self, node: usize) -> &[usize] {
        &self.nodes[node].adjacency
    }

    pub fn is_matched(&self, index: usize) -> bool {
        self.edges[index].matched
    }

    pub fn set_matched(&mut self, index: usize, matched: bool) {
        self.edges[index].matched = matched;
    }

    pub fn toggle_matched(&mut self, index: usize) {
        self.edges[index].matched = !self.edges[index].matched;
    }

    pub fn erase(&mut self, node: usize) {
        self.nodes[node].erased = true;
    }

    pub fn is_erased(&self, node: usize) -> bool {
        self.nodes[node].erased
    }

    pub fn node_matched(&self, node: usize) -> bool {
        self.nodes[node].matched
    }

    pub fn node_matcher(&self, node: usize) -> Option<usize> {
        self.nodes[node].matcher
    }

    /// Overwrite a node's matching bookkeeping without consulting edge flags.
    /// Used by the search to mirror class state onto a representative; the
    /// flags of every affected node are recomputed before the search returns.
    pub fn set_node_matching(&mut self, node: usize, matched: bool, matcher: Option<usize>) {
        self.nodes[node].matched = matched;
        self.nodes[node].matcher = matcher;
    }

    /// Recompute `matched`/`matcher` for `node` from the current edge flags.
    /// Self-loops never match their endpoint.
    pub fn refresh_node(&mut self, node: usize) {
        let matcher = self.nodes[node]
            .adjacency
            .iter()
            .copied()
            .find(|&e| self.edges[e].matched && !self.edges[e].is_self_loop());
        self.nodes[node].matched = matcher.is_some();
        self.nodes[node].matcher = matcher;
    }

    /// Recompute the matching bookkeeping of every node. O(n + m).
    pub fn refresh_all_nodes(&mut self) {
        for node in 0..self.nodes.len() {
            self.refresh_node(node);
        }
    }

    /// Indices of currently matched edges, in input order.
    pub fn matching(&self) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.matched)
            .map(|(i, _)| i)
    }

    pub fn matching_size(&self) -> usize {
        self.edges.iter().filter(|e| e.matched).count()
    }

    /// Snapshot of the matching in the output contract's shape: every input
    /// edge, in input order, with its membership in the matching.
    pub fn report(&self) -> MatchingReport {
        MatchingReport {
            edges: self
                .edges
                .iter()
                .map(|e| EdgeReport {
                    source: e.source,
                    target: e.target,
                    matched: e.matched,
                })
                .collect(),
            size: self.matching_size(),
        }
    }
}

/// Serializable per-edge view of a matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeReport {
    pub source: usize,
    pub target: usize,
    pub matched: bool,
}

/// Serializable result report: one entry per input edge plus the matching
/// cardinality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingReport {
    pub edges: Vec<EdgeReport>,
    pub size: usize,
}

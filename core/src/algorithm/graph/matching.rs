//! Maximum-Cardinality Matching via Edmonds' Blossom Algorithm
//!
//! This module implements Edmonds' blossom algorithm for maximum-cardinality
//! matching in general (non-bipartite) undirected graphs. The search grows an
//! alternating tree from an unmatched root, contracts every odd cycle it
//! meets into a single class of a union-find partition, and either finds an
//! augmenting path or proves the root unmatchable.
//!
//! # Theoretical Foundation
//!
//! - **Berge's theorem**: a matching is maximum iff it admits no augmenting
//!   path, so repeatedly augmenting until no path exists is exact.
//! - **Edmonds' blossom lemma**: contracting an odd alternating cycle to a
//!   single node preserves the existence of augmenting paths, so the search
//!   may treat a blossom as one node and restore a consistent alternating
//!   matching inside it after augmenting.
//! - A failed search certifies that its entire alternating tree can be
//!   discarded from future consideration (Gallai-Edmonds structure).
//!
//! # Algorithmic Complexity
//!
//! One search invocation scans each edge O(1) times per labeling or
//! contraction event and resolves endpoints through the union-find, giving
//! O(m * alpha(n)) per invocation. The driver runs at most O(n) invocations,
//! for O(n * m * alpha(n)) overall.
//!
//! Copyright (c) 2025 Theo Marchal. All rights reserved.

use std::collections::{BTreeSet, HashSet, VecDeque};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::data_structures::disjoint_set::DisjointSet;
use crate::data_structures::graph::Graph;

/// Position of a class relative to the current alternating tree.
///
/// `Outer` classes sit at even depth and may extend the tree or close a
/// blossom; `Inner` classes sit at odd depth and are reached through an
/// unmatched edge. A class is never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Label {
    #[default]
    Unvisited,
    Outer,
    Inner,
}

/// Per-class tree state, stored as the union-find payload and authoritative
/// at the class representative.
#[derive(Debug, Clone, Default)]
struct TreeNode {
    label: Label,
    /// Edge linking this class toward the root; `None` on the root class.
    prec: Option<usize>,
    /// Depth below the root; used to align the two branches of a cycle walk.
    dist: usize,
}

/// One contracted odd cycle, recorded at contraction time and consumed once
/// during expansion, in reverse contraction order.
#[derive(Debug, Clone)]
struct Cycle {
    /// Cyclic edge sequence: `edges[p]` joins the classes at positions `p`
    /// and `p + 1` (mod length).
    edges: Vec<usize>,
    /// Original member nodes of the class at each cycle position, captured
    /// from the pre-contraction member enumeration.
    groups: Vec<Vec<usize>>,
    /// Tree edge connecting the cycle to the rest of the tree, when the
    /// cycle does not contain the root class.
    in_edge: Option<usize>,
}

/// Scratch state of one search invocation. Constructed fresh per invocation
/// and dropped at its end; contraction decisions never outlive the search.
struct SearchContext {
    partition: DisjointSet<TreeNode>,
    /// FIFO worklist of candidate edge indices.
    pending: VecDeque<usize>,
    /// Cycles contracted so far, in discovery order.
    cycles: Vec<Cycle>,
}

impl SearchContext {
    fn new(graph: &Graph, root: usize) -> Self {
        let mut partition = DisjointSet::new(graph.node_count());
        partition.set_value(
            root,
            TreeNode {
                label: Label::Outer,
                prec: None,
                dist: 0,
            },
        );
        Self {
            partition,
            pending: graph.adjacency(root).iter().copied().collect(),
            cycles: Vec::new(),
        }
    }

    fn label(&self, class: usize) -> Label {
        self.partition.value(class).label
    }
}

/// How one search invocation ended.
enum SearchOutcome {
    /// An augmenting path was found: its edge sequence, starting at the far
    /// unmatched endpoint and ending at the root class.
    Augmented { path: Vec<usize>, far: usize },
    /// The worklist drained without a path; the root is unmatchable.
    Exhausted,
}

/// Counters describing one solver run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchingStatistics {
    /// Search invocations performed by the driver loop.
    pub invocations: usize,
    /// Worklist pops across all invocations.
    pub edges_examined: usize,
    /// Successful augmentations; equals the final matching cardinality when
    /// the solver starts from an empty matching.
    pub augmentations: usize,
    pub blossoms_contracted: usize,
    pub blossoms_expanded: usize,
    /// Nodes permanently removed after failed searches.
    pub nodes_erased: usize,
}

/// Outcome of a solver run. The matching itself also lives on the graph's
/// edge flags; this captures it in index form together with run statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingResult {
    /// Matched edge indices, in input order.
    pub matched_edges: Vec<usize>,
    /// Matching cardinality.
    pub size: usize,
    pub statistics: MatchingStatistics,
}

/// Maximum-cardinality matching solver.
///
/// Operates on a [`Graph`] in place: the final matching is the set of edges
/// whose `matched` flag is set when [`solve`](Self::solve) returns. Nodes of
/// subtrees proven unmatchable stay erased on the graph, so a later `solve`
/// on the same graph skips them and performs no further work.
#[derive(Debug, Default)]
pub struct MaximumMatching {
    statistics: MatchingStatistics,
}

impl MaximumMatching {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statistics(&self) -> &MatchingStatistics {
        &self.statistics
    }

    /// Grow the matching on `graph` to maximum cardinality.
    ///
    /// An existing valid matching on the edge flags is kept and extended;
    /// starting from all-unmatched edges yields the maximum matching of the
    /// graph. The driver is an explicit loop over unmatched roots rather
    /// than recursion on the residual graph, so the call stack stays flat.
    pub fn solve(&mut self, graph: &mut Graph) -> MatchingResult {
        self.statistics = MatchingStatistics::default();
        graph.refresh_all_nodes();

        let mut unmatched: BTreeSet<usize> = (0..graph.node_count())
            .filter(|&node| !graph.is_erased(node) && !graph.node_matched(node))
            .collect();
        debug!(
            "matching {} nodes / {} edges, {} unmatched roots to try",
            graph.node_count(),
            graph.edge_count(),
            unmatched.len()
        );

        while let Some(root) = unmatched.pop_first() {
            self.statistics.invocations += 1;

            let (ctx, outcome) = self.search(graph, root);
            match outcome {
                SearchOutcome::Augmented { path, far } => {
                    trace!(
                        "root {root}: augmenting path of {} edges ending at {far}",
                        path.len()
                    );
                    toggle_path(graph, &path);
                    for &edge in &path {
                        let (u, v) = graph.endpoints(edge);
                        graph.refresh_node(u);
                        graph.refresh_node(v);
                    }
                    unmatched.remove(&far);
                    self.statistics.augmentations += 1;

                    // Most recently contracted first, so nested cycles see
                    // the matched edge their enclosing cycle assigned them.
                    for cycle in ctx.cycles.into_iter().rev() {
                        self.expand(graph, cycle);
                    }
                }
                SearchOutcome::Exhausted => {
                    trace!("root {root}: no augmenting path, erasing its tree");
                    for node in 0..graph.node_count() {
                        if ctx.label(node) != Label::Unvisited {
                            graph.erase(node);
                            self.statistics.nodes_erased += 1;
                        }
                    }
                }
            }
        }

        let matched_edges: Vec<usize> = graph.matching().collect();
        debug!(
            "done: matching size {}, {} augmentations, {} blossoms",
            matched_edges.len(),
            self.statistics.augmentations,
            self.statistics.blossoms_contracted
        );
        MatchingResult {
            size: matched_edges.len(),
            matched_edges,
            statistics: self.statistics.clone(),
        }
    }

    /// One alternating-tree search from `root`.
    fn search(&mut self, graph: &mut Graph, root: usize) -> (SearchContext, SearchOutcome) {
        let mut ctx = SearchContext::new(graph, root);

        while let Some(edge) = ctx.pending.pop_front() {
            self.statistics.edges_examined += 1;
            let (u, v) = graph.endpoints(edge);
            let ru = ctx.partition.find(u);
            let rv = ctx.partition.find(v);

            if ru == rv {
                // Internal to a contracted class (or a self-loop).
                continue;
            }
            if graph.is_erased(ru) || graph.is_erased(rv) {
                continue;
            }

            match (ctx.label(ru), ctx.label(rv)) {
                (Label::Outer, Label::Outer) => self.contract(graph, &mut ctx, edge, ru, rv),
                (Label::Outer, _) => {
                    if let Some(outcome) = self.probe(graph, &mut ctx, edge, ru, rv) {
                        return (ctx, outcome);
                    }
                }
                (_, Label::Outer) => {
                    if let Some(outcome) = self.probe(graph, &mut ctx, edge, rv, ru) {
                        return (ctx, outcome);
                    }
                }
                _ => {
                    // No outer endpoint. Unreachable while the worklist
                    // invariant holds; skipped rather than asserted.
                    trace!("edge {edge} has no outer endpoint, skipped");
                }
            }
        }

        (ctx, SearchOutcome::Exhausted)
    }

    /// Handle an edge from the outer class `outer` to `other`, which is
    /// inner or unvisited. Returns the outcome if the search is over.
    fn probe(
        &mut self,
        graph: &mut Graph,
        ctx: &mut SearchContext,
        edge: usize,
        outer: usize,
        other: usize,
    ) -> Option<SearchOutcome> {
        match ctx.label(other) {
            // Both ends already alternately reachable; nothing to learn.
            Label::Inner => None,
            Label::Outer => unreachable!("outer-outer edges are contracted, not probed"),
            Label::Unvisited => {
                // An unvisited class is a singleton, so `other` is the
                // original node itself.
                if !graph.node_matched(other) {
                    let path = self.reconstruct_path(graph, ctx, edge, outer);
                    return Some(SearchOutcome::Augmented { path, far: other });
                }

                // Tree extension: the discovered node becomes inner, its
                // matched partner becomes the next outer frontier class.
                let depth = ctx.partition.value(outer).dist;
                ctx.partition.set_value(
                    other,
                    TreeNode {
                        label: Label::Inner,
                        prec: Some(edge),
                        dist: depth + 1,
                    },
                );

                let matcher = graph
                    .node_matcher(other)
                    .expect("matched node carries its matching edge");
                let partner = graph.other_endpoint(matcher, other);
                debug_assert_eq!(ctx.label(partner), Label::Unvisited);
                ctx.partition.set_value(
                    partner,
                    TreeNode {
                        label: Label::Outer,
                        prec: Some(matcher),
                        dist: depth + 2,
                    },
                );
                ctx.pending.extend(graph.adjacency(partner).iter().copied());
                None
            }
        }
    }

    /// Rebuild the augmenting path: the triggering edge, then the `prec`
    /// links from the outer class back to the root class.
    fn reconstruct_path(
        &mut self,
        graph: &Graph,
        ctx: &mut SearchContext,
        edge: usize,
        outer: usize,
    ) -> Vec<usize> {
        let mut path = vec![edge];
        let mut class = outer;
        while let Some((prec, parent)) = tree_parent(graph, &mut ctx.partition, class) {
            path.push(prec);
            class = parent;
        }
        path
    }

    /// Contract the odd cycle closed by `edge` between the outer classes
    /// `ru` and `rv`.
    fn contract(
        &mut self,
        graph: &mut Graph,
        ctx: &mut SearchContext,
        edge: usize,
        ru: usize,
        rv: usize,
    ) {
        // Walk both branches toward the root until they converge; depths
        // are aligned first so the lockstep walk meets exactly at the
        // common ancestor.
        let mut side_u = BranchWalk::new(ru);
        let mut side_v = BranchWalk::new(rv);
        while ctx.partition.value(side_u.tip).dist > ctx.partition.value(side_v.tip).dist {
            side_u.step(graph, &mut ctx.partition);
        }
        while ctx.partition.value(side_v.tip).dist > ctx.partition.value(side_u.tip).dist {
            side_v.step(graph, &mut ctx.partition);
        }
        while side_u.tip != side_v.tip {
            side_u.step(graph, &mut ctx.partition);
            side_v.step(graph, &mut ctx.partition);
        }
        let ancestor = side_u.tip;
        side_u.classes.pop();
        side_v.classes.pop();

        // Cyclic order: ancestor, down the u-branch to `ru`, across `edge`
        // to `rv`, back up the v-branch to the ancestor.
        let mut edges: Vec<usize> = side_u.edges.iter().rev().copied().collect();
        edges.push(edge);
        edges.extend(&side_v.edges);
        let mut classes = vec![ancestor];
        classes.extend(side_u.classes.iter().rev());
        classes.extend(&side_v.classes);
        debug_assert_eq!(edges.len(), classes.len());
        debug_assert!(edges.len() >= 3 && edges.len() % 2 == 1);

        // The surviving class mirrors the closest-to-root member, keeping
        // the tree above the contraction consistent.
        let anchor = ctx.partition.value(ancestor).clone();
        let anchor_matched = graph.node_matched(ancestor);
        let anchor_matcher = graph.node_matcher(ancestor);

        // Enumerate each class before the union erases the boundaries:
        // every member's incident edges re-enter the worklist, and the
        // member lists become the cycle record's groups.
        let mut groups = Vec::with_capacity(classes.len());
        for &class in &classes {
            let members: Vec<usize> = ctx.partition.members(class).collect();
            for &member in &members {
                ctx.pending.extend(graph.adjacency(member).iter().copied());
            }
            groups.push(members);
        }

        for &class in &classes {
            ctx.partition.union(ancestor, class);
        }
        let survivor = ctx.partition.find(ancestor);
        ctx.partition.set_value(
            survivor,
            TreeNode {
                label: Label::Outer,
                prec: anchor.prec,
                dist: anchor.dist,
            },
        );
        graph.set_node_matching(survivor, anchor_matched, anchor_matcher);

        trace!(
            "contracted a blossom of {} classes anchored at node {ancestor}",
            classes.len()
        );
        ctx.cycles.push(Cycle {
            edges,
            groups,
            in_edge: anchor.prec,
        });
        self.statistics.blossoms_contracted += 1;
    }

    /// Expand one contracted cycle back into a consistent alternating
    /// matching on its original nodes.
    ///
    /// The cycle's own edges are rewritten from scratch: positions whose
    /// group already carries a matched edge leaving the group are anchors,
    /// and each arc between consecutive anchors is swept with alternating
    /// marks so that every non-anchor group gains exactly one matched cycle
    /// edge. With a single anchor this is the classical base-anchored
    /// alternation; zero anchors fall back to an arbitrary pseudo-anchor.
    fn expand(&mut self, graph: &mut Graph, cycle: Cycle) {
        let length = cycle.edges.len();
        debug_assert_eq!(length, cycle.groups.len());

        for &edge in &cycle.edges {
            graph.set_matched(edge, false);
        }

        let mut anchors: Vec<usize> = Vec::new();
        for (position, group) in cycle.groups.iter().enumerate() {
            let inside: HashSet<usize> = group.iter().copied().collect();
            let anchored = group.iter().any(|&node| {
                graph.adjacency(node).iter().any(|&edge| {
                    graph.is_matched(edge)
                        && !inside.contains(&graph.other_endpoint(edge, node))
                })
            });
            if anchored {
                anchors.push(position);
            }
        }
        if anchors.is_empty() {
            anchors.push(0);
        }

        for (index, &start) in anchors.iter().enumerate() {
            let end = anchors[(index + 1) % anchors.len()];
            let mut gap = (end + length - start) % length;
            if gap == 0 {
                gap = length;
            }
            let mut distance = 1;
            while distance + 1 < gap {
                graph.set_matched(cycle.edges[(start + distance) % length], true);
                distance += 2;
            }
        }

        for group in &cycle.groups {
            for &node in group {
                graph.refresh_node(node);
            }
        }

        match cycle.in_edge {
            Some(entry) => trace!("expanded a blossom attached through edge {entry}"),
            None => trace!("expanded the root blossom"),
        }
        self.statistics.blossoms_expanded += 1;
    }
}

/// The `prec` edge of `class` and the class it leads to, or `None` on the
/// root class.
fn tree_parent(
    graph: &Graph,
    partition: &mut DisjointSet<TreeNode>,
    class: usize,
) -> Option<(usize, usize)> {
    let prec = partition.value(class).prec?;
    let (x, y) = graph.endpoints(prec);
    let rx = partition.find(x);
    let parent = if rx == class { partition.find(y) } else { rx };
    Some((prec, parent))
}

/// One branch of the cycle walk: the classes visited so far and the `prec`
/// edges between them.
struct BranchWalk {
    classes: Vec<usize>,
    edges: Vec<usize>,
    tip: usize,
}

impl BranchWalk {
    fn new(start: usize) -> Self {
        Self {
            classes: vec![start],
            edges: Vec::new(),
            tip: start,
        }
    }

    fn step(&mut self, graph: &Graph, partition: &mut DisjointSet<TreeNode>) {
        let (prec, parent) = tree_parent(graph, partition, self.tip)
            .expect("cycle walk stays below the root class");
        self.edges.push(prec);
        self.classes.push(parent);
        self.tip = parent;
    }
}

/// Flip the matched flag of every edge on `path`. An involution: applying it
/// twice restores the previous matching exactly.
fn toggle_path(graph: &mut Graph, path: &[usize]) {
    for &edge in path {
        graph.toggle_matched(edge);
    }
}

/// Compute a maximum-cardinality matching on `graph` in place and return it
/// in index form. Convenience wrapper over [`MaximumMatching`].
pub fn find_maximum_matching(graph: &mut Graph) -> MatchingResult {
    MaximumMatching::new().solve(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::correctness::{exhaustive_maximum_matching_size, validate_matching};
    use proptest::prelude::*;

    fn solved(n: usize, edges: &[(usize, usize)]) -> (Graph, MatchingResult) {
        let mut graph = Graph::new(n, edges).unwrap();
        let result = find_maximum_matching(&mut graph);
        validate_matching(&graph).unwrap();
        (graph, result)
    }

    #[test]
    fn test_empty_edge_set() {
        let (_, result) = solved(4, &[]);
        assert_eq!(result.size, 0);
        assert_eq!(result.statistics.invocations, 4);
        assert_eq!(result.statistics.edges_examined, 0);
    }

    #[test]
    fn test_single_node() {
        let (_, result) = solved(1, &[]);
        assert_eq!(result.size, 0);
    }

    #[test]
    fn test_single_edge() {
        let (graph, result) = solved(2, &[(0, 1)]);
        assert_eq!(result.size, 1);
        assert!(graph.is_matched(0));
    }

    #[test]
    fn test_triangle() {
        // Odd cycle: any single edge is a maximum matching.
        let (_, result) = solved(3, &[(0, 1), (1, 2), (0, 2)]);
        assert_eq!(result.size, 1);
    }

    #[test]
    fn test_path_of_five_nodes() {
        let (_, result) = solved(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        assert_eq!(result.size, 2);
    }

    #[test]
    fn test_five_cycle_with_pendant_edge() {
        // The classical blossom case: a greedy or bipartite-style search
        // that cannot contract the odd cycle misses the pendant edge.
        let (graph, result) = solved(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (4, 5)]);
        assert_eq!(result.size, 3);
        assert!(graph.is_matched(5), "edge (4, 5) must be matched");
    }

    #[test]
    fn test_two_disjoint_triangles() {
        let (_, result) = solved(6, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]);
        assert_eq!(result.size, 2);
    }

    #[test]
    fn test_blossom_contraction_from_seeded_matching() {
        // Seed (1,2) and (3,4); the only augmenting path from 0 to 5 runs
        // through the odd cycle 0-1-2-3-4, forcing a contraction.
        let mut graph =
            Graph::new(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (4, 5)]).unwrap();
        graph.set_matched(1, true);
        graph.set_matched(3, true);

        let result = MaximumMatching::new().solve(&mut graph);
        validate_matching(&graph).unwrap();
        assert_eq!(result.size, 3);
        assert!(graph.is_matched(5), "edge (4, 5) must be matched");
        assert!(result.statistics.blossoms_contracted >= 1);
        assert_eq!(
            result.statistics.blossoms_contracted,
            result.statistics.blossoms_expanded
        );
    }

    #[test]
    fn test_nested_blossoms() {
        // Seed (1,2), (3,4), (5,6). From root 0 the search contracts the
        // triangle 2-3-4, then the cycle through the contracted class
        // (0-1-[2,3,4]-5-6), and finally augments out to node 7, so both
        // expansions must rebuild consistent matchings inside the nest.
        let edges = [
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 2),
            (4, 5),
            (5, 6),
            (6, 0),
            (3, 7),
        ];
        let mut graph = Graph::new(8, &edges).unwrap();
        graph.set_matched(1, true);
        graph.set_matched(3, true);
        graph.set_matched(6, true);

        let result = MaximumMatching::new().solve(&mut graph);
        validate_matching(&graph).unwrap();
        assert_eq!(result.size, 4);
        assert!(graph.is_matched(8), "edge (3, 7) must be matched");
        assert_eq!(result.statistics.blossoms_contracted, 2);
        assert_eq!(result.statistics.blossoms_expanded, 2);
    }

    #[test]
    fn test_failed_search_keeps_matching_of_abandoned_blossom() {
        // Triangle with (1,2) matched: node 0 is unmatchable, the search
        // contracts the triangle and gives up. The abandoned cycle must not
        // disturb the existing matched edge.
        let mut graph = Graph::new(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        graph.set_matched(1, true);

        let result = MaximumMatching::new().solve(&mut graph);
        validate_matching(&graph).unwrap();
        assert_eq!(result.size, 1);
        assert!(graph.is_matched(1));
        assert_eq!(result.statistics.blossoms_contracted, 1);
        assert_eq!(result.statistics.blossoms_expanded, 0);
        assert_eq!(result.statistics.nodes_erased, 3);
        assert!(graph.is_erased(0) && graph.is_erased(1) && graph.is_erased(2));
    }

    #[test]
    fn test_self_loops_and_parallel_edges() {
        let (graph, result) = solved(2, &[(0, 0), (0, 1), (0, 1), (1, 1)]);
        assert_eq!(result.size, 1);
        assert!(!graph.is_matched(0));
        assert!(!graph.is_matched(3));
    }

    #[test]
    fn test_petersen_graph_has_perfect_matching() {
        let edges = [
            // outer 5-cycle, spokes, inner pentagram
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 0),
            (0, 5),
            (1, 6),
            (2, 7),
            (3, 8),
            (4, 9),
            (5, 7),
            (7, 9),
            (9, 6),
            (6, 8),
            (8, 5),
        ];
        let (_, result) = solved(10, &edges);
        assert_eq!(result.size, 5);
    }

    #[test]
    fn test_resolving_is_idempotent() {
        let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (4, 5)];
        let mut graph = Graph::new(6, &edges).unwrap();
        find_maximum_matching(&mut graph);
        let before: Vec<bool> = (0..graph.edge_count())
            .map(|e| graph.is_matched(e))
            .collect();

        let rerun = find_maximum_matching(&mut graph);
        let after: Vec<bool> = (0..graph.edge_count())
            .map(|e| graph.is_matched(e))
            .collect();
        assert_eq!(before, after);
        assert_eq!(rerun.statistics.augmentations, 0);
    }

    #[test]
    fn test_toggle_path_is_an_involution() {
        let mut graph = Graph::new(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        graph.set_matched(1, true);
        let before: Vec<bool> = (0..3).map(|e| graph.is_matched(e)).collect();

        toggle_path(&mut graph, &[0, 1, 2]);
        assert!(graph.is_matched(0) && !graph.is_matched(1) && graph.is_matched(2));
        toggle_path(&mut graph, &[0, 1, 2]);
        let after: Vec<bool> = (0..3).map(|e| graph.is_matched(e)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_statistics_track_augmentations() {
        let (_, result) = solved(4, &[(0, 1), (2, 3)]);
        assert_eq!(result.statistics.augmentations, 2);
        assert_eq!(result.size, 2);
    }

    fn arbitrary_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        (1..=9usize)
            .prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..=14)))
    }

    proptest! {
        /// On arbitrary small graphs the solver produces a valid matching of
        /// exactly the optimum cardinality found by exhaustive search.
        #[test]
        fn prop_matches_exhaustive_optimum((n, edges) in arbitrary_graph()) {
            let mut graph = Graph::new(n, &edges).unwrap();
            let result = find_maximum_matching(&mut graph);
            prop_assert!(validate_matching(&graph).is_ok());
            prop_assert_eq!(result.size, exhaustive_maximum_matching_size(&graph));
        }
    }
}

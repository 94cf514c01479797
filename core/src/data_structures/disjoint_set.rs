//! Union-find with intra-class member enumeration
//!
//! This module implements a disjoint-set structure over a fixed universe of
//! elements, augmented with a threaded member list so that every element of a
//! class can be visited in time proportional to the class size. Plain
//! union-find answers "are these in the same class?"; the enumeration is what
//! lets the matching search treat a contracted blossom as a single node while
//! still walking every original edge incident to any node inside it.
//!
//! # Structural Invariants
//!
//! - Every parent chain terminates at a root in finitely many steps.
//! - Following `next` links from a root visits exactly the elements whose
//!   transitive parent is that root, each once.
//! - `tail` is meaningful only on roots and always names the true list tail,
//!   which keeps list concatenation during `union` O(1).
//!
//! # Algorithmic Complexity
//!
//! `find` and `union` run in amortized O(α(n)) under union by rank with path
//! compression. Enumerating a class from its root is O(|class|).

/// Arena slot for one element: payload plus the union-find and list links.
///
/// All relations are expressed as indices into the arena, never as owning
/// pointers, so classes can be merged freely without ownership cycles.
#[derive(Debug, Clone)]
struct Element<T> {
    value: T,
    rank: usize,
    parent: usize,
    /// Next element of the same class; `None` on the list tail.
    next: Option<usize>,
    /// Tail of the class member list; maintained on roots only.
    tail: usize,
}

/// Disjoint-set structure with per-class member enumeration and a
/// per-element payload.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    elements: Vec<Element<T>>,
}

impl<T: Default> DisjointSet<T> {
    /// Create `n` singleton classes with default payloads. O(n).
    pub fn new(n: usize) -> Self {
        Self {
            elements: (0..n)
                .map(|i| Element {
                    value: T::default(),
                    rank: 0,
                    parent: i,
                    next: None,
                    tail: i,
                })
                .collect(),
        }
    }
}

impl<T> DisjointSet<T> {
    /// Number of elements in the universe (not the number of classes).
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Representative of the class containing `i`, with path compression.
    ///
    /// Out-of-range indices are a programming error and panic. Amortized
    /// O(α(n)); the recursion depth is bounded by the rank, which union by
    /// rank keeps logarithmic.
    pub fn find(&mut self, i: usize) -> usize {
        let parent = self.elements[i].parent;
        if parent == i {
            return i;
        }
        let root = self.find(parent);
        self.elements[i].parent = root;
        root
    }

    /// Merge the classes containing `i` and `j`; no-op when already merged.
    ///
    /// The lower-rank root is attached under the higher-rank root (ties pick
    /// the second and increment its rank), and the absorbed class's member
    /// list is spliced onto the survivor's tail. After the call, enumerating
    /// the surviving representative yields the union of both prior lists.
    pub fn union(&mut self, i: usize, j: usize) {
        let ri = self.find(i);
        let rj = self.find(j);
        if ri == rj {
            return;
        }

        let (survivor, absorbed) = match self.elements[ri].rank.cmp(&self.elements[rj].rank) {
            std::cmp::Ordering::Less => (rj, ri),
            std::cmp::Ordering::Greater => (ri, rj),
            std::cmp::Ordering::Equal => {
                self.elements[rj].rank += 1;
                (rj, ri)
            }
        };

        self.elements[absorbed].parent = survivor;
        // Splice: the absorbed root heads its own list, so linking it after
        // the survivor's tail carries its whole class across.
        let survivor_tail = self.elements[survivor].tail;
        self.elements[survivor_tail].next = Some(absorbed);
        self.elements[survivor].tail = self.elements[absorbed].tail;
    }

    /// Whether `i` and `j` currently share a representative.
    pub fn connected(&mut self, i: usize, j: usize) -> bool {
        self.find(i) == self.find(j)
    }

    /// First element of the member list headed by `root`; the root itself.
    pub fn first_member(&self, root: usize) -> usize {
        debug_assert_eq!(self.elements[root].parent, root);
        root
    }

    /// Successor of `i` in its class member list, `None` on the tail.
    pub fn next_member(&self, i: usize) -> Option<usize> {
        self.elements[i].next
    }

    /// Forward-only, single-pass enumeration of the class headed by `root`.
    ///
    /// `root` must be a current representative; enumeration from a non-root
    /// element yields only the list suffix starting there.
    pub fn members(&self, root: usize) -> Members<'_, T> {
        Members {
            set: self,
            cursor: Some(self.first_member(root)),
        }
    }

    /// Payload attached to element `i`.
    pub fn value(&self, i: usize) -> &T {
        &self.elements[i].value
    }

    pub fn value_mut(&mut self, i: usize) -> &mut T {
        &mut self.elements[i].value
    }

    pub fn set_value(&mut self, i: usize, value: T) {
        self.elements[i].value = value;
    }
}

/// Iterator over the members of one class. See [`DisjointSet::members`].
pub struct Members<'a, T> {
    set: &'a DisjointSet<T>,
    cursor: Option<usize>,
}

impl<T> Iterator for Members<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.cursor?;
        self.cursor = self.set.next_member(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn collect_members(set: &DisjointSet<()>, root: usize) -> BTreeSet<usize> {
        set.members(root).collect()
    }

    #[test]
    fn test_singletons() {
        let mut set: DisjointSet<()> = DisjointSet::new(4);
        assert_eq!(set.len(), 4);
        for i in 0..4 {
            assert_eq!(set.find(i), i);
            assert_eq!(collect_members(&set, i), BTreeSet::from([i]));
            assert_eq!(set.next_member(i), None);
        }
    }

    #[test]
    fn test_union_find() {
        let mut set: DisjointSet<()> = DisjointSet::new(5);

        assert!(!set.connected(0, 1));
        set.union(0, 1);
        assert!(set.connected(0, 1));

        // Re-unioning the same pair changes nothing.
        let root = set.find(0);
        set.union(0, 1);
        assert_eq!(set.find(1), root);

        set.union(2, 3);
        set.union(1, 2);
        assert!(set.connected(0, 3));
        assert!(!set.connected(0, 4));
    }

    #[test]
    fn test_member_lists_splice() {
        let mut set: DisjointSet<()> = DisjointSet::new(6);
        set.union(0, 1);
        set.union(2, 3);
        set.union(0, 2);

        let root = set.find(3);
        assert_eq!(collect_members(&set, root), BTreeSet::from([0, 1, 2, 3]));
        let root4 = set.find(4);
        assert_eq!(collect_members(&set, root4), BTreeSet::from([4]));

        // Each member appears exactly once.
        let walked: Vec<usize> = set.members(root).collect();
        assert_eq!(walked.len(), 4);
    }

    #[test]
    fn test_payload() {
        let mut set: DisjointSet<u64> = DisjointSet::new(3);
        assert_eq!(*set.value(1), 0);
        set.set_value(1, 7);
        *set.value_mut(2) += 9;
        assert_eq!(*set.value(1), 7);
        assert_eq!(*set.value(2), 9);
    }

    proptest! {
        /// Enumerating the final representative of any element yields exactly
        /// the elements ever unioned into its class, each once, regardless of
        /// union order.
        #[test]
        fn prop_enumeration_matches_naive_model(
            unions in prop::collection::vec((0..24usize, 0..24usize), 0..60)
        ) {
            let n = 24;
            let mut set: DisjointSet<()> = DisjointSet::new(n);
            let mut model: Vec<BTreeSet<usize>> =
                (0..n).map(|i| BTreeSet::from([i])).collect();

            for &(a, b) in &unions {
                set.union(a, b);
                if !model[a].contains(&b) {
                    let merged: BTreeSet<usize> =
                        model[a].union(&model[b]).copied().collect();
                    for &x in &merged {
                        model[x] = merged.clone();
                    }
                }
            }

            for i in 0..n {
                let root = set.find(i);
                prop_assert_eq!(&collect_members(&set, root), &model[i]);
            }
        }
    }
}

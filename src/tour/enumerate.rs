//! Lazy candidate generators.
//!
//! Both rules enumerate distinct arrangements of a sorted multiset of node
//! ids in lexicographic order, stepping with the classic next-permutation
//! algorithm. Because the step skips equal elements, a multiset with one
//! duplicated node yields each distinct arrangement exactly once and never
//! produces a candidate that has to be filtered out.

use crate::graph::NodeId;

use super::types::Tour;

/// Rearranges `items` into the next lexicographically greater arrangement.
///
/// Returns `false` and leaves `items` sorted ascending once the last
/// arrangement has been passed. Duplicate elements are handled: only
/// distinct arrangements are visited.
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `i + 1`.
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        items.reverse();
        return false;
    }

    let pivot = i - 1;
    let mut j = items.len() - 1;
    while items[j] <= items[pivot] {
        j -= 1;
    }
    items.swap(pivot, j);
    items[i..].reverse();
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Fresh,
    Running,
    Done,
}

/// Distinct arrangements of a multiset of nodes, in lexicographic order.
///
/// The iterator is finite and cheap to [`restart`](Arrangements::restart).
///
/// ```
/// use u_tours::graph::NodeId;
/// use u_tours::tour::Arrangements;
///
/// let ids = |v: &[usize]| v.iter().copied().map(NodeId::new).collect::<Vec<_>>();
/// let all: Vec<_> = Arrangements::new(ids(&[1, 0, 0])).collect();
/// assert_eq!(all, [ids(&[0, 0, 1]), ids(&[0, 1, 0]), ids(&[1, 0, 0])]);
/// ```
#[derive(Debug, Clone)]
pub struct Arrangements {
    current: Vec<NodeId>,
    cursor: Cursor,
}

impl Arrangements {
    /// Starts at the smallest arrangement of `items`.
    pub fn new(mut items: Vec<NodeId>) -> Self {
        items.sort_unstable();
        Self {
            current: items,
            cursor: Cursor::Fresh,
        }
    }

    /// Rewinds to the first arrangement.
    pub fn restart(&mut self) {
        self.current.sort_unstable();
        self.cursor = Cursor::Fresh;
    }

    /// Advances and borrows the next arrangement without allocating.
    pub fn advance(&mut self) -> Option<&[NodeId]> {
        match self.cursor {
            Cursor::Fresh => self.cursor = Cursor::Running,
            Cursor::Running => {
                if !next_permutation(&mut self.current) {
                    self.cursor = Cursor::Done;
                    return None;
                }
            }
            Cursor::Done => return None,
        }
        Some(&self.current)
    }
}

impl Iterator for Arrangements {
    type Item = Vec<NodeId>;

    fn next(&mut self) -> Option<Vec<NodeId>> {
        self.advance().map(<[NodeId]>::to_vec)
    }
}

fn all_nodes(n: usize) -> Vec<NodeId> {
    (0..n).map(NodeId::new).collect()
}

/// Multiset `{0..n} + {repeated}`, sorted.
pub(crate) fn one_repeat_multiset(n: usize, repeated: NodeId) -> Vec<NodeId> {
    let mut items = all_nodes(n);
    items.insert(repeated.index() + 1, repeated);
    items
}

/// Every permutation of `n` nodes, lexicographic over node ids.
#[derive(Debug, Clone)]
pub struct SimpleTours {
    inner: Arrangements,
}

impl SimpleTours {
    /// Tours over nodes `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            inner: Arrangements::new(all_nodes(n)),
        }
    }

    /// Rewinds to the first tour.
    pub fn restart(&mut self) {
        self.inner.restart();
    }
}

impl Iterator for SimpleTours {
    type Item = Tour;

    fn next(&mut self) -> Option<Tour> {
        self.inner.next().map(Tour::new)
    }
}

/// Every one-repeat tour over `n` nodes.
///
/// Ordered by repeated node first (ascending id), then lexicographically
/// within the arrangements of that node's multiset.
#[derive(Debug, Clone)]
pub struct OneRepeatTours {
    n: usize,
    repeated: usize,
    inner: Option<Arrangements>,
}

impl OneRepeatTours {
    /// Tours over nodes `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            repeated: 0,
            inner: (n > 0).then(|| Arrangements::new(one_repeat_multiset(n, NodeId::new(0)))),
        }
    }

    /// Rewinds to the first tour.
    pub fn restart(&mut self) {
        *self = Self::new(self.n);
    }
}

impl Iterator for OneRepeatTours {
    type Item = Tour;

    fn next(&mut self) -> Option<Tour> {
        loop {
            let inner = self.inner.as_mut()?;
            if let Some(items) = inner.next() {
                return Some(Tour::new(items));
            }
            self.repeated += 1;
            self.inner = (self.repeated < self.n).then(|| {
                Arrangements::new(one_repeat_multiset(self.n, NodeId::new(self.repeated)))
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::TourMode;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn ids(v: &[usize]) -> Vec<NodeId> {
        v.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_next_permutation_distinct() {
        let mut v = vec![1, 2, 3];
        let mut seen = vec![v.clone()];
        while next_permutation(&mut v) {
            seen.push(v.clone());
        }
        assert_eq!(
            seen,
            [
                [1, 2, 3],
                [1, 3, 2],
                [2, 1, 3],
                [2, 3, 1],
                [3, 1, 2],
                [3, 2, 1]
            ]
        );
        // Wraps back to sorted order.
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn test_next_permutation_short() {
        let mut empty: [u8; 0] = [];
        assert!(!next_permutation(&mut empty));
        let mut one = [4];
        assert!(!next_permutation(&mut one));
    }

    #[test]
    fn test_arrangements_with_duplicate() {
        // {0, 1, 1, 2}: 4! / 2! = 12 distinct arrangements.
        let all: Vec<_> = Arrangements::new(ids(&[2, 1, 0, 1])).collect();
        assert_eq!(all.len(), 12);
        assert_eq!(all.first(), Some(&ids(&[0, 1, 1, 2])));
        assert_eq!(all.last(), Some(&ids(&[2, 1, 1, 0])));
        let unique: HashSet<_> = all.iter().cloned().collect();
        assert_eq!(unique.len(), 12);
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1], "not strictly increasing: {pair:?}");
        }
    }

    #[test]
    fn test_arrangements_restart() {
        let mut it = Arrangements::new(ids(&[0, 1, 2]));
        let first: Vec<_> = it.by_ref().collect();
        assert!(it.next().is_none());
        it.restart();
        let second: Vec<_> = it.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_advance_matches_next() {
        let mut a = Arrangements::new(ids(&[0, 0, 1, 2]));
        let b: Vec<_> = Arrangements::new(ids(&[0, 0, 1, 2])).collect();
        let mut borrowed = Vec::new();
        while let Some(items) = a.advance() {
            borrowed.push(items.to_vec());
        }
        assert_eq!(borrowed, b);
    }

    #[test]
    fn test_simple_tours_empty_graph() {
        let tours: Vec<_> = SimpleTours::new(0).collect();
        assert_eq!(tours, [Tour::new(vec![])]);
    }

    #[test]
    fn test_one_repeat_tours_small() {
        assert_eq!(OneRepeatTours::new(0).count(), 0);
        let one: Vec<_> = OneRepeatTours::new(1).collect();
        assert_eq!(one, [Tour::new(ids(&[0, 0]))]);

        let two: Vec<_> = OneRepeatTours::new(2).collect();
        assert_eq!(
            two,
            [
                Tour::new(ids(&[0, 0, 1])),
                Tour::new(ids(&[0, 1, 0])),
                Tour::new(ids(&[1, 0, 0])),
                Tour::new(ids(&[0, 1, 1])),
                Tour::new(ids(&[1, 0, 1])),
                Tour::new(ids(&[1, 1, 0])),
            ]
        );
    }

    #[test]
    fn test_one_repeat_restart() {
        let mut it = OneRepeatTours::new(3);
        let first: Vec<_> = it.by_ref().take(10).collect();
        it.restart();
        let second: Vec<_> = it.take(10).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_one_repeat_multiset_sorted() {
        assert_eq!(one_repeat_multiset(4, NodeId::new(2)), ids(&[0, 1, 2, 2, 3]));
        assert_eq!(one_repeat_multiset(3, NodeId::new(2)), ids(&[0, 1, 2, 2]));
    }

    proptest! {
        /// Generators produce exactly the advertised number of valid, distinct tours.
        #[test]
        fn prop_generators_match_counts(n in 0usize..6) {
            let simple: Vec<Tour> = SimpleTours::new(n).collect();
            prop_assert_eq!(Some(simple.len() as u64), TourMode::Simple.candidate_count(n));
            prop_assert!(simple.iter().all(|t| t.is_simple(n)));
            prop_assert_eq!(simple.iter().collect::<HashSet<_>>().len(), simple.len());

            let repeat: Vec<Tour> = OneRepeatTours::new(n).collect();
            prop_assert_eq!(Some(repeat.len() as u64), TourMode::OneRepeat.candidate_count(n));
            prop_assert!(repeat.iter().all(|t| t.is_one_repeat(n)));
            prop_assert_eq!(repeat.iter().collect::<HashSet<_>>().len(), repeat.len());
        }
    }
}

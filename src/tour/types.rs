//! Tours and visitation rules.

use crate::error::{Result, TourError};
use crate::graph::{EdgeWeights, NodeId, WeightedGraph};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::cost::{tour_cost, TourCost};

/// Visitation rule a tour search runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TourMode {
    /// Every node exactly once; tour length `n`.
    Simple,
    /// Every node at least once, exactly one node twice; tour length `n + 1`.
    OneRepeat,
}

impl TourMode {
    /// Number of candidates an exhaustive search enumerates over `n` nodes.
    ///
    /// `n!` for [`Simple`](TourMode::Simple); `n * (n + 1)! / 2` for
    /// [`OneRepeat`](TourMode::OneRepeat) (one block of distinct
    /// arrangements per choice of repeated node). `None` if the count does
    /// not fit in a `u64`.
    ///
    /// ```
    /// use u_tours::tour::TourMode;
    ///
    /// assert_eq!(TourMode::Simple.candidate_count(7), Some(5_040));
    /// assert_eq!(TourMode::OneRepeat.candidate_count(7), Some(141_120));
    /// assert_eq!(TourMode::Simple.candidate_count(30), None);
    /// ```
    pub fn candidate_count(self, n: usize) -> Option<u64> {
        match self {
            TourMode::Simple => factorial(n),
            TourMode::OneRepeat => {
                let arrangements = factorial(n + 1)? / 2;
                arrangements.checked_mul(n as u64)
            }
        }
    }
}

impl fmt::Display for TourMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourMode::Simple => f.write_str("simple"),
            TourMode::OneRepeat => f.write_str("one-repeat"),
        }
    }
}

fn factorial(n: usize) -> Option<u64> {
    (2..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// An ordered visitation of graph nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tour(Vec<NodeId>);

impl Tour {
    /// Wraps a node sequence.
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self(nodes)
    }

    /// The node sequence.
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the tour has no stops.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cost of the tour under `weights`.
    pub fn cost<W: EdgeWeights + ?Sized>(&self, weights: &W) -> TourCost {
        tour_cost(weights, &self.0)
    }

    /// Per-node visit counts over `0..n`, or `None` if a node is out of range.
    fn visit_counts(&self, n: usize) -> Option<Vec<usize>> {
        let mut counts = vec![0usize; n];
        for node in &self.0 {
            *counts.get_mut(node.index())? += 1;
        }
        Some(counts)
    }

    /// Whether this is a permutation of all `n` nodes.
    pub fn is_simple(&self, n: usize) -> bool {
        self.len() == n
            && self
                .visit_counts(n)
                .is_some_and(|c| c.iter().all(|&k| k == 1))
    }

    /// Whether this visits all `n` nodes, exactly one of them twice.
    pub fn is_one_repeat(&self, n: usize) -> bool {
        self.len() == n + 1
            && self.visit_counts(n).is_some_and(|c| {
                c.iter().all(|&k| k == 1 || k == 2) && c.iter().filter(|&&k| k == 2).count() == 1
            })
    }

    /// The first node that appears more than once, if any.
    pub fn repeated_node(&self) -> Option<NodeId> {
        self.0
            .iter()
            .enumerate()
            .find(|&(i, node)| self.0[..i].contains(node))
            .map(|(_, &node)| node)
    }

    /// Resolves node names against `graph`.
    pub fn names<'g>(&self, graph: &'g WeightedGraph) -> Result<Vec<&'g str>> {
        self.0
            .iter()
            .map(|&id| {
                graph
                    .name(id)
                    .ok_or_else(|| TourError::UnknownNode(format!("#{}", id.index())))
            })
            .collect()
    }
}

impl From<Vec<NodeId>> for Tour {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self(nodes)
    }
}

impl AsRef<[NodeId]> for Tour {
    fn as_ref(&self) -> &[NodeId] {
        &self.0
    }
}

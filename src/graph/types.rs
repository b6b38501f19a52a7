//! Node identifiers, edges, and the weight-lookup trait.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of a node in its [`WeightedGraph`](super::WeightedGraph).
///
/// Ids are dense and assigned in insertion order, so comparing two ids
/// compares their position in the graph's base node ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw node index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// An undirected weighted edge between two distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    /// First endpoint, as supplied when the edge was added.
    pub a: NodeId,
    /// Second endpoint.
    pub b: NodeId,
    /// Non-negative, finite weight.
    pub weight: f64,
}

impl Edge {
    /// Whether `node` is one of the endpoints.
    pub fn touches(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }
}

pub(crate) fn ordered(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Read-only weight lookups over a fixed node set.
///
/// Tour costing is written against this trait so that the same cost
/// function runs on the hash-backed [`WeightedGraph`](super::WeightedGraph)
/// and on the dense [`WeightMatrix`](super::WeightMatrix) snapshot taken
/// for a search.
///
/// # Thread Safety
///
/// Implementors must be `Send + Sync`; the parallel search shares one
/// lookup structure across rayon workers.
pub trait EdgeWeights: Send + Sync {
    /// Number of nodes; valid ids are `0..node_count()`.
    fn node_count(&self) -> usize;

    /// Weight of the edge between `a` and `b`, or `None` if they are not
    /// connected. Symmetric: `weight_of(a, b) == weight_of(b, a)`.
    fn weight_of(&self, a: NodeId, b: NodeId) -> Option<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_pair() {
        assert_eq!(
            ordered(NodeId::new(3), NodeId::new(1)),
            (NodeId::new(1), NodeId::new(3))
        );
        assert_eq!(
            ordered(NodeId::new(1), NodeId::new(3)),
            (NodeId::new(1), NodeId::new(3))
        );
    }

    #[test]
    fn test_edge_touches() {
        let e = Edge {
            a: NodeId::new(0),
            b: NodeId::new(2),
            weight: 1.0,
        };
        assert!(e.touches(NodeId::new(0)));
        assert!(e.touches(NodeId::new(2)));
        assert!(!e.touches(NodeId::new(1)));
    }
}

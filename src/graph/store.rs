//! Hash-backed undirected weighted graph.

use super::definition::GraphDefinition;
use super::types::{ordered, Edge, EdgeWeights, NodeId};
use crate::error::{Result, TourError};
use std::collections::HashMap;
use tracing::debug;

/// Undirected weighted graph over named nodes.
///
/// At most one weight is stored per unordered node pair. Nodes keep their
/// insertion order; that order is the base ordering for tour enumeration
/// and therefore decides tie-breaks between equal-cost tours.
///
/// # Examples
///
/// ```
/// use u_tours::graph::WeightedGraph;
///
/// let mut graph = WeightedGraph::new();
/// graph.add_edge("A", "B", 5.0).unwrap();
/// graph.add_edge("B", "C", 3.0).unwrap();
///
/// // Identical re-insertion is a no-op; a different weight is rejected.
/// assert!(graph.add_edge("B", "A", 5.0).is_ok());
/// assert!(graph.add_edge("A", "B", 6.0).is_err());
///
/// let names: Vec<&str> = graph.nodes().map(|(_, name)| name).collect();
/// assert_eq!(names, ["A", "B", "C"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    names: Vec<String>,
    index: HashMap<String, NodeId>,
    edges: Vec<Edge>,
    weights: HashMap<(NodeId, NodeId), f64>,
}

impl WeightedGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(a, b, weight)` triples, in order.
    pub fn from_edges<I, S>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.add_edge(a.as_ref(), b.as_ref(), weight)?;
        }
        Ok(graph)
    }

    /// Builds a graph from a location table and its connections.
    ///
    /// Every location is registered first, in table order, so the base node
    /// ordering follows the table rather than the edge list. Coordinates are
    /// validated but not stored; the search never looks at them.
    pub fn from_definition(definition: &GraphDefinition) -> Result<Self> {
        definition.validate()?;

        let mut graph = Self::new();
        for location in &definition.locations {
            graph.add_node(&location.name)?;
        }
        for edge in &definition.edges {
            for endpoint in [&edge.a, &edge.b] {
                if !graph.index.contains_key(endpoint.as_str()) {
                    return Err(TourError::UnknownNode(endpoint.clone()));
                }
            }
            graph.add_edge(&edge.a, &edge.b, edge.weight)?;
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built from definition"
        );
        Ok(graph)
    }

    /// Registers a node if it is new and returns its id.
    pub fn add_node(&mut self, name: &str) -> Result<NodeId> {
        if name.is_empty() {
            return Err(TourError::invalid_location(name, "empty node name"));
        }
        Ok(self.intern(name))
    }

    /// Records `weight` for the unordered pair `{a, b}`.
    ///
    /// Both nodes are registered if new. Re-adding a pair with the same
    /// weight is a no-op; a different weight fails with
    /// [`TourError::DuplicateEdge`] and leaves the graph unchanged.
    ///
    /// # Errors
    ///
    /// [`TourError::InvalidEdge`] for an empty node name, a self-loop, or a
    /// weight that is negative, NaN or infinite.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<()> {
        if a.is_empty() || b.is_empty() {
            return Err(TourError::invalid_edge(a, b, "empty node name"));
        }
        if a == b {
            return Err(TourError::invalid_edge(a, b, "self-loop"));
        }
        if !weight.is_finite() {
            return Err(TourError::invalid_edge(
                a,
                b,
                format!("weight must be finite, got {weight}"),
            ));
        }
        if weight < 0.0 {
            return Err(TourError::invalid_edge(
                a,
                b,
                format!("weight must be non-negative, got {weight}"),
            ));
        }

        if let (Some(&ia), Some(&ib)) = (self.index.get(a), self.index.get(b)) {
            if let Some(&existing) = self.weights.get(&ordered(ia, ib)) {
                if existing == weight {
                    return Ok(());
                }
                return Err(TourError::DuplicateEdge {
                    a: a.to_owned(),
                    b: b.to_owned(),
                    existing,
                    attempted: weight,
                });
            }
        }

        let ia = self.intern(a);
        let ib = self.intern(b);
        self.weights.insert(ordered(ia, ib), weight);
        self.edges.push(Edge {
            a: ia,
            b: ib,
            weight,
        });
        Ok(())
    }

    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId::new(self.names.len());
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), id);
        id
    }

    /// Weight of the edge between `a` and `b`, if any.
    pub fn weight_of(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.weights.get(&ordered(a, b)).copied()
    }

    /// Weight lookup by node name.
    pub fn weight_by_name(&self, a: &str, b: &str) -> Option<f64> {
        self.weight_of(self.id(a)?, self.id(b)?)
    }

    /// Whether `a` and `b` are directly connected.
    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.weights.contains_key(&ordered(a, b))
    }

    /// All nodes with their names, in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (NodeId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (NodeId::new(i), name.as_str()))
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Name of a node, or `None` if the id is out of range.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Id of a named node.
    pub fn id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl EdgeWeights for WeightedGraph {
    fn node_count(&self) -> usize {
        self.names.len()
    }

    fn weight_of(&self, a: NodeId, b: NodeId) -> Option<f64> {
        WeightedGraph::weight_of(self, a, b)
    }
}

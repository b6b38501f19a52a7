//! Weighted Graph Store.
//!
//! Holds named nodes and undirected weighted edges and answers the weight
//! queries the tour search runs on. The store is built once and read-only
//! afterwards; node order is insertion order, which is the base ordering
//! every enumeration in [`crate::tour`] is defined against.
//!
//! # Building a graph
//!
//! ```
//! use u_tours::graph::WeightedGraph;
//!
//! let graph = WeightedGraph::from_edges([("A", "B", 5.0), ("B", "C", 3.0)]).unwrap();
//! let a = graph.id("A").unwrap();
//! let b = graph.id("B").unwrap();
//! assert_eq!(graph.weight_of(a, b), Some(5.0));
//! assert_eq!(graph.weight_of(b, a), Some(5.0));
//! ```

mod definition;
mod matrix;
mod store;
mod types;

pub use definition::{EdgeSpec, GraphDefinition, Location};
pub use matrix::WeightMatrix;
pub use store::WeightedGraph;
pub use types::{Edge, EdgeWeights, NodeId};

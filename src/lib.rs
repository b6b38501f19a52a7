//! Exact minimum-cost tours over small weighted graphs.
//!
//! Two layers:
//!
//! - **Weighted Graph Store** ([`graph`]): named nodes, undirected weighted
//!   edges, weight lookups. Built once, read-only during search.
//! - **Tour Search Engine** ([`tour`]): exhaustive enumeration of candidate
//!   tours under a visitation rule, scored against the store, keeping the
//!   first minimum-cost tour in a fixed canonical order.
//!
//! The search is brute force by design: `n!` simple tours and
//! `n * (n + 1)! / 2` one-repeat tours. A configurable candidate cap
//! ([`tour::SearchConfig::max_candidates`]) rejects spaces that are too
//! large before any work starts.
//!
//! # Example
//!
//! ```
//! use u_tours::dataset::mexico_states;
//! use u_tours::graph::WeightedGraph;
//! use u_tours::tour::{SearchConfig, TourReport, TourSearch};
//!
//! let graph = WeightedGraph::from_definition(&mexico_states()).unwrap();
//! let solutions = TourSearch::run_both(&graph, &SearchConfig::default()).unwrap();
//!
//! let simple = TourReport::new(&graph, &solutions.simple).unwrap();
//! assert_eq!(simple.cost, Some(1460.0));
//! let repeat = TourReport::new(&graph, &solutions.one_repeat).unwrap();
//! assert_eq!(repeat.cost, Some(1610.0));
//! ```
//!
//! # Features
//!
//! - `parallel`: split searches across rayon workers.
//! - `serde`: `Serialize`/`Deserialize` for definitions, tours and reports.

pub mod dataset;
pub mod error;
pub mod graph;
pub mod tour;

pub use error::{Result, TourError};

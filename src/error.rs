//! Error types for graph construction and tour search.

use crate::tour::TourMode;
use thiserror::Error;

/// Result type alias for u-tours operations.
pub type Result<T> = std::result::Result<T, TourError>;

/// Errors raised while building a graph or running a tour search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourError {
    /// The same unordered node pair was given two different weights.
    #[error("conflicting weight for edge {a} - {b}: recorded {existing}, got {attempted}")]
    DuplicateEdge {
        /// First endpoint as supplied by the caller.
        a: String,
        /// Second endpoint as supplied by the caller.
        b: String,
        /// Weight already stored for the pair.
        existing: f64,
        /// Weight that was rejected.
        attempted: f64,
    },

    /// An edge that cannot be part of an undirected weighted graph.
    #[error("invalid edge {a} - {b}: {reason}")]
    InvalidEdge {
        /// First endpoint.
        a: String,
        /// Second endpoint.
        b: String,
        /// What is wrong with it.
        reason: String,
    },

    /// An edge endpoint that is not in the location table.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// A location entry with a bad name or out-of-range coordinates.
    #[error("invalid location {name}: {reason}")]
    InvalidLocation {
        /// Location name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The candidate count of a search exceeds the configured limit.
    ///
    /// `candidates` is `None` when the count does not fit in a `u64`.
    #[error("{mode} search over {nodes} nodes needs {} candidates, limit is {limit}", fmt_count(.candidates))]
    SearchTooLarge {
        /// Visitation rule that was requested.
        mode: TourMode,
        /// Number of nodes in the graph.
        nodes: usize,
        /// Exact candidate count, if representable.
        candidates: Option<u64>,
        /// Configured `max_candidates`.
        limit: u64,
    },

    /// No finite-cost tour exists under the given rule.
    #[error("no finite-cost {0} tour exists")]
    Unreachable(TourMode),

    /// The search was cancelled before any finite-cost tour was scored.
    #[error("{0} search cancelled before a finite-cost tour was found")]
    Cancelled(TourMode),
}

fn fmt_count(count: &Option<u64>) -> String {
    match count {
        Some(n) => n.to_string(),
        None => "more than u64::MAX".into(),
    }
}

impl TourError {
    pub(crate) fn invalid_edge(a: &str, b: &str, reason: impl Into<String>) -> Self {
        Self::InvalidEdge {
            a: a.to_owned(),
            b: b.to_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_location(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidLocation {
            name: name.to_owned(),
            reason: reason.into(),
        }
    }
}

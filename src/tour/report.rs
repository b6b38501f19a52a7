//! Presentation-ready search results.

use super::runner::SearchResult;
use super::types::TourMode;
use crate::error::Result;
use crate::graph::WeightedGraph;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A search result with node names resolved, for reporters and renderers.
///
/// `cost` is `None` when no finite-cost tour exists; `stops` is empty in
/// that case.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TourReport {
    /// Rule the tour was found under.
    pub mode: TourMode,
    /// Node names in visiting order.
    pub stops: Vec<String>,
    /// Total cost, or `None` if unreachable.
    pub cost: Option<f64>,
}

impl TourReport {
    /// Resolves `result` against the graph it was computed on.
    pub fn new(graph: &WeightedGraph, result: &SearchResult) -> Result<Self> {
        let stops = match &result.best {
            Some(tour) => tour.names(graph)?.into_iter().map(String::from).collect(),
            None => Vec::new(),
        };
        Ok(Self {
            mode: result.mode,
            stops,
            cost: result.best_cost.value(),
        })
    }

    /// Whether a finite-cost tour was found.
    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }
}

impl fmt::Display for TourReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cost {
            Some(cost) => write!(f, "{} (cost: {cost})", self.stops.join(" → ")),
            None => f.write_str("no finite tour (unreachable)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::TourSearch;

    #[test]
    fn test_report_display() {
        let g = WeightedGraph::from_edges([("A", "B", 5.0), ("B", "C", 3.0), ("A", "C", 10.0)])
            .unwrap();
        let result = TourSearch::simple(&g).unwrap();
        let report = TourReport::new(&g, &result).unwrap();
        assert_eq!(report.mode, TourMode::Simple);
        assert_eq!(report.stops, ["A", "B", "C"]);
        assert_eq!(report.to_string(), "A → B → C (cost: 8)");
    }

    #[test]
    fn test_report_unreachable() {
        let g = WeightedGraph::from_edges([("A", "B", 1.0), ("C", "D", 1.0)]).unwrap();
        let result = TourSearch::simple(&g).unwrap();
        let report = TourReport::new(&g, &result).unwrap();
        assert!(!report.is_reachable());
        assert!(report.stops.is_empty());
        assert_eq!(report.to_string(), "no finite tour (unreachable)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_json() {
        let report = TourReport {
            mode: TourMode::OneRepeat,
            stops: vec!["A".into(), "B".into(), "A".into()],
            cost: Some(4.0),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "OneRepeat");
        assert_eq!(json["cost"], 4.0);
    }
}

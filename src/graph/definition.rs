//! Input tables supplied by whoever defines the graph.

use crate::error::{Result, TourError};
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named node with geographic coordinates.
///
/// Coordinates are carried for renderers only; tour search ignores them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Node name.
    pub name: String,
    /// Latitude in degrees, within [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, within [-180, 180].
    pub lon: f64,
}

impl Location {
    /// Creates a location.
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }
}

/// A `(a, b, weight)` connection between two named locations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeSpec {
    /// First endpoint.
    pub a: String,
    /// Second endpoint.
    pub b: String,
    /// Travel cost.
    pub weight: f64,
}

impl EdgeSpec {
    /// Creates a connection.
    pub fn new(a: impl Into<String>, b: impl Into<String>, weight: f64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            weight,
        }
    }
}

/// Location table plus connection list.
///
/// Turned into a [`WeightedGraph`](super::WeightedGraph) with
/// [`WeightedGraph::from_definition`](super::WeightedGraph::from_definition).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraphDefinition {
    /// Nodes in base order.
    pub locations: Vec<Location>,
    /// Connections in insertion order.
    pub edges: Vec<EdgeSpec>,
}

impl GraphDefinition {
    /// Checks the location table: non-empty unique names and coordinates
    /// in range. Edges are checked when the graph is built.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.locations.len());
        for loc in &self.locations {
            if loc.name.is_empty() {
                return Err(TourError::invalid_location(&loc.name, "empty node name"));
            }
            if !seen.insert(loc.name.as_str()) {
                return Err(TourError::invalid_location(&loc.name, "duplicate name"));
            }
            if !(-90.0..=90.0).contains(&loc.lat) {
                return Err(TourError::invalid_location(
                    &loc.name,
                    format!("latitude {} out of range", loc.lat),
                ));
            }
            if !(-180.0..=180.0).contains(&loc.lon) {
                return Err(TourError::invalid_location(
                    &loc.name,
                    format!("longitude {} out of range", loc.lon),
                ));
            }
        }
        Ok(())
    }
}

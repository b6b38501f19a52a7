//! Tour cost with an explicit unreachable variant.

use crate::graph::{EdgeWeights, NodeId};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Total weight of a tour, or `Unreachable` if it crosses a missing edge.
///
/// `Unreachable` compares greater than every finite cost, and two
/// `Unreachable` values are equal, so a search that only accepts strict
/// improvements never replaces a real tour with an unreachable one and
/// never records an unreachable tour as its best.
///
/// Finite costs are ordered with [`f64::total_cmp`]. Graph weights are
/// finite and non-negative, so sums produced by [`tour_cost`] are too.
///
/// ```
/// use u_tours::tour::TourCost;
///
/// assert!(TourCost::Finite(1e300) < TourCost::Unreachable);
/// assert_eq!(TourCost::Unreachable, TourCost::Unreachable);
/// assert_eq!(TourCost::Finite(8.0).value(), Some(8.0));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TourCost {
    /// Sum of the edge weights along the tour.
    Finite(f64),
    /// Some consecutive pair of the tour has no connecting edge.
    Unreachable,
}

impl TourCost {
    /// Cost of a tour with no legs.
    pub const ZERO: TourCost = TourCost::Finite(0.0);

    /// The finite value, if any.
    pub fn value(self) -> Option<f64> {
        match self {
            TourCost::Finite(v) => Some(v),
            TourCost::Unreachable => None,
        }
    }

    /// Whether the cost is finite.
    pub fn is_finite(self) -> bool {
        matches!(self, TourCost::Finite(_))
    }

    /// Adds one leg. A missing leg makes the whole cost unreachable.
    pub fn add_leg(self, weight: Option<f64>) -> TourCost {
        match (self, weight) {
            (TourCost::Finite(total), Some(w)) => TourCost::Finite(total + w),
            _ => TourCost::Unreachable,
        }
    }
}

impl Ord for TourCost {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (TourCost::Finite(a), TourCost::Finite(b)) => a.total_cmp(b),
            (TourCost::Finite(_), TourCost::Unreachable) => Ordering::Less,
            (TourCost::Unreachable, TourCost::Finite(_)) => Ordering::Greater,
            (TourCost::Unreachable, TourCost::Unreachable) => Ordering::Equal,
        }
    }
}

impl PartialOrd for TourCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for TourCost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TourCost {}

impl fmt::Display for TourCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourCost::Finite(v) => write!(f, "{v}"),
            TourCost::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// Sums the weights of consecutive pairs of `tour`.
///
/// Stops at the first pair with no edge and returns
/// [`TourCost::Unreachable`]. Tours of length 0 or 1 cost zero.
///
/// ```
/// use u_tours::graph::WeightedGraph;
/// use u_tours::tour::{tour_cost, TourCost};
///
/// let g = WeightedGraph::from_edges([("A", "B", 5.0), ("B", "C", 3.0)]).unwrap();
/// let id = |n| g.id(n).unwrap();
/// assert_eq!(tour_cost(&g, &[id("A"), id("B"), id("C")]), TourCost::Finite(8.0));
/// assert_eq!(tour_cost(&g, &[id("B"), id("A"), id("C")]), TourCost::Unreachable);
/// ```
pub fn tour_cost<W: EdgeWeights + ?Sized>(weights: &W, tour: &[NodeId]) -> TourCost {
    let mut total = TourCost::ZERO;
    for leg in tour.windows(2) {
        total = total.add_leg(weights.weight_of(leg[0], leg[1]));
        if !total.is_finite() {
            break;
        }
    }
    total
}

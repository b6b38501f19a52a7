//! Tour Search Engine.
//!
//! Exhaustive minimum-cost search under two visitation rules:
//!
//! - [`TourMode::Simple`]: every node exactly once (`n!` candidates).
//! - [`TourMode::OneRepeat`]: `n + 1` stops, every node at least once and
//!   exactly one node twice (`n * (n + 1)! / 2` candidates).
//!
//! # Canonical order
//!
//! Candidates are enumerated lexicographically over node ids, i.e. over the
//! graph's insertion order. For the one-repeat rule the repeated node is
//! chosen first (ascending id) and the distinct arrangements of that
//! multiset follow. The first candidate with the minimum cost wins; that
//! order is also what the parallel search reduces in.
//!
//! # Cost
//!
//! A tour's cost is the sum of its consecutive edge weights, or
//! [`TourCost::Unreachable`] if any consecutive pair is not connected. A
//! search that finds no finite-cost tour reports `best: None`.

mod config;
mod cost;
mod enumerate;
mod report;
mod runner;
mod types;

pub use config::{SearchConfig, DEFAULT_MAX_CANDIDATES};
pub use cost::{tour_cost, TourCost};
pub use enumerate::{next_permutation, Arrangements, OneRepeatTours, SimpleTours};
pub use report::TourReport;
pub use runner::{SearchResult, TourSearch, TourSolutions};
pub use types::{Tour, TourMode};

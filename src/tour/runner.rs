//! Exhaustive search loop.
//!
//! [`TourSearch`] enumerates every candidate of a visitation rule in
//! canonical order, scores it, and keeps the first candidate with the
//! lowest cost. The running best is an explicit accumulator: each work
//! block folds its candidates into an [`Outcome`], and block outcomes are
//! reduced strictly in enumeration order, so the sequential and parallel
//! paths pick the same winner.

use super::config::SearchConfig;
use super::cost::{tour_cost, TourCost};
use super::enumerate::{one_repeat_multiset, Arrangements};
use super::types::{Tour, TourMode};
use crate::error::{Result, TourError};
use crate::graph::{EdgeWeights, NodeId, WeightMatrix};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of one exhaustive search.
///
/// `best` is `None` exactly when `best_cost` is
/// [`TourCost::Unreachable`]. On a completed run that means the graph has
/// no finite-cost tour under `mode`; on a cancelled run it only means none
/// was reached before the flag was seen. Use [`tour`](Self::tour), which
/// tells the two apart, before presenting the tour.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Rule the search ran under.
    pub mode: TourMode,

    /// First minimum-cost tour in enumeration order.
    pub best: Option<Tour>,

    /// Cost of `best`.
    pub best_cost: TourCost,

    /// Number of candidates scored.
    pub candidates: u64,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

impl SearchResult {
    /// Whether a finite-cost tour was found.
    pub fn is_reachable(&self) -> bool {
        self.best.is_some()
    }

    /// The winning tour.
    ///
    /// A cancelled run returns its best tour so far when it has one.
    ///
    /// # Errors
    ///
    /// [`TourError::Cancelled`] if the run was cancelled before any
    /// finite-cost candidate; [`TourError::Unreachable`] if a completed run
    /// found none.
    pub fn tour(&self) -> Result<&Tour> {
        match &self.best {
            Some(tour) => Ok(tour),
            None if self.cancelled => Err(TourError::Cancelled(self.mode)),
            None => Err(TourError::Unreachable(self.mode)),
        }
    }
}

/// Results of running both rules on the same graph.
#[derive(Debug, Clone)]
pub struct TourSolutions {
    /// Every node exactly once.
    pub simple: SearchResult,
    /// Every node at least once, one node twice.
    pub one_repeat: SearchResult,
}

/// Runs exhaustive tour searches.
///
/// # Usage
///
/// ```
/// use u_tours::graph::WeightedGraph;
/// use u_tours::tour::{SearchConfig, TourCost, TourMode, TourSearch};
///
/// let graph = WeightedGraph::from_edges([
///     ("A", "B", 5.0),
///     ("B", "C", 3.0),
///     ("A", "C", 10.0),
/// ])
/// .unwrap();
///
/// let result = TourSearch::run(&graph, TourMode::Simple, &SearchConfig::default()).unwrap();
/// assert_eq!(result.best_cost, TourCost::Finite(8.0));
/// assert_eq!(result.tour().unwrap().names(&graph).unwrap(), ["A", "B", "C"]);
/// assert_eq!(result.candidates, 6);
/// ```
pub struct TourSearch;

impl TourSearch {
    /// Searches every simple tour with the default configuration.
    pub fn simple<W: EdgeWeights + ?Sized>(weights: &W) -> Result<SearchResult> {
        Self::run(weights, TourMode::Simple, &SearchConfig::default())
    }

    /// Searches every one-repeat tour with the default configuration.
    pub fn one_repeat<W: EdgeWeights + ?Sized>(weights: &W) -> Result<SearchResult> {
        Self::run(weights, TourMode::OneRepeat, &SearchConfig::default())
    }

    /// Runs the simple search, then the one-repeat search.
    pub fn run_both<W: EdgeWeights + ?Sized>(
        weights: &W,
        config: &SearchConfig,
    ) -> Result<TourSolutions> {
        Ok(TourSolutions {
            simple: Self::run(weights, TourMode::Simple, config)?,
            one_repeat: Self::run(weights, TourMode::OneRepeat, config)?,
        })
    }

    /// Runs one search.
    ///
    /// # Errors
    ///
    /// [`TourError::SearchTooLarge`] if the candidate count exceeds
    /// `config.max_candidates`; nothing is enumerated in that case.
    pub fn run<W: EdgeWeights + ?Sized>(
        weights: &W,
        mode: TourMode,
        config: &SearchConfig,
    ) -> Result<SearchResult> {
        Self::run_with_cancel(weights, mode, config, None)
    }

    /// Runs one search with an optional cancellation token.
    ///
    /// The flag is checked after each candidate is scored. A cancelled run
    /// returns the best tour found so far with `cancelled` set.
    pub fn run_with_cancel<W: EdgeWeights + ?Sized>(
        weights: &W,
        mode: TourMode,
        config: &SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult> {
        let nodes = weights.node_count();
        let expected = mode.candidate_count(nodes);
        if !config.admits(expected) {
            return Err(TourError::SearchTooLarge {
                mode,
                nodes,
                candidates: expected,
                limit: config.max_candidates,
            });
        }

        info!(%mode, nodes, candidates = ?expected, "starting tour search");

        let matrix = WeightMatrix::from_weights(weights);
        let blocks = initial_blocks(mode, nodes);
        let outcome = search(&matrix, blocks, config, cancel.as_deref());

        let result = SearchResult {
            mode,
            best: outcome.best.tour.map(Tour::new),
            best_cost: outcome.best.cost,
            candidates: outcome.candidates,
            cancelled: outcome.cancelled,
        };

        if result.is_reachable() {
            info!(
                %mode,
                cost = %result.best_cost,
                candidates = result.candidates,
                cancelled = result.cancelled,
                "tour search finished"
            );
        } else {
            info!(
                %mode,
                candidates = result.candidates,
                cancelled = result.cancelled,
                "no finite-cost tour found"
            );
        }

        Ok(result)
    }
}

/// A contiguous slice of the canonical enumeration: `prefix` followed by
/// every arrangement of `rest` in lexicographic order.
#[derive(Debug, Clone)]
struct Block {
    prefix: Vec<NodeId>,
    rest: Vec<NodeId>,
}

/// The whole enumeration for `mode`, as blocks in canonical order.
fn initial_blocks(mode: TourMode, n: usize) -> Vec<Block> {
    match mode {
        TourMode::Simple => vec![Block {
            prefix: Vec::new(),
            rest: (0..n).map(NodeId::new).collect(),
        }],
        TourMode::OneRepeat => (0..n)
            .map(|r| Block {
                prefix: Vec::new(),
                rest: one_repeat_multiset(n, NodeId::new(r)),
            })
            .collect(),
    }
}

#[cfg(feature = "parallel")]
impl Block {
    /// Splits on the next position: one sub-block per distinct leading
    /// node, in ascending order, which keeps the concatenation canonical.
    fn split(self) -> Vec<Block> {
        if self.rest.is_empty() {
            return vec![self];
        }
        let mut out: Vec<Block> = Vec::new();
        for (i, &lead) in self.rest.iter().enumerate() {
            if i > 0 && self.rest[i - 1] == lead {
                continue;
            }
            let mut prefix = self.prefix.clone();
            prefix.push(lead);
            let mut rest = self.rest.clone();
            rest.remove(i);
            out.push(Block { prefix, rest });
        }
        out
    }
}

#[derive(Debug, Clone)]
struct Best {
    tour: Option<Vec<NodeId>>,
    cost: TourCost,
}

/// Accumulated state of a (partial) search.
#[derive(Debug, Clone)]
struct Outcome {
    best: Best,
    candidates: u64,
    cancelled: bool,
}

impl Outcome {
    fn empty() -> Self {
        Self {
            best: Best {
                tour: None,
                cost: TourCost::Unreachable,
            },
            candidates: 0,
            cancelled: false,
        }
    }

    /// Combines with the outcome of the block enumerated after this one.
    /// The later best only wins on strict improvement.
    fn then(self, later: Outcome) -> Outcome {
        let best = if later.best.cost < self.best.cost {
            later.best
        } else {
            self.best
        };
        Outcome {
            best,
            candidates: self.candidates + later.candidates,
            cancelled: self.cancelled || later.cancelled,
        }
    }
}

#[cfg(feature = "parallel")]
fn search(
    weights: &WeightMatrix,
    blocks: Vec<Block>,
    config: &SearchConfig,
    cancel: Option<&AtomicBool>,
) -> Outcome {
    if config.parallel {
        search_parallel(weights, blocks, config, cancel)
    } else {
        search_sequential(weights, blocks, config, cancel)
    }
}

#[cfg(not(feature = "parallel"))]
fn search(
    weights: &WeightMatrix,
    blocks: Vec<Block>,
    config: &SearchConfig,
    cancel: Option<&AtomicBool>,
) -> Outcome {
    if config.parallel {
        debug!("parallel search requested without the `parallel` feature; running sequentially");
    }
    search_sequential(weights, blocks, config, cancel)
}

fn search_sequential(
    weights: &WeightMatrix,
    blocks: Vec<Block>,
    config: &SearchConfig,
    cancel: Option<&AtomicBool>,
) -> Outcome {
    let mut total = Outcome::empty();
    for block in &blocks {
        total = total.then(search_block(weights, block, config, cancel));
        if total.cancelled {
            break;
        }
    }
    total
}

#[cfg(feature = "parallel")]
fn search_parallel(
    weights: &WeightMatrix,
    blocks: Vec<Block>,
    config: &SearchConfig,
    cancel: Option<&AtomicBool>,
) -> Outcome {
    let work: Vec<Block> = blocks.into_iter().flat_map(Block::split).collect();
    debug!(blocks = work.len(), "parallel search split");

    // `collect` keeps input order, so the fold below is in enumeration order.
    let outcomes: Vec<Outcome> = work
        .par_iter()
        .map(|block| search_block(weights, block, config, cancel))
        .collect();

    outcomes.into_iter().fold(Outcome::empty(), Outcome::then)
}

fn search_block(
    weights: &WeightMatrix,
    block: &Block,
    config: &SearchConfig,
    cancel: Option<&AtomicBool>,
) -> Outcome {
    let mut outcome = Outcome::empty();
    let mut candidate = block.prefix.clone();
    let fixed = candidate.len();
    let mut arrangements = Arrangements::new(block.rest.clone());

    while let Some(rest) = arrangements.advance() {
        candidate.truncate(fixed);
        candidate.extend_from_slice(rest);

        let cost = tour_cost(weights, &candidate);
        outcome.candidates += 1;

        if cost < outcome.best.cost {
            debug!(%cost, candidate = outcome.candidates, "improved tour");
            outcome.best = Best {
                tour: Some(candidate.clone()),
                cost,
            };
        }

        if config.progress_interval > 0 && outcome.candidates % config.progress_interval == 0 {
            debug!(
                candidates = outcome.candidates,
                best = %outcome.best.cost,
                "search progress"
            );
        }

        if let Some(flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                outcome.cancelled = true;
                break;
            }
        }
    }

    outcome
}

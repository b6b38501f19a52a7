//! Runs both tour searches on the seven-state network and prints the results.
//!
//! ```text
//! RUST_LOG=u_tours=debug cargo run --example mexico_states --features parallel
//! ```

use tracing_subscriber::EnvFilter;
use u_tours::dataset::mexico_states;
use u_tours::graph::WeightedGraph;
use u_tours::tour::{SearchConfig, TourReport, TourSearch};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let graph = WeightedGraph::from_definition(&mexico_states())?;
    let config = SearchConfig::default().with_parallel(cfg!(feature = "parallel"));
    let solutions = TourSearch::run_both(&graph, &config)?;

    println!("=== (a) Tour without repeats ===");
    println!("{}", TourReport::new(&graph, &solutions.simple)?);

    println!();
    println!("=== (b) Tour repeating one state ===");
    println!("{}", TourReport::new(&graph, &solutions.one_repeat)?);

    Ok(())
}

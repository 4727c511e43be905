//! Classic Puzzle
//!
//! Measures 4 liters with a 3-liter and a 5-liter jug, prints every step,
//! the search statistics and the JSON report.
//!
//! Run with: cargo run --example classic_puzzle
//! Set RUST_LOG=debug to see the engine's own logging.

use jugsearch::report::SearchReport;
use jugsearch::search::Solver;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let capacities = [3, 5];
    let target = 4;

    println!("=== Classic Water Jug Puzzle ===\n");

    let run = Solver::default().run(&capacities, target)?;

    if run.outcome.found() {
        println!("Reached {target} liters in {} moves:", run.outcome.path().len());
        for (step, action) in run.outcome.path().iter().enumerate() {
            println!(
                "  {:>2}. {:<40} {} -> {}",
                step + 1,
                action.description(),
                action.prev_state(),
                action.curr_state()
            );
        }
    } else {
        println!("{target} liters cannot be measured with {capacities:?}");
    }

    println!("\n{}", run.stats);

    let report = SearchReport::new(&capacities, target, &run);
    println!("\n{}", report.to_json_pretty()?);

    println!("\n=== Example Complete ===");
    Ok(())
}

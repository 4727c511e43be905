//! Random Jugs
//!
//! Draws eight jugs with capacities between 0 and 100 liters and searches
//! for a total of 103 liters. The state space of such an instance is huge,
//! so the search runs under both an expansion limit and a queue limit; the
//! queue limit also bounds the predecessor map, which grows with it.
//!
//! Run with: cargo run --example random_jugs [seed]

use jugsearch::search::{SearchConfig, SearchError, SearchOutcome, Solver};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

const JUGS: usize = 8;
const MAX_CAPACITY: u64 = 100;
const TARGET: u64 = 103;
const MAX_EXPANSIONS: usize = 200_000;
const MAX_QUEUE_LEN: usize = 1_000_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut rng = match std::env::args().nth(1) {
        Some(seed) => StdRng::seed_from_u64(seed.parse()?),
        None => StdRng::from_os_rng(),
    };

    let capacities: Vec<u64> = (0..JUGS)
        .map(|_| rng.random_range(0..=MAX_CAPACITY))
        .collect();

    let config = SearchConfig::builder()
        .max_expansions(MAX_EXPANSIONS)
        .max_queue_len(MAX_QUEUE_LEN)
        .build();
    let solver = Solver::new(config)?;

    match solver.run(&capacities, TARGET) {
        Ok(run) => {
            match &run.outcome {
                SearchOutcome::Found(path) => {
                    println!("Found {TARGET} liters in {} moves:", path.len());
                    for action in path {
                        println!("  {action}");
                    }
                }
                SearchOutcome::Unreachable => {
                    println!("{TARGET} liters cannot be measured with {capacities:?}");
                }
            }
            println!("\n{}", run.stats);
        }
        Err(error @ SearchError::InvalidTarget { .. }) => {
            println!("{error}");
        }
        Err(
            error @ (SearchError::ExpansionLimitReached { .. }
            | SearchError::QueueLimitReached { .. }),
        ) => {
            println!("Gave up: {error}");
        }
        Err(error) => return Err(error.into()),
    }

    Ok(())
}

use clap::Parser;

use maze_search::config::Config;
use maze_search::simulation::Simulation;
use maze_search::SearchError;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("maze_search=info")),
        )
        .init();

    let config = Config::parse();

    println!("Starting maze search...");
    println!("Grid size: {}x{}", config.grid_size, config.grid_size);
    println!("Barricades: {}", config.num_barricades);
    println!("Frontier: {:?}", config.frontier);
    if config.delay_ms > 0 {
        println!("Observer delay: {}ms per visit", config.delay_ms);
    }
    println!();

    let quiet = config.quiet;
    let simulation = match Simulation::new(config) {
        Ok(simulation) => simulation,
        Err(e) => {
            error!("Failed to set up maze: {}", e);
            std::process::exit(1);
        }
    };

    println!("Seed: {} (for reproducibility)", simulation.seed());
    println!("Start: {}, Goal: {}", simulation.maze().start, simulation.maze().goal);

    match simulation.run_all() {
        Ok(results) => {
            if results.len() > 1 {
                Simulation::print_comparison_results(&results);
            } else if !quiet {
                for stats in &results {
                    println!("\n=== FINAL RESULTS ===");
                    println!("{}", stats);
                }
            }
            if !results.iter().any(|stats| stats.found) {
                println!("Goal is unreachable with the current barricades");
                println!("Try reducing --num-barricades or increasing --grid-size");
            }
        }
        Err(SearchError::Cancelled) => {
            warn!("Search cancelled before reaching a result");
            std::process::exit(2);
        }
        Err(e) => {
            error!("Search failed: {}", e);
            std::process::exit(1);
        }
    }
}

use crate::algorithms::a_star::shortest_path_length;
use crate::algorithms::FrontierKind;
use crate::config::Config;
use crate::error::Result;
use crate::grid::BarricadeMaze;
use crate::maze::{CancelToken, SearchObserver};
use crate::node::MazeNode;
use crate::search::{SearchEngine, VisitedSet};
use crate::statistics::Statistics;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, trace};

/// Observer standing in for a rendering front end: logs each visit and
/// blocks for a fixed delay.
#[derive(Debug, Default)]
pub struct DelayObserver {
    delay: Duration,
    visits: usize,
}

impl DelayObserver {
    pub fn new(delay: Duration) -> Self {
        DelayObserver { delay, visits: 0 }
    }

    pub fn visits(&self) -> usize {
        self.visits
    }
}

impl SearchObserver for DelayObserver {
    fn on_visit(&mut self, node: &MazeNode, visited: &VisitedSet) -> Result<()> {
        self.visits += 1;
        trace!(
            visit = self.visits,
            state = %node.state(),
            f = node.f_value(),
            total = visited.len(),
            "render"
        );
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }
}

/// Cancels `token` unless the returned sender is dropped within `timeout`.
fn spawn_watchdog(token: CancelToken, timeout: Duration) -> (mpsc::Sender<()>, thread::JoinHandle<()>) {
    let (done_tx, done_rx) = mpsc::channel::<()>();
    let handle = thread::spawn(move || {
        if let Err(RecvTimeoutError::Timeout) = done_rx.recv_timeout(timeout) {
            token.cancel();
        }
    });
    (done_tx, handle)
}

pub struct Simulation {
    config: Config,
    maze: BarricadeMaze,
    seed: u64,
    optimal_path_length: Option<usize>,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = BarricadeMaze::random(config.grid_size, config.num_barricades, &mut rng)?;
        Ok(Self::with_maze(config, maze, seed))
    }

    /// Uses a prepared maze instead of generating one.
    pub fn with_maze(config: Config, maze: BarricadeMaze, seed: u64) -> Self {
        let optimal_path_length = shortest_path_length(&maze);

        info!(
            seed,
            size = maze.size,
            start = %maze.start,
            goal = %maze.goal,
            barricades = maze.barricade_count(),
            "generated maze"
        );

        Simulation {
            config,
            maze,
            seed,
            optimal_path_length,
        }
    }

    pub fn maze(&self) -> &BarricadeMaze {
        &self.maze
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn optimal_path_length(&self) -> Option<usize> {
        self.optimal_path_length
    }

    /// Runs one search with the given frontier policy.
    pub fn run(&self, kind: FrontierKind) -> Result<Statistics> {
        let token = CancelToken::new();
        let engine = SearchEngine::new(kind).with_cancel_token(token.clone());
        let mut observer = DelayObserver::new(Duration::from_millis(self.config.delay_ms));

        let watchdog = self
            .config
            .timeout_ms
            .map(|ms| spawn_watchdog(token, Duration::from_millis(ms)));

        let started = Instant::now();
        let result = engine.search(&self.maze, &mut observer);
        let elapsed = started.elapsed();

        if let Some((done_tx, handle)) = watchdog {
            drop(done_tx);
            let _ = handle.join();
        }

        let outcome = result?;
        info!(
            frontier = %kind,
            found = outcome.found(),
            visited = outcome.visited.len(),
            "search finished"
        );
        Ok(Statistics::new(&outcome, self.optimal_path_length, elapsed))
    }

    /// Runs every configured frontier policy on the same maze.
    pub fn run_all(&self) -> Result<Vec<Statistics>> {
        self.config
            .frontier
            .kinds()
            .into_iter()
            .map(|kind| self.run(kind))
            .collect()
    }

    /// Print comparison results in a table.
    pub fn print_comparison_results(results: &[Statistics]) {
        println!("\n=== FRONTIER COMPARISON RESULTS ===");
        println!();
        println!(
            "{:<10} {:<8} {:<8} {:<11} {:<13} {:<8} {:<8} {:<12}",
            "Frontier", "Found", "Visited", "Expansions", "Peak frontier", "Path", "Optimal", "Time"
        );
        println!("{}", "-".repeat(84));

        for result in results {
            let found_str = if result.found { "yes" } else { "no" };
            let path_str = result.path_length.map_or_else(|| "-".to_string(), |len| len.to_string());
            let optimal_str = result
                .optimal_path_length
                .map_or_else(|| "-".to_string(), |len| len.to_string());
            println!(
                "{:<10} {:<8} {:<8} {:<11} {:<13} {:<8} {:<8} {:<12}",
                result.frontier.name(),
                found_str,
                result.visited,
                result.expansions,
                result.frontier_high_water,
                path_str,
                optimal_str,
                format!("{:.2?}", result.elapsed),
            );
        }

        if let Some(fewest) = results.iter().filter(|r| r.found).min_by_key(|r| r.visited) {
            println!();
            println!("Fewest visited nodes: {} ({})", fewest.frontier, fewest.visited);
        }
    }
}

use crate::algorithms::FrontierKind;
use crate::search::SearchOutcome;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Statistics {
    pub frontier: FrontierKind,
    pub found: bool,
    pub visited: usize,
    pub expansions: usize,
    pub frontier_high_water: usize,
    pub path_length: Option<usize>,
    pub optimal_path_length: Option<usize>,
    pub route_efficiency: f64,
    pub elapsed: Duration,
}

impl Statistics {
    pub fn new(outcome: &SearchOutcome, optimal_path_length: Option<usize>, elapsed: Duration) -> Self {
        let mut stats = Statistics {
            frontier: outcome.frontier,
            found: outcome.found(),
            visited: outcome.visited.len(),
            expansions: outcome.expansions,
            frontier_high_water: outcome.frontier_high_water,
            path_length: outcome.path_len(),
            optimal_path_length,
            route_efficiency: 0.0,
            elapsed,
        };
        stats.calculate_efficiency();
        stats
    }

    /// Ratio of path length to the reference optimum; 1.0 means optimal.
    pub fn calculate_efficiency(&mut self) {
        self.route_efficiency = match (self.path_length, self.optimal_path_length) {
            (Some(actual), Some(optimal)) if optimal > 0 => actual as f64 / optimal as f64,
            (Some(0), Some(0)) => 1.0,
            _ => 0.0,
        };
    }

    pub fn is_optimal(&self) -> bool {
        self.found && self.path_length == self.optimal_path_length
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frontier: {}", self.frontier)?;
        writeln!(f, "Goal reached: {}", if self.found { "yes" } else { "no" })?;
        writeln!(f, "Visited nodes: {}", self.visited)?;
        writeln!(f, "Expansions: {}", self.expansions)?;
        writeln!(f, "Peak frontier size: {}", self.frontier_high_water)?;
        match self.path_length {
            Some(len) => writeln!(f, "Path length: {}", len)?,
            None => writeln!(f, "Path length: -")?,
        }
        match self.optimal_path_length {
            Some(len) => writeln!(f, "Optimal path length: {}", len)?,
            None => writeln!(f, "Optimal path length: unreachable")?,
        }
        writeln!(f, "Search time: {:.2?}", self.elapsed)?;

        if self.route_efficiency > 0.0 {
            writeln!(f, "Route Efficiency: {:.3}", self.route_efficiency)?;
            if !self.is_optimal() {
                writeln!(f, "Note: path is longer than the reference optimum")?;
            }
        }

        Ok(())
    }
}

use crate::algorithms::FrontierKind;
use crate::error::{Result, SearchError};
use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierChoice {
    Priority,
    Fifo,
    /// Run every frontier policy on the same maze and compare.
    All,
}

impl FrontierChoice {
    pub fn kinds(self) -> Vec<FrontierKind> {
        match self {
            FrontierChoice::Priority => vec![FrontierKind::Priority],
            FrontierChoice::Fifo => vec![FrontierKind::Fifo],
            FrontierChoice::All => FrontierKind::ALL.to_vec(),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Search a barricaded grid maze", long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 20)]
    pub grid_size: i32,

    #[arg(long, default_value_t = 60)]
    pub num_barricades: usize,

    #[arg(long, value_enum, default_value_t = FrontierChoice::Priority)]
    pub frontier: FrontierChoice,

    /// Seed for maze generation; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause after each visit, as a rendering observer would.
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Cancel the search if it runs longer than this.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.grid_size < 1 {
            return Err(SearchError::Config(format!(
                "--grid-size must be at least 1, got {}",
                self.grid_size
            )));
        }
        if self.timeout_ms == Some(0) {
            return Err(SearchError::Config("--timeout-ms must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let config = Config::parse_from(["maze_search"]);
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.frontier, FrontierChoice::Priority);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn all_expands_to_every_kind() {
        let config = Config::parse_from(["maze_search", "--frontier", "all", "--seed", "3"]);
        assert_eq!(config.frontier.kinds(), FrontierKind::ALL.to_vec());
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn rejects_empty_grid() {
        let config = Config::parse_from(["maze_search", "--grid-size", "0"]);
        assert!(matches!(config.validate(), Err(SearchError::Config(_))));
    }
}

//! Informed search for a path through a grid maze whose obstacles are
//! barricaded edges between adjacent cells.
//!
//! The engine in [`search`] reads the maze through the [`maze::MazeModel`]
//! trait and reports every visited node to a [`maze::SearchObserver`], so it
//! has no dependency on how the maze is stored or drawn.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod grid;
pub mod maze;
pub mod node;
pub mod search;
pub mod simulation;
pub mod statistics;

pub use algorithms::FrontierKind;
pub use error::{Result, SearchError};
pub use grid::{BarricadeMaze, Position};
pub use maze::{CancelToken, MazeModel, NoopObserver, SearchObserver};
pub use node::{compute_h_value, MazeNode, NodeId};
pub use search::{find_path, search, SearchEngine, SearchOutcome, VisitedSet};

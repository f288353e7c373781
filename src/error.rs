//! Error types for maze search

use thiserror::Error;

/// Maze search error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid maze size {0}: size must be at least 1")]
    InvalidMazeSize(i32),

    #[error("start state ({x}, {y}) lies outside a {size}x{size} maze")]
    StartOutOfBounds { x: i32, y: i32, size: i32 },

    #[error("goal state ({x}, {y}) lies outside a {size}x{size} maze")]
    GoalOutOfBounds { x: i32, y: i32, size: i32 },

    #[error("cannot place barricade between ({from_x}, {from_y}) and ({to_x}, {to_y})")]
    InvalidBarricade {
        from_x: i32,
        from_y: i32,
        to_x: i32,
        to_y: i32,
    },

    /// Raised by a cancel token or an observer. Never absorbed by the engine.
    #[error("search was cancelled")]
    Cancelled,

    #[error("configuration error: {0}")]
    Config(String),
}

impl SearchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchError::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

//! Interfaces between the search engine and the application hosting it.
//!
//! The maze layout, barricade storage and any rendering live outside the
//! engine. The engine only reads a [`MazeModel`], reports each visit to a
//! [`SearchObserver`], and polls a [`CancelToken`] between expansions.

use crate::error::{Result, SearchError};
use crate::grid::Position;
use crate::node::{compute_h_value, MazeNode};
use crate::search::VisitedSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Read-only view of a square maze.
pub trait MazeModel {
    /// Side length; valid coordinates are `0..size` on each axis.
    fn maze_size(&self) -> i32;

    fn start_state(&self) -> Position;

    fn goal_state(&self) -> Position;

    /// Whether the edge from `(from_x, from_y)` to `(to_x, to_y)` is blocked.
    fn has_barricade(&self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool;

    fn goal_x(&self) -> i32 {
        self.goal_state().x
    }

    fn goal_y(&self) -> i32 {
        self.goal_state().y
    }

    /// Root node for the start state, with g = 0 and h measured to the goal.
    fn start_node(&self) -> MazeNode {
        let start = self.start_state();
        MazeNode::root(
            start.x,
            start.y,
            0.0,
            compute_h_value(start.x, start.y, self.goal_x(), self.goal_y()),
        )
    }

    fn is_goal_node(&self, node: &MazeNode) -> bool {
        node.state() == self.goal_state()
    }
}

/// Receives every node inserted into the visited set, in insertion order.
///
/// Called synchronously; the engine waits for it to return. Returning
/// [`SearchError::Cancelled`] aborts the run and is handed back to the
/// caller of the search unchanged.
pub trait SearchObserver {
    fn on_visit(&mut self, node: &MazeNode, visited: &VisitedSet) -> Result<()>;
}

impl<F> SearchObserver for F
where
    F: FnMut(&MazeNode, &VisitedSet) -> Result<()>,
{
    fn on_visit(&mut self, node: &MazeNode, visited: &VisitedSet) -> Result<()> {
        self(node, visited)
    }
}

/// Observer that ignores every visit.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_visit(&mut self, _node: &MazeNode, _visited: &VisitedSet) -> Result<()> {
        Ok(())
    }
}

/// Shared cancellation flag. Clones observe the same flag, so one half can
/// be handed to another thread while the engine holds the other.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// `Err(Cancelled)` once [`cancel`](Self::cancel) has been called.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(SearchError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BarricadeMaze;
    use std::thread;

    #[test]
    fn start_node_is_root_with_manhattan_estimate() {
        let maze = BarricadeMaze::new(5, Position::new(1, 1), Position::new(4, 3));
        let root = maze.start_node();
        assert!(root.is_root());
        assert_eq!(root.state(), Position::new(1, 1));
        assert_eq!(root.g_value(), 0.0);
        assert_eq!(root.h_value(), 5.0);
    }

    #[test]
    fn goal_predicate_matches_state_only() {
        let maze = BarricadeMaze::new(5, Position::new(0, 0), Position::new(2, 3));
        assert!(maze.is_goal_node(&MazeNode::root(2, 3, 4.0, 0.0)));
        assert!(!maze.is_goal_node(&MazeNode::root(3, 2, 0.0, 0.0)));
        assert_eq!((maze.goal_x(), maze.goal_y()), (2, 3));
    }

    #[test]
    fn cancel_is_visible_across_threads() {
        let token = CancelToken::new();
        assert!(token.check().is_ok());

        let remote = token.clone();
        thread::spawn(move || remote.cancel()).join().unwrap();

        assert!(token.is_cancelled());
        assert_eq!(token.check(), Err(SearchError::Cancelled));
    }
}

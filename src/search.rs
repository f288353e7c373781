//! Informed best-first search over a barricaded grid maze.
//!
//! A run owns two containers, both created fresh per call:
//!
//! - a [`VisitedSet`], the arena of every node that passed the candidate
//!   checks, keyed by state so a cell is admitted at most once;
//! - a [`Frontier`] of arena ids still waiting to be expanded.
//!
//! Nodes are pushed to the visited set as soon as they are generated, not
//! when they are popped. With unit edge costs, a consistent heuristic and
//! f-ties broken toward smaller g, the first node generated for a cell
//! already carries its smallest g-value, so no cost-based replacement is
//! ever needed.

use crate::algorithms::{Frontier, FrontierKind};
use crate::error::{Result, SearchError};
use crate::grid::{Position, DIRECTIONS};
use crate::maze::{CancelToken, MazeModel, NoopObserver, SearchObserver};
use crate::node::{compute_h_value, MazeNode, NodeId};
use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

/// Cost of a single move between adjacent cells.
pub const EDGE_COST: f32 = 1.0;

/// Finalized nodes of one run, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct VisitedSet {
    nodes: Vec<MazeNode>,
    index: FxHashMap<Position, NodeId>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding only `root`, which gets the first id.
    pub fn with_root(root: MazeNode) -> (Self, NodeId) {
        let mut visited = Self::default();
        let id = NodeId(0);
        visited.index.insert(root.state(), id);
        visited.nodes.push(root);
        (visited, id)
    }

    /// Adds `node` unless its state is already present. Membership is
    /// permanent: an existing entry is never replaced.
    pub fn insert(&mut self, node: MazeNode) -> Option<NodeId> {
        if self.index.contains_key(&node.state()) {
            return None;
        }
        let id = NodeId(self.nodes.len());
        self.index.insert(node.state(), id);
        self.nodes.push(node);
        Some(id)
    }

    pub fn contains(&self, state: Position) -> bool {
        self.index.contains_key(&state)
    }

    pub fn id_of(&self, state: Position) -> Option<NodeId> {
        self.index.get(&state).copied()
    }

    pub fn get(&self, id: NodeId) -> Option<&MazeNode> {
        self.nodes.get(id.0)
    }

    pub fn parent_of(&self, node: &MazeNode) -> Option<&MazeNode> {
        node.parent().and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in the order they were visited.
    pub fn iter(&self) -> impl Iterator<Item = &MazeNode> {
        self.nodes.iter()
    }

    /// Nodes in node order (row, then column).
    pub fn sorted(&self) -> Vec<&MazeNode> {
        let mut nodes: Vec<_> = self.nodes.iter().collect();
        nodes.sort();
        nodes
    }

    /// States from the root down to `id`, following parent links.
    pub fn path_to(&self, id: NodeId) -> Vec<Position> {
        let mut path = Vec::new();
        let mut cursor = self.get(id);
        while let Some(node) = cursor {
            path.push(node.state());
            cursor = self.parent_of(node);
        }
        path.reverse();
        path
    }
}

/// Result of a run that was neither cancelled nor misconfigured.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub frontier: FrontierKind,
    pub visited: VisitedSet,
    /// Arena id of the goal node when the goal was reached.
    pub goal: Option<NodeId>,
    /// Number of nodes popped from the frontier and expanded.
    pub expansions: usize,
    /// Largest frontier size observed during the run.
    pub frontier_high_water: usize,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.goal.is_some()
    }

    pub fn goal_node(&self) -> Option<&MazeNode> {
        self.goal.and_then(|id| self.visited.get(id))
    }

    /// The answer path from start to goal, if the goal was reached.
    pub fn path(&self) -> Option<Vec<Position>> {
        self.goal.map(|id| self.visited.path_to(id))
    }

    /// Number of edges on the answer path.
    pub fn path_len(&self) -> Option<usize> {
        self.path().map(|path| path.len().saturating_sub(1))
    }
}

/// Drives one search per call. Holds only configuration; every run builds
/// its own visited set and frontier.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    frontier: FrontierKind,
    cancel: Option<CancelToken>,
}

impl SearchEngine {
    pub fn new(frontier: FrontierKind) -> Self {
        SearchEngine {
            frontier,
            cancel: None,
        }
    }

    /// Attaches a token that aborts the run at its next suspension point.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn frontier_kind(&self) -> FrontierKind {
        self.frontier
    }

    fn check_cancelled(&self) -> Result<()> {
        match &self.cancel {
            Some(token) => token.check(),
            None => Ok(()),
        }
    }

    fn validate<M: MazeModel + ?Sized>(maze: &M) -> Result<()> {
        let size = maze.maze_size();
        if size <= 0 {
            return Err(SearchError::InvalidMazeSize(size));
        }
        let start = maze.start_state();
        if !start.in_bounds(size) {
            return Err(SearchError::StartOutOfBounds {
                x: start.x,
                y: start.y,
                size,
            });
        }
        let goal = maze.goal_state();
        if !goal.in_bounds(size) {
            return Err(SearchError::GoalOutOfBounds {
                x: goal.x,
                y: goal.y,
                size,
            });
        }
        Ok(())
    }

    /// Searches from the maze's start state to its goal state.
    ///
    /// Returns `Ok` with `found() == false` when the frontier runs dry. A
    /// cancellation raised by the token or the observer comes back as
    /// `Err(SearchError::Cancelled)`.
    pub fn search<M, O>(&self, maze: &M, observer: &mut O) -> Result<SearchOutcome>
    where
        M: MazeModel + ?Sized,
        O: SearchObserver + ?Sized,
    {
        Self::validate(maze)?;
        self.check_cancelled()?;

        let size = maze.maze_size();
        let (goal_x, goal_y) = (maze.goal_x(), maze.goal_y());
        debug!(
            frontier = %self.frontier,
            size,
            start = %maze.start_state(),
            goal = %maze.goal_state(),
            "search started"
        );

        let root = maze.start_node();
        let (visited, root_id) = VisitedSet::with_root(root);
        let mut outcome = SearchOutcome {
            frontier: self.frontier,
            visited,
            goal: None,
            expansions: 0,
            frontier_high_water: 0,
        };
        let mut frontier: Box<dyn Frontier> = self.frontier.create();

        self.notify(observer, &root, &outcome.visited)?;
        if maze.is_goal_node(&root) {
            debug!("start state is the goal");
            outcome.goal = Some(root_id);
            return Ok(outcome);
        }
        frontier.push(root_id, &root);
        outcome.frontier_high_water = 1;

        while let Some(current_id) = frontier.pop() {
            self.check_cancelled()?;
            let current = match outcome.visited.get(current_id) {
                Some(node) => *node,
                None => continue,
            };
            outcome.expansions += 1;

            let from = current.state();
            let g_value = current.g_value() + EDGE_COST;

            for (dx, dy) in DIRECTIONS {
                let to = from.offset(dx, dy);
                if !from.in_bounds(size) || !to.in_bounds(size) {
                    continue;
                }
                if maze.has_barricade(from.x, from.y, to.x, to.y) {
                    continue;
                }
                if outcome.visited.contains(to) {
                    continue;
                }

                let candidate = MazeNode::new(
                    to.x,
                    to.y,
                    current_id,
                    g_value,
                    compute_h_value(to.x, to.y, goal_x, goal_y),
                );
                let Some(candidate_id) = outcome.visited.insert(candidate) else {
                    continue;
                };
                self.notify(observer, &candidate, &outcome.visited)?;

                if maze.is_goal_node(&candidate) {
                    outcome.goal = Some(candidate_id);
                    debug!(
                        visited = outcome.visited.len(),
                        expansions = outcome.expansions,
                        cost = candidate.g_value(),
                        "goal reached"
                    );
                    return Ok(outcome);
                }

                frontier.push(candidate_id, &candidate);
                outcome.frontier_high_water = outcome.frontier_high_water.max(frontier.len());
            }
        }

        debug!(
            visited = outcome.visited.len(),
            expansions = outcome.expansions,
            "frontier exhausted without reaching the goal"
        );
        Ok(outcome)
    }

    /// Reports a visit, then polls the token so a cancel raised while the
    /// observer was running surfaces right away.
    fn notify<O: SearchObserver + ?Sized>(
        &self,
        observer: &mut O,
        node: &MazeNode,
        visited: &VisitedSet,
    ) -> Result<()> {
        trace!(
            x = node.state_x(),
            y = node.state_y(),
            g = node.g_value(),
            h = node.h_value(),
            f = node.f_value(),
            "visited"
        );
        let result = observer.on_visit(node, visited).and_then(|()| self.check_cancelled());
        if let Err(SearchError::Cancelled) = &result {
            warn!(visited = visited.len(), "search cancelled");
        }
        result
    }
}

/// Runs a lowest-f-first search and reports whether the goal was reached.
pub fn search<M, O>(maze: &M, observer: &mut O) -> Result<bool>
where
    M: MazeModel + ?Sized,
    O: SearchObserver + ?Sized,
{
    SearchEngine::new(FrontierKind::Priority)
        .search(maze, observer)
        .map(|outcome| outcome.found())
}

/// Runs a lowest-f-first search without an observer.
pub fn find_path<M: MazeModel + ?Sized>(maze: &M) -> Result<Option<Vec<Position>>> {
    SearchEngine::new(FrontierKind::Priority)
        .search(maze, &mut NoopObserver)
        .map(|outcome| outcome.path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BarricadeMaze;

    /// A maze that takes its fields verbatim so misconfigurations reach the
    /// engine.
    struct RawMaze {
        size: i32,
        start: Position,
        goal: Position,
    }

    impl MazeModel for RawMaze {
        fn maze_size(&self) -> i32 {
            self.size
        }

        fn start_state(&self) -> Position {
            self.start
        }

        fn goal_state(&self) -> Position {
            self.goal
        }

        fn has_barricade(&self, _: i32, _: i32, _: i32, _: i32) -> bool {
            false
        }
    }

    #[test]
    fn visited_set_rejects_duplicate_states() {
        let mut visited = VisitedSet::new();
        let root = visited.insert(MazeNode::root(1, 1, 0.0, 2.0)).unwrap();
        assert_eq!(visited.insert(MazeNode::new(1, 1, root, 4.0, 2.0)), None);
        assert_eq!(visited.len(), 1);
        assert_eq!(visited.get(root).unwrap().g_value(), 0.0);
    }

    #[test]
    fn visited_set_walks_parent_links() {
        let mut visited = VisitedSet::new();
        let a = visited.insert(MazeNode::root(0, 0, 0.0, 0.0)).unwrap();
        let b = visited.insert(MazeNode::new(0, 1, a, 1.0, 0.0)).unwrap();
        let c = visited.insert(MazeNode::new(1, 1, b, 2.0, 0.0)).unwrap();
        assert_eq!(
            visited.path_to(c),
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)]
        );
        assert_eq!(visited.id_of(Position::new(0, 1)), Some(b));
    }

    #[test]
    fn sorted_view_uses_node_order() {
        let mut visited = VisitedSet::new();
        let root = visited.insert(MazeNode::root(1, 1, 0.0, 0.0)).unwrap();
        visited.insert(MazeNode::new(1, 0, root, 1.0, 0.0));
        visited.insert(MazeNode::new(0, 1, root, 1.0, 0.0));
        let states: Vec<_> = visited.sorted().iter().map(|n| n.state()).collect();
        assert_eq!(
            states,
            vec![Position::new(1, 0), Position::new(0, 1), Position::new(1, 1)]
        );
    }

    #[test]
    fn rejects_non_positive_size() {
        let maze = RawMaze {
            size: 0,
            start: Position::new(0, 0),
            goal: Position::new(0, 0),
        };
        assert_eq!(
            search(&maze, &mut NoopObserver),
            Err(SearchError::InvalidMazeSize(0))
        );
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let start_outside = RawMaze {
            size: 3,
            start: Position::new(3, 0),
            goal: Position::new(1, 1),
        };
        assert!(matches!(
            search(&start_outside, &mut NoopObserver),
            Err(SearchError::StartOutOfBounds { x: 3, y: 0, size: 3 })
        ));

        let goal_outside = RawMaze {
            size: 3,
            start: Position::new(0, 0),
            goal: Position::new(1, -1),
        };
        assert!(matches!(
            search(&goal_outside, &mut NoopObserver),
            Err(SearchError::GoalOutOfBounds { x: 1, y: -1, size: 3 })
        ));
    }

    #[test]
    fn observer_sees_every_insertion_once_in_order() {
        let maze = BarricadeMaze::new(4, Position::new(0, 0), Position::new(3, 3));
        let mut seen = Vec::new();
        let mut observer = |node: &MazeNode, visited: &VisitedSet| -> Result<()> {
            assert_eq!(visited.iter().last(), Some(node));
            seen.push(node.state());
            Ok(())
        };

        let outcome = SearchEngine::new(FrontierKind::Priority)
            .search(&maze, &mut observer)
            .unwrap();

        let inserted: Vec<_> = outcome.visited.iter().map(|n| n.state()).collect();
        assert_eq!(seen, inserted);
    }

    #[test]
    fn neighbors_generated_down_right_up_left() {
        let maze = BarricadeMaze::new(3, Position::new(1, 1), Position::new(2, 2));
        let mut first_five = Vec::new();
        let mut observer = |node: &MazeNode, _: &VisitedSet| -> Result<()> {
            if first_five.len() < 5 {
                first_five.push(node.state());
            }
            Ok(())
        };
        SearchEngine::new(FrontierKind::Fifo)
            .search(&maze, &mut observer)
            .unwrap();
        assert_eq!(
            first_five,
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(0, 1),
            ]
        );
    }

    #[test]
    fn children_carry_unit_step_costs() {
        let maze = BarricadeMaze::new(6, Position::new(0, 0), Position::new(5, 5));
        let outcome = SearchEngine::default().search(&maze, &mut NoopObserver).unwrap();
        for node in outcome.visited.iter() {
            match outcome.visited.parent_of(node) {
                Some(parent) => {
                    assert_eq!(node.g_value(), parent.g_value() + EDGE_COST);
                    assert!(node.state().is_adjacent(parent.state()));
                }
                None => assert_eq!(node.g_value(), 0.0),
            }
            assert_eq!(node.f_value(), node.g_value() + node.h_value());
        }
    }

    #[test]
    fn pre_cancelled_token_aborts_before_visiting() {
        let maze = BarricadeMaze::new(3, Position::new(0, 0), Position::new(2, 2));
        let token = CancelToken::new();
        token.cancel();
        let mut visits = 0;
        let mut observer = |_: &MazeNode, _: &VisitedSet| -> Result<()> {
            visits += 1;
            Ok(())
        };
        let result = SearchEngine::new(FrontierKind::Priority)
            .with_cancel_token(token)
            .search(&maze, &mut observer);
        assert_eq!(result.unwrap_err(), SearchError::Cancelled);
        assert_eq!(visits, 0);
    }

    #[test]
    fn find_path_returns_states_start_to_goal() {
        let maze = BarricadeMaze::new(3, Position::new(0, 0), Position::new(2, 0));
        let path = find_path(&maze).unwrap().unwrap();
        assert_eq!(
            path,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
    }
}

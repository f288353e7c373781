use crate::grid::Position;
use crate::maze::MazeModel;
use pathfinding::prelude::astar;

/// Shortest path on a maze computed with the `pathfinding` crate's A*.
///
/// Independent of the search engine, so it serves as a reference for the
/// optimal path length in statistics and tests. Returns the path states
/// from start to goal, or `None` if the goal cannot be reached.
pub fn shortest_path<M: MazeModel + ?Sized>(maze: &M) -> Option<Vec<Position>> {
    let size = maze.maze_size();
    let start = maze.start_state();
    let goal = maze.goal_state();
    if !start.in_bounds(size) || !goal.in_bounds(size) {
        return None;
    }

    let result = astar(
        &start,
        |p| {
            // Successors are in-bounds neighbors not cut off by a barricade.
            p.neighbors()
                .into_iter()
                .filter(|n| n.in_bounds(size) && !maze.has_barricade(p.x, p.y, n.x, n.y))
                .map(|n| (n, 1u32))
                .collect::<Vec<_>>()
        },
        |p| p.manhattan(goal) as u32,
        |p| *p == goal,
    );

    // The result from `astar` is a tuple `(path, cost)`. We only need the path.
    result.map(|(path, _)| path)
}

/// Edge count of the shortest path, or `None` if the goal is unreachable.
pub fn shortest_path_length<M: MazeModel + ?Sized>(maze: &M) -> Option<usize> {
    shortest_path(maze).map(|path| path.len().saturating_sub(1))
}

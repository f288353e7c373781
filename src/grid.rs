use crate::error::{Result, SearchError};
use crate::maze::MazeModel;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::fmt;

/// Expansion order of the four grid moves: down, right, up, left.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A grid state. Coordinates are signed so candidates stepping off the
/// grid can be represented and rejected by the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four 4-adjacent states in expansion order.
    pub fn neighbors(self) -> [Position; 4] {
        DIRECTIONS.map(|(dx, dy)| self.offset(dx, dy))
    }

    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }

    pub fn manhattan(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn in_bounds(self, size: i32) -> bool {
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

// Row-major: y first, then x.
impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then_with(|| self.x.cmp(&other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A square maze whose obstacles are blocked edges between adjacent cells.
///
/// Barricades are stored once per unordered pair of cells, so a barricade
/// between `a` and `b` blocks travel in both directions.
#[derive(Debug, Clone)]
pub struct BarricadeMaze {
    pub size: i32,
    pub start: Position,
    pub goal: Position,
    barricades: FxHashSet<(Position, Position)>,
}

impl BarricadeMaze {
    /// Creates an open maze. Bounds of `start` and `goal` are checked by the
    /// search engine, not here.
    pub fn new(size: i32, start: Position, goal: Position) -> Self {
        BarricadeMaze {
            size,
            start,
            goal,
            barricades: FxHashSet::default(),
        }
    }

    /// Generates a maze with the start in the low quadrant, the goal in the
    /// high quadrant, and up to `num_barricades` randomly placed barricades.
    pub fn random<R: Rng + ?Sized>(size: i32, num_barricades: usize, rng: &mut R) -> Result<Self> {
        if size < 1 {
            return Err(SearchError::InvalidMazeSize(size));
        }

        let low = (size / 2).max(1);
        let start = Position::new(rng.gen_range(0..low), rng.gen_range(0..low));
        let goal = Position::new(rng.gen_range(size / 2..size), rng.gen_range(size / 2..size));
        let mut maze = BarricadeMaze::new(size, start, goal);

        let mut placed = 0;
        let mut attempts = 0;
        while placed < num_barricades && attempts < num_barricades * 3 {
            attempts += 1;
            let from = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));
            let (dx, dy) = DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())];
            let to = from.offset(dx, dy);
            if !to.in_bounds(size) {
                continue;
            }
            if maze.add_barricade(from, to)? {
                placed += 1;
            }
        }

        Ok(maze)
    }

    fn edge_key(a: Position, b: Position) -> (Position, Position) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Blocks the edge between two adjacent in-bounds cells. Returns `false`
    /// if the edge was already blocked.
    pub fn add_barricade(&mut self, a: Position, b: Position) -> Result<bool> {
        if !a.is_adjacent(b) || !a.in_bounds(self.size) || !b.in_bounds(self.size) {
            return Err(SearchError::InvalidBarricade {
                from_x: a.x,
                from_y: a.y,
                to_x: b.x,
                to_y: b.y,
            });
        }
        Ok(self.barricades.insert(Self::edge_key(a, b)))
    }

    pub fn remove_barricade(&mut self, a: Position, b: Position) -> bool {
        self.barricades.remove(&Self::edge_key(a, b))
    }

    pub fn is_blocked(&self, a: Position, b: Position) -> bool {
        self.barricades.contains(&Self::edge_key(a, b))
    }

    /// Barricades every in-bounds side of `pos`.
    pub fn enclose(&mut self, pos: Position) -> Result<()> {
        for neighbor in pos.neighbors() {
            if neighbor.in_bounds(self.size) {
                self.add_barricade(pos, neighbor)?;
            }
        }
        Ok(())
    }

    pub fn barricade_count(&self) -> usize {
        self.barricades.len()
    }

    /// In-bounds neighbors reachable from `pos` without crossing a barricade.
    pub fn open_neighbors(&self, pos: Position) -> Vec<Position> {
        pos.neighbors()
            .into_iter()
            .filter(|n| n.in_bounds(self.size) && !self.is_blocked(pos, *n))
            .collect()
    }
}

impl MazeModel for BarricadeMaze {
    fn maze_size(&self) -> i32 {
        self.size
    }

    fn start_state(&self) -> Position {
        self.start
    }

    fn goal_state(&self) -> Position {
        self.goal
    }

    fn has_barricade(&self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool {
        self.is_blocked(Position::new(from_x, from_y), Position::new(to_x, to_y))
    }
}

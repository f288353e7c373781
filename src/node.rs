use crate::grid::Position;
use std::cmp::Ordering;

/// Index of a node inside the [`VisitedSet`](crate::search::VisitedSet) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// A discovered state together with its cost accounting.
///
/// Nodes are immutable once built. The parent link is an index into the
/// arena that owns every node of a run, so a path is recovered by following
/// `parent` until a root is reached.
///
/// Equality and ordering look at the state alone (y, then x). Two nodes
/// for the same cell compare equal whatever their costs or parents.
#[derive(Debug, Clone, Copy)]
pub struct MazeNode {
    state: Position,
    parent: Option<NodeId>,
    g_value: f32,
    h_value: f32,
    f_value: f32,
}

impl MazeNode {
    pub fn new(x: i32, y: i32, parent: NodeId, g_value: f32, h_value: f32) -> Self {
        MazeNode {
            state: Position::new(x, y),
            parent: Some(parent),
            g_value,
            h_value,
            f_value: g_value + h_value,
        }
    }

    /// A node with no parent.
    pub fn root(x: i32, y: i32, g_value: f32, h_value: f32) -> Self {
        MazeNode {
            state: Position::new(x, y),
            parent: None,
            g_value,
            h_value,
            f_value: g_value + h_value,
        }
    }

    pub fn state(&self) -> Position {
        self.state
    }

    pub fn state_x(&self) -> i32 {
        self.state.x
    }

    pub fn state_y(&self) -> i32 {
        self.state.y
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn g_value(&self) -> f32 {
        self.g_value
    }

    pub fn h_value(&self) -> f32 {
        self.h_value
    }

    pub fn f_value(&self) -> f32 {
        self.f_value
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Manhattan distance from `(node_x, node_y)` to the goal. Admissible and
/// consistent on a 4-connected unit-cost grid whose obstacles only remove
/// edges.
pub fn compute_h_value(node_x: i32, node_y: i32, goal_x: i32, goal_y: i32) -> f32 {
    ((goal_x - node_x).abs() + (goal_y - node_y).abs()) as f32
}

impl PartialEq for MazeNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MazeNode {}

impl Ord for MazeNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.state.cmp(&other.state)
    }
}

impl PartialOrd for MazeNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f_value_is_sum_of_g_and_h() {
        let node = MazeNode::new(3, 4, NodeId(0), 2.0, 5.0);
        assert_eq!(node.f_value(), 7.0);
        assert_eq!(node.parent(), Some(NodeId(0)));

        let root = MazeNode::root(0, 0, 0.0, 8.0);
        assert!(root.is_root());
        assert_eq!(root.f_value(), 8.0);
    }

    #[test]
    fn heuristic_is_manhattan_distance() {
        assert_eq!(compute_h_value(0, 0, 4, 4), 8.0);
        assert_eq!(compute_h_value(4, 4, 0, 0), 8.0);
        assert_eq!(compute_h_value(2, 7, 2, 7), 0.0);
        assert_eq!(compute_h_value(-1, 3, 2, 0), 6.0);
    }

    #[test]
    fn equality_ignores_costs_and_parent() {
        let a = MazeNode::root(1, 2, 0.0, 3.0);
        let b = MazeNode::new(1, 2, NodeId(9), 6.0, 1.0);
        assert_eq!(a, b);
        assert_ne!(a, MazeNode::root(2, 1, 0.0, 3.0));
    }

    #[test]
    fn ordering_compares_y_before_x() {
        let upper_right = MazeNode::root(5, 0, 0.0, 0.0);
        let lower_left = MazeNode::root(0, 1, 0.0, 0.0);
        assert!(upper_right < lower_left);
        assert!(MazeNode::root(0, 1, 0.0, 0.0) < MazeNode::root(1, 1, 0.0, 0.0));
    }
}

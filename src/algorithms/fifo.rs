use crate::algorithms::common::Frontier;
use crate::node::{MazeNode, NodeId};
use std::collections::VecDeque;

/// Plain first-in-first-out frontier.
///
/// Kept as a degraded fallback: it never looks at f, so the search becomes
/// breadth-first. Still shortest on unit-cost grids, but the heuristic buys
/// nothing.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, id: NodeId, _node: &MazeNode) {
        self.queue.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

use crate::algorithms::fifo::FifoFrontier;
use crate::algorithms::priority::PriorityFrontier;
use crate::node::{MazeNode, NodeId};
use std::fmt;

/// The queue of discovered nodes still waiting to be expanded.
///
/// Nodes live in the visited-set arena; the frontier only holds their ids
/// together with whatever ordering key the policy needs.
pub trait Frontier {
    fn push(&mut self, id: NodeId, node: &MazeNode);

    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Selects the frontier ordering policy for a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierKind {
    /// Lowest f first. Optimal with an admissible, consistent heuristic.
    #[default]
    Priority,
    /// First in, first out. Ignores f and h entirely and degrades the run to
    /// breadth-first search, which is only shortest on unit-cost edges.
    Fifo,
}

impl FrontierKind {
    pub const ALL: [FrontierKind; 2] = [FrontierKind::Priority, FrontierKind::Fifo];

    pub fn create(self) -> Box<dyn Frontier> {
        match self {
            FrontierKind::Priority => Box::new(PriorityFrontier::new()),
            FrontierKind::Fifo => Box::new(FifoFrontier::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FrontierKind::Priority => "priority",
            FrontierKind::Fifo => "fifo",
        }
    }
}

impl fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

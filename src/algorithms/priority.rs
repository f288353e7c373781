use crate::algorithms::common::Frontier;
use crate::node::{MazeNode, NodeId};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Priority key: lowest f first, then lowest g, then oldest insertion.
/// We implement Ord in reverse to make the BinaryHeap a min-heap.
///
/// Nodes are closed when generated, so on f-ties the shallower node must go
/// first or a cell can be claimed through a longer route.
#[derive(Clone, Copy, Debug)]
struct Entry {
    f: f32,
    g: f32,
    seq: u64,
    id: NodeId,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.g.total_cmp(&self.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Best-first frontier ordered by ascending f-value.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, id: NodeId, node: &MazeNode) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            f: node.f_value(),
            g: node.g_value(),
            seq,
            id,
        });
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(g: f32, h: f32) -> MazeNode {
        MazeNode::root(0, 0, g, h)
    }

    #[test]
    fn pops_lowest_f_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(NodeId(0), &node(5.0, 5.0));
        frontier.push(NodeId(1), &node(1.0, 2.0));
        frontier.push(NodeId(2), &node(4.0, 3.0));

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop(), Some(NodeId(1)));
        assert_eq!(frontier.pop(), Some(NodeId(2)));
        assert_eq!(frontier.pop(), Some(NodeId(0)));
        assert_eq!(frontier.pop(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn equal_f_prefers_smaller_g() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(NodeId(0), &node(5.0, 1.0));
        frontier.push(NodeId(1), &node(1.0, 5.0));
        assert_eq!(frontier.pop(), Some(NodeId(1)));
    }

    #[test]
    fn full_ties_pop_in_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        for i in 0..4 {
            frontier.push(NodeId(i), &node(2.0, 2.0));
        }
        let order: Vec<_> = std::iter::from_fn(|| frontier.pop()).collect();
        assert_eq!(order, vec![NodeId(0), NodeId(1), NodeId(2), NodeId(3)]);
    }
}

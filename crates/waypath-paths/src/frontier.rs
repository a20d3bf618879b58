use std::cmp::Ordering;
use std::collections::BinaryHeap;

use waypath_core::NodeId;

/// A frontier entry: a node waiting to be expanded.
///
/// Entries order by `(priority, node, seq)`, all ascending. Priorities are
/// compared with [`f64::total_cmp`], so equal or infinite priorities still
/// yield a strict, reproducible order.
#[derive(Clone, Copy, Debug)]
pub struct Candidate {
    /// Strategy-specific score; lower is expanded first.
    pub priority: f64,
    pub node: NodeId,
    /// Insertion sequence number, unique within one frontier.
    pub seq: u64,
    /// Accumulated cost from the search root when the entry was created.
    pub g: u64,
    /// Node this entry was generated from.
    pub parent: Option<NodeId>,
}

impl Candidate {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.node.cmp(&other.node))
            .then(self.seq.cmp(&other.seq))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other.key_cmp(self)
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Min-priority queue of [`Candidate`]s with built-in sequence numbering.
///
/// Priorities are never updated in place: a better route to a node is
/// pushed as a new entry and the stale one is dropped by the caller when it
/// pops a node that is already closed.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Candidate>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new entry, stamping it with the next sequence number.
    pub fn push(&mut self, priority: f64, node: NodeId, g: u64, parent: Option<NodeId>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Candidate {
            priority,
            node,
            seq,
            g,
            parent,
        });
    }

    /// Remove and return the entry with the smallest key.
    pub fn pop(&mut self) -> Option<Candidate> {
        self.heap.pop()
    }

    /// Number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

use std::collections::{HashMap, HashSet};

use waypath_core::NodeId;

use crate::frontier::{Candidate, Frontier};

/// Mutable bookkeeping for one search direction.
///
/// Created at the start of a search call and dropped when it returns, so
/// concurrent searches never share any of it.
#[derive(Debug, Default)]
pub(crate) struct SearchState {
    pub(crate) frontier: Frontier,
    /// Nodes already finalized; never expanded again.
    pub(crate) closed: HashSet<NodeId>,
    /// Best known cost from the root.
    pub(crate) g: HashMap<NodeId, u64>,
    pub(crate) parents: HashMap<NodeId, NodeId>,
    /// Nodes popped and closed so far.
    pub(crate) generated: usize,
}

impl SearchState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Pop entries until one names a node that is not closed yet, close it
    /// and return it. Stale entries are discarded on the way.
    pub(crate) fn pop_open(&mut self) -> Option<Candidate> {
        while let Some(c) = self.frontier.pop() {
            if self.close(c.node) {
                return Some(c);
            }
        }
        None
    }

    /// Mark `node` closed and count it. Returns `false` if it already was.
    pub(crate) fn close(&mut self, node: NodeId) -> bool {
        if !self.closed.insert(node) {
            return false;
        }
        self.generated += 1;
        true
    }

    /// Record `g` for `node` if it beats the best known cost.
    pub(crate) fn improve(&mut self, node: NodeId, g: u64) -> bool {
        match self.g.get(&node) {
            Some(&old) if g >= old => false,
            _ => {
                self.g.insert(node, g);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_open_skips_stale_entries() {
        let mut s = SearchState::new();
        s.frontier.push(1.0, 4, 1, None);
        s.frontier.push(2.0, 4, 2, None);
        s.frontier.push(3.0, 5, 3, None);
        assert_eq!(s.pop_open().map(|c| c.node), Some(4));
        assert_eq!(s.pop_open().map(|c| c.node), Some(5));
        assert!(s.pop_open().is_none());
        assert_eq!(s.generated, 2);
    }

    #[test]
    fn improve_only_on_strictly_lower_cost() {
        let mut s = SearchState::new();
        assert!(s.improve(1, 10));
        assert!(!s.improve(1, 10));
        assert!(!s.improve(1, 12));
        assert!(s.improve(1, 3));
        assert_eq!(s.g[&1], 3);
    }
}

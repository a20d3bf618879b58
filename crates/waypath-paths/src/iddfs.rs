use std::collections::{HashMap, HashSet};

use waypath_core::{Neighbor, NodeId};

use crate::Searcher;
use crate::path::reconstruct;
use crate::searcher::SearchOutcome;
use crate::traits::Pather;

// ---------------------------------------------------------------------------
// Depth-limited pass
// ---------------------------------------------------------------------------

/// One depth-limited DFS run. Each pass starts from scratch.
struct DepthLimited<'a, P: ?Sized> {
    pather: &'a P,
    destinations: &'a [NodeId],
    visited: HashSet<NodeId>,
    parents: HashMap<NodeId, NodeId>,
    /// Nodes discovered during this pass, origin excluded.
    discovered: usize,
}

impl<'a, P: Pather + ?Sized> DepthLimited<'a, P> {
    fn new(pather: &'a P, origin: NodeId, destinations: &'a [NodeId]) -> Self {
        Self {
            pather,
            destinations,
            visited: HashSet::from([origin]),
            parents: HashMap::new(),
            discovered: 0,
        }
    }

    /// Search below `node` with `limit` edges left. Destinations are
    /// recognized on arrival, even with no depth left.
    fn descend(&mut self, node: NodeId, limit: usize) -> Option<NodeId> {
        if self.destinations.contains(&node) {
            return Some(node);
        }
        if limit == 0 {
            return None;
        }

        let mut nbuf: Vec<Neighbor> = Vec::new();
        self.pather.neighbors(node, &mut nbuf);
        for n in nbuf {
            if !self.visited.insert(n.id) {
                continue;
            }
            self.parents.insert(n.id, node);
            self.discovered += 1;
            if let Some(goal) = self.descend(n.id, limit - 1) {
                return Some(goal);
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Iterative deepening
// ---------------------------------------------------------------------------

impl Searcher {
    /// Iterative-deepening depth-first search.
    ///
    /// Runs depth-limited passes with limits `0..=max_depth`. The origin
    /// counts once; every pass then adds the nodes it discovers, so the
    /// reported count covers all passes, not just the successful one.
    /// Gives up with a warning once the depth cap is exhausted.
    pub fn iddfs<P: Pather + ?Sized>(
        &self,
        pather: &P,
        origin: NodeId,
        destinations: &[NodeId],
    ) -> SearchOutcome {
        let mut generated = 1;

        for limit in 0..=self.config.max_depth {
            let mut pass = DepthLimited::new(pather, origin, destinations);
            let found = pass.descend(origin, limit);
            generated += pass.discovered;
            log::trace!("iddfs: limit {limit}, {} discovered", pass.discovered);

            if let Some(goal) = found {
                return SearchOutcome::found(goal, generated, reconstruct(&pass.parents, goal));
            }
        }

        log::warn!(
            "iddfs: no destination within depth {} from node {origin}",
            self.config.max_depth
        );
        SearchOutcome::exhausted(generated)
    }
}

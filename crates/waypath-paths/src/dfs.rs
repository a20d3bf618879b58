use std::collections::{HashMap, HashSet};

use waypath_core::NodeId;

use crate::Searcher;
use crate::path::reconstruct;
use crate::searcher::SearchOutcome;
use crate::traits::Pather;

impl Searcher {
    /// Depth-first search with an explicit stack.
    ///
    /// Neighbors are pushed in descending id order so the smallest pops
    /// first. A node is marked visited, and its predecessor fixed, when it
    /// is popped; duplicates already visited are skipped then.
    pub fn dfs<P: Pather + ?Sized>(
        &self,
        pather: &P,
        origin: NodeId,
        destinations: &[NodeId],
    ) -> SearchOutcome {
        let mut stack: Vec<(NodeId, Option<NodeId>)> = vec![(origin, None)];
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
        let mut generated = 0;
        let mut nbuf = Vec::new();

        while let Some((current, parent)) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            if let Some(p) = parent {
                parents.insert(current, p);
            }
            generated += 1;
            log::trace!("dfs: expand {current}");

            if destinations.contains(&current) {
                return SearchOutcome::found(current, generated, reconstruct(&parents, current));
            }

            nbuf.clear();
            pather.neighbors(current, &mut nbuf);
            for n in nbuf.iter().rev() {
                if !visited.contains(&n.id) {
                    stack.push((n.id, Some(current)));
                }
            }
        }

        SearchOutcome::exhausted(generated)
    }
}

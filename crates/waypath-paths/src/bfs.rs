use std::collections::{HashMap, HashSet, VecDeque};

use waypath_core::NodeId;

use crate::Searcher;
use crate::path::reconstruct;
use crate::searcher::SearchOutcome;
use crate::traits::Pather;

impl Searcher {
    /// Breadth-first search for the path with the fewest edges.
    ///
    /// Neighbors are enqueued in ascending id order and marked visited on
    /// enqueue, so no node is ever queued twice. The search stops at the
    /// first destination dequeued. Edge costs are ignored.
    pub fn bfs<P: Pather + ?Sized>(
        &self,
        pather: &P,
        origin: NodeId,
        destinations: &[NodeId],
    ) -> SearchOutcome {
        let mut queue: VecDeque<NodeId> = VecDeque::from([origin]);
        let mut visited: HashSet<NodeId> = HashSet::from([origin]);
        let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
        let mut generated = 0;
        let mut nbuf = Vec::new();

        while let Some(current) = queue.pop_front() {
            generated += 1;
            if destinations.contains(&current) {
                return SearchOutcome::found(current, generated, reconstruct(&parents, current));
            }

            nbuf.clear();
            pather.neighbors(current, &mut nbuf);
            for n in &nbuf {
                if visited.insert(n.id) {
                    parents.insert(n.id, current);
                    queue.push_back(n.id);
                }
            }
        }

        SearchOutcome::exhausted(generated)
    }
}

use waypath_core::NodeId;

use crate::Searcher;
use crate::distance::heuristic;
use crate::path::reconstruct;
use crate::searcher::SearchOutcome;
use crate::state::SearchState;
use crate::traits::AstarPather;

impl Searcher {
    /// Greedy best-first search.
    ///
    /// Always expands the open node that looks closest to any destination,
    /// ignoring the cost paid to reach it. Fast on well-placed graphs, but
    /// the path it returns is not necessarily the cheapest.
    pub fn gbfs<P: AstarPather + ?Sized>(
        &self,
        pather: &P,
        origin: NodeId,
        destinations: &[NodeId],
    ) -> SearchOutcome {
        let mut st = SearchState::new();
        st.frontier
            .push(heuristic(pather, origin, destinations), origin, 0, None);
        let mut nbuf = Vec::new();

        while let Some(current) = st.pop_open() {
            if let Some(p) = current.parent {
                st.parents.insert(current.node, p);
            }
            if destinations.contains(&current.node) {
                return SearchOutcome::found(
                    current.node,
                    st.generated,
                    reconstruct(&st.parents, current.node),
                );
            }

            nbuf.clear();
            pather.neighbors(current.node, &mut nbuf);
            for n in &nbuf {
                if st.closed.contains(&n.id) {
                    continue;
                }
                let h = heuristic(pather, n.id, destinations);
                st.frontier.push(h, n.id, 0, Some(current.node));
            }
        }

        SearchOutcome::exhausted(st.generated)
    }
}

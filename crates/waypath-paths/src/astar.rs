use waypath_core::NodeId;

use crate::Searcher;
use crate::distance::heuristic;
use crate::path::reconstruct;
use crate::searcher::SearchOutcome;
use crate::state::SearchState;
use crate::traits::AstarPather;

impl Searcher {
    /// A* search for the cheapest path to any destination.
    ///
    /// Priority is `g + h` with `h` the straight-line distance to the
    /// nearest destination. A neighbor is relaxed on first discovery or when
    /// reached with a strictly lower `g`; superseded frontier entries are
    /// dropped when popped. The result is cost-optimal as long as no edge
    /// is cheaper than the distance between its endpoints.
    pub fn astar<P: AstarPather + ?Sized>(
        &self,
        pather: &P,
        origin: NodeId,
        destinations: &[NodeId],
    ) -> SearchOutcome {
        let mut st = SearchState::new();
        st.g.insert(origin, 0);
        st.frontier
            .push(heuristic(pather, origin, destinations), origin, 0, None);
        let mut nbuf = Vec::new();

        while let Some(current) = st.pop_open() {
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
                let tentative = current.g + u64::from(n.cost);
                if !st.improve(n.id, tentative) {
                    continue;
                }
                st.parents.insert(n.id, current.node);
                let h = heuristic(pather, n.id, destinations);
                st.frontier
                    .push(tentative as f64 + h, n.id, tentative, Some(current.node));
            }
        }

        SearchOutcome::exhausted(st.generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{chain, two_routes};
    use waypath_core::{Graph, Point};

    #[test]
    fn chain_generates_each_node_once() {
        let g = chain(5);
        let out = Searcher::default().astar(&g, 1, &[5]);
        assert_eq!(out.path, vec![1, 2, 3, 4, 5]);
        assert_eq!(out.nodes_generated, 5);
    }

    #[test]
    fn picks_the_cheaper_route() {
        let g = two_routes();
        let out = Searcher::default().astar(&g, 1, &[4]);
        assert_eq!(out.goal, Some(4));
        assert_eq!(out.path, vec![1, 3, 4]);
        assert_eq!(out.cost(&g), Some(3));
        assert_eq!(out.nodes_generated, 3);
    }

    #[test]
    fn cheaper_late_discovery_replaces_the_first() {
        // 3 is first reached directly at cost 10, then through 2 at cost 2.
        let mut g = Graph::new();
        for id in 1..=4 {
            g.insert_node(id, Point::ZERO);
        }
        g.add_edge(1, 3, 10);
        g.add_edge(1, 2, 1);
        g.add_edge(2, 3, 1);
        g.add_edge(3, 4, 1);
        let out = Searcher::default().astar(&g, 1, &[4]);
        assert_eq!(out.path, vec![1, 2, 3, 4]);
        assert_eq!(out.cost(&g), Some(3));
        assert_eq!(out.nodes_generated, 4);
    }

    #[test]
    fn closest_destination_by_cost() {
        let mut g = chain(6);
        g.add_edge(1, 6, 2);
        let out = Searcher::default().astar(&g, 1, &[4, 6]);
        assert_eq!(out.goal, Some(6));
        assert_eq!(out.path, vec![1, 6]);
    }

    #[test]
    fn empty_destinations_exhaust_deterministically() {
        let g = two_routes();
        let s = Searcher::default();
        let out = s.astar(&g, 1, &[]);
        assert!(!out.is_found());
        assert!(out.path.is_empty());
        assert_eq!(out.nodes_generated, 4);
        assert_eq!(out, s.astar(&g, 1, &[]));
    }

    #[test]
    fn zero_cost_edges() {
        let mut g = Graph::new();
        for id in 1..=3 {
            g.insert_node(id, Point::ZERO);
        }
        g.add_edge(1, 2, 0);
        g.add_edge(2, 3, 0);
        let out = Searcher::default().astar(&g, 1, &[3]);
        assert_eq!(out.path, vec![1, 2, 3]);
        assert_eq!(out.cost(&g), Some(0));
    }
}

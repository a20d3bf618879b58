//! Bidirectional weighted A*.
//!
//! A forward search grows from the origin over outgoing edges while a
//! backward search grows from every destination over incoming edges. Both
//! rank nodes by `g + w·h`, where the weight `w` starts high (greedy) and
//! decays towards plain A* as the search goes on. The two halves advance in
//! strict alternation; every node closed by both is a candidate meeting
//! point and the cheapest one seen is kept.

use waypath_core::{Neighbor, NodeId};

use crate::Searcher;
use crate::distance::{heuristic, weighted};
use crate::path::{chain, reconstruct};
use crate::searcher::SearchOutcome;
use crate::state::SearchState;
use crate::traits::{AstarPather, ReversePather};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Forward,
    Backward,
}

/// Outcome of a single pop.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    /// The frontier was empty.
    Exhausted,
    /// The popped entry named a node that was already closed.
    Stale,
    /// The popped node was closed by this step.
    Closed(NodeId),
}

// ---------------------------------------------------------------------------
// Meeting point
// ---------------------------------------------------------------------------

/// Cheapest meeting point recorded so far.
#[derive(Debug, Default)]
struct Meeting {
    best: Option<(NodeId, u64)>,
}

impl Meeting {
    /// Keep `node` if `cost` is strictly cheaper than the current best.
    fn offer(&mut self, node: NodeId, cost: u64) {
        if self.best.is_none_or(|(_, best)| cost < best) {
            log::trace!("bidirectional: meeting at {node}, cost {cost}");
            self.best = Some((node, cost));
        }
    }
}

// ---------------------------------------------------------------------------
// One direction
// ---------------------------------------------------------------------------

struct HalfSearch<'a> {
    side: Side,
    state: SearchState,
    /// Nodes the heuristic aims at. Closing one of them ends this half's
    /// journey at that node: it is offered as a meeting point and not
    /// expanded.
    goals: &'a [NodeId],
    nbuf: Vec<Neighbor>,
}

impl<'a> HalfSearch<'a> {
    fn new(side: Side, goals: &'a [NodeId]) -> Self {
        Self {
            side,
            state: SearchState::new(),
            goals,
            nbuf: Vec::new(),
        }
    }

    /// Put `root` on the frontier with `g = 0`. Repeated roots are ignored.
    fn seed<P: AstarPather + ?Sized>(&mut self, pather: &P, root: NodeId, weight: f64) {
        if !self.state.improve(root, 0) {
            return;
        }
        let h = heuristic(pather, root, self.goals);
        self.state.frontier.push(weighted(0, weight, h), root, 0, None);
    }

    /// Best known cost of `node`, if it is closed on this side.
    fn closed_cost(&self, node: NodeId) -> Option<u64> {
        if self.state.closed.contains(&node) {
            self.state.g.get(&node).copied()
        } else {
            None
        }
    }

    /// Pop one entry and, if it is still open, close and expand it.
    fn step<P>(&mut self, pather: &P, weight: f64, meeting: &mut Meeting) -> Step
    where
        P: AstarPather + ReversePather + ?Sized,
    {
        let Some(current) = self.state.frontier.pop() else {
            return Step::Exhausted;
        };
        if !self.state.close(current.node) {
            return Step::Stale;
        }
        let node = current.node;
        let g = self.state.g.get(&node).copied().unwrap_or(current.g);

        if self.goals.contains(&node) {
            meeting.offer(node, g);
            return Step::Closed(node);
        }

        self.nbuf.clear();
        match self.side {
            Side::Forward => pather.neighbors(node, &mut self.nbuf),
            Side::Backward => pather.predecessors(node, &mut self.nbuf),
        }
        for n in &self.nbuf {
            if self.state.closed.contains(&n.id) {
                continue;
            }
            let tentative = g + u64::from(n.cost);
            if !self.state.improve(n.id, tentative) {
                continue;
            }
            self.state.parents.insert(n.id, node);
            let h = heuristic(pather, n.id, self.goals);
            self.state
                .frontier
                .push(weighted(tentative, weight, h), n.id, tentative, Some(node));
        }
        Step::Closed(node)
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

impl Searcher {
    /// Bidirectional weighted A* search.
    ///
    /// The forward half runs on odd iterations and the backward half on even
    /// ones, one pop each; a stale pop still uses up its iteration. Every
    /// `decay_interval` iterations the heuristic weight is multiplied by
    /// `weight_decay`, never dropping below `min_weight`. The search stops
    /// when either frontier is empty or after `max_iterations`.
    ///
    /// The reported goal is the meeting node when it is a destination,
    /// otherwise the destination its backward chain leads to. The node count
    /// covers both directions.
    pub fn bidirectional<P>(
        &self,
        pather: &P,
        origin: NodeId,
        destinations: &[NodeId],
    ) -> SearchOutcome
    where
        P: AstarPather + ReversePather + ?Sized,
    {
        let cfg = &self.config;
        let origins = [origin];
        let mut weight = cfg.initial_weight.max(cfg.min_weight);

        let mut fwd = HalfSearch::new(Side::Forward, destinations);
        let mut bwd = HalfSearch::new(Side::Backward, &origins);
        fwd.seed(pather, origin, weight);
        for &d in destinations {
            bwd.seed(pather, d, weight);
        }

        let mut meeting = Meeting::default();
        let mut iterations = 0;
        while iterations < cfg.max_iterations {
            if fwd.state.frontier.is_empty() || bwd.state.frontier.is_empty() {
                break;
            }
            iterations += 1;

            let step = if iterations % 2 == 1 {
                fwd.step(pather, weight, &mut meeting)
            } else {
                bwd.step(pather, weight, &mut meeting)
            };
            if let Step::Closed(node) = step {
                if let (Some(gf), Some(gb)) = (fwd.closed_cost(node), bwd.closed_cost(node)) {
                    meeting.offer(node, gf + gb);
                }
            }

            if cfg.decay_interval > 0 && iterations % cfg.decay_interval == 0 {
                weight = (weight * cfg.weight_decay).max(cfg.min_weight);
            }
        }

        if iterations >= cfg.max_iterations {
            log::warn!(
                "bidirectional: stopped after {iterations} iterations (meeting point: {})",
                if meeting.best.is_some() { "yes" } else { "no" }
            );
        }

        let generated = fwd.state.generated + bwd.state.generated;
        let Some((node, cost)) = meeting.best else {
            return SearchOutcome::exhausted(generated);
        };

        let mut path = reconstruct(&fwd.state.parents, node);
        let tail = chain(&bwd.state.parents, node);
        let goal = if destinations.contains(&node) {
            node
        } else {
            tail.last().copied().unwrap_or(node)
        };
        path.extend(tail);
        log::debug!("bidirectional: met at {node}, cost {cost}, weight {weight:.3}");

        SearchOutcome::found(goal, generated, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchConfig;
    use crate::fixtures::{assert_edges, chain, two_routes};
    use waypath_core::{Graph, Point};

    #[test]
    fn meets_in_the_middle_of_a_chain() {
        let g = chain(4);
        let out = Searcher::default().bidirectional(&g, 1, &[4]);
        assert_eq!(out.goal, Some(4));
        assert_eq!(out.path, vec![1, 2, 3, 4]);
        assert_eq!(out.nodes_generated, 7);
    }

    #[test]
    fn returns_the_cheapest_meeting() {
        let g = two_routes();
        let out = Searcher::default().bidirectional(&g, 1, &[4]);
        assert_eq!(out.goal, Some(4));
        assert_eq!(out.path, vec![1, 3, 4]);
        assert_eq!(out.cost(&g), Some(3));
        assert_eq!(out.nodes_generated, 7);
    }

    #[test]
    fn origin_as_destination() {
        let g = chain(3);
        let out = Searcher::default().bidirectional(&g, 2, &[2]);
        assert_eq!(out.goal, Some(2));
        assert_eq!(out.path, vec![2]);
    }

    #[test]
    fn goal_comes_from_the_backward_chain() {
        // Two destinations; the one reached is the root of the backward
        // chain through the meeting node, not the first listed.
        let mut g = Graph::new();
        for (id, x) in [(1, 0), (2, 1), (3, 2), (4, 3), (5, 9)] {
            g.insert_node(id, Point::new(x, 0));
        }
        g.add_edge(1, 2, 1);
        g.add_edge(2, 3, 1);
        g.add_edge(3, 4, 1);
        g.add_edge(2, 5, 20);
        let out = Searcher::default().bidirectional(&g, 1, &[5, 4]);
        assert_eq!(out.goal, Some(4));
        assert_eq!(out.path, vec![1, 2, 3, 4]);
        assert_edges(&g, &out.path);
    }

    #[test]
    fn unreachable_counts_both_directions() {
        let mut g = Graph::new();
        g.insert_node(1, Point::new(0, 0));
        g.insert_node(2, Point::new(1, 0));
        g.insert_node(3, Point::new(5, 0));
        g.insert_node(4, Point::new(6, 0));
        g.add_edge(1, 2, 1);
        g.add_edge(3, 4, 1);
        let out = Searcher::default().bidirectional(&g, 1, &[4]);
        assert!(!out.is_found());
        // Forward closes 1, backward closes 4, forward closes 2 and is left
        // with an empty frontier, which ends the search.
        assert_eq!(out.nodes_generated, 3);
    }

    #[test]
    fn no_destinations_generate_nothing() {
        let out = Searcher::default().bidirectional(&chain(3), 1, &[]);
        assert!(!out.is_found());
        assert_eq!(out.nodes_generated, 0);
    }

    #[test]
    fn iteration_cap_ends_the_search() {
        let g = chain(20);
        let s = Searcher::new(SearchConfig {
            max_iterations: 4,
            ..SearchConfig::default()
        });
        let out = s.bidirectional(&g, 1, &[20]);
        assert!(!out.is_found());
        assert_eq!(out.nodes_generated, 4);
    }

    #[test]
    fn duplicate_destinations_seed_once() {
        let g = chain(3);
        let a = Searcher::default().bidirectional(&g, 1, &[3]);
        let b = Searcher::default().bidirectional(&g, 1, &[3, 3]);
        assert_eq!(a, b);
    }

    #[test]
    fn meeting_keeps_first_of_equal_costs() {
        let mut m = Meeting::default();
        m.offer(7, 5);
        m.offer(3, 5);
        assert_eq!(m.best, Some((7, 5)));
        m.offer(3, 4);
        assert_eq!(m.best, Some((3, 4)));
    }

    #[test]
    fn weight_floor_is_plain_astar() {
        let g = two_routes();
        let s = Searcher::new(SearchConfig {
            initial_weight: 1.0,
            ..SearchConfig::default()
        });
        let out = s.bidirectional(&g, 1, &[4]);
        assert_eq!(out.cost(&g), Some(3));
    }
}

//! Random route problems.
//!
//! Nodes are scattered over a square grid and each one is linked to its
//! nearest neighbours. Edge costs never undercut the straight-line distance
//! between their endpoints, so the Euclidean heuristic stays admissible and
//! consistent on every generated graph.

use std::collections::HashSet;

use rand::{Rng, RngExt};

use crate::geom::Point;
use crate::graph::{Cost, Graph, NodeId};
use crate::problem::Problem;

/// Shape of the generated problems.
#[derive(Debug, Clone)]
pub struct GenParams {
    /// Number of nodes, numbered `1..=nodes`.
    pub nodes: usize,
    /// Outgoing edges per node, to its nearest other nodes.
    pub links: usize,
    /// Largest random surcharge added on top of the rounded-up distance.
    pub slack: Cost,
    /// Number of destinations (at least one).
    pub destinations: usize,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            nodes: 30,
            links: 3,
            slack: 3,
            destinations: 2,
        }
    }
}

/// Seedable generator of [`Problem`]s.
pub struct ProblemGen<R: Rng> {
    pub rng: R,
    pub params: GenParams,
}

impl<R: Rng> ProblemGen<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R, params: GenParams) -> Self {
        Self { rng, params }
    }

    /// Generate one problem. The same RNG state always yields the same
    /// problem.
    pub fn generate(&mut self) -> Problem {
        let n = self.params.nodes.max(1);
        let side = ((n as f64).sqrt().ceil() as i32 * 3).max(2);

        let mut seen = HashSet::with_capacity(n);
        let mut points = Vec::with_capacity(n);
        while points.len() < n {
            let p = Point::new(
                self.rng.random_range(0..side),
                self.rng.random_range(0..side),
            );
            if seen.insert(p) {
                points.push(p);
            }
        }

        let mut graph = Graph::new();
        for (i, &p) in points.iter().enumerate() {
            graph.insert_node(node_id(i), p);
        }

        let mut nearest: Vec<(f64, usize)> = Vec::with_capacity(n);
        for (i, &p) in points.iter().enumerate() {
            nearest.clear();
            nearest.extend(
                points
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(j, &q)| (p.distance(q), j)),
            );
            nearest.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
            for &(dist, j) in nearest.iter().take(self.params.links) {
                let cost = dist.ceil() as Cost + self.rng.random_range(0..=self.params.slack);
                graph.add_edge(node_id(i), node_id(j), cost);
            }
        }

        let origin = node_id(self.rng.random_range(0..n));
        let mut candidates: Vec<NodeId> = (0..n).map(node_id).filter(|&id| id != origin).collect();
        let destinations = if candidates.is_empty() {
            vec![origin]
        } else {
            let want = self.params.destinations.clamp(1, candidates.len());
            let mut picked = Vec::with_capacity(want);
            for _ in 0..want {
                let k = self.rng.random_range(0..candidates.len());
                picked.push(candidates.swap_remove(k));
            }
            picked
        };

        log::debug!(
            "generated problem: {} nodes, {} edges, origin {origin}, destinations {destinations:?}",
            graph.node_count(),
            graph.edge_count()
        );

        Problem {
            graph,
            origin,
            destinations,
        }
    }
}

#[inline]
fn node_id(index: usize) -> NodeId {
    index as NodeId + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generate(seed: u64, params: GenParams) -> Problem {
        ProblemGen::new(StdRng::seed_from_u64(seed), params).generate()
    }

    #[test]
    fn same_seed_same_problem() {
        let a = generate(7, GenParams::default());
        let b = generate(7, GenParams::default());
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn shape_follows_params() {
        let params = GenParams {
            nodes: 25,
            links: 4,
            slack: 0,
            destinations: 3,
        };
        let p = generate(11, params);
        assert_eq!(p.graph.node_count(), 25);
        assert_eq!(p.graph.edge_count(), 25 * 4);
        assert_eq!(p.destinations.len(), 3);
        assert!(!p.destinations.contains(&p.origin));
        for id in p.graph.node_ids() {
            assert_eq!(p.graph.neighbors(id).len(), 4);
        }
    }

    #[test]
    fn costs_never_undercut_distance() {
        let p = generate(3, GenParams::default());
        for (from, n) in p.graph.edges() {
            let (Some(a), Some(b)) = (p.graph.position(from), p.graph.position(n.id)) else {
                panic!("generated node without position");
            };
            assert!(f64::from(n.cost) >= a.distance(b));
            assert!(n.cost >= 1);
        }
    }

    #[test]
    fn single_node_targets_itself() {
        let p = generate(
            1,
            GenParams {
                nodes: 1,
                ..GenParams::default()
            },
        );
        assert_eq!(p.destinations, vec![p.origin]);
        assert_eq!(p.graph.edge_count(), 0);
    }
}

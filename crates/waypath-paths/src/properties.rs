//! Property tests over randomly generated problems.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use waypath_core::{GenParams, Graph, NodeId, Point, Problem, ProblemGen};

use crate::{Method, Searcher};

fn problem(seed: u64, nodes: usize, links: usize, destinations: usize) -> Problem {
    let params = GenParams {
        nodes,
        links,
        slack: 3,
        destinations,
    };
    ProblemGen::new(StdRng::seed_from_u64(seed), params).generate()
}

fn arb_problem() -> impl Strategy<Value = Problem> {
    (any::<u64>(), 2usize..40, 1usize..4, 1usize..4)
        .prop_map(|(seed, nodes, links, dests)| problem(seed, nodes, links, dests))
}

/// Plain Dijkstra to the nearest destination.
fn cheapest(graph: &Graph, origin: NodeId, destinations: &[NodeId]) -> Option<u64> {
    let mut dist: HashMap<NodeId, u64> = HashMap::from([(origin, 0)]);
    let mut heap = BinaryHeap::from([Reverse((0u64, origin))]);
    while let Some(Reverse((d, node))) = heap.pop() {
        if dist.get(&node).is_some_and(|&best| d > best) {
            continue;
        }
        if destinations.contains(&node) {
            return Some(d);
        }
        for n in graph.neighbors(node) {
            let nd = d + u64::from(n.cost);
            if dist.get(&n.id).is_none_or(|&best| nd < best) {
                dist.insert(n.id, nd);
                heap.push(Reverse((nd, n.id)));
            }
        }
    }
    None
}

/// Same graph with every node moved to the origin of the plane, which
/// turns every heuristic into zero.
fn flattened(graph: &Graph) -> Graph {
    let mut flat = graph.clone();
    for id in graph.node_ids() {
        flat.insert_node(id, Point::ZERO);
    }
    flat
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn paths_are_walkable(p in arb_problem()) {
        let s = Searcher::default();
        for m in Method::ALL {
            let out = s.run(m, &p.graph, p.origin, &p.destinations);
            prop_assert!(out.nodes_generated >= 1, "{}", m);
            if out.is_found() {
                prop_assert_eq!(out.path.first(), Some(&p.origin), "{}", m);
                prop_assert_eq!(out.path.last(), out.goal.as_ref(), "{}", m);
                prop_assert!(p.destinations.contains(&out.goal.unwrap_or_default()), "{}", m);
                for w in out.path.windows(2) {
                    prop_assert!(p.graph.edge_cost(w[0], w[1]).is_some(), "{}: {:?}", m, w);
                }
            } else {
                prop_assert!(out.path.is_empty(), "{}", m);
            }
        }
    }

    #[test]
    fn every_search_is_reproducible(p in arb_problem()) {
        let s = Searcher::default();
        for m in Method::ALL {
            let a = s.run(m, &p.graph, p.origin, &p.destinations);
            let b = s.run(m, &p.graph, p.origin, &p.destinations);
            prop_assert_eq!(a, b, "{}", m);
        }
    }

    #[test]
    fn exhaustive_methods_agree_on_reachability(p in arb_problem()) {
        let s = Searcher::default();
        let reachable = cheapest(&p.graph, p.origin, &p.destinations).is_some();
        for m in [Method::Bfs, Method::Dfs, Method::Gbfs, Method::Astar, Method::Iddfs] {
            let out = s.run(m, &p.graph, p.origin, &p.destinations);
            prop_assert_eq!(out.is_found(), reachable, "{}", m);
        }
    }

    #[test]
    fn astar_is_cost_optimal(p in arb_problem()) {
        let out = Searcher::default().astar(&p.graph, p.origin, &p.destinations);
        prop_assert_eq!(out.cost(&p.graph), cheapest(&p.graph, p.origin, &p.destinations));
    }

    #[test]
    fn bfs_uses_fewest_edges(p in arb_problem()) {
        let mut unit = Graph::new();
        for (from, n) in p.graph.edges() {
            unit.add_edge(from, n.id, 1);
        }
        let out = Searcher::default().bfs(&p.graph, p.origin, &p.destinations);
        let hops = cheapest(&unit, p.origin, &p.destinations);
        prop_assert_eq!(out.is_found().then(|| out.path_len() as u64), hops);
    }

    #[test]
    fn unweighted_bidirectional_is_cost_optimal(p in arb_problem()) {
        let flat = flattened(&p.graph);
        let out = Searcher::default().bidirectional(&flat, p.origin, &p.destinations);
        prop_assert_eq!(out.cost(&flat), cheapest(&flat, p.origin, &p.destinations));
    }
}

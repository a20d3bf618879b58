//! Small graphs shared by the strategy tests.

use waypath_core::{Graph, NodeId, Point};

/// `1 -> 2 -> … -> n`, unit costs, node `i` at `(i, 0)`.
pub(crate) fn chain(n: NodeId) -> Graph {
    let mut g = Graph::new();
    for id in 1..=n {
        g.insert_node(id, Point::new(id as i32, 0));
    }
    for id in 1..n {
        g.add_edge(id, id + 1, 1);
    }
    g
}

/// Two routes from 1 to 4: `1 -> 2 -> 4` costing 10 and `1 -> 3 -> 4`
/// costing 3. Both have two edges.
pub(crate) fn two_routes() -> Graph {
    let mut g = Graph::new();
    g.insert_node(1, Point::new(0, 0));
    g.insert_node(2, Point::new(1, 2));
    g.insert_node(3, Point::new(2, 0));
    g.insert_node(4, Point::new(3, 0));
    g.add_edge(1, 2, 5);
    g.add_edge(2, 4, 5);
    g.add_edge(1, 3, 2);
    g.add_edge(3, 4, 1);
    g
}

/// Every consecutive pair of `path` must be an edge of `g`.
pub(crate) fn assert_edges(g: &Graph, path: &[NodeId]) {
    for w in path.windows(2) {
        assert!(
            g.edge_cost(w[0], w[1]).is_some(),
            "{} -> {} is not an edge",
            w[0],
            w[1]
        );
    }
}

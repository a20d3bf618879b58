use waypath_core::{Graph, Neighbor, NodeId, Point};

/// Minimal search interface: out-neighbor enumeration.
pub trait Pather {
    /// Append the outgoing edges of `node` into `buf`, ascending by target
    /// id. The caller clears `buf` before calling.
    fn neighbors(&self, node: NodeId, buf: &mut Vec<Neighbor>);
}

/// Pather that can also walk edges backwards.
pub trait ReversePather: Pather {
    /// Append the incoming edges of `node` into `buf`, ascending by source
    /// id. The caller clears `buf` before calling.
    fn predecessors(&self, node: NodeId, buf: &mut Vec<Neighbor>);
}

/// Pather whose nodes may be placed in the plane, enabling the Euclidean
/// heuristic.
pub trait AstarPather: Pather {
    /// Coordinate of `node`, or `None` if it has none.
    fn position(&self, node: NodeId) -> Option<Point>;
}

impl Pather for Graph {
    fn neighbors(&self, node: NodeId, buf: &mut Vec<Neighbor>) {
        buf.extend_from_slice(Graph::neighbors(self, node));
    }
}

impl ReversePather for Graph {
    fn predecessors(&self, node: NodeId, buf: &mut Vec<Neighbor>) {
        buf.extend_from_slice(Graph::predecessors(self, node));
    }
}

impl AstarPather for Graph {
    fn position(&self, node: NodeId) -> Option<Point> {
        Graph::position(self, node)
    }
}

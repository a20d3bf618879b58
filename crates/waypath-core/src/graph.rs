//! The graph store: node coordinates plus sorted forward and reverse
//! adjacency.

use std::collections::HashMap;

use crate::geom::Point;

/// Opaque positive node identifier.
pub type NodeId = u32;

/// Non-negative edge cost.
pub type Cost = u32;

/// One end of a directed edge as seen from the other end.
///
/// In forward adjacency `id` is the edge target; in reverse adjacency it is
/// the edge source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbor {
    pub id: NodeId,
    pub cost: Cost,
}

impl Neighbor {
    /// Create a new neighbor entry.
    #[inline]
    pub const fn new(id: NodeId, cost: Cost) -> Self {
        Self { id, cost }
    }
}

/// Directed, weighted graph embedded in the plane.
///
/// Every adjacency list is kept ordered by ascending neighbor id, with
/// parallel edges preserved in insertion order. Searches rely on this order
/// for deterministic tie-breaking. The reverse index mirrors the forward one
/// so that backward searches never have to scan all edges.
///
/// Mutation needs `&mut self`; a `&Graph` can be shared freely between
/// concurrent searches.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    positions: HashMap<NodeId, Point>,
    outgoing: HashMap<NodeId, Vec<Neighbor>>,
    incoming: HashMap<NodeId, Vec<Neighbor>>,
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coordinate of `id`, returning the previous one if any.
    pub fn insert_node(&mut self, id: NodeId, pos: Point) -> Option<Point> {
        self.positions.insert(id, pos)
    }

    /// Add a directed edge `from -> to`.
    ///
    /// Endpoints do not need a coordinate; uninformed searches never look at
    /// positions.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cost: Cost) {
        insert_sorted(self.outgoing.entry(from).or_default(), Neighbor::new(to, cost));
        insert_sorted(self.incoming.entry(to).or_default(), Neighbor::new(from, cost));
        self.edge_count += 1;
    }

    /// Coordinate of `id`, if known.
    #[inline]
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    /// Whether `id` has a coordinate.
    #[inline]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Outgoing edges of `id`, ascending by target.
    #[inline]
    pub fn neighbors(&self, id: NodeId) -> &[Neighbor] {
        self.outgoing.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Incoming edges of `id`, ascending by source.
    #[inline]
    pub fn predecessors(&self, id: NodeId) -> &[Neighbor] {
        self.incoming.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cheapest cost of a direct edge `from -> to`.
    pub fn edge_cost(&self, from: NodeId, to: NodeId) -> Option<Cost> {
        self.neighbors(from)
            .iter()
            .filter(|n| n.id == to)
            .map(|n| n.cost)
            .min()
    }

    /// Number of nodes with a coordinate.
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of edges, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Ids of all positioned nodes, ascending.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.positions.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// All edges as `(source, target)` pairs, ascending by source and then
    /// in adjacency order.
    pub fn edges(&self) -> Vec<(NodeId, Neighbor)> {
        let mut sources: Vec<NodeId> = self.outgoing.keys().copied().collect();
        sources.sort_unstable();
        sources
            .into_iter()
            .flat_map(|s| self.neighbors(s).iter().map(move |&n| (s, n)))
            .collect()
    }
}

/// Insert after any entries with the same id so parallel edges keep their
/// insertion order.
fn insert_sorted(list: &mut Vec<Neighbor>, n: Neighbor) {
    let at = list.partition_point(|e| e.id <= n.id);
    list.insert(at, n);
}

use std::collections::HashMap;

use waypath_core::NodeId;

use crate::traits::Pather;

/// Rebuild the path ending at `terminal` from a predecessor map.
///
/// Walks predecessor links back to the root (the first node without one)
/// and returns the nodes root-first.
pub fn reconstruct(parents: &HashMap<NodeId, NodeId>, terminal: NodeId) -> Vec<NodeId> {
    let mut path = vec![terminal];
    path.extend(chain(parents, terminal));
    path.reverse();
    path
}

/// Predecessors of `start` in walking order, `start` itself excluded.
///
/// For a backward search this is the tail from a meeting node to the
/// destination that seeded it.
pub(crate) fn chain(parents: &HashMap<NodeId, NodeId>, start: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut node = start;
    while let Some(&p) = parents.get(&node) {
        out.push(p);
        node = p;
        // A well-formed map is acyclic; bail out rather than loop forever.
        if out.len() > parents.len() {
            log::warn!("predecessor cycle through node {node}");
            break;
        }
    }
    out
}

/// Total cost of `path`, using the cheapest edge between each consecutive
/// pair. `None` if some pair is not connected.
pub fn path_cost<P: Pather + ?Sized>(pather: &P, path: &[NodeId]) -> Option<u64> {
    let mut nbuf = Vec::new();
    let mut total = 0u64;
    for w in path.windows(2) {
        nbuf.clear();
        pather.neighbors(w[0], &mut nbuf);
        let step = nbuf.iter().filter(|n| n.id == w[1]).map(|n| n.cost).min()?;
        total += u64::from(step);
    }
    Some(total)
}

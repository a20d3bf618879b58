use waypath_core::NodeId;

use crate::traits::AstarPather;

/// Straight-line distance from `node` to the nearest of `goals`.
///
/// Goals without a coordinate are skipped. Returns `f64::INFINITY` when
/// `goals` is empty, when `node` has no coordinate, or when no goal has one.
pub fn heuristic<P: AstarPather + ?Sized>(pather: &P, node: NodeId, goals: &[NodeId]) -> f64 {
    let Some(from) = pather.position(node) else {
        return f64::INFINITY;
    };
    goals
        .iter()
        .filter_map(|&g| pather.position(g))
        .map(|to| from.distance(to))
        .fold(f64::INFINITY, f64::min)
}

/// `g + w·h`, staying infinite when `h` is, whatever the weight.
#[inline]
pub(crate) fn weighted(g: u64, weight: f64, h: f64) -> f64 {
    if h.is_infinite() {
        f64::INFINITY
    } else {
        g as f64 + weight * h
    }
}

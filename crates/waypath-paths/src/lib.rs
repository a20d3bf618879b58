//! Route search strategies over weighted, directed graphs in the plane.
//!
//! Every strategy finds a route from one origin to any of several
//! destinations and reports the same [`SearchOutcome`]: the destination
//! reached, the number of nodes generated, and the path.
//!
//! - **BFS** fewest-edges search ([`Searcher::bfs`])
//! - **DFS** depth-first search ([`Searcher::dfs`])
//! - **IDDFS** iterative-deepening depth-first search ([`Searcher::iddfs`])
//! - **GBFS** greedy best-first search ([`Searcher::gbfs`])
//! - **A\*** cost-optimal search ([`Searcher::astar`])
//! - **Bidirectional weighted A\*** with a decaying heuristic weight
//!   ([`Searcher::bidirectional`])
//!
//! All priority-queue strategies share one [`Frontier`] whose ordering is
//! priority, then node id, then insertion order, so a search is fully
//! reproducible. Per-search state lives inside each call; a [`Searcher`]
//! only carries its [`SearchConfig`] and can be shared between threads.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS, DFS, IDDFS |
//! | [`AstarPather`] : [`Pather`] | GBFS, A* |
//! | [`AstarPather`] + [`ReversePather`] | bidirectional A* |

mod astar;
mod bfs;
mod bidirectional;
mod dfs;
mod distance;
mod frontier;
mod gbfs;
mod iddfs;
mod method;
mod path;
mod searcher;
mod state;
mod traits;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod properties;

pub use distance::heuristic;
pub use frontier::{Candidate, Frontier};
pub use method::{Method, UnknownMethod};
pub use path::{path_cost, reconstruct};
pub use searcher::{SearchConfig, SearchOutcome, Searcher};
pub use traits::{AstarPather, Pather, ReversePather};

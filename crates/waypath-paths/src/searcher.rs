use std::fmt;

use waypath_core::NodeId;

use crate::method::Method;
use crate::path::path_cost;
use crate::traits::{AstarPather, Pather, ReversePather};

// ---------------------------------------------------------------------------
// SearchOutcome
// ---------------------------------------------------------------------------

/// Result shared by every strategy.
///
/// `goal == None` with an empty `path` means the search was exhausted (or
/// stopped at its depth/iteration cap) without reaching a destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub goal: Option<NodeId>,
    /// Nodes popped from the frontier and finalized.
    pub nodes_generated: usize,
    /// Origin first, goal last.
    pub path: Vec<NodeId>,
}

impl SearchOutcome {
    /// A successful search.
    pub fn found(goal: NodeId, nodes_generated: usize, path: Vec<NodeId>) -> Self {
        Self {
            goal: Some(goal),
            nodes_generated,
            path,
        }
    }

    /// A search that reached no destination.
    pub fn exhausted(nodes_generated: usize) -> Self {
        Self {
            goal: None,
            nodes_generated,
            path: Vec::new(),
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.goal.is_some()
    }

    /// Number of edges on the path.
    pub fn path_len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Total edge cost of the path in `pather`, or `None` if nothing was
    /// found.
    pub fn cost<P: Pather + ?Sized>(&self, pather: &P) -> Option<u64> {
        if !self.is_found() {
            return None;
        }
        path_cost(pather, &self.path)
    }
}

impl fmt::Display for SearchOutcome {
    /// `goal nodes` followed by the path joined with arrows, or
    /// `No path found`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.goal {
            Some(goal) => {
                writeln!(f, "{goal} {}", self.nodes_generated)?;
                let nodes: Vec<String> = self.path.iter().map(|n| n.to_string()).collect();
                write!(f, "{}", nodes.join(" -> "))
            }
            None => write!(f, "No path found"),
        }
    }
}

// ---------------------------------------------------------------------------
// SearchConfig
// ---------------------------------------------------------------------------

/// Tunables for the capped and weighted strategies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Deepest limit IDDFS tries before giving up. Each pass recurses once
    /// per level, so very large values need a correspondingly large stack.
    pub max_depth: usize,
    /// Heuristic weight the bidirectional search starts with.
    pub initial_weight: f64,
    /// Floor of the decaying weight; 1.0 behaves like plain A*.
    pub min_weight: f64,
    /// Factor applied to the weight at every decay checkpoint.
    pub weight_decay: f64,
    /// Combined forward + backward iterations between decay checkpoints.
    pub decay_interval: usize,
    /// Combined iteration cap of the bidirectional search.
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 50,
            initial_weight: 2.0,
            min_weight: 1.0,
            weight_decay: 0.95,
            decay_interval: 10,
            max_iterations: 1000,
        }
    }
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Entry point for all strategies.
///
/// A `Searcher` holds only its configuration. Every call builds and drops
/// its own frontier, closed set and score maps, so one searcher (and one
/// graph) can serve any number of concurrent searches.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    pub(crate) config: SearchConfig,
}

impl Searcher {
    /// Create a searcher with the given tunables.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The tunables in use.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run `method` from `origin` towards any of `destinations`.
    pub fn run<P: AstarPather + ReversePather + ?Sized>(
        &self,
        method: Method,
        pather: &P,
        origin: NodeId,
        destinations: &[NodeId],
    ) -> SearchOutcome {
        let outcome = match method {
            Method::Bfs => self.bfs(pather, origin, destinations),
            Method::Dfs => self.dfs(pather, origin, destinations),
            Method::Gbfs => self.gbfs(pather, origin, destinations),
            Method::Astar => self.astar(pather, origin, destinations),
            Method::Iddfs => self.iddfs(pather, origin, destinations),
            Method::Bidirectional => self.bidirectional(pather, origin, destinations),
        };
        log::debug!(
            "{method}: goal {:?}, {} nodes generated, {} edges",
            outcome.goal,
            outcome.nodes_generated,
            outcome.path_len()
        );
        outcome
    }
}

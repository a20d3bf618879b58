use std::fmt;
use std::str::FromStr;

/// A search strategy, identified on the command line by its short code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    #[cfg_attr(feature = "serde", serde(rename = "BFS"))]
    Bfs,
    #[cfg_attr(feature = "serde", serde(rename = "DFS"))]
    Dfs,
    #[cfg_attr(feature = "serde", serde(rename = "GBFS"))]
    Gbfs,
    #[cfg_attr(feature = "serde", serde(rename = "AS"))]
    Astar,
    #[cfg_attr(feature = "serde", serde(rename = "CUS1"))]
    Iddfs,
    #[cfg_attr(feature = "serde", serde(rename = "CUS2"))]
    Bidirectional,
}

impl Method {
    /// Every method, in reporting order.
    pub const ALL: [Method; 6] = [
        Method::Bfs,
        Method::Dfs,
        Method::Gbfs,
        Method::Astar,
        Method::Iddfs,
        Method::Bidirectional,
    ];

    /// Short code: `BFS`, `DFS`, `GBFS`, `AS`, `CUS1` or `CUS2`.
    pub fn code(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Gbfs => "GBFS",
            Self::Astar => "AS",
            Self::Iddfs => "CUS1",
            Self::Bidirectional => "CUS2",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "breadth-first search",
            Self::Dfs => "depth-first search",
            Self::Gbfs => "greedy best-first search",
            Self::Astar => "A* search",
            Self::Iddfs => "iterative-deepening depth-first search",
            Self::Bidirectional => "bidirectional weighted A* search",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    /// Parse a method code, ignoring case. `ASTAR`, `IDDFS` and `BDWA` are
    /// accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BFS" => Ok(Self::Bfs),
            "DFS" => Ok(Self::Dfs),
            "GBFS" => Ok(Self::Gbfs),
            "AS" | "ASTAR" => Ok(Self::Astar),
            "CUS1" | "IDDFS" => Ok(Self::Iddfs),
            "CUS2" | "BDWA" => Ok(Self::Bidirectional),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

/// A method code that names no strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = Method::ALL.iter().map(|m| m.code()).collect();
        write!(
            f,
            "unknown method \u{201c}{}\u{201d} (available: {})",
            self.0,
            codes.join(", ")
        )
    }
}

impl std::error::Error for UnknownMethod {}

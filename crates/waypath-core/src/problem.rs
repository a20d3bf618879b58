//! Route problems and their text format.
//!
//! A problem file is split into sections by header lines ending in `:`.
//!
//! ```text
//! Nodes:
//! 1: (4,1)
//! 2: (2,2)
//! Edges:
//! (2,1): 4
//! Origin:
//! 2
//! Destinations:
//! 1; 3
//! ```
//!
//! Blank lines and surrounding whitespace are ignored, as are lines in
//! unknown sections. Edges may be listed in any order; the [`Graph`] keeps
//! each adjacency list sorted.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use crate::geom::Point;
use crate::graph::{Cost, Graph, NodeId};

/// A graph together with the origin and the acceptable destinations.
#[derive(Clone, Debug)]
pub struct Problem {
    pub graph: Graph,
    pub origin: NodeId,
    pub destinations: Vec<NodeId>,
}

impl Problem {
    /// Read and parse a problem file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProblemError> {
        let text = fs::read_to_string(path.as_ref())?;
        text.parse()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Section {
    Nodes,
    Edges,
    Origin,
    Destinations,
    Unknown,
}

impl Section {
    fn from_header(name: &str) -> Self {
        match name.trim() {
            "Nodes" => Self::Nodes,
            "Edges" => Self::Edges,
            "Origin" => Self::Origin,
            "Destinations" => Self::Destinations,
            _ => Self::Unknown,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Nodes => "Nodes",
            Self::Edges => "Edges",
            Self::Origin => "Origin",
            Self::Destinations => "Destinations",
            Self::Unknown => "unknown",
        }
    }
}

impl FromStr for Problem {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut graph = Graph::new();
        let mut edges: Vec<(usize, NodeId, NodeId, Cost)> = Vec::new();
        let mut origin: Option<(usize, NodeId)> = None;
        let mut destinations: Vec<(usize, NodeId)> = Vec::new();
        let mut section = Section::Unknown;

        for (idx, raw) in s.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(header) = line.strip_suffix(':') {
                section = Section::from_header(header);
                if section == Section::Unknown {
                    log::debug!("ignoring section `{header}` at line {line_no}");
                }
                continue;
            }

            match section {
                Section::Unknown => {}
                Section::Nodes => {
                    let (id, pos) =
                        parse_node(line).ok_or_else(|| malformed(line_no, section, line))?;
                    if graph.insert_node(id, pos).is_some() {
                        log::warn!("node {id} redefined at line {line_no}");
                    }
                }
                Section::Edges => {
                    let (from, to, cost) = parse_edge(line, line_no)?;
                    edges.push((line_no, from, to, cost));
                }
                Section::Origin => {
                    if origin.is_some() {
                        log::warn!("extra origin line {line_no} ignored");
                        continue;
                    }
                    let id = parse_id(line).ok_or_else(|| malformed(line_no, section, line))?;
                    origin = Some((line_no, id));
                }
                Section::Destinations => {
                    for item in line.split(';').map(str::trim).filter(|i| !i.is_empty()) {
                        let id =
                            parse_id(item).ok_or_else(|| malformed(line_no, section, line))?;
                        destinations.push((line_no, id));
                    }
                }
            }
        }

        for (line, from, to, cost) in edges {
            for node in [from, to] {
                if !graph.contains_node(node) {
                    return Err(ProblemError::UnknownNode { line, node });
                }
            }
            graph.add_edge(from, to, cost);
        }

        let (line, origin) = origin.ok_or(ProblemError::MissingOrigin)?;
        if !graph.contains_node(origin) {
            return Err(ProblemError::UnknownNode { line, node: origin });
        }
        if destinations.is_empty() {
            return Err(ProblemError::MissingDestinations);
        }
        for &(line, node) in &destinations {
            if !graph.contains_node(node) {
                return Err(ProblemError::UnknownNode { line, node });
            }
        }

        Ok(Problem {
            graph,
            origin,
            destinations: destinations.into_iter().map(|(_, id)| id).collect(),
        })
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodes:")?;
        for id in self.graph.node_ids() {
            if let Some(pos) = self.graph.position(id) {
                writeln!(f, "{id}: {pos}")?;
            }
        }
        writeln!(f, "Edges:")?;
        for (from, n) in self.graph.edges() {
            writeln!(f, "({from},{}): {}", n.id, n.cost)?;
        }
        writeln!(f, "Origin:")?;
        writeln!(f, "{}", self.origin)?;
        writeln!(f, "Destinations:")?;
        let dests: Vec<String> = self.destinations.iter().map(|d| d.to_string()).collect();
        writeln!(f, "{}", dests.join("; "))
    }
}

// ---------------------------------------------------------------------------
// Line parsers
// ---------------------------------------------------------------------------

fn parse_id(s: &str) -> Option<NodeId> {
    s.trim().parse().ok()
}

/// Split `(a,b)` into its two halves. Parentheses are optional.
fn parse_pair(s: &str) -> Option<(&str, &str)> {
    let s = s.trim();
    let s = s.strip_prefix('(').unwrap_or(s);
    let s = s.strip_suffix(')').unwrap_or(s);
    let (a, b) = s.split_once(',')?;
    Some((a.trim(), b.trim()))
}

/// `1: (4,1)`
fn parse_node(line: &str) -> Option<(NodeId, Point)> {
    let (id, coord) = line.split_once(':')?;
    let (x, y) = parse_pair(coord)?;
    Some((parse_id(id)?, Point::new(x.parse().ok()?, y.parse().ok()?)))
}

/// `(2,1): 4`
fn parse_edge(line: &str, line_no: usize) -> Result<(NodeId, NodeId, Cost), ProblemError> {
    let bad = || malformed(line_no, Section::Edges, line);
    let (pair, cost) = line.split_once(':').ok_or_else(bad)?;
    let (from, to) = parse_pair(pair).ok_or_else(bad)?;
    let from = parse_id(from).ok_or_else(bad)?;
    let to = parse_id(to).ok_or_else(bad)?;
    let cost = cost.trim();
    match cost.parse::<Cost>() {
        Ok(c) => Ok((from, to, c)),
        Err(_) => match cost.parse::<i64>() {
            Ok(c) if c < 0 => Err(ProblemError::NegativeCost {
                line: line_no,
                cost: c,
            }),
            _ => Err(bad()),
        },
    }
}

fn malformed(line: usize, section: Section, content: &str) -> ProblemError {
    ProblemError::Malformed {
        line,
        section: section.name(),
        content: content.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a problem.
#[derive(Debug)]
pub enum ProblemError {
    /// The file could not be read.
    Io(io::Error),
    /// A line could not be parsed for its section.
    Malformed {
        line: usize,
        section: &'static str,
        content: String,
    },
    /// An edge cost below zero.
    NegativeCost { line: usize, cost: i64 },
    /// An edge endpoint, the origin or a destination has no coordinate.
    UnknownNode { line: usize, node: NodeId },
    /// No `Origin:` value.
    MissingOrigin,
    /// No `Destinations:` values.
    MissingDestinations,
}

impl fmt::Display for ProblemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "problem: {e}"),
            Self::Malformed {
                line,
                section,
                content,
            } => write!(f, "problem: line {line}: malformed {section} entry \u{201c}{content}\u{201d}"),
            Self::NegativeCost { line, cost } => {
                write!(f, "problem: line {line}: negative edge cost {cost}")
            }
            Self::UnknownNode { line, node } => {
                write!(f, "problem: line {line}: node {node} has no coordinates")
            }
            Self::MissingOrigin => write!(f, "problem: missing origin"),
            Self::MissingDestinations => write!(f, "problem: missing destinations"),
        }
    }
}

impl std::error::Error for ProblemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ProblemError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Neighbor;

    const SAMPLE: &str = "\
Nodes:
1: (4,1)
2: (2,2)
3: (4,4)
4: (6,3)
5: (5,6)
6: (7,5)

Edges:
(2,1): 4
(3,1): 5
(1,3): 5
(2,3): 4
(3,2): 5
(4,1): 6
(1,4): 6
(4,3): 5
(3,5): 6
(5,3): 6
(4,5): 7
(5,4): 8
(6,3): 7
(3,6): 7
Origin:
2
Destinations:
5; 4
";

    #[test]
    fn parse_sample() {
        let p: Problem = SAMPLE.parse().unwrap();
        assert_eq!(p.origin, 2);
        assert_eq!(p.destinations, vec![5, 4]);
        assert_eq!(p.graph.node_count(), 6);
        assert_eq!(p.graph.edge_count(), 14);
        assert_eq!(p.graph.position(3), Some(Point::new(4, 4)));
        assert_eq!(
            p.graph.neighbors(3),
            &[Neighbor::new(1, 5), Neighbor::new(2, 5), Neighbor::new(5, 6), Neighbor::new(6, 7)]
        );
    }

    #[test]
    fn whitespace_and_unknown_sections_are_tolerated() {
        let text = "  Comments:\nwhatever\nNodes:\n 1 : ( 0 , 0 ) \n2: (1,0)\nEdges:\n( 1 , 2 ) : 3\nOrigin:\n1\nDestinations:\n2;\n";
        let p: Problem = text.parse().unwrap();
        assert_eq!(p.graph.neighbors(1), &[Neighbor::new(2, 3)]);
        assert_eq!(p.destinations, vec![2]);
    }

    #[test]
    fn missing_origin() {
        let err = "Nodes:\n1: (0,0)\nDestinations:\n1\n".parse::<Problem>().unwrap_err();
        assert!(matches!(err, ProblemError::MissingOrigin));
    }

    #[test]
    fn missing_destinations() {
        let err = "Nodes:\n1: (0,0)\nOrigin:\n1\nDestinations:\n".parse::<Problem>().unwrap_err();
        assert!(matches!(err, ProblemError::MissingDestinations));
    }

    #[test]
    fn negative_cost_is_rejected() {
        let text = "Nodes:\n1: (0,0)\n2: (1,0)\nEdges:\n(1,2): -3\nOrigin:\n1\nDestinations:\n2\n";
        let err = text.parse::<Problem>().unwrap_err();
        assert!(matches!(err, ProblemError::NegativeCost { line: 5, cost: -3 }));
    }

    #[test]
    fn dangling_edge_is_rejected() {
        let text = "Nodes:\n1: (0,0)\nEdges:\n(1,9): 2\nOrigin:\n1\nDestinations:\n1\n";
        let err = text.parse::<Problem>().unwrap_err();
        assert!(matches!(err, ProblemError::UnknownNode { line: 4, node: 9 }));
    }

    #[test]
    fn unknown_destination_is_rejected() {
        let text = "Nodes:\n1: (0,0)\nOrigin:\n1\nDestinations:\n1; 8\n";
        let err = text.parse::<Problem>().unwrap_err();
        assert!(matches!(err, ProblemError::UnknownNode { line: 6, node: 8 }));
    }

    #[test]
    fn malformed_node_reports_line() {
        let err = "Nodes:\n1: (0;0)\n".parse::<Problem>().unwrap_err();
        match err {
            ProblemError::Malformed { line, section, .. } => {
                assert_eq!(line, 2);
                assert_eq!(section, "Nodes");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn io_error_has_source() {
        let err = Problem::from_path("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, ProblemError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn display_reparses_to_same_problem() {
        let p: Problem = SAMPLE.parse().unwrap();
        let back: Problem = p.to_string().parse().unwrap();
        assert_eq!(back.origin, p.origin);
        assert_eq!(back.destinations, p.destinations);
        assert_eq!(back.graph.edges(), p.graph.edges());
        assert_eq!(back.graph.node_ids(), p.graph.node_ids());
    }
}

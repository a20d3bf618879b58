//! Benchmark harness: every method on every problem, with summary tables
//! and an optional CSV dump.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use waypath_core::{GenParams, NodeId, Problem, ProblemGen};
use waypath_paths::{Method, Searcher};

use crate::table::{Align, PipeTable};

/// A named problem.
pub struct Case {
    pub name: String,
    pub problem: Problem,
}

/// One method run on one case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub test_case: String,
    pub method: Method,
    /// Wall-clock seconds.
    pub execution_time: f64,
    pub nodes_generated: usize,
    pub path_found: bool,
    pub goal: Option<NodeId>,
    /// Edges on the path; 0 when nothing was found.
    pub path_length: usize,
}

/// Per-method averages over all rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub method: Method,
    pub avg_time: f64,
    pub avg_nodes: f64,
    /// Percentage of runs that found a path.
    pub success_rate: f64,
    /// Averaged over successful runs only.
    pub avg_path_length: f64,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Number embedded in a case file name, used for ordering.
fn case_number(name: &str) -> Option<u64> {
    let digits: String = name.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

fn sort_names(names: &mut [String]) {
    names.sort_by(|a, b| {
        case_number(a)
            .cmp(&case_number(b))
            .then_with(|| a.cmp(b))
    });
}

/// Load every `test_case*.txt` in `dir`, in numeric order. Files that fail
/// to parse are reported and skipped.
pub fn load_dir(dir: &Path) -> io::Result<Vec<Case>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if name.starts_with("test_case") && name.ends_with(".txt") {
            names.push(name);
        }
    }
    sort_names(&mut names);

    let mut cases = Vec::with_capacity(names.len());
    for name in names {
        match Problem::from_path(dir.join(&name)) {
            Ok(problem) => cases.push(Case { name, problem }),
            Err(err) => tracing::error!("skipping {name}: {err}"),
        }
    }
    tracing::info!("loaded {} cases from {}", cases.len(), dir.display());
    Ok(cases)
}

/// `count` generated problems named `random-1`, `random-2`, …
pub fn generated(count: usize, params: GenParams, seed: Option<u64>) -> Vec<Case> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let mut generator = ProblemGen::new(rng, params);
    (1..=count)
        .map(|i| Case {
            name: format!("random-{i}"),
            problem: generator.generate(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Running
// ---------------------------------------------------------------------------

pub fn run_all(searcher: &Searcher, cases: &[Case]) -> Vec<Row> {
    let mut rows = Vec::with_capacity(cases.len() * Method::ALL.len());
    for case in cases {
        tracing::info!("testing {}", case.name);
        let p = &case.problem;
        for method in Method::ALL {
            let start = Instant::now();
            let outcome = searcher.run(method, &p.graph, p.origin, &p.destinations);
            let elapsed = start.elapsed().as_secs_f64();
            tracing::debug!(
                "{} {method}: {elapsed:.4}s, {} nodes",
                case.name,
                outcome.nodes_generated
            );
            rows.push(Row {
                test_case: case.name.clone(),
                method,
                execution_time: elapsed,
                nodes_generated: outcome.nodes_generated,
                path_found: outcome.is_found(),
                goal: outcome.goal,
                path_length: outcome.path_len(),
            });
        }
    }
    rows
}

/// Averages per method, in [`Method::ALL`] order. Methods without rows are
/// left out.
pub fn summarize(rows: &[Row]) -> Vec<Summary> {
    Method::ALL
        .into_iter()
        .filter_map(|method| {
            let runs: Vec<&Row> = rows.iter().filter(|r| r.method == method).collect();
            if runs.is_empty() {
                return None;
            }
            let total = runs.len() as f64;
            let found: Vec<&&Row> = runs.iter().filter(|r| r.path_found).collect();
            let avg_path_length = if found.is_empty() {
                0.0
            } else {
                found.iter().map(|r| r.path_length as f64).sum::<f64>() / found.len() as f64
            };
            Some(Summary {
                method,
                avg_time: runs.iter().map(|r| r.execution_time).sum::<f64>() / total,
                avg_nodes: runs.iter().map(|r| r.nodes_generated as f64).sum::<f64>() / total,
                success_rate: found.len() as f64 / total * 100.0,
                avg_path_length,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

/// Summary table followed by one detail table per case.
pub fn report<W: Write>(w: &mut W, rows: &[Row]) -> io::Result<()> {
    writeln!(w, "=== PERFORMANCE RESULTS ===")?;
    let mut summary = PipeTable::new(&[
        ("Method", Align::Left),
        ("Strategy", Align::Left),
        ("Avg Time", Align::Left),
        ("Avg Nodes", Align::Right),
        ("Success Rate", Align::Left),
        ("Avg Path Length", Align::Right),
    ]);
    for s in summarize(rows) {
        summary.push_row(vec![
            s.method.to_string(),
            s.method.name().to_string(),
            format!("{:.6}s", s.avg_time),
            (s.avg_nodes as u64).to_string(),
            format!("{:.1}%", s.success_rate),
            format!("{:.1}", s.avg_path_length),
        ]);
    }
    summary.write(w)?;

    writeln!(w, "\n=== TEST CASE DETAILS ===")?;
    let mut start = 0;
    while start < rows.len() {
        let name = &rows[start].test_case;
        let end = rows[start..]
            .iter()
            .position(|r| &r.test_case != name)
            .map_or(rows.len(), |n| start + n);

        writeln!(w, "\nTest Case: {name}")?;
        let mut detail = PipeTable::new(&[
            ("Method", Align::Left),
            ("Time", Align::Left),
            ("Nodes", Align::Right),
            ("Found", Align::Left),
            ("Path Length", Align::Right),
        ]);
        for r in &rows[start..end] {
            detail.push_row(vec![
                r.method.to_string(),
                format!("{:.6}s", r.execution_time),
                r.nodes_generated.to_string(),
                if r.path_found { "Yes" } else { "No" }.to_string(),
                if r.path_found {
                    r.path_length.to_string()
                } else {
                    "-".to_string()
                },
            ]);
        }
        detail.write(w)?;
        start = end;
    }
    Ok(())
}

pub fn write_csv(path: &Path, rows: &[Row]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

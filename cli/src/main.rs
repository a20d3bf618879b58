//! `waypath`: run route searches on problem files and compare strategies.

mod bench;
mod table;

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;
use waypath_core::{GenParams, Problem, ProblemGen};
use waypath_paths::{Method, SearchConfig, Searcher};

#[derive(Parser)]
#[command(name = "waypath", version)]
#[command(about = "Route search over weighted directed graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log more (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one problem file with one method
    Run {
        /// Problem file
        file: PathBuf,

        /// BFS, DFS, GBFS, AS, CUS1 (IDDFS) or CUS2 (bidirectional A*)
        method: Method,

        #[command(flatten)]
        tuning: Tuning,

        /// Also print the total path cost
        #[arg(long)]
        cost: bool,
    },
    /// Run every method on a set of problems and compare them
    Bench {
        /// Directory holding test_case*.txt files
        dir: Option<PathBuf>,

        /// Also run on this many generated problems
        #[arg(long, value_name = "N", default_value_t = 0)]
        random: usize,

        /// Nodes per generated problem
        #[arg(long, default_value_t = 30)]
        nodes: usize,

        /// Seed for generated problems
        #[arg(long)]
        seed: Option<u64>,

        /// Write one row per run to this CSV file
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,

        #[command(flatten)]
        tuning: Tuning,
    },
    /// Write a random problem file
    Generate {
        #[arg(long, default_value_t = 30)]
        nodes: usize,

        /// Outgoing edges per node
        #[arg(long, default_value_t = 3)]
        links: usize,

        /// Largest random surcharge on top of the straight-line distance
        #[arg(long, default_value_t = 3)]
        slack: u32,

        #[arg(long, default_value_t = 2)]
        destinations: usize,

        #[arg(long)]
        seed: Option<u64>,

        /// Output file (stdout if omitted)
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

/// Deepest `--max-depth` accepted. Each CUS1 pass recurses once per level.
const MAX_DEPTH_LIMIT: i64 = 4096;

/// Overrides for [`SearchConfig`].
#[derive(Args, Clone, Debug, Default)]
struct Tuning {
    /// Deepest limit tried by CUS1
    #[arg(long, value_parser = clap::value_parser!(u16).range(..=MAX_DEPTH_LIMIT))]
    max_depth: Option<u16>,

    /// Iteration cap of CUS2
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Starting heuristic weight of CUS2
    #[arg(long)]
    initial_weight: Option<f64>,
}

impl Tuning {
    fn config(&self) -> SearchConfig {
        let mut c = SearchConfig::default();
        if let Some(v) = self.max_depth {
            c.max_depth = usize::from(v);
        }
        if let Some(v) = self.max_iterations {
            c.max_iterations = v;
        }
        if let Some(v) = self.initial_weight {
            c.initial_weight = v;
        }
        c
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match try_main(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Run {
            file,
            method,
            tuning,
            cost,
        } => {
            let problem = Problem::from_path(&file)?;
            let searcher = Searcher::new(tuning.config());
            tracing::debug!("search config: {:?}", searcher.config());
            let outcome = searcher.run(method, &problem.graph, problem.origin, &problem.destinations);

            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{} {method}", file.display())?;
            writeln!(stdout, "{outcome}")?;
            if cost {
                if let Some(c) = outcome.cost(&problem.graph) {
                    writeln!(stdout, "cost {c}")?;
                }
            }
        }
        Commands::Bench {
            dir,
            random,
            nodes,
            seed,
            csv,
            tuning,
        } => {
            let mut cases = match &dir {
                Some(dir) => bench::load_dir(dir)?,
                None => Vec::new(),
            };
            if random > 0 {
                let params = GenParams {
                    nodes,
                    ..GenParams::default()
                };
                cases.extend(bench::generated(random, params, seed));
            }
            if cases.is_empty() {
                return Err("no problems to run: give a directory or --random N".into());
            }

            let searcher = Searcher::new(tuning.config());
            tracing::debug!("search config: {:?}", searcher.config());
            let rows = bench::run_all(&searcher, &cases);
            let mut stdout = io::stdout().lock();
            bench::report(&mut stdout, &rows)?;
            if let Some(path) = csv {
                bench::write_csv(&path, &rows)?;
                writeln!(stdout, "\nResults saved to {}", path.display())?;
            }
        }
        Commands::Generate {
            nodes,
            links,
            slack,
            destinations,
            seed,
            out,
        } => {
            let params = GenParams {
                nodes,
                links,
                slack,
                destinations,
            };
            let problem = match seed {
                Some(seed) => ProblemGen::new(StdRng::seed_from_u64(seed), params).generate(),
                None => ProblemGen::new(rand::rng(), params).generate(),
            };
            match out {
                Some(path) => {
                    fs::write(&path, problem.to_string())?;
                    tracing::info!("wrote {}", path.display());
                }
                None => write!(io::stdout().lock(), "{problem}")?,
            }
        }
    }
    Ok(())
}

//! Interactive console driver for `undigraph`.
//!
//! Presents a numbered menu for editing a fixed-size undirected graph and
//! running DFS/BFS between two vertices. Results go to stdout; with
//! `--format json` the menu and prompts move to stderr. Logs go to stderr and
//! are controlled by `RUST_LOG` or the `-v` flag.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use undigraph::{UndirectedGraph, STANDARD_VERTEX_COUNT};

mod input;
mod session;

use session::{OutputFormat, Session};

#[derive(Parser)]
#[command(name = "undigraph")]
#[command(about = "Undirected graph with depth-first and breadth-first search", long_about = None)]
struct Cli {
    /// Number of vertices in the graph
    #[arg(long, default_value_t = STANDARD_VERTEX_COUNT)]
    vertices: usize,

    /// Load the default edge set before showing the menu
    #[arg(long, default_value_t = false)]
    standard_edges: bool,

    /// How command results are written
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut graph = UndirectedGraph::try_new(cli.vertices).context("invalid --vertices")?;
    if cli.standard_edges {
        graph
            .add_standard_edges()
            .context("cannot load the default edge set")?;
    }
    tracing::info!(vertices = graph.vertex_count(), format = ?cli.format, "starting session");

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), graph, cli.format);
    match cli.format {
        OutputFormat::Text => session.run(),
        // Keep stdout to one JSON object per line.
        OutputFormat::Json => session.with_prompts(io::stderr()).run(),
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use depsort::export::{self, ExportFormat, OrderReport};
use depsort::graph::TraversalMode;
use depsort::session::Session;

#[derive(Parser)]
#[command(name = "depsort")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Class dependency graph loader with DFS-based recompilation order", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the recompilation order starting at a class
    Order {
        /// Dependency source, or '-' for stdin
        file: PathBuf,

        /// Class to start from
        class: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: ExportFormat,

        /// Which revisits count as cycles (strict, back-edges)
        #[arg(short, long, default_value = "strict")]
        mode: TraversalMode,
    },
    /// List every cycle in the graph
    Cycles {
        /// Dependency source, or '-' for stdin
        file: PathBuf,
    },
    /// Print vertex ids and the adjacency list
    Show {
        /// Dependency source, or '-' for stdin
        file: PathBuf,
    },
    /// Show version information
    Version,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build(file: &Path) -> Result<Session> {
    let mut session = Session::new();
    if file.as_os_str() == "-" {
        session.build_from_reader(io::stdin().lock(), "<stdin>")?;
    } else {
        session.build(file)?;
    }
    Ok(session)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Order {
            file,
            class,
            format,
            mode,
        }) => {
            let session = build(&file)?;
            let order = session.order_with(&class, mode)?;
            let report = OrderReport::new(
                file.display().to_string(),
                class,
                order,
                session.graph(),
            );
            export::export(format, &report, &mut out).context("failed to write order")?;
        }
        Some(Commands::Cycles { file }) => {
            let session = build(&file)?;
            let cycles = session.graph().detect_cycles();
            if cycles.is_empty() {
                writeln!(out, "No cycles found")?;
            }
            for cycle in cycles {
                writeln!(out, "{}", cycle.cycle_path())?;
            }
        }
        Some(Commands::Show { file }) => {
            let session = build(&file)?;
            let graph = session.graph();
            for (id, label) in graph.labels().iter().enumerate() {
                let successors = graph.successors(id).unwrap_or_default();
                writeln!(out, "{:>4} {:<24} {:?}", id, label, successors)?;
            }
        }
        Some(Commands::Version) => {
            writeln!(out, "depsort v{}", env!("CARGO_PKG_VERSION"))?;
        }
        None => {
            writeln!(out, "depsort - class dependency graph and recompilation order")?;
            writeln!(out, "Run 'depsort order <FILE> <CLASS>' to compute an order")?;
            writeln!(out, "Run 'depsort --help' for more information")?;
        }
    }

    Ok(())
}

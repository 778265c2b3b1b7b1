//! Command line front-end: reads a cast list and runs a single query on it.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use log::warn;

use castgraph::{io::CastReader, prelude::*, CastGraph};

/// Separation and diversity queries over a cast list
#[derive(Parser)]
#[command(name = "castgraph")]
#[command(version)]
struct Cli {
    /// Cast list with one `collection, participant, ..., subgroup` record per line
    input: PathBuf,

    /// Field separator of the cast list
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Value of the subgroup field that marks a subgroup member
    #[arg(short, long, default_value = "Female")]
    subgroup: String,

    /// Number of fields between participant and subgroup field
    #[arg(long, default_value_t = 3)]
    ignored_fields: usize,

    /// The first line is a record rather than a header
    #[arg(long)]
    no_header: bool,

    /// Verbose mode (equivalent to RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print vertex, arc and collection counts
    Stats,

    /// List the neighbors of a vertex (participants of a collection or vice versa)
    Members { vertex: String },

    /// Degrees of separation between two participants
    Separation { from: String, to: String },

    /// A shortest path between two vertices
    Path { from: String, to: String },

    /// Split collections by their subgroup share
    Diversity {
        /// Minimal subgroup share in percent
        #[arg(short, long)]
        percent: f64,
    },

    /// Write the graph in TGF
    Export { output: PathBuf },

    /// Print the whole graph
    Show,
}

fn run(cli: Cli) -> Result<()> {
    let settings = CastReader::new()
        .delimiter(cli.delimiter)
        .subgroup_label(cli.subgroup)
        .ignored_fields(cli.ignored_fields)
        .skip_header(!cli.no_header);

    let cast: CastGraph = CastGraph::try_from_cast_file(&settings, &cli.input)?;
    if let Err(err) = cast.validate_roles() {
        warn!("{err}");
    }

    match cli.command {
        Command::Stats => {
            println!("vertices:    {}", cast.number_of_vertices());
            println!("arcs:        {}", cast.number_of_arcs());
            println!("edges:       {}", cast.graph().number_of_edges());
            println!("collections: {}", cast.membership().number_of_collections());
        }
        Command::Members { vertex } => {
            for member in cast.graph().neighbors_of(&vertex)? {
                println!("{member}");
            }
        }
        Command::Separation { from, to } => {
            println!("{}", cast.separation(&from, &to)?);
        }
        Command::Path { from, to } => {
            println!("{}", cast.shortest_path(&from, &to)?.join(" -> "));
        }
        Command::Diversity { percent } => {
            let report = cast.diversity_test(percent / 100.0);
            println!("passing ({}):", report.passing.len());
            for collection in &report.passing {
                println!("  {collection}");
            }
            println!("failing ({}):", report.failing.len());
            for collection in &report.failing {
                println!("  {collection}");
            }
        }
        Command::Export { output } => cast.save_tgf(output)?,
        Command::Show => print!("{cast}"),
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("castgraph: {err}");
            ExitCode::FAILURE
        }
    }
}

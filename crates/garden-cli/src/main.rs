//! Garden CLI - place plants on the board and see who is happy.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::evaluate::{Placement, TagPlacement};

#[derive(Parser)]
#[command(name = "garden")]
#[command(author, version, about = "Garden - companion planting on a grid", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a garden.toml in the current directory
    Init {
        /// Overwrite an existing garden.toml
        #[arg(short, long)]
        force: bool,

        /// Also write catalog.toml and layout.toml from the built-in board
        #[arg(long)]
        with_data: bool,
    },

    /// List plants, or one plant's relationships
    Catalog {
        /// Plant key (e.g. "tomato")
        #[arg(short, long)]
        plant: Option<String>,
    },

    /// Show the environment of every cell
    Layout,

    /// Place plants and evaluate them
    Evaluate {
        /// Placement as key@row,col (repeatable, applied in order)
        #[arg(short, long = "place")]
        places: Vec<Placement>,

        /// Tag placement as UID@row,col, e.g. 04:53:45:3B@0,3
        #[arg(short, long = "tag")]
        tags: Vec<TagPlacement>,

        /// Mode to evaluate under (environment, neighbors, combined)
        #[arg(short, long)]
        mode: Option<String>,

        /// Print the board snapshot as JSON
        #[arg(long)]
        json: bool,

        /// Push statuses to the LED strip
        #[arg(long)]
        mirror: bool,
    },

    /// Report asymmetric relationships and the tag table
    Check {
        /// Fail if any relationship is asymmetric
        #[arg(long)]
        strict: bool,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { force, with_data } => commands::init::run(force, with_data),
        Commands::Catalog { plant } => commands::catalog::run(plant.as_deref()),
        Commands::Layout => commands::layout::run(),
        Commands::Evaluate {
            places,
            tags,
            mode,
            json,
            mirror,
        } => commands::evaluate::run(&places, &tags, mode.as_deref(), json, mirror),
        Commands::Check { strict } => commands::check::run(strict),
    }
}

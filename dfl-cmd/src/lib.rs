//! Command implementations for the landings CLI.
//!
//! Every command loads the CSV once, starts a session controller over it and
//! prints what the dashboard would show for the requested selection.

use clap::Subcommand;

pub mod explore;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// List the species, years and ports offered by the pickers
    Options {
        /// Path to the landings CSV
        #[arg(short = 'c', long)]
        csv: String,
    },

    /// Print the map model (markers) as JSON
    Map {
        #[arg(short = 'c', long)]
        csv: String,

        /// Species to show (defaults to cod, or the first species)
        #[arg(short = 's', long)]
        species: Option<String>,

        /// Year to show (defaults to the earliest year)
        #[arg(short = 'y', long)]
        year: Option<i32>,
    },

    /// Print the per-port time series as JSON
    Series {
        #[arg(short = 'c', long)]
        csv: String,

        #[arg(short = 's', long)]
        species: Option<String>,

        /// Port to include; repeat for several (defaults to the first port)
        #[arg(short = 'p', long = "port")]
        ports: Vec<String>,
    },

    /// Report rows and cells the loader could not use
    Quality {
        #[arg(short = 'c', long)]
        csv: String,
    },

    /// Change the selection line by line and watch both views update
    Explore {
        #[arg(short = 'c', long)]
        csv: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Options { csv } => report::run_options(&csv),
        Command::Map { csv, species, year } => report::run_map(&csv, species, year),
        Command::Series {
            csv,
            species,
            ports,
        } => report::run_series(&csv, species, ports),
        Command::Quality { csv } => report::run_quality(&csv),
        Command::Explore { csv } => explore::run_explore(&csv).await,
    }
}

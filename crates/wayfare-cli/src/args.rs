use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for wayfare
#[derive(Debug, Parser)]
#[command(
    name = "wayfare",
    version,
    about = "CLI for browsing and searching the wayfare travel catalog"
)]
pub struct CliArgs {
    /// Catalog file: JSON, JSON.gz or a binary snapshot (default: the bundled sample)
    #[arg(short = 'c', long = "catalog", global = true)]
    pub catalog: Option<PathBuf>,

    /// Fetch the catalog from a running server instead (e.g. http://localhost:5000)
    #[cfg(feature = "fetch")]
    #[arg(short = 'r', long = "remote", global = true, conflicts_with = "catalog")]
    pub remote: Option<String>,

    /// Print JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show how many records of each kind are loaded
    Stats,

    /// List all destinations
    Destinations,

    /// List all hotels
    Hotels,

    /// List all activities
    Activities,

    /// Search names and locations (case-insensitive substring)
    Search {
        /// Text to look for
        query: String,

        /// Restrict to one tab: all, destination, hotel or activity
        #[arg(short = 'k', long = "kind", default_value = "all")]
        kind: String,
    },

    /// Write the loaded catalog as a binary snapshot
    Snapshot {
        /// Output path, e.g. catalog.bin
        out: PathBuf,
    },
}

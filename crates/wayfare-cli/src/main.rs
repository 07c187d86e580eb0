//! wayfare: command-line interface for wayfare-core
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ wayfare stats
//!
//! - List a collection
//!   $ wayfare hotels
//!
//! - Search, optionally narrowed to one tab
//!   $ wayfare search tokyo
//!   $ wayfare search shinjuku --kind hotel
//!
//! - Use a different catalog, or freeze one into a snapshot
//!   $ wayfare --catalog my-catalog.json.gz stats
//!   $ wayfare snapshot catalog.bin
//!
//! A catalog that cannot be read is reported on stderr (with `RUST_LOG=warn`)
//! and treated as empty.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use wayfare_core::loader::sample_catalog;
use wayfare_core::text::format_usd;
use wayfare_core::{search_filtered, Catalog, KindFilter};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = CliArgs::parse();
    let catalog = load_catalog(&args)?;

    match args.command {
        Commands::Stats => {
            let stats = catalog.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Catalog statistics:");
                println!("  Destinations: {}", stats.destinations);
                println!("  Hotels: {}", stats.hotels);
                println!("  Activities: {}", stats.activities);
            }
        }

        Commands::Destinations => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(catalog.destinations())?);
            } else {
                for d in catalog.destinations() {
                    println!("{}, {} ({}, {} days)", d.name, d.country, d.date_range, d.duration);
                }
            }
        }

        Commands::Hotels => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(catalog.hotels())?);
            } else {
                for h in catalog.hotels() {
                    println!(
                        "{} ({}) {:.1}* {}/night",
                        h.name,
                        h.location,
                        h.rating,
                        format_usd(f64::from(h.price_per_night))
                    );
                }
            }
        }

        Commands::Activities => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(catalog.activities())?);
            } else {
                for a in catalog.activities() {
                    println!("{} ({}) {}", a.name, a.location, a.duration);
                }
            }
        }

        Commands::Search { query, kind } => {
            let results = search_filtered(&catalog, &query, &KindFilter::from_tag(&kind));
            if args.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No results found for: {query}");
            } else {
                for r in results {
                    println!("[{}] {} ({})", r.kind, r.name, r.location);
                }
            }
        }

        Commands::Snapshot { out } => {
            std::fs::write(&out, catalog.to_bytes()?)?;
            println!("Wrote {} records to {}", catalog.len(), out.display());
        }
    }

    Ok(())
}

fn load_catalog(args: &CliArgs) -> anyhow::Result<Catalog> {
    if let Some(catalog) = fetch_remote(args)? {
        return Ok(catalog);
    }

    Ok(match &args.catalog {
        Some(path) => Catalog::load_or_empty(path),
        None => sample_catalog(),
    })
}

#[cfg(feature = "fetch")]
fn fetch_remote(args: &CliArgs) -> anyhow::Result<Option<Catalog>> {
    match &args.remote {
        Some(url) => Ok(Some(wayfare_core::loader::fetch_catalog(url)?)),
        None => Ok(None),
    }
}

#[cfg(not(feature = "fetch"))]
fn fetch_remote(_args: &CliArgs) -> anyhow::Result<Option<Catalog>> {
    Ok(None)
}

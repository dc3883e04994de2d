use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use wuzzuf_extract::job::Job;
use wuzzuf_extract::parser;
use wuzzuf_extract::parser::extract::NOT_AVAILABLE;

#[derive(Parser)]
#[command(name = "wuzzuf_extract", about = "Extract structured job data from saved Wuzzuf pages")]
struct Cli {
    /// Print single-line JSON instead of pretty-printed
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract detail fields from a job page
    Details {
        /// HTML file (default: stdin)
        file: Option<PathBuf>,
    },
    /// List the job cards on a search-results page
    Listings {
        /// HTML file (default: stdin)
        file: Option<PathBuf>,
        /// Search term the page was produced for
        #[arg(short, long)]
        search: String,
    },
    /// Combine one search-result card with its job page
    Job {
        /// Search-results HTML file
        #[arg(short, long)]
        listing: PathBuf,
        /// Card position on the search page (0-based)
        #[arg(short, long, default_value = "0")]
        index: usize,
        /// Search term the page was produced for
        #[arg(short, long)]
        search: String,
        /// Job page HTML file (default: stdin)
        details: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Details { file } => {
            let html = read_input(file.as_deref())?;
            let result = parser::process_page(&html);
            print_json(&result, cli.compact)?;
        }
        Commands::Listings { file, search } => {
            let html = read_input(file.as_deref())?;
            let listings = parser::process_listings(&html, &search);
            info!("Found {} job cards", listings.len());
            print_json(&listings, cli.compact)?;
        }
        Commands::Job {
            listing,
            index,
            search,
            details,
        } => {
            let html = read_input(Some(listing.as_path()))?;
            let mut listings = parser::process_listings(&html, &search);
            if index >= listings.len() {
                bail!(
                    "card index {} out of range ({} cards in {})",
                    index,
                    listings.len(),
                    listing.display()
                );
            }
            let card = listings.swap_remove(index);

            let job = if card.link == NOT_AVAILABLE {
                info!("Card {} has no link, skipping details", index);
                Job::unavailable(card)
            } else {
                let html = read_input(details.as_deref())?;
                Job::from_parts(card, parser::process_page(&html))
            };
            print_json(&job, cli.compact)?;
        }
    }

    debug!("Done in {:.1}ms", t0.elapsed().as_secs_f64() * 1000.0);
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("Failed to serialize output")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json).context("Failed to write output")?;
    Ok(())
}

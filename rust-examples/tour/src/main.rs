//! Rust basics, one section at a time.
//!
//! # Quick Start
//!
//! ```bash
//! # The whole tour
//! basics-tour
//!
//! # Just a couple of topics (keys or aliases)
//! basics-tour --only switch --only pointers
//!
//! # What is there?
//! basics-tour --list
//! ```

use std::io::{self, Write};

use anyhow::Result;
use basics_tour::{TourConfig, list_topics, run_tour};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// A guided tour of basic Rust syntax: bindings, types, collections,
/// control flow, functions, structs, traits, references and scoped cleanup.
#[derive(Parser, Debug)]
#[command(name = "basics-tour")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Run only this topic; repeat to pick several. Accepts keys or aliases.
    #[arg(short, long = "only", value_name = "TOPIC")]
    only: Vec<String>,

    /// List the available topics and exit.
    #[arg(short, long)]
    list: bool,

    /// Skip the opening and closing banner.
    #[arg(long)]
    no_banner: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the tour itself
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        list_topics(&mut out)?;
        return Ok(());
    }

    let config = TourConfig::from_selection(cli.only.as_slice(), !cli.no_banner)?;
    tracing::debug!(?config, "starting tour");

    run_tour(&mut out, &config, chrono::Local::now().naive_local())?;
    out.flush()?;

    Ok(())
}

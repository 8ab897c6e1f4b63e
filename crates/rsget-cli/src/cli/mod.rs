//! CLI for rsget.
//!
//! Each URL argument becomes one batch item; the n-th body is saved as
//! `request_<n>.html` (or per the configured naming). Per-item failures are
//! printed to stderr as `<index>: <message>` and never change the exit
//! status: the batch always runs to completion and the process exits 0.

use anyhow::Result;
use clap::Parser;
use rsget_core::batch::BatchRunner;
use rsget_core::config;
use rsget_core::fetch::CurlTransport;
use std::path::PathBuf;

/// Fetch each URL and write the response body to a local file.
#[derive(Debug, Parser)]
#[command(name = "rsget")]
#[command(about = "Fetch URLs and save each response body to a file", long_about = None)]
pub struct Cli {
    /// URLs to fetch, processed in order.
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Directory to write output files into (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

pub fn run_from_args() -> Result<()> {
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    // No URLs: nothing to do (matches invoking with no arguments).
    if cli.urls.is_empty() {
        return Ok(());
    }

    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let out_dir = match cli.out_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let runner = BatchRunner::new(out_dir)
        .with_transport(Box::new(CurlTransport::from_config(&cfg)))
        .with_naming(cfg.naming_strategy());

    let outcome = runner.run(&cli.urls);
    for item in outcome.failures() {
        if let Err(err) = &item.result {
            eprintln!("{}: {}", item.index, err);
        }
    }

    Ok(())
}

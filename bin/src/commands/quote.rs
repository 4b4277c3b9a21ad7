//! Quote command implementation.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use owfin_lib::prelude::*;
use std::time::Duration;

use crate::display::{Format, print_quotes};

/// Fetch and print quotes for explicit symbols.
pub(crate) async fn quote(
    client: &QuoteClient,
    symbols: &[String],
    format: Format,
    quiet: bool,
) -> Result<()> {
    let quotes = fetch_with_spinner(client, symbols, quiet).await?;
    print_quotes(&quotes, format)
}

/// Fetches a batch of quotes behind a spinner.
pub(crate) async fn fetch_with_spinner(
    client: &QuoteClient,
    symbols: &[String],
    quiet: bool,
) -> Result<Vec<Quote>> {
    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("Invalid progress template"),
        );
        pb.set_message(format!("Fetching {} symbols...", symbols.len()));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let result = client
        .fetch_quotes(symbols)
        .await
        .context("Quote fetch failed");
    spinner.finish_and_clear();
    result
}

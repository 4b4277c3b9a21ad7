//! Search command implementation.

use anyhow::{Context, Result};
use owfin_lib::prelude::*;

use crate::display::{Format, truncate, write_search_csv};

/// Search for symbols and print the scored results.
pub(crate) async fn search(
    client: &QuoteClient,
    query: &str,
    limit: usize,
    format: Format,
) -> Result<()> {
    let hits = client
        .search(query, limit)
        .await
        .context("Search request failed")?;

    if hits.is_empty() {
        println!("No results for '{query}'.");
        return Ok(());
    }

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&hits)?),
        Format::Csv => write_search_csv(&hits, std::io::stdout().lock())?,
        Format::Table => {
            println!(
                "{:<12} {:<32} {:<8} {:<10} {:>6}",
                "SYMBOL", "NAME", "EXCH", "TYPE", "SCORE"
            );
            println!("{}", "-".repeat(72));

            for hit in &hits {
                println!(
                    "{:<12} {:<32} {:<8} {:<10} {:>6}",
                    truncate(&hit.symbol, 12),
                    truncate(hit.display_name(), 32),
                    hit.exchange.as_deref().unwrap_or("-"),
                    hit.quote_type.as_deref().unwrap_or("-"),
                    hit.score,
                );
            }

            println!("\nTotal: {} results", hits.len());
        }
    }

    Ok(())
}

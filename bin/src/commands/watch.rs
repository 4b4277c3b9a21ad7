//! Watch command implementation.
//!
//! Renders the quote table for a watchlist group, the bookmarked symbols,
//! or the union of all groups, with an optional follow mode that redraws
//! on an interval.

use anyhow::{Context, Result, bail};
use owfin_lib::prelude::*;
use std::io::Write;

use crate::commands::quote::fetch_with_spinner;
use crate::display::{Format, print_quotes};

/// Fetch and print quotes for a watchlist selection.
pub(crate) async fn watch(
    client: &QuoteClient,
    group_id: Option<&str>,
    bookmarks: bool,
    refresh: Option<u64>,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let (label, symbols) = resolve_symbols(group_id, bookmarks)?;

    if symbols.is_empty() {
        bail!("No symbols to watch for '{label}'");
    }

    let Some(interval_secs) = refresh else {
        let quotes = fetch_with_spinner(client, &symbols, quiet).await?;
        if !quiet {
            println!("{label}\n");
        }
        return print_quotes(&quotes, format);
    };

    let interval = std::time::Duration::from_secs(interval_secs.max(1));

    loop {
        // Clear screen
        print!("\x1B[2J\x1B[1;1H");
        std::io::stdout().flush()?;

        println!(
            "{label} (refresh every {}s, Ctrl+C to exit)\n",
            interval.as_secs()
        );

        // A transient failure should not kill the follow loop
        match fetch_with_spinner(client, &symbols, quiet).await {
            Ok(quotes) => print_quotes(&quotes, format)?,
            Err(e) => eprintln!("Warning: {e}"),
        }

        tokio::time::sleep(interval).await;
    }
}

/// Resolves the symbol selection: a bookmark set, a named group, or the
/// deduplicated union of all groups.
fn resolve_symbols(group_id: Option<&str>, bookmarks: bool) -> Result<(String, Vec<String>)> {
    if bookmarks {
        let store = BookmarkStore::with_default_path().context("Failed to open bookmark store")?;
        let symbols = store.symbols();
        if symbols.is_empty() {
            bail!("No bookmarked symbols. Add one with: owfin bookmark add <SYMBOL>");
        }
        return Ok(("Bookmarked symbols".to_string(), symbols));
    }

    let registry = WatchlistRegistry::global();

    match group_id {
        Some(id) => {
            let group = registry.get(id).with_context(|| {
                format!(
                    "Unknown watchlist '{id}'. Available: {}",
                    registry.ids().join(", ")
                )
            })?;
            Ok((group.to_string(), group.symbols().to_vec()))
        }
        None => Ok((
            "All watchlists".to_string(),
            registry
                .all_symbols()
                .into_iter()
                .map(str::to_string)
                .collect(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_named_group() {
        let (label, symbols) = resolve_symbols(Some("fx"), false).unwrap();
        assert!(label.contains("fx"));
        assert_eq!(symbols.len(), 3);
    }

    #[test]
    fn test_resolve_unknown_group() {
        assert!(resolve_symbols(Some("nope"), false).is_err());
    }

    #[test]
    fn test_resolve_all_groups() {
        let (label, symbols) = resolve_symbols(None, false).unwrap();
        assert_eq!(label, "All watchlists");
        assert!(symbols.len() > 10);
    }
}

//! Lists command implementation.

use anyhow::{Context, Result};
use owfin_lib::prelude::*;

use crate::display::truncate;

/// Print the available watchlist groups.
///
/// Bookmarked groups are marked with a star. When `query` is given, only
/// groups whose id or title matches are shown.
pub(crate) fn lists(query: Option<&str>) -> Result<()> {
    let registry = WatchlistRegistry::global();
    let store = BookmarkStore::with_default_path().context("Failed to open bookmark store")?;

    let groups: Vec<&WatchlistGroup> = match query {
        Some(q) => registry.search(q),
        None => registry.all().iter().collect(),
    };

    if groups.is_empty() {
        match query {
            Some(q) => println!("No watchlists match '{q}'."),
            None => println!("No watchlists available."),
        }
        return Ok(());
    }

    println!(
        "{:<3} {:<16} {:<28} {:>8}",
        "", "ID", "TITLE", "SYMBOLS"
    );
    println!("{}", "-".repeat(58));

    for group in &groups {
        let marker = if store.is_list_bookmarked(group.id()) {
            "*"
        } else {
            ""
        };
        println!(
            "{:<3} {:<16} {:<28} {:>8}",
            marker,
            truncate(group.id(), 16),
            truncate(group.title(), 28),
            group.len(),
        );
    }

    println!("\nTotal: {} watchlists", groups.len());

    Ok(())
}

//! Bookmark command implementation.
//!
//! Manages the persistent symbol and watchlist bookmarks.

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use owfin_lib::prelude::*;

/// Bookmark management actions.
#[derive(Subcommand, Debug)]
pub(crate) enum BookmarkAction {
    /// Bookmark a symbol
    Add {
        /// Ticker symbol (e.g. AAPL, THYAO.IS)
        symbol: String,
    },
    /// Remove a symbol bookmark
    Rm {
        /// Ticker symbol
        symbol: String,
    },
    /// Toggle a symbol bookmark
    Toggle {
        /// Ticker symbol
        symbol: String,
    },
    /// Bookmark a watchlist group
    AddList {
        /// Watchlist group id (see `owfin lists`)
        id: String,
    },
    /// Remove a watchlist bookmark
    RmList {
        /// Watchlist group id
        id: String,
    },
    /// Show all bookmarks
    Show,
}

/// Run a bookmark action against the default store.
pub(crate) fn bookmark(action: &BookmarkAction) -> Result<()> {
    let store = BookmarkStore::with_default_path().context("Failed to open bookmark store")?;

    match action {
        BookmarkAction::Add { symbol } => {
            if store.is_symbol_bookmarked(symbol) {
                println!("{symbol} is already bookmarked.");
            } else {
                store.toggle_symbol(symbol)?;
                println!("Bookmarked {symbol}.");
            }
        }
        BookmarkAction::Rm { symbol } => {
            if store.is_symbol_bookmarked(symbol) {
                store.toggle_symbol(symbol)?;
                println!("Removed bookmark for {symbol}.");
            } else {
                println!("{symbol} is not bookmarked.");
            }
        }
        BookmarkAction::Toggle { symbol } => {
            if store.toggle_symbol(symbol)? {
                println!("Bookmarked {symbol}.");
            } else {
                println!("Removed bookmark for {symbol}.");
            }
        }
        BookmarkAction::AddList { id } => {
            let registry = WatchlistRegistry::global();
            let Some(group) = registry.get(id) else {
                bail!(
                    "Unknown watchlist '{id}'. Available: {}",
                    registry.ids().join(", ")
                );
            };

            if store.is_list_bookmarked(group.id()) {
                println!("Watchlist '{}' is already bookmarked.", group.id());
            } else {
                store.toggle_list(group.id())?;
                println!("Bookmarked watchlist '{}'.", group.id());
            }
        }
        BookmarkAction::RmList { id } => {
            if store.is_list_bookmarked(id) {
                store.toggle_list(id)?;
                println!("Removed bookmark for watchlist '{id}'.");
            } else {
                println!("Watchlist '{id}' is not bookmarked.");
            }
        }
        BookmarkAction::Show => {
            let symbols = store.symbols();
            let lists = store.list_ids();

            if symbols.is_empty() && lists.is_empty() {
                println!("No bookmarks yet.");
                return Ok(());
            }

            if !symbols.is_empty() {
                println!("Symbols:");
                for symbol in &symbols {
                    println!("  {symbol}");
                }
            }
            if !lists.is_empty() {
                println!("Watchlists:");
                for id in &lists {
                    println!("  {id}");
                }
            }
        }
    }

    Ok(())
}

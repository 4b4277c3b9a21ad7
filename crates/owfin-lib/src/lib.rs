//! Typed market-data client, watchlists, and bookmarks for owfin.
//!
//! This is a facade crate that re-exports functionality from the owfin
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use owfin_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QuoteClient::with_defaults()?;
//!     let registry = WatchlistRegistry::global();
//!
//!     let group = registry.get("fx").unwrap();
//!     let quotes = client.fetch_quotes(group.symbols()).await?;
//!     for quote in quotes {
//!         println!("{}: {:?}", quote.symbol, quote.price);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/owfin/owfin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use owfin_types::*;

// Re-export watchlist registry
pub use owfin_watchlists::WatchlistRegistry;

// Re-export the quote client
#[cfg(feature = "quotes")]
pub use owfin_quotes::{BASE_URL, ClientConfig, Locale, QuoteClient, normalize, url};

// Re-export bookmark storage
#[cfg(feature = "bookmarks")]
pub use owfin_bookmarks::{BookmarkStore, StoreError};

/// Prelude module for convenient imports.
///
/// ```
/// use owfin_lib::prelude::*;
/// ```
pub mod prelude {
    pub use owfin_types::{
        ChartPoint, CompanyProfile, NewsItem, OwfinError, Quote, RangeKey, RangeKeyParseError,
        RangeStats, Result, SearchHit, WatchlistGroup,
    };

    pub use owfin_watchlists::WatchlistRegistry;

    #[cfg(feature = "quotes")]
    pub use owfin_quotes::{ClientConfig, Locale, QuoteClient};

    #[cfg(feature = "bookmarks")]
    pub use owfin_bookmarks::BookmarkStore;
}

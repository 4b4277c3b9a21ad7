//! Core types for the owfin market-data toolkit.
//!
//! This crate provides the fundamental data structures used throughout owfin:
//!
//! - [`Quote`] - A normalized point-in-time price snapshot
//! - [`ChartPoint`] - A chart sample with relative change
//! - [`RangeStats`] - First-to-last change over a time range
//! - [`RangeKey`] - Dashboard time-range labels and their upstream params
//! - [`SearchHit`], [`CompanyProfile`], [`NewsItem`] - Search endpoint results
//! - [`WatchlistGroup`] - A named group of symbols shown together

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/owfin/owfin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chart;
mod error;
mod quote;
mod range;
mod search;
mod watchlist;

pub use chart::{ChartPoint, RangeStats};
pub use error::{OwfinError, Result};
pub use quote::{Quote, derive_change};
pub use range::{RangeKey, RangeKeyParseError};
pub use search::{CompanyProfile, NewsItem, SearchHit};
pub use watchlist::WatchlistGroup;

//! Quote API client for the owfin market-data toolkit.
//!
//! This crate provides the data fetching pipeline:
//!
//! - [`url`] - Per-endpoint upstream URL construction
//! - [`QuoteClient`] - HTTP client with a 60-second response cache and retries
//! - [`normalize`] - Flattening of upstream JSON shapes into stable records
//! - Fetch operations: quotes, chart series, range stats, search, profiles,
//!   and news

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/owfin/owfin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod normalize;
mod ops;
pub mod url;

pub use client::{ClientConfig, QuoteClient};
pub use url::{BASE_URL, Locale};

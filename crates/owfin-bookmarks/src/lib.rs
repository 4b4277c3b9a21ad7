//! Persistent bookmarks for the owfin market-data toolkit.
//!
//! [`BookmarkStore`] keeps two sets on disk: bookmarked ticker symbols and
//! bookmarked watchlist group ids, each a JSON array under the platform
//! data directory.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/owfin/owfin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod store;

pub use store::{BookmarkStore, Result, StoreError};

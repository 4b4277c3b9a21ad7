//! CLI command implementations.

pub(crate) mod bookmark;
pub(crate) mod chart;
pub(crate) mod info;
pub(crate) mod lists;
pub(crate) mod quote;
pub(crate) mod search;
pub(crate) mod watch;

use anyhow::{Context, Result};
use owfin_lib::prelude::*;
use reqwest::Url;

/// Builds a quote client, optionally pointed at an alternate base URL
/// (e.g. a local proxy in front of the upstream).
pub(crate) fn make_client(base_url: Option<&Url>) -> Result<QuoteClient> {
    let mut config = ClientConfig::default();
    if let Some(base) = base_url {
        config.base_url = base.clone();
    }
    QuoteClient::new(config).context("Failed to create quote client")
}

//! Search results, company profiles, and news items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single result from the symbol search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Ticker symbol.
    pub symbol: String,
    /// Short display name, when known.
    pub short_name: Option<String>,
    /// Full display name, when known.
    pub long_name: Option<String>,
    /// Exchange code (e.g. "IST", "NMS").
    pub exchange: Option<String>,
    /// Instrument type (e.g. "EQUITY", "CURRENCY", "FUTURE").
    pub quote_type: Option<String>,
    /// Relevance score against the query.
    pub score: u32,
}

impl SearchHit {
    /// Returns the best available display name, falling back to the symbol.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.short_name
            .as_deref()
            .or(self.long_name.as_deref())
            .unwrap_or(&self.symbol)
    }
}

/// Company metadata resolved through the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Ticker symbol.
    pub symbol: String,
    /// Short display name.
    pub short_name: Option<String>,
    /// Full display name.
    pub long_name: Option<String>,
    /// Exchange code.
    pub exchange: Option<String>,
    /// Human-readable exchange name.
    pub exchange_display: Option<String>,
    /// Sector classification.
    pub sector: Option<String>,
    /// Industry classification.
    pub industry: Option<String>,
    /// Instrument type (e.g. "EQUITY").
    pub quote_type: Option<String>,
    /// Human-readable instrument type.
    pub type_display: Option<String>,
}

/// A news article related to a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Stable identifier (upstream uuid, link, or a title-based fallback).
    pub id: String,
    /// Headline.
    pub title: String,
    /// Publishing outlet.
    pub publisher: Option<String>,
    /// Article URL.
    pub link: Option<String>,
    /// Publication time (UTC).
    pub published_at: Option<DateTime<Utc>>,
    /// Thumbnail image URL.
    pub thumbnail_url: Option<String>,
    /// Article type (e.g. "STORY", "VIDEO").
    pub kind: Option<String>,
}

//! Watchlist group definitions.

use serde::{Deserialize, Serialize};

/// A named group of symbols shown together on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistGroup {
    /// Unique identifier (e.g. "fx", "us-companies").
    id: String,
    /// Display title.
    title: String,
    /// Optional longer description.
    #[serde(default)]
    description: String,
    /// Symbols in display order.
    symbols: Vec<String>,
}

impl WatchlistGroup {
    /// Creates a new watchlist group.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        symbols: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            symbols,
        }
    }

    /// Returns the group identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display title, falling back to the id when untitled.
    #[must_use]
    pub fn title(&self) -> &str {
        if self.title.is_empty() {
            &self.id
        } else {
            &self.title
        }
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the group's symbols in display order.
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Returns the number of symbols in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the group has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns true if the group contains the symbol (case-insensitive).
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s.eq_ignore_ascii_case(symbol))
    }
}

impl std::fmt::Display for WatchlistGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title(), self.id)
    }
}

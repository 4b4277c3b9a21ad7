//! Watchlist registry for the owfin market-data toolkit.
//!
//! This crate ships the built-in watchlist groups the dashboard renders,
//! embedded as JSON at compile time.
//!
//! # Example
//!
//! ```
//! use owfin_watchlists::WatchlistRegistry;
//!
//! let registry = WatchlistRegistry::global();
//!
//! if let Some(group) = registry.get("fx") {
//!     println!("{}: {} symbols", group.title(), group.len());
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/owfin/owfin/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::sync::OnceLock;

use owfin_types::WatchlistGroup;

/// The watchlist configuration JSON embedded at compile time.
const WATCHLISTS_JSON: &str = include_str!("../data/watchlists.json");

/// Global watchlist registry instance.
static REGISTRY: OnceLock<WatchlistRegistry> = OnceLock::new();

/// Registry of the built-in watchlist groups, in display order.
#[derive(Debug)]
pub struct WatchlistRegistry {
    groups: Vec<WatchlistGroup>,
}

impl WatchlistRegistry {
    /// Returns the global watchlist registry.
    ///
    /// The registry is initialized lazily on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        REGISTRY.get_or_init(Self::load)
    }

    /// Loads groups from the embedded JSON data.
    fn load() -> Self {
        let groups: Vec<WatchlistGroup> =
            serde_json::from_str(WATCHLISTS_JSON).expect("Invalid watchlists.json");
        Self { groups }
    }

    /// Looks up a group by id (case-insensitive).
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&WatchlistGroup> {
        self.groups.iter().find(|g| g.id().eq_ignore_ascii_case(id))
    }

    /// Returns all groups in display order.
    #[must_use]
    pub fn all(&self) -> &[WatchlistGroup] {
        &self.groups
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if the registry has no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns all group ids in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.groups.iter().map(WatchlistGroup::id).collect()
    }

    /// Returns the union of all groups' symbols, deduplicated and in
    /// first-seen order.
    #[must_use]
    pub fn all_symbols(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for group in &self.groups {
            for symbol in group.symbols() {
                if !seen.iter().any(|s: &&str| s.eq_ignore_ascii_case(symbol)) {
                    seen.push(symbol.as_str());
                }
            }
        }
        seen
    }

    /// Returns the groups that contain the given symbol.
    #[must_use]
    pub fn groups_with_symbol(&self, symbol: &str) -> Vec<&WatchlistGroup> {
        self.groups.iter().filter(|g| g.contains(symbol)).collect()
    }

    /// Searches groups by id or title pattern (case-insensitive).
    #[must_use]
    pub fn search(&self, pattern: &str) -> Vec<&WatchlistGroup> {
        let pattern = pattern.to_lowercase();
        self.groups
            .iter()
            .filter(|g| {
                g.id().to_lowercase().contains(&pattern)
                    || g.title().to_lowercase().contains(&pattern)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads() {
        let registry = WatchlistRegistry::global();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_get_case_insensitive() {
        let registry = WatchlistRegistry::global();
        assert!(registry.get("fx").is_some());
        assert!(registry.get("FX").is_some());
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn test_display_order_is_stable() {
        let registry = WatchlistRegistry::global();
        assert_eq!(registry.ids()[0], "funds");
        assert_eq!(registry.ids()[4], "commodities");
    }

    #[test]
    fn test_all_symbols_deduplicated() {
        let registry = WatchlistRegistry::global();
        let symbols = registry.all_symbols();

        let mut unique = symbols.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(symbols.len(), unique.len());
        assert!(symbols.contains(&"THYAO.IS"));
        assert!(symbols.contains(&"GC=F"));
    }

    #[test]
    fn test_groups_with_symbol() {
        let registry = WatchlistRegistry::global();
        let groups = registry.groups_with_symbol("aapl");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].id(), "us-companies");
    }

    #[test]
    fn test_search() {
        let registry = WatchlistRegistry::global();
        assert!(!registry.search("borsa").is_empty());
        assert!(registry.search("zzz").is_empty());
    }
}

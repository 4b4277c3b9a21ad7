//! Normalized quote records.

use serde::{Deserialize, Serialize};

/// A point-in-time price snapshot for a symbol.
///
/// Upstream responses vary in which fields they populate, so every field
/// except the symbol is optional. `change` and `change_percent` are derived
/// from the last price and previous close at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Ticker symbol (e.g. "AAPL", "GC=F", "USDTRY=X").
    pub symbol: String,
    /// Full display name, when known.
    pub long_name: Option<String>,
    /// Short display name, when known.
    pub short_name: Option<String>,
    /// Last traded price.
    pub price: Option<f64>,
    /// Previous session's closing price.
    pub previous_close: Option<f64>,
    /// Day's high.
    pub day_high: Option<f64>,
    /// Day's low.
    pub day_low: Option<f64>,
    /// Day's traded volume.
    pub volume: Option<u64>,
    /// Market capitalization.
    pub market_cap: Option<u64>,
    /// 52-week high.
    pub fifty_two_week_high: Option<f64>,
    /// 52-week low.
    pub fifty_two_week_low: Option<f64>,
    /// Absolute change versus the previous close.
    pub change: Option<f64>,
    /// Percentage change versus the previous close.
    pub change_percent: Option<f64>,
}

impl Quote {
    /// Creates a quote with derived change fields.
    ///
    /// `change` and `change_percent` are `None` unless both the price and a
    /// non-zero previous close are present.
    #[must_use]
    pub fn new(symbol: impl Into<String>, price: Option<f64>, previous_close: Option<f64>) -> Self {
        let (change, change_percent) = derive_change(price, previous_close);
        Self {
            symbol: symbol.into(),
            long_name: None,
            short_name: None,
            price,
            previous_close,
            day_high: None,
            day_low: None,
            volume: None,
            market_cap: None,
            fifty_two_week_high: None,
            fifty_two_week_low: None,
            change,
            change_percent,
        }
    }

    /// Returns the best available display name, falling back to the symbol.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.short_name
            .as_deref()
            .or(self.long_name.as_deref())
            .unwrap_or(&self.symbol)
    }

    /// Returns true if the quote gained against the previous close.
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.change.is_some_and(|c| c > 0.0)
    }

    /// Returns true if the quote lost against the previous close.
    #[must_use]
    pub fn is_down(&self) -> bool {
        self.change.is_some_and(|c| c < 0.0)
    }
}

/// Derives absolute and percentage change from a price and reference close.
///
/// A zero previous close yields `None` rather than a division by zero.
#[must_use]
pub fn derive_change(price: Option<f64>, previous_close: Option<f64>) -> (Option<f64>, Option<f64>) {
    match (price, previous_close) {
        (Some(p), Some(prev)) if prev != 0.0 => {
            let change = p - prev;
            (Some(change), Some(change / prev * 100.0))
        }
        _ => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_change() {
        let (change, pct) = derive_change(Some(110.0), Some(100.0));
        assert!((change.unwrap() - 10.0).abs() < 1e-10);
        assert!((pct.unwrap() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_derive_change_zero_close() {
        assert_eq!(derive_change(Some(110.0), Some(0.0)), (None, None));
    }

    #[test]
    fn test_derive_change_missing_price() {
        assert_eq!(derive_change(None, Some(100.0)), (None, None));
        assert_eq!(derive_change(Some(100.0), None), (None, None));
    }

    #[test]
    fn test_quote_new_derives_change() {
        let quote = Quote::new("THYAO.IS", Some(95.0), Some(100.0));
        assert!((quote.change.unwrap() + 5.0).abs() < 1e-10);
        assert!((quote.change_percent.unwrap() + 5.0).abs() < 1e-10);
        assert!(quote.is_down());
        assert!(!quote.is_up());
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut quote = Quote::new("AAPL", None, None);
        assert_eq!(quote.display_name(), "AAPL");

        quote.long_name = Some("Apple Inc.".to_string());
        assert_eq!(quote.display_name(), "Apple Inc.");

        quote.short_name = Some("Apple".to_string());
        assert_eq!(quote.display_name(), "Apple");
    }
}

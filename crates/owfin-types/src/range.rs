//! Chart range key definitions.
//!
//! Range keys are the dashboard's time-range labels. Each maps to an
//! upstream `(range, interval)` query pair.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A chart time-range label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RangeKey {
    /// One trading day, 2-minute bars.
    #[default]
    #[serde(rename = "1G")]
    Day1,
    /// One week (5 trading days), 15-minute bars.
    #[serde(rename = "1H")]
    Week1,
    /// One month, hourly bars.
    #[serde(rename = "1A")]
    Month1,
    /// Three months, daily bars.
    #[serde(rename = "3A")]
    Month3,
    /// Six months, daily bars.
    #[serde(rename = "6A")]
    Month6,
    /// One year, daily bars.
    #[serde(rename = "1Y")]
    Year1,
    /// Five years, weekly bars.
    #[serde(rename = "5Y")]
    Year5,
    /// Full available history, monthly bars.
    #[serde(rename = "MAX")]
    Max,
}

impl RangeKey {
    /// Returns the upstream `range` query value.
    #[must_use]
    pub const fn upstream_range(&self) -> &'static str {
        match self {
            Self::Day1 => "1d",
            Self::Week1 => "5d",
            Self::Month1 => "1mo",
            Self::Month3 => "3mo",
            Self::Month6 => "6mo",
            Self::Year1 => "1y",
            Self::Year5 => "5y",
            Self::Max => "max",
        }
    }

    /// Returns the upstream `interval` query value.
    #[must_use]
    pub const fn upstream_interval(&self) -> &'static str {
        match self {
            Self::Day1 => "2m",
            Self::Week1 => "15m",
            Self::Month1 => "60m",
            Self::Month3 | Self::Month6 | Self::Year1 => "1d",
            Self::Year5 => "1wk",
            Self::Max => "1mo",
        }
    }

    /// Returns true for the intraday range.
    ///
    /// Intraday charts measure change against the previous close rather
    /// than the first sample of the series.
    #[must_use]
    pub const fn is_intraday(&self) -> bool {
        matches!(self, Self::Day1)
    }

    /// Returns the range key as its dashboard label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day1 => "1G",
            Self::Week1 => "1H",
            Self::Month1 => "1A",
            Self::Month3 => "3A",
            Self::Month6 => "6A",
            Self::Year1 => "1Y",
            Self::Year5 => "5Y",
            Self::Max => "MAX",
        }
    }

    /// Returns all range keys in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Day1,
            Self::Week1,
            Self::Month1,
            Self::Month3,
            Self::Month6,
            Self::Year1,
            Self::Year5,
            Self::Max,
        ]
    }
}

impl std::fmt::Display for RangeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RangeKey {
    type Err = RangeKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "1G" | "1D" | "DAY" => Ok(Self::Day1),
            "1H" | "1W" | "WEEK" => Ok(Self::Week1),
            "1A" | "1MO" | "MONTH" => Ok(Self::Month1),
            "3A" | "3MO" => Ok(Self::Month3),
            "6A" | "6MO" => Ok(Self::Month6),
            "1Y" | "YEAR" => Ok(Self::Year1),
            "5Y" => Ok(Self::Year5),
            "MAX" => Ok(Self::Max),
            _ => Err(RangeKeyParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid range key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeKeyParseError(String);

impl std::fmt::Display for RangeKeyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid range '{}', expected one of: 1G, 1H, 1A, 3A, 6A, 1Y, 5Y, MAX",
            self.0
        )
    }
}

impl std::error::Error for RangeKeyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_params() {
        assert_eq!(RangeKey::Day1.upstream_range(), "1d");
        assert_eq!(RangeKey::Day1.upstream_interval(), "2m");
        assert_eq!(RangeKey::Year1.upstream_range(), "1y");
        assert_eq!(RangeKey::Year1.upstream_interval(), "1d");
        assert_eq!(RangeKey::Max.upstream_interval(), "1mo");
    }

    #[test]
    fn test_intraday() {
        assert!(RangeKey::Day1.is_intraday());
        assert!(!RangeKey::Week1.is_intraday());
        assert!(!RangeKey::Max.is_intraday());
    }

    #[test]
    fn test_parse() {
        assert_eq!("1g".parse::<RangeKey>().unwrap(), RangeKey::Day1);
        assert_eq!("1A".parse::<RangeKey>().unwrap(), RangeKey::Month1);
        assert_eq!("max".parse::<RangeKey>().unwrap(), RangeKey::Max);
        assert_eq!("1d".parse::<RangeKey>().unwrap(), RangeKey::Day1);
        assert!("2X".parse::<RangeKey>().is_err());
    }

    #[test]
    fn test_roundtrip_labels() {
        for key in RangeKey::all() {
            assert_eq!(key.as_str().parse::<RangeKey>().unwrap(), *key);
        }
    }
}

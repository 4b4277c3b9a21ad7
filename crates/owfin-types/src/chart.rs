//! Chart series and range statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single chart sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Sample timestamp (UTC).
    pub time: DateTime<Utc>,
    /// Closing price for the interval.
    pub price: f64,
    /// Percentage change versus the range's reference price.
    pub change_pct: f64,
}

impl ChartPoint {
    /// Creates a chart point, computing the percentage change against the
    /// given reference price.
    #[must_use]
    pub fn new(time: DateTime<Utc>, price: f64, reference_price: f64) -> Self {
        Self {
            time,
            price,
            change_pct: (price - reference_price) / reference_price * 100.0,
        }
    }
}

/// Summary statistics for a symbol over a time range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeStats {
    /// Last available closing price in the range.
    pub last_price: f64,
    /// Absolute change from the first to the last close.
    pub change: f64,
    /// Percentage change from the first to the last close.
    pub change_percent: f64,
}

impl RangeStats {
    /// Computes range statistics from the first and last closes of a series.
    ///
    /// A zero first close yields a 0% change rather than a division by zero.
    #[must_use]
    pub fn from_closes(first_close: f64, last_close: f64) -> Self {
        let change = last_close - first_close;
        let change_percent = if first_close == 0.0 {
            0.0
        } else {
            change / first_close * 100.0
        };
        Self {
            last_price: last_close,
            change,
            change_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_point_change_pct() {
        let point = ChartPoint::new(Utc::now(), 105.0, 100.0);
        assert!((point.change_pct - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_range_stats() {
        let stats = RangeStats::from_closes(100.0, 120.0);
        assert!((stats.change - 20.0).abs() < 1e-10);
        assert!((stats.change_percent - 20.0).abs() < 1e-10);
        assert!((stats.last_price - 120.0).abs() < 1e-10);
    }

    #[test]
    fn test_range_stats_zero_first_close() {
        let stats = RangeStats::from_closes(0.0, 50.0);
        assert!((stats.change - 50.0).abs() < 1e-10);
        assert_eq!(stats.change_percent, 0.0);
    }
}

//! Chart command implementation.

use anyhow::{Context, Result};
use owfin_lib::prelude::*;

use crate::display::{format_percent, format_price, sparkline};

/// Fetch and render the chart series for a symbol.
pub(crate) async fn chart(
    client: &QuoteClient,
    symbol: &str,
    range_str: &str,
    show_points: bool,
) -> Result<()> {
    let range: RangeKey = range_str
        .parse()
        .map_err(|e: RangeKeyParseError| anyhow::anyhow!("{e}"))?;

    let points = client
        .fetch_chart(symbol, range)
        .await
        .with_context(|| format!("Chart fetch failed for {symbol}"))?;

    if points.is_empty() {
        println!("No chart data for {symbol} ({range}).");
        return Ok(());
    }

    let prices: Vec<f64> = points.iter().map(|p| p.price).collect();
    let first = &points[0];
    let last = &points[points.len() - 1];
    let high = prices.iter().copied().fold(f64::MIN, f64::max);
    let low = prices.iter().copied().fold(f64::MAX, f64::min);

    println!("{symbol} ({range})");
    println!("{}", sparkline(&prices));
    println!(
        "{} -> {}",
        first.time.format("%Y-%m-%d %H:%M"),
        last.time.format("%Y-%m-%d %H:%M")
    );
    println!("Last:   {}", format_price(Some(last.price)));
    println!("High:   {}", format_price(Some(high)));
    println!("Low:    {}", format_price(Some(low)));
    println!("Change: {}", format_percent(Some(last.change_pct)));

    // The spark endpoint covers multi-day ranges; intraday change is
    // already relative to the previous close
    if !range.is_intraday() {
        if let Some(stats) = client.fetch_range_stats(symbol, range).await? {
            println!(
                "Range:  {} ({})",
                format_percent(Some(stats.change_percent)),
                format_price(Some(stats.change)),
            );
        }
    }

    if show_points {
        println!();
        println!("{:<18} {:>12} {:>10}", "TIME", "PRICE", "CHANGE%");
        println!("{}", "-".repeat(42));
        for point in &points {
            println!(
                "{:<18} {:>12} {:>10}",
                point.time.format("%Y-%m-%d %H:%M"),
                format_price(Some(point.price)),
                format_percent(Some(point.change_pct)),
            );
        }
    }

    Ok(())
}

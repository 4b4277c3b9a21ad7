//! Display utilities and output formatting for the owfin CLI.

use anyhow::Result;
use clap::ValueEnum;
use owfin_lib::prelude::*;

/// Output format for data commands.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Table,
    Json,
    Csv,
}

/// Glyphs for sparkline rendering, from lowest to highest.
const SPARK_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Formats an optional price, using more precision for small values
/// (FX rates and the like).
pub(crate) fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.abs() < 10.0 => format!("{p:.4}"),
        Some(p) => format!("{p:.2}"),
        None => "-".to_string(),
    }
}

/// Formats an optional change value with an explicit sign.
pub(crate) fn format_change(change: Option<f64>) -> String {
    match change {
        Some(c) if c.abs() < 10.0 => format!("{c:+.4}"),
        Some(c) => format!("{c:+.2}"),
        None => "-".to_string(),
    }
}

/// Formats an optional percentage with an explicit sign.
pub(crate) fn format_percent(pct: Option<f64>) -> String {
    match pct {
        Some(p) => format!("{p:+.2}%"),
        None => "-".to_string(),
    }
}

/// Formats a large count with a K/M/B/T suffix.
pub(crate) fn format_big_number(value: Option<u64>) -> String {
    let Some(value) = value else {
        return "-".to_string();
    };

    let value = value as f64;
    if value >= 1e12 {
        format!("{:.2}T", value / 1e12)
    } else if value >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{value:.0}")
    }
}

/// Truncates a string for fixed-width table cells.
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

/// Renders a price series as a unicode sparkline.
pub(crate) fn sparkline(prices: &[f64]) -> String {
    let (Some(min), Some(max)) = (
        prices.iter().copied().reduce(f64::min),
        prices.iter().copied().reduce(f64::max),
    ) else {
        return String::new();
    };

    let span = max - min;
    prices
        .iter()
        .map(|&p| {
            let level = if span == 0.0 {
                0
            } else {
                // Map into 0..=7, clamping the top edge
                (((p - min) / span) * 8.0).min(7.0) as usize
            };
            SPARK_GLYPHS[level]
        })
        .collect()
}

/// Prints quote rows in the selected format.
pub(crate) fn print_quotes(quotes: &[Quote], format: Format) -> Result<()> {
    match format {
        Format::Table => print_quote_table(quotes),
        Format::Json => println!("{}", serde_json::to_string_pretty(quotes)?),
        Format::Csv => write_quote_csv(quotes, std::io::stdout().lock())?,
    }
    Ok(())
}

fn print_quote_table(quotes: &[Quote]) {
    println!(
        "{:<12} {:<26} {:>12} {:>10} {:>10} {:>10}",
        "SYMBOL", "NAME", "PRICE", "CHANGE", "CHANGE%", "VOLUME"
    );
    println!("{}", "-".repeat(86));

    for quote in quotes {
        println!(
            "{:<12} {:<26} {:>12} {:>10} {:>10} {:>10}",
            truncate(&quote.symbol, 12),
            truncate(quote.display_name(), 26),
            format_price(quote.price),
            format_change(quote.change),
            format_percent(quote.change_percent),
            format_big_number(quote.volume),
        );
    }

    println!("\nTotal: {} symbols", quotes.len());
}

/// Writes quote rows as CSV. The writer handles quoting and escaping.
pub(crate) fn write_quote_csv<W: std::io::Write>(quotes: &[Quote], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "symbol",
        "name",
        "price",
        "previous_close",
        "change",
        "change_percent",
        "day_low",
        "day_high",
        "volume",
        "market_cap",
    ])?;

    for quote in quotes {
        csv.write_record(&[
            quote.symbol.clone(),
            quote.display_name().to_string(),
            csv_opt_f64(quote.price),
            csv_opt_f64(quote.previous_close),
            csv_opt_f64(quote.change),
            csv_opt_f64(quote.change_percent),
            csv_opt_f64(quote.day_low),
            csv_opt_f64(quote.day_high),
            csv_opt_u64(quote.volume),
            csv_opt_u64(quote.market_cap),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Writes search hits as CSV.
pub(crate) fn write_search_csv<W: std::io::Write>(hits: &[SearchHit], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["symbol", "name", "exchange", "type", "score"])?;

    for hit in hits {
        csv.write_record(&[
            hit.symbol.clone(),
            hit.display_name().to_string(),
            hit.exchange.clone().unwrap_or_default(),
            hit.quote_type.clone().unwrap_or_default(),
            hit.score.to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

fn csv_opt_f64(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn csv_opt_u64(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_precision() {
        assert_eq!(format_price(Some(285.5)), "285.50");
        assert_eq!(format_price(Some(1.2345678)), "1.2346");
        assert_eq!(format_price(None), "-");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(5.5)), "+5.50%");
        assert_eq!(format_percent(Some(-0.25)), "-0.25%");
        assert_eq!(format_percent(None), "-");
    }

    #[test]
    fn test_format_big_number() {
        assert_eq!(format_big_number(Some(950)), "950");
        assert_eq!(format_big_number(Some(12_500)), "12.5K");
        assert_eq!(format_big_number(Some(3_400_000)), "3.40M");
        assert_eq!(format_big_number(Some(2_000_000_000)), "2.00B");
        assert_eq!(format_big_number(Some(3_000_000_000_000)), "3.00T");
        assert_eq!(format_big_number(None), "-");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long company name", 10), "a very lo…");
    }

    #[test]
    fn test_sparkline() {
        let line = sparkline(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(line.chars().count(), 4);
        assert!(line.starts_with('▁'));
        assert!(line.ends_with('█'));
    }

    #[test]
    fn test_sparkline_flat_series() {
        assert_eq!(sparkline(&[5.0, 5.0, 5.0]), "▁▁▁");
        assert_eq!(sparkline(&[]), "");
    }

    #[test]
    fn test_quote_csv_quotes_comma_names() {
        let mut quote = Quote::new("AAPL", Some(210.0), Some(200.0));
        quote.short_name = Some("Apple, Inc.".to_string());

        let mut buf = Vec::new();
        write_quote_csv(&[quote], &mut buf).unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("symbol,name,price"));
        assert!(out.contains("AAPL,\"Apple, Inc.\",210"));
    }

    #[test]
    fn test_search_csv_quotes_comma_names() {
        let hit = SearchHit {
            symbol: "AAPL".to_string(),
            short_name: Some("Apple, Inc.".to_string()),
            long_name: None,
            exchange: Some("NMS".to_string()),
            quote_type: Some("EQUITY".to_string()),
            score: 130,
        };

        let mut buf = Vec::new();
        write_search_csv(&[hit], &mut buf).unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("AAPL,\"Apple, Inc.\",NMS,EQUITY,130"));
    }

    #[test]
    fn test_csv_missing_fields_are_empty() {
        let quote = Quote::new("GC=F", None, None);

        let mut buf = Vec::new();
        write_quote_csv(&[quote], &mut buf).unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("GC=F,GC=F,,,,,,,,"));
    }
}

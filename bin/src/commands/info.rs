//! Info command implementation.
//!
//! Shows the detail view for a symbol: company profile, current quote,
//! and recent related news.

use anyhow::{Context, Result};
use owfin_lib::prelude::*;

use crate::display::{format_big_number, format_change, format_percent, format_price};

/// Show detailed information about a symbol.
pub(crate) async fn info(client: &QuoteClient, symbol: &str, news_count: usize) -> Result<()> {
    let quote = client
        .fetch_quote(symbol)
        .await
        .with_context(|| format!("Quote fetch failed for {symbol}"))?
        .with_context(|| format!("No quote data for symbol: {symbol}"))?;

    // Profile is best-effort; the quote alone is still a useful detail view
    let profile = client.fetch_profile(symbol).await.unwrap_or_default();

    println!("Symbol:   {}", quote.symbol);
    println!("Name:     {}", quote.display_name());

    if let Some(profile) = &profile {
        if let Some(exchange) = profile
            .exchange_display
            .as_deref()
            .or(profile.exchange.as_deref())
        {
            println!("Exchange: {exchange}");
        }
        if let Some(kind) = profile
            .type_display
            .as_deref()
            .or(profile.quote_type.as_deref())
        {
            println!("Type:     {kind}");
        }
        if let Some(sector) = &profile.sector {
            println!("Sector:   {sector}");
        }
        if let Some(industry) = &profile.industry {
            println!("Industry: {industry}");
        }
    }

    println!();
    println!(
        "Price:      {} ({} / {})",
        format_price(quote.price),
        format_change(quote.change),
        format_percent(quote.change_percent),
    );
    println!("Prev close: {}", format_price(quote.previous_close));
    println!(
        "Day range:  {} - {}",
        format_price(quote.day_low),
        format_price(quote.day_high),
    );
    println!(
        "52w range:  {} - {}",
        format_price(quote.fifty_two_week_low),
        format_price(quote.fifty_two_week_high),
    );
    println!("Volume:     {}", format_big_number(quote.volume));
    println!("Market cap: {}", format_big_number(quote.market_cap));

    match client.fetch_news(symbol, news_count).await {
        Ok(items) if !items.is_empty() => {
            println!("\nRecent news:");
            for item in &items {
                let date = item
                    .published_at
                    .map(|t| t.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  [{date}] {} ({})",
                    item.title,
                    item.publisher.as_deref().unwrap_or("unknown"),
                );
                if let Some(link) = &item.link {
                    println!("          {link}");
                }
            }
        }
        Ok(_) => {}
        Err(e) => eprintln!("Warning: news fetch failed: {e}"),
    }

    Ok(())
}

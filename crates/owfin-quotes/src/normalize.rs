//! Response normalization.
//!
//! The upstream endpoints return heterogeneous JSON shapes; these functions
//! flatten them into the stable records from `owfin-types`. They are pure
//! over parsed documents so they can be exercised without a network.

use chrono::DateTime;
use owfin_types::{ChartPoint, CompanyProfile, NewsItem, Quote, RangeKey, RangeStats, SearchHit};
use serde_json::Value;

/// Extracts the first chart result object from a chart response.
fn chart_result(doc: &Value) -> Option<&Value> {
    doc.get("chart")?.get("result")?.get(0)
}

fn field_str(value: &Value, key: &str) -> Option<String> {
    value.get(key)?.as_str().map(str::to_string)
}

fn field_f64(value: &Value, key: &str) -> Option<f64> {
    value.get(key)?.as_f64()
}

fn field_u64(value: &Value, key: &str) -> Option<u64> {
    value.get(key)?.as_u64()
}

/// Normalizes a single-symbol chart response into a [`Quote`].
///
/// Returns `None` when the response carries no chart result for the symbol
/// (unknown or delisted symbols come back with an empty result array).
#[must_use]
pub fn quote_from_chart(requested_symbol: &str, doc: &Value) -> Option<Quote> {
    let result = chart_result(doc)?;
    let meta = result.get("meta").unwrap_or(&Value::Null);

    let price = field_f64(meta, "regularMarketPrice");
    // previousClose is the regular-session close; chartPreviousClose is the
    // fallback the upstream fills for FX and futures
    let previous_close =
        field_f64(meta, "previousClose").or_else(|| field_f64(meta, "chartPreviousClose"));

    let symbol = field_str(meta, "symbol").unwrap_or_else(|| requested_symbol.to_string());

    let mut quote = Quote::new(symbol, price, previous_close);
    quote.long_name = field_str(meta, "longName");
    quote.short_name = field_str(meta, "shortName");
    quote.day_high = field_f64(meta, "regularMarketDayHigh");
    quote.day_low = field_f64(meta, "regularMarketDayLow");
    quote.volume = field_u64(meta, "regularMarketVolume");
    quote.market_cap = field_u64(meta, "marketCap");
    quote.fifty_two_week_high = field_f64(meta, "fiftyTwoWeekHigh");
    quote.fifty_two_week_low = field_f64(meta, "fiftyTwoWeekLow");
    Some(quote)
}

/// Normalizes a chart response into a series of [`ChartPoint`]s.
///
/// Samples with a null close (halted intervals) or a null timestamp are
/// skipped without disturbing the pairing of the rest. The reference price for the
/// percentage change depends on the range: intraday charts measure against
/// the previous close, longer ranges against the first valid sample. A
/// missing or zero reference falls back to the first valid sample.
#[must_use]
pub fn chart_points(doc: &Value, range: RangeKey) -> Vec<ChartPoint> {
    let Some(result) = chart_result(doc) else {
        return Vec::new();
    };

    let meta = result.get("meta").unwrap_or(&Value::Null);
    // Null entries must stay in place so the close at index i keeps its
    // timestamp at index i
    let timestamps: Vec<Option<i64>> = result
        .get("timestamp")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().map(Value::as_i64).collect())
        .unwrap_or_default();
    let closes: Vec<Option<f64>> = result
        .get("indicators")
        .and_then(|i| i.get("quote"))
        .and_then(|q| q.get(0))
        .and_then(|q| q.get("close"))
        .and_then(Value::as_array)
        .map(|arr| arr.iter().map(Value::as_f64).collect())
        .unwrap_or_default();

    if timestamps.is_empty() || closes.is_empty() {
        return Vec::new();
    }

    let Some(first_close) = closes.iter().copied().flatten().next() else {
        return Vec::new();
    };

    let mut reference_price = if range.is_intraday() {
        field_f64(meta, "chartPreviousClose")
            .or_else(|| field_f64(meta, "previousClose"))
            .unwrap_or(first_close)
    } else {
        first_close
    };

    if reference_price == 0.0 || !reference_price.is_finite() {
        reference_price = first_close;
    }

    timestamps
        .iter()
        .zip(closes.iter())
        .filter_map(|(ts, close)| {
            let price = (*close)?;
            let time = DateTime::from_timestamp((*ts)?, 0)?;
            Some(ChartPoint::new(time, price, reference_price))
        })
        .collect()
}

/// Normalizes a spark response into [`RangeStats`].
///
/// The spark endpoint keys series by symbol; lookup tolerates case
/// differences and falls back to the first series in the document.
#[must_use]
pub fn range_stats(symbol: &str, doc: &Value) -> Option<RangeStats> {
    let map = doc.as_object()?;

    let series = map
        .get(symbol)
        .or_else(|| map.get(&symbol.to_uppercase()))
        .or_else(|| map.values().next())?;

    let closes = series.get("close")?.as_array()?;
    if closes.is_empty() {
        return None;
    }

    let first_close = closes.iter().find_map(Value::as_f64)?;
    let last_close = closes.iter().rev().find_map(Value::as_f64)?;

    Some(RangeStats::from_closes(first_close, last_close))
}

/// Scores a search result against the normalized (lowercased) query.
fn score_hit(quote: &Value, normalized_query: &str) -> u32 {
    let symbol = field_str(quote, "symbol").unwrap_or_default().to_lowercase();
    let shortname = field_str(quote, "shortname")
        .unwrap_or_default()
        .to_lowercase();
    let longname = field_str(quote, "longname")
        .unwrap_or_default()
        .to_lowercase();

    let mut score = 0;

    if symbol == normalized_query {
        score += 100;
    }
    if !shortname.is_empty() && shortname == normalized_query {
        score += 90;
    }
    if !longname.is_empty() && longname == normalized_query {
        score += 90;
    }

    if shortname.contains(normalized_query) {
        score += 40;
    }
    if longname.contains(normalized_query) {
        score += 40;
    }

    if symbol.starts_with(normalized_query) {
        score += 30;
    }

    score
}

/// Normalizes a search response into relevance-ordered [`SearchHit`]s.
///
/// Entries without a symbol are dropped. The sort is stable, so upstream
/// order breaks score ties.
#[must_use]
pub fn search_hits(query: &str, doc: &Value) -> Vec<SearchHit> {
    let Some(quotes) = doc.get("quotes").and_then(Value::as_array) else {
        return Vec::new();
    };

    let normalized_query = query.trim().to_lowercase();

    let mut hits: Vec<SearchHit> = quotes
        .iter()
        .filter_map(|quote| {
            let symbol = field_str(quote, "symbol")?;
            Some(SearchHit {
                symbol,
                short_name: field_str(quote, "shortname"),
                long_name: field_str(quote, "longname"),
                exchange: field_str(quote, "exchange"),
                quote_type: field_str(quote, "quoteType"),
                score: score_hit(quote, &normalized_query),
            })
        })
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits
}

/// Normalizes the first search result into a [`CompanyProfile`].
#[must_use]
pub fn company_profile(doc: &Value) -> Option<CompanyProfile> {
    let quote = doc.get("quotes")?.get(0)?;
    let symbol = field_str(quote, "symbol")?;

    Some(CompanyProfile {
        symbol,
        short_name: field_str(quote, "shortname"),
        long_name: field_str(quote, "longname"),
        exchange: field_str(quote, "exchange"),
        exchange_display: field_str(quote, "exchDisp"),
        sector: field_str(quote, "sectorDisp").or_else(|| field_str(quote, "sector")),
        industry: field_str(quote, "industryDisp").or_else(|| field_str(quote, "industry")),
        quote_type: field_str(quote, "quoteType"),
        type_display: field_str(quote, "typeDisp"),
    })
}

/// Normalizes a search response's news array into [`NewsItem`]s.
///
/// Items are kept only when their related tickers mention the symbol,
/// either as-is or with the Istanbul `.IS` suffix stripped; the news feed
/// tags BIST stocks both ways.
#[must_use]
pub fn news_items(symbol: &str, doc: &Value) -> Vec<NewsItem> {
    let Some(items) = doc.get("news").and_then(Value::as_array) else {
        return Vec::new();
    };

    let upper_symbol = symbol.to_uppercase();
    let base_symbol = upper_symbol.strip_suffix(".IS").unwrap_or("").to_string();

    items
        .iter()
        .filter(|item| {
            let tickers: Vec<String> = item
                .get("relatedTickers")
                .and_then(Value::as_array)
                .map(|arr| {
                    arr.iter()
                        .filter_map(Value::as_str)
                        .map(str::to_uppercase)
                        .collect()
                })
                .unwrap_or_default();

            tickers.contains(&upper_symbol)
                || (!base_symbol.is_empty() && tickers.contains(&base_symbol))
        })
        .filter_map(|item| {
            let title = field_str(item, "title")?;
            let publisher = field_str(item, "publisher");
            let link = field_str(item, "link");

            let id = field_str(item, "uuid")
                .or_else(|| link.clone())
                .unwrap_or_else(|| {
                    format!("{title}-{}", publisher.as_deref().unwrap_or_default())
                });

            let published_at = item
                .get("providerPublishTime")
                .and_then(Value::as_i64)
                .and_then(|secs| DateTime::from_timestamp(secs, 0));

            let thumbnail_url = item
                .get("thumbnail")
                .and_then(|t| t.get("resolutions"))
                .and_then(|r| r.get(0))
                .and_then(|r| r.get("url"))
                .and_then(Value::as_str)
                .map(str::to_string);

            Some(NewsItem {
                id,
                title,
                publisher,
                link,
                published_at,
                thumbnail_url,
                kind: field_str(item, "type"),
            })
        })
        .collect()
}

//! High-level fetch operations.

use futures::stream::{self, StreamExt};
use owfin_types::{
    ChartPoint, CompanyProfile, NewsItem, OwfinError, Quote, RangeKey, RangeStats, Result,
    SearchHit,
};

use crate::QuoteClient;
use crate::normalize;
use crate::url::{Locale, chart_url, search_url, spark_url};

/// Upper bound the upstream accepts for search result counts.
const MAX_SEARCH_RESULTS: usize = 200;

/// Default news item count when none is requested.
const DEFAULT_NEWS_COUNT: usize = 6;

impl QuoteClient {
    /// Fetches a normalized quote for a single symbol.
    ///
    /// Returns `Ok(None)` when the upstream has no chart result for the
    /// symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn fetch_quote(&self, symbol: &str) -> Result<Option<Quote>> {
        let config = self.config();
        // The chart endpoint with a 1d/1d window doubles as the quote
        // endpoint; everything needed lives in the result meta
        let url = chart_url(&config.base_url, symbol, "1d", "1d", &config.locale);
        let doc = self.get_json(&url).await?;
        Ok(normalize::quote_from_chart(symbol, &doc))
    }

    /// Fetches quotes for a batch of symbols concurrently.
    ///
    /// Blank symbols are skipped, and per-symbol failures are logged and
    /// dropped so one bad symbol cannot sink a watchlist render. Input
    /// order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`OwfinError::NoQuoteData`] when no symbol yields a quote.
    pub async fn fetch_quotes<S: AsRef<str>>(&self, symbols: &[S]) -> Result<Vec<Quote>> {
        let clean: Vec<&str> = symbols
            .iter()
            .map(AsRef::as_ref)
            .filter(|s| !s.trim().is_empty())
            .collect();

        let quotes: Vec<Quote> = stream::iter(clean)
            .map(|symbol| async move {
                match self.fetch_quote(symbol).await {
                    Ok(quote) => quote,
                    Err(e) => {
                        eprintln!("Warning: quote fetch failed for {symbol}: {e}");
                        None
                    }
                }
            })
            .buffered(self.config().concurrency)
            .filter_map(|quote| async move { quote })
            .collect()
            .await;

        if quotes.is_empty() {
            return Err(OwfinError::NoQuoteData);
        }

        Ok(quotes)
    }

    /// Fetches the chart series for a symbol over the given range.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn fetch_chart(&self, symbol: &str, range: RangeKey) -> Result<Vec<ChartPoint>> {
        let config = self.config();
        let url = chart_url(
            &config.base_url,
            symbol,
            range.upstream_range(),
            range.upstream_interval(),
            &config.locale,
        );
        let doc = self.get_json(&url).await?;
        Ok(normalize::chart_points(&doc, range))
    }

    /// Fetches first-to-last range statistics from the spark endpoint.
    ///
    /// Intraday ranges return `Ok(None)` without a request; the quote's own
    /// change fields already cover the day.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn fetch_range_stats(
        &self,
        symbol: &str,
        range: RangeKey,
    ) -> Result<Option<RangeStats>> {
        if symbol.trim().is_empty() || range.is_intraday() {
            return Ok(None);
        }

        let config = self.config();
        let url = spark_url(
            &config.base_url,
            symbol,
            range.upstream_range(),
            range.upstream_interval(),
            &config.locale,
        );
        let doc = self.get_json(&url).await?;
        Ok(normalize::range_stats(symbol, &doc))
    }

    /// Searches for symbols matching a free-text query.
    ///
    /// An empty or whitespace query returns no hits. `limit` is clamped to
    /// the upstream maximum of 200.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        let limit = limit.clamp(1, MAX_SEARCH_RESULTS);
        let config = self.config();
        let url = search_url(&config.base_url, trimmed, limit, 0, &config.locale);
        let doc = self.get_json(&url).await?;
        Ok(normalize::search_hits(trimmed, &doc))
    }

    /// Resolves company metadata for a symbol through the search endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn fetch_profile(&self, symbol: &str) -> Result<Option<CompanyProfile>> {
        if symbol.trim().is_empty() {
            return Ok(None);
        }

        let config = self.config();
        let url = search_url(&config.base_url, symbol, 1, 0, &config.locale);
        let doc = self.get_json(&url).await?;
        Ok(normalize::company_profile(&doc))
    }

    /// Fetches recent news related to a symbol.
    ///
    /// News is only published against the US feed, so this always queries
    /// with the US locale regardless of the configured one. A zero count
    /// falls back to the default of 6.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn fetch_news(&self, symbol: &str, count: usize) -> Result<Vec<NewsItem>> {
        if symbol.trim().is_empty() {
            return Ok(Vec::new());
        }

        let count = if count == 0 { DEFAULT_NEWS_COUNT } else { count };
        let config = self.config();
        let url = search_url(&config.base_url, symbol, 0, count, &Locale::us());
        let doc = self.get_json(&url).await?;
        Ok(normalize::news_items(symbol, &doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offline_client() -> QuoteClient {
        // Unroutable base URL: any test that escapes the cache fails fast
        let config = crate::ClientConfig {
            base_url: reqwest::Url::parse("http://127.0.0.1:9").unwrap(),
            max_retries: 0,
            timeout: std::time::Duration::from_millis(200),
            ..Default::default()
        };
        QuoteClient::new(config).unwrap()
    }

    fn chart_fixture(symbol: &str, price: f64, previous_close: f64) -> serde_json::Value {
        json!({
            "chart": {
                "result": [{
                    "meta": {
                        "symbol": symbol,
                        "regularMarketPrice": price,
                        "previousClose": previous_close
                    },
                    "timestamp": [],
                    "indicators": { "quote": [{ "close": [] }] }
                }]
            }
        })
    }

    #[tokio::test]
    async fn test_fetch_quote_from_cache() {
        let client = offline_client();
        let config = client.config().clone();
        let url = chart_url(&config.base_url, "AAPL", "1d", "1d", &config.locale);
        client.prime(&url, chart_fixture("AAPL", 210.0, 200.0));

        let quote = client.fetch_quote("AAPL").await.unwrap().unwrap();
        assert_eq!(quote.symbol, "AAPL");
        assert!((quote.change.unwrap() - 10.0).abs() < 1e-10);
    }

    #[tokio::test]
    async fn test_fetch_quotes_skips_failures() {
        let client = offline_client();
        let config = client.config().clone();

        let url = chart_url(&config.base_url, "AAPL", "1d", "1d", &config.locale);
        client.prime(&url, chart_fixture("AAPL", 210.0, 200.0));

        // "BAD" is not primed, so its fetch fails against the unroutable
        // base and is skipped
        let quotes = client.fetch_quotes(&["AAPL", "", "BAD"]).await.unwrap();
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].symbol, "AAPL");
    }

    #[tokio::test]
    async fn test_fetch_quotes_all_failed() {
        let client = offline_client();
        let result = client.fetch_quotes(&["BAD1", "BAD2"]).await;
        assert!(matches!(result, Err(OwfinError::NoQuoteData)));
    }

    #[tokio::test]
    async fn test_fetch_chart_uses_range_params() {
        let client = offline_client();
        let config = client.config().clone();

        let url = chart_url(&config.base_url, "AAPL", "1y", "1d", &config.locale);
        client.prime(
            &url,
            json!({
                "chart": {
                    "result": [{
                        "meta": {},
                        "timestamp": [1_700_000_000, 1_700_086_400],
                        "indicators": { "quote": [{ "close": [100.0, 110.0] }] }
                    }]
                }
            }),
        );

        let points = client.fetch_chart("AAPL", RangeKey::Year1).await.unwrap();
        assert_eq!(points.len(), 2);
        assert!((points[1].change_pct - 10.0).abs() < 1e-10);
    }

    #[tokio::test]
    async fn test_fetch_range_stats_intraday_is_none() {
        let client = offline_client();
        let stats = client
            .fetch_range_stats("AAPL", RangeKey::Day1)
            .await
            .unwrap();
        assert!(stats.is_none());
    }

    #[tokio::test]
    async fn test_fetch_range_stats() {
        let client = offline_client();
        let config = client.config().clone();

        let url = spark_url(&config.base_url, "AAPL", "1y", "1d", &config.locale);
        client.prime(&url, json!({ "AAPL": { "close": [100.0, 125.0] } }));

        let stats = client
            .fetch_range_stats("AAPL", RangeKey::Year1)
            .await
            .unwrap()
            .unwrap();
        assert!((stats.change_percent - 25.0).abs() < 1e-10);
    }

    #[tokio::test]
    async fn test_search_empty_query() {
        let client = offline_client();
        let hits = client.search("   ", 10).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_search_clamps_limit() {
        let client = offline_client();
        let config = client.config().clone();

        // Limit of 1000 must be clamped to 200 in the request URL
        let url = search_url(&config.base_url, "apple", 200, 0, &config.locale);
        client.prime(&url, json!({ "quotes": [{ "symbol": "AAPL" }] }));

        let hits = client.search("apple", 1000).await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_news_uses_us_locale() {
        let client = offline_client();
        let config = client.config().clone();

        let url = search_url(&config.base_url, "AAPL", 0, 6, &Locale::us());
        client.prime(
            &url,
            json!({
                "news": [{ "title": "Apple ships", "relatedTickers": ["AAPL"] }]
            }),
        );

        let items = client.fetch_news("AAPL", 0).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Apple ships");
    }

    #[tokio::test]
    async fn test_fetch_profile_empty_symbol() {
        let client = offline_client();
        assert!(client.fetch_profile(" ").await.unwrap().is_none());
    }
}

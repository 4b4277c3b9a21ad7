//! Upstream query URL construction.
//!
//! All builders take the configured base URL so the client can point at the
//! real upstream host or a same-origin proxy prefix (e.g. `/api/yahoo`
//! mounted on a local server). Symbols and queries are percent-encoded by
//! the `Url` path/query machinery.

use reqwest::Url;

/// Default base URL for the upstream quote API.
pub const BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Language/region pair sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47 language tag (e.g. "tr-TR").
    pub lang: String,
    /// Upstream region code (e.g. "TR").
    pub region: String,
}

impl Locale {
    /// Turkish locale, the dashboard default.
    #[must_use]
    pub fn turkey() -> Self {
        Self {
            lang: "tr-TR".to_string(),
            region: "TR".to_string(),
        }
    }

    /// US English locale, used for news lookups.
    #[must_use]
    pub fn us() -> Self {
        Self {
            lang: "en-US".to_string(),
            region: "US".to_string(),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::turkey()
    }
}

/// Appends path segments to a base URL, tolerating a trailing slash.
fn with_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    url.path_segments_mut()
        .expect("base URL must be able to have a path")
        .pop_if_empty()
        .extend(segments);
    url
}

/// Builds the URL for the chart endpoint (`/v8/finance/chart/{symbol}`).
///
/// The same endpoint serves both single-symbol quotes (`range=1d`,
/// `interval=1d`) and chart series (range/interval from a range key).
#[must_use]
pub fn chart_url(base: &Url, symbol: &str, range: &str, interval: &str, locale: &Locale) -> Url {
    let mut url = with_segments(base, &["v8", "finance", "chart", symbol]);
    url.query_pairs_mut()
        .append_pair("range", range)
        .append_pair("interval", interval)
        .append_pair("lang", &locale.lang)
        .append_pair("region", &locale.region);
    url
}

/// Builds the URL for the spark endpoint (`/v8/finance/spark`).
#[must_use]
pub fn spark_url(base: &Url, symbol: &str, range: &str, interval: &str, locale: &Locale) -> Url {
    let mut url = with_segments(base, &["v8", "finance", "spark"]);
    url.query_pairs_mut()
        .append_pair("symbols", symbol)
        .append_pair("range", range)
        .append_pair("interval", interval)
        .append_pair("lang", &locale.lang)
        .append_pair("region", &locale.region);
    url
}

/// Builds the URL for the search endpoint (`/v1/finance/search`).
///
/// `quotes_count` and `news_count` select how many instrument matches and
/// news items the upstream returns; either may be zero.
#[must_use]
pub fn search_url(
    base: &Url,
    query: &str,
    quotes_count: usize,
    news_count: usize,
    locale: &Locale,
) -> Url {
    let mut url = with_segments(base, &["v1", "finance", "search"]);
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("lang", &locale.lang)
        .append_pair("region", &locale.region)
        .append_pair("quotesCount", &quotes_count.to_string())
        .append_pair("newsCount", &news_count.to_string());
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse(BASE_URL).unwrap()
    }

    #[test]
    fn test_chart_url() {
        let url = chart_url(&base(), "THYAO.IS", "1d", "1d", &Locale::turkey());
        assert_eq!(
            url.as_str(),
            "https://query1.finance.yahoo.com/v8/finance/chart/THYAO.IS?range=1d&interval=1d&lang=tr-TR&region=TR"
        );
    }

    #[test]
    fn test_chart_url_encodes_symbol() {
        let url = chart_url(&base(), "GC=F", "1y", "1d", &Locale::turkey());
        assert!(url.path().ends_with("/GC=F") || url.path().ends_with("/GC%3DF"));
        assert_eq!(url.query(), Some("range=1y&interval=1d&lang=tr-TR&region=TR"));
    }

    #[test]
    fn test_chart_url_proxy_base() {
        let proxy = Url::parse("http://localhost:4173/api/yahoo").unwrap();
        let url = chart_url(&proxy, "AAPL", "1d", "2m", &Locale::turkey());
        assert!(url.path().starts_with("/api/yahoo/v8/finance/chart/AAPL"));
    }

    #[test]
    fn test_spark_url_encodes_symbol() {
        let url = spark_url(&base(), "USDTRY=X", "1mo", "60m", &Locale::turkey());
        assert!(url.query().unwrap().contains("symbols=USDTRY%3DX"));
    }

    #[test]
    fn test_search_url() {
        let url = search_url(&base(), "türk hava", 100, 0, &Locale::turkey());
        assert!(url.path().ends_with("/v1/finance/search"));
        let query = url.query().unwrap();
        assert!(query.contains("quotesCount=100"));
        assert!(query.contains("newsCount=0"));
        assert!(!query.contains(' '));
    }

    #[test]
    fn test_search_url_news_locale() {
        let url = search_url(&base(), "AAPL", 0, 6, &Locale::us());
        let query = url.query().unwrap();
        assert!(query.contains("lang=en-US"));
        assert!(query.contains("region=US"));
        assert!(query.contains("newsCount=6"));
    }
}

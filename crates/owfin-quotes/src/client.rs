//! HTTP client with a time-bounded response cache.

use owfin_types::{OwfinError, Result};
use reqwest::{Client, Url};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::url::{BASE_URL, Locale};

/// Configuration for the quote client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the upstream API (or a proxy prefix in front of it).
    pub base_url: Url,
    /// Language/region pair sent with every request.
    pub locale: Locale,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retry attempts for transient failures.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
    /// How long a cached response stays fresh.
    pub cache_ttl: Duration,
    /// Maximum concurrent requests for batch operations.
    pub concurrency: usize,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(BASE_URL).expect("default base URL is valid"),
            locale: Locale::default(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            base_delay_ms: 500,
            max_delay_ms: 10_000,
            cache_ttl: Duration::from_secs(60),
            concurrency: 8,
            user_agent: format!("owfin/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// A cached parsed response.
#[derive(Debug, Clone)]
struct CacheEntry {
    fetched_at: Instant,
    body: Arc<Value>,
}

/// HTTP client for the upstream quote API.
///
/// Responses are cached per URL for [`ClientConfig::cache_ttl`]; the cache
/// is an unbounded map with no eviction beyond expiry, matching the short
/// session-scoped lifetime this client is built for. Clones share the same
/// cache.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    client: Client,
    config: ClientConfig,
    cache: Arc<Mutex<HashMap<String, CacheEntry>>>,
}

impl QuoteClient {
    /// Creates a new quote client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.concurrency)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| OwfinError::Http(e.to_string()))?;
        Ok(Self {
            client,
            config,
            cache: Arc::new(Mutex::new(HashMap::new())),
        })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the number of cached responses (fresh or expired).
    ///
    /// # Panics
    ///
    /// Panics if the cache lock is poisoned.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.lock().expect("cache lock poisoned").len()
    }

    /// Drops all cached responses.
    ///
    /// # Panics
    ///
    /// Panics if the cache lock is poisoned.
    pub fn clear_cache(&self) {
        self.cache.lock().expect("cache lock poisoned").clear();
    }

    /// Fetches a URL as parsed JSON, consulting the cache first.
    ///
    /// Transient failures (5xx, 429, timeouts, connection errors) are
    /// retried with exponential backoff. Non-JSON responses are rejected
    /// with a short body preview, since the upstream occasionally serves
    /// HTML consent or rate-limit pages with a 200 status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after all retries, the status
    /// is not successful, or the body is not valid JSON.
    pub async fn get_json(&self, url: &Url) -> Result<Arc<Value>> {
        let key = url.as_str().to_string();

        if let Some(body) = self.cached(&key) {
            return Ok(body);
        }

        let response = self.get_with_retry(url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OwfinError::Status {
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let text = response
            .text()
            .await
            .map_err(|e| OwfinError::Http(e.to_string()))?;

        if !content_type.contains("application/json") {
            let preview: String = text.chars().take(120).collect();
            return Err(OwfinError::ContentType {
                content_type,
                preview,
            });
        }

        let body = Arc::new(serde_json::from_str::<Value>(&text)?);
        self.insert(key, Arc::clone(&body));
        Ok(body)
    }

    /// Looks up a fresh cache entry.
    fn cached(&self, key: &str) -> Option<Arc<Value>> {
        let cache = self.cache.lock().expect("cache lock poisoned");
        cache
            .get(key)
            .filter(|entry| entry.fetched_at.elapsed() < self.config.cache_ttl)
            .map(|entry| Arc::clone(&entry.body))
    }

    /// Inserts a parsed response into the cache.
    fn insert(&self, key: String, body: Arc<Value>) {
        let mut cache = self.cache.lock().expect("cache lock poisoned");
        cache.insert(
            key,
            CacheEntry {
                fetched_at: Instant::now(),
                body,
            },
        );
    }

    /// Seeds the cache directly. Used by offline tests.
    pub(crate) fn prime(&self, url: &Url, body: Value) {
        self.insert(url.as_str().to_string(), Arc::new(body));
    }

    /// Sends a GET request, retrying transient failures.
    async fn get_with_retry(&self, url: &Url) -> Result<reqwest::Response> {
        let mut attempts = 0;

        loop {
            match self.client.get(url.clone()).send().await {
                Ok(response) => {
                    // Retry on server errors (5xx) and rate limiting (429)
                    if response.status().is_server_error()
                        || response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS
                    {
                        if attempts < self.config.max_retries {
                            attempts += 1;
                            let delay = self.calculate_backoff_delay(attempts);
                            tokio::time::sleep(delay).await;
                            continue;
                        }
                        return Err(OwfinError::Status {
                            status: response.status().as_u16(),
                        });
                    }

                    return Ok(response);
                }
                Err(e) if is_retryable_error(&e) && attempts < self.config.max_retries => {
                    attempts += 1;
                    let delay = self.calculate_backoff_delay(attempts);
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(OwfinError::Http(e.to_string())),
            }
        }
    }

    /// Calculates the backoff delay with exponential backoff and jitter.
    fn calculate_backoff_delay(&self, attempt: u32) -> Duration {
        let exp_delay = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(10));

        let capped_delay = exp_delay.min(self.config.max_delay_ms);

        // Deterministic jitter (±25%) based on the attempt number, which
        // avoids pulling in a random number generator
        let jitter_range = capped_delay / 4;
        let jitter = if jitter_range > 0 {
            let jitter_offset = (u64::from(attempt) * 17) % (jitter_range * 2);
            jitter_offset.saturating_sub(jitter_range)
        } else {
            0
        };

        let final_delay = (capped_delay as i64 + jitter as i64).max(100) as u64;
        Duration::from_millis(final_delay)
    }
}

/// Determines if a transport error is retryable.
fn is_retryable_error(error: &reqwest::Error) -> bool {
    // Builder errors are configuration issues, never retryable
    if error.is_builder() {
        return false;
    }

    error.is_timeout() || error.is_connect() || error.is_request()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.as_str(), format!("{BASE_URL}/"));
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.concurrency, 8);
        assert_eq!(config.locale, Locale::turkey());
    }

    #[test]
    fn test_client_creation() {
        let client = QuoteClient::with_defaults();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_cache_hit_skips_network() {
        let client = QuoteClient::with_defaults().unwrap();
        let url = Url::parse("https://query1.finance.yahoo.com/v8/finance/chart/TEST").unwrap();

        client.prime(&url, json!({"hello": "world"}));
        assert_eq!(client.cache_len(), 1);

        // A network fetch for an unroutable test URL would fail, so a
        // successful result proves the cache answered
        let body = client.get_json(&url).await.unwrap();
        assert_eq!(body["hello"], "world");
    }

    #[tokio::test]
    async fn test_expired_entry_is_not_served() {
        let config = ClientConfig {
            cache_ttl: Duration::ZERO,
            max_retries: 0,
            timeout: Duration::from_millis(200),
            base_url: Url::parse("http://127.0.0.1:9").unwrap(),
            ..Default::default()
        };
        let client = QuoteClient::new(config).unwrap();
        let url = Url::parse("http://127.0.0.1:9/v8/finance/chart/TEST").unwrap();

        client.prime(&url, json!({"stale": true}));

        // TTL of zero expires the entry immediately; the refetch against an
        // unroutable address must surface as an error
        assert!(client.get_json(&url).await.is_err());
    }

    #[test]
    fn test_clear_cache() {
        let client = QuoteClient::with_defaults().unwrap();
        let url = Url::parse("https://query1.finance.yahoo.com/v8/finance/spark").unwrap();

        client.prime(&url, json!({}));
        assert_eq!(client.cache_len(), 1);

        client.clear_cache();
        assert_eq!(client.cache_len(), 0);
    }

    #[test]
    fn test_backoff_delay_calculation() {
        let client = QuoteClient::with_defaults().unwrap();

        let delay1 = client.calculate_backoff_delay(1);
        assert!(delay1.as_millis() >= 750 && delay1.as_millis() <= 1250);

        let delay2 = client.calculate_backoff_delay(2);
        assert!(delay2.as_millis() >= 1500 && delay2.as_millis() <= 2500);

        // High attempt counts are capped at max_delay (+25% jitter)
        let delay_high = client.calculate_backoff_delay(20);
        assert!(delay_high.as_millis() <= 12_500);
    }
}

//! Remote table retrieval
//!
//! Every load goes to the network; published sheets are edited by hotel
//! staff and changes must show up on the next request. A `_ts` query
//! parameter defeats intermediary caches.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use super::parser::parse_table;
use shared::hotel::RawRow;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source URL for {0} is not configured")]
    UrlMissing(&'static str),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("cannot read {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no table published at {0}")]
    Unknown(String),
}

impl SourceError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, SourceError::Transport { source, .. } if source.is_timeout())
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        match &err {
            SourceError::UrlMissing(_) => {
                AppError::with_message(ErrorCode::SourceUrlMissing, err.to_string())
            }
            _ if err.is_timeout() => AppError::with_message(ErrorCode::TimeoutError, err.to_string()),
            _ => AppError::source_unavailable(err.to_string()),
        }
    }
}

/// Source of raw table text
#[async_trait]
pub trait TableFetcher: Send + Sync {
    /// Fetch the document body at `url`
    async fn fetch_text(&self, url: &str) -> Result<String, SourceError>;

    /// Fetch and parse; an empty URL is an empty table
    async fn fetch_rows(&self, url: &str) -> Result<Vec<RawRow>, SourceError> {
        let url = url.trim();
        if url.is_empty() {
            return Ok(Vec::new());
        }
        let text = self.fetch_text(url).await?;
        Ok(parse_table(&text))
    }
}

/// Fetches published CSV over HTTP(S); `file://` URLs are read from disk
pub struct HttpTableFetcher {
    client: reqwest::Client,
}

impl HttpTableFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("guest-hub/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TableFetcher for HttpTableFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        if let Some(path) = url.strip_prefix("file://") {
            return tokio::fs::read_to_string(path)
                .await
                .map_err(|source| SourceError::File {
                    path: path.to_string(),
                    source,
                });
        }

        let target = cache_busted(url, chrono::Utc::now().timestamp_millis());
        tracing::debug!(url = %target, "Fetching table");

        let response = self
            .client
            .get(&target)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|source| SourceError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| SourceError::Transport {
            url: url.to_string(),
            source,
        })
    }
}

/// Append the `_ts` cache-buster, keeping any fragment last
pub fn cache_busted(url: &str, millis: i64) -> String {
    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };
    let separator = if base.contains('?') { '&' } else { '?' };
    match fragment {
        Some(fragment) => format!("{base}{separator}_ts={millis}#{fragment}"),
        None => format!("{base}{separator}_ts={millis}"),
    }
}

/// In-process table store keyed by URL, for local runs and tests
#[derive(Default)]
pub struct MemoryTableFetcher {
    tables: RwLock<HashMap<String, String>>,
}

impl MemoryTableFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish (or replace) the CSV text served at `url`
    pub fn publish(&self, url: impl Into<String>, csv: impl Into<String>) {
        self.tables.write().insert(url.into(), csv.into());
    }

    pub fn with_table(self, url: impl Into<String>, csv: impl Into<String>) -> Self {
        self.publish(url, csv);
        self
    }
}

#[async_trait]
impl TableFetcher for MemoryTableFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        self.tables
            .read()
            .get(url)
            .cloned()
            .ok_or_else(|| SourceError::Unknown(url.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_busted_appends_param() {
        assert_eq!(
            cache_busted("https://docs.example/pub?output=csv", 42),
            "https://docs.example/pub?output=csv&_ts=42"
        );
        assert_eq!(cache_busted("https://x.example/t.csv", 7), "https://x.example/t.csv?_ts=7");
        assert_eq!(
            cache_busted("https://x.example/t?gid=1#frag", 7),
            "https://x.example/t?gid=1&_ts=7#frag"
        );
    }

    #[tokio::test]
    async fn test_memory_fetcher_rows() {
        let fetcher = MemoryTableFetcher::new().with_table("mem://settings", "key,value\nhotelName,Demo\n");
        let rows = fetcher.fetch_rows("mem://settings").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["value"], "Demo");
    }

    #[tokio::test]
    async fn test_empty_url_is_empty_table() {
        let fetcher = MemoryTableFetcher::new();
        assert!(fetcher.fetch_rows("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_url_is_source_error() {
        let fetcher = MemoryTableFetcher::new();
        let err = fetcher.fetch_rows("mem://missing").await.unwrap_err();
        assert!(matches!(err, SourceError::Unknown(_)));

        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::SourceUnavailable);
    }

    #[tokio::test]
    async fn test_publish_replaces_table() {
        let fetcher = MemoryTableFetcher::new().with_table("mem://settings", "key,value\nhotelName,Old\n");
        fetcher.publish("mem://settings", "key,value\nhotelName,New\n");

        let rows = fetcher.fetch_rows("mem://settings").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["value"], "New");
    }

    #[test]
    fn test_url_missing_maps_to_code() {
        let app: AppError = SourceError::UrlMissing("settings").into();
        assert_eq!(app.code, ErrorCode::SourceUrlMissing);
    }
}

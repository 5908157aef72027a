//! Snapshot sources.
//!
//! The scoring engine works over instantaneous snapshots of the two
//! worksheets; this module owns how those snapshots are obtained and how
//! fresh they are. Failing to obtain a snapshot at all is the one hard
//! failure in the system — everything downstream degrades instead.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};
use url::Url;

/// Errors that can occur while obtaining a snapshot.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed snapshot from {source_name}: expected an array of row objects")]
    Malformed { source_name: String },
}

/// Provider of raw worksheet snapshots.
///
/// Rows are JSON objects keyed by column header; `ingest` turns them into
/// typed models. Implementations own caching and freshness.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// The picks worksheet rows.
    async fn picks(&self) -> Result<Vec<Value>, FetchError>;

    /// The scores worksheet rows.
    async fn scores(&self) -> Result<Vec<Value>, FetchError>;
}

struct CachedRows {
    rows: Vec<Value>,
    fetched_at: DateTime<Utc>,
}

/// HTTP source for published sheet worksheets, with an in-memory TTL cache.
///
/// Each worksheet endpoint must return a JSON array of row objects. A
/// short TTL (30 s by default) keeps the scoreboard near-live without
/// hammering the sheet on every page view.
pub struct SheetsClient {
    client: Client,
    picks_url: Url,
    scores_url: Url,
    cache_ttl: Duration,
    picks_cache: RwLock<Option<CachedRows>>,
    scores_cache: RwLock<Option<CachedRows>>,
}

impl SheetsClient {
    /// Create a client for the two worksheet endpoints.
    pub fn new(picks_url: Url, scores_url: Url, cache_ttl: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            picks_url,
            scores_url,
            cache_ttl,
            picks_cache: RwLock::new(None),
            scores_cache: RwLock::new(None),
        })
    }

    async fn fetch_worksheet(
        &self,
        url: &Url,
        cache: &RwLock<Option<CachedRows>>,
        source_name: &str,
    ) -> Result<Vec<Value>, FetchError> {
        {
            let guard = cache.read().await;
            if let Some(cached) = guard.as_ref() {
                let age = Utc::now().signed_duration_since(cached.fetched_at);
                if age.num_seconds() >= 0 && (age.num_seconds() as u64) < self.cache_ttl.as_secs() {
                    debug!("Serving {} snapshot from cache", source_name);
                    return Ok(cached.rows.clone());
                }
            }
        }

        info!("Fetching {} snapshot from {}", source_name, url);
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body: Value = response.json().await?;
        let rows = match body {
            Value::Array(rows) => rows,
            _ => {
                return Err(FetchError::Malformed {
                    source_name: source_name.to_string(),
                })
            }
        };

        let mut guard = cache.write().await;
        *guard = Some(CachedRows {
            rows: rows.clone(),
            fetched_at: Utc::now(),
        });

        Ok(rows)
    }
}

#[async_trait]
impl SnapshotSource for SheetsClient {
    async fn picks(&self) -> Result<Vec<Value>, FetchError> {
        self.fetch_worksheet(&self.picks_url, &self.picks_cache, "picks")
            .await
    }

    async fn scores(&self) -> Result<Vec<Value>, FetchError> {
        self.fetch_worksheet(&self.scores_url, &self.scores_cache, "scores")
            .await
    }
}

/// Fixed in-memory snapshots, for fixtures and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    picks: Vec<Value>,
    scores: Vec<Value>,
}

impl StaticSource {
    pub fn new(picks: Vec<Value>, scores: Vec<Value>) -> Self {
        Self { picks, scores }
    }

    /// Load both worksheets from local JSON files (arrays of row objects).
    pub fn from_files(picks_path: &Path, scores_path: &Path) -> Result<Self, FetchError> {
        Ok(Self {
            picks: read_rows(picks_path)?,
            scores: read_rows(scores_path)?,
        })
    }
}

fn read_rows(path: &Path) -> Result<Vec<Value>, FetchError> {
    let content = std::fs::read_to_string(path)?;
    match serde_json::from_str(&content)? {
        Value::Array(rows) => Ok(rows),
        _ => Err(FetchError::Malformed {
            source_name: path.display().to_string(),
        }),
    }
}

#[async_trait]
impl SnapshotSource for StaticSource {
    async fn picks(&self) -> Result<Vec<Value>, FetchError> {
        Ok(self.picks.clone())
    }

    async fn scores(&self) -> Result<Vec<Value>, FetchError> {
        Ok(self.scores.clone())
    }
}

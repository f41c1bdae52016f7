// logwindow - fetch/mod.rs
//
// The backend fetch seam: the wire contract for log pages and the
// `LogFetcher` trait the controller talks to. The HTTP implementation
// lives in `fetch::http`; tests substitute scripted fetchers.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::model::{Level, LogEntry};
use crate::core::query::LogQuery;
use crate::util::error::FetchError;

pub mod http;

// =============================================================================
// Wire types
// =============================================================================

/// A single record as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct LogRecord {
    pub id: String,
    pub attributes: LogAttributes,
}

/// The nested attribute object of a backend record.
#[derive(Debug, Clone, Deserialize)]
pub struct LogAttributes {
    pub message: String,
    pub level: Level,

    /// ISO 8601 timestamp. Absent or unparseable values degrade to an
    /// entry without a timestamp, which the merger discards.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// One page of records, in the backend's envelope. The list may arrive in
/// any order; ordering is the merger's responsibility.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogPage {
    #[serde(default)]
    pub data: Vec<LogRecord>,
}

impl LogPage {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Normalise the page into window entries.
    ///
    /// Timestamps that fail to parse become `None` rather than failing the
    /// whole page; the merger drops such entries.
    pub fn into_entries(self) -> Vec<LogEntry> {
        self.data
            .into_iter()
            .map(|record| {
                let timestamp = record.attributes.timestamp.as_deref().and_then(parse_timestamp);
                if timestamp.is_none() {
                    tracing::debug!(id = %record.id, "Record has no resolvable timestamp");
                }
                LogEntry {
                    id: record.id,
                    timestamp,
                    level: record.attributes.level,
                    message: record.attributes.message,
                }
            })
            .collect()
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

// =============================================================================
// Fetcher trait
// =============================================================================

/// Executes a query against the log backend.
///
/// Implementations are asynchronous and side-effect free with respect to
/// the window: they return a page or a failure and never touch view state.
#[async_trait]
pub trait LogFetcher {
    async fn fetch(&self, query: &LogQuery) -> Result<LogPage, FetchError>;
}

// =============================================================================
// Unit tests
// =============================================================================

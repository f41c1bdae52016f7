// logwindow - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no rendering,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::util::constants;

// =============================================================================
// Log Entry
// =============================================================================

/// A single log record as held in the window.
///
/// This is the core data unit that flows through query building, merging,
/// and display. Entries arrive from the backend in wire form (see
/// `fetch::LogRecord`) and are normalised into this shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Opaque backend identifier. Lexicographically sortable, but NOT
    /// guaranteed chronological.
    pub id: String,

    /// Absolute instant the entry occurred. `None` if the backend record
    /// carried no parseable timestamp; such entries are invalid and are
    /// discarded by the merger.
    pub timestamp: Option<DateTime<Utc>>,

    /// Normalised severity level.
    pub level: Level,

    /// Full message text.
    pub message: String,
}

// =============================================================================
// Level
// =============================================================================

/// Log severity levels the backend distinguishes.
///
/// Ordered so that a joined level list always reads `error,info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Info,
}

impl Level {
    /// Wire-format name, as sent in the query's `levels` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Info => "info",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Level::Error => "Error Logs",
            Level::Info => "Info Logs",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Timezone display mode
// =============================================================================

/// How timestamps are presented and how anchor wall-clock input is resolved.
///
/// The mode never affects window ordering, which is always by absolute
/// instant. Round-trips through the preference store as "Local" / "UTC".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimezoneMode {
    #[default]
    Local,
    Utc,
}

impl TimezoneMode {
    /// Stored-preference representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimezoneMode::Local => "Local",
            TimezoneMode::Utc => "UTC",
        }
    }

    /// Parse a stored preference value. Unknown values return `None` so a
    /// corrupt preference falls back to the default rather than erroring.
    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "Local" => Some(TimezoneMode::Local),
            "UTC" => Some(TimezoneMode::Utc),
            _ => None,
        }
    }

    /// Format an instant for display under this mode
    /// (`YYYY-MM-DD HH:mm:ss +offset`).
    pub fn format_timestamp(&self, instant: DateTime<Utc>) -> String {
        match self {
            TimezoneMode::Local => instant
                .with_timezone(&Local)
                .format(constants::DISPLAY_TIMESTAMP_FORMAT)
                .to_string(),
            TimezoneMode::Utc => instant
                .format(constants::DISPLAY_TIMESTAMP_FORMAT)
                .to_string(),
        }
    }
}

impl std::fmt::Display for TimezoneMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit tests
// =============================================================================

// logwindow - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "logwindow";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "logwindow";

/// Current crate version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Date/time formats
// =============================================================================

/// chrono format for the anchor date input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// chrono format for the anchor time input.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Strict shape for the anchor date input. chrono's `%m` accepts `2024-1-15`,
/// which the dashboard must reject, so the shape is checked first.
pub const DATE_SHAPE: &str = r"^\d{4}-\d{2}-\d{2}$";

/// Strict shape for the anchor time input (rejects `13:45`).
pub const TIME_SHAPE: &str = r"^\d{2}:\d{2}:\d{2}$";

/// chrono format for presenting an entry timestamp in the dashboard.
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";

// =============================================================================
// Timezone preference
// =============================================================================

/// Key under which the timezone display preference is stored.
pub const TIMEZONE_PREFERENCE_KEY: &str = "logwindow-timezone-preference";

/// How long a stored timezone preference remains valid (30 days).
pub const PREFERENCE_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Preference file name (stored in the platform data directory).
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

// =============================================================================
// Backend fetch
// =============================================================================

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8001";

/// Path of the log listing endpoint, relative to the base URL.
pub const LOGS_ENDPOINT: &str = "/logs";

/// Default request timeout in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Minimum user-configurable request timeout (seconds).
pub const MIN_FETCH_TIMEOUT_SECS: u64 = 1;

/// Maximum user-configurable request timeout (seconds).
pub const MAX_FETCH_TIMEOUT_SECS: u64 = 300;

// =============================================================================
// User-facing messages
// =============================================================================

/// Informational message when a fetch produced nothing new.
pub const MSG_NO_LOGS: &str = "No logs to load";

/// Corrective message for malformed or invalid anchor date/time input.
pub const MSG_INVALID_DATETIME: &str =
    "Please enter a valid date and time range in the format YYYY-MM-DD HH:MM:SS";

/// Generic message for transport or backend failures.
pub const MSG_GENERIC_FAILURE: &str =
    "Something went wrong. Please report the issue using the Help & Support section";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

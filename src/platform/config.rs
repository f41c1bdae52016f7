// logwindow - platform/config.rs
//
// Platform path resolution and config.toml loading with startup
// validation. Values are validated against named constants at load time;
// invalid values produce actionable warnings and fall back to defaults.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::util::constants;

/// Resolved platform paths for logwindow data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (config.toml lives here).
    pub config_dir: PathBuf,

    /// Data directory (the preference file lives here).
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Full path of the preference store file.
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(constants::PREFERENCES_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility — a newer
/// config file can be used with an older build without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[backend]` section.
    pub backend: BackendSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[backend]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct BackendSection {
    /// Base URL of the log backend API.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the log backend API.
    pub base_url: String,

    /// Request timeout in seconds.
    pub fetch_timeout_secs: u64,

    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,

    /// Log file path.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            fetch_timeout_secs: constants::DEFAULT_FETCH_TIMEOUT_SECS,
            log_level: None,
            log_file: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. A missing file returns defaults with no warnings (first-run);
/// an unparseable file returns defaults with an error warning so the
/// embedder can inform the user without failing to start.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let mut config = AppConfig::default();

    // -- Backend: base_url --
    if let Some(ref url) = raw.backend.base_url {
        if url.starts_with("http://") || url.starts_with("https://") {
            config.base_url = url.trim_end_matches('/').to_string();
        } else {
            warnings.push(format!(
                "[backend] base_url = \"{url}\" is not an http(s) URL. Using default ({}).",
                constants::DEFAULT_BASE_URL,
            ));
        }
    }

    // -- Backend: timeout_secs --
    if let Some(secs) = raw.backend.timeout_secs {
        if (constants::MIN_FETCH_TIMEOUT_SECS..=constants::MAX_FETCH_TIMEOUT_SECS).contains(&secs)
        {
            config.fetch_timeout_secs = secs;
        } else {
            warnings.push(format!(
                "[backend] timeout_secs = {secs} is out of range ({}-{}). Using default ({}).",
                constants::MIN_FETCH_TIMEOUT_SECS,
                constants::MAX_FETCH_TIMEOUT_SECS,
                constants::DEFAULT_FETCH_TIMEOUT_SECS,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file.clone());
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

// =============================================================================
// Unit tests
// =============================================================================

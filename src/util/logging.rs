// logwindow - util/logging.rs
//
// Structured logging for the dashboard data engine.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - Config file: [logging] level = "debug"
//
// Output: stderr. Never logs log-entry message bodies at info or above;
// entry content may contain user data.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// `config_level` is the level from config.toml (if present).
///
/// Priority: RUST_LOG env var > config level > default "info".
pub fn init(config_level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if let Some(level) = config_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}

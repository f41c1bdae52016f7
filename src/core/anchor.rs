// logwindow - core/anchor.rs
//
// Time anchor: an optional user-selected absolute instant the window is
// jumped to, entered as a (date, time) wall-clock pair and resolved under
// the active timezone mode.
//
// Validation is strict: the inputs must match YYYY-MM-DD and HH:mm:ss
// exactly (a two-digit month, a seconds field) and name a real calendar
// date and wall-clock time.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use regex::Regex;
use std::sync::OnceLock;

use crate::core::model::TimezoneMode;
use crate::util::constants;
use crate::util::error::ValidationError;

/// The active time anchor for a view session.
///
/// Created empty; populated by a validated apply action; cleared by reset
/// or by a validation failure leaving it untouched (never half-set).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeAnchor {
    /// Raw date text as entered (`YYYY-MM-DD`).
    pub date: Option<String>,

    /// Raw time text as entered (`HH:mm:ss`).
    pub time: Option<String>,

    /// The resolved absolute instant, present only after a successful apply.
    pub resolved: Option<DateTime<Utc>>,
}

impl TimeAnchor {
    /// Returns true if an instant is currently anchored.
    pub fn is_set(&self) -> bool {
        self.resolved.is_some()
    }

    /// Populate from a successful resolution.
    pub fn set(&mut self, date: &str, time: &str, resolved: DateTime<Utc>) {
        self.date = Some(date.to_string());
        self.time = Some(time.to_string());
        self.resolved = Some(resolved);
    }

    /// Drop the anchor entirely.
    pub fn clear(&mut self) {
        self.date = None;
        self.time = None;
        self.resolved = None;
    }
}

fn date_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(constants::DATE_SHAPE).expect("date shape regex is valid"))
}

fn time_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(constants::TIME_SHAPE).expect("time shape regex is valid"))
}

/// Strict-parse the wall-clock pair, rejecting loose shapes chrono would
/// otherwise accept (`2024-1-15`, `13:45`).
fn parse_wall_clock(date_text: &str, time_text: &str) -> Result<NaiveDateTime, ValidationError> {
    let invalid = || ValidationError::InvalidFormat {
        date: date_text.to_string(),
        time: time_text.to_string(),
    };

    if !date_shape().is_match(date_text) || !time_shape().is_match(time_text) {
        return Err(invalid());
    }

    let date = NaiveDate::parse_from_str(date_text, constants::DATE_FORMAT)
        .map_err(|_| invalid())?;
    let time = NaiveTime::parse_from_str(time_text, constants::TIME_FORMAT)
        .map_err(|_| invalid())?;

    Ok(NaiveDateTime::new(date, time))
}

/// Resolve a validated (date, time) pair into an absolute instant under the
/// given timezone mode.
///
/// UTC mode additionally requires the instant to be strictly before `now`.
/// Local mode applies no future check; the asymmetry is the documented
/// behaviour of the dashboard and is preserved as-is.
pub fn resolve_anchor(
    date_text: &str,
    time_text: &str,
    mode: TimezoneMode,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, ValidationError> {
    let wall_clock = parse_wall_clock(date_text, time_text)?;

    match mode {
        TimezoneMode::Utc => {
            let instant = Utc.from_utc_datetime(&wall_clock);
            if instant < now {
                Ok(instant)
            } else {
                Err(ValidationError::FutureInstant {
                    requested: format!("{date_text} {time_text}"),
                })
            }
        }
        TimezoneMode::Local => {
            // DST fold: both offsets are real; take the earlier occurrence.
            // DST gap: the wall clock never existed; reject.
            let local = match Local.from_local_datetime(&wall_clock) {
                LocalResult::Single(dt) => dt,
                LocalResult::Ambiguous(earliest, _latest) => earliest,
                LocalResult::None => {
                    return Err(ValidationError::NonexistentLocalTime {
                        date: date_text.to_string(),
                        time: time_text.to_string(),
                    })
                }
            };
            Ok(local.with_timezone(&Utc))
        }
    }
}

// =============================================================================
// Unit tests
// =============================================================================

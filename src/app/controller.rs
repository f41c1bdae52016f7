// logwindow - app/controller.rs
//
// Pagination controller: the single owner of a view session's mutable
// state (window, filters, anchor, timezone mode, loading flag) and the
// orchestrator of every load flow.
//
// Architecture:
//   - Collaborators are injected at the seams: LogFetcher for transport,
//     NotificationSink for user-facing signals, PreferenceStore for the
//     persisted timezone toggle.
//   - All operations take `&mut self` and await the fetch inline, so
//     fetches are serialised per window and merges apply transactionally.
//   - Every externally visible failure routes through the sink; none is
//     fatal to the session.

use chrono::{Duration, Utc};

use crate::app::notify::{NotificationKind, NotificationSink};
use crate::core::anchor::{resolve_anchor, TimeAnchor};
use crate::core::filter::FilterCriteria;
use crate::core::merge::merge_page;
use crate::core::model::{LogEntry, TimezoneMode};
use crate::core::query::{build_query, LogQuery, PageDirection, PageRequest};
use crate::fetch::LogFetcher;
use crate::platform::prefs::PreferenceStore;
use crate::util::constants;
use crate::util::error::ValidationError;

// =============================================================================
// Load outcome
// =============================================================================

/// What a load operation did, for callers that want to react beyond the
/// notification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The window gained new information.
    Merged,

    /// The fetch succeeded but the page contained nothing new; the
    /// (identical) merged window replaced the old one.
    NoNewLogs,

    /// The backend returned an empty page; the window was not touched.
    EmptyPage,

    /// Pagination was requested on an empty window; no fetch was issued.
    NoOp,

    /// Date/time input failed validation; window and anchor untouched,
    /// no fetch issued.
    InvalidInput,

    /// The fetch failed; the window was not modified.
    FetchFailed,
}

// =============================================================================
// Controller
// =============================================================================

/// Owns and drives one log-window view session.
#[derive(Debug)]
pub struct PaginationController<F, N, P> {
    fetcher: F,
    notifier: N,
    prefs: P,

    window: Vec<LogEntry>,
    filters: FilterCriteria,
    anchor: TimeAnchor,
    timezone_mode: TimezoneMode,
    loading: bool,
}

impl<F, N, P> PaginationController<F, N, P>
where
    F: LogFetcher,
    N: NotificationSink,
    P: PreferenceStore,
{
    /// Create a controller with an empty window.
    ///
    /// The timezone display mode is restored from the preference store;
    /// a missing, expired, or unrecognised preference falls back to Local.
    pub fn new(fetcher: F, notifier: N, prefs: P) -> Self {
        let timezone_mode = prefs
            .get(constants::TIMEZONE_PREFERENCE_KEY)
            .and_then(|value| TimezoneMode::from_str_opt(&value))
            .unwrap_or_default();

        Self {
            fetcher,
            notifier,
            prefs,
            window: Vec::new(),
            filters: FilterCriteria::default(),
            anchor: TimeAnchor::default(),
            timezone_mode,
            loading: false,
        }
    }

    // -------------------------------------------------------------------------
    // State snapshot accessors (for any renderer)
    // -------------------------------------------------------------------------

    /// The current log window, deduplicated and time-ordered.
    pub fn window(&self) -> &[LogEntry] {
        &self.window
    }

    /// The active filter criteria.
    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    /// The active time anchor.
    pub fn anchor(&self) -> &TimeAnchor {
        &self.anchor
    }

    /// The active timezone display mode.
    pub fn timezone_mode(&self) -> TimezoneMode {
        self.timezone_mode
    }

    /// Whether a fetch is currently in flight (spinner contract).
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Format an entry's timestamp for display under the active mode.
    /// `None` for entries without a timestamp (which the merger normally
    /// never lets into the window).
    pub fn format_entry_timestamp(&self, entry: &LogEntry) -> Option<String> {
        entry
            .timestamp
            .map(|instant| self.timezone_mode.format_timestamp(instant))
    }

    // -------------------------------------------------------------------------
    // Load flows
    // -------------------------------------------------------------------------

    /// Initial load: newest entries up to "now" (or up to the anchor, when
    /// one is set), merged into the current window.
    pub async fn load_initial(&mut self) -> LoadOutcome {
        let query = build_query(&self.filters, &self.anchor, None, Utc::now());
        self.run_fetch(query).await
    }

    /// Page older-ward from the window's first entry.
    pub async fn load_older(&mut self) -> LoadOutcome {
        self.load_page(PageDirection::Older).await
    }

    /// Page newer-ward from the window's last entry.
    pub async fn load_newer(&mut self) -> LoadOutcome {
        self.load_page(PageDirection::Newer).await
    }

    async fn load_page(&mut self, direction: PageDirection) -> LoadOutcome {
        // The cursor is derived from the window at call time, never stored.
        let boundary = match direction {
            PageDirection::Older => self.window.first(),
            PageDirection::Newer => self.window.last(),
        };

        let Some(entry) = boundary else {
            tracing::debug!(?direction, "Pagination requested on an empty window");
            return LoadOutcome::NoOp;
        };

        let page = PageRequest {
            direction,
            boundary_id: entry.id.clone(),
        };
        let query = build_query(&self.filters, &self.anchor, Some(&page), Utc::now());
        self.run_fetch(query).await
    }

    /// Replace the filter criteria. Does not fetch; the new criteria take
    /// effect on the next load.
    pub fn apply_filters(&mut self, filters: FilterCriteria) {
        self.filters = filters;
    }

    /// Apply an anchor from raw date/time input.
    ///
    /// Both blank: clear the window and anchor and reload from "now".
    /// Exactly one blank, malformed input, or a UTC-mode future instant:
    /// reject with a notification, leaving window and anchor untouched.
    /// Both valid: anchor at the resolved instant, clear the window, and
    /// fetch with the instant as the upper time bound.
    pub async fn apply(&mut self, date_text: &str, time_text: &str) -> LoadOutcome {
        let date = date_text.trim();
        let time = time_text.trim();

        if date.is_empty() && time.is_empty() {
            self.anchor.clear();
            self.window.clear();
            return self.load_initial().await;
        }

        if date.is_empty() || time.is_empty() {
            return self.reject_input(ValidationError::IncompleteInput {
                date: date.to_string(),
                time: time.to_string(),
            });
        }

        let now = Utc::now();
        match resolve_anchor(date, time, self.timezone_mode, now) {
            Ok(instant) => {
                self.anchor.set(date, time, instant);
                self.window.clear();
                tracing::info!(anchor = %instant, "Window anchored");
                let query = build_query(&self.filters, &self.anchor, None, now);
                self.run_fetch(query).await
            }
            Err(err) => self.reject_input(err),
        }
    }

    /// Clear filters, search terms, anchor, and window, then reload the
    /// newest entries up to "now".
    pub async fn reset(&mut self) -> LoadOutcome {
        self.filters = FilterCriteria::default();
        self.anchor.clear();
        self.window.clear();
        tracing::debug!("View session reset");

        let query = build_query(&self.filters, &self.anchor, None, Utc::now());
        self.run_fetch(query).await
    }

    /// Switch the timezone display mode and persist the preference.
    ///
    /// Presentation-only: never refetches and never reorders the window.
    /// A store failure is logged and otherwise ignored; the in-session
    /// mode still changes.
    pub fn set_timezone_mode(&mut self, mode: TimezoneMode) {
        self.timezone_mode = mode;
        if let Err(e) = self.prefs.set(
            constants::TIMEZONE_PREFERENCE_KEY,
            mode.as_str(),
            Duration::seconds(constants::PREFERENCE_TTL_SECS),
        ) {
            tracing::warn!(error = %e, "Could not persist timezone preference");
        }
    }

    // -------------------------------------------------------------------------
    // Fetch + merge
    // -------------------------------------------------------------------------

    fn reject_input(&self, err: ValidationError) -> LoadOutcome {
        tracing::debug!(error = %err, "Anchor input rejected");
        self.notifier
            .notify(NotificationKind::Error, err.user_message());
        LoadOutcome::InvalidInput
    }

    async fn run_fetch(&mut self, query: LogQuery) -> LoadOutcome {
        self.loading = true;
        tracing::debug!(?query, "Issuing log fetch");
        let result = self.fetcher.fetch(&query).await;
        self.loading = false;

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(error = %e, "Log fetch failed");
                self.notifier
                    .notify(NotificationKind::Error, constants::MSG_GENERIC_FAILURE);
                return LoadOutcome::FetchFailed;
            }
        };

        if page.is_empty() {
            tracing::debug!("Fetch returned an empty page");
            self.notifier
                .notify(NotificationKind::Info, constants::MSG_NO_LOGS);
            return LoadOutcome::EmptyPage;
        }

        let fetched = page.len();
        let outcome = merge_page(&self.window, page.into_entries());
        let unchanged = outcome.unchanged;
        // The merged window replaces the old one even when unchanged.
        self.window = outcome.window;

        if unchanged {
            tracing::debug!(fetched, "Merge produced no new information");
            self.notifier
                .notify(NotificationKind::Info, constants::MSG_NO_LOGS);
            LoadOutcome::NoNewLogs
        } else {
            tracing::debug!(fetched, window = self.window.len(), "Window updated");
            LoadOutcome::Merged
        }
    }
}

// =============================================================================
// Unit tests
// =============================================================================

// logwindow - core/query.rs
//
// Query construction: turns the active filters, anchor, and an optional
// pagination request into the parameter set the backend is called with.
// Pure functions, no side effects.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::anchor::TimeAnchor;
use crate::core::filter::FilterCriteria;

// =============================================================================
// Query description
// =============================================================================

/// The backend query contract. Absent fields are omitted from the request
/// entirely (serde skips `None`), matching the wire contract where absence
/// of a constraint means "unconstrained".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogQuery {
    /// Inclusive upper time bound (initial and anchored loads only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lte_timestamp: Option<DateTime<Utc>>,

    /// Exclusive upper id bound (older-ward pagination).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lt_id: Option<String>,

    /// Exclusive lower id bound (newer-ward pagination).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gt_id: Option<String>,

    /// Comma-joined level list, e.g. `error,info`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<String>,

    /// Comma-joined free-text search terms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_terms: Option<String>,
}

// =============================================================================
// Pagination request
// =============================================================================

/// Which direction the user is paging in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    /// Load entries older than the window's first entry.
    Older,
    /// Load entries newer than the window's last entry.
    Newer,
}

/// A cursor-pagination request: a direction plus the boundary id it pages
/// from. The boundary is always derived from the current window at call
/// time, never stored, so it cannot go stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub direction: PageDirection,
    pub boundary_id: String,
}

// =============================================================================
// Builder
// =============================================================================

/// Build the query for a fetch.
///
/// Rules:
/// - No pagination and no resolved anchor: upper time bound is `now`.
/// - No pagination with a resolved anchor: upper time bound is the anchor.
/// - Older-ward pagination: exclusive upper id bound, no time bound.
/// - Newer-ward pagination: exclusive lower id bound, no time bound.
/// - Non-empty filters contribute comma-joined `levels` / `search_terms`.
///
/// `now` is passed in rather than read here so the function stays pure.
pub fn build_query(
    filters: &FilterCriteria,
    anchor: &TimeAnchor,
    page: Option<&PageRequest>,
    now: DateTime<Utc>,
) -> LogQuery {
    let mut query = LogQuery {
        levels: filters.levels_param(),
        search_terms: filters.terms_param(),
        ..Default::default()
    };

    match page {
        None => {
            query.lte_timestamp = Some(anchor.resolved.unwrap_or(now));
        }
        Some(request) => match request.direction {
            PageDirection::Older => query.lt_id = Some(request.boundary_id.clone()),
            PageDirection::Newer => query.gt_id = Some(request.boundary_id.clone()),
        },
    }

    query
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Level;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_initial_load_bounds_at_now() {
        let query = build_query(&FilterCriteria::default(), &TimeAnchor::default(), None, now());
        assert_eq!(query.lte_timestamp, Some(now()));
        assert_eq!(query.lt_id, None);
        assert_eq!(query.gt_id, None);
        assert_eq!(query.levels, None);
        assert_eq!(query.search_terms, None);
    }

    #[test]
    fn test_resolved_anchor_overrides_now() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 13, 45, 0).unwrap();
        let mut anchor = TimeAnchor::default();
        anchor.set("2024-01-15", "13:45:00", instant);

        let query = build_query(&FilterCriteria::default(), &anchor, None, now());
        assert_eq!(query.lte_timestamp, Some(instant));
    }

    /// Older-ward pagination carries only the id cursor; the time bound is
    /// omitted even when an anchor is set.
    #[test]
    fn test_older_page_uses_id_cursor_only() {
        let mut anchor = TimeAnchor::default();
        anchor.set(
            "2024-01-15",
            "13:45:00",
            Utc.with_ymd_and_hms(2024, 1, 15, 13, 45, 0).unwrap(),
        );
        let page = PageRequest {
            direction: PageDirection::Older,
            boundary_id: "005".to_string(),
        };

        let query = build_query(&FilterCriteria::default(), &anchor, Some(&page), now());
        assert_eq!(query.lt_id.as_deref(), Some("005"));
        assert_eq!(query.gt_id, None);
        assert_eq!(query.lte_timestamp, None);
    }

    #[test]
    fn test_newer_page_uses_lower_id_cursor() {
        let page = PageRequest {
            direction: PageDirection::Newer,
            boundary_id: "010".to_string(),
        };
        let query = build_query(
            &FilterCriteria::default(),
            &TimeAnchor::default(),
            Some(&page),
            now(),
        );
        assert_eq!(query.gt_id.as_deref(), Some("010"));
        assert_eq!(query.lt_id, None);
        assert_eq!(query.lte_timestamp, None);
    }

    #[test]
    fn test_filters_joined_into_query() {
        let mut filters = FilterCriteria::default();
        filters.set_levels([Level::Info, Level::Error]);
        filters.set_search_terms(["timeout".to_string(), "db".to_string()]);

        let query = build_query(&filters, &TimeAnchor::default(), None, now());
        assert_eq!(query.levels.as_deref(), Some("error,info"));
        assert_eq!(query.search_terms.as_deref(), Some("timeout,db"));
    }

    /// Absent fields must be omitted from the serialised parameter set.
    #[test]
    fn test_serialisation_skips_absent_fields() {
        let query = build_query(&FilterCriteria::default(), &TimeAnchor::default(), None, now());
        let json = serde_json::to_value(&query).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("lte_timestamp"));
        assert!(!object.contains_key("lt_id"));
        assert!(!object.contains_key("gt_id"));
        assert!(!object.contains_key("levels"));
        assert!(!object.contains_key("search_terms"));
    }
}

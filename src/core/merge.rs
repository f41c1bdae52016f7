// logwindow - core/merge.rs
//
// Window merge: folds a fetched page into the existing ordered,
// deduplicated window.
//
// The ordering rule is deliberate and must not be "simplified": after
// deduplication the sequence is stable-sorted by id, then stable-sorted by
// timestamp. Entries sharing a timestamp therefore keep the relative order
// of the id sort. Compatibility with the dashboard's historical windows
// depends on reproducing this tie-break exactly.

use std::collections::HashSet;

use crate::core::model::LogEntry;

/// Result of merging a page into a window.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// The new window. Always replaces the old one, even when `unchanged`.
    pub window: Vec<LogEntry>,

    /// True when the merge produced no new information: same length and
    /// pairwise identical (id, timestamp) as the existing window.
    pub unchanged: bool,
}

/// Merge `incoming` into `existing`.
///
/// Never fails; malformed entries (no timestamp) are dropped. On id
/// collision the existing window's entry wins over the incoming one.
pub fn merge_page(existing: &[LogEntry], incoming: Vec<LogEntry>) -> MergeOutcome {
    // Existing first, so first-occurrence dedup keeps existing entries.
    let mut combined: Vec<LogEntry> = Vec::with_capacity(existing.len() + incoming.len());
    combined.extend_from_slice(existing);
    combined.extend(incoming);

    combined.retain(|entry| entry.timestamp.is_some());

    let mut seen: HashSet<String> = HashSet::with_capacity(combined.len());
    combined.retain(|entry| seen.insert(entry.id.clone()));

    // Both sorts are stable (Vec::sort_by), which is what makes the
    // id-order tie-break for equal timestamps hold.
    combined.sort_by(|a, b| a.id.cmp(&b.id));
    combined.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    let unchanged = windows_equal(existing, &combined);

    MergeOutcome {
        window: combined,
        unchanged,
    }
}

/// Pairwise (id, timestamp) comparison; message/level differences do not
/// count as new information.
fn windows_equal(a: &[LogEntry], b: &[LogEntry]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|(x, y)| x.id == y.id && x.timestamp == y.timestamp)
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Level;
    use chrono::{DateTime, TimeZone, Utc};

    fn ts(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, secs).unwrap()
    }

    fn entry(id: &str, timestamp: Option<DateTime<Utc>>) -> LogEntry {
        LogEntry {
            id: id.to_string(),
            timestamp,
            level: Level::Info,
            message: format!("message {id}"),
        }
    }

    fn ids(window: &[LogEntry]) -> Vec<&str> {
        window.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_merge_into_empty_window_sorts_by_timestamp() {
        let outcome = merge_page(&[], vec![entry("b", Some(ts(2))), entry("a", Some(ts(1)))]);
        assert_eq!(ids(&outcome.window), vec!["a", "b"]);
        assert!(!outcome.unchanged);
    }

    #[test]
    fn test_entries_without_timestamp_are_dropped() {
        let outcome = merge_page(&[], vec![entry("a", Some(ts(1))), entry("x", None)]);
        assert_eq!(ids(&outcome.window), vec!["a"]);
    }

    /// On id collision the existing window's entry wins over the incoming
    /// one (first occurrence in concatenation order).
    #[test]
    fn test_existing_entry_wins_on_collision() {
        let mut kept = entry("a", Some(ts(1)));
        kept.message = "original".to_string();
        let existing = vec![kept];

        let mut replacement = entry("a", Some(ts(1)));
        replacement.message = "replacement".to_string();

        let outcome = merge_page(&existing, vec![replacement]);
        assert_eq!(outcome.window.len(), 1);
        assert_eq!(outcome.window[0].message, "original");
        assert!(outcome.unchanged);
    }

    /// Equal timestamps keep the relative order established by the id sort,
    /// regardless of arrival order.
    #[test]
    fn test_equal_timestamps_tie_break_by_id() {
        let outcome = merge_page(
            &[],
            vec![
                entry("c", Some(ts(5))),
                entry("a", Some(ts(5))),
                entry("b", Some(ts(5))),
            ],
        );
        assert_eq!(ids(&outcome.window), vec!["a", "b", "c"]);
    }

    /// Timestamp order dominates; id order only breaks ties. An id that
    /// sorts first lexicographically but carries a later timestamp lands
    /// later in the window.
    #[test]
    fn test_timestamp_order_dominates_id_order() {
        let outcome = merge_page(
            &[],
            vec![entry("a", Some(ts(9))), entry("z", Some(ts(1)))],
        );
        assert_eq!(ids(&outcome.window), vec!["z", "a"]);
    }

    /// Merging the same page twice yields identical contents (dedup
    /// idempotence) and flags the second merge as unchanged.
    #[test]
    fn test_merge_idempotent() {
        let page = vec![entry("a", Some(ts(1))), entry("b", Some(ts(2)))];
        let first = merge_page(&[], page.clone());
        let second = merge_page(&first.window, page);

        assert_eq!(first.window, second.window);
        assert!(!first.unchanged);
        assert!(second.unchanged);
    }

    /// A page fully contained in the window (same ids and timestamps) is
    /// unchanged even if it arrives in a different order.
    #[test]
    fn test_contained_page_detected_as_unchanged() {
        let seeded = merge_page(
            &[],
            vec![
                entry("a", Some(ts(1))),
                entry("b", Some(ts(2))),
                entry("c", Some(ts(3))),
            ],
        );
        let outcome = merge_page(
            &seeded.window,
            vec![entry("c", Some(ts(3))), entry("a", Some(ts(1)))],
        );
        assert!(outcome.unchanged);
        assert_eq!(outcome.window, seeded.window);
    }

    #[test]
    fn test_new_entries_flip_unchanged_off() {
        let seeded = merge_page(&[], vec![entry("a", Some(ts(1)))]);
        let outcome = merge_page(&seeded.window, vec![entry("b", Some(ts(2)))]);
        assert!(!outcome.unchanged);
        assert_eq!(ids(&outcome.window), vec!["a", "b"]);
    }

    /// Invariants over a mixed merge: no duplicate ids, non-decreasing
    /// timestamps, id order within equal-timestamp runs.
    #[test]
    fn test_window_invariants_hold() {
        let existing = merge_page(
            &[],
            vec![
                entry("010", Some(ts(3))),
                entry("005", Some(ts(1))),
                entry("007", Some(ts(3))),
            ],
        )
        .window;
        let outcome = merge_page(
            &existing,
            vec![
                entry("008", Some(ts(3))),
                entry("005", Some(ts(1))),
                entry("001", Some(ts(0))),
                entry("bad", None),
            ],
        );

        let window = &outcome.window;
        let mut unique: HashSet<&str> = HashSet::new();
        for e in window {
            assert!(unique.insert(&e.id), "duplicate id {}", e.id);
        }
        for pair in window.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
            if pair[0].timestamp == pair[1].timestamp {
                assert!(pair[0].id < pair[1].id);
            }
        }
        assert_eq!(ids(window), vec!["001", "005", "007", "008", "010"]);
    }
}

// logwindow - core/filter.rs
//
// Active filter criteria for the log window: selected severity levels and
// free-text search terms. Pure data; the backend applies the actual
// filtering, this type only shapes the query parameters.

use std::collections::BTreeSet;

use crate::core::model::Level;

/// The active filter set for a view session.
///
/// An empty level set means no `levels` constraint is sent, which the
/// backend treats as "all levels". Search terms keep their insertion order
/// for display; order is insignificant to the query itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Selected severity levels. BTreeSet keeps the joined list in the
    /// fixed `error,info` order regardless of selection order.
    pub levels: BTreeSet<Level>,

    /// Free-text search terms, preserved in the order the user entered them.
    pub search_terms: Vec<String>,
}

impl FilterCriteria {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty() && self.search_terms.is_empty()
    }

    /// Replace the selected level set.
    pub fn set_levels<I: IntoIterator<Item = Level>>(&mut self, levels: I) {
        self.levels = levels.into_iter().collect();
    }

    /// Remove a single level (the user closed its filter tag).
    pub fn remove_level(&mut self, level: Level) {
        self.levels.remove(&level);
    }

    /// Replace the search term list.
    pub fn set_search_terms<I: IntoIterator<Item = String>>(&mut self, terms: I) {
        self.search_terms = terms.into_iter().collect();
    }

    /// Comma-joined level list for the query, `None` when no levels are
    /// selected (absence of constraint = all levels).
    pub fn levels_param(&self) -> Option<String> {
        if self.levels.is_empty() {
            return None;
        }
        Some(
            self.levels
                .iter()
                .map(Level::as_str)
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    /// Comma-joined search term list for the query, `None` when empty.
    pub fn terms_param(&self) -> Option<String> {
        if self.search_terms.is_empty() {
            return None;
        }
        Some(self.search_terms.join(","))
    }
}

// =============================================================================
// Unit tests
// =============================================================================

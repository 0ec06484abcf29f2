//! Render-local state of the dashboard, as plain owned structs.
//!
//! [`TableState`] holds the search text, category filter and current page of
//! the project table. [`DeleteConfirmation`] is the two-step delete prompt.

use serde::Serialize;

use crate::pagination::clamp_page;
use crate::types::{DbId, ALL_CATEGORIES};

// ---------------------------------------------------------------------------
// Project table
// ---------------------------------------------------------------------------

/// Search, filter and page of the dashboard project table.
///
/// Changing the search text or the category always returns to page 1. The
/// client moves between pages by asking for `page ± 1`; [`go_to_page`]
/// keeps that inside the pages that exist.
///
/// [`go_to_page`]: TableState::go_to_page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    search: String,
    category: String,
    page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            page: 1,
        }
    }
}

impl TableState {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.page = 1;
    }

    /// Jump to `page`, clamped to the pages that exist.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.page = clamp_page(page, total_pages);
    }
}

// ---------------------------------------------------------------------------
// Delete confirmation
// ---------------------------------------------------------------------------

/// The target of a requested, not yet confirmed, delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingDelete {
    pub project_id: DbId,
    pub title: String,
}

/// Two-step delete: request, then confirm or cancel.
///
/// Holds at most one pending target. A new request replaces the old one.
#[derive(Debug, Default)]
pub struct DeleteConfirmation {
    pending: Option<PendingDelete>,
}

impl DeleteConfirmation {
    pub fn request(&mut self, project_id: DbId, title: impl Into<String>) -> PendingDelete {
        let pending = PendingDelete {
            project_id,
            title: title.into(),
        };
        self.pending = Some(pending.clone());
        pending
    }

    pub fn pending(&self) -> Option<&PendingDelete> {
        self.pending.as_ref()
    }

    /// Take the pending target for removal. `None` if nothing was requested.
    pub fn confirm(&mut self) -> Option<PendingDelete> {
        self.pending.take()
    }

    /// Discard the pending target without touching the collection.
    pub fn cancel(&mut self) -> Option<PendingDelete> {
        self.pending.take()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_state_defaults() {
        let state = TableState::default();
        assert_eq!(state.search(), "");
        assert_eq!(state.category(), "all");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn changing_search_resets_page() {
        let mut state = TableState::default();
        state.go_to_page(3, 4);
        assert_eq!(state.page(), 3);
        state.set_search("budi");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn changing_category_resets_page() {
        let mut state = TableState::default();
        state.go_to_page(2, 2);
        state.set_category("Web");
        assert_eq!(state.page(), 1);
        assert_eq!(state.category(), "Web");
    }

    #[test]
    fn go_to_page_clamps_to_existing_pages() {
        let mut state = TableState::default();
        state.go_to_page(10, 2);
        assert_eq!(state.page(), 2);
        state.go_to_page(5, 0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn confirm_takes_pending_target() {
        let mut confirmation = DeleteConfirmation::default();
        confirmation.request(4, "E-Kantin");
        assert_eq!(confirmation.pending().map(|p| p.project_id), Some(4));

        let taken = confirmation.confirm();
        assert_eq!(taken.map(|p| p.title), Some("E-Kantin".to_string()));
        assert!(confirmation.pending().is_none());
        assert!(confirmation.confirm().is_none());
    }

    #[test]
    fn cancel_discards_pending_target() {
        let mut confirmation = DeleteConfirmation::default();
        confirmation.request(2, "Absensi");
        confirmation.cancel();
        assert!(confirmation.confirm().is_none());
    }

    #[test]
    fn new_request_replaces_previous() {
        let mut confirmation = DeleteConfirmation::default();
        confirmation.request(1, "A");
        confirmation.request(2, "B");
        assert_eq!(confirmation.confirm().map(|p| p.project_id), Some(2));
    }
}

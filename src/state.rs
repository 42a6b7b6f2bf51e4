//! List State
//!
//! Owned state for the property list with explicit update functions.
//! The displayed page is always a projection of the last authoritative
//! server response; reloads are serialized by a request sequence number
//! so the last request *issued* wins, not the last to resolve.

use reactive_stores::Store;

use crate::models::{FilterCriteria, PageResponse, Property};
use crate::query::build_query;

/// Selectable page sizes
pub const PAGE_SIZES: &[u32] = &[5, 10, 20, 50];

/// Default page size (matches the backend default)
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Property list state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct ListState {
    /// Current page of records, as last returned by the backend
    pub items: Vec<Property>,
    /// Authoritative page count from the backend
    pub total_pages: u32,
    /// Zero-based page index
    pub page: u32,
    /// Records per page, one of [`PAGE_SIZES`]
    pub size: u32,
    /// Active filter criteria
    pub filter: FilterCriteria,
    /// A list request is in flight
    pub loading: bool,
    /// Top-level error banner; dismissed explicitly
    pub error: Option<String>,
    /// Success banner; dismissed explicitly
    pub message: Option<String>,
    /// Sequence number of the most recently issued list request
    pub last_issued: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 0,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            filter: FilterCriteria::default(),
            loading: false,
            error: None,
            message: None,
            last_issued: 0,
        }
    }
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical query string for the current filter/page/size tuple
    pub fn query_string(&self) -> String {
        build_query(&self.filter, self.page, self.size)
    }

    /// Replace the filter criteria. Resets the page index to 0 because the
    /// current offset may not exist under the new criteria.
    pub fn set_filter(&mut self, filter: FilterCriteria) {
        self.filter = filter;
        self.page = 0;
    }

    /// Mark a new list request as issued and return its sequence number.
    pub fn begin_load(&mut self) -> u64 {
        self.last_issued += 1;
        self.loading = true;
        self.error = None;
        self.last_issued
    }

    /// Apply a list response. A response whose sequence number is not the
    /// most recently issued one is stale and discarded. On failure the
    /// previous items are kept untouched. Returns whether it was applied.
    pub fn finish_load(&mut self, seq: u64, result: Result<PageResponse, String>) -> bool {
        if seq != self.last_issued {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.content;
                self.total_pages = page.total_pages;
            }
            Err(msg) => self.error = Some(msg),
        }
        true
    }

    pub fn next_page(&mut self) {
        if self.page + 1 < self.total_pages {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Change the page size. Resets the page index to 0 since changing
    /// granularity invalidates the current offset. Sizes outside the
    /// selectable set are ignored.
    pub fn set_page_size(&mut self, size: u32) {
        if !PAGE_SIZES.contains(&size) {
            return;
        }
        self.size = size;
        self.page = 0;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_property(id: u64) -> Property {
        Property {
            id,
            address: format!("Calle {}", id),
            price: 100.0 * id as f64,
            size: 50.0,
            description: None,
        }
    }

    fn page_of(ids: &[u64], total_pages: u32) -> PageResponse {
        PageResponse {
            content: ids.iter().copied().map(make_property).collect(),
            total_pages,
        }
    }

    #[test]
    fn empty_page_applies_cleanly() {
        let mut state = ListState::new();
        let seq = state.begin_load();
        assert!(state.loading);
        assert!(state.finish_load(seq, Ok(page_of(&[], 0))));
        assert!(state.items.is_empty());
        assert_eq!(state.total_pages, 0);
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn failed_load_keeps_previous_items() {
        let mut state = ListState::new();
        let seq = state.begin_load();
        state.finish_load(seq, Ok(page_of(&[1, 2], 1)));

        let seq = state.begin_load();
        state.finish_load(seq, Err("Error al cargar propiedades".to_string()));
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.error.as_deref(), Some("Error al cargar propiedades"));
        assert!(!state.loading);
    }

    #[test]
    fn later_issued_request_wins_over_earlier_resolver() {
        let mut state = ListState::new();
        let first = state.begin_load();
        let second = state.begin_load();

        // Second request resolves first.
        assert!(state.finish_load(second, Ok(page_of(&[2], 1))));
        // First request arrives late and must be discarded.
        assert!(!state.finish_load(first, Ok(page_of(&[1], 1))));

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, 2);
    }

    #[test]
    fn stale_failure_does_not_set_error() {
        let mut state = ListState::new();
        let first = state.begin_load();
        let second = state.begin_load();
        state.finish_load(second, Ok(page_of(&[2], 1)));
        state.finish_load(first, Err("stale".to_string()));
        assert!(state.error.is_none());
    }

    #[test]
    fn begin_load_clears_previous_error() {
        let mut state = ListState::new();
        state.set_error("Error al cargar propiedades");
        state.begin_load();
        assert!(state.error.is_none());
    }

    #[test]
    fn set_filter_resets_page() {
        let mut state = ListState::new();
        state.total_pages = 5;
        state.page = 3;
        state.set_filter(FilterCriteria {
            address: "norte".to_string(),
            ..Default::default()
        });
        assert_eq!(state.page, 0);
        assert_eq!(state.filter.address, "norte");
    }

    #[test]
    fn page_navigation_is_clamped() {
        let mut state = ListState::new();
        state.total_pages = 2;

        state.prev_page();
        assert_eq!(state.page, 0);

        state.next_page();
        assert_eq!(state.page, 1);
        state.next_page();
        assert_eq!(state.page, 1);

        state.prev_page();
        assert_eq!(state.page, 0);
    }

    #[test]
    fn next_page_is_noop_when_list_is_empty() {
        let mut state = ListState::new();
        state.next_page();
        assert_eq!(state.page, 0);
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut state = ListState::new();
        state.total_pages = 10;
        state.page = 4;
        state.set_page_size(20);
        assert_eq!(state.size, 20);
        assert_eq!(state.page, 0);
    }

    #[test]
    fn unknown_page_size_is_ignored() {
        let mut state = ListState::new();
        state.page = 2;
        state.set_page_size(7);
        assert_eq!(state.size, DEFAULT_PAGE_SIZE);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn messages_and_errors_are_independent() {
        let mut state = ListState::new();
        state.set_message("Propiedad creada correctamente");
        state.set_error("Error al crear");
        assert!(state.message.is_some());
        assert!(state.error.is_some());

        state.clear_error();
        assert!(state.message.is_some());
        assert!(state.error.is_none());

        state.clear_message();
        assert!(state.message.is_none());
    }

    #[test]
    fn query_string_agrees_with_builder() {
        let mut state = ListState::new();
        state.set_filter(FilterCriteria {
            address: "Calle 9".to_string(),
            max_size: "120".to_string(),
            ..Default::default()
        });
        state.set_page_size(50);
        assert_eq!(
            state.query_string(),
            build_query(&state.filter, state.page, state.size)
        );
    }

    #[test]
    fn query_string_follows_state() {
        let mut state = ListState::new();
        assert_eq!(state.query_string(), "page=0&size=10");
        state.set_filter(FilterCriteria {
            min_price: "100".to_string(),
            ..Default::default()
        });
        state.set_page_size(20);
        assert_eq!(state.query_string(), "minPrice=100&page=0&size=20");
    }
}

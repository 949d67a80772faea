//! Interaction state of a grid: what the user typed, picked and clicked.
//!
//! Holds the page-reset rules; `GridState::query` turns it into the pure
//! input of `engine::compute`.

use super::engine::GridPage;
use super::query::{FilterValue, GridQuery, SortDirection, SortSpec, DEFAULT_PAGE_SIZE};
use std::collections::BTreeMap;

/// Sort state of a single column.
///
/// ```text
/// Unsorted --click--> Ascending --click--> Descending --click--> Ascending
/// ```
/// `Unsorted` is only the initial state; no click leads back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortState {
    pub fn next(self) -> Self {
        match self {
            SortState::Unsorted => SortState::Ascending,
            SortState::Ascending => SortState::Descending,
            SortState::Descending => SortState::Ascending,
        }
    }

    pub fn direction(self) -> Option<SortDirection> {
        match self {
            SortState::Unsorted => None,
            SortState::Ascending => Some(SortDirection::Asc),
            SortState::Descending => Some(SortDirection::Desc),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridState<F: Ord> {
    pub search_text: String,
    pub filters: BTreeMap<F, FilterValue>,
    pub sort_field: Option<F>,
    pub sort_state: SortState,
    pub page: i64,
    pub page_size: i64,
}

impl<F: Copy + Ord> Default for GridState<F> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<F: Copy + Ord> GridState<F> {
    pub fn new(page_size: i64) -> Self {
        Self {
            search_text: String::new(),
            filters: BTreeMap::new(),
            sort_field: None,
            sort_state: SortState::Unsorted,
            page: 1,
            page_size,
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = 1;
    }

    pub fn set_filter(&mut self, field: F, value: FilterValue) {
        self.filters.insert(field, value);
        self.page = 1;
    }

    pub fn filter(&self, field: F) -> &FilterValue {
        static ALL: FilterValue = FilterValue::All;
        self.filters.get(&field).unwrap_or(&ALL)
    }

    /// Header click. A new column starts ascending and goes back to page 1;
    /// the same column flips direction and keeps the page.
    pub fn toggle_sort(&mut self, field: F) {
        if self.sort_field == Some(field) {
            self.sort_state = self.sort_state.next();
        } else {
            self.sort_field = Some(field);
            self.sort_state = SortState::Unsorted.next();
            self.page = 1;
        }
    }

    pub fn sort_state_of(&self, field: F) -> SortState {
        if self.sort_field == Some(field) {
            self.sort_state
        } else {
            SortState::Unsorted
        }
    }

    pub fn set_page(&mut self, page: i64) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: i64) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// Keep the stored page equal to the one the engine actually showed.
    pub fn sync_page<T>(&mut self, shown: &GridPage<T>) {
        self.page = shown.current_page as i64;
    }

    pub fn query(&self) -> GridQuery<F> {
        let sort = match (self.sort_field, self.sort_state.direction()) {
            (Some(field), Some(direction)) => Some(SortSpec { field, direction }),
            _ => None,
        };
        GridQuery {
            search_text: self.search_text.clone(),
            filters: self.filters.clone(),
            sort,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Col {
        Id,
        Total,
        Status,
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(SortState::Unsorted.next(), SortState::Ascending);
        assert_eq!(SortState::Ascending.next(), SortState::Descending);
        assert_eq!(SortState::Descending.next(), SortState::Ascending);
    }

    #[test]
    fn test_unsorted_never_returns() {
        let mut state = SortState::Unsorted;
        for _ in 0..10 {
            state = state.next();
            assert_ne!(state, SortState::Unsorted);
        }
    }

    #[test]
    fn test_search_and_filter_reset_page() {
        let mut state: GridState<Col> = GridState::new(15);
        state.set_page(4);
        state.set_search("abc");
        assert_eq!(state.page, 1);

        state.set_page(3);
        state.set_filter(Col::Status, FilterValue::Equals("Pending".into()));
        assert_eq!(state.page, 1);
        assert_eq!(state.filter(Col::Status).as_select(), "Pending");
        assert_eq!(state.filter(Col::Id), &FilterValue::All);
    }

    #[test]
    fn test_page_change_keeps_filters() {
        let mut state: GridState<Col> = GridState::new(15);
        state.set_search("abc");
        state.set_filter(Col::Status, FilterValue::Equals("Pending".into()));
        state.set_page(2);
        assert_eq!(state.search_text, "abc");
        assert!(state.filter(Col::Status).is_active());
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_sort_clicks() {
        let mut state: GridState<Col> = GridState::new(15);
        assert_eq!(state.query().sort, None);

        state.set_page(3);
        state.toggle_sort(Col::Total);
        assert_eq!(state.page, 1);
        assert_eq!(state.sort_state_of(Col::Total), SortState::Ascending);
        assert_eq!(
            state.query().sort,
            Some(SortSpec { field: Col::Total, direction: SortDirection::Asc })
        );

        state.set_page(2);
        state.toggle_sort(Col::Total);
        assert_eq!(state.page, 2);
        assert_eq!(state.sort_state_of(Col::Total), SortState::Descending);

        state.toggle_sort(Col::Total);
        assert_eq!(state.sort_state_of(Col::Total), SortState::Ascending);
        assert_eq!(state.page, 2);

        state.toggle_sort(Col::Id);
        assert_eq!(state.page, 1);
        assert_eq!(state.sort_state_of(Col::Id), SortState::Ascending);
        assert_eq!(state.sort_state_of(Col::Total), SortState::Unsorted);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state: GridState<Col> = GridState::default();
        assert_eq!(state.page_size, 15);
        state.set_page(5);
        state.set_page_size(50);
        assert_eq!(state.page, 1);
        assert_eq!(state.query().page_size, 50);
    }
}

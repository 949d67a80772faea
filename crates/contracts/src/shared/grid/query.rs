use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Selector value meaning "no filter"
pub const FILTER_ALL: &str = "All";

pub const DEFAULT_PAGE_SIZE: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

/// Accepted value of a single column filter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterValue {
    #[default]
    All,
    Equals(String),
}

impl FilterValue {
    /// Build from a `<select>` value where `"All"` is the no-filter sentinel.
    pub fn from_select(value: &str) -> Self {
        if value == FILTER_ALL || value.is_empty() {
            FilterValue::All
        } else {
            FilterValue::Equals(value.to_string())
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, FilterValue::Equals(_))
    }

    /// Value to put back into a `<select>`
    pub fn as_select(&self) -> &str {
        match self {
            FilterValue::All => FILTER_ALL,
            FilterValue::Equals(value) => value,
        }
    }
}

/// Everything the grid engine needs to produce one page.
///
/// `page` and `page_size` are accepted as signed numbers and clamped by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct GridQuery<F: Ord> {
    pub search_text: String,
    pub filters: BTreeMap<F, FilterValue>,
    pub sort: Option<SortSpec<F>>,
    pub page: i64,
    pub page_size: i64,
}

impl<F: Ord> Default for GridQuery<F> {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl<F: Ord> GridQuery<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_filter(mut self, field: F, value: FilterValue) -> Self {
        self.filters.insert(field, value);
        self
    }

    pub fn with_sort(mut self, field: F, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec { field, direction });
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Page size with non-positive values treated as 1
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1) as usize
    }
}

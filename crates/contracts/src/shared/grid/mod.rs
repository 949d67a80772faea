//! Client-side data grid: records in, one page out.

pub mod engine;
pub mod query;
pub mod state;
pub mod value;

pub use engine::{clamp_page, compute, total_pages, GridPage, GridRecord};
pub use query::{FilterValue, GridQuery, SortDirection, SortSpec, DEFAULT_PAGE_SIZE, FILTER_ALL};
pub use state::{GridState, SortState};
pub use value::FieldValue;

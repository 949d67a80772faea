//! Client-side grid engine: search, filter, sort and paginate in that order.
//!
//! Search and filters narrow the set conjunctively; sorting and pagination
//! always apply to the narrowed set. The whole page is recomputed from
//! `(records, query)` on every call, nothing is cached between calls.

use super::query::{FilterValue, GridQuery, SortDirection};
use super::value::FieldValue;
use std::fmt::Debug;

/// A row the grid can display.
pub trait GridRecord {
    type Field: Copy + Ord + Debug + 'static;

    /// Fields consulted by the free-text search.
    fn searchable_fields() -> &'static [Self::Field];

    fn field_value(&self, field: Self::Field) -> FieldValue<'_>;
}

/// One page of results plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPage<T> {
    pub rows: Vec<T>,
    pub total_matched: usize,
    /// `ceil(total_matched / page_size)`, zero when nothing matched
    pub total_pages: usize,
    /// 1-based, always within `[1, max(total_pages, 1)]`
    pub current_page: usize,
    pub page_size: usize,
}

impl<T> GridPage<T> {
    /// Page count for "Page X of Y" labels
    pub fn display_total_pages(&self) -> usize {
        self.total_pages.max(1)
    }

    /// 1-based bounds for "Showing X to Y of Z"; `(0, 0)` when nothing matched.
    pub fn showing_range(&self) -> (usize, usize) {
        if self.total_matched == 0 {
            return (0, 0);
        }
        let from = (self.current_page - 1) * self.page_size + 1;
        let to = (self.current_page * self.page_size).min(self.total_matched);
        (from, to)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a, R: Clone> GridPage<&'a R> {
    pub fn cloned(self) -> GridPage<R> {
        GridPage {
            rows: self.rows.into_iter().cloned().collect(),
            total_matched: self.total_matched,
            total_pages: self.total_pages,
            current_page: self.current_page,
            page_size: self.page_size,
        }
    }
}

pub fn total_pages(total_matched: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    (total_matched + page_size - 1) / page_size
}

/// Clamp a requested page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    if requested < 1 {
        1
    } else {
        (requested as u64).min(last as u64) as usize
    }
}

fn matches_search<R: GridRecord>(record: &R, needle: &str) -> bool {
    R::searchable_fields().iter().any(|field| {
        record
            .field_value(*field)
            .as_text()
            .to_lowercase()
            .contains(needle)
    })
}

fn matches_filters<R: GridRecord>(record: &R, filters: &[(R::Field, &str)]) -> bool {
    filters
        .iter()
        .all(|(field, expected)| record.field_value(*field).matches_exact(expected))
}

/// Produce the visible page for `query`.
pub fn compute<'a, R: GridRecord>(records: &'a [R], query: &GridQuery<R::Field>) -> GridPage<&'a R> {
    let needle = query.search_text.to_lowercase();
    let active_filters: Vec<(R::Field, &str)> = query
        .filters
        .iter()
        .filter_map(|(field, value)| match value {
            FilterValue::All => None,
            FilterValue::Equals(expected) => Some((*field, expected.as_str())),
        })
        .collect();

    let mut matched: Vec<&'a R> = records
        .iter()
        .filter(|record| needle.is_empty() || matches_search(*record, &needle))
        .filter(|record| matches_filters(*record, &active_filters))
        .collect();

    if let Some(sort) = &query.sort {
        // sort_by is stable: ties keep their relative input order in both directions
        matched.sort_by(|a, b| {
            let ord = a.field_value(sort.field).compare(&b.field_value(sort.field));
            match sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }

    let page_size = query.effective_page_size();
    let total_matched = matched.len();
    let total_pages = total_pages(total_matched, page_size);
    let current_page = clamp_page(query.page, total_pages);

    let start = ((current_page - 1) * page_size).min(total_matched);
    let end = (start + page_size).min(total_matched);
    let rows = matched.drain(start..end).collect();

    GridPage {
        rows,
        total_matched,
        total_pages,
        current_page,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        email: &'static str,
        team: &'static str,
        score: f64,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Col {
        Name,
        Email,
        Team,
        Score,
    }

    impl GridRecord for Row {
        type Field = Col;

        fn searchable_fields() -> &'static [Col] {
            &[Col::Name, Col::Email]
        }

        fn field_value(&self, field: Col) -> FieldValue<'_> {
            match field {
                Col::Name => FieldValue::Text(self.name),
                Col::Email => FieldValue::Text(self.email),
                Col::Team => FieldValue::Text(self.team),
                Col::Score => FieldValue::Number(self.score),
            }
        }
    }

    fn row(name: &'static str, email: &'static str, team: &'static str, score: f64) -> Row {
        Row { name, email, team, score }
    }

    fn sample() -> Vec<Row> {
        vec![
            row("Alice", "alice@north.io", "Red", 30.0),
            row("Bob", "bob@south.io", "Blue", 10.0),
            row("Carol", "carol@north.io", "Red", 20.0),
            row("Dave", "dave@east.io", "Blue", 20.0),
            row("Erin", "erin@west.io", "Green", 50.0),
        ]
    }

    fn names(page: &GridPage<&Row>) -> Vec<&'static str> {
        page.rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_no_search_no_filters_counts_everything() {
        let rows = sample();
        let page = compute(&rows, &GridQuery::new());
        assert_eq!(page.total_matched, rows.len());
        assert_eq!(names(&page), vec!["Alice", "Bob", "Carol", "Dave", "Erin"]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_searchable_fields() {
        let rows = sample();
        let page = compute(&rows, &GridQuery::new().with_search("NORTH"));
        assert_eq!(names(&page), vec!["Alice", "Carol"]);

        // team is not searchable
        let page = compute(&rows, &GridQuery::new().with_search("red"));
        assert_eq!(page.total_matched, 0);
    }

    #[test]
    fn test_search_partitions_records() {
        let rows = sample();
        let needle = "a";
        let page = compute(&rows, &GridQuery::new().with_search(needle).with_page_size(100));
        for r in &rows {
            let hit = r.name.to_lowercase().contains(needle) || r.email.to_lowercase().contains(needle);
            assert_eq!(page.rows.contains(&r), hit, "{}", r.name);
        }
    }

    #[test]
    fn test_filters_are_exact_and_anded() {
        let rows = sample();
        let query = GridQuery::new()
            .with_filter(Col::Team, FilterValue::Equals("Blue".into()))
            .with_filter(Col::Score, FilterValue::Equals("20".into()));
        assert_eq!(names(&compute(&rows, &query)), vec!["Dave"]);

        let query = GridQuery::new().with_filter(Col::Team, FilterValue::Equals("Blu".into()));
        assert_eq!(compute(&rows, &query).total_matched, 0);

        let query = GridQuery::new().with_filter(Col::Team, FilterValue::All);
        assert_eq!(compute(&rows, &query).total_matched, 5);
    }

    #[test]
    fn test_search_and_filter_combine() {
        let rows = sample();
        let query = GridQuery::new()
            .with_search("north")
            .with_filter(Col::Team, FilterValue::Equals("Red".into()))
            .with_sort(Col::Score, SortDirection::Asc);
        assert_eq!(names(&compute(&rows, &query)), vec!["Carol", "Alice"]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let rows = sample();
        let asc = compute(&rows, &GridQuery::new().with_sort(Col::Score, SortDirection::Asc));
        assert_eq!(names(&asc), vec!["Bob", "Carol", "Dave", "Alice", "Erin"]);

        let desc = compute(&rows, &GridQuery::new().with_sort(Col::Score, SortDirection::Desc));
        // Carol stays before Dave in both directions
        assert_eq!(names(&desc), vec!["Erin", "Alice", "Carol", "Dave", "Bob"]);
    }

    #[test]
    fn test_nan_scores_do_not_break_ascending_order() {
        let rows: Vec<Row> = (0..200)
            .map(|i| {
                let score = if i % 3 == 0 { f64::NAN } else { ((i * 37) % 101) as f64 };
                row("Row", "row@grid.io", "Red", score)
            })
            .collect();
        let query = GridQuery::new()
            .with_sort(Col::Score, SortDirection::Asc)
            .with_page_size(200);
        let page = compute(&rows, &query);
        let scores: Vec<f64> = page.rows.iter().map(|r| r.score).collect();
        let finite: Vec<f64> = scores.iter().copied().filter(|s| !s.is_nan()).collect();
        assert!(finite.windows(2).all(|w| w[0] <= w[1]));
        // NaN goes last
        let first_nan = scores.iter().position(|s| s.is_nan()).unwrap();
        assert!(scores[first_nan..].iter().all(|s| s.is_nan()));
    }

    #[test]
    fn test_descending_reverses_untied_order() {
        let rows = sample();
        let asc = compute(&rows, &GridQuery::new().with_sort(Col::Name, SortDirection::Asc));
        let desc = compute(&rows, &GridQuery::new().with_sort(Col::Name, SortDirection::Desc));
        let mut reversed = names(&asc);
        reversed.reverse();
        assert_eq!(names(&desc), reversed);
    }

    #[test]
    fn test_pagination_slices_and_short_tail() {
        let rows = sample();
        let query = GridQuery::new().with_page_size(2).with_page(3);
        let page = compute(&rows, &query);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 3);
        assert_eq!(names(&page), vec!["Erin"]);
        assert_eq!(page.showing_range(), (5, 5));
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_is_clamped() {
        let rows = sample();
        for requested in [-5, 0, 1, 2, 3, 4, 99] {
            let page = compute(&rows, &GridQuery::new().with_page_size(2).with_page(requested));
            assert!(page.current_page >= 1);
            assert!(page.current_page <= page.total_pages.max(1));
        }
        let page = compute(&rows, &GridQuery::new().with_page_size(2).with_page(99));
        assert_eq!(page.current_page, 3);
        let page = compute(&rows, &GridQuery::new().with_page_size(2).with_page(-1));
        assert_eq!(page.current_page, 1);
        assert_eq!(names(&page), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_empty_result() {
        let rows = sample();
        let page = compute(&rows, &GridQuery::new().with_search("zzz").with_page(4));
        assert!(page.is_empty());
        assert_eq!(page.total_matched, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.display_total_pages(), 1);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.showing_range(), (0, 0));
        assert!(!page.has_next());
    }

    #[test]
    fn test_non_positive_page_size_is_one() {
        let rows = sample();
        let page = compute(&rows, &GridQuery::new().with_page_size(0).with_page(2));
        assert_eq!(page.page_size, 1);
        assert_eq!(page.total_pages, 5);
        assert_eq!(names(&page), vec!["Bob"]);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let rows = sample();
        let query = GridQuery::new()
            .with_search("o")
            .with_sort(Col::Score, SortDirection::Desc)
            .with_page_size(2);
        assert_eq!(compute(&rows, &query), compute(&rows, &query));
    }

    #[test]
    fn test_cloned_page_owns_rows() {
        let rows = sample();
        let owned: GridPage<Row> = compute(&rows, &GridQuery::new().with_page_size(1)).cloned();
        assert_eq!(owned.rows, vec![rows[0].clone()]);
        assert_eq!(owned.total_matched, 5);
    }

    #[test]
    fn test_helpers() {
        assert_eq!(total_pages(0, 15), 0);
        assert_eq!(total_pages(15, 15), 1);
        assert_eq!(total_pages(16, 15), 2);
        assert_eq!(clamp_page(0, 0), 1);
        assert_eq!(clamp_page(7, 3), 3);
    }
}

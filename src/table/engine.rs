use std::cmp::Ordering;

use crate::query::location::Location;
use crate::query::store::{FilterStore, DIR_KEY, PAGE_KEY, SEARCH_KEY, SORT_KEY};
use crate::table::column::{ColumnFilter, ColumnSpec, FilterValue, SortDirection, SortKey};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Everything needed to compute one visible page: global search term,
/// active column filters, sort order, and pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub search: String,
    pub filters: Vec<ColumnFilter>,
    pub sort: Vec<SortKey>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: Vec::new(),
            sort: Vec::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableQuery {
    /// Builds the query from the canonical state: `q`, `sort`, `dir`, and
    /// `page` keys. Malformed values degrade to defaults — a non-numeric
    /// page index means page 0, an unrecognized direction means ascending.
    pub fn from_store<L: Location>(store: &FilterStore<L>, page_size: usize) -> Self {
        let sort = match store.value(SORT_KEY) {
            Some(column_id) => {
                let direction = match store.value(DIR_KEY).as_deref() {
                    Some("desc") => SortDirection::Desc,
                    _ => SortDirection::Asc,
                };
                vec![SortKey {
                    column_id,
                    direction,
                }]
            }
            None => Vec::new(),
        };
        Self {
            search: store.value(SEARCH_KEY).unwrap_or_default(),
            filters: Vec::new(),
            sort,
            page: store
                .value(PAGE_KEY)
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(0),
            page_size,
        }
    }

    /// Adds a scalar column filter when the value is present.
    pub fn scalar_filter(mut self, column_id: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.filters.push(ColumnFilter {
                column_id: column_id.to_string(),
                value: FilterValue::One(value),
            });
        }
        self
    }

    /// Adds a membership filter when the value set is non-empty.
    pub fn multi_filter(mut self, column_id: &str, values: Vec<String>) -> Self {
        if !values.is_empty() {
            self.filters.push(ColumnFilter {
                column_id: column_id.to_string(),
                value: FilterValue::AnyOf(values),
            });
        }
        self
    }
}

/// Output of one pipeline run: the visible page plus the metadata pager and
/// header widgets render from.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<R> {
    pub rows: Vec<R>,
    pub filtered_rows: usize,
    pub page_count: usize,
    /// Clamped page index actually shown; may be lower than requested.
    pub page: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Runs the fixed pipeline: global filter, column filters, stable sort,
/// then pagination with clamping. Unknown column ids are ignored; nothing
/// in here can fail.
pub fn run_query<R: Clone>(
    rows: &[R],
    columns: &[ColumnSpec<R>],
    query: &TableQuery,
) -> TableView<R> {
    let mut survivors: Vec<&R> = rows.iter().collect();

    let term = query.search.trim().to_lowercase();
    if !term.is_empty() {
        survivors.retain(|row| {
            columns
                .iter()
                .filter(|column| column.searchable)
                .any(|column| (column.extract)(row).to_lowercase().contains(&term))
        });
    }

    for filter in &query.filters {
        let Some(column) = columns.iter().find(|column| column.id == filter.column_id) else {
            continue;
        };
        survivors.retain(|row| row_matches(column, row, &filter.value));
    }

    let sort_keys: Vec<(&ColumnSpec<R>, SortDirection)> = query
        .sort
        .iter()
        .filter_map(|key| {
            columns
                .iter()
                .find(|column| column.id == key.column_id)
                .map(|column| (column, key.direction))
        })
        .collect();
    if !sort_keys.is_empty() {
        // Vec::sort_by is stable, which keeps ties in original row order.
        survivors.sort_by(|a, b| {
            for (column, direction) in &sort_keys {
                let ordering = match column.compare {
                    Some(compare) => compare(a, b),
                    None => default_compare(&(column.extract)(a), &(column.extract)(b)),
                };
                let ordering = match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            Ordering::Equal
        });
    }

    let filtered_rows = survivors.len();
    let page_count = filtered_rows.div_ceil(query.page_size.max(1));
    let page = query.page.min(page_count.saturating_sub(1));
    let start = page * query.page_size.max(1);
    let end = (start + query.page_size.max(1)).min(filtered_rows);
    let page_rows = survivors
        .get(start..end)
        .unwrap_or_default()
        .iter()
        .map(|row| (*row).clone())
        .collect();

    TableView {
        rows: page_rows,
        filtered_rows,
        page_count,
        page,
        has_prev: page > 0,
        has_next: page + 1 < page_count,
    }
}

fn row_matches<R>(column: &ColumnSpec<R>, row: &R, value: &FilterValue) -> bool {
    match value {
        FilterValue::One(wanted) => match column.matches {
            Some(matches) => matches(row, wanted),
            None => (column.extract)(row).eq_ignore_ascii_case(wanted),
        },
        FilterValue::AnyOf(wanted) => {
            let cell = (column.extract)(row);
            wanted.iter().any(|value| cell.eq_ignore_ascii_case(value))
        }
    }
}

// Numeric-aware ordering with a case-insensitive textual fallback. Ties
// report Equal so the stable sort preserves original order.
fn default_compare(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(left), Ok(right)) => left.partial_cmp(&right).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: usize,
        name: String,
        status: String,
        amount: f64,
    }

    fn row(id: usize, name: &str, status: &str, amount: f64) -> Row {
        Row {
            id,
            name: name.to_string(),
            status: status.to_string(),
            amount,
        }
    }

    fn columns() -> Vec<ColumnSpec<Row>> {
        vec![
            ColumnSpec::new("name", "column.name", |row: &Row| row.name.clone()),
            ColumnSpec::new("status", "column.status", |row: &Row| row.status.clone()),
            ColumnSpec::new("amount", "column.amount", |row: &Row| row.amount.to_string())
                .numeric()
                .unsearchable(),
        ]
    }

    fn sample() -> Vec<Row> {
        vec![
            row(1, "Acme", "active", 120.0),
            row(2, "Borealis", "inactive", 40.0),
            row(3, "Cascade", "active", 700.0),
            row(4, "Dynamo", "pending", 40.0),
            row(5, "Everest", "active", 15.0),
        ]
    }

    fn asc(column_id: &str) -> SortKey {
        SortKey {
            column_id: column_id.to_string(),
            direction: SortDirection::Asc,
        }
    }

    #[test]
    fn global_search_is_case_insensitive_substring() {
        let query = TableQuery {
            search: "cAd".to_string(),
            ..TableQuery::default()
        };

        let view = run_query(&sample(), &columns(), &query);

        assert_eq!(view.filtered_rows, 1);
        assert_eq!(view.rows[0].name, "Cascade");
    }

    #[test]
    fn global_search_skips_unsearchable_columns() {
        let query = TableQuery {
            search: "700".to_string(),
            ..TableQuery::default()
        };

        let view = run_query(&sample(), &columns(), &query);

        assert_eq!(view.filtered_rows, 0, "amount column should not be searched");
    }

    #[test]
    fn column_filters_combine_with_and() {
        let query = TableQuery::default()
            .scalar_filter("status", Some("active".to_string()))
            .multi_filter("amount", vec!["120".to_string(), "15".to_string()]);

        let view = run_query(&sample(), &columns(), &query);

        let names: Vec<&str> = view.rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Everest"]);
    }

    #[test]
    fn adding_filters_never_increases_matches() {
        let unfiltered = run_query(&sample(), &columns(), &TableQuery::default());
        let one = run_query(
            &sample(),
            &columns(),
            &TableQuery::default().scalar_filter("status", Some("active".to_string())),
        );
        let two = run_query(
            &sample(),
            &columns(),
            &TableQuery::default()
                .scalar_filter("status", Some("active".to_string()))
                .multi_filter("amount", vec!["15".to_string()]),
        );

        assert!(one.filtered_rows <= unfiltered.filtered_rows);
        assert!(two.filtered_rows <= one.filtered_rows);
    }

    #[test]
    fn unknown_filter_column_is_ignored() {
        let query = TableQuery::default().scalar_filter("nonexistent", Some("x".to_string()));

        let view = run_query(&sample(), &columns(), &query);

        assert_eq!(view.filtered_rows, sample().len());
    }

    #[test]
    fn unknown_sort_column_means_original_order() {
        let query = TableQuery {
            sort: vec![asc("nonexistent")],
            ..TableQuery::default()
        };

        let view = run_query(&sample(), &columns(), &query);

        let ids: Vec<usize> = view.rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let rows = vec![row(1, "x", "a", 0.0), row(2, "y", "a", 0.0), row(3, "z", "b", 0.0)];
        let ascending = TableQuery {
            sort: vec![asc("status")],
            ..TableQuery::default()
        };
        let descending = TableQuery {
            sort: vec![SortKey {
                column_id: "status".to_string(),
                direction: SortDirection::Desc,
            }],
            ..TableQuery::default()
        };

        let up = run_query(&rows, &columns(), &ascending);
        let down = run_query(&rows, &columns(), &descending);

        let up_ids: Vec<usize> = up.rows.iter().map(|row| row.id).collect();
        let down_ids: Vec<usize> = down.rows.iter().map(|row| row.id).collect();
        assert_eq!(up_ids, vec![1, 2, 3]);
        assert_eq!(down_ids, vec![3, 1, 2], "ties should keep original order");
    }

    #[test]
    fn numeric_columns_sort_numerically() {
        let query = TableQuery {
            sort: vec![asc("amount")],
            ..TableQuery::default()
        };

        let view = run_query(&sample(), &columns(), &query);

        let amounts: Vec<f64> = view.rows.iter().map(|row| row.amount).collect();
        assert_eq!(amounts, vec![15.0, 40.0, 40.0, 120.0, 700.0]);
    }

    #[test]
    fn page_count_matches_ceiling_division() {
        let rows: Vec<Row> = (0..25).map(|i| row(i, "n", "active", 0.0)).collect();
        let query = TableQuery {
            page_size: 10,
            page: 2,
            ..TableQuery::default()
        };

        let view = run_query(&rows, &columns(), &query);

        assert_eq!(view.page_count, 3);
        assert_eq!(view.rows.len(), 5, "last page should hold the remainder");
        assert!(view.has_prev);
        assert!(!view.has_next);
    }

    #[test]
    fn out_of_range_page_clamps_to_last_valid_page() {
        let rows: Vec<Row> = (0..25).map(|i| row(i, "n", "active", 0.0)).collect();
        let query = TableQuery {
            page_size: 10,
            page: 9,
            ..TableQuery::default()
        };

        let view = run_query(&rows, &columns(), &query);

        assert_eq!(view.page, 2);
        assert_eq!(view.rows.len(), 5);
    }

    #[test]
    fn shrinking_filter_clamps_page_instead_of_showing_empty_slice() {
        let mut rows: Vec<Row> = (0..25).map(|i| row(i, "n", "active", 0.0)).collect();
        rows.iter_mut().take(5).for_each(|row| row.status = "pending".to_string());
        let query = TableQuery {
            page_size: 10,
            page: 2,
            ..TableQuery::default()
        }
        .scalar_filter("status", Some("pending".to_string()));

        let view = run_query(&rows, &columns(), &query);

        assert_eq!(view.filtered_rows, 5);
        assert_eq!(view.page, 0, "page should clamp back into range");
        assert_eq!(view.rows.len(), 5);
        assert!(!view.has_prev);
        assert!(!view.has_next);
    }

    #[test]
    fn zero_matches_is_a_valid_empty_first_page() {
        let query = TableQuery::default().scalar_filter("status", Some("archived".to_string()));

        let view = run_query(&sample(), &columns(), &query);

        assert_eq!(view.filtered_rows, 0);
        assert_eq!(view.page_count, 0);
        assert_eq!(view.page, 0);
        assert!(view.rows.is_empty());
        assert!(!view.has_prev);
        assert!(!view.has_next);
    }

    #[test]
    fn empty_projection_never_matches_a_filter() {
        let columns = vec![ColumnSpec::new("maybe", "column.maybe", |_row: &Row| String::new())];
        let query = TableQuery::default().scalar_filter("maybe", Some("x".to_string()));

        let view = run_query(&sample(), &columns, &query);

        assert_eq!(view.filtered_rows, 0);
    }
}

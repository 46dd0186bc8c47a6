use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub column_id: String,
    pub direction: SortDirection,
}

/// Predicate value of an active column filter: a scalar (exact match unless
/// the column defines its own predicate) or a membership set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    One(String),
    AnyOf(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    pub column_id: String,
    pub value: FilterValue,
}

/// Per-column capabilities. The engine never looks inside a row itself:
/// everything it needs — projection, display, ordering, matching — comes
/// from the column schema, so the row shape stays arbitrary.
pub struct ColumnSpec<R> {
    pub id: &'static str,
    pub label_key: &'static str,
    /// String projection used for searching, filtering, and default sorting.
    /// An empty projection never matches a non-empty filter.
    pub extract: fn(&R) -> String,
    /// Display override; falls back to `extract`.
    pub render: Option<fn(&R) -> String>,
    pub compare: Option<fn(&R, &R) -> Ordering>,
    pub matches: Option<fn(&R, &str) -> bool>,
    /// Whether the global text filter tests this column.
    pub searchable: bool,
    /// Right-aligned, numeric-aware default ordering.
    pub numeric: bool,
}

impl<R> ColumnSpec<R> {
    pub fn new(id: &'static str, label_key: &'static str, extract: fn(&R) -> String) -> Self {
        Self {
            id,
            label_key,
            extract,
            render: None,
            compare: None,
            matches: None,
            searchable: true,
            numeric: false,
        }
    }

    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    pub fn unsearchable(mut self) -> Self {
        self.searchable = false;
        self
    }

    pub fn with_render(mut self, render: fn(&R) -> String) -> Self {
        self.render = Some(render);
        self
    }

    pub fn with_compare(mut self, compare: fn(&R, &R) -> Ordering) -> Self {
        self.compare = Some(compare);
        self
    }

    pub fn with_matches(mut self, matches: fn(&R, &str) -> bool) -> Self {
        self.matches = Some(matches);
        self
    }

    pub fn display(&self, row: &R) -> String {
        match self.render {
            Some(render) => render(row),
            None => (self.extract)(row),
        }
    }

    pub fn alignment(&self) -> &'static str {
        if self.numeric {
            "right"
        } else {
            "left"
        }
    }
}

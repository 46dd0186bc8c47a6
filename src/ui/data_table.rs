use dioxus::prelude::*;

use crate::i18n::{t, Locale};
use crate::query::location::Location;
use crate::query::store::{FilterStore, DIR_KEY, SORT_KEY};
use crate::table::column::ColumnSpec;
use crate::ui::AppStore;

#[derive(Debug, Clone, PartialEq)]
pub struct TableHeader {
    pub id: String,
    pub label: String,
    pub align: &'static str,
}

/// Header click cycle: unsorted → ascending → descending → unsorted.
/// Each step lands as one navigation.
pub fn toggle_sort<L: Location>(store: &mut FilterStore<L>, column_id: &str) {
    let current = store.value(SORT_KEY);
    if current.as_deref() == Some(column_id) {
        if store.value(DIR_KEY).as_deref() == Some("desc") {
            store.batch().remove(SORT_KEY).remove(DIR_KEY).commit();
        } else {
            store.set_value(DIR_KEY, Some("desc"));
        }
    } else {
        store.batch().set(SORT_KEY, Some(column_id)).remove(DIR_KEY).commit();
    }
}

pub fn header_row<R>(columns: &[ColumnSpec<R>], locale: Locale) -> Vec<TableHeader> {
    columns
        .iter()
        .map(|column| TableHeader {
            id: column.id.to_string(),
            label: t(locale, column.label_key).to_string(),
            align: column.alignment(),
        })
        .collect()
}

/// Cell text runs through the label lookup so enum columns can render a
/// label key; free text falls back to itself unchanged.
pub fn body_rows<R>(columns: &[ColumnSpec<R>], rows: &[R], locale: Locale) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| t(locale, &column.display(row)).to_string())
                .collect()
        })
        .collect()
}

fn header_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 6px 8px; background: #f5f6f8; text-align: left; cursor: pointer; white-space: nowrap;"
}

#[component]
pub fn DataTable(headers: Vec<TableHeader>, rows: Vec<Vec<String>>) -> Element {
    let mut store = use_context::<AppStore>();
    let sort_col = store.value(SORT_KEY);
    let sort_desc = store.value(DIR_KEY).as_deref() == Some("desc");
    let alignments: Vec<&'static str> = headers.iter().map(|header| header.align).collect();

    rsx! {
        table {
            style: "border-collapse: collapse; width: 100%; background: #fff;",
            thead {
                tr {
                    {headers.iter().map(|header| {
                        let id = header.id.clone();
                        let indicator = if sort_col.as_deref() == Some(header.id.as_str()) {
                            if sort_desc { " ▼" } else { " ▲" }
                        } else {
                            ""
                        };
                        let label = header.label.clone();
                        rsx!(
                            th {
                                style: "{header_cell_style()}",
                                onclick: move |_| {
                                    toggle_sort(&mut store, &id);
                                },
                                "{label}{indicator}"
                            }
                        )
                    })}
                }
            }
            tbody {
                {rows.iter().map(|row| {
                    let alignments = alignments.clone();
                    let row = row.clone();
                    rsx!(
                        tr {
                            {row.iter().enumerate().map(|(idx, value)| {
                                let alignment = alignments.get(idx).copied().unwrap_or("left");
                                rsx!(
                                    td {
                                        style: "border: 1px solid #ddd; padding: 5px 8px; text-align: {alignment};",
                                        "{value}"
                                    }
                                )
                            })}
                        }
                    )
                })}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::location::MemoryLocation;

    #[test]
    fn header_click_cycles_through_directions() {
        let mut store = FilterStore::new(MemoryLocation::new());

        toggle_sort(&mut store, "name");
        assert_eq!(store.value(SORT_KEY), Some("name".to_string()));
        assert_eq!(store.value(DIR_KEY), None);

        toggle_sort(&mut store, "name");
        assert_eq!(store.value(DIR_KEY), Some("desc".to_string()));

        toggle_sort(&mut store, "name");
        assert_eq!(store.value(SORT_KEY), None);
        assert_eq!(store.value(DIR_KEY), None);
    }

    #[test]
    fn switching_column_restarts_ascending() {
        let mut store = FilterStore::new(MemoryLocation::new());
        toggle_sort(&mut store, "name");
        toggle_sort(&mut store, "name");

        toggle_sort(&mut store, "joined");

        assert_eq!(store.value(SORT_KEY), Some("joined".to_string()));
        assert_eq!(store.value(DIR_KEY), None, "direction should reset to ascending");
    }
}

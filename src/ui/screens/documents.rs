use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::entities::document::{Document, DocumentKind};
use crate::i18n::{t, Locale};
use crate::infra::fixtures::Workspace;
use crate::query::location::Location;
use crate::query::store::{PAGE_KEY, SEARCH_KEY};
use crate::table::column::ColumnSpec;
use crate::table::engine::{run_query, TableQuery, DEFAULT_PAGE_SIZE};
use crate::ui::data_table::{body_rows, header_row, DataTable};
use crate::ui::facet_card::FacetCard;
use crate::ui::pager::Pager;
use crate::ui::search_box::SearchBox;
use crate::ui::AppStore;

const KIND_KEY: &str = "kind";

fn document_columns() -> Vec<ColumnSpec<Document>> {
    vec![
        ColumnSpec::new("title", "column.title", |d: &Document| d.title.clone()),
        ColumnSpec::new("kind", "column.kind", |d: &Document| d.kind.code().to_string())
            .with_render(|d: &Document| d.kind.label_key().to_string())
            .unsearchable(),
        ColumnSpec::new("owner", "column.owner", |d: &Document| d.owner.clone()),
        ColumnSpec::new("updated", "column.updated", |d: &Document| {
            d.updated.format("%Y-%m-%d").to_string()
        })
        .unsearchable(),
        ColumnSpec::new("size", "column.size", |d: &Document| d.size_kb.to_string())
            .numeric()
            .unsearchable(),
    ]
}

#[component]
pub fn DocumentsScreen() -> Element {
    let mut store = use_context::<AppStore>();
    let workspace = use_context::<Arc<Workspace>>();
    let locale = Locale::from_segment(&store.location().locale());

    let columns = document_columns();
    let query = TableQuery::from_store(&store, DEFAULT_PAGE_SIZE)
        .scalar_filter(KIND_KEY, store.value(KIND_KEY));
    let view = run_query(&workspace.documents, &columns, &query);

    let headers = header_row(&columns, locale);
    let rows = body_rows(&columns, &view.rows, locale);
    let show_reset = store.has_active_filters(&[SEARCH_KEY, PAGE_KEY]);
    let reset_label = t(locale, "filters.clear").to_string();

    rsx! {
        div {
            div {
                style: "display: flex; gap: 12px; align-items: center; margin-bottom: 12px;",
                SearchBox {
                    placeholder: t(locale, "search.placeholder").to_string(),
                    clear_label: t(locale, "search.clear").to_string(),
                }
                if show_reset {
                    button {
                        style: "border: 1px solid #d24; color: #d24; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| {
                            store.reset_filters(true);
                        },
                        "{reset_label}"
                    }
                }
            }

            div {
                style: "display: flex; gap: 8px; margin-bottom: 12px; flex-wrap: wrap;",
                FacetCard {
                    facet_key: KIND_KEY.to_string(),
                    value: None::<String>,
                    label: t(locale, "facet.all").to_string(),
                    count: workspace.documents.len(),
                }
                {DocumentKind::ALL.iter().map(|kind| {
                    let count = workspace
                        .documents
                        .iter()
                        .filter(|document| document.kind == *kind)
                        .count();
                    rsx!(
                        FacetCard {
                            facet_key: KIND_KEY.to_string(),
                            value: Some(kind.code().to_string()),
                            label: t(locale, kind.label_key()).to_string(),
                            count: count,
                        }
                    )
                })}
            }

            DataTable { headers: headers, rows: rows }

            Pager {
                page: view.page,
                page_count: view.page_count,
                has_prev: view.has_prev,
                has_next: view.has_next,
                filtered_rows: view.filtered_rows,
                prev_label: t(locale, "pager.prev").to_string(),
                next_label: t(locale, "pager.next").to_string(),
                page_label: t(locale, "pager.page").to_string(),
                of_label: t(locale, "pager.of").to_string(),
                results_label: t(locale, "filters.results").to_string(),
            }
        }
    }
}

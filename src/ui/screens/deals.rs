use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::entities::date_range::{DateRange, FROM_KEY, TO_KEY};
use crate::domain::entities::deal::{Deal, DealStage};
use crate::i18n::{t, Locale};
use crate::infra::fixtures::Workspace;
use crate::query::location::Location;
use crate::query::store::{PAGE_KEY, SEARCH_KEY};
use crate::table::column::ColumnSpec;
use crate::table::engine::{run_query, TableQuery, DEFAULT_PAGE_SIZE};
use crate::ui::data_table::{body_rows, header_row, DataTable};
use crate::ui::date_range::DateRangePicker;
use crate::ui::facet_card::FacetCard;
use crate::ui::pager::Pager;
use crate::ui::search_box::SearchBox;
use crate::ui::AppStore;

const STAGE_KEY: &str = "stage";

pub fn deal_columns() -> Vec<ColumnSpec<Deal>> {
    vec![
        ColumnSpec::new("title", "column.title", |d: &Deal| d.title.clone()),
        ColumnSpec::new("customer", "column.customer", |d: &Deal| d.customer.clone()),
        ColumnSpec::new("stage", "column.stage", |d: &Deal| d.stage.code().to_string())
            .with_render(|d: &Deal| d.stage.label_key().to_string())
            .unsearchable(),
        ColumnSpec::new("value", "column.value", |d: &Deal| d.value.to_string())
            .with_render(|d: &Deal| format!("{:.0}", d.value))
            .numeric()
            .unsearchable(),
        ColumnSpec::new("closing", "column.closing", |d: &Deal| {
            d.closing.format("%Y-%m-%d").to_string()
        })
        .unsearchable(),
    ]
}

#[component]
pub fn DealsScreen() -> Element {
    let mut store = use_context::<AppStore>();
    let workspace = use_context::<Arc<Workspace>>();
    let locale = Locale::from_segment(&store.location().locale());

    let range = DateRange::parse(
        store.value(FROM_KEY).as_deref(),
        store.value(TO_KEY).as_deref(),
    );
    // The date range narrows the row source before the generic pipeline;
    // it is not a column filter.
    let in_range: Vec<Deal> = workspace
        .deals
        .iter()
        .filter(|deal| range.contains(deal.closing))
        .cloned()
        .collect();

    let columns = deal_columns();
    let query = TableQuery::from_store(&store, DEFAULT_PAGE_SIZE)
        .scalar_filter(STAGE_KEY, store.value(STAGE_KEY));
    let view = run_query(&in_range, &columns, &query);

    let headers = header_row(&columns, locale);
    let rows = body_rows(&columns, &view.rows, locale);
    let show_reset = store.has_active_filters(&[SEARCH_KEY, PAGE_KEY]);
    let reset_label = t(locale, "filters.clear").to_string();
    let range_title = t(locale, "daterange.title").to_string();

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
                    facet_key: STAGE_KEY.to_string(),
                    value: None::<String>,
                    label: t(locale, "facet.all").to_string(),
                    count: workspace.deals.len(),
                }
                {DealStage::ALL.iter().map(|stage| {
                    let count = workspace
                        .deals
                        .iter()
                        .filter(|deal| deal.stage == *stage)
                        .count();
                    rsx!(
                        FacetCard {
                            facet_key: STAGE_KEY.to_string(),
                            value: Some(stage.code().to_string()),
                            label: t(locale, stage.label_key()).to_string(),
                            count: count,
                        }
                    )
                })}
            }

            div {
                style: "margin-bottom: 12px;",
                div { style: "color: #667; margin-bottom: 6px;", "{range_title}" }
                DateRangePicker {
                    value: range,
                    clear_label: t(locale, "daterange.clear").to_string(),
                    pending_hint: t(locale, "daterange.pending").to_string(),
                    on_change: move |next: Option<DateRange>| {
                        let (from, to) = next.unwrap_or_default().query_values();
                        store
                            .batch()
                            .set(FROM_KEY, from.as_deref())
                            .set(TO_KEY, to.as_deref())
                            .remove(PAGE_KEY)
                            .commit();
                    },
                }
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

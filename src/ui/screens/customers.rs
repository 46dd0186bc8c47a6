use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::entities::customer::{Customer, CustomerStatus, Tier};
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

const STATUS_KEY: &str = "status";
const TIER_KEY: &str = "tier";

pub fn customer_columns() -> Vec<ColumnSpec<Customer>> {
    vec![
        ColumnSpec::new("name", "column.name", |c: &Customer| c.name.clone()),
        ColumnSpec::new("email", "column.email", |c: &Customer| c.email.clone()),
        ColumnSpec::new("country", "column.country", |c: &Customer| c.country.clone()),
        ColumnSpec::new("status", "column.status", |c: &Customer| {
            c.status.code().to_string()
        })
        .with_render(|c: &Customer| c.status.label_key().to_string())
        .unsearchable(),
        ColumnSpec::new("tier", "column.tier", |c: &Customer| c.tier.code().to_string())
            .with_render(|c: &Customer| c.tier.label_key().to_string())
            .unsearchable(),
        ColumnSpec::new("joined", "column.joined", |c: &Customer| {
            c.joined.format("%Y-%m-%d").to_string()
        })
        .unsearchable(),
        ColumnSpec::new("ltv", "column.ltv", |c: &Customer| {
            c.lifetime_value.to_string()
        })
        .with_render(|c: &Customer| format!("{:.0}", c.lifetime_value))
        .numeric()
        .unsearchable(),
    ]
}

#[component]
pub fn CustomersScreen() -> Element {
    let mut store = use_context::<AppStore>();
    let workspace = use_context::<Arc<Workspace>>();
    let locale = Locale::from_segment(&store.location().locale());

    let columns = customer_columns();
    let query = TableQuery::from_store(&store, DEFAULT_PAGE_SIZE)
        .scalar_filter(STATUS_KEY, store.value(STATUS_KEY))
        .multi_filter(TIER_KEY, store.values(TIER_KEY));
    let view = run_query(&workspace.customers, &columns, &query);

    let headers = header_row(&columns, locale);
    let rows = body_rows(&columns, &view.rows, locale);
    let selected_tiers = store.values(TIER_KEY);
    let show_reset = store.has_active_filters(&[SEARCH_KEY, PAGE_KEY]);
    let reset_label = t(locale, "filters.clear").to_string();
    let tier_group_label = t(locale, "column.tier").to_string();

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
                    facet_key: STATUS_KEY.to_string(),
                    value: None::<String>,
                    label: t(locale, "facet.all").to_string(),
                    count: workspace.customers.len(),
                }
                {CustomerStatus::ALL.iter().map(|status| {
                    let count = workspace
                        .customers
                        .iter()
                        .filter(|customer| customer.status == *status)
                        .count();
                    rsx!(
                        FacetCard {
                            facet_key: STATUS_KEY.to_string(),
                            value: Some(status.code().to_string()),
                            label: t(locale, status.label_key()).to_string(),
                            count: count,
                        }
                    )
                })}
            }

            div {
                style: "display: flex; gap: 14px; align-items: center; margin-bottom: 12px;",
                span { style: "color: #667;", "{tier_group_label}" }
                {Tier::ALL.iter().map(|tier| {
                    let code = tier.code();
                    let selected = selected_tiers.contains(&code.to_string());
                    let tier_label = t(locale, tier.label_key()).to_string();
                    rsx!(
                        label {
                            style: "display: inline-flex; gap: 6px; align-items: center; cursor: pointer;",
                            input {
                                r#type: "checkbox",
                                checked: selected,
                                onclick: move |_| {
                                    let mut tiers = store.values(TIER_KEY);
                                    if selected {
                                        tiers.retain(|value| value != code);
                                    } else {
                                        tiers.push(code.to_string());
                                    }
                                    store
                                        .batch()
                                        .set_values(TIER_KEY, &tiers)
                                        .remove(PAGE_KEY)
                                        .commit();
                                }
                            }
                            span { "{tier_label}" }
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

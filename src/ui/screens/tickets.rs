use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::entities::ticket::{Ticket, TicketPriority, TicketStatus};
use crate::i18n::{t, Locale};
use crate::infra::fixtures::Workspace;
use crate::query::location::Location;
use crate::query::store::{PAGE_KEY, SEARCH_KEY};
use crate::table::column::ColumnSpec;
use crate::table::engine::{run_query, TableQuery};
use crate::ui::data_table::{body_rows, header_row, DataTable};
use crate::ui::facet_card::FacetCard;
use crate::ui::pager::Pager;
use crate::ui::search_box::SearchBox;
use crate::ui::AppStore;

const PRIORITY_KEY: &str = "priority";
const STATUS_KEY: &str = "status";

// Smaller pages than the other screens; tickets are scanned, not read.
const TICKET_PAGE_SIZE: usize = 8;

fn ticket_columns() -> Vec<ColumnSpec<Ticket>> {
    vec![
        ColumnSpec::new("subject", "column.subject", |t: &Ticket| t.subject.clone()),
        ColumnSpec::new("customer", "column.customer", |t: &Ticket| t.customer.clone()),
        ColumnSpec::new("priority", "column.priority", |t: &Ticket| {
            t.priority.code().to_string()
        })
        .with_render(|t: &Ticket| t.priority.label_key().to_string())
        .with_compare(|a: &Ticket, b: &Ticket| a.priority.rank().cmp(&b.priority.rank()))
        .unsearchable(),
        ColumnSpec::new("status", "column.status", |t: &Ticket| {
            t.status.code().to_string()
        })
        .with_render(|t: &Ticket| t.status.label_key().to_string())
        .unsearchable(),
        ColumnSpec::new("opened", "column.opened", |t: &Ticket| {
            t.opened.format("%Y-%m-%d").to_string()
        })
        .unsearchable(),
    ]
}

#[component]
pub fn TicketsScreen() -> Element {
    let mut store = use_context::<AppStore>();
    let workspace = use_context::<Arc<Workspace>>();
    let locale = Locale::from_segment(&store.location().locale());

    let columns = ticket_columns();
    let query = TableQuery::from_store(&store, TICKET_PAGE_SIZE)
        .scalar_filter(PRIORITY_KEY, store.value(PRIORITY_KEY))
        .multi_filter(STATUS_KEY, store.values(STATUS_KEY));
    let view = run_query(&workspace.tickets, &columns, &query);

    let headers = header_row(&columns, locale);
    let rows = body_rows(&columns, &view.rows, locale);
    let selected_statuses = store.values(STATUS_KEY);
    let show_reset = store.has_active_filters(&[SEARCH_KEY, PAGE_KEY]);
    let reset_label = t(locale, "filters.clear").to_string();
    let status_group_label = t(locale, "column.status").to_string();

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
                    facet_key: PRIORITY_KEY.to_string(),
                    value: None::<String>,
                    label: t(locale, "facet.all").to_string(),
                    count: workspace.tickets.len(),
                }
                {TicketPriority::ALL.iter().map(|priority| {
                    let count = workspace
                        .tickets
                        .iter()
                        .filter(|ticket| ticket.priority == *priority)
                        .count();
                    rsx!(
                        FacetCard {
                            facet_key: PRIORITY_KEY.to_string(),
                            value: Some(priority.code().to_string()),
                            label: t(locale, priority.label_key()).to_string(),
                            count: count,
                        }
                    )
                })}
            }

            div {
                style: "display: flex; gap: 14px; align-items: center; margin-bottom: 12px;",
                span { style: "color: #667;", "{status_group_label}" }
                {TicketStatus::ALL.iter().map(|status| {
                    let code = status.code();
                    let selected = selected_statuses.contains(&code.to_string());
                    let status_label = t(locale, status.label_key()).to_string();
                    rsx!(
                        label {
                            style: "display: inline-flex; gap: 6px; align-items: center; cursor: pointer;",
                            input {
                                r#type: "checkbox",
                                checked: selected,
                                onclick: move |_| {
                                    let mut statuses = store.values(STATUS_KEY);
                                    if selected {
                                        statuses.retain(|value| value != code);
                                    } else {
                                        statuses.push(code.to_string());
                                    }
                                    store
                                        .batch()
                                        .set_values(STATUS_KEY, &statuses)
                                        .remove(PAGE_KEY)
                                        .commit();
                                }
                            }
                            span { "{status_label}" }
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

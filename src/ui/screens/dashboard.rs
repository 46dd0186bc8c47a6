use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::entities::date_range::DateRange;
use crate::domain::entities::deal::DealStage;
use crate::domain::entities::ticket::TicketStatus;
use crate::i18n::{t, Locale};
use crate::infra::fixtures::Workspace;
use crate::query::location::Location;
use crate::ui::AppStore;
use crate::ui::date_range::DateRangePicker;

fn metric_tile_style() -> &'static str {
    "border: 1px solid #bbb; border-radius: 8px; padding: 12px 16px; min-width: 160px; background: #fff;"
}

/// Overview screen. The date range here stays page-local: it narrows the
/// derived metrics without touching the canonical query state, which is
/// why this screen writes nothing to the store.
#[component]
pub fn DashboardScreen() -> Element {
    let store = use_context::<AppStore>();
    let workspace = use_context::<Arc<Workspace>>();
    let locale = Locale::from_segment(&store.location().locale());

    let mut range = use_signal(DateRange::default);
    let selected = range();

    let customer_count = workspace.customers.len();
    let open_tickets = workspace
        .tickets
        .iter()
        .filter(|ticket| {
            matches!(ticket.status, TicketStatus::Open | TicketStatus::Pending)
        })
        .count();
    let won_in_range: Vec<f64> = workspace
        .deals
        .iter()
        .filter(|deal| deal.stage == DealStage::Won && selected.contains(deal.closing))
        .map(|deal| deal.value)
        .collect();
    let revenue: f64 = won_in_range.iter().sum();
    let focus_subject = workspace
        .tickets
        .iter()
        .filter(|ticket| {
            matches!(ticket.status, TicketStatus::Open | TicketStatus::Pending)
        })
        .max_by_key(|ticket| (ticket.priority.rank(), ticket.opened))
        .map(|ticket| ticket.subject.clone());
    let per_day = selected
        .day_count()
        .filter(|days| *days > 0)
        .map(|days| revenue / days as f64);

    let customers_label = t(locale, "dashboard.customers").to_string();
    let tickets_label = t(locale, "dashboard.open_tickets").to_string();
    let deals_label = t(locale, "dashboard.won_deals").to_string();
    let revenue_label = t(locale, "dashboard.revenue").to_string();
    let per_day_label = t(locale, "dashboard.per_day").to_string();
    let focus_label = t(locale, "dashboard.ticket_focus").to_string();
    let range_title = t(locale, "daterange.title").to_string();
    let range_caption = match (selected.query_values(), selected.is_empty()) {
        (_, true) => t(locale, "daterange.any").to_string(),
        ((from, to), false) => format!(
            "{} → {}",
            from.unwrap_or_else(|| "…".to_string()),
            to.unwrap_or_else(|| "…".to_string())
        ),
    };
    let won_count = won_in_range.len();

    rsx! {
        div {
            div {
                style: "display: flex; gap: 12px; margin-bottom: 16px; flex-wrap: wrap;",
                div {
                    style: "{metric_tile_style()}",
                    div { style: "color: #667; font-size: 12px;", "{customers_label}" }
                    div { style: "font-size: 24px; font-weight: 600;", "{customer_count}" }
                }
                div {
                    style: "{metric_tile_style()}",
                    div { style: "color: #667; font-size: 12px;", "{tickets_label}" }
                    div { style: "font-size: 24px; font-weight: 600;", "{open_tickets}" }
                }
                div {
                    style: "{metric_tile_style()}",
                    div { style: "color: #667; font-size: 12px;", "{deals_label}" }
                    div { style: "font-size: 24px; font-weight: 600;", "{won_count}" }
                }
                div {
                    style: "{metric_tile_style()}",
                    div { style: "color: #667; font-size: 12px;", "{revenue_label}" }
                    div { style: "font-size: 24px; font-weight: 600;", {format!("{revenue:.0}")} }
                    if let Some(per_day) = per_day {
                        div { style: "color: #667; font-size: 12px;", {format!("{per_day:.0} {per_day_label}")} }
                    }
                }
                if let Some(focus_subject) = focus_subject {
                    div {
                        style: "{metric_tile_style()}",
                        div { style: "color: #667; font-size: 12px;", "{focus_label}" }
                        div { style: "font-size: 15px; font-weight: 600;", "{focus_subject}" }
                    }
                }
            }

            div {
                div {
                    style: "color: #667; margin-bottom: 6px;",
                    "{range_title}: {range_caption}"
                }
                DateRangePicker {
                    value: selected,
                    clear_label: t(locale, "daterange.clear").to_string(),
                    pending_hint: t(locale, "daterange.pending").to_string(),
                    on_change: move |next: Option<DateRange>| {
                        range.set(next.unwrap_or_default());
                    },
                }
            }
        }
    }
}

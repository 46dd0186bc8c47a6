use chrono::{Datelike, Months, NaiveDate};
use dioxus::prelude::*;

use crate::domain::entities::date_range::DateRange;

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

fn sub_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months)).unwrap_or(date)
}

fn days_in_month(first: NaiveDate) -> u32 {
    (add_months(first, 1) - first).num_days() as u32
}

/// Dual-month calendar. The first click selects a pending start (shown but
/// not committed), the second click completes the range and commits it
/// synchronously through `on_change`; the clear action commits `None`.
/// Date selection is a discrete low-frequency action, so there is no
/// debounce here — the caller decides whether the committed range goes
/// into the URL filter store or stays page-local.
#[component]
pub fn DateRangePicker(
    value: DateRange,
    on_change: EventHandler<Option<DateRange>>,
    clear_label: String,
    pending_hint: String,
) -> Element {
    let today = chrono::Local::now().date_naive();
    let mut anchor = use_signal(|| month_start(value.from().unwrap_or(today)));
    let mut pending_start = use_signal(|| None::<NaiveDate>);

    let pick = move |picked: NaiveDate| match pending_start() {
        None => pending_start.set(Some(picked)),
        Some(start) => {
            pending_start.set(None);
            on_change.call(Some(DateRange::between(start, picked)));
        }
    };

    let hint_visible = pending_start().is_some();

    rsx! {
        div {
            style: "display: inline-block; border: 1px solid #bbb; border-radius: 8px; padding: 10px; background: #fff;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                button {
                    style: "border: 1px solid #bbb; background: #fff; padding: 2px 10px; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| {
                        let previous = sub_months(anchor(), 1);
                        anchor.set(previous);
                    },
                    "‹"
                }
                if hint_visible {
                    span { style: "color: #4c6ef5; font-size: 12px;", "{pending_hint}" }
                }
                button {
                    style: "border: 1px solid #bbb; background: #fff; padding: 2px 10px; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| {
                        let next = add_months(anchor(), 1);
                        anchor.set(next);
                    },
                    "›"
                }
            }
            div {
                style: "display: flex; gap: 16px;",
                {(0..2u32).map(|offset| {
                    let first = add_months(anchor(), offset);
                    let month_label = first.format("%Y-%m").to_string();
                    let lead = first.weekday().num_days_from_monday();
                    rsx!(
                        div {
                            div {
                                style: "text-align: center; font-weight: 600; margin-bottom: 6px;",
                                "{month_label}"
                            }
                            div {
                                style: "display: grid; grid-template-columns: repeat(7, 28px); gap: 2px;",
                                {(0..lead).map(|_| rsx!(span { "" }))}
                                {(1..=days_in_month(first)).map(|day| {
                                    let date = first.with_day(day).unwrap_or(first);
                                    let is_endpoint = value.from() == Some(date)
                                        || value.to() == Some(date)
                                        || pending_start() == Some(date);
                                    let in_range = value.is_complete() && value.contains(date);
                                    let style = if is_endpoint {
                                        "border: 1px solid #4c6ef5; background: #4c6ef5; color: #fff; border-radius: 4px; padding: 3px 0; cursor: pointer;"
                                    } else if in_range {
                                        "border: 1px solid #dce4ff; background: #eef4ff; border-radius: 4px; padding: 3px 0; cursor: pointer;"
                                    } else {
                                        "border: 1px solid #eee; background: #fff; border-radius: 4px; padding: 3px 0; cursor: pointer;"
                                    };
                                    rsx!(
                                        button {
                                            style: "{style}",
                                            onclick: move |_| {
                                                let mut pick = pick;
                                                pick(date);
                                            },
                                            "{day}"
                                        }
                                    )
                                })}
                            }
                        }
                    )
                })}
            }
            div {
                style: "margin-top: 8px;",
                button {
                    style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| {
                        pending_start.set(None);
                        on_change.call(None);
                    },
                    "{clear_label}"
                }
            }
        }
    }
}

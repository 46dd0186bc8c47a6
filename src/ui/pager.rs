use dioxus::prelude::*;

use crate::query::location::Location;
use crate::query::store::{FilterStore, PAGE_KEY};
use crate::ui::AppStore;

/// Writes the target page index, dropping the key entirely for page 0 so
/// the default state never persists as an explicit value.
pub fn go_to_page<L: Location>(store: &mut FilterStore<L>, page: usize) {
    let value = if page == 0 { None } else { Some(page.to_string()) };
    store.set_value(PAGE_KEY, value.as_deref());
}

#[component]
pub fn Pager(
    page: usize,
    page_count: usize,
    has_prev: bool,
    has_next: bool,
    filtered_rows: usize,
    prev_label: String,
    next_label: String,
    page_label: String,
    of_label: String,
    results_label: String,
) -> Element {
    let mut store = use_context::<AppStore>();
    let shown_page = page + 1;
    let shown_count = page_count.max(1);

    rsx! {
        div {
            style: "display: flex; gap: 10px; align-items: center; margin: 10px 0;",
            button {
                disabled: !has_prev,
                style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px;",
                onclick: move |_| {
                    if has_prev {
                        go_to_page(&mut store, page.saturating_sub(1));
                    }
                },
                "{prev_label}"
            }
            span { "{page_label} {shown_page} {of_label} {shown_count}" }
            button {
                disabled: !has_next,
                style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px;",
                onclick: move |_| {
                    if has_next {
                        go_to_page(&mut store, page + 1);
                    }
                },
                "{next_label}"
            }
            span { style: "color: #667;", "{filtered_rows} {results_label}" }
        }
    }
}

use std::time::Instant;

use dioxus::core::Task;
use dioxus::prelude::*;
use tracing::debug;

use crate::query::debounce::{SearchDebounce, SETTLE_PERIOD};
use crate::query::store::{PAGE_KEY, SEARCH_KEY};
use crate::ui::AppStore;

/// Free-text search input with a settle delay between keystrokes and the
/// canonical query state. The buffer is seeded from the address once, on
/// mount; later navigations caused by other filters must not overwrite
/// in-progress typing, so it is never re-seeded.
#[component]
pub fn SearchBox(placeholder: String, clear_label: String) -> Element {
    let store = use_context::<AppStore>();
    let mut debounce =
        use_signal(|| SearchDebounce::new(&store.value(SEARCH_KEY).unwrap_or_default()));
    let mut settle_task = use_signal(|| None::<Task>);

    // Cancels the pending settle timer and schedules a fresh one. The task
    // is scoped to this component, so unmounting drops it and any write
    // after unmount with it.
    let schedule_settle = move || {
        let mut store = store;
        if let Some(task) = settle_task.write().take() {
            task.cancel();
        }
        let task = spawn(async move {
            tokio::time::sleep(SETTLE_PERIOD).await;
            let settled = debounce.write().poll(Instant::now());
            if let Some(text) = settled {
                debug!(query = %text, "search settled");
                let value = if text.is_empty() { None } else { Some(text.as_str()) };
                store.batch().set(SEARCH_KEY, value).remove(PAGE_KEY).commit();
            }
        });
        settle_task.set(Some(task));
    };

    let buffer = debounce.read().buffer().to_string();
    let show_clear = !buffer.is_empty();

    rsx! {
        div {
            style: "display: inline-flex; gap: 6px; align-items: center;",
            input {
                style: "border: 1px solid #bbb; border-radius: 6px; padding: 5px 10px; min-width: 220px;",
                placeholder: "{placeholder}",
                value: "{buffer}",
                oninput: move |event| {
                    debounce.write().edit(&event.value(), Instant::now());
                    let mut schedule_settle = schedule_settle;
                    schedule_settle();
                },
            }
            if show_clear {
                button {
                    style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| {
                        debounce.write().clear(Instant::now());
                        let mut schedule_settle = schedule_settle;
                        schedule_settle();
                    },
                    "{clear_label}"
                }
            }
        }
    }
}

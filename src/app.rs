use std::sync::Arc;

use dioxus::prelude::*;

use crate::i18n::{t, Locale};
use crate::infra::fixtures;
use crate::query::location::{Location, LocationState, SharedLocation};
use crate::query::store::FilterStore;
use crate::ui::screens::customers::CustomersScreen;
use crate::ui::screens::dashboard::DashboardScreen;
use crate::ui::screens::deals::DealsScreen;
use crate::ui::screens::documents::DocumentsScreen;
use crate::ui::screens::tickets::TicketsScreen;
use crate::ui::AppStore;

const NAV: &[(&str, &str)] = &[
    ("/dashboard", "nav.dashboard"),
    ("/customers", "nav.customers"),
    ("/deals", "nav.deals"),
    ("/tickets", "nav.tickets"),
    ("/documents", "nav.documents"),
];

#[component]
pub fn App() -> Element {
    let workspace = match fixtures::load() {
        Ok(workspace) => Arc::new(workspace),
        Err(err) => {
            return rsx! {
                div {
                    p { "Failed to load workspace data: {err}" }
                }
            };
        }
    };

    let state = use_signal(LocationState::default);
    let location = SharedLocation::new(state);
    let store: AppStore = FilterStore::new(location);
    use_context_provider(|| store);
    use_context_provider(|| workspace);

    let locale = Locale::from_segment(&location.locale());
    let path = location.path();
    let query = location.query_string();
    // Canonical address readout. The locale rides as the leading segment so
    // the full view state is visible in one line.
    let address = if query.is_empty() {
        format!("/{}{}", locale.segment(), path)
    } else {
        format!("/{}{}?{}", locale.segment(), path, query)
    };
    let title = t(locale, "app.title").to_string();

    rsx! {
        div {
            style: "font-family: 'Noto Sans TC', sans-serif; padding: 12px; background: #f7f8fa; min-height: 100vh;",

            div {
                style: "display: flex; gap: 12px; align-items: center; margin-bottom: 4px;",
                h2 { style: "margin: 0;", "{title}" }
                span { style: "color: #889; font-family: monospace;", "{address}" }
                div {
                    style: "margin-left: auto; display: flex; gap: 6px;",
                    {Locale::ALL.iter().map(|candidate| {
                        let candidate = *candidate;
                        let name = candidate.display_name();
                        let style = if candidate == locale {
                            "padding: 4px 10px; border: 1px solid #4c6ef5; background: #eef4ff; border-radius: 6px; cursor: pointer;"
                        } else {
                            "padding: 4px 10px; border: 1px solid #bbb; background: #fff; border-radius: 6px; cursor: pointer;"
                        };
                        rsx!(
                            button {
                                style: "{style}",
                                onclick: move |_| {
                                    let mut location = location;
                                    location.switch_locale(candidate.segment());
                                },
                                "{name}"
                            }
                        )
                    })}
                }
            }

            nav {
                style: "display: flex; gap: 8px; margin: 12px 0; flex-wrap: wrap;",
                {NAV.iter().map(|(nav_path, label_key)| {
                    let nav_path = *nav_path;
                    let label = t(locale, label_key).to_string();
                    let style = if path == nav_path {
                        "padding: 4px 10px; border: 1px solid #4c6ef5; background: #eef4ff; border-radius: 6px; cursor: pointer;"
                    } else {
                        "padding: 4px 10px; border: 1px solid #bbb; background: #fff; border-radius: 6px; cursor: pointer;"
                    };
                    rsx!(
                        button {
                            style: "{style}",
                            onclick: move |_| {
                                // Each screen starts from a clean query.
                                let mut location = location;
                                location.replace(nav_path, "", false);
                            },
                            "{label}"
                        }
                    )
                })}
            }

            div {
                style: "background: #fff; border: 1px solid #ddd; border-radius: 8px; padding: 16px;",
                match path.as_str() {
                    "/customers" => rsx!(CustomersScreen {}),
                    "/deals" => rsx!(DealsScreen {}),
                    "/tickets" => rsx!(TicketsScreen {}),
                    "/documents" => rsx!(DocumentsScreen {}),
                    _ => rsx!(DashboardScreen {}),
                }
            }
        }
    }
}

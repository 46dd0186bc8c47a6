use dioxus::prelude::*;

use crate::query::location::Location;
use crate::query::store::{FilterStore, PAGE_KEY};
use crate::ui::AppStore;

/// Active state is equality with the canonical value, never a locally
/// tracked selection, so a facet group always reflects the address even
/// when some other component changed it.
pub fn facet_is_active(current: Option<&str>, tile: Option<&str>) -> bool {
    current == tile
}

/// Click rule for one tile. Clicking the active tile is a no-op; only the
/// "All" tile (`tile = None`) clears the key. A change also resets the page
/// index, in the same navigation.
pub fn facet_click<L: Location>(store: &mut FilterStore<L>, key: &str, tile: Option<&str>) {
    if facet_is_active(store.value(key).as_deref(), tile) {
        return;
    }
    store.batch().set(key, tile).remove(PAGE_KEY).commit();
}

#[component]
pub fn FacetCard(facet_key: String, value: Option<String>, label: String, count: usize) -> Element {
    let mut store = use_context::<AppStore>();
    let active = facet_is_active(store.value(&facet_key).as_deref(), value.as_deref());
    let style = if active {
        "padding: 6px 12px; border: 1px solid #4c6ef5; background: #eef4ff; border-radius: 6px; cursor: pointer; display: inline-flex; gap: 6px; align-items: baseline;"
    } else {
        "padding: 6px 12px; border: 1px solid #bbb; background: #fff; border-radius: 6px; cursor: pointer; display: inline-flex; gap: 6px; align-items: baseline;"
    };

    rsx! {
        button {
            style: "{style}",
            onclick: move |_| {
                facet_click(&mut store, &facet_key, value.as_deref());
            },
            span { "{label}" }
            span { style: "color: #667; font-size: 12px;", "{count}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::location::MemoryLocation;

    fn store() -> FilterStore<MemoryLocation> {
        FilterStore::new(MemoryLocation::new())
    }

    #[test]
    fn selecting_a_facet_replaces_the_previous_one() {
        let mut store = store();

        facet_click(&mut store, "status", Some("active"));
        facet_click(&mut store, "status", Some("inactive"));

        assert_eq!(store.value("status"), Some("inactive".to_string()));
    }

    #[test]
    fn clicking_the_active_facet_is_a_no_op() {
        let mut store = store();
        facet_click(&mut store, "status", Some("active"));
        let navigations = store.location().replace_count;

        facet_click(&mut store, "status", Some("active"));

        assert_eq!(store.value("status"), Some("active".to_string()));
        assert_eq!(store.location().replace_count, navigations);
    }

    #[test]
    fn all_tile_clears_the_key() {
        let mut store = store();
        facet_click(&mut store, "status", Some("active"));

        facet_click(&mut store, "status", None);

        assert_eq!(store.value("status"), None);
    }

    #[test]
    fn facet_change_resets_the_page_in_one_navigation() {
        let mut store = store();
        store.set_value(PAGE_KEY, Some("3"));
        let navigations = store.location().replace_count;

        facet_click(&mut store, "status", Some("active"));

        assert_eq!(store.value(PAGE_KEY), None);
        assert_eq!(store.location().replace_count, navigations + 1);
    }

    #[test]
    fn exactly_one_tile_is_active_per_group() {
        let mut store = store();
        facet_click(&mut store, "status", Some("b"));

        let current = store.value("status");
        let tiles = [None, Some("a"), Some("b"), Some("c")];
        let active: Vec<bool> = tiles
            .iter()
            .map(|tile| facet_is_active(current.as_deref(), *tile))
            .collect();

        assert_eq!(active.iter().filter(|is_active| **is_active).count(), 1);
        assert!(active[2]);
    }
}

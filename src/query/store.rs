use tracing::debug;

use crate::query::codec::{self, QueryState};
use crate::query::location::Location;

/// Key carrying the free-text search value.
pub const SEARCH_KEY: &str = "q";
/// Key carrying the zero-based page index.
pub const PAGE_KEY: &str = "page";
/// Key carrying the active sort column id.
pub const SORT_KEY: &str = "sort";
/// Key carrying the sort direction, `asc` or `desc`.
pub const DIR_KEY: &str = "dir";

/// Façade every screen uses to read and mutate the canonical query state.
/// Holds no state of its own: reads decode the current address, writes go
/// through a single `replace` on the location adapter.
#[derive(Clone, Copy, PartialEq)]
pub struct FilterStore<L> {
    location: L,
}

impl<L: Location> FilterStore<L> {
    pub fn new(location: L) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn state(&self) -> QueryState {
        codec::decode(&self.location.query_string())
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.state().get(key).cloned()
    }

    pub fn values(&self, key: &str) -> Vec<String> {
        self.value(key)
            .map(|raw| codec::split_values(&raw))
            .unwrap_or_default()
    }

    /// Sets one key. `None` or an empty string removes the key instead of
    /// storing an empty value. Writing the current value is a no-op and
    /// performs no navigation.
    pub fn set_value(&mut self, key: &str, value: Option<&str>) {
        let mut next = self.state();
        apply(&mut next, key, value);
        self.commit(next);
    }

    /// Sets a multi-value key; the list joins into one delimited scalar.
    /// An empty list removes the key.
    pub fn set_values(&mut self, key: &str, values: &[String]) {
        let joined = codec::join_values(values);
        self.set_value(key, if joined.is_empty() { None } else { Some(&joined) });
    }

    pub fn remove_value(&mut self, key: &str) {
        self.set_value(key, None);
    }

    /// Clears every key in one navigation. When `keep_search_query` is set,
    /// the search key's prior value survives the reset.
    pub fn reset_filters(&mut self, keep_search_query: bool) {
        let search = self.value(SEARCH_KEY);
        let mut next = QueryState::new();
        if keep_search_query {
            if let Some(query) = search {
                next.insert(SEARCH_KEY.to_string(), query);
            }
        }
        debug!(keep_search_query, "reset filters");
        self.commit(next);
    }

    /// True when any key outside `exclude_keys` is present. Drives the
    /// "clear filters" affordance.
    pub fn has_active_filters(&self, exclude_keys: &[&str]) -> bool {
        self.state()
            .keys()
            .any(|key| !exclude_keys.contains(&key.as_str()))
    }

    /// Stages several edits that land as a single navigation. Edits apply
    /// in call order, so the last write per key wins.
    pub fn batch(&mut self) -> Batch<'_, L> {
        let staged = self.state();
        Batch {
            store: self,
            staged,
        }
    }

    fn commit(&mut self, next: QueryState) {
        if next == self.state() {
            return;
        }
        let path = self.location.path();
        self.location.replace(&path, &codec::encode(&next), true);
    }
}

fn apply(state: &mut QueryState, key: &str, value: Option<&str>) {
    match value {
        Some(value) if !value.is_empty() => {
            state.insert(key.to_string(), value.to_string());
        }
        _ => {
            state.remove(key);
        }
    }
}

/// Staged edit set produced by [`FilterStore::batch`].
pub struct Batch<'a, L: Location> {
    store: &'a mut FilterStore<L>,
    staged: QueryState,
}

impl<L: Location> Batch<'_, L> {
    pub fn set(mut self, key: &str, value: Option<&str>) -> Self {
        apply(&mut self.staged, key, value);
        self
    }

    pub fn set_values(self, key: &str, values: &[String]) -> Self {
        let joined = codec::join_values(values);
        let value = if joined.is_empty() { None } else { Some(joined) };
        self.set(key, value.as_deref())
    }

    pub fn remove(self, key: &str) -> Self {
        self.set(key, None)
    }

    pub fn commit(self) {
        self.store.commit(self.staged);
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
    fn set_value_round_trips() {
        let mut store = store();

        store.set_value("status", Some("active"));

        assert_eq!(store.value("status"), Some("active".to_string()));
    }

    #[test]
    fn empty_value_round_trips_to_absent() {
        let mut store = store();

        store.set_value("status", Some("active"));
        store.set_value("status", Some(""));

        assert_eq!(store.value("status"), None);
        assert!(!store.location().state.query.contains("status"));
    }

    #[test]
    fn set_value_is_idempotent_on_navigation() {
        let mut store = store();

        store.set_value("status", Some("active"));
        store.set_value("status", Some("active"));

        assert_eq!(
            store.location().replace_count,
            1,
            "re-writing the same value should not navigate again"
        );
    }

    #[test]
    fn removing_absent_key_does_not_navigate() {
        let mut store = store();

        store.remove_value("status");

        assert_eq!(store.location().replace_count, 0);
    }

    #[test]
    fn multi_values_preserve_order_and_content() {
        let mut store = store();
        let tiers = vec!["gold".to_string(), "bronze".to_string(), "silver".to_string()];

        store.set_values("tier", &tiers);

        assert_eq!(store.values("tier"), tiers);
        assert_eq!(store.value("tier"), Some("gold,bronze,silver".to_string()));
    }

    #[test]
    fn empty_list_removes_key() {
        let mut store = store();

        store.set_values("tier", &["gold".to_string()]);
        store.set_values("tier", &[]);

        assert_eq!(store.value("tier"), None);
        assert!(store.values("tier").is_empty());
    }

    #[test]
    fn batch_coalesces_into_one_navigation() {
        let mut store = store();

        store
            .batch()
            .set("status", Some("active"))
            .set("tier", Some("gold"))
            .set("status", Some("inactive"))
            .remove("page")
            .commit();

        assert_eq!(store.location().replace_count, 1);
        assert_eq!(
            store.value("status"),
            Some("inactive".to_string()),
            "last write per key should win"
        );
        assert_eq!(store.value("tier"), Some("gold".to_string()));
    }

    #[test]
    fn batch_with_no_effective_change_does_not_navigate() {
        let mut store = store();
        store.set_value("status", Some("active"));

        store
            .batch()
            .set("status", Some("active"))
            .remove("missing")
            .commit();

        assert_eq!(store.location().replace_count, 1);
    }

    #[test]
    fn reset_clears_everything_in_one_navigation() {
        let mut store = store();
        store.set_value(SEARCH_KEY, Some("acme"));
        store.set_value("status", Some("active"));
        store.set_value(PAGE_KEY, Some("3"));
        let navigations_before = store.location().replace_count;

        store.reset_filters(false);

        assert!(store.state().is_empty());
        assert_eq!(store.location().replace_count, navigations_before + 1);
    }

    #[test]
    fn reset_can_keep_search_query() {
        let mut store = store();
        store.set_value(SEARCH_KEY, Some("acme"));
        store.set_value("status", Some("active"));

        store.reset_filters(true);

        assert_eq!(store.value(SEARCH_KEY), Some("acme".to_string()));
        assert_eq!(store.value("status"), None);
    }

    #[test]
    fn has_active_filters_honours_exclusions() {
        let mut store = store();
        store.set_value(SEARCH_KEY, Some("acme"));

        assert!(!store.has_active_filters(&[SEARCH_KEY]));

        store.set_value("status", Some("active"));

        assert!(store.has_active_filters(&[SEARCH_KEY]));
        assert!(!store.has_active_filters(&[SEARCH_KEY, "status"]));
    }

    #[test]
    fn mutations_preserve_scroll_position() {
        let mut store = store();

        store.set_value("status", Some("active"));

        assert!(
            !store.location().state.scroll_reset,
            "filter changes should not reset scroll"
        );
    }
}

use dioxus::prelude::*;
use tracing::debug;

/// The navigable address: path segment, query string, and locale segment.
/// This is the single source of truth for all view state; components read a
/// derived snapshot and write back through the filter store only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationState {
    pub path: String,
    pub query: String,
    pub locale: String,
    /// Set when the last replace asked for a scroll reset.
    pub scroll_reset: bool,
}

impl Default for LocationState {
    fn default() -> Self {
        Self {
            path: "/dashboard".to_string(),
            query: String::new(),
            locale: "en".to_string(),
            scroll_reset: false,
        }
    }
}

/// Boundary with the host routing system. `replace` swaps the current
/// address in place; it must never grow navigation history.
pub trait Location {
    fn path(&self) -> String;
    fn query_string(&self) -> String;
    fn replace(&mut self, path: &str, query: &str, preserve_scroll: bool);
    fn locale(&self) -> String;
    fn switch_locale(&mut self, locale: &str);
}

/// Signal-backed address used by the live shell. Reading subscribes the
/// calling component, so every consumer re-renders when the address changes.
#[derive(Clone, Copy, PartialEq)]
pub struct SharedLocation {
    state: Signal<LocationState>,
}

impl SharedLocation {
    pub fn new(state: Signal<LocationState>) -> Self {
        Self { state }
    }
}

impl Location for SharedLocation {
    fn path(&self) -> String {
        self.state.read().path.clone()
    }

    fn query_string(&self) -> String {
        self.state.read().query.clone()
    }

    fn replace(&mut self, path: &str, query: &str, preserve_scroll: bool) {
        debug!(path, query, preserve_scroll, "location replace");
        let mut state = self.state.write();
        state.path = path.to_string();
        state.query = query.to_string();
        state.scroll_reset = !preserve_scroll;
    }

    fn locale(&self) -> String {
        self.state.read().locale.clone()
    }

    fn switch_locale(&mut self, locale: &str) {
        debug!(locale, "locale switch");
        self.state.write().locale = locale.to_string();
    }
}

/// In-memory address for tests. Counts replaces so tests can assert that
/// mutations coalesce into single navigations.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLocation {
    pub state: LocationState,
    pub replace_count: usize,
}

#[allow(dead_code)]
impl MemoryLocation {
    pub fn new() -> Self {
        Self {
            state: LocationState::default(),
            replace_count: 0,
        }
    }

    pub fn with_query(query: &str) -> Self {
        let mut location = Self::new();
        location.state.query = query.to_string();
        location
    }
}

impl Location for MemoryLocation {
    fn path(&self) -> String {
        self.state.path.clone()
    }

    fn query_string(&self) -> String {
        self.state.query.clone()
    }

    fn replace(&mut self, path: &str, query: &str, preserve_scroll: bool) {
        self.state.path = path.to_string();
        self.state.query = query.to_string();
        self.state.scroll_reset = !preserve_scroll;
        self.replace_count += 1;
    }

    fn locale(&self) -> String {
        self.state.locale.clone()
    }

    fn switch_locale(&mut self, locale: &str) {
        self.state.locale = locale.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_swaps_address_without_history() {
        let mut location = MemoryLocation::new();

        location.replace("/customers", "status=active", true);
        location.replace("/customers", "status=active&tier=gold", true);

        assert_eq!(location.path(), "/customers");
        assert_eq!(location.query_string(), "status=active&tier=gold");
        assert_eq!(location.replace_count, 2);
    }

    #[test]
    fn replace_records_scroll_reset_request() {
        let mut location = MemoryLocation::new();

        location.replace("/deals", "", false);
        assert!(location.state.scroll_reset);

        location.replace("/deals", "stage=won", true);
        assert!(!location.state.scroll_reset);
    }

    #[test]
    fn switch_locale_keeps_address_intact() {
        let mut location = MemoryLocation::with_query("q=acme");

        location.switch_locale("zh-TW");

        assert_eq!(location.locale(), "zh-TW");
        assert_eq!(location.query_string(), "q=acme");
    }
}

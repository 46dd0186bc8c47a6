use std::time::{Duration, Instant};

/// Quiet period after the last keystroke before the buffer is promoted.
pub const SETTLE_PERIOD: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Buffer equals the committed value; nothing scheduled.
    Idle,
    /// Buffer diverged; commit is due at the deadline unless edited again.
    Typing { deadline: Instant },
}

/// Local text buffer decoupled from the canonical query state.
///
/// The buffer absorbs rapid keystrokes so the address is not replaced once
/// per keystroke. Each edit restarts the settle deadline; only once input
/// quiesces does [`SearchDebounce::poll`] hand the value back for promotion
/// into the store. The machine deliberately never re-reads the canonical
/// state after construction: navigation caused by other filters must not
/// stomp in-progress typing. Use [`SearchDebounce::reseed`] for an explicit
/// programmatic reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDebounce {
    buffer: String,
    committed: String,
    phase: Phase,
    settle: Duration,
}

impl SearchDebounce {
    /// Seeds the buffer from the current canonical value. Called once, on
    /// mount of the owning control.
    pub fn new(initial: &str) -> Self {
        Self::with_settle(initial, SETTLE_PERIOD)
    }

    pub fn with_settle(initial: &str, settle: Duration) -> Self {
        Self {
            buffer: initial.to_string(),
            committed: initial.to_string(),
            phase: Phase::Idle,
            settle,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_typing(&self) -> bool {
        matches!(self.phase, Phase::Typing { .. })
    }

    /// Records a keystroke and restarts the settle deadline.
    pub fn edit(&mut self, text: &str, now: Instant) {
        self.buffer = text.to_string();
        self.phase = Phase::Typing {
            deadline: now + self.settle,
        };
    }

    /// Explicit clear. Goes through the same settle path as typing so the
    /// commit discipline stays uniform.
    pub fn clear(&mut self, now: Instant) {
        self.edit("", now);
    }

    /// Returns the buffer for promotion when the settle deadline has
    /// elapsed, exactly once per quiesced burst of edits.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.phase {
            Phase::Typing { deadline } if now >= deadline => {
                self.phase = Phase::Idle;
                self.committed = self.buffer.clone();
                Some(self.buffer.clone())
            }
            _ => None,
        }
    }

    /// Programmatic reset, distinguishable from the machine's own commits.
    /// Drops any pending deadline.
    pub fn reseed(&mut self, value: &str) {
        self.buffer = value.to_string();
        self.committed = value.to_string();
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle() -> Duration {
        Duration::from_millis(300)
    }

    #[test]
    fn rapid_keystrokes_commit_only_the_final_value() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::with_settle("", settle());

        debounce.edit("a", start);
        debounce.edit("ab", start + Duration::from_millis(100));
        debounce.edit("abc", start + Duration::from_millis(200));

        assert_eq!(
            debounce.poll(start + Duration::from_millis(450)),
            None,
            "earlier keystrokes' deadlines should have been cancelled"
        );
        assert_eq!(
            debounce.poll(start + Duration::from_millis(500)),
            Some("abc".to_string())
        );
        assert_eq!(
            debounce.poll(start + Duration::from_millis(600)),
            None,
            "a settled burst should commit exactly once"
        );
    }

    #[test]
    fn poll_before_deadline_returns_nothing() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::with_settle("", settle());

        debounce.edit("acme", start);

        assert_eq!(debounce.poll(start + Duration::from_millis(299)), None);
        assert!(debounce.is_typing());
    }

    #[test]
    fn clear_goes_through_the_settle_path() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::with_settle("acme", settle());

        debounce.clear(start);

        assert_eq!(debounce.buffer(), "");
        assert_eq!(debounce.poll(start), None, "clear should not commit immediately");
        assert_eq!(
            debounce.poll(start + settle()),
            Some(String::new()),
            "clear should commit after the settle period"
        );
    }

    #[test]
    fn buffer_is_seeded_once_and_not_restated_by_poll() {
        let mut debounce = SearchDebounce::with_settle("seeded", settle());

        assert_eq!(debounce.buffer(), "seeded");
        assert!(!debounce.is_typing());
        assert_eq!(debounce.poll(Instant::now()), None);
    }

    #[test]
    fn reseed_drops_pending_deadline() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::with_settle("", settle());
        debounce.edit("typing", start);

        debounce.reseed("external");

        assert_eq!(debounce.buffer(), "external");
        assert_eq!(
            debounce.poll(start + settle()),
            None,
            "reseed should cancel the in-flight commit"
        );
    }

    #[test]
    fn retyping_the_committed_value_still_settles_cleanly() {
        let start = Instant::now();
        let mut debounce = SearchDebounce::with_settle("acme", settle());

        debounce.edit("acme", start);

        assert_eq!(debounce.poll(start + settle()), Some("acme".to_string()));
        assert!(!debounce.is_typing());
    }
}

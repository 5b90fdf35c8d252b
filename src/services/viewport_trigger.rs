// src/services/viewport_trigger.rs
//
// Viewport Trigger - turns sentinel visibility into "load next page"
//
// The sentinel only exists while the list is `Ready` with more pages.
// The trigger fires at most once per such state; any transition (tracked
// by the state's revision) re-arms it. Once detached it never fires.

use crate::domain::ListState;

#[derive(Debug, Clone)]
pub struct ViewportTrigger {
    attached: bool,
    /// Revision of the state the trigger last fired for
    fired_for: Option<u64>,
}

impl ViewportTrigger {
    pub fn new() -> Self {
        Self {
            attached: true,
            fired_for: None,
        }
    }

    /// Whether the sentinel should be rendered for this state
    pub fn sentinel_present(state: &ListState) -> bool {
        state.can_load_more()
    }

    /// The sentinel scrolled into view. Returns true when the loader
    /// should be asked for the next page.
    pub fn on_sentinel_visible(&mut self, state: &ListState) -> bool {
        if !self.attached || !Self::sentinel_present(state) {
            return false;
        }
        if self.fired_for == Some(state.revision) {
            return false;
        }
        self.fired_for = Some(state.revision);
        true
    }

    /// Whether the next visibility report for `state` would fire
    pub fn is_armed(&self, state: &ListState) -> bool {
        self.attached && Self::sentinel_present(state) && self.fired_for != Some(state.revision)
    }

    /// Stop observing; later visibility reports are ignored
    pub fn detach(&mut self) {
        self.attached = false;
        self.fired_for = None;
    }

    /// Start observing again, e.g. when the list view is remounted
    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Default for ViewportTrigger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Game, Page};

    fn ready_state() -> ListState {
        let mut state = ListState::default();
        state.begin_initial();
        state.apply_first_page(Page::new(vec![Game::new(1, "Doom")], true));
        state
    }

    #[test]
    fn test_fires_once_per_ready_state() {
        let mut trigger = ViewportTrigger::new();
        let state = ready_state();

        assert!(trigger.on_sentinel_visible(&state));
        assert!(!trigger.on_sentinel_visible(&state));
        assert!(!trigger.is_armed(&state));
    }

    #[test]
    fn test_rearms_after_transition() {
        let mut trigger = ViewportTrigger::new();
        let mut state = ready_state();
        assert!(trigger.on_sentinel_visible(&state));

        state.begin_more();
        assert!(!trigger.on_sentinel_visible(&state));

        state.apply_next_page(2, Page::new(vec![Game::new(2, "Quake")], true));
        assert!(trigger.is_armed(&state));
        assert!(trigger.on_sentinel_visible(&state));
    }

    #[test]
    fn test_never_fires_when_exhausted_or_loading() {
        let mut trigger = ViewportTrigger::new();
        let mut state = ListState::default();
        assert!(!trigger.on_sentinel_visible(&state));

        state.begin_initial();
        assert!(!trigger.on_sentinel_visible(&state));

        state.apply_first_page(Page::new(vec![Game::new(1, "Doom")], false));
        assert!(!ViewportTrigger::sentinel_present(&state));
        assert!(!trigger.on_sentinel_visible(&state));
    }

    #[test]
    fn test_detached_trigger_is_silent() {
        let mut trigger = ViewportTrigger::new();
        let state = ready_state();

        trigger.detach();
        assert!(!trigger.is_attached());
        assert!(!trigger.on_sentinel_visible(&state));

        trigger.attach();
        assert!(trigger.on_sentinel_visible(&state));
    }
}

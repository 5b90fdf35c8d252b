use serde::{Deserialize, Serialize};

use crate::domain::game::Game;

/// One fetch's worth of ordered results plus a continuation flag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<Game>,
    pub has_next: bool,
}

impl Page {
    pub fn new(items: Vec<Game>, has_next: bool) -> Self {
        Self { items, has_next }
    }
}

/// Where the list loader is in its lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListPhase {
    #[default]
    Idle,
    LoadingInitial,
    Ready,
    LoadingMore,
    /// No further pages for the current descriptor
    Exhausted,
    /// The first page failed; retry re-enters `LoadingInitial`
    Errored,
}

/// Accumulated results for the active descriptor
///
/// Items keep server order and are never deduplicated. The `revision`
/// counter moves on every transition so observers can tell two `Ready`
/// states apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListState {
    pub items: Vec<Game>,
    pub current_page: u32,
    pub has_more: bool,
    pub phase: ListPhase,
    pub last_error: Option<String>,
    pub revision: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            has_more: false,
            phase: ListPhase::Idle,
            last_error: None,
            revision: 0,
        }
    }
}

impl ListState {
    pub fn is_loading_initial(&self) -> bool {
        self.phase == ListPhase::LoadingInitial
    }

    pub fn is_loading_more(&self) -> bool {
        self.phase == ListPhase::LoadingMore
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading_initial() || self.is_loading_more()
    }

    /// Ready with more pages: the only state where the sentinel exists
    pub fn can_load_more(&self) -> bool {
        self.phase == ListPhase::Ready && self.has_more
    }

    /// Clears everything for a new (or retried) descriptor
    pub fn begin_initial(&mut self) {
        self.items.clear();
        self.current_page = 1;
        self.has_more = false;
        self.last_error = None;
        self.transition(ListPhase::LoadingInitial);
    }

    /// Moves to `LoadingMore` and returns the page number to request
    pub fn begin_more(&mut self) -> u32 {
        self.transition(ListPhase::LoadingMore);
        self.current_page + 1
    }

    pub fn apply_first_page(&mut self, page: Page) {
        self.items = page.items;
        self.current_page = 1;
        self.settle(page.has_next);
    }

    pub fn apply_next_page(&mut self, page_number: u32, page: Page) {
        self.items.extend(page.items);
        self.current_page = page_number;
        self.settle(page.has_next);
    }

    pub fn fail_initial(&mut self, message: String) {
        self.items.clear();
        self.has_more = false;
        self.last_error = Some(message);
        self.transition(ListPhase::Errored);
    }

    /// A failed "load more" keeps the list usable
    pub fn fail_more(&mut self, message: String) {
        self.last_error = Some(message);
        self.transition(ListPhase::Ready);
    }

    fn settle(&mut self, has_next: bool) {
        self.has_more = has_next;
        self.last_error = None;
        let phase = if has_next {
            ListPhase::Ready
        } else {
            ListPhase::Exhausted
        };
        self.transition(phase);
    }

    fn transition(&mut self, phase: ListPhase) {
        self.phase = phase;
        self.revision += 1;
    }
}

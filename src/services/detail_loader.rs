// src/services/detail_loader.rs
//
// Detail Loader - extended metadata for the selected game
//
// RULES:
// - Detail, screenshots and trailers are fetched concurrently
// - The view stops loading only after all three have settled
// - A failed section is logged and left empty; the others still show
// - Selecting another game or closing drops late results

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::domain::{GameDetail, GameId, Screenshot, Trailer};
use crate::events::{DetailClosed, DetailLoaded, EventBus, StaleResponseDiscarded};
use crate::integrations::GameCatalog;

/// What the detail page shows for one selection
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailView {
    pub game_id: GameId,
    pub loading: bool,
    pub detail: Option<GameDetail>,
    pub screenshots: Vec<Screenshot>,
    pub trailers: Vec<Trailer>,
    /// Sections that failed, with their error messages
    pub failures: Vec<SectionFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionFailure {
    pub section: &'static str,
    pub message: String,
}

impl DetailView {
    fn loading(game_id: GameId) -> Self {
        Self {
            game_id,
            loading: true,
            ..Self::default()
        }
    }
}

struct DetailInner {
    generation: u64,
    view: Option<DetailView>,
}

pub struct DetailLoader {
    catalog: Arc<dyn GameCatalog>,
    event_bus: Arc<EventBus>,
    inner: Mutex<DetailInner>,
}

impl DetailLoader {
    pub fn new(catalog: Arc<dyn GameCatalog>, event_bus: Arc<EventBus>) -> Self {
        Self {
            catalog,
            event_bus,
            inner: Mutex::new(DetailInner {
                generation: 0,
                view: None,
            }),
        }
    }

    /// The open view, if any
    pub fn current(&self) -> Option<DetailView> {
        self.lock().view.clone()
    }

    /// Open the detail view for `id` and load its sections
    ///
    /// Returns the settled view, or `None` if another selection or a
    /// close happened while the fetches were running.
    pub async fn select(&self, id: GameId) -> Option<DetailView> {
        let generation = {
            let mut inner = self.lock();
            inner.generation += 1;
            inner.view = Some(DetailView::loading(id));
            inner.generation
        };
        log::debug!("Loading detail for game {}", id);

        let (detail, screenshots, trailers) = tokio::join!(
            self.catalog.get_game_detail(id),
            self.catalog.get_game_screenshots(id),
            self.catalog.get_game_trailers(id),
        );

        let mut view = DetailView::loading(id);
        view.loading = false;

        match detail {
            Ok(detail) => view.detail = Some(detail),
            Err(e) => view.failures.push(failure(id, "detail", e)),
        }
        match screenshots {
            Ok(screenshots) => view.screenshots = screenshots,
            Err(e) => view.failures.push(failure(id, "screenshots", e)),
        }
        match trailers {
            Ok(trailers) => view.trailers = trailers,
            Err(e) => view.failures.push(failure(id, "trailers", e)),
        }

        let mut inner = self.lock();
        if inner.generation != generation {
            let current = inner.generation;
            drop(inner);
            log::debug!("Discarding detail for game {} (superseded)", id);
            self.event_bus
                .emit(StaleResponseDiscarded::new("detail", generation, current));
            return None;
        }
        inner.view = Some(view.clone());
        drop(inner);

        self.event_bus.emit(DetailLoaded::new(id, view.failures.len()));
        Some(view)
    }

    /// Close the view; anything still loading is dropped on arrival
    pub fn close(&self) {
        let closed = {
            let mut inner = self.lock();
            inner.generation += 1;
            inner.view.take().map(|view| view.game_id)
        };
        self.event_bus.emit(DetailClosed::new(closed));
    }

    fn lock(&self) -> MutexGuard<'_, DetailInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn failure(id: GameId, section: &'static str, error: crate::error::AppError) -> SectionFailure {
    log::warn!("Loading {} for game {} failed: {}", section, id, error);
    SectionFailure {
        section,
        message: error.to_string(),
    }
}

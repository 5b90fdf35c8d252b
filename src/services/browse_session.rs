// src/services/browse_session.rs
//
// Browse Session - the list screen as one unit
//
// Ties the list loader, the viewport trigger and the favorites store
// together and owns favorites-only mode.
//
// RULES:
// - While favorites-only is active no page is fetched
// - Favorites-only shows loaded items that are favorites, nothing more
// - A search issued during favorites-only runs when the mode is left

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::domain::{Game, ListState, RequestDescriptor};
use crate::services::favorites_service::FavoritesService;
use crate::services::list_loader::{ListLoader, LoadOutcome};
use crate::services::viewport_trigger::ViewportTrigger;

#[derive(Debug, Default)]
struct Mode {
    favorites_only: bool,
    /// Descriptor submitted while favorites-only was active
    pending: Option<RequestDescriptor>,
}

/// Everything the list screen renders
#[derive(Debug, Clone, Serialize)]
pub struct BrowseSnapshot {
    pub list: ListState,
    pub visible: Vec<Game>,
    pub favorites_only: bool,
    pub sentinel_present: bool,
    pub search_pending: bool,
}

pub struct BrowseSession {
    loader: ListLoader,
    favorites: Arc<FavoritesService>,
    trigger: Mutex<ViewportTrigger>,
    mode: Mutex<Mode>,
}

impl BrowseSession {
    pub fn new(loader: ListLoader, favorites: Arc<FavoritesService>) -> Self {
        Self {
            loader,
            favorites,
            trigger: Mutex::new(ViewportTrigger::new()),
            mode: Mutex::new(Mode::default()),
        }
    }

    pub fn loader(&self) -> &ListLoader {
        &self.loader
    }

    pub fn favorites(&self) -> &FavoritesService {
        &self.favorites
    }

    /// The descriptor the list reflects, or will once favorites-only ends
    pub fn descriptor(&self) -> RequestDescriptor {
        self.lock_mode()
            .pending
            .clone()
            .unwrap_or_else(|| self.loader.descriptor())
    }

    pub fn is_favorites_only(&self) -> bool {
        self.lock_mode().favorites_only
    }

    /// Submit a new descriptor
    pub async fn search(&self, descriptor: RequestDescriptor) -> LoadOutcome {
        {
            let mut mode = self.lock_mode();
            if mode.favorites_only {
                log::debug!("Search deferred until favorites-only is turned off");
                mode.pending = Some(descriptor);
                return LoadOutcome::Skipped;
            }
        }
        self.loader.start(descriptor).await
    }

    /// Explicit request for the next page
    pub async fn load_more(&self) -> LoadOutcome {
        if self.is_favorites_only() {
            return LoadOutcome::Skipped;
        }
        self.loader.load_more().await
    }

    pub async fn retry(&self) -> LoadOutcome {
        if self.is_favorites_only() {
            return LoadOutcome::Skipped;
        }
        self.loader.retry().await
    }

    /// The sentinel scrolled into view
    pub async fn sentinel_visible(&self) -> LoadOutcome {
        if self.is_favorites_only() {
            return LoadOutcome::Skipped;
        }
        let state = self.loader.state();
        let fire = self.lock_trigger().on_sentinel_visible(&state);
        if !fire {
            return LoadOutcome::Skipped;
        }
        self.loader.load_more().await
    }

    /// Enter or leave favorites-only mode
    ///
    /// Leaving it runs a search that was submitted in the meantime.
    pub async fn set_favorites_only(&self, enabled: bool) -> LoadOutcome {
        let pending = {
            let mut mode = self.lock_mode();
            mode.favorites_only = enabled;
            if enabled {
                None
            } else {
                mode.pending.take()
            }
        };
        log::info!("Favorites-only {}", if enabled { "on" } else { "off" });

        match pending {
            Some(descriptor) => self.loader.start(descriptor).await,
            None => LoadOutcome::Skipped,
        }
    }

    /// Items to display: all loaded items, or only the loaded favorites
    pub fn visible_items(&self) -> Vec<Game> {
        let items = self.loader.state().items;
        if !self.is_favorites_only() {
            return items;
        }
        let favorites = self.favorites.snapshot();
        items
            .into_iter()
            .filter(|game| favorites.contains(game.id))
            .collect()
    }

    pub fn snapshot(&self) -> BrowseSnapshot {
        let list = self.loader.state();
        let (favorites_only, search_pending) = {
            let mode = self.lock_mode();
            (mode.favorites_only, mode.pending.is_some())
        };
        let sentinel_present = !favorites_only
            && self.lock_trigger().is_attached()
            && ViewportTrigger::sentinel_present(&list);

        BrowseSnapshot {
            visible: self.visible_items(),
            list,
            favorites_only,
            sentinel_present,
            search_pending,
        }
    }

    /// The list view went away; stop reacting to the sentinel
    pub fn detach(&self) {
        self.lock_trigger().detach();
    }

    pub fn attach(&self) {
        self.lock_trigger().attach();
    }

    fn lock_mode(&self) -> MutexGuard<'_, Mode> {
        self.mode.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_trigger(&self) -> MutexGuard<'_, ViewportTrigger> {
        self.trigger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, get_connection, initialize_database};
    use crate::domain::{ListPhase, Page};
    use crate::events::EventBus;
    use crate::repositories::SqliteKeyValueRepository;
    use crate::services::test_support::{games, list_key, ScriptedCatalog};

    fn session(catalog: Arc<ScriptedCatalog>) -> BrowseSession {
        let bus = Arc::new(EventBus::new());
        let pool = create_memory_pool().unwrap();
        {
            let conn = get_connection(&pool).unwrap();
            initialize_database(&conn).unwrap();
        }
        let repo = Arc::new(SqliteKeyValueRepository::new(Arc::new(pool)));
        let favorites = Arc::new(FavoritesService::load(repo, bus.clone()));
        BrowseSession::new(ListLoader::new(catalog, bus, 20), favorites)
    }

    fn search(query: &str) -> RequestDescriptor {
        RequestDescriptor::default().with_query(query)
    }

    #[tokio::test]
    async fn test_sentinel_drives_pagination() {
        let catalog = Arc::new(ScriptedCatalog::new());
        catalog.push_page("mario", 1, Ok(Page::new(games(1, 20), true)));
        catalog.push_page("mario", 2, Ok(Page::new(games(21, 5), false)));
        let session = session(catalog.clone());

        session.search(search("mario")).await;
        assert!(session.snapshot().sentinel_present);

        assert_eq!(session.sentinel_visible().await, LoadOutcome::Applied { added: 5 });
        let snapshot = session.snapshot();
        assert_eq!(snapshot.visible.len(), 25);
        assert_eq!(snapshot.list.phase, ListPhase::Exhausted);
        assert!(!snapshot.sentinel_present);

        assert_eq!(session.sentinel_visible().await, LoadOutcome::Skipped);
        assert_eq!(catalog.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_detached_trigger_does_not_fetch() {
        let catalog = Arc::new(ScriptedCatalog::new());
        catalog.push_page("", 1, Ok(Page::new(games(1, 20), true)));
        let session = session(catalog.clone());

        session.search(RequestDescriptor::default()).await;
        session.detach();

        assert_eq!(session.sentinel_visible().await, LoadOutcome::Skipped);
        assert!(!session.snapshot().sentinel_present);
        assert_eq!(catalog.calls(), vec![list_key("", 1)]);
    }

    #[tokio::test]
    async fn test_favorites_only_filters_loaded_items() {
        let catalog = Arc::new(ScriptedCatalog::new());
        catalog.push_page("", 1, Ok(Page::new(games(1, 20), true)));
        let session = session(catalog.clone());

        session.search(RequestDescriptor::default()).await;
        session.favorites().toggle(3).unwrap();
        session.favorites().toggle(17).unwrap();
        // Not loaded, so never shown
        session.favorites().toggle(999).unwrap();

        session.set_favorites_only(true).await;
        let snapshot = session.snapshot();
        let ids: Vec<i64> = snapshot.visible.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![3, 17]);
        assert!(!snapshot.sentinel_present);

        // Pagination is suspended
        assert_eq!(session.sentinel_visible().await, LoadOutcome::Skipped);
        assert_eq!(session.load_more().await, LoadOutcome::Skipped);
        assert_eq!(catalog.calls().len(), 1);

        session.set_favorites_only(false).await;
        assert_eq!(session.visible_items().len(), 20);
    }

    #[tokio::test]
    async fn test_favorites_only_before_browsing_is_empty() {
        let catalog = Arc::new(ScriptedCatalog::new());
        let session = session(catalog.clone());
        session.favorites().toggle(42).unwrap();

        session.set_favorites_only(true).await;
        assert!(session.visible_items().is_empty());
        assert!(catalog.calls().is_empty());
    }

    #[tokio::test]
    async fn test_search_during_favorites_only_runs_on_exit() {
        let catalog = Arc::new(ScriptedCatalog::new());
        catalog.push_page("", 1, Ok(Page::new(games(1, 20), true)));
        catalog.push_page("zelda", 1, Ok(Page::new(games(50, 3), false)));
        let session = session(catalog.clone());

        session.search(RequestDescriptor::default()).await;
        session.set_favorites_only(true).await;

        assert_eq!(session.search(search("zelda")).await, LoadOutcome::Skipped);
        assert!(session.snapshot().search_pending);
        assert_eq!(session.descriptor().query, "zelda");
        assert_eq!(catalog.calls().len(), 1);

        assert_eq!(
            session.set_favorites_only(false).await,
            LoadOutcome::Applied { added: 3 }
        );
        assert!(!session.snapshot().search_pending);
        assert_eq!(session.visible_items().first().map(|g| g.id), Some(50));
    }
}

// src/services/favorites_service.rs
//
// Favorites Store - owned set of favorite ids with write-through persistence
//
// RULES:
// - Loaded once, at construction
// - Every toggle persists the full set before returning
// - A malformed persisted value is logged and treated as empty

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{FavoriteSet, GameId};
use crate::error::AppResult;
use crate::events::{EventBus, FavoriteToggled};
use crate::repositories::KeyValueRepository;

/// Key-value slot holding the JSON-encoded favorites list
pub const FAVORITES_KEY: &str = "favorites";

pub struct FavoritesService {
    repo: Arc<dyn KeyValueRepository>,
    event_bus: Arc<EventBus>,
    favorites: Mutex<FavoriteSet>,
}

impl FavoritesService {
    /// Read the persisted set; never fails
    ///
    /// The set is kept in ascending id order, so the next write stores
    /// the canonical form: a stored `[9,1]` is rewritten as `[1,9]`, and
    /// a malformed value is replaced by whatever the set holds (`[]` if
    /// nothing was toggled). Toggling an id twice restores the stored
    /// bytes only once they are canonical.
    pub fn load(repo: Arc<dyn KeyValueRepository>, event_bus: Arc<EventBus>) -> Self {
        let favorites = match repo.get(FAVORITES_KEY) {
            Ok(Some(raw)) => FavoriteSet::from_json(&raw).unwrap_or_else(|e| {
                log::error!("Ignoring persisted favorites: {}", e);
                FavoriteSet::new()
            }),
            Ok(None) => FavoriteSet::new(),
            Err(e) => {
                log::error!("Could not read persisted favorites: {}", e);
                FavoriteSet::new()
            }
        };
        log::info!("Loaded {} favorites", favorites.len());

        Self {
            repo,
            event_bus,
            favorites: Mutex::new(favorites),
        }
    }

    /// Add the id if absent, remove it if present, then persist.
    /// Returns whether the id is a favorite afterwards.
    ///
    /// If persisting fails the in-memory set is left unchanged.
    pub fn toggle(&self, id: GameId) -> AppResult<bool> {
        let is_favorite = {
            let mut favorites = self.lock();
            let mut next = favorites.clone();
            let is_favorite = next.toggle(id);

            self.repo.put(FAVORITES_KEY, &next.to_json()?)?;
            *favorites = next;
            is_favorite
        };

        log::debug!("Favorite {} -> {}", id, is_favorite);
        self.event_bus.emit(FavoriteToggled::new(id, is_favorite));
        Ok(is_favorite)
    }

    pub fn is_favorite(&self, id: GameId) -> bool {
        self.lock().contains(id)
    }

    /// Copy of the current set
    pub fn snapshot(&self) -> FavoriteSet {
        self.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, FavoriteSet> {
        self.favorites.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, get_connection, initialize_database};
    use crate::error::AppError;
    use crate::repositories::{MockKeyValueRepository, SqliteKeyValueRepository};

    fn sqlite_repo() -> Arc<dyn KeyValueRepository> {
        let pool = create_memory_pool().unwrap();
        {
            let conn = get_connection(&pool).unwrap();
            initialize_database(&conn).unwrap();
        }
        Arc::new(SqliteKeyValueRepository::new(Arc::new(pool)))
    }

    #[test]
    fn test_toggle_persists_every_change() {
        let repo = sqlite_repo();
        let service = FavoritesService::load(repo.clone(), Arc::new(EventBus::new()));

        assert!(service.toggle(3498).unwrap());
        assert!(service.is_favorite(3498));
        assert_eq!(repo.get(FAVORITES_KEY).unwrap().as_deref(), Some("[3498]"));

        assert!(service.toggle(28).unwrap());
        assert_eq!(repo.get(FAVORITES_KEY).unwrap().as_deref(), Some("[28,3498]"));
    }

    #[test]
    fn test_double_toggle_restores_persisted_bytes() {
        let repo = sqlite_repo();
        repo.put(FAVORITES_KEY, "[1,5,9]").unwrap();
        let service = FavoritesService::load(repo.clone(), Arc::new(EventBus::new()));

        for id in [5, 42] {
            let before_membership = service.is_favorite(id);
            service.toggle(id).unwrap();
            service.toggle(id).unwrap();
            assert_eq!(service.is_favorite(id), before_membership);
            assert_eq!(repo.get(FAVORITES_KEY).unwrap().as_deref(), Some("[1,5,9]"));
        }
    }

    #[test]
    fn test_unordered_value_is_rewritten_in_id_order() {
        let repo = sqlite_repo();
        repo.put(FAVORITES_KEY, "[9,1]").unwrap();
        let service = FavoritesService::load(repo.clone(), Arc::new(EventBus::new()));

        service.toggle(5).unwrap();
        service.toggle(5).unwrap();
        assert_eq!(repo.get(FAVORITES_KEY).unwrap().as_deref(), Some("[1,9]"));

        // Canonical from here on
        service.toggle(5).unwrap();
        service.toggle(5).unwrap();
        assert_eq!(repo.get(FAVORITES_KEY).unwrap().as_deref(), Some("[1,9]"));
    }

    #[test]
    fn test_reload_sees_persisted_set() {
        let repo = sqlite_repo();
        let bus = Arc::new(EventBus::new());
        FavoritesService::load(repo.clone(), bus.clone()).toggle(7).unwrap();

        let reloaded = FavoritesService::load(repo, bus);
        assert!(reloaded.is_favorite(7));
        assert_eq!(reloaded.count(), 1);
    }

    #[test]
    fn test_malformed_value_loads_as_empty() {
        let repo = sqlite_repo();
        repo.put(FAVORITES_KEY, "not json").unwrap();

        let service = FavoritesService::load(repo.clone(), Arc::new(EventBus::new()));
        assert_eq!(service.count(), 0);

        // The next toggle overwrites the bad value
        service.toggle(3).unwrap();
        assert_eq!(repo.get(FAVORITES_KEY).unwrap().as_deref(), Some("[3]"));
    }

    #[test]
    fn test_failed_write_keeps_memory_unchanged() {
        let mut repo = MockKeyValueRepository::new();
        repo.expect_get().returning(|_| Ok(Some("[1]".to_string())));
        repo.expect_put()
            .returning(|_, _| Err(AppError::Other("disk full".to_string())));

        let service = FavoritesService::load(Arc::new(repo), Arc::new(EventBus::new()));
        assert!(service.toggle(2).is_err());
        assert!(!service.is_favorite(2));
        assert!(service.is_favorite(1));
    }

    #[test]
    fn test_unreadable_store_loads_as_empty() {
        let mut repo = MockKeyValueRepository::new();
        repo.expect_get()
            .returning(|_| Err(AppError::Pool("no connection".to_string())));

        let service = FavoritesService::load(Arc::new(repo), Arc::new(EventBus::new()));
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_toggle_emits_event() {
        let bus = Arc::new(EventBus::new());
        let service = FavoritesService::load(sqlite_repo(), bus.clone());

        service.toggle(11).unwrap();
        service.toggle(11).unwrap();

        let log = bus.get_event_log();
        assert_eq!(log.len(), 2);
        assert!(log.iter().all(|entry| entry.event_type == "FavoriteToggled"));
    }
}

// src/application/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::{create_connection_pool, get_connection, initialize_database};
use crate::domain::validate_page_size;
use crate::error::AppResult;
use crate::events::{create_event_bus, EventBus};
use crate::integrations::{GameCatalog, RawgClient};
use crate::repositories::{KeyValueRepository, SqliteKeyValueRepository};
use crate::services::{
    BrowseSession, CatalogService, DetailLoader, FavoritesService, ListLoader, SessionStats,
};

/// Application state shared by all commands.
/// All fields are Arc-wrapped for thread-safe sharing across commands.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub favorites: Arc<FavoritesService>,
    pub browse: Arc<BrowseSession>,
    pub details: Arc<DetailLoader>,
    pub catalog: Arc<CatalogService>,
    pub stats: Arc<SessionStats>,
}

impl AppState {
    /// Open the database, build the HTTP client and wire the services
    pub fn bootstrap(config: &AppConfig) -> AppResult<Self> {
        let db_path = config.database_path();
        log::info!("Opening database at {}", db_path.display());

        let pool = Arc::new(create_connection_pool(&db_path)?);
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }

        let repo = Arc::new(SqliteKeyValueRepository::new(pool));
        let client = Arc::new(RawgClient::from_config(config)?);
        log::info!("Using metadata service at {}", config.api_base_url);

        Self::from_parts(client, repo, config.page_size)
    }

    /// Wire services over the given collaborators
    pub fn from_parts(
        catalog: Arc<dyn GameCatalog>,
        repo: Arc<dyn KeyValueRepository>,
        page_size: u32,
    ) -> AppResult<Self> {
        let page_size = validate_page_size(page_size)?;
        let event_bus = Arc::new(create_event_bus());

        // Handlers first, so no event from the services below is missed
        let stats = Arc::new(SessionStats::new(event_bus.clone()));
        stats.register_event_handlers();

        let favorites = Arc::new(FavoritesService::load(repo, event_bus.clone()));
        let loader = ListLoader::new(catalog.clone(), event_bus.clone(), page_size);
        let browse = Arc::new(BrowseSession::new(loader, favorites.clone()));
        let details = Arc::new(DetailLoader::new(catalog.clone(), event_bus.clone()));
        let catalog = Arc::new(CatalogService::new(catalog));

        Ok(Self {
            event_bus,
            favorites,
            browse,
            details,
            catalog,
            stats,
        })
    }
}

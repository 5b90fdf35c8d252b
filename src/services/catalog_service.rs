// src/services/catalog_service.rs
//
// Curated lists and filter facets
//
// Thin pass-through to the catalog with logging. The date windows for
// trending and upcoming are computed by the client.

use std::sync::Arc;

use crate::domain::{Facet, Game};
use crate::error::AppResult;
use crate::integrations::GameCatalog;

pub struct CatalogService {
    catalog: Arc<dyn GameCatalog>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn GameCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn trending(&self) -> AppResult<Vec<Game>> {
        let games = self
            .catalog
            .list_trending_games()
            .await
            .inspect_err(|e| log::error!("Loading trending games failed: {}", e))?;
        log::debug!("Loaded {} trending games", games.len());
        Ok(games)
    }

    pub async fn upcoming(&self) -> AppResult<Vec<Game>> {
        let games = self
            .catalog
            .list_upcoming_games()
            .await
            .inspect_err(|e| log::error!("Loading upcoming games failed: {}", e))?;
        log::debug!("Loaded {} upcoming games", games.len());
        Ok(games)
    }

    pub async fn genres(&self) -> AppResult<Vec<Facet>> {
        self.catalog
            .list_genres()
            .await
            .inspect_err(|e| log::error!("Loading genres failed: {}", e))
    }

    pub async fn platforms(&self) -> AppResult<Vec<Facet>> {
        self.catalog
            .list_platforms()
            .await
            .inspect_err(|e| log::error!("Loading platforms failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::integrations::MockGameCatalog;
    use crate::services::test_support::{facet, games};

    #[tokio::test]
    async fn test_trending_passes_through() {
        let mut catalog = MockGameCatalog::new();
        catalog
            .expect_list_trending_games()
            .times(1)
            .returning(|| Ok(games(1, 4)));

        let service = CatalogService::new(Arc::new(catalog));
        assert_eq!(service.trending().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_upcoming_error_propagates() {
        let mut catalog = MockGameCatalog::new();
        catalog
            .expect_list_upcoming_games()
            .returning(|| Err(AppError::Transport("HTTP 401 Unauthorized".to_string())));

        let service = CatalogService::new(Arc::new(catalog));
        let err = service.upcoming().await.unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_facets() {
        let mut catalog = MockGameCatalog::new();
        catalog
            .expect_list_genres()
            .returning(|| Ok(vec![facet(4, "Action"), facet(51, "Indie")]));
        catalog
            .expect_list_platforms()
            .returning(|| Ok(vec![facet(4, "PC")]));

        let service = CatalogService::new(Arc::new(catalog));
        assert_eq!(service.genres().await.unwrap().len(), 2);
        assert_eq!(service.platforms().await.unwrap()[0].slug, "pc");
    }
}

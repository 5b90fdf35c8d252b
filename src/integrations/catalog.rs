// src/integrations/catalog.rs
//
// Fetch collaborator boundary
//
// Services depend on this trait, never on the HTTP client directly, so
// loaders can be driven by test doubles.

use async_trait::async_trait;

use crate::domain::{Facet, Game, GameDetail, GameId, Page, RequestDescriptor, Screenshot, Trailer};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameCatalog: Send + Sync {
    /// One page of games matching the descriptor (pages start at 1)
    async fn list_games(
        &self,
        descriptor: &RequestDescriptor,
        page: u32,
        page_size: u32,
    ) -> AppResult<Page>;

    async fn get_game_detail(&self, id: GameId) -> AppResult<GameDetail>;

    async fn get_game_screenshots(&self, id: GameId) -> AppResult<Vec<Screenshot>>;

    async fn get_game_trailers(&self, id: GameId) -> AppResult<Vec<Trailer>>;

    /// Added during the trailing 30 days, most recently added first
    async fn list_trending_games(&self) -> AppResult<Vec<Game>>;

    /// Releasing between today and one year out, soonest first
    async fn list_upcoming_games(&self) -> AppResult<Vec<Game>>;

    async fn list_genres(&self) -> AppResult<Vec<Facet>>;

    async fn list_platforms(&self) -> AppResult<Vec<Facet>>;
}

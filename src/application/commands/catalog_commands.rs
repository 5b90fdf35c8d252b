// src/application/commands/catalog_commands.rs

use crate::application::dto::{FacetDto, GameDto};
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::domain::Game;
use crate::services::SessionStatsSnapshot;

fn game_dtos(state: &AppState, games: Vec<Game>) -> Vec<GameDto> {
    let favorites = state.favorites.snapshot();
    games
        .iter()
        .map(|game| GameDto::from_game(game, &favorites))
        .collect()
}

/// Games added during the last 30 days
pub async fn trending_games(state: &AppState) -> Result<Vec<GameDto>, String> {
    let games = state.catalog.trending().await.to_error_response()?;
    Ok(game_dtos(state, games))
}

/// Games releasing within the next year
pub async fn upcoming_games(state: &AppState) -> Result<Vec<GameDto>, String> {
    let games = state.catalog.upcoming().await.to_error_response()?;
    Ok(game_dtos(state, games))
}

pub async fn list_genres(state: &AppState) -> Result<Vec<FacetDto>, String> {
    let genres = state.catalog.genres().await.to_error_response()?;
    Ok(genres.into_iter().map(FacetDto::from).collect())
}

pub async fn list_platforms(state: &AppState) -> Result<Vec<FacetDto>, String> {
    let platforms = state.catalog.platforms().await.to_error_response()?;
    Ok(platforms.into_iter().map(FacetDto::from).collect())
}

/// Activity counters since launch
pub fn get_session_stats(state: &AppState) -> SessionStatsSnapshot {
    state.stats.snapshot()
}

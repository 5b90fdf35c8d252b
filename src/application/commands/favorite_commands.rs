// src/application/commands/favorite_commands.rs

use crate::application::dto::{FavoriteToggleDto, GameDto};
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::domain::GameId;

pub fn toggle_favorite(state: &AppState, game_id: GameId) -> Result<FavoriteToggleDto, String> {
    let is_favorite = state.favorites.toggle(game_id).to_error_response()?;

    Ok(FavoriteToggleDto {
        game_id,
        is_favorite,
        total: state.favorites.count(),
    })
}

pub fn is_favorite(state: &AppState, game_id: GameId) -> bool {
    state.favorites.is_favorite(game_id)
}

/// Favorite ids in ascending order
pub fn list_favorites(state: &AppState) -> Vec<GameId> {
    state.favorites.snapshot().ids().collect()
}

/// Loaded games that are favorites, in list order
pub fn list_favorite_games(state: &AppState) -> Vec<GameDto> {
    let favorites = state.favorites.snapshot();
    state
        .browse
        .loader()
        .state()
        .items
        .iter()
        .filter(|game| favorites.contains(game.id))
        .map(|game| GameDto::from_game(game, &favorites))
        .collect()
}

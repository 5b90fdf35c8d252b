// src/application/commands/detail_commands.rs

use crate::application::dto::DetailViewDto;
use crate::application::state::AppState;
use crate::domain::GameId;

/// Open the detail view for a game
///
/// Returns `None` when the selection was replaced or closed before its
/// data arrived.
pub async fn select_game(state: &AppState, game_id: GameId) -> Result<Option<DetailViewDto>, String> {
    let view = state.details.select(game_id).await;
    Ok(view.map(|view| {
        let is_favorite = state.favorites.is_favorite(view.game_id);
        DetailViewDto::from_view(view, is_favorite)
    }))
}

pub fn close_game_detail(state: &AppState) {
    state.details.close();
}

pub fn get_game_detail_view(state: &AppState) -> Option<DetailViewDto> {
    state.details.current().map(|view| {
        let is_favorite = state.favorites.is_favorite(view.game_id);
        DetailViewDto::from_view(view, is_favorite)
    })
}

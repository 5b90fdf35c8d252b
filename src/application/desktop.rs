// src/application/desktop.rs
//
// Tauri command handlers (feature `desktop`)
//
// Each handler unwraps Tauri state and forwards to the matching command
// in `application::commands`.

use tauri::State;

use crate::application::commands;
use crate::application::dto::*;
use crate::application::state::AppState;
use crate::domain::GameId;

#[tauri::command]
pub async fn search_games(
    dto: SearchGamesDto,
    state: State<'_, AppState>,
) -> Result<BrowseStateDto, String> {
    commands::search_games(&state, dto).await
}

#[tauri::command]
pub async fn load_more_games(state: State<'_, AppState>) -> Result<BrowseStateDto, String> {
    commands::load_more_games(&state).await
}

#[tauri::command]
pub async fn retry_games(state: State<'_, AppState>) -> Result<BrowseStateDto, String> {
    commands::retry_games(&state).await
}

#[tauri::command]
pub async fn sentinel_visible(state: State<'_, AppState>) -> Result<BrowseStateDto, String> {
    commands::sentinel_visible(&state).await
}

#[tauri::command]
pub async fn set_favorites_only(
    enabled: bool,
    state: State<'_, AppState>,
) -> Result<BrowseStateDto, String> {
    commands::set_favorites_only(&state, enabled).await
}

#[tauri::command]
pub fn get_browse_state(state: State<'_, AppState>) -> BrowseStateDto {
    commands::get_browse_state(&state)
}

#[tauri::command]
pub fn detach_list_view(state: State<'_, AppState>) {
    commands::detach_list_view(&state)
}

#[tauri::command]
pub fn attach_list_view(state: State<'_, AppState>) {
    commands::attach_list_view(&state)
}

#[tauri::command]
pub fn toggle_favorite(
    game_id: GameId,
    state: State<'_, AppState>,
) -> Result<FavoriteToggleDto, String> {
    commands::toggle_favorite(&state, game_id)
}

#[tauri::command]
pub fn is_favorite(game_id: GameId, state: State<'_, AppState>) -> bool {
    commands::is_favorite(&state, game_id)
}

#[tauri::command]
pub fn list_favorites(state: State<'_, AppState>) -> Vec<GameId> {
    commands::list_favorites(&state)
}

#[tauri::command]
pub fn list_favorite_games(state: State<'_, AppState>) -> Vec<GameDto> {
    commands::list_favorite_games(&state)
}

#[tauri::command]
pub async fn select_game(
    game_id: GameId,
    state: State<'_, AppState>,
) -> Result<Option<DetailViewDto>, String> {
    commands::select_game(&state, game_id).await
}

#[tauri::command]
pub fn close_game_detail(state: State<'_, AppState>) {
    commands::close_game_detail(&state)
}

#[tauri::command]
pub fn get_game_detail_view(state: State<'_, AppState>) -> Option<DetailViewDto> {
    commands::get_game_detail_view(&state)
}

#[tauri::command]
pub async fn trending_games(state: State<'_, AppState>) -> Result<Vec<GameDto>, String> {
    commands::trending_games(&state).await
}

#[tauri::command]
pub async fn upcoming_games(state: State<'_, AppState>) -> Result<Vec<GameDto>, String> {
    commands::upcoming_games(&state).await
}

#[tauri::command]
pub async fn list_genres(state: State<'_, AppState>) -> Result<Vec<FacetDto>, String> {
    commands::list_genres(&state).await
}

#[tauri::command]
pub async fn list_platforms(state: State<'_, AppState>) -> Result<Vec<FacetDto>, String> {
    commands::list_platforms(&state).await
}

#[tauri::command]
pub fn get_session_stats(state: State<'_, AppState>) -> crate::services::SessionStatsSnapshot {
    commands::get_session_stats(&state)
}

/// Start the desktop shell with the given state
pub fn run(state: AppState) -> anyhow::Result<()> {
    tauri::Builder::default()
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            search_games,
            load_more_games,
            retry_games,
            sentinel_visible,
            set_favorites_only,
            get_browse_state,
            detach_list_view,
            attach_list_view,
            toggle_favorite,
            is_favorite,
            list_favorites,
            list_favorite_games,
            select_game,
            close_game_detail,
            get_game_detail_view,
            trending_games,
            upcoming_games,
            list_genres,
            list_platforms,
            get_session_stats,
        ])
        .run(tauri::generate_context!())?;

    Ok(())
}

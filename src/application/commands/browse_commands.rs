// src/application/commands/browse_commands.rs
//
// List screen command handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use crate::application::dto::{BrowseStateDto, SearchGamesDto};
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;
use crate::error::AppError;
use crate::services::LoadOutcome;

fn browse_state(state: &AppState, outcome: LoadOutcome) -> BrowseStateDto {
    BrowseStateDto::from_snapshot(
        state.browse.snapshot(),
        &state.favorites.snapshot(),
        &outcome,
    )
}

/// Submit a search; the list restarts from page 1
pub async fn search_games(state: &AppState, dto: SearchGamesDto) -> Result<BrowseStateDto, String> {
    let descriptor = dto
        .into_descriptor()
        .map_err(AppError::from)
        .to_error_response()?;

    let outcome = state.browse.search(descriptor).await;
    Ok(browse_state(state, outcome))
}

/// Explicit "load more"; ignored unless the list is ready for another page
pub async fn load_more_games(state: &AppState) -> Result<BrowseStateDto, String> {
    let outcome = state.browse.load_more().await;
    Ok(browse_state(state, outcome))
}

/// Retry the first page after a failed search
pub async fn retry_games(state: &AppState) -> Result<BrowseStateDto, String> {
    let outcome = state.browse.retry().await;
    Ok(browse_state(state, outcome))
}

/// The sentinel at the end of the list scrolled into view
pub async fn sentinel_visible(state: &AppState) -> Result<BrowseStateDto, String> {
    let outcome = state.browse.sentinel_visible().await;
    Ok(browse_state(state, outcome))
}

pub async fn set_favorites_only(
    state: &AppState,
    enabled: bool,
) -> Result<BrowseStateDto, String> {
    let outcome = state.browse.set_favorites_only(enabled).await;
    Ok(browse_state(state, outcome))
}

/// Current list without triggering anything
pub fn get_browse_state(state: &AppState) -> BrowseStateDto {
    browse_state(state, LoadOutcome::Skipped)
}

/// The list view was unmounted
pub fn detach_list_view(state: &AppState) {
    state.browse.detach();
}

/// The list view was mounted again
pub fn attach_list_view(state: &AppState) {
    state.browse.attach();
}

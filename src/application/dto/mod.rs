// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - Display fallbacks (placeholder image, score labels) are resolved here
// - Conversion FROM domain values, except the search request which is
//   parsed INTO a descriptor

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{
    DomainResult, Facet, FavoriteSet, Game, GameDetail, ListPhase, RequestDescriptor, ScoreRange,
    Screenshot, SortOrder, Trailer,
};
use crate::services::{BrowseSnapshot, DetailView, LoadOutcome, SectionFailure};

// ============================================================================
// SEARCH DTOs
// ============================================================================

/// Search form as submitted by the UI
///
/// `ordering` and `metacritic` carry wire tokens (`-rating`, `80,100`).
/// Empty strings mean "not set".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchGamesDto {
    pub query: String,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub ordering: String,
    pub metacritic: String,
}

impl SearchGamesDto {
    pub fn into_descriptor(self) -> DomainResult<RequestDescriptor> {
        let sort = SortOrder::from_token(&self.ordering)?;
        let score_range = ScoreRange::from_token(&self.metacritic)?;

        Ok(RequestDescriptor {
            genre_ids: clean_ids(self.genres),
            platform_ids: clean_ids(self.platforms),
            ..RequestDescriptor::default()
        }
        .with_query(self.query)
        .with_sort(sort)
        .with_score_range(score_range))
    }
}

fn clean_ids(ids: Vec<String>) -> BTreeSet<String> {
    ids.into_iter()
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .collect()
}

// ============================================================================
// GAME DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub rating: Option<String>,
    pub metacritic: Option<String>,
    pub released: Option<String>,
    pub release_year: Option<i32>,
    pub platforms: Vec<String>,
    pub genres: Vec<String>,
    pub is_favorite: bool,
}

impl GameDto {
    pub fn from_game(game: &Game, favorites: &FavoriteSet) -> Self {
        Self {
            id: game.id,
            name: game.name.clone(),
            slug: game.slug.clone(),
            image: game.image_or_placeholder().to_string(),
            rating: game.rating_label(),
            metacritic: game.score_label(),
            released: game.released.clone(),
            release_year: game.release_year(),
            platforms: game.platform_names().into_iter().map(String::from).collect(),
            genres: game.genre_names().into_iter().map(String::from).collect(),
            is_favorite: favorites.contains(game.id),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Facet> for FacetDto {
    fn from(facet: Facet) -> Self {
        Self {
            id: facet.id,
            name: facet.name,
            slug: facet.slug,
        }
    }
}

// ============================================================================
// LIST DTOs
// ============================================================================

/// The list screen after a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseStateDto {
    pub games: Vec<GameDto>,
    pub loaded_count: usize,
    pub phase: String,
    pub is_loading: bool,
    pub is_loading_more: bool,
    pub has_more: bool,
    pub current_page: u32,
    pub error: Option<String>,
    pub favorites_only: bool,
    pub show_sentinel: bool,
    pub search_pending: bool,
    /// What the last command did: applied, failed, discarded or skipped
    pub outcome: String,
}

impl BrowseStateDto {
    pub fn from_snapshot(
        snapshot: BrowseSnapshot,
        favorites: &FavoriteSet,
        outcome: &LoadOutcome,
    ) -> Self {
        let list = &snapshot.list;
        Self {
            games: snapshot
                .visible
                .iter()
                .map(|game| GameDto::from_game(game, favorites))
                .collect(),
            loaded_count: list.items.len(),
            phase: phase_name(list.phase).to_string(),
            is_loading: list.is_loading_initial(),
            is_loading_more: list.is_loading_more(),
            has_more: list.has_more,
            current_page: list.current_page,
            error: list.last_error.clone(),
            favorites_only: snapshot.favorites_only,
            show_sentinel: snapshot.sentinel_present,
            search_pending: snapshot.search_pending,
            outcome: outcome_name(outcome).to_string(),
        }
    }
}

fn phase_name(phase: ListPhase) -> &'static str {
    match phase {
        ListPhase::Idle => "idle",
        ListPhase::LoadingInitial => "loading_initial",
        ListPhase::Ready => "ready",
        ListPhase::LoadingMore => "loading_more",
        ListPhase::Exhausted => "exhausted",
        ListPhase::Errored => "errored",
    }
}

fn outcome_name(outcome: &LoadOutcome) -> &'static str {
    match outcome {
        LoadOutcome::Applied { .. } => "applied",
        LoadOutcome::Failed { .. } => "failed",
        LoadOutcome::Discarded => "discarded",
        LoadOutcome::Skipped => "skipped",
    }
}

// ============================================================================
// FAVORITE DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteToggleDto {
    pub game_id: i64,
    pub is_favorite: bool,
    pub total: usize,
}

// ============================================================================
// DETAIL DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDetailDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub image: Option<String>,
    pub rating: Option<String>,
    pub metacritic: Option<u32>,
    pub playtime_hours: Option<u32>,
    pub released: Option<String>,
    pub esrb_rating: Option<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub platforms: Vec<String>,
    pub genres: Vec<String>,
}

impl From<GameDetail> for GameDetailDto {
    fn from(detail: GameDetail) -> Self {
        Self {
            id: detail.id,
            name: detail.name,
            description: detail.description,
            website: detail.website.filter(|url| !url.is_empty()),
            image: detail.background_image,
            rating: detail.rating.filter(|r| *r > 0.0).map(|r| format!("{:.1}", r)),
            metacritic: detail.metacritic,
            playtime_hours: detail.playtime_hours.filter(|h| *h > 0),
            released: detail.released,
            esrb_rating: detail.esrb_rating,
            developers: detail.developers,
            publishers: detail.publishers,
            platforms: detail.platforms.into_iter().map(|p| p.name).collect(),
            genres: detail.genres.into_iter().map(|g| g.name).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenshotDto {
    pub id: i64,
    pub image: String,
}

impl From<Screenshot> for ScreenshotDto {
    fn from(screenshot: Screenshot) -> Self {
        Self {
            id: screenshot.id,
            image: screenshot.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailerDto {
    pub id: i64,
    pub name: String,
    pub preview: Option<String>,
    pub video: Option<String>,
}

impl From<Trailer> for TrailerDto {
    fn from(trailer: Trailer) -> Self {
        Self {
            id: trailer.id,
            video: trailer.best_source().map(String::from),
            name: trailer.name,
            preview: trailer.preview,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailViewDto {
    pub game_id: i64,
    pub loading: bool,
    pub is_favorite: bool,
    pub detail: Option<GameDetailDto>,
    pub screenshots: Vec<ScreenshotDto>,
    pub trailers: Vec<TrailerDto>,
    /// Names of the sections that could not be loaded
    pub failed_sections: Vec<String>,
}

impl DetailViewDto {
    pub fn from_view(view: DetailView, is_favorite: bool) -> Self {
        Self {
            game_id: view.game_id,
            loading: view.loading,
            is_favorite,
            detail: view.detail.map(GameDetailDto::from),
            screenshots: view.screenshots.into_iter().map(ScreenshotDto::from).collect(),
            trailers: view.trailers.into_iter().map(TrailerDto::from).collect(),
            failed_sections: view
                .failures
                .into_iter()
                .map(|SectionFailure { section, .. }| section.to_string())
                .collect(),
        }
    }
}

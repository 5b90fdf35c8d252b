// src/integrations/rawg/client.rs
//
// Metadata service HTTP client
//
// ARCHITECTURE:
// - REST client for the game metadata service
// - Every request carries the static `key` credential
// - Maps wire payloads → domain types
// - Non-2xx answers and network failures become `AppError::Transport`;
//   error bodies are never parsed

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use super::wire::{FacetData, GameData, GameDetailData, ListResponse, MovieData, ScreenshotData};
use crate::config::AppConfig;
use crate::domain::{
    DateWindow, Facet, Game, GameDetail, GameId, Page, RequestDescriptor, Screenshot, SortOrder,
    Trailer,
};
use crate::error::{AppError, AppResult};
use crate::integrations::catalog::GameCatalog;

/// Query parameters for one request, credential excluded
type Params = Vec<(&'static str, String)>;

/// Metadata service client
pub struct RawgClient {
    base_url: String,
    api_key: String,
    curated_page_size: u32,
    http_client: Client,
}

impl RawgClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            curated_page_size: crate::domain::DEFAULT_PAGE_SIZE,
            http_client,
        })
    }

    /// Build a client from configuration; fails without an API key
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let mut client = Self::new(
            &config.api_base_url,
            config.require_api_key()?,
            Duration::from_secs(config.request_timeout_secs),
        )?;
        client.curated_page_size = config.page_size;
        Ok(client)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Descriptor params plus paging, as sent to `GET /games`
    fn list_params(descriptor: &RequestDescriptor, page: u32, page_size: u32) -> Params {
        let mut params = descriptor.to_query_params();
        params.push(("page", page.to_string()));
        params.push(("page_size", page_size.to_string()));
        params
    }

    fn curated_params(&self, window: DateWindow, sort: SortOrder) -> Params {
        let mut params = vec![("dates", window.token())];
        if let Some(ordering) = sort.token() {
            params.push(("ordering", ordering.to_string()));
        }
        params.push(("page_size", self.curated_page_size.to_string()));
        params
    }

    // ========================================================================
    // INTERNAL: Request Execution
    // ========================================================================

    async fn get_json<T>(&self, path: &str, params: &Params) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        log::debug!("GET {} {:?}", url, params);

        let response = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                log::warn!("Request to {} failed: {}", url, e);
                AppError::Transport(format!("Request to {} failed: {}", path, e))
            })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} returned status {}", url, status);
            return Err(AppError::Transport(format!(
                "{} returned status {}",
                path, status
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to decode {} response: {}", path, e)))
    }
}

#[async_trait]
impl GameCatalog for RawgClient {
    async fn list_games(
        &self,
        descriptor: &RequestDescriptor,
        page: u32,
        page_size: u32,
    ) -> AppResult<Page> {
        let params = Self::list_params(descriptor, page, page_size);
        let response: ListResponse<GameData> = self.get_json("games", &params).await?;
        Ok(response.into_page())
    }

    async fn get_game_detail(&self, id: GameId) -> AppResult<GameDetail> {
        let data: GameDetailData = self.get_json(&format!("games/{}", id), &Vec::new()).await?;
        Ok(data.into())
    }

    async fn get_game_screenshots(&self, id: GameId) -> AppResult<Vec<Screenshot>> {
        let response: ListResponse<ScreenshotData> = self
            .get_json(&format!("games/{}/screenshots", id), &Vec::new())
            .await?;
        Ok(response.into_items())
    }

    async fn get_game_trailers(&self, id: GameId) -> AppResult<Vec<Trailer>> {
        let response: ListResponse<MovieData> = self
            .get_json(&format!("games/{}/movies", id), &Vec::new())
            .await?;
        Ok(response.into_items())
    }

    async fn list_trending_games(&self) -> AppResult<Vec<Game>> {
        let window = DateWindow::trending(Utc::now().date_naive());
        let params = self.curated_params(window, SortOrder::AddedDesc);
        let response: ListResponse<GameData> = self.get_json("games", &params).await?;
        Ok(response.into_items())
    }

    async fn list_upcoming_games(&self) -> AppResult<Vec<Game>> {
        let window = DateWindow::upcoming(Utc::now().date_naive());
        let params = self.curated_params(window, SortOrder::ReleasedAsc);
        let response: ListResponse<GameData> = self.get_json("games", &params).await?;
        Ok(response.into_items())
    }

    async fn list_genres(&self) -> AppResult<Vec<Facet>> {
        let response: ListResponse<FacetData> = self.get_json("genres", &Vec::new()).await?;
        Ok(response.into_items())
    }

    async fn list_platforms(&self) -> AppResult<Vec<Facet>> {
        let response: ListResponse<FacetData> = self.get_json("platforms", &Vec::new()).await?;
        Ok(response.into_items())
    }
}

// src/integrations/rawg/wire.rs
//
// Response shapes of the metadata service and their mapping to domain
// types. Nothing outside this module sees these structs.

use serde::Deserialize;

use crate::domain::{Facet, Game, GameDetail, Page, Screenshot, Trailer};

/// Paginated list envelope shared by every list endpoint
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct ListResponse<T> {
    /// URL of the next page, null on the last one
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FacetData {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// Platforms are nested one level deeper in game payloads
#[derive(Debug, Deserialize)]
pub(crate) struct PlatformEntry {
    pub platform: FacetData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GameData {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub background_image: Option<String>,
    pub rating: Option<f64>,
    pub metacritic: Option<u32>,
    pub released: Option<String>,
    pub platforms: Option<Vec<PlatformEntry>>,
    pub genres: Option<Vec<FacetData>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamedData {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GameDetailData {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub description_raw: Option<String>,
    pub website: Option<String>,
    pub background_image: Option<String>,
    pub rating: Option<f64>,
    pub metacritic: Option<u32>,
    pub playtime: Option<u32>,
    pub released: Option<String>,
    pub esrb_rating: Option<NamedData>,
    pub developers: Option<Vec<NamedData>>,
    pub publishers: Option<Vec<NamedData>>,
    pub platforms: Option<Vec<PlatformEntry>>,
    pub genres: Option<Vec<FacetData>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScreenshotData {
    pub id: i64,
    pub image: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MovieSources {
    #[serde(rename = "480")]
    pub low: Option<String>,
    pub max: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MovieData {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub preview: Option<String>,
    #[serde(default)]
    pub data: MovieSources,
}

impl From<FacetData> for Facet {
    fn from(data: FacetData) -> Self {
        Facet {
            id: data.id,
            name: data.name,
            slug: data.slug,
        }
    }
}

fn platforms(entries: Option<Vec<PlatformEntry>>) -> Vec<Facet> {
    entries
        .unwrap_or_default()
        .into_iter()
        .map(|entry| entry.platform.into())
        .collect()
}

fn facets(entries: Option<Vec<FacetData>>) -> Vec<Facet> {
    entries
        .unwrap_or_default()
        .into_iter()
        .map(Facet::from)
        .collect()
}

fn names(entries: Option<Vec<NamedData>>) -> Vec<String> {
    entries
        .unwrap_or_default()
        .into_iter()
        .map(|entry| entry.name)
        .filter(|name| !name.is_empty())
        .collect()
}

impl From<GameData> for Game {
    fn from(data: GameData) -> Self {
        Game {
            id: data.id,
            name: data.name,
            slug: data.slug,
            background_image: data.background_image,
            rating: data.rating,
            metacritic: data.metacritic,
            released: data.released,
            platforms: platforms(data.platforms),
            genres: facets(data.genres),
        }
    }
}

impl From<GameDetailData> for GameDetail {
    fn from(data: GameDetailData) -> Self {
        GameDetail {
            id: data.id,
            name: data.name,
            description: data.description_raw.filter(|d| !d.trim().is_empty()),
            website: data.website.filter(|w| !w.trim().is_empty()),
            background_image: data.background_image,
            rating: data.rating,
            metacritic: data.metacritic,
            playtime_hours: data.playtime,
            released: data.released,
            esrb_rating: data.esrb_rating.map(|r| r.name).filter(|n| !n.is_empty()),
            developers: names(data.developers),
            publishers: names(data.publishers),
            platforms: platforms(data.platforms),
            genres: facets(data.genres),
        }
    }
}

impl From<ScreenshotData> for Screenshot {
    fn from(data: ScreenshotData) -> Self {
        Screenshot {
            id: data.id,
            image: data.image,
            width: data.width,
            height: data.height,
        }
    }
}

impl From<MovieData> for Trailer {
    fn from(data: MovieData) -> Self {
        Trailer {
            id: data.id,
            name: data.name,
            preview: data.preview,
            video_480: data.data.low,
            video_max: data.data.max,
        }
    }
}

impl ListResponse<GameData> {
    pub(crate) fn into_page(self) -> Page {
        Page {
            has_next: self.next.is_some(),
            items: self.results.into_iter().map(Game::from).collect(),
        }
    }
}

impl<T> ListResponse<T> {
    pub(crate) fn into_items<U: From<T>>(self) -> Vec<U> {
        self.results.into_iter().map(U::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAMES_PAGE: &str = r#"{
        "count": 2,
        "next": "https://api.rawg.io/api/games?page=2",
        "previous": null,
        "results": [
            {
                "id": 3498,
                "slug": "grand-theft-auto-v",
                "name": "Grand Theft Auto V",
                "released": "2013-09-17",
                "background_image": "https://media.rawg.io/gta5.jpg",
                "rating": 4.47,
                "metacritic": 92,
                "platforms": [{"platform": {"id": 4, "name": "PC", "slug": "pc"}}],
                "genres": [{"id": 4, "name": "Action", "slug": "action"}]
            },
            {
                "id": 1,
                "slug": "unreleased",
                "name": "Unreleased",
                "released": null,
                "background_image": null,
                "rating": 0,
                "metacritic": null,
                "platforms": null,
                "genres": []
            }
        ]
    }"#;

    #[test]
    fn test_games_page_maps_to_domain() {
        let response: ListResponse<GameData> = serde_json::from_str(GAMES_PAGE).unwrap();
        let page = response.into_page();

        assert!(page.has_next);
        assert_eq!(page.items.len(), 2);

        let gta = &page.items[0];
        assert_eq!(gta.id, 3498);
        assert_eq!(gta.platform_names(), vec!["PC"]);
        assert_eq!(gta.genre_names(), vec!["Action"]);
        assert_eq!(gta.metacritic, Some(92));

        let unreleased = &page.items[1];
        assert!(unreleased.platforms.is_empty());
        assert!(unreleased.released.is_none());
    }

    #[test]
    fn test_last_page_has_no_next() {
        let response: ListResponse<GameData> =
            serde_json::from_str(r#"{"count": 0, "next": null, "results": []}"#).unwrap();
        let page = response.into_page();
        assert!(!page.has_next);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_envelope_without_results_is_empty() {
        let response: ListResponse<FacetData> = serde_json::from_str(r#"{"count": 0}"#).unwrap();
        assert!(response.next.is_none());
        assert!(response.into_items::<Facet>().is_empty());
    }

    #[test]
    fn test_detail_maps_optional_sections() {
        let raw = r#"{
            "id": 3498,
            "name": "Grand Theft Auto V",
            "description_raw": "Rockstar Games went bigger.",
            "website": "",
            "playtime": 74,
            "esrb_rating": {"id": 4, "name": "Mature", "slug": "mature"},
            "developers": [{"id": 1, "name": "Rockstar North"}],
            "publishers": null,
            "platforms": [{"platform": {"id": 18, "name": "PlayStation 4", "slug": "playstation4"}}],
            "genres": null
        }"#;

        let detail: GameDetail = serde_json::from_str::<GameDetailData>(raw).unwrap().into();
        assert_eq!(detail.description.as_deref(), Some("Rockstar Games went bigger."));
        assert_eq!(detail.website, None);
        assert_eq!(detail.playtime_hours, Some(74));
        assert_eq!(detail.esrb_rating.as_deref(), Some("Mature"));
        assert_eq!(detail.developers, vec!["Rockstar North".to_string()]);
        assert!(detail.publishers.is_empty());
        assert_eq!(detail.platforms[0].name, "PlayStation 4");
        assert!(detail.genres.is_empty());
    }

    #[test]
    fn test_movies_map_to_trailers() {
        let raw = r#"{
            "count": 1,
            "next": null,
            "results": [{
                "id": 16432,
                "name": "GTA Online: Smuggler's Run Trailer",
                "preview": "https://media.rawg.io/preview.jpg",
                "data": {"480": "https://steamcdn/480.mp4", "max": "https://steamcdn/max.mp4"}
            }]
        }"#;

        let response: ListResponse<MovieData> = serde_json::from_str(raw).unwrap();
        let trailers: Vec<Trailer> = response.into_items();
        assert_eq!(trailers.len(), 1);
        assert_eq!(trailers[0].video_480.as_deref(), Some("https://steamcdn/480.mp4"));
        assert_eq!(trailers[0].best_source(), Some("https://steamcdn/max.mp4"));
    }
}

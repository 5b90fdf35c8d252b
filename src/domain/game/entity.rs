use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the metadata service
pub type GameId = i64;

/// Image shown when a game has no cover art
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder-cover.png";

/// A named reference to a genre or platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// A game as it appears in list results
///
/// Fields are taken as returned by the service. Nothing here is
/// normalized; optional fields are only null-guarded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub slug: String,
    pub background_image: Option<String>,
    pub rating: Option<f64>,
    pub metacritic: Option<u32>,
    /// Release date as `YYYY-MM-DD`
    pub released: Option<String>,
    pub platforms: Vec<Facet>,
    pub genres: Vec<Facet>,
}

impl Game {
    pub fn new(id: GameId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: String::new(),
            background_image: None,
            rating: None,
            metacritic: None,
            released: None,
            platforms: Vec::new(),
            genres: Vec::new(),
        }
    }

    /// Cover image, falling back to the placeholder
    pub fn image_or_placeholder(&self) -> &str {
        match self.background_image.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => PLACEHOLDER_IMAGE,
        }
    }

    /// Critic score rendered for a badge; `None` hides the badge
    pub fn score_label(&self) -> Option<String> {
        self.metacritic.map(|score| score.to_string())
    }

    /// User rating rendered with one decimal, e.g. `4.4`
    pub fn rating_label(&self) -> Option<String> {
        self.rating
            .filter(|rating| *rating > 0.0)
            .map(|rating| format!("{:.1}", rating))
    }

    pub fn release_date(&self) -> Option<NaiveDate> {
        self.released
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    }

    pub fn release_year(&self) -> Option<i32> {
        self.release_date().map(|date| date.year())
    }

    pub fn platform_names(&self) -> Vec<&str> {
        self.platforms.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }
}

/// Extended metadata shown on the detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDetail {
    pub id: GameId,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub background_image: Option<String>,
    pub rating: Option<f64>,
    pub metacritic: Option<u32>,
    pub playtime_hours: Option<u32>,
    pub released: Option<String>,
    pub esrb_rating: Option<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub platforms: Vec<Facet>,
    pub genres: Vec<Facet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    pub id: i64,
    pub image: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailer {
    pub id: i64,
    pub name: String,
    pub preview: Option<String>,
    pub video_480: Option<String>,
    pub video_max: Option<String>,
}

impl Trailer {
    /// Best available video source
    pub fn best_source(&self) -> Option<&str> {
        self.video_max.as_deref().or(self.video_480.as_deref())
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

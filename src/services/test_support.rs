// src/services/test_support.rs
//
// Scripted catalog for service tests
//
// Responses are queued per call site. A call can be held open with a
// gate until the test releases it, which is how overlapping fetches are
// reproduced deterministically.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::domain::{Facet, Game, GameDetail, GameId, Page, RequestDescriptor, Screenshot, Trailer};
use crate::error::{AppError, AppResult};
use crate::integrations::GameCatalog;

#[derive(Default)]
pub struct ScriptedCatalog {
    pages: Mutex<HashMap<(String, u32), VecDeque<AppResult<Page>>>>,
    details: Mutex<HashMap<GameId, GameDetail>>,
    failing_sections: Mutex<HashSet<(GameId, &'static str)>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for `query` page `page`
    pub fn push_page(&self, query: &str, page: u32, result: AppResult<Page>) {
        self.pages
            .lock()
            .unwrap()
            .entry((query.to_string(), page))
            .or_default()
            .push_back(result);
    }

    pub fn push_detail(&self, detail: GameDetail) {
        self.details.lock().unwrap().insert(detail.id, detail);
    }

    /// Make one detail section ("detail", "screenshots" or "trailers") fail
    pub fn fail_section(&self, id: GameId, section: &'static str) {
        self.failing_sections.lock().unwrap().insert((id, section));
    }

    /// Hold the next call with this key until the sender fires
    pub fn gate(&self, key: impl Into<String>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(key.into(), rx);
        tx
    }

    /// Keys of every call received so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn enter(&self, key: String) {
        self.calls.lock().unwrap().push(key.clone());
        let gate = self.gates.lock().unwrap().remove(&key);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }

    fn section(&self, id: GameId, section: &'static str) -> AppResult<()> {
        if self.failing_sections.lock().unwrap().contains(&(id, section)) {
            return Err(AppError::Transport(format!("{} unavailable", section)));
        }
        Ok(())
    }
}

#[async_trait]
impl GameCatalog for ScriptedCatalog {
    async fn list_games(
        &self,
        descriptor: &RequestDescriptor,
        page: u32,
        _page_size: u32,
    ) -> AppResult<Page> {
        self.enter(list_key(&descriptor.query, page)).await;
        self.pages
            .lock()
            .unwrap()
            .get_mut(&(descriptor.query.clone(), page))
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(AppError::Transport("unscripted page".to_string())))
    }

    async fn get_game_detail(&self, id: GameId) -> AppResult<GameDetail> {
        self.enter(format!("detail:{}", id)).await;
        self.section(id, "detail")?;
        self.details
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn get_game_screenshots(&self, id: GameId) -> AppResult<Vec<Screenshot>> {
        self.enter(format!("screenshots:{}", id)).await;
        self.section(id, "screenshots")?;
        Ok(vec![Screenshot {
            id: id * 10,
            image: format!("https://media.example/{}/shot.jpg", id),
            width: Some(1920),
            height: Some(1080),
        }])
    }

    async fn get_game_trailers(&self, id: GameId) -> AppResult<Vec<Trailer>> {
        self.enter(format!("trailers:{}", id)).await;
        self.section(id, "trailers")?;
        Ok(vec![Trailer {
            id: id * 100,
            name: "Launch trailer".to_string(),
            preview: None,
            video_480: Some(format!("https://media.example/{}/480.mp4", id)),
            video_max: None,
        }])
    }

    async fn list_trending_games(&self) -> AppResult<Vec<Game>> {
        self.enter("trending".to_string()).await;
        Ok(games(1, 3))
    }

    async fn list_upcoming_games(&self) -> AppResult<Vec<Game>> {
        self.enter("upcoming".to_string()).await;
        Ok(games(100, 2))
    }

    async fn list_genres(&self) -> AppResult<Vec<Facet>> {
        self.enter("genres".to_string()).await;
        Ok(vec![facet(4, "Action")])
    }

    async fn list_platforms(&self) -> AppResult<Vec<Facet>> {
        self.enter("platforms".to_string()).await;
        Ok(vec![facet(187, "PlayStation 5")])
    }
}

pub fn list_key(query: &str, page: u32) -> String {
    format!("list:{}:{}", query, page)
}

/// `count` games with consecutive ids starting at `first_id`
pub fn games(first_id: GameId, count: usize) -> Vec<Game> {
    (0..count as i64)
        .map(|offset| {
            let id = first_id + offset;
            Game::new(id, format!("Game {}", id))
        })
        .collect()
}

pub fn facet(id: i64, name: &str) -> Facet {
    Facet {
        id,
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
    }
}

pub fn detail(id: GameId, name: &str) -> GameDetail {
    GameDetail {
        id,
        name: name.to_string(),
        description: Some(format!("<p>{}</p>", name)),
        website: None,
        background_image: None,
        rating: Some(4.2),
        metacritic: Some(88),
        playtime_hours: Some(12),
        released: Some("2020-01-01".to_string()),
        esrb_rating: None,
        developers: vec!["Studio".to_string()],
        publishers: vec![],
        platforms: vec![],
        genres: vec![],
    }
}

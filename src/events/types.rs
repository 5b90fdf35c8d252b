// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::GameId;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($name:ident) => {
        impl DomainEvent for $name {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { stringify!($name) }
        }
    };
}

// ============================================================================
// LIST LOADING EVENTS
// ============================================================================

/// Emitted when the list is emptied for a new or retried descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListReset {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub generation: u64,
    pub query: String,
}

impl ListReset {
    pub fn new(generation: u64, query: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            generation,
            query,
        }
    }
}

impl_domain_event!(ListReset);

/// Emitted when a page has been applied to the list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub generation: u64,
    pub page: u32,
    pub item_count: usize,
    pub has_more: bool,
}

impl PageLoaded {
    pub fn new(generation: u64, page: u32, item_count: usize, has_more: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            generation,
            page,
            item_count,
            has_more,
        }
    }
}

impl_domain_event!(PageLoaded);

/// Emitted when a page request fails for the current descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLoadFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub generation: u64,
    pub page: u32,
    pub message: String,
}

impl PageLoadFailed {
    pub fn new(generation: u64, page: u32, message: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            generation,
            page,
            message,
        }
    }
}

impl_domain_event!(PageLoadFailed);

/// Emitted when a response arrives for a superseded request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaleResponseDiscarded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub source: String, // "list" or "detail"
    pub stale_generation: u64,
    pub current_generation: u64,
}

impl StaleResponseDiscarded {
    pub fn new(source: &str, stale_generation: u64, current_generation: u64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            source: source.to_string(),
            stale_generation,
            current_generation,
        }
    }
}

impl_domain_event!(StaleResponseDiscarded);

// ============================================================================
// FAVORITES EVENTS
// ============================================================================

/// Emitted after a toggle has been persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteToggled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub game_id: GameId,
    pub is_favorite: bool,
}

impl FavoriteToggled {
    pub fn new(game_id: GameId, is_favorite: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            game_id,
            is_favorite,
        }
    }
}

impl_domain_event!(FavoriteToggled);

// ============================================================================
// DETAIL EVENTS
// ============================================================================

/// Emitted when a detail fetch group has been applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub game_id: GameId,
    pub failed_sections: usize,
}

impl DetailLoaded {
    pub fn new(game_id: GameId, failed_sections: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            game_id,
            failed_sections,
        }
    }
}

impl_domain_event!(DetailLoaded);

/// Emitted when the detail view is closed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailClosed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub game_id: Option<GameId>,
}

impl DetailClosed {
    pub fn new(game_id: Option<GameId>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            game_id,
        }
    }
}

impl_domain_event!(DetailClosed);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        assert_eq!(ListReset::new(1, "mario".to_string()).event_type(), "ListReset");
        assert_eq!(FavoriteToggled::new(3, true).event_type(), "FavoriteToggled");
        assert_eq!(
            StaleResponseDiscarded::new("detail", 1, 2).event_type(),
            "StaleResponseDiscarded"
        );
    }

    #[test]
    fn test_events_get_distinct_ids() {
        let a = PageLoaded::new(1, 1, 20, true);
        let b = PageLoaded::new(1, 1, 20, true);
        assert_ne!(a.event_id(), b.event_id());
    }
}

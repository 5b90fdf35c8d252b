// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is internal to the bus and must NOT be exported

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Detail
    DetailClosed,
    DetailLoaded,
    // Favorites
    FavoriteToggled,
    // List loading
    ListReset,
    PageLoadFailed,
    PageLoaded,
    StaleResponseDiscarded,
};

pub use bus::{EventBus, EventLogEntry};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}

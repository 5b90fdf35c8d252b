// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod browse_session;
pub mod catalog_service;
pub mod detail_loader;
pub mod favorites_service;
pub mod list_loader;
pub mod session_stats;
pub mod viewport_trigger;

#[cfg(test)]
pub(crate) mod test_support;

pub use browse_session::{BrowseSession, BrowseSnapshot};

pub use catalog_service::CatalogService;

pub use detail_loader::{DetailLoader, DetailView, SectionFailure};

pub use favorites_service::{FavoritesService, FAVORITES_KEY};

pub use list_loader::{ListLoader, LoadOutcome};

pub use session_stats::{SessionStats, SessionStatsSnapshot};

pub use viewport_trigger::ViewportTrigger;

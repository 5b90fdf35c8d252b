// src/lib.rs
// GameHub - Video game catalog and discovery core
//
// Architecture:
// - Domain-centric: query composition, pagination state and favorites
//   live in `domain` as plain values
// - Services own the mutable state and talk to the catalog through the
//   `GameCatalog` trait
// - Event-driven: services report what happened on the event bus
// - Application layer: DTOs and commands for the UI boundary

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod logging;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    Facet, FavoriteSet, Game, GameDetail, GameId, ListPhase, ListState, Page, RequestDescriptor,
    ScoreRange, Screenshot, SortOrder, Trailer,
};

// ============================================================================
// PUBLIC API - Errors, Config
// ============================================================================

pub use config::AppConfig;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, DetailClosed, DetailLoaded, DomainEvent, EventBus, EventLogEntry,
    FavoriteToggled, ListReset, PageLoadFailed, PageLoaded, StaleResponseDiscarded,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    BrowseSession, BrowseSnapshot, CatalogService, DetailLoader, DetailView, FavoritesService,
    ListLoader, LoadOutcome, SessionStats, SessionStatsSnapshot, ViewportTrigger,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{GameCatalog, RawgClient};

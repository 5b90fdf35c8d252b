// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod favorites;
pub mod game;
pub mod listing;
pub mod query;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Games as returned by the metadata service
pub use game::{Facet, Game, GameDetail, GameId, Screenshot, Trailer, PLACEHOLDER_IMAGE};

// Query composition
pub use query::{DateWindow, RequestDescriptor, ScoreRange, SortOrder};

// Pagination state
pub use listing::{validate_page_size, ListPhase, ListState, Page, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

// Favorites
pub use favorites::FavoriteSet;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;

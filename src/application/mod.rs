// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Provides the boundary between UI and services
// - Translates between DTOs and domain values
// - The Tauri shell (feature `desktop`) only wraps these commands

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

#[cfg(feature = "desktop")]
pub mod desktop;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;

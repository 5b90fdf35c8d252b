// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and Services
// - Commands accept DTOs, return DTOs
// - Errors reach the UI as serialized `ErrorResponse` strings
// - Commands NEVER contain business logic

pub mod browse_commands;
pub mod catalog_commands;
pub mod detail_commands;
pub mod favorite_commands;


pub use browse_commands::*;
pub use catalog_commands::*;
pub use detail_commands::*;
pub use favorite_commands::*;

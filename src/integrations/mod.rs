// src/integrations/mod.rs
//
// External Integrations Module

pub mod catalog;
pub mod rawg;

pub use catalog::GameCatalog;
pub use rawg::client::RawgClient;

#[cfg(test)]
pub use catalog::MockGameCatalog;

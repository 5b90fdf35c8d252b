//! Favorites invariants:
//!
//! 1. Mutated only through `toggle`
//! 2. Single writer, single in-memory copy
//! 3. Persisted form is a JSON array of integer ids

pub mod entity;

pub use entity::FavoriteSet;

pub mod entity;

pub use entity::{Facet, Game, GameDetail, GameId, Screenshot, Trailer, PLACEHOLDER_IMAGE};

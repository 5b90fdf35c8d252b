use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::game::GameId;
use crate::domain::{DomainError, DomainResult};

/// The user's favorite game identifiers
///
/// Kept ordered so the persisted JSON is canonical: toggling an id twice
/// writes back exactly the bytes that were there before.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: BTreeSet<GameId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the id if absent, removes it if present.
    /// Returns whether the id is a favorite afterwards.
    pub fn toggle(&mut self, id: GameId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: GameId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = GameId> + '_ {
        self.ids.iter().copied()
    }

    /// Encodes the set as a JSON array of ids
    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string(self)
            .map_err(|e| DomainError::InvalidValue(format!("Cannot encode favorites: {}", e)))
    }

    /// Decodes a JSON array of ids
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| DomainError::InvalidValue(format!("Malformed favorites value: {}", e)))
    }
}

impl FromIterator<GameId> for FavoriteSet {
    fn from_iter<T: IntoIterator<Item = GameId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = FavoriteSet::new();
        assert!(set.toggle(42));
        assert!(set.contains(42));
        assert!(!set.toggle(42));
        assert!(!set.contains(42));
    }

    #[test]
    fn test_json_is_a_plain_array() {
        let set: FavoriteSet = [30, 10, 20].into_iter().collect();
        assert_eq!(set.to_json().unwrap(), "[10,20,30]");
        assert_eq!(FavoriteSet::from_json("[3,1]").unwrap().ids().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(FavoriteSet::from_json("{\"a\":1}").is_err());
        assert!(FavoriteSet::from_json("[\"x\"]").is_err());
        assert!(FavoriteSet::from_json("").is_err());
    }
}

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ordering::{ScoreRange, SortOrder};

/// The search/filter/sort tuple that defines which list is shown
///
/// A descriptor is immutable once handed to the list loader. The
/// composer methods below consume `self` and return the next descriptor,
/// so every user edit produces a fresh value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    pub query: String,
    pub genre_ids: BTreeSet<String>,
    pub platform_ids: BTreeSet<String>,
    pub sort: SortOrder,
    pub score_range: Option<ScoreRange>,
}

impl RequestDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into().trim().to_string();
        self
    }

    /// Adds the genre if absent, removes it if present
    pub fn toggle_genre(mut self, genre_id: impl Into<String>) -> Self {
        toggle(&mut self.genre_ids, genre_id.into());
        self
    }

    /// Adds the platform if absent, removes it if present
    pub fn toggle_platform(mut self, platform_id: impl Into<String>) -> Self {
        toggle(&mut self.platform_ids, platform_id.into());
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_score_range(mut self, score_range: Option<ScoreRange>) -> Self {
        self.score_range = score_range;
        self
    }

    /// Drops every filter but keeps the search text
    pub fn clear_filters(mut self) -> Self {
        self.genre_ids.clear();
        self.platform_ids.clear();
        self.sort = SortOrder::Relevance;
        self.score_range = None;
        self
    }

    pub fn has_filters(&self) -> bool {
        !self.genre_ids.is_empty()
            || !self.platform_ids.is_empty()
            || self.sort != SortOrder::Relevance
            || self.score_range.is_some()
    }

    /// Query parameters for the list endpoint, without paging
    ///
    /// Empty strings and empty sets are omitted, never sent empty.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if !self.query.is_empty() {
            params.push(("search", self.query.clone()));
        }
        if let Some(genres) = join_ids(&self.genre_ids) {
            params.push(("genres", genres));
        }
        if let Some(platforms) = join_ids(&self.platform_ids) {
            params.push(("platforms", platforms));
        }
        if let Some(ordering) = self.sort.token() {
            params.push(("ordering", ordering.to_string()));
        }
        if let Some(range) = self.score_range {
            params.push(("metacritic", range.token()));
        }

        params
    }
}

fn toggle(set: &mut BTreeSet<String>, value: String) {
    let value = value.trim().to_string();
    if value.is_empty() {
        return;
    }
    if !set.remove(&value) {
        set.insert(value);
    }
}

fn join_ids(ids: &BTreeSet<String>) -> Option<String> {
    let joined = ids
        .iter()
        .filter(|id| !id.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",");
    (!joined.is_empty()).then_some(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_descriptor_sends_nothing() {
        assert!(RequestDescriptor::new().to_query_params().is_empty());
        assert!(RequestDescriptor::new().with_query("   ").to_query_params().is_empty());
    }

    #[test]
    fn test_full_descriptor_params() {
        let descriptor = RequestDescriptor::new()
            .with_query("mario")
            .toggle_genre("4")
            .toggle_genre("51")
            .toggle_platform("7")
            .with_sort(SortOrder::MetacriticDesc)
            .with_score_range(Some(ScoreRange::Outstanding));

        assert_eq!(
            descriptor.to_query_params(),
            vec![
                ("search", "mario".to_string()),
                ("genres", "4,51".to_string()),
                ("platforms", "7".to_string()),
                ("ordering", "-metacritic".to_string()),
                ("metacritic", "80,100".to_string()),
            ]
        );
    }

    #[test]
    fn test_toggle_twice_removes_filter() {
        let descriptor = RequestDescriptor::new().toggle_genre("4").toggle_genre("4");
        assert!(descriptor.genre_ids.is_empty());
        assert!(!descriptor.has_filters());
    }

    #[test]
    fn test_clear_filters_keeps_query() {
        let descriptor = RequestDescriptor::new()
            .with_query("zelda")
            .toggle_platform("7")
            .with_sort(SortOrder::NameAsc)
            .clear_filters();

        assert_eq!(descriptor.query, "zelda");
        assert!(!descriptor.has_filters());
    }
}

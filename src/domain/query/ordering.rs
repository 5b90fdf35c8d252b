use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Sort order accepted by the `ordering` query parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Service default; no `ordering` parameter is sent
    #[default]
    Relevance,
    RatingDesc,
    ReleasedDesc,
    ReleasedAsc,
    AddedDesc,
    NameAsc,
    NameDesc,
    MetacriticDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 8] = [
        SortOrder::Relevance,
        SortOrder::RatingDesc,
        SortOrder::ReleasedDesc,
        SortOrder::ReleasedAsc,
        SortOrder::AddedDesc,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
        SortOrder::MetacriticDesc,
    ];

    /// Wire token, `None` for relevance
    pub fn token(&self) -> Option<&'static str> {
        match self {
            SortOrder::Relevance => None,
            SortOrder::RatingDesc => Some("-rating"),
            SortOrder::ReleasedDesc => Some("-released"),
            SortOrder::ReleasedAsc => Some("released"),
            SortOrder::AddedDesc => Some("-added"),
            SortOrder::NameAsc => Some("name"),
            SortOrder::NameDesc => Some("-name"),
            SortOrder::MetacriticDesc => Some("-metacritic"),
        }
    }

    /// Parse a wire token; empty and `relevance` both mean the default
    pub fn from_token(token: &str) -> DomainResult<Self> {
        let token = token.trim();
        if token.is_empty() || token == "relevance" {
            return Ok(SortOrder::Relevance);
        }
        Self::ALL
            .into_iter()
            .find(|order| order.token() == Some(token))
            .ok_or_else(|| DomainError::InvalidValue(format!("Unknown sort order '{}'", token)))
    }
}

/// Critic score band accepted by the `metacritic` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRange {
    Outstanding,
    Good,
    Mixed,
    Weak,
}

impl ScoreRange {
    pub const ALL: [ScoreRange; 4] = [
        ScoreRange::Outstanding,
        ScoreRange::Good,
        ScoreRange::Mixed,
        ScoreRange::Weak,
    ];

    pub fn bounds(&self) -> (u32, u32) {
        match self {
            ScoreRange::Outstanding => (80, 100),
            ScoreRange::Good => (70, 79),
            ScoreRange::Mixed => (60, 69),
            ScoreRange::Weak => (50, 59),
        }
    }

    /// Wire token, e.g. `80,100`
    pub fn token(&self) -> String {
        let (low, high) = self.bounds();
        format!("{},{}", low, high)
    }

    /// Parse `80,100` (or `80-100`); an empty token means no band
    pub fn from_token(token: &str) -> DomainResult<Option<Self>> {
        let token = token.trim();
        if token.is_empty() {
            return Ok(None);
        }
        let normalized = token.replace('-', ",");
        Self::ALL
            .into_iter()
            .find(|range| range.token() == normalized)
            .map(Some)
            .ok_or_else(|| DomainError::InvalidValue(format!("Unknown score range '{}'", token)))
    }

    pub fn contains(&self, score: u32) -> bool {
        let (low, high) = self.bounds();
        (low..=high).contains(&score)
    }
}

/// Inclusive release/added date window for curated lists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Games added during the trailing 30 days
    pub fn trending(today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(30),
            end: today,
        }
    }

    /// Games releasing between today and one year out
    pub fn upcoming(today: NaiveDate) -> Self {
        let end = today
            .checked_add_months(Months::new(12))
            .unwrap_or(today + Duration::days(365));
        Self { start: today, end }
    }

    /// Wire token for the `dates` parameter
    pub fn token(&self) -> String {
        format!(
            "{},{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_tokens_parse_back() {
        for order in SortOrder::ALL {
            let token = order.token().unwrap_or("relevance");
            assert_eq!(SortOrder::from_token(token).unwrap(), order);
        }
        assert_eq!(SortOrder::from_token("").unwrap(), SortOrder::Relevance);
        assert!(SortOrder::from_token("-popularity").is_err());
    }

    #[test]
    fn test_score_range_tokens() {
        assert_eq!(ScoreRange::Outstanding.token(), "80,100");
        assert_eq!(ScoreRange::Weak.token(), "50,59");
        assert_eq!(ScoreRange::from_token("70-79").unwrap(), Some(ScoreRange::Good));
        assert_eq!(ScoreRange::from_token("").unwrap(), None);
        assert!(ScoreRange::from_token("0,49").is_err());
        assert!(ScoreRange::Mixed.contains(65));
        assert!(!ScoreRange::Mixed.contains(70));
    }

    #[test]
    fn test_trending_window_is_trailing_thirty_days() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(DateWindow::trending(today).token(), "2024-02-14,2024-03-15");
    }

    #[test]
    fn test_upcoming_window_handles_leap_day() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let window = DateWindow::upcoming(today);
        assert_eq!(window.start, today);
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
    }
}

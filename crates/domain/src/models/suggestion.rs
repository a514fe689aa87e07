//! Suggestion box domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Processing status of a suggestion.
///
/// Unknown statuses are carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SuggestionStatus {
    Open,
    Planned,
    Done,
    Rejected,
    Other(String),
}

impl SuggestionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SuggestionStatus::Open => "open",
            SuggestionStatus::Planned => "planned",
            SuggestionStatus::Done => "done",
            SuggestionStatus::Rejected => "rejected",
            SuggestionStatus::Other(raw) => raw,
        }
    }

    /// Returns true if the suggestion can still receive votes.
    pub fn accepts_votes(&self) -> bool {
        matches!(self, SuggestionStatus::Open | SuggestionStatus::Planned)
    }
}

impl From<String> for SuggestionStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "open" => SuggestionStatus::Open,
            "planned" => SuggestionStatus::Planned,
            "done" => SuggestionStatus::Done,
            "rejected" => SuggestionStatus::Rejected,
            _ => SuggestionStatus::Other(raw),
        }
    }
}

impl From<SuggestionStatus> for String {
    fn from(status: SuggestionStatus) -> Self {
        match status {
            SuggestionStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Vote direction of the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Up => "up",
            Vote::Down => "down",
        }
    }
}

impl FromStr for Vote {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Vote::Up),
            "down" => Ok(Vote::Down),
            _ => Err(format!("Invalid vote direction: {}", s)),
        }
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Suggestion as used by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub author_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub status: SuggestionStatus,
    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
    pub comment_count: i64,
    pub user_vote: Option<Vote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Suggestion fields submitted by a create or edit form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PartialSuggestion {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: Option<String>,

    #[validate(length(max = 5000, message = "Description must be at most 5000 characters"))]
    pub description: Option<String>,

    pub status: Option<SuggestionStatus>,
}

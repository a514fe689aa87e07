//! Suggestion records and their mapping to the domain model.

use chrono::{DateTime, Utc};
use domain::models::{PartialSuggestion, Suggestion, SuggestionStatus, Vote};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::id_to_string;

use crate::collection::map_collection;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::envelope::decode_api_data;
use crate::error::MappingError;

/// Suggestion record as sent by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendSuggestion {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub author_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub downvotes: i64,
    #[serde(default)]
    pub comment_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_vote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial suggestion body for create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Vote request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotePayload {
    pub direction: Vote,
}

fn parse_user_vote(suggestion_id: i64, raw: Option<String>) -> Option<Vote> {
    let raw = raw?;
    match raw.parse::<Vote>() {
        Ok(vote) => Some(vote),
        Err(e) => {
            tracing::warn!(suggestion_id, error = %e, "Ignoring unknown user vote");
            None
        }
    }
}

impl From<BackendSuggestion> for Suggestion {
    fn from(backend: BackendSuggestion) -> Self {
        let user_vote = parse_user_vote(backend.id, backend.user_vote);

        Self {
            id: id_to_string(backend.id),
            title: backend.title,
            description: backend.description,
            author_id: id_to_string(backend.author_id),
            author_name: backend.author_name,
            status: SuggestionStatus::from(backend.status),
            score: backend.score,
            upvotes: backend.upvotes,
            downvotes: backend.downvotes,
            comment_count: backend.comment_count,
            user_vote,
            created_at: backend.created_at,
            updated_at: backend.updated_at,
        }
    }
}

/// Maps one backend suggestion record.
pub fn map_suggestion_response(backend: BackendSuggestion) -> Suggestion {
    Suggestion::from(backend)
}

/// Maps an untyped suggestion list response, logging shape mismatches.
pub fn map_suggestions_response(value: &Value) -> Vec<Suggestion> {
    map_suggestions_response_with(value, &TracingSink)
}

/// Maps an untyped suggestion list response, reporting to `sink`.
pub fn map_suggestions_response_with(
    value: &Value,
    sink: &dyn DiagnosticSink,
) -> Vec<Suggestion> {
    map_collection(value, "backendSuggestions", sink, map_suggestion_response)
}

/// Unwraps and maps a single suggestion response.
pub fn map_single_suggestion_response(value: Value) -> Result<Suggestion, MappingError> {
    decode_api_data::<BackendSuggestion>(value, "suggestion").map(Suggestion::from)
}

/// Converts a partial suggestion edit into a backend request body.
pub fn prepare_suggestion_for_backend(suggestion: &PartialSuggestion) -> SuggestionPayload {
    SuggestionPayload {
        title: suggestion.title.clone(),
        description: suggestion.description.clone(),
        status: suggestion.status.clone().map(String::from),
    }
}

use domain::models::{PartialSuggestion, Suggestion, Vote};
use shared::QueryFilter;
use wire::records::{
    map_single_suggestion_response, map_suggestions_response, prepare_suggestion_for_backend,
    VotePayload,
};
use wire::try_extract_api_data;

use crate::client::{resource_path, to_body, validated, OgsClient};
use crate::error::ApiError;
use crate::filters::SuggestionFilters;

pub const SUGGESTIONS_PATH: &str = "/api/suggestions";

impl OgsClient {
    pub async fn list_suggestions(
        &self,
        filters: &SuggestionFilters,
    ) -> Result<Vec<Suggestion>, ApiError> {
        let response = self
            .transport()
            .get(SUGGESTIONS_PATH, &filters.to_query_string())
            .await?;
        Ok(map_suggestions_response(&try_extract_api_data(response)?))
    }

    pub async fn get_suggestion(&self, id: &str) -> Result<Suggestion, ApiError> {
        let path = resource_path(SUGGESTIONS_PATH, id)?;
        let response = self.transport().get(&path, "").await?;
        Ok(map_single_suggestion_response(response)?)
    }

    pub async fn create_suggestion(
        &self,
        suggestion: &PartialSuggestion,
    ) -> Result<Suggestion, ApiError> {
        let payload = prepare_suggestion_for_backend(validated(suggestion)?);
        let response = self
            .transport()
            .post(SUGGESTIONS_PATH, to_body(&payload)?)
            .await?;
        Ok(map_single_suggestion_response(response)?)
    }

    pub async fn update_suggestion(
        &self,
        id: &str,
        suggestion: &PartialSuggestion,
    ) -> Result<Suggestion, ApiError> {
        let path = resource_path(SUGGESTIONS_PATH, id)?;
        let payload = prepare_suggestion_for_backend(validated(suggestion)?);
        let response = self.transport().put(&path, to_body(&payload)?).await?;
        Ok(map_single_suggestion_response(response)?)
    }

    pub async fn delete_suggestion(&self, id: &str) -> Result<(), ApiError> {
        let path = resource_path(SUGGESTIONS_PATH, id)?;
        try_extract_api_data(self.transport().delete(&path).await?)?;
        Ok(())
    }

    /// Casts or changes the current user's vote and returns the updated tally.
    pub async fn vote_suggestion(&self, id: &str, direction: Vote) -> Result<Suggestion, ApiError> {
        let path = format!("{}/vote", resource_path(SUGGESTIONS_PATH, id)?);
        let response = self
            .transport()
            .post(&path, to_body(&VotePayload { direction })?)
            .await?;

        tracing::debug!(suggestion_id = %id, direction = %direction, "Vote recorded");
        Ok(map_single_suggestion_response(response)?)
    }

    /// Withdraws the current user's vote.
    pub async fn remove_vote(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("{}/vote", resource_path(SUGGESTIONS_PATH, id)?);
        try_extract_api_data(self.transport().delete(&path).await?)?;
        Ok(())
    }
}

use domain::models::{CombinedGroup, PartialCombinedGroup};
use shared::QueryFilter;
use wire::records::{
    map_combined_groups_response, map_single_combined_group_response,
    prepare_combined_group_for_backend,
};
use wire::try_extract_api_data;

use crate::client::{resource_path, to_body, validated, OgsClient};
use crate::error::ApiError;
use crate::filters::CombinedGroupFilters;

pub const COMBINED_GROUPS_PATH: &str = "/api/combined-groups";

impl OgsClient {
    pub async fn list_combined_groups(
        &self,
        filters: &CombinedGroupFilters,
    ) -> Result<Vec<CombinedGroup>, ApiError> {
        let response = self
            .transport()
            .get(COMBINED_GROUPS_PATH, &filters.to_query_string())
            .await?;
        Ok(map_combined_groups_response(&try_extract_api_data(response)?))
    }

    pub async fn get_combined_group(&self, id: &str) -> Result<CombinedGroup, ApiError> {
        let path = resource_path(COMBINED_GROUPS_PATH, id)?;
        let response = self.transport().get(&path, "").await?;
        Ok(map_single_combined_group_response(response)?)
    }

    pub async fn create_combined_group(
        &self,
        combined: &PartialCombinedGroup,
    ) -> Result<CombinedGroup, ApiError> {
        let payload = prepare_combined_group_for_backend(validated(combined)?)?;
        let response = self
            .transport()
            .post(COMBINED_GROUPS_PATH, to_body(&payload)?)
            .await?;
        let created = map_single_combined_group_response(response)?;

        tracing::info!(
            combined_group_id = %created.id,
            access_policy = %created.access_policy,
            "Combined group created"
        );
        Ok(created)
    }

    pub async fn update_combined_group(
        &self,
        id: &str,
        combined: &PartialCombinedGroup,
    ) -> Result<CombinedGroup, ApiError> {
        let path = resource_path(COMBINED_GROUPS_PATH, id)?;
        let payload = prepare_combined_group_for_backend(validated(combined)?)?;
        let response = self.transport().put(&path, to_body(&payload)?).await?;
        Ok(map_single_combined_group_response(response)?)
    }

    pub async fn delete_combined_group(&self, id: &str) -> Result<(), ApiError> {
        let path = resource_path(COMBINED_GROUPS_PATH, id)?;
        try_extract_api_data(self.transport().delete(&path).await?)?;
        Ok(())
    }
}

use domain::models::{Group, PartialGroup, StudentForGroup};
use shared::QueryFilter;
use wire::records::{
    map_groups_response, map_single_group_response, map_students_for_group_response,
    prepare_group_for_backend,
};
use wire::{try_extract_api_data, TracingSink};

use crate::client::{resource_path, to_body, validated, OgsClient};
use crate::error::ApiError;
use crate::filters::GroupFilters;

pub const GROUPS_PATH: &str = "/api/groups";

impl OgsClient {
    pub async fn list_groups(&self, filters: &GroupFilters) -> Result<Vec<Group>, ApiError> {
        let response = self
            .transport()
            .get(GROUPS_PATH, &filters.to_query_string())
            .await?;
        Ok(map_groups_response(&try_extract_api_data(response)?))
    }

    pub async fn get_group(&self, id: &str) -> Result<Group, ApiError> {
        let path = resource_path(GROUPS_PATH, id)?;
        let response = self.transport().get(&path, "").await?;
        Ok(map_single_group_response(response)?)
    }

    pub async fn create_group(&self, group: &PartialGroup) -> Result<Group, ApiError> {
        let payload = prepare_group_for_backend(validated(group)?)?;
        let response = self.transport().post(GROUPS_PATH, to_body(&payload)?).await?;
        let created = map_single_group_response(response)?;

        tracing::info!(group_id = %created.id, name = %created.name, "Group created");
        Ok(created)
    }

    pub async fn update_group(&self, id: &str, group: &PartialGroup) -> Result<Group, ApiError> {
        let path = resource_path(GROUPS_PATH, id)?;
        let payload = prepare_group_for_backend(validated(group)?)?;
        let response = self.transport().put(&path, to_body(&payload)?).await?;
        Ok(map_single_group_response(response)?)
    }

    pub async fn delete_group(&self, id: &str) -> Result<(), ApiError> {
        let path = resource_path(GROUPS_PATH, id)?;
        let response = self.transport().delete(&path).await?;
        try_extract_api_data(response)?;

        tracing::info!(group_id = %id, "Group deleted");
        Ok(())
    }

    /// Students currently assigned to a group.
    pub async fn get_group_students(&self, id: &str) -> Result<Vec<StudentForGroup>, ApiError> {
        let path = format!("{}/students", resource_path(GROUPS_PATH, id)?);
        let response = self.transport().get(&path, "").await?;
        Ok(map_students_for_group_response(
            &try_extract_api_data(response)?,
            &TracingSink,
        ))
    }
}

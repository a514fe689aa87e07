use domain::models::{PartialRoom, Room};
use shared::QueryFilter;
use wire::records::{map_rooms_response, map_single_room_response, prepare_room_for_backend};
use wire::try_extract_api_data;

use crate::client::{resource_path, to_body, validated, OgsClient};
use crate::error::ApiError;
use crate::filters::RoomFilters;

pub const ROOMS_PATH: &str = "/api/rooms";

impl OgsClient {
    pub async fn list_rooms(&self, filters: &RoomFilters) -> Result<Vec<Room>, ApiError> {
        let response = self
            .transport()
            .get(ROOMS_PATH, &filters.to_query_string())
            .await?;
        Ok(map_rooms_response(&try_extract_api_data(response)?))
    }

    pub async fn get_room(&self, id: &str) -> Result<Room, ApiError> {
        let path = resource_path(ROOMS_PATH, id)?;
        let response = self.transport().get(&path, "").await?;
        Ok(map_single_room_response(response)?)
    }

    pub async fn create_room(&self, room: &PartialRoom) -> Result<Room, ApiError> {
        let payload = prepare_room_for_backend(validated(room)?)?;
        let response = self.transport().post(ROOMS_PATH, to_body(&payload)?).await?;
        Ok(map_single_room_response(response)?)
    }

    pub async fn update_room(&self, id: &str, room: &PartialRoom) -> Result<Room, ApiError> {
        let path = resource_path(ROOMS_PATH, id)?;
        let payload = prepare_room_for_backend(validated(room)?)?;
        let response = self.transport().put(&path, to_body(&payload)?).await?;
        Ok(map_single_room_response(response)?)
    }

    pub async fn delete_room(&self, id: &str) -> Result<(), ApiError> {
        let path = resource_path(ROOMS_PATH, id)?;
        try_extract_api_data(self.transport().delete(&path).await?)?;
        Ok(())
    }
}

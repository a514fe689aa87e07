//! Room records and their mapping to the domain model.

use chrono::{DateTime, Utc};
use domain::models::{PartialRoom, Room};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{id_to_string, parse_optional_id};

use super::staff::non_blank;
use crate::collection::map_collection;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::envelope::decode_api_data;
use crate::error::MappingError;

/// Room record as sent by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendRoom {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Occupancy endpoints name the room `room_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_occupied: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial room body for create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<i64>,
}

impl From<BackendRoom> for Room {
    fn from(backend: BackendRoom) -> Self {
        let name = non_blank(&backend.name)
            .or_else(|| non_blank(&backend.room_name))
            .unwrap_or_default()
            .to_string();

        Self {
            id: id_to_string(backend.id),
            name,
            building: backend.building,
            floor: backend.floor,
            capacity: backend.capacity,
            category: backend.category,
            color: backend.color,
            device_id: backend.device_id.map(id_to_string),
            is_occupied: backend.is_occupied.unwrap_or(false),
            activity_name: backend.activity_name,
            group_name: backend.group_name,
            supervisor_name: backend.supervisor_name,
            student_count: backend.student_count,
            created_at: backend.created_at,
            updated_at: backend.updated_at,
        }
    }
}

/// Maps one backend room record.
pub fn map_room_response(backend: BackendRoom) -> Room {
    Room::from(backend)
}

/// Maps an untyped room list response, logging shape mismatches.
pub fn map_rooms_response(value: &Value) -> Vec<Room> {
    map_rooms_response_with(value, &TracingSink)
}

/// Maps an untyped room list response, reporting shape mismatches to `sink`.
pub fn map_rooms_response_with(value: &Value, sink: &dyn DiagnosticSink) -> Vec<Room> {
    map_collection(value, "backendRooms", sink, map_room_response)
}

/// Unwraps and maps a single room response.
pub fn map_single_room_response(value: Value) -> Result<Room, MappingError> {
    decode_api_data::<BackendRoom>(value, "room").map(Room::from)
}

/// Converts a partial room edit into a backend request body.
pub fn prepare_room_for_backend(room: &PartialRoom) -> Result<RoomPayload, MappingError> {
    Ok(RoomPayload {
        name: room.name.clone(),
        building: room.building.clone(),
        floor: room.floor,
        capacity: room.capacity,
        category: room.category.clone(),
        color: room.color.clone(),
        device_id: parse_optional_id(room.device_id.as_deref())
            .map_err(MappingError::invalid_id("device_id"))?,
    })
}

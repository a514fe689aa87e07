//! Room domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use shared::validation::{validate_hex_color, validate_numeric_id};

/// Room as used by the dashboard, including its live occupancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    pub is_occupied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Room {
    /// Free places left, if the capacity and current count are known.
    pub fn available_places(&self) -> Option<i64> {
        match (self.capacity, self.student_count) {
            (Some(capacity), Some(count)) => Some((i64::from(capacity) - count).max(0)),
            (Some(capacity), None) if !self.is_occupied => Some(i64::from(capacity)),
            _ => None,
        }
    }
}

/// Room fields submitted by a create or edit form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PartialRoom {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: Option<String>,

    #[validate(length(max = 100, message = "Building must be at most 100 characters"))]
    pub building: Option<String>,

    #[validate(range(min = -5, max = 50, message = "Floor must be between -5 and 50"))]
    pub floor: Option<i32>,

    #[validate(range(min = 0, max = 1000, message = "Capacity must be between 0 and 1000"))]
    pub capacity: Option<i32>,

    pub category: Option<String>,

    #[validate(custom(function = "validate_hex_color"))]
    pub color: Option<String>,

    #[validate(custom(function = "validate_numeric_id"))]
    pub device_id: Option<String>,
}

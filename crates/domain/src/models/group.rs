//! Group domain models.
//!
//! A group is a class-like unit of students with an assigned room, a
//! representative and supervising teachers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use shared::validation::{validate_numeric_id, validate_numeric_ids};

/// Display name used for students without a name.
pub const UNNAMED_STUDENT: &str = "Unnamed Student";

/// Staff member representing a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Representative {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

/// Teacher or specialist reference shown in group views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supervisor {
    pub id: String,
    pub name: String,
}

/// Student as listed inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StudentForGroup {
    pub id: String,
    pub name: String,
    pub school_class: String,
    pub current_location: String,
}

/// Group as used by the dashboard.
///
/// `None` on an optional list means the backend did not send the list at
/// all; an empty list was sent as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative: Option<Representative>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub students: Option<Vec<StudentForGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisors: Option<Vec<Supervisor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Group {
    /// Creates a group that exists only on the client so far.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            room_id: None,
            room_name: None,
            representative_id: None,
            representative_name: None,
            representative: None,
            student_count: None,
            supervisor_count: None,
            students: None,
            supervisors: None,
            teacher_ids: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Group fields submitted by a create or edit form.
///
/// Only fields that are `Some` are sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct PartialGroup {
    #[validate(custom(function = "validate_numeric_id"))]
    pub id: Option<String>,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_numeric_id"))]
    pub room_id: Option<String>,

    #[validate(custom(function = "validate_numeric_id"))]
    pub representative_id: Option<String>,

    #[validate(custom(function = "validate_numeric_ids"))]
    pub teacher_ids: Option<Vec<String>>,
}

impl From<&Group> for PartialGroup {
    fn from(group: &Group) -> Self {
        Self {
            id: Some(group.id.clone()),
            name: Some(group.name.clone()),
            room_id: group.room_id.clone(),
            representative_id: group.representative_id.clone(),
            teacher_ids: group.teacher_ids.clone(),
        }
    }
}

//! Student domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use shared::validation::validate_numeric_id;

/// Full student record, independent of any group listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Student {
    pub id: String,
    /// Display name derived from the backend name or first and second name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_name: Option<String>,
    pub school_class: String,
    pub current_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bus: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Student fields submitted by a create or edit form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct PartialStudent {
    #[validate(length(
        min = 1,
        max = 100,
        message = "First name must be between 1 and 100 characters"
    ))]
    pub first_name: Option<String>,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Second name must be between 1 and 100 characters"
    ))]
    pub second_name: Option<String>,

    #[validate(length(max = 20, message = "School class must be at most 20 characters"))]
    pub school_class: Option<String>,

    #[validate(custom(function = "validate_numeric_id"))]
    pub group_id: Option<String>,

    #[validate(length(max = 100, message = "Guardian name must be at most 100 characters"))]
    pub guardian_name: Option<String>,

    #[validate(length(max = 255, message = "Guardian contact must be at most 255 characters"))]
    pub guardian_contact: Option<String>,

    pub bus: Option<bool>,
}

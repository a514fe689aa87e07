//! Combined group domain models.
//!
//! A combined group temporarily merges several groups so that specialists
//! can supervise them together. Who gets access is decided by its access
//! policy.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use shared::validation::{validate_numeric_id, validate_numeric_ids};

use super::group::{Group, Supervisor};

/// Access policy of a combined group.
///
/// Policies the dashboard does not know are kept verbatim in `Other` so
/// that they survive a round trip to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccessPolicy {
    All,
    First,
    Specific,
    Manual,
    Other(String),
}

impl AccessPolicy {
    pub fn as_str(&self) -> &str {
        match self {
            AccessPolicy::All => "all",
            AccessPolicy::First => "first",
            AccessPolicy::Specific => "specific",
            AccessPolicy::Manual => "manual",
            AccessPolicy::Other(raw) => raw,
        }
    }

    /// Human readable name shown in the dashboard.
    pub fn display_name(&self) -> &str {
        match self {
            AccessPolicy::All => "All Groups",
            AccessPolicy::First => "First Group",
            AccessPolicy::Specific => "Specific Specialist",
            AccessPolicy::Manual => "Manual Selection",
            AccessPolicy::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, AccessPolicy::Other(_))
    }
}

impl From<String> for AccessPolicy {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "all" => AccessPolicy::All,
            "first" => AccessPolicy::First,
            "specific" => AccessPolicy::Specific,
            "manual" => AccessPolicy::Manual,
            _ => AccessPolicy::Other(raw),
        }
    }
}

impl From<&str> for AccessPolicy {
    fn from(raw: &str) -> Self {
        AccessPolicy::from(raw.to_string())
    }
}

impl From<AccessPolicy> for String {
    fn from(policy: AccessPolicy) -> Self {
        match policy {
            AccessPolicy::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AccessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns the display name for a raw access policy string.
///
/// Unknown policies are returned unchanged.
pub fn access_policy_name(policy: &str) -> &str {
    match policy {
        "all" => "All Groups",
        "first" => "First Group",
        "specific" => "Specific Specialist",
        "manual" => "Manual Selection",
        other => other,
    }
}

/// Combined group as used by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CombinedGroup {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub access_policy: AccessPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_group: Option<Group>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Group>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_specialists: Option<Vec<Supervisor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_expired: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialist_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_until_expiration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Combined group fields submitted by a create or edit form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct PartialCombinedGroup {
    #[validate(custom(function = "validate_numeric_id"))]
    pub id: Option<String>,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: Option<String>,

    pub is_active: Option<bool>,

    pub access_policy: Option<AccessPolicy>,

    pub valid_until: Option<DateTime<Utc>>,

    #[validate(custom(function = "validate_numeric_id"))]
    pub specific_group_id: Option<String>,

    /// Member groups, sent to the backend as full nested records.
    pub groups: Option<Vec<Group>>,

    #[validate(custom(function = "validate_numeric_ids"))]
    pub access_specialist_ids: Option<Vec<String>>,
}

impl From<&CombinedGroup> for PartialCombinedGroup {
    fn from(combined: &CombinedGroup) -> Self {
        Self {
            id: Some(combined.id.clone()),
            name: Some(combined.name.clone()),
            is_active: Some(combined.is_active),
            access_policy: Some(combined.access_policy.clone()),
            valid_until: combined.valid_until,
            specific_group_id: combined.specific_group_id.clone(),
            groups: combined.groups.clone(),
            access_specialist_ids: combined
                .access_specialists
                .as_ref()
                .map(|specialists| specialists.iter().map(|s| s.id.clone()).collect()),
        }
    }
}

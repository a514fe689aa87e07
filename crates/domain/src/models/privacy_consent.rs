//! Privacy consent domain models.
//!
//! Every student needs an accepted, unexpired consent to the current
//! privacy policy before location data is kept.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use shared::validation::validate_numeric_id;

/// Privacy consent of one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyConsent {
    pub id: String,
    pub student_id: String,
    pub policy_version: String,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<i32>,
    pub renewal_required: bool,
    pub data_retention_days: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PrivacyConsent {
    /// Returns true if the consent is accepted and not expired at `now`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.accepted && self.expires_at.map_or(true, |expires| expires > now)
    }
}

/// Privacy consent fields submitted by the consent form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PartialPrivacyConsent {
    #[validate(custom(function = "validate_numeric_id"))]
    pub student_id: Option<String>,

    #[validate(length(min = 1, max = 20, message = "Policy version must be 1-20 characters"))]
    pub policy_version: Option<String>,

    pub accepted: Option<bool>,

    #[validate(range(min = 1, max = 3650, message = "Duration must be between 1 and 3650 days"))]
    pub duration_days: Option<i32>,

    #[validate(range(min = 1, max = 31, message = "Retention must be between 1 and 31 days"))]
    pub data_retention_days: Option<i32>,

    pub details: Option<serde_json::Value>,
}

//! Privacy consent records and their mapping to the domain model.

use chrono::{DateTime, Utc};
use domain::models::{PartialPrivacyConsent, PrivacyConsent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{id_to_string, parse_optional_id};

use crate::envelope::decode_api_data;
use crate::error::MappingError;

/// Default retention period in days when the backend does not send one.
pub const DEFAULT_DATA_RETENTION_DAYS: i32 = 30;

fn default_retention_days() -> i32 {
    DEFAULT_DATA_RETENTION_DAYS
}

/// Privacy consent record as sent by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendPrivacyConsent {
    pub id: i64,
    pub student_id: i64,
    #[serde(default)]
    pub policy_version: String,
    #[serde(default)]
    pub accepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<i32>,
    #[serde(default)]
    pub renewal_required: bool,
    #[serde(default = "default_retention_days")]
    pub data_retention_days: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial privacy consent body for create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrivacyConsentPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_retention_days: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<BackendPrivacyConsent> for PrivacyConsent {
    fn from(backend: BackendPrivacyConsent) -> Self {
        Self {
            id: id_to_string(backend.id),
            student_id: id_to_string(backend.student_id),
            policy_version: backend.policy_version,
            accepted: backend.accepted,
            accepted_at: backend.accepted_at,
            expires_at: backend.expires_at,
            duration_days: backend.duration_days,
            renewal_required: backend.renewal_required,
            data_retention_days: backend.data_retention_days,
            details: backend.details,
            created_at: backend.created_at,
            updated_at: backend.updated_at,
        }
    }
}

/// Maps one backend privacy consent record.
pub fn map_privacy_consent_response(backend: BackendPrivacyConsent) -> PrivacyConsent {
    PrivacyConsent::from(backend)
}

/// Unwraps and maps a single privacy consent response.
pub fn map_single_privacy_consent_response(value: Value) -> Result<PrivacyConsent, MappingError> {
    decode_api_data::<BackendPrivacyConsent>(value, "privacy consent").map(PrivacyConsent::from)
}

/// Converts a partial consent edit into a backend request body.
pub fn prepare_privacy_consent_for_backend(
    consent: &PartialPrivacyConsent,
) -> Result<PrivacyConsentPayload, MappingError> {
    Ok(PrivacyConsentPayload {
        student_id: parse_optional_id(consent.student_id.as_deref())
            .map_err(MappingError::invalid_id("student_id"))?,
        policy_version: consent.policy_version.clone(),
        accepted: consent.accepted,
        duration_days: consent.duration_days,
        data_retention_days: consent.data_retention_days,
        details: consent.details.clone(),
    })
}

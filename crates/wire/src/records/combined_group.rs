//! Combined group records and their mapping to the domain model.

use chrono::{DateTime, Utc};
use domain::models::{AccessPolicy, CombinedGroup, Group, PartialCombinedGroup, Supervisor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{id_to_string, parse_ids, parse_optional_id};

use super::group::{prepare_nested_group_for_backend, BackendGroup};
use super::staff::BackendStaff;
use crate::collection::map_collection;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::envelope::decode_api_data;
use crate::error::MappingError;

/// Combined group record as sent by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendCombinedGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
    /// Kept as the raw string; unknown policies are not rejected.
    #[serde(default)]
    pub access_policy: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_group: Option<BackendGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<BackendGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_specialists: Option<Vec<BackendStaff>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_expired: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialist_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_until_expiration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial combined group body for create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedGroupPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<BackendGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_specialist_ids: Option<Vec<i64>>,
}

impl From<BackendCombinedGroup> for CombinedGroup {
    fn from(backend: BackendCombinedGroup) -> Self {
        let access_policy = AccessPolicy::from(backend.access_policy);
        if !access_policy.is_known() {
            tracing::warn!(
                combined_group_id = backend.id,
                access_policy = %access_policy,
                "Unknown access policy passed through"
            );
        }

        let specific_group_id = backend
            .specific_group_id
            .or_else(|| backend.specific_group.as_ref().map(|g| g.id));

        Self {
            id: id_to_string(backend.id),
            name: backend.name,
            is_active: backend.is_active,
            access_policy,
            valid_until: backend.valid_until,
            specific_group_id: specific_group_id.map(id_to_string),
            specific_group: backend.specific_group.map(Group::from),
            groups: backend
                .groups
                .map(|groups| groups.into_iter().map(Group::from).collect()),
            access_specialists: backend.access_specialists.map(|specialists| {
                specialists
                    .iter()
                    .map(|s| Supervisor {
                        id: id_to_string(s.id),
                        name: s.display_name(),
                    })
                    .collect()
            }),
            is_expired: backend.is_expired,
            group_count: backend.group_count,
            specialist_count: backend.specialist_count,
            time_until_expiration: backend.time_until_expiration,
            created_at: backend.created_at,
            updated_at: backend.updated_at,
        }
    }
}

/// Maps one backend combined group record.
pub fn map_combined_group_response(backend: BackendCombinedGroup) -> CombinedGroup {
    CombinedGroup::from(backend)
}

/// Maps an untyped combined group list response, logging shape mismatches.
pub fn map_combined_groups_response(value: &Value) -> Vec<CombinedGroup> {
    map_combined_groups_response_with(value, &TracingSink)
}

/// Maps an untyped combined group list response, reporting to `sink`.
pub fn map_combined_groups_response_with(
    value: &Value,
    sink: &dyn DiagnosticSink,
) -> Vec<CombinedGroup> {
    map_collection(value, "backendCombinedGroups", sink, map_combined_group_response)
}

/// Unwraps and maps a single combined group response.
pub fn map_single_combined_group_response(value: Value) -> Result<CombinedGroup, MappingError> {
    decode_api_data::<BackendCombinedGroup>(value, "combined group").map(CombinedGroup::from)
}

/// Converts a partial combined group edit into a backend request body.
pub fn prepare_combined_group_for_backend(
    combined: &PartialCombinedGroup,
) -> Result<CombinedGroupPayload, MappingError> {
    prepare_combined_group_at(combined, Utc::now())
}

/// Same as [`prepare_combined_group_for_backend`] with an explicit clock.
///
/// Nested groups are sent as full records together with their IDs.
pub fn prepare_combined_group_at(
    combined: &PartialCombinedGroup,
    now: DateTime<Utc>,
) -> Result<CombinedGroupPayload, MappingError> {
    let groups = combined
        .groups
        .as_ref()
        .map(|groups| {
            groups
                .iter()
                .map(|group| prepare_nested_group_for_backend(group, now))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;
    let group_ids = groups
        .as_ref()
        .map(|groups| groups.iter().map(|g| g.id).collect());

    Ok(CombinedGroupPayload {
        id: parse_optional_id(combined.id.as_deref()).map_err(MappingError::invalid_id("id"))?,
        name: combined.name.clone(),
        is_active: combined.is_active,
        access_policy: combined.access_policy.clone().map(String::from),
        valid_until: combined.valid_until,
        specific_group_id: parse_optional_id(combined.specific_group_id.as_deref())
            .map_err(MappingError::invalid_id("specific_group_id"))?,
        groups,
        group_ids,
        access_specialist_ids: combined
            .access_specialist_ids
            .as_deref()
            .map(parse_ids)
            .transpose()
            .map_err(MappingError::invalid_id("access_specialist_ids"))?,
    })
}

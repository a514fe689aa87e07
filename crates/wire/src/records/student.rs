//! Student records and their mapping to the domain model.

use chrono::{DateTime, Utc};
use domain::models::{PartialStudent, Student, UNNAMED_STUDENT};
use domain::services::normalize_location;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{id_to_string, parse_optional_id, Page};

use super::staff::{join_names, non_blank};
use crate::collection::map_collection;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::envelope::{decode_api_data, extract_paginated};
use crate::error::MappingError;

/// Student record as sent by the backend.
///
/// Older backend versions send `last_name` instead of `second_name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendStudent {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial student body for create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guardian_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bus: Option<bool>,
}

impl From<BackendStudent> for Student {
    fn from(backend: BackendStudent) -> Self {
        let second_name = backend.second_name.or(backend.last_name);
        let name = match non_blank(&backend.name) {
            Some(name) => name.to_string(),
            None => {
                let joined = join_names(backend.first_name.as_deref(), second_name.as_deref());
                if joined.is_empty() {
                    UNNAMED_STUDENT.to_string()
                } else {
                    joined
                }
            }
        };

        Self {
            id: id_to_string(backend.id),
            name,
            first_name: backend.first_name,
            second_name,
            school_class: backend.school_class.unwrap_or_default(),
            current_location: normalize_location(backend.current_location.as_deref()),
            group_id: backend.group_id.map(id_to_string),
            group_name: backend.group_name,
            guardian_name: backend.guardian_name,
            guardian_contact: backend.guardian_contact,
            bus: backend.bus,
            created_at: backend.created_at,
            updated_at: backend.updated_at,
        }
    }
}

/// Maps one backend student record.
pub fn map_student_response(backend: BackendStudent) -> Student {
    Student::from(backend)
}

/// Maps an untyped student list response, logging shape mismatches.
pub fn map_students_response(value: &Value) -> Vec<Student> {
    map_students_response_with(value, &TracingSink)
}

/// Maps an untyped student list response, reporting to `sink`.
pub fn map_students_response_with(value: &Value, sink: &dyn DiagnosticSink) -> Vec<Student> {
    map_collection(value, "backendStudents", sink, map_student_response)
}

/// Unwraps and maps a single student response.
pub fn map_single_student_response(value: Value) -> Result<Student, MappingError> {
    decode_api_data::<BackendStudent>(value, "student").map(Student::from)
}

/// Maps a paginated (or bare array) student list response, logging mismatches.
pub fn map_students_page(value: Value) -> Result<Page<Student>, MappingError> {
    map_students_page_with(value, &TracingSink)
}

/// Maps a paginated (or bare array) student list response, reporting to `sink`.
pub fn map_students_page_with(
    value: Value,
    sink: &dyn DiagnosticSink,
) -> Result<Page<Student>, MappingError> {
    Ok(extract_paginated::<BackendStudent>(value, "backendStudents", sink)?.map(Student::from))
}

/// Converts a partial student edit into a backend request body.
pub fn prepare_student_for_backend(
    student: &PartialStudent,
) -> Result<StudentPayload, MappingError> {
    Ok(StudentPayload {
        first_name: student.first_name.clone(),
        second_name: student.second_name.clone(),
        school_class: student.school_class.clone(),
        group_id: parse_optional_id(student.group_id.as_deref())
            .map_err(MappingError::invalid_id("group_id"))?,
        guardian_name: student.guardian_name.clone(),
        guardian_contact: student.guardian_contact.clone(),
        bus: student.bus,
    })
}

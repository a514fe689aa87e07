//! Group records and their mapping to the domain model.

use chrono::{DateTime, Utc};
use domain::models::{
    Group, PartialGroup, Representative, StudentForGroup, Supervisor, UNNAMED_STUDENT,
};
use domain::services::normalize_location;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{id_to_string, parse_id, parse_ids, parse_optional_id};

use super::staff::{join_names, non_blank, BackendStaff};
use crate::collection::map_collection;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::envelope::decode_api_data;
use crate::error::MappingError;

/// Room reference embedded in a group record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendRoomRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Representative embedded in a group record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendRepresentative {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Student as embedded in a group record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStudentForGroup {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_location: Option<String>,
}

/// Group record as sent by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendGroup {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<BackendRoomRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representative_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representative: Option<BackendRepresentative>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teachers: Option<Vec<BackendStaff>>,
    /// Flat teacher IDs, sent by create/update responses instead of `teachers`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub students: Option<Vec<BackendStudentForGroup>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial group body for create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub representative_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_ids: Option<Vec<i64>>,
}

impl From<BackendRepresentative> for Representative {
    fn from(rep: BackendRepresentative) -> Self {
        let full_name = non_blank(&rep.full_name)
            .map(str::to_string)
            .unwrap_or_else(|| join_names(rep.first_name.as_deref(), rep.last_name.as_deref()));

        Self {
            id: id_to_string(rep.id),
            staff_id: rep.staff_id.map(id_to_string),
            first_name: rep.first_name.unwrap_or_default(),
            last_name: rep.last_name.unwrap_or_default(),
            full_name,
        }
    }
}

impl From<BackendStudentForGroup> for StudentForGroup {
    fn from(student: BackendStudentForGroup) -> Self {
        Self {
            id: id_to_string(student.id),
            name: non_blank(&student.name)
                .unwrap_or(UNNAMED_STUDENT)
                .to_string(),
            school_class: student.school_class.unwrap_or_default(),
            current_location: normalize_location(student.current_location.as_deref()),
        }
    }
}

impl From<BackendGroup> for Group {
    fn from(backend: BackendGroup) -> Self {
        let room_name = backend.room.map(|room| room.name);

        let representative = backend.representative.map(Representative::from);
        let representative_name = representative.as_ref().map(|rep| rep.full_name.clone());

        let (supervisors, teacher_ids) = match backend.teachers {
            Some(teachers) => {
                let ids = teachers.iter().map(|t| id_to_string(t.id)).collect();
                let supervisors = teachers
                    .iter()
                    .map(|t| Supervisor {
                        id: id_to_string(t.id),
                        name: t.display_name(),
                    })
                    .collect();
                (Some(supervisors), Some(ids))
            }
            None => (
                None,
                backend
                    .teacher_ids
                    .map(|ids| ids.into_iter().map(id_to_string).collect()),
            ),
        };

        Self {
            id: id_to_string(backend.id),
            name: backend.name,
            room_id: backend.room_id.map(id_to_string),
            room_name,
            representative_id: backend.representative_id.map(id_to_string),
            representative_name,
            representative,
            student_count: backend.student_count,
            supervisor_count: backend.supervisor_count,
            students: backend
                .students
                .map(|students| students.into_iter().map(StudentForGroup::from).collect()),
            supervisors,
            teacher_ids,
            created_at: backend.created_at,
            updated_at: backend.updated_at,
        }
    }
}

/// Maps one backend group record.
pub fn map_group_response(backend: BackendGroup) -> Group {
    Group::from(backend)
}

/// Maps one student entry of a group record.
pub fn map_student_for_group(backend: BackendStudentForGroup) -> StudentForGroup {
    StudentForGroup::from(backend)
}

/// Maps typed backend groups, preserving order and length.
pub fn map_groups(backend: Vec<BackendGroup>) -> Vec<Group> {
    backend.into_iter().map(Group::from).collect()
}

/// Maps an untyped group list response, logging shape mismatches.
pub fn map_groups_response(value: &Value) -> Vec<Group> {
    map_groups_response_with(value, &TracingSink)
}

/// Maps an untyped group list response, reporting shape mismatches to `sink`.
pub fn map_groups_response_with(value: &Value, sink: &dyn DiagnosticSink) -> Vec<Group> {
    map_collection(value, "backendGroups", sink, map_group_response)
}

/// Maps an untyped list of students embedded in a group.
pub fn map_students_for_group_response(
    value: &Value,
    sink: &dyn DiagnosticSink,
) -> Vec<StudentForGroup> {
    map_collection(value, "backendStudents", sink, map_student_for_group)
}

/// Unwraps and maps a single group response.
pub fn map_single_group_response(value: Value) -> Result<Group, MappingError> {
    decode_api_data::<BackendGroup>(value, "group").map(Group::from)
}

/// Converts a partial group edit into a backend request body.
///
/// Fields absent on the edit stay absent on the payload.
pub fn prepare_group_for_backend(group: &PartialGroup) -> Result<GroupPayload, MappingError> {
    Ok(GroupPayload {
        id: parse_optional_id(group.id.as_deref()).map_err(MappingError::invalid_id("id"))?,
        name: group.name.clone(),
        room_id: parse_optional_id(group.room_id.as_deref())
            .map_err(MappingError::invalid_id("room_id"))?,
        representative_id: parse_optional_id(group.representative_id.as_deref())
            .map_err(MappingError::invalid_id("representative_id"))?,
        teacher_ids: group
            .teacher_ids
            .as_deref()
            .map(parse_ids)
            .transpose()
            .map_err(MappingError::invalid_id("teacher_ids"))?,
    })
}

/// Rebuilds a complete backend group record from a domain group.
///
/// Used where the backend expects nested groups as full records. Missing
/// timestamps are filled with `now`; present ones are kept.
pub fn prepare_nested_group_for_backend(
    group: &Group,
    now: DateTime<Utc>,
) -> Result<BackendGroup, MappingError> {
    let room_id = parse_optional_id(group.room_id.as_deref())
        .map_err(MappingError::invalid_id("room_id"))?;
    let room = match (room_id, &group.room_name) {
        (Some(id), Some(name)) => Some(BackendRoomRef {
            id,
            name: name.clone(),
        }),
        _ => None,
    };

    let representative = group
        .representative
        .as_ref()
        .map(|rep| -> Result<BackendRepresentative, MappingError> {
            Ok(BackendRepresentative {
                id: parse_id(&rep.id).map_err(MappingError::invalid_id("representative.id"))?,
                staff_id: parse_optional_id(rep.staff_id.as_deref())
                    .map_err(MappingError::invalid_id("representative.staff_id"))?,
                first_name: Some(rep.first_name.clone()),
                last_name: Some(rep.last_name.clone()),
                full_name: Some(rep.full_name.clone()),
            })
        })
        .transpose()?;

    let teachers = group
        .supervisors
        .as_ref()
        .map(|supervisors| {
            supervisors
                .iter()
                .map(|s| -> Result<BackendStaff, MappingError> {
                    Ok(BackendStaff {
                        id: parse_id(&s.id).map_err(MappingError::invalid_id("supervisors.id"))?,
                        full_name: Some(s.name.clone()),
                        ..Default::default()
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;

    let students = group
        .students
        .as_ref()
        .map(|students| {
            students
                .iter()
                .map(|s| -> Result<BackendStudentForGroup, MappingError> {
                    Ok(BackendStudentForGroup {
                        id: parse_id(&s.id).map_err(MappingError::invalid_id("students.id"))?,
                        name: Some(s.name.clone()),
                        school_class: Some(s.school_class.clone()),
                        current_location: Some(s.current_location.clone()),
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;

    Ok(BackendGroup {
        id: parse_id(&group.id).map_err(MappingError::invalid_id("id"))?,
        name: group.name.clone(),
        room_id,
        room,
        representative_id: parse_optional_id(group.representative_id.as_deref())
            .map_err(MappingError::invalid_id("representative_id"))?,
        representative,
        teachers,
        teacher_ids: group
            .teacher_ids
            .as_deref()
            .map(parse_ids)
            .transpose()
            .map_err(MappingError::invalid_id("teacher_ids"))?,
        students,
        student_count: group.student_count,
        supervisor_count: group.supervisor_count,
        created_at: Some(group.created_at.unwrap_or(now)),
        updated_at: Some(group.updated_at.unwrap_or(now)),
    })
}

//! Backend records, one module per entity.

pub mod combined_group;
pub mod group;
pub mod privacy_consent;
pub mod room;
pub mod staff;
pub mod student;
pub mod suggestion;

pub use combined_group::{
    map_combined_group_response, map_combined_groups_response,
    map_combined_groups_response_with, map_single_combined_group_response,
    prepare_combined_group_at, prepare_combined_group_for_backend, BackendCombinedGroup,
    CombinedGroupPayload,
};
pub use group::{
    map_group_response, map_groups, map_groups_response, map_groups_response_with,
    map_single_group_response, map_student_for_group, map_students_for_group_response,
    prepare_group_for_backend, prepare_nested_group_for_backend, BackendGroup,
    BackendRepresentative, BackendRoomRef, BackendStudentForGroup, GroupPayload,
};
pub use privacy_consent::{
    map_privacy_consent_response, map_single_privacy_consent_response,
    prepare_privacy_consent_for_backend, BackendPrivacyConsent, PrivacyConsentPayload,
};
pub use room::{
    map_room_response, map_rooms_response, map_rooms_response_with, map_single_room_response,
    prepare_room_for_backend, BackendRoom, RoomPayload,
};
pub use staff::BackendStaff;
pub use student::{
    map_single_student_response, map_student_response, map_students_page,
    map_students_page_with, map_students_response, map_students_response_with,
    prepare_student_for_backend, BackendStudent, StudentPayload,
};
pub use suggestion::{
    map_single_suggestion_response, map_suggestion_response, map_suggestions_response,
    map_suggestions_response_with, prepare_suggestion_for_backend, BackendSuggestion,
    SuggestionPayload, VotePayload,
};

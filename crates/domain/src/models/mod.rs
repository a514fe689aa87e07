//! Domain models for the OGS dashboard.

pub mod combined_group;
pub mod group;
pub mod privacy_consent;
pub mod room;
pub mod student;
pub mod suggestion;

pub use combined_group::{access_policy_name, AccessPolicy, CombinedGroup, PartialCombinedGroup};
pub use group::{
    Group, PartialGroup, Representative, StudentForGroup, Supervisor, UNNAMED_STUDENT,
};
pub use privacy_consent::{PartialPrivacyConsent, PrivacyConsent};
pub use room::{PartialRoom, Room};
pub use student::{PartialStudent, Student};
pub use suggestion::{PartialSuggestion, Suggestion, SuggestionStatus, Vote};

//! Staff references embedded in group and combined group records.

use serde::{Deserialize, Serialize};

/// Teacher or specialist as embedded in other records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStaff {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl BackendStaff {
    /// Name to display: `full_name`, then `name`, then first and last name.
    pub fn display_name(&self) -> String {
        non_blank(&self.full_name)
            .or_else(|| non_blank(&self.name))
            .map(str::to_string)
            .unwrap_or_else(|| join_names(self.first_name.as_deref(), self.last_name.as_deref()))
    }
}

/// Returns the trimmed value if it is present and not blank.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Joins first and last name, skipping missing parts.
pub(crate) fn join_names(first: Option<&str>, last: Option<&str>) -> String {
    [first, last]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

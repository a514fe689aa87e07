//! Mapping error types.

use shared::IdError;
use thiserror::Error;

/// Error type for mapping between backend and domain representations.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("Invalid {field}: {source}")]
    InvalidId {
        field: &'static str,
        #[source]
        source: IdError,
    },

    #[error("Failed to decode {entity}: {source}")]
    Decode {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Backend reported failure: {0}")]
    Rejected(String),
}

impl MappingError {
    pub fn invalid_id(field: &'static str) -> impl FnOnce(IdError) -> Self {
        move |source| MappingError::InvalidId { field, source }
    }

    pub fn decode(entity: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| MappingError::Decode { entity, source }
    }
}

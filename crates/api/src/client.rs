//! Backend client shared by the resource services.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use shared::parse_id;
use validator::Validate;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::transport::{HttpTransport, Transport};

/// Fetch wrappers for every backend resource.
///
/// Cheap to clone; all clones share one transport.
#[derive(Clone)]
pub struct OgsClient {
    transport: Arc<dyn Transport>,
}

impl OgsClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Builds a client talking HTTP to the configured backend.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(config)?;
        tracing::info!(base_url = %config.base_url, "OGS backend client configured");
        Ok(Self::new(Arc::new(transport)))
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

/// Joins a collection path and a frontend ID after validating the ID.
pub(crate) fn resource_path(collection: &str, id: &str) -> Result<String, ApiError> {
    let id = parse_id(id)?;
    Ok(format!("{}/{}", collection, id))
}

/// Validates a partial edit before it is mapped and sent.
pub(crate) fn validated<T: Validate>(input: &T) -> Result<&T, ApiError> {
    input.validate()?;
    Ok(input)
}

pub(crate) fn to_body<T: Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload)
        .map_err(|e| ApiError::Internal(format!("Failed to encode request body: {}", e)))
}

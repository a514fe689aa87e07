//! Wire layer for the OGS dashboard.
//!
//! This crate owns the backend's JSON representation and the mapping
//! between it and the domain model:
//! - Backend records (snake_case, integer IDs)
//! - Entity and collection mappers (backend -> domain)
//! - Envelope unwrapping for `{ data }`, `{ success, message, data }` and
//!   paginated responses
//! - Reverse mappers (partial domain edits -> backend payloads)

pub mod collection;
pub mod diagnostics;
pub mod envelope;
pub mod error;
pub mod records;

pub use collection::map_collection;
pub use diagnostics::{DiagnosticSink, RecordingSink, TracingSink};
pub use envelope::{
    decode_api_data, extract_api_data, extract_paginated, is_envelope, try_extract_api_data,
};
pub use error::MappingError;

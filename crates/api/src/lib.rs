//! Fetch layer of the OGS dashboard.
//!
//! [`OgsClient`] wraps one [`Transport`] and exposes one async method per
//! backend operation. Every method validates IDs and partial edits, maps the
//! request through the wire crate and maps the response back to the domain
//! model.

pub mod client;
pub mod config;
pub mod error;
pub mod filters;
pub mod logging;
pub mod services;
pub mod transport;

pub use client::OgsClient;
pub use error::ApiError;
pub use filters::{
    CombinedGroupFilters, GroupFilters, RoomFilters, StudentFilters, SuggestionFilters,
    SuggestionSort,
};
pub use transport::{HttpTransport, MockTransport, RecordedRequest, Transport};

//! Resource services.
//!
//! Each module adds the fetch wrappers of one backend resource to
//! [`OgsClient`](crate::OgsClient).

pub mod combined_groups;
pub mod groups;
pub mod privacy_consents;
pub mod rooms;
pub mod students;
pub mod suggestions;

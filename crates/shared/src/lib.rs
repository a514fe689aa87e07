//! Shared utilities and common types for the OGS dashboard data layer.
//!
//! This crate provides leaf functionality used across all other crates:
//! - Backend ID stringification and total base-10 parsing
//! - Page-based pagination metadata
//! - Query-string building for list filters
//! - Form-boundary validation helpers

pub mod ids;
pub mod pagination;
pub mod query;
pub mod validation;

pub use ids::{id_to_string, parse_id, parse_ids, parse_optional_id, IdError};
pub use pagination::{Page, Pagination};
pub use query::{QueryBuilder, QueryFilter};

//! Domain layer for the OGS dashboard.
//!
//! This crate contains:
//! - Frontend domain models (groups, combined groups, students, rooms,
//!   suggestions, privacy consents) with string IDs
//! - Partial edit types submitted by forms
//! - Domain services (location normalization)

pub mod models;
pub mod services;

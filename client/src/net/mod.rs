//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the location-detection request and `types` defines the
//! location wire/storage schema.

pub mod api;
pub mod types;

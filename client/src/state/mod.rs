//! Client-side UI state.

pub mod location;

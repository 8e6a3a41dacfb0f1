//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render interaction surfaces while keeping their decision logic
//! in `state` so it can be tested without a browser.

pub mod location_modal;

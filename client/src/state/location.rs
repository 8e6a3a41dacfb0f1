//! Location modal state and transitions.
//!
//! DESIGN
//! ======
//! All decisions the modal makes live here as plain methods so they can be
//! exercised without a browser. The Leptos component only wires signals,
//! spawns the detection request, and forwards button clicks.
//!
//! Render modes are mutually exclusive: loading, manual entry, detected
//! confirmation. A hidden modal renders nothing regardless of the others.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::net::api::DetectError;
use crate::net::types::{DetectedLocation, LocationData};
use crate::util::storage::{self, KeyValueStore};

/// What the modal should render right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalView {
    Hidden,
    Loading,
    ManualEntry,
    Detected,
    /// Visible, not loading, no candidate and not in manual mode.
    Empty,
}

impl ModalView {
    /// Whether the dialog is on screen.
    pub fn is_open(self) -> bool {
        self != Self::Hidden
    }
}

/// Result of the mount-time storage check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitOutcome {
    /// A location was confirmed on a previous visit; stay hidden.
    AlreadySaved,
    /// Nothing saved; the caller should run detection.
    Detect,
}

/// How a detection outcome was turned into a candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The endpoint returned a usable location.
    Detected,
    /// The endpoint answered but `city` or `regionName` was missing/empty.
    Malformed(DetectedLocation),
    /// The request itself failed.
    Failed(DetectError),
}

/// Map a detection outcome to the candidate location.
///
/// Anything other than a payload with non-empty `city` and `regionName`
/// yields [`LocationData::fallback`].
pub fn resolve_detection(outcome: Result<DetectedLocation, DetectError>) -> (LocationData, Resolution) {
    match outcome {
        Ok(payload) => match payload.clone().into_location() {
            Some(location) => (location, Resolution::Detected),
            None => (LocationData::fallback(), Resolution::Malformed(payload)),
        },
        Err(e) => (LocationData::fallback(), Resolution::Failed(e)),
    }
}

/// Render mode derived from `state`.
///
/// Only changes when the mode does, so views keyed on it are not rebuilt on
/// every input keystroke.
pub fn view_memo(state: RwSignal<LocationModalState>) -> Memo<ModalView> {
    Memo::new(move |_| state.with(LocationModalState::view))
}

/// Apply a detection outcome unless the owning component has been torn down.
///
/// Returns `None` and leaves `state` untouched once `alive` is cleared.
pub fn apply_if_alive(
    alive: &AtomicBool,
    state: &mut LocationModalState,
    outcome: Result<DetectedLocation, DetectError>,
) -> Option<Resolution> {
    if !alive.load(Ordering::Relaxed) {
        return None;
    }
    Some(state.finish_detect(outcome))
}

/// Modal state: visibility, candidate, and manual-entry inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationModalState {
    pub visible: bool,
    pub location: Option<LocationData>,
    pub loading: bool,
    pub manual_entry: bool,
    pub manual_city: String,
    pub manual_region: String,
}

impl Default for LocationModalState {
    fn default() -> Self {
        Self {
            visible: false,
            location: None,
            loading: true,
            manual_entry: false,
            manual_city: String::new(),
            manual_region: String::new(),
        }
    }
}

impl LocationModalState {
    /// Check storage for a previously confirmed location.
    pub fn initialize(&mut self, store: &dyn KeyValueStore) -> InitOutcome {
        if storage::has_saved_location(store) {
            self.visible = false;
            return InitOutcome::AlreadySaved;
        }
        InitOutcome::Detect
    }

    /// Enter the loading mode ahead of the detection request.
    pub fn begin_detect(&mut self) {
        self.loading = true;
        self.visible = true;
    }

    /// Apply the detection outcome and leave the loading mode.
    pub fn finish_detect(&mut self, outcome: Result<DetectedLocation, DetectError>) -> Resolution {
        let (location, resolution) = resolve_detection(outcome);
        self.location = Some(location);
        self.loading = false;
        resolution
    }

    /// Persist the candidate, hand it to `on_confirmed`, and hide.
    ///
    /// No-op (returns `false`) when there is no candidate.
    pub fn confirm<F>(&mut self, store: &dyn KeyValueStore, on_confirmed: F) -> bool
    where
        F: FnOnce(LocationData),
    {
        let Some(location) = self.location.clone() else {
            return false;
        };
        self.emit(store, location, on_confirmed);
        true
    }

    /// Switch to manual entry. Storage and candidate are untouched.
    pub fn choose_other(&mut self) {
        self.manual_entry = true;
    }

    /// Leave manual entry and show the detected candidate again.
    pub fn back_to_detected(&mut self) {
        self.manual_entry = false;
    }

    pub fn set_manual_city(&mut self, value: String) {
        self.manual_city = value;
    }

    pub fn set_manual_region(&mut self, value: String) {
        self.manual_region = value;
    }

    /// Whether the manual submit button is enabled.
    pub fn can_submit_manual(&self) -> bool {
        !self.manual_city.is_empty() && !self.manual_region.is_empty()
    }

    /// Persist the manually entered location, hand it to `on_confirmed`,
    /// and hide.
    ///
    /// No-op (returns `false`) while either input is empty.
    pub fn submit_manual<F>(&mut self, store: &dyn KeyValueStore, on_confirmed: F) -> bool
    where
        F: FnOnce(LocationData),
    {
        let Some(location) = LocationData::manual(&self.manual_city, &self.manual_region) else {
            return false;
        };
        self.emit(store, location, on_confirmed);
        true
    }

    /// Close without confirming (backdrop click / Escape).
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn view(&self) -> ModalView {
        if !self.visible {
            ModalView::Hidden
        } else if self.loading {
            ModalView::Loading
        } else if self.manual_entry {
            ModalView::ManualEntry
        } else if self.location.is_some() {
            ModalView::Detected
        } else {
            ModalView::Empty
        }
    }

    fn emit<F>(&mut self, store: &dyn KeyValueStore, location: LocationData, on_confirmed: F)
    where
        F: FnOnce(LocationData),
    {
        storage::save_location(store, &location);
        on_confirmed(location);
        self.visible = false;
    }
}

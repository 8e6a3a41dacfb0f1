//! Location DTOs shared by the detection call, local storage, and the
//! confirmation callback.
//!
//! DESIGN
//! ======
//! `LocationData` is the only shape that is ever persisted or emitted. The
//! detection endpoint is decoded into the lenient `DetectedLocation` first so
//! missing or empty fields can be rejected before anything reaches storage.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Placeholder city used when detection is unavailable.
pub const FALLBACK_CITY: &str = "Sua cidade";
/// Placeholder region used when detection is unavailable.
pub const FALLBACK_REGION: &str = "Seu estado";
/// Country assigned to fallback and manually entered locations.
pub const DEFAULT_COUNTRY: &str = "Brasil";

/// A confirmed (or candidate) user location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationData {
    pub city: String,
    /// State / region name. Serialized as `regionName`.
    #[serde(rename = "regionName")]
    pub region_name: String,
    pub country: String,
}

impl LocationData {
    /// The fixed record substituted whenever detection fails.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            city: FALLBACK_CITY.to_owned(),
            region_name: FALLBACK_REGION.to_owned(),
            country: DEFAULT_COUNTRY.to_owned(),
        }
    }

    /// Build a manually entered location with the default country.
    ///
    /// Returns `None` unless both `city` and `region_name` are non-empty.
    #[must_use]
    pub fn manual(city: &str, region_name: &str) -> Option<Self> {
        if city.is_empty() || region_name.is_empty() {
            return None;
        }
        Some(Self {
            city: city.to_owned(),
            region_name: region_name.to_owned(),
            country: DEFAULT_COUNTRY.to_owned(),
        })
    }
}

/// Raw payload returned by `GET /api/detect-location`.
///
/// Every field is optional; unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedLocation {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, rename = "regionName")]
    pub region_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl DetectedLocation {
    /// Validate the payload into a `LocationData`.
    ///
    /// Requires non-empty `city` and `regionName`. `country` is not checked
    /// and becomes an empty string when absent.
    #[must_use]
    pub fn into_location(self) -> Option<LocationData> {
        let city = self.city.filter(|c| !c.is_empty())?;
        let region_name = self.region_name.filter(|r| !r.is_empty())?;
        Some(LocationData { city, region_name, country: self.country.unwrap_or_default() })
    }
}

//! REST call to the location-detection endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): returns `DetectError::Unavailable` since detection is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a typed `DetectError`; the modal state turns all of them
//! into the fallback location, so nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::DetectedLocation;

/// Path of the location-detection endpoint.
pub const DETECT_LOCATION_ENDPOINT: &str = "/api/detect-location";

/// Failure modes of [`detect_location`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectError {
    /// The request never produced a response.
    #[error("detect request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-2xx status.
    #[error("detect endpoint returned status {0}")]
    Status(u16),

    /// The body was not the expected JSON shape.
    #[error("detect response parse failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("location detection not available on server")]
    Unavailable,
}

/// Ask the server where the current visitor is via `GET /api/detect-location`.
///
/// # Errors
///
/// Returns a [`DetectError`] on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn detect_location() -> Result<DetectedLocation, DetectError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(DETECT_LOCATION_ENDPOINT)
            .send()
            .await
            .map_err(|e| DetectError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(DetectError::Status(resp.status()));
        }
        resp.json::<DetectedLocation>()
            .await
            .map_err(|e| DetectError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(DetectError::Unavailable)
    }
}

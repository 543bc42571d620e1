//! Inbound command wire format.
//!
//! Must stay in sync with the hosting page's `postMessage` payloads:
//! a JSON object tagged by `type`, with a per-variant payload. Anything
//! not matching a known variant is a parse error and the message is
//! dropped at the boundary; field access is never optimistic.

use serde::Deserialize;

use crate::catalog::Feature;

/// A command from the hosting page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum ViewerCommand {
    /// Replace the active catalog wholesale.
    #[serde(rename = "sync-craters")]
    SyncCraters { craters: Vec<Feature> },
    /// Zoom percentage in [0, 100]; 100 is closest.
    #[serde(rename = "zoom")]
    Zoom { value: f32 },
    /// Absolute model yaw in degrees.
    #[serde(rename = "rotation")]
    Rotation { value: f32 },
    /// Restore default camera distance/direction and zero yaw.
    #[serde(rename = "reset")]
    Reset,
    /// Programmatic highlight plus camera recenter.
    #[serde(rename = "highlight-crater")]
    HighlightCrater {
        #[serde(rename = "craterId")]
        crater_id: String,
    },
    /// Toggle continuous yaw animation.
    #[serde(rename = "auto-rotate")]
    AutoRotate { value: bool },
}

impl ViewerCommand {
    /// Parse a raw message body. Unknown `type` values and malformed
    /// payloads both surface as `Err`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

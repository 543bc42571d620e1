//! Outbound event wire format (viewer -> hosting page).

use serde::Serialize;

use crate::catalog::Feature;

/// Normalized crater payload carried by `crater-selected`.
///
/// Flattens the catalog record into the shape the hosting page
/// expects: explicit official/taken flags, price defaulting to 0,
/// holder omitted when the crater is unclaimed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCrater {
    pub id: String,
    pub name: String,
    pub latitude: f32,
    pub longitude: f32,
    pub diameter: f32,
    pub is_official: bool,
    pub is_taken: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taken_by: Option<String>,
    pub price: f64,
}

impl From<&Feature> for SelectedCrater {
    fn from(f: &Feature) -> Self {
        Self {
            id: f.id.clone(),
            name: f.name.clone(),
            latitude: f.lat,
            longitude: f.lng,
            diameter: f.diameter,
            is_official: f.is_official(),
            is_taken: f.is_taken(),
            taken_by: if f.is_taken() { f.taken_by.clone() } else { None },
            price: f.price.unwrap_or(0.0),
        }
    }
}

/// An event posted back to the hosting page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ViewerEvent {
    /// Scene is ready; sent at most once per session.
    #[serde(rename = "iframe-ready")]
    IframeReady {
        #[serde(skip_serializing_if = "Option::is_none")]
        timestamp: Option<f64>,
    },
    /// A crater was picked by the user.
    #[serde(rename = "crater-selected")]
    CraterSelected { crater: SelectedCrater },
}

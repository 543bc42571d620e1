use serde::{Deserialize, Serialize};

/// Ownership status of a crater in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CraterStatus {
    /// Free to claim.
    Available,
    /// Claimed by a holder.
    Taken,
    /// IAU-named feature, never claimable.
    Official,
}

/// A named, geolocated point of interest on the rendered body.
/// Wire shape matches the hosting page's catalog records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub name: String,
    /// Latitude in degrees, -90..90.
    pub lat: f32,
    /// Longitude in degrees; -180..180 and 0..360 sources both accepted.
    pub lng: f32,
    /// Crater diameter in kilometers.
    pub diameter: f32,
    pub status: CraterStatus,
    /// Holder name, meaningful when status is taken.
    #[serde(rename = "takenBy", default, skip_serializing_if = "Option::is_none")]
    pub taken_by: Option<String>,
    /// Informational price; meaningful for available/taken craters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Feature {
    /// Whether this record can be placed on the sphere at all.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && self.lng.is_finite()
            && (-180.0..=360.0).contains(&self.lng)
            && self.diameter.is_finite()
            && self.diameter > 0.0
    }

    pub fn is_taken(&self) -> bool {
        self.status == CraterStatus::Taken
    }

    pub fn is_official(&self) -> bool {
        self.status == CraterStatus::Official
    }
}

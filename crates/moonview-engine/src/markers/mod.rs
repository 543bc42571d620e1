pub mod picking;
pub mod registry;

pub use registry::MarkerRegistry;

use glam::Vec3;

use crate::catalog::CraterStatus;

/// Highlight state of a single marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    #[default]
    Normal,
    Highlighted,
}

/// "Go" color for available craters.
pub const COLOR_AVAILABLE: [f32; 3] = [0.30, 0.69, 0.31];
/// "Stop" color for taken/official craters.
pub const COLOR_TAKEN: [f32; 3] = [0.90, 0.22, 0.21];
/// Accent color for the selected marker, overriding status color.
pub const COLOR_SELECTED: [f32; 3] = [1.00, 0.76, 0.03];

/// Status-derived base color. Pure and idempotent.
pub fn status_color(status: CraterStatus) -> [f32; 3] {
    match status {
        CraterStatus::Available => COLOR_AVAILABLE,
        CraterStatus::Taken | CraterStatus::Official => COLOR_TAKEN,
    }
}

/// The renderable representation of a catalog feature.
///
/// Markers are derived data: created on rebuild, destroyed when the
/// catalog is replaced, never mutated in place except for highlight
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: String,
    pub name: String,
    pub status: CraterStatus,
    /// Crater diameter in kilometers, drives rendered size.
    pub diameter: f32,
    /// Position on the marker sphere (surface radius plus altitude).
    pub position: Vec3,
    pub visual: VisualState,
}

impl Marker {
    /// Current color: accent when highlighted, status color otherwise.
    /// Re-deriving is idempotent.
    pub fn color(&self) -> [f32; 3] {
        match self.visual {
            VisualState::Highlighted => COLOR_SELECTED,
            VisualState::Normal => status_color(self.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_colors_are_distinguishable() {
        assert_ne!(status_color(CraterStatus::Available), status_color(CraterStatus::Taken));
        assert_ne!(status_color(CraterStatus::Available), COLOR_SELECTED);
        assert_ne!(status_color(CraterStatus::Taken), COLOR_SELECTED);
    }

    #[test]
    fn official_shares_the_stop_color() {
        assert_eq!(status_color(CraterStatus::Official), status_color(CraterStatus::Taken));
    }

    #[test]
    fn highlight_overrides_status_color() {
        let mut m = Marker {
            id: "a".into(),
            name: "a".into(),
            status: CraterStatus::Available,
            diameter: 1.0,
            position: Vec3::X,
            visual: VisualState::Normal,
        };
        assert_eq!(m.color(), COLOR_AVAILABLE);
        m.visual = VisualState::Highlighted;
        assert_eq!(m.color(), COLOR_SELECTED);
        // Idempotent re-derivation.
        assert_eq!(m.color(), m.color());
    }
}

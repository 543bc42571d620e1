pub mod instance;

pub use instance::{MarkerBuffer, MarkerInstance};

use glam::Vec3;

use crate::geo;
use crate::markers::MarkerRegistry;

/// Rendered marker size bounds in world units.
const MIN_MARKER_SIZE: f32 = 0.03;
const MAX_MARKER_SIZE: f32 = 0.12;
/// World units of rendered size per kilometer of crater diameter.
const SIZE_PER_KM: f32 = 0.002;

/// Fill the marker buffer from the registry for the current frame.
///
/// Markers on the far side of the body (dot <= 0 against the camera)
/// are culled; the rest carry their live color and a diameter-derived
/// size. Recomputed every frame since culling depends on the camera.
pub fn build_marker_buffer(registry: &MarkerRegistry, camera_pos: Vec3, buffer: &mut MarkerBuffer) {
    buffer.clear();
    for marker in registry.iter() {
        if !geo::is_front_facing(marker.position, camera_pos) {
            continue;
        }
        let [r, g, b] = marker.color();
        let size = (marker.diameter * SIZE_PER_KM).clamp(MIN_MARKER_SIZE, MAX_MARKER_SIZE);
        buffer.push(MarkerInstance {
            x: marker.position.x,
            y: marker.position.y,
            z: marker.position.z,
            size,
            r,
            g,
            b,
            alpha: 1.0,
        });
    }
}

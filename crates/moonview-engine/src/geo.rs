use glam::Vec3;

/// Normalize a longitude in degrees to [-180, 180).
///
/// Catalog sources disagree on whether longitude runs -180..180 or
/// 0..360; both are accepted and folded onto the -180..180 convention,
/// keeping the seam at ±180.
pub fn normalize_lng(lng_deg: f32) -> f32 {
    (lng_deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Project a latitude/longitude pair onto a sphere of the given radius.
///
/// Right-handed convention with the seam at lng = ±180:
/// - phi = (90 - lat) deg, polar angle from the north pole
/// - theta = (lng + 180) deg, azimuth
/// - x = -r sin(phi) cos(theta), y = r cos(phi), z = r sin(phi) sin(theta)
///
/// `radius` should sit at or slightly outside the rendered surface so
/// markers do not z-fight with the body.
pub fn project(lat_deg: f32, lng_deg: f32, radius: f32) -> Vec3 {
    let lng_deg = normalize_lng(lng_deg);
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lng_deg + 180.0).to_radians();
    Vec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Whether a surface point faces the camera.
///
/// A point is hidden when the dot product of its direction and the
/// camera direction is <= 0 (back side of the body relative to the
/// viewer). Depends on the live camera position, so callers recompute
/// this every frame.
pub fn is_front_facing(point: Vec3, camera_pos: Vec3) -> bool {
    point.normalize_or_zero().dot(camera_pos.normalize_or_zero()) > 0.0
}

use glam::Vec3;

use super::registry::MarkerRegistry;

/// Nearest marker intersected by a ray, if any.
///
/// Each marker is tested as a sphere of `pick_radius` around its
/// position; the hit with the smallest positive ray parameter wins.
/// An empty registry yields `None`.
pub fn pick(registry: &MarkerRegistry, origin: Vec3, direction: Vec3, pick_radius: f32) -> Option<String> {
    let dir = direction.normalize_or_zero();
    if dir == Vec3::ZERO {
        return None;
    }

    let mut best: Option<(f32, &str)> = None;
    for marker in registry.iter() {
        if let Some(t) = ray_sphere(origin, dir, marker.position, pick_radius) {
            if best.map_or(true, |(best_t, _)| t < best_t) {
                best = Some((t, marker.id.as_str()));
            }
        }
    }
    best.map(|(_, id)| id.to_string())
}

/// Smallest positive ray parameter hitting a sphere, `None` on miss.
/// `dir` must be normalized.
fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t_near = -b - sqrt_disc;
    let t_far = -b + sqrt_disc;
    if t_near > 0.0 {
        Some(t_near)
    } else if t_far > 0.0 {
        Some(t_far)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CraterStatus, Feature, MarkerFilter};

    fn feat(id: &str, lat: f32, lng: f32) -> Feature {
        Feature {
            id: id.to_string(),
            name: id.to_string(),
            lat,
            lng,
            diameter: 5.0,
            status: CraterStatus::Available,
            taken_by: None,
            price: None,
        }
    }

    fn registry(features: Vec<Feature>) -> MarkerRegistry {
        let mut reg = MarkerRegistry::new();
        reg.rebuild(&Catalog::from_features(features), &MarkerFilter::default(), 2.0);
        reg
    }

    #[test]
    fn empty_registry_picks_nothing() {
        let reg = registry(vec![]);
        assert_eq!(pick(&reg, Vec3::new(0.0, 0.0, 5.0), -Vec3::Z, 0.1), None);
    }

    #[test]
    fn ray_through_marker_hits_it() {
        // lat=0 lng=0 projects to (+2, 0, 0) at radius 2.
        let reg = registry(vec![feat("front", 0.0, 0.0)]);
        let hit = pick(&reg, Vec3::new(5.0, 0.0, 0.0), -Vec3::X, 0.1);
        assert_eq!(hit.as_deref(), Some("front"));
    }

    #[test]
    fn miss_returns_none() {
        let reg = registry(vec![feat("front", 0.0, 0.0)]);
        assert_eq!(pick(&reg, Vec3::new(5.0, 0.0, 0.0), Vec3::Y, 0.1), None);
    }

    #[test]
    fn nearest_of_two_colinear_markers_wins() {
        // Same ray passes near both the front marker and its antipode;
        // the front one is closer to the camera.
        let reg = registry(vec![feat("near", 0.0, 0.0), feat("far", 0.0, 180.0)]);
        let hit = pick(&reg, Vec3::new(5.0, 0.0, 0.0), -Vec3::X, 0.2);
        assert_eq!(hit.as_deref(), Some("near"));
    }

    #[test]
    fn markers_behind_the_origin_are_ignored() {
        let reg = registry(vec![feat("behind", 0.0, 0.0)]);
        // Camera past the marker looking away from it.
        assert_eq!(pick(&reg, Vec3::new(5.0, 0.0, 0.0), Vec3::X, 0.1), None);
    }
}

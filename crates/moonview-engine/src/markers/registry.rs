use std::collections::HashMap;

use crate::catalog::{Catalog, MarkerFilter};
use crate::geo;

use super::{Marker, VisualState};

/// Flat marker storage with an id index.
///
/// Sized for catalogs of hundreds to low thousands of craters; the
/// whole set is rebuilt on every `sync-craters`, never patched.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    markers: Vec<Marker>,
    index: HashMap<String, usize>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destroy all current markers and recreate one per catalog
    /// feature passing the filter, in catalog order. No marker from a
    /// previous catalog survives this call.
    pub fn rebuild(&mut self, catalog: &Catalog, filter: &MarkerFilter, radius: f32) {
        self.markers.clear();
        self.index.clear();
        for feature in catalog.iter().filter(|f| filter.accepts(f)) {
            let marker = Marker {
                id: feature.id.clone(),
                name: feature.name.clone(),
                status: feature.status,
                diameter: feature.diameter,
                position: geo::project(feature.lat, feature.lng, radius),
                visual: VisualState::Normal,
            };
            self.index.insert(marker.id.clone(), self.markers.len());
            self.markers.push(marker);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Marker> {
        self.index.get(id).map(|&i| &self.markers[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Marker> {
        self.index.get(id).map(|&i| &mut self.markers[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn clear(&mut self) {
        self.markers.clear();
        self.index.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CraterStatus, Feature};

    fn feat(id: &str, lat: f32, lng: f32, status: CraterStatus) -> Feature {
        Feature {
            id: id.to_string(),
            name: id.to_string(),
            lat,
            lng,
            diameter: 5.0,
            status,
            taken_by: None,
            price: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_features(vec![
            feat("CR0001", 18.5, 122.7, CraterStatus::Available),
            feat("CR0003", 0.67, 23.47, CraterStatus::Taken),
            feat("TYC", -43.3, -11.4, CraterStatus::Official),
        ])
    }

    #[test]
    fn rebuild_creates_one_marker_per_feature() {
        let mut reg = MarkerRegistry::new();
        reg.rebuild(&catalog(), &MarkerFilter::default(), 2.02);
        assert_eq!(reg.len(), 3);
        assert!(reg.get("CR0001").is_some());
        assert!(reg.get("CR0003").is_some());
        assert!(reg.get("TYC").is_some());
        assert!(reg.get("missing").is_none());
    }

    #[test]
    fn rebuild_discards_previous_markers() {
        let mut reg = MarkerRegistry::new();
        reg.rebuild(&catalog(), &MarkerFilter::default(), 2.02);
        let smaller = Catalog::from_features(vec![feat("CR0001", 18.5, 122.7, CraterStatus::Available)]);
        reg.rebuild(&smaller, &MarkerFilter::default(), 2.02);
        assert_eq!(reg.len(), 1);
        assert!(reg.get("CR0003").is_none());
    }

    #[test]
    fn rebuild_applies_filter() {
        let mut reg = MarkerRegistry::new();
        let filter = MarkerFilter {
            status: Some(CraterStatus::Available),
            search: None,
        };
        reg.rebuild(&catalog(), &filter, 2.02);
        assert_eq!(reg.len(), 1);
        assert!(reg.get("CR0001").is_some());
    }

    #[test]
    fn markers_sit_on_the_marker_sphere() {
        let mut reg = MarkerRegistry::new();
        reg.rebuild(&catalog(), &MarkerFilter::default(), 2.02);
        for m in reg.iter() {
            assert!((m.position.length() - 2.02).abs() < 1e-3);
        }
    }

    #[test]
    fn iteration_follows_catalog_order() {
        let mut reg = MarkerRegistry::new();
        reg.rebuild(&catalog(), &MarkerFilter::default(), 2.02);
        let ids: Vec<&str> = reg.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["CR0001", "CR0003", "TYC"]);
    }
}

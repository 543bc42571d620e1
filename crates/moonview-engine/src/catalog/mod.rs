pub mod feature;
pub mod filter;

pub use feature::{CraterStatus, Feature};
pub use filter::MarkerFilter;

/// The active ordered set of crater features.
///
/// A catalog is only ever replaced wholesale (the `sync-craters`
/// command swaps the whole set); there is no incremental add/remove.
/// Construction is the validation boundary: records that cannot be
/// placed on the sphere are dropped here so everything downstream is
/// total over its input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    features: Vec<Feature>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from raw records, keeping catalog order.
    ///
    /// Dropped with a warn log:
    /// - non-finite or out-of-range latitude (outside [-90, 90])
    /// - non-finite longitude or outside [-180, 360]
    /// - non-positive or non-finite diameter
    /// - duplicate ids (first occurrence wins)
    pub fn from_features(features: Vec<Feature>) -> Self {
        let mut out: Vec<Feature> = Vec::with_capacity(features.len());
        for f in features {
            if !f.is_valid() {
                log::warn!("catalog: dropping invalid feature {:?}", f.id);
                continue;
            }
            if out.iter().any(|existing| existing.id == f.id) {
                log::warn!("catalog: dropping duplicate id {:?}", f.id);
                continue;
            }
            out.push(f);
        }
        Self { features: out }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }
}

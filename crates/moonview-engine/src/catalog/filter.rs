use super::feature::{CraterStatus, Feature};

/// Predicate applied during a marker rebuild.
///
/// Both criteria must match. The default filter accepts everything,
/// which is what the `sync-craters` command uses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerFilter {
    /// Only features with exactly this status.
    pub status: Option<CraterStatus>,
    /// Case-insensitive substring match against name or id.
    pub search: Option<String>,
}

impl MarkerFilter {
    pub fn accepts(&self, feature: &Feature) -> bool {
        if let Some(status) = self.status {
            if feature.status != status {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !feature.name.to_lowercase().contains(&needle)
                && !feature.id.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        true
    }
}

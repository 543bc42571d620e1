use crate::markers::{MarkerRegistry, VisualState};

/// Tracks the single selected marker.
///
/// The selection holds a lookup key into the current registry rather
/// than an owning reference, so a catalog swap invalidates it via
/// `revalidate` instead of dangling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.current.as_deref() == Some(id)
    }

    /// Select a marker by id. Restores the previous marker's status
    /// color before applying the accent, so at most one marker is ever
    /// highlighted. Absent id leaves the state unchanged.
    ///
    /// Returns whether the selection now points at `id`.
    pub fn select_by_id(&mut self, registry: &mut MarkerRegistry, id: &str) -> bool {
        if !registry.contains(id) {
            return false;
        }
        // Restore first: two highlighted markers must never coexist.
        if let Some(prev) = self.current.take() {
            if let Some(marker) = registry.get_mut(&prev) {
                marker.visual = VisualState::Normal;
            }
        }
        if let Some(marker) = registry.get_mut(id) {
            marker.visual = VisualState::Highlighted;
        }
        self.current = Some(id.to_string());
        true
    }

    /// Deselect, restoring the status color of the previous marker.
    pub fn clear(&mut self, registry: &mut MarkerRegistry) {
        if let Some(prev) = self.current.take() {
            if let Some(marker) = registry.get_mut(&prev) {
                marker.visual = VisualState::Normal;
            }
        }
    }

    /// Reconcile with a freshly rebuilt registry: drop the selection
    /// when its id is gone, re-apply the accent when it survived the
    /// swap (rebuilt markers start out Normal).
    pub fn revalidate(&mut self, registry: &mut MarkerRegistry) {
        let Some(id) = self.current.clone() else {
            return;
        };
        match registry.get_mut(&id) {
            Some(marker) => marker.visual = VisualState::Highlighted,
            None => self.current = None,
        }
    }
}

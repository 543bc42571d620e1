use glam::Vec3;

use crate::bridge::{OriginPolicy, SelectedCrater, ViewerCommand, ViewerEvent};
use crate::catalog::{Catalog, Feature, MarkerFilter};
use crate::markers::{picking, MarkerRegistry};
use crate::selection::Selection;
use crate::view::ViewState;

/// Configuration for one viewer instance, provided by the embedder.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Radius of the rendered body.
    pub surface_radius: f32,
    /// Marker sphere radius as a multiple of the surface radius.
    /// Slightly above 1 so markers do not z-fight with the body.
    pub marker_altitude: f32,
    /// Pick sphere radius around each marker, in world units.
    pub pick_radius: f32,
    /// Camera distance bounds.
    pub min_distance: f32,
    pub max_distance: f32,
    pub default_distance: f32,
    /// Auto-rotate speed in degrees per second.
    pub auto_rotate_speed: f32,
    /// Whether a programmatic `highlight-crater` re-emits
    /// `crater-selected` back to the parent. Ray picks always emit.
    pub emit_on_highlight: bool,
    /// Origins accepted by the message handler, exact match.
    /// Local development hosts are always accepted.
    pub allowed_origins: Vec<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            surface_radius: 2.0,
            marker_altitude: 1.01,
            pick_radius: 0.08,
            min_distance: 2.5,
            max_distance: 10.0,
            default_distance: 5.0,
            auto_rotate_speed: 12.0,
            emit_on_highlight: false,
            allowed_origins: Vec::new(),
        }
    }
}

impl ViewerConfig {
    /// Radius at which markers are placed.
    pub fn marker_radius(&self) -> f32 {
        self.surface_radius * self.marker_altitude
    }

    /// Enforce `min <= default <= max`: inverted distance bounds are
    /// swapped and the default is clamped into them. `Viewer::new`
    /// applies this, so a misconfigured embedder cannot invert the
    /// zoom mapping.
    pub fn normalized(mut self) -> Self {
        if self.min_distance > self.max_distance {
            std::mem::swap(&mut self.min_distance, &mut self.max_distance);
        }
        self.default_distance = self.default_distance.clamp(self.min_distance, self.max_distance);
        self
    }
}

/// One viewer instance: owns the catalog, markers, selection, view
/// state and the outbound event queue. No global state; several
/// independent viewers can coexist and unit tests run headless.
///
/// All command handling is synchronous; a message fully applies or is
/// fully ignored before the next one is looked at.
pub struct Viewer {
    config: ViewerConfig,
    origins: OriginPolicy,
    catalog: Catalog,
    markers: MarkerRegistry,
    selection: Selection,
    view: ViewState,
    events: Vec<ViewerEvent>,
    ready_sent: bool,
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        let config = config.normalized();
        let origins = OriginPolicy::new(config.allowed_origins.clone());
        let view = ViewState::new(
            config.min_distance,
            config.max_distance,
            config.default_distance,
            config.auto_rotate_speed,
        );
        Self {
            config,
            origins,
            catalog: Catalog::new(),
            markers: MarkerRegistry::new(),
            selection: Selection::new(),
            view,
            events: Vec::new(),
            ready_sent: false,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn markers(&self) -> &MarkerRegistry {
        &self.markers
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Entry point for a raw cross-frame message.
    ///
    /// The origin gate runs before the body is parsed; disallowed
    /// origins, unknown command types and malformed payloads are all
    /// dropped with a debug log. This never panics and never leaves
    /// state half-applied.
    pub fn handle_message(&mut self, origin: &str, json: &str) {
        if !self.origins.allows(origin) {
            log::debug!("bridge: dropping message from disallowed origin {origin}");
            return;
        }
        match ViewerCommand::from_json(json) {
            Ok(cmd) => self.apply_command(cmd),
            Err(err) => log::debug!("bridge: dropping malformed message: {err}"),
        }
    }

    /// Apply a validated command.
    pub fn apply_command(&mut self, cmd: ViewerCommand) {
        match cmd {
            ViewerCommand::SyncCraters { craters } => self.sync_craters(craters),
            ViewerCommand::Zoom { value } => {
                if value.is_finite() {
                    self.view.set_zoom_percent(value);
                } else {
                    log::debug!("bridge: ignoring non-finite zoom value");
                }
            }
            ViewerCommand::Rotation { value } => {
                if value.is_finite() {
                    self.view.set_yaw_degrees(value);
                } else {
                    log::debug!("bridge: ignoring non-finite rotation value");
                }
            }
            ViewerCommand::Reset => self.view.reset(),
            ViewerCommand::HighlightCrater { crater_id } => self.highlight_crater(&crater_id),
            ViewerCommand::AutoRotate { value } => self.view.set_auto_rotate(value),
        }
    }

    /// Replace the active catalog wholesale and rebuild every marker.
    /// A selection whose id is absent from the new catalog is cleared.
    pub fn sync_craters(&mut self, craters: Vec<Feature>) {
        self.catalog = Catalog::from_features(craters);
        self.markers
            .rebuild(&self.catalog, &MarkerFilter::default(), self.config.marker_radius());
        self.selection.revalidate(&mut self.markers);
    }

    /// Rebuild markers from the current catalog with a filter, e.g.
    /// for a status/search view. Selection rules match `sync_craters`.
    pub fn apply_filter(&mut self, filter: &MarkerFilter) {
        self.markers
            .rebuild(&self.catalog, filter, self.config.marker_radius());
        self.selection.revalidate(&mut self.markers);
    }

    /// Programmatic highlight: select and recenter the camera toward
    /// the marker at the current distance. Absent id is a no-op.
    fn highlight_crater(&mut self, id: &str) {
        if !self.selection.select_by_id(&mut self.markers, id) {
            log::debug!("bridge: highlight-crater ignored, unknown id {id:?}");
            return;
        }
        if let Some(marker) = self.markers.get(id) {
            self.view.look_at(marker.position);
        }
        if self.config.emit_on_highlight {
            self.emit_selected(id);
        }
    }

    /// User-driven ray pick. Selects the nearest intersected marker
    /// and emits `crater-selected`; leaves everything unchanged when
    /// the ray misses.
    pub fn select_by_ray(&mut self, origin: Vec3, direction: Vec3) -> bool {
        let Some(id) = picking::pick(&self.markers, origin, direction, self.config.pick_radius)
        else {
            return false;
        };
        if self.selection.select_by_id(&mut self.markers, &id) {
            self.emit_selected(&id);
            true
        } else {
            false
        }
    }

    /// Deselect the current marker, if any.
    pub fn clear_selection(&mut self) {
        self.selection.clear(&mut self.markers);
    }

    /// Direct model pitch control for the up/down rotation buttons.
    /// There is no message command for pitch; buttons call this with
    /// the same effect the yaw buttons get from `rotation`.
    pub fn set_pitch_degrees(&mut self, value: f32) {
        if value.is_finite() {
            self.view.set_pitch_degrees(value);
        } else {
            log::debug!("bridge: ignoring non-finite pitch value");
        }
    }

    /// Signal that the scene is ready. Emits `iframe-ready` at most
    /// once per session; later calls are no-ops.
    pub fn mark_ready(&mut self, timestamp: Option<f64>) {
        if self.ready_sent {
            return;
        }
        self.ready_sent = true;
        self.events.push(ViewerEvent::IframeReady { timestamp });
    }

    /// Advance time-driven state (auto-rotate yaw).
    pub fn tick(&mut self, dt: f32) {
        self.view.tick(dt);
    }

    /// Take all pending outbound events, oldest first.
    pub fn drain_events(&mut self) -> Vec<ViewerEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    fn emit_selected(&mut self, id: &str) {
        if let Some(feature) = self.catalog.get(id) {
            self.events.push(ViewerEvent::CraterSelected {
                crater: SelectedCrater::from(feature),
            });
        }
    }
}

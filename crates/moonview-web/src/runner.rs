use std::collections::VecDeque;

use glam::Vec3;
use moonview_engine::{build_marker_buffer, MarkerBuffer, Viewer, ViewerConfig};

/// Wires the headless viewer core to the browser loop.
///
/// JS delivers `postMessage` payloads and pointer rays in, and reads
/// back the marker instance buffer, the camera state and serialized
/// outbound events each frame.
pub struct ViewerRunner {
    viewer: Viewer,
    marker_buffer: MarkerBuffer,
    /// Outbound events serialized to JSON, drained FIFO by JS.
    out_events: VecDeque<String>,
}

impl ViewerRunner {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            viewer: Viewer::new(config),
            marker_buffer: MarkerBuffer::new(),
            out_events: VecDeque::new(),
        }
    }

    /// Signal scene readiness; forwards `iframe-ready` at most once.
    pub fn ready(&mut self, timestamp: f64) {
        self.viewer.mark_ready(Some(timestamp));
        self.collect_events();
    }

    /// One frame: advance auto-rotate and rebuild the marker buffer
    /// with back-face culling against the live camera.
    pub fn tick(&mut self, dt: f32) {
        self.viewer.tick(dt);
        build_marker_buffer(
            self.viewer.markers(),
            self.viewer.view().camera_position(),
            &mut self.marker_buffer,
        );
    }

    /// Deliver one cross-frame message (origin + raw JSON body).
    pub fn handle_message(&mut self, origin: &str, json: &str) {
        self.viewer.handle_message(origin, json);
        self.collect_events();
    }

    /// Resolve a screen click already converted to a world-space ray
    /// by the JS renderer. Returns whether a marker was hit.
    pub fn pointer_pick(&mut self, ox: f32, oy: f32, oz: f32, dx: f32, dy: f32, dz: f32) -> bool {
        let hit = self
            .viewer
            .select_by_ray(Vec3::new(ox, oy, oz), Vec3::new(dx, dy, dz));
        self.collect_events();
        hit
    }

    /// Oldest pending outbound event as JSON, if any.
    pub fn take_event(&mut self) -> Option<String> {
        self.out_events.pop_front()
    }

    /// Direct pitch control for the up/down rotation buttons.
    pub fn set_pitch_degrees(&mut self, value: f32) {
        self.viewer.set_pitch_degrees(value);
    }

    // ---- Accessors for zero-copy reads from JS ----

    pub fn markers_ptr(&self) -> *const f32 {
        self.marker_buffer.instances_ptr()
    }

    pub fn marker_count(&self) -> u32 {
        self.marker_buffer.instance_count()
    }

    pub fn camera_distance(&self) -> f32 {
        self.viewer.view().distance()
    }

    pub fn camera_x(&self) -> f32 {
        self.viewer.view().camera_position().x
    }

    pub fn camera_y(&self) -> f32 {
        self.viewer.view().camera_position().y
    }

    pub fn camera_z(&self) -> f32 {
        self.viewer.view().camera_position().z
    }

    pub fn model_yaw_degrees(&self) -> f32 {
        self.viewer.view().yaw_degrees()
    }

    pub fn model_pitch_degrees(&self) -> f32 {
        self.viewer.view().pitch_degrees()
    }

    fn collect_events(&mut self) {
        for event in self.viewer.drain_events() {
            match serde_json::to_string(&event) {
                Ok(json) => self.out_events.push_back(json),
                Err(err) => log::warn!("bridge: failed to serialize event: {err}"),
            }
        }
    }
}

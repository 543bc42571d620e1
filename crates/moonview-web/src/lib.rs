pub mod runner;

pub use runner::ViewerRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use moonview_engine::ViewerConfig;

thread_local! {
    static RUNNER: RefCell<Option<ViewerRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut ViewerRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Viewer not initialized. Call viewer_init() first.");
        f(runner)
    })
}

/// Initialize the viewer. `allowed_origins_json` is a JSON array of
/// origin strings; an unparsable value leaves the allow-list empty
/// (local development hosts still pass).
#[wasm_bindgen]
pub fn viewer_init(allowed_origins_json: &str, emit_on_highlight: bool) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let allowed_origins: Vec<String> = serde_json::from_str(allowed_origins_json).unwrap_or_else(|err| {
        log::warn!("viewer_init: bad origin list, allowing local dev only: {err}");
        Vec::new()
    });

    let config = ViewerConfig {
        allowed_origins,
        emit_on_highlight,
        ..ViewerConfig::default()
    };

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(ViewerRunner::new(config));
    });
    log::info!("moonview: initialized");
}

/// Signal that the scene and model finished loading.
#[wasm_bindgen]
pub fn viewer_ready(timestamp: f64) {
    with_runner(|r| r.ready(timestamp));
}

/// One frame tick; `dt` in seconds.
#[wasm_bindgen]
pub fn viewer_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

/// Deliver a `postMessage` payload: event origin plus raw JSON body.
#[wasm_bindgen]
pub fn viewer_message(origin: &str, json: &str) {
    with_runner(|r| r.handle_message(origin, json));
}

/// Resolve a click ray (world-space origin and direction) against the
/// markers. Returns true when a marker was selected.
#[wasm_bindgen]
pub fn viewer_pick(ox: f32, oy: f32, oz: f32, dx: f32, dy: f32, dz: f32) -> bool {
    with_runner(|r| r.pointer_pick(ox, oy, oz, dx, dy, dz))
}

/// Oldest pending outbound event as a JSON string, or undefined.
/// The hosting page forwards these via `postMessage` to the parent.
#[wasm_bindgen]
pub fn viewer_take_event() -> Option<String> {
    with_runner(|r| r.take_event())
}

// ---- Marker buffer accessors (zero-copy reads) ----

#[wasm_bindgen]
pub fn get_markers_ptr() -> *const f32 {
    with_runner(|r| r.markers_ptr())
}

#[wasm_bindgen]
pub fn get_marker_count() -> u32 {
    with_runner(|r| r.marker_count())
}

// ---- View state accessors ----

#[wasm_bindgen]
pub fn get_camera_distance() -> f32 {
    with_runner(|r| r.camera_distance())
}

#[wasm_bindgen]
pub fn get_camera_x() -> f32 {
    with_runner(|r| r.camera_x())
}

#[wasm_bindgen]
pub fn get_camera_y() -> f32 {
    with_runner(|r| r.camera_y())
}

#[wasm_bindgen]
pub fn get_camera_z() -> f32 {
    with_runner(|r| r.camera_z())
}

#[wasm_bindgen]
pub fn get_model_yaw_degrees() -> f32 {
    with_runner(|r| r.model_yaw_degrees())
}

#[wasm_bindgen]
pub fn get_model_pitch_degrees() -> f32 {
    with_runner(|r| r.model_pitch_degrees())
}

/// Direct pitch control for the up/down rotation buttons; yaw buttons
/// go through the `rotation` message instead.
#[wasm_bindgen]
pub fn viewer_set_pitch(value: f32) {
    with_runner(|r| r.set_pitch_degrees(value));
}

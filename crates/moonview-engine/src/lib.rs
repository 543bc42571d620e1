pub mod api;
pub mod bridge;
pub mod catalog;
pub mod geo;
pub mod markers;
pub mod render;
pub mod selection;
pub mod view;

// Re-export key types at crate root for convenience
pub use api::viewer::{Viewer, ViewerConfig};
pub use bridge::events::{SelectedCrater, ViewerEvent};
pub use bridge::origin::OriginPolicy;
pub use bridge::protocol::ViewerCommand;
pub use catalog::{Catalog, CraterStatus, Feature, MarkerFilter};
pub use markers::{Marker, MarkerRegistry, VisualState};
pub use render::instance::{MarkerBuffer, MarkerInstance};
pub use render::build_marker_buffer;
pub use selection::Selection;
pub use view::ViewState;

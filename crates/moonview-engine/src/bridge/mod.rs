pub mod events;
pub mod origin;
pub mod protocol;

pub use events::{SelectedCrater, ViewerEvent};
pub use origin::OriginPolicy;
pub use protocol::ViewerCommand;

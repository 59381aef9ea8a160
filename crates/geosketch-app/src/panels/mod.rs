//! UI panels

mod map_view;
mod toolbar;

pub use map_view::{MapPanel, MapPanelConfig};

//! Animated stage diagram whose connectors follow the measured node layout.

mod animation;
mod component;
mod dom;
mod layout;
mod paths;
mod registry;
mod state;
#[cfg(test)]
mod testing;
mod types;
mod viewport;

pub use component::PipelineDiagram;
pub use dom::{DomLayout, FrameLoop, STAGE_ATTR, VisibilityWatch, WindowViewport};
pub use layout::{LayoutProvider, measure_all};
pub use types::{ColorStops, DiagramConfig, DiagramData, StageEdge, StageNode};
pub use viewport::{ViewportSource, ViewportWatcher};

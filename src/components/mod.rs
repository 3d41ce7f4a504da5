//! Reusable view components.

pub mod config_tabs;
pub mod pipeline_diagram;

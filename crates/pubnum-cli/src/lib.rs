//! CLI library components for the publication number converter.

pub mod logging;
pub mod pipeline;
pub mod types;

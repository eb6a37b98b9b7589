pub mod api;
pub mod core;
pub mod layout;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::LayoutConfig;
pub use api::error::{LogError, ValidationError};
pub use api::types::{Direction, LayoutPoint, RawRecord, SolvedRecord};
pub use crate::core::ingest::{ingest, raw_records_from_json, validate};
pub use crate::core::shared::SharedLayout;
pub use crate::core::solved_log::SolvedLog;
pub use layout::{
    compute_layout, JitterSource, Layout, LayoutSnapshot, PathGeometry, PathLayoutEngine, Rng,
    SafeBounds, ScriptedJitter,
};
pub use renderer::color::VectorColor;
pub use renderer::path::PathRenderer;
pub use renderer::traits::{Canvas, StrokeStyle, TextLabel};

#[cfg(feature = "vectors")]
pub use renderer::mesh::{MeshCanvas, VectorVertex};

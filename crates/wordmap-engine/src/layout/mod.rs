//! Random-walk path layout: turns solved records into screen points and a polyline.

mod bounds;
mod engine;
mod geometry;
mod rng;
mod walk;

pub use bounds::SafeBounds;
pub use engine::{LayoutSnapshot, PathLayoutEngine};
pub use geometry::PathGeometry;
pub use rng::{JitterSource, Rng, ScriptedJitter};
pub use walk::{compute_layout, Layout};

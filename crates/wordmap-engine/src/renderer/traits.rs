//! Drawing surface contract for the path renderer.
//!
//! The renderer only issues three kinds of commands: an open stroked polyline,
//! a filled circle, and a centered text label. Backends decide how to rasterize
//! them (the lyon mesh backend here, or a platform canvas in the host).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::VectorColor;

/// Line style for the path polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub color: VectorColor,
}

/// A word label. `x` is the horizontal center, `y` the text baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: VectorColor,
}

pub trait Canvas {
    /// Stroke an open polyline through `points`.
    fn stroke_polyline(&mut self, points: &[Vec2], style: StrokeStyle);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: VectorColor);

    /// Draw text horizontally centered on `label.x`.
    fn draw_text(&mut self, label: TextLabel);
}

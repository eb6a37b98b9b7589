use serde::{Deserialize, Serialize};

use crate::renderer::color::VectorColor;

/// Layout and drawing constants shared by the engine and the renderer.
///
/// Every field falls back to its default when missing from JSON, so a host
/// can override just the values it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Length of one move before clamping (default: 150).
    pub step_distance: f32,
    /// Marker radius; also the horizontal edge margin (default: 10).
    pub point_radius: f32,
    /// Label text size; added to the top margin (default: 30).
    pub label_height: f32,
    /// Space between a marker and its label; added to the bottom margin (default: 40).
    pub label_gap: f32,
    /// Smallest jitter magnitude in degrees (default: 10).
    pub jitter_min_deg: f32,
    /// Largest jitter magnitude in degrees (default: 20).
    pub jitter_max_deg: f32,
    /// Polyline stroke width (default: 5).
    pub stroke_width: f32,
    pub line_color: VectorColor,
    pub point_color: VectorColor,
    pub label_color: VectorColor,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            step_distance: 150.0,
            point_radius: 10.0,
            label_height: 30.0,
            label_gap: 40.0,
            jitter_min_deg: 10.0,
            jitter_max_deg: 20.0,
            stroke_width: 5.0,
            line_color: VectorColor::BLUE,
            point_color: VectorColor::BLUE,
            label_color: VectorColor::BLACK,
        }
    }
}

impl LayoutConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the move length.
    pub fn with_step_distance(mut self, step_distance: f32) -> Self {
        self.step_distance = step_distance;
        self
    }

    /// Set the marker radius.
    pub fn with_point_radius(mut self, point_radius: f32) -> Self {
        self.point_radius = point_radius;
        self
    }

    /// Set the label text size and the marker-to-label gap.
    pub fn with_label(mut self, label_height: f32, label_gap: f32) -> Self {
        self.label_height = label_height;
        self.label_gap = label_gap;
        self
    }

    /// Set the jitter range in degrees.
    pub fn with_jitter_deg(mut self, min_deg: f32, max_deg: f32) -> Self {
        self.jitter_min_deg = min_deg;
        self.jitter_max_deg = max_deg;
        self
    }

    /// Copy with lengths clamped to be non-negative and the jitter
    /// bounds in ascending order. NaN lengths become zero.
    pub fn normalized(&self) -> Self {
        let non_negative = |v: f32| if v > 0.0 { v } else { 0.0 };
        let lo = non_negative(self.jitter_min_deg);
        let hi = non_negative(self.jitter_max_deg);
        Self {
            step_distance: non_negative(self.step_distance),
            point_radius: non_negative(self.point_radius),
            label_height: non_negative(self.label_height),
            label_gap: non_negative(self.label_gap),
            jitter_min_deg: lo.min(hi),
            jitter_max_deg: lo.max(hi),
            stroke_width: non_negative(self.stroke_width),
            ..self.clone()
        }
    }
}

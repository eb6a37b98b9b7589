use glam::Vec2;

use crate::api::config::LayoutConfig;

/// Rectangle every point must stay inside so its marker and label remain on screen.
///
/// The top margin reserves room for the label height; the bottom margin reserves
/// the marker-to-label gap. On a surface smaller than the margins the range
/// collapses onto its lower bound instead of inverting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl SafeBounds {
    pub fn new(width: f32, height: f32, config: &LayoutConfig) -> Self {
        let min = Vec2::new(config.point_radius, config.point_radius + config.label_height);
        let naive_max = Vec2::new(
            width - config.point_radius,
            height - config.point_radius - config.label_gap,
        );
        Self {
            min,
            max: naive_max.max(min),
        }
    }

    /// Clamp each axis independently.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(self.min.x, self.max.x), p.y.clamp(self.min.y, self.max.y))
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Whether either axis had to collapse onto its lower bound.
    pub fn is_collapsed(&self) -> bool {
        self.min.x == self.max.x || self.min.y == self.max.y
    }
}

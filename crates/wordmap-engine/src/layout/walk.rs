//! The random-walk layout pass.
//!
//! Starting at the surface center with heading 0, each movement record rotates
//! the heading by a random 10-20 degree deflection (either sign), steps a fixed
//! distance in the record's direction relative to that heading, and clamps the
//! result into [`SafeBounds`]. Terminal records reuse the previous position.

use glam::Vec2;

use super::bounds::SafeBounds;
use super::geometry::PathGeometry;
use super::rng::JitterSource;
use crate::api::config::LayoutConfig;
use crate::api::types::{LayoutPoint, SolvedRecord};

/// Output of one layout pass. `points[i]` is where `records[i]` is drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub points: Vec<LayoutPoint>,
    pub geometry: PathGeometry,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Draw one signed deflection in radians.
fn deflection<J: JitterSource + ?Sized>(jitter: &mut J, config: &LayoutConfig) -> f32 {
    let span = config.jitter_max_deg - config.jitter_min_deg;
    let magnitude = config.jitter_min_deg + jitter.next_unit() * span;
    let signed = if jitter.next_sign() { magnitude } else { -magnitude };
    signed.to_radians()
}

/// Lay out `records` on a `width` x `height` surface.
///
/// Returns an empty layout for an empty record list or a surface without
/// positive area (NaN sizes included). Jitter is skipped when there is only one
/// record, so a sole move goes straight along its direction.
pub fn compute_layout<J: JitterSource + ?Sized>(
    records: &[SolvedRecord],
    width: f32,
    height: f32,
    config: &LayoutConfig,
    jitter: &mut J,
) -> Layout {
    if records.is_empty() || !(width > 0.0) || !(height > 0.0) {
        return Layout::default();
    }

    let bounds = SafeBounds::new(width, height, config);
    let anchor = Vec2::new(width / 2.0, height / 2.0);
    let apply_jitter = records.len() > 1;

    let mut current = anchor;
    let mut heading = 0.0f32;
    let mut points = Vec::with_capacity(records.len());
    let mut geometry = PathGeometry::starting_at(anchor, records.len());

    for record in records {
        match record.direction.heading_offset() {
            Some(offset) => {
                if apply_jitter {
                    heading += deflection(jitter, config);
                }
                let raw = current + Vec2::from_angle(heading + offset) * config.step_distance;
                let next = bounds.clamp(raw);
                geometry.line_to(next);
                points.push(LayoutPoint::from(next));
                current = next;
            }
            None => {
                if points.len() < records.len() {
                    points.push(LayoutPoint::from(current));
                }
            }
        }
    }

    Layout { points, geometry }
}

use glam::Vec2;

use super::color::VectorColor;
use super::traits::{Canvas, StrokeStyle, TextLabel};
use crate::api::config::LayoutConfig;
use crate::api::types::SolvedRecord;
use crate::layout::Layout;

/// Draws a computed layout: the path line first, then a marker and a word
/// label for every point.
#[derive(Debug, Clone)]
pub struct PathRenderer {
    stroke: StrokeStyle,
    point_radius: f32,
    point_color: VectorColor,
    label_size: f32,
    label_gap: f32,
    label_color: VectorColor,
}

impl PathRenderer {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            stroke: StrokeStyle {
                width: config.stroke_width,
                color: config.line_color,
            },
            point_radius: config.point_radius,
            point_color: config.point_color,
            label_size: config.label_height,
            label_gap: config.label_gap,
            label_color: config.label_color,
        }
    }

    /// Baseline of the label under a marker at `y`.
    pub fn label_baseline(&self, y: f32) -> f32 {
        y + self.label_gap + self.label_size / 2.0
    }

    /// Issue draw commands for `layout` onto `canvas`. Returns the number of
    /// markers drawn; an empty layout draws nothing.
    pub fn draw<C: Canvas + ?Sized>(
        &self,
        records: &[SolvedRecord],
        layout: &Layout,
        canvas: &mut C,
    ) -> usize {
        if layout.points.is_empty() {
            return 0;
        }

        let vertices = layout.geometry.vertices();
        if vertices.len() >= 2 {
            canvas.stroke_polyline(vertices, self.stroke);
        }

        let mut drawn = 0;
        for (point, record) in layout.points.iter().zip(records) {
            let center = Vec2::from(*point);
            canvas.fill_circle(center, self.point_radius, self.point_color);
            canvas.draw_text(TextLabel {
                text: record.word.clone(),
                x: point.x,
                y: self.label_baseline(point.y),
                size: self.label_size,
                color: self.label_color,
            });
            drawn += 1;
        }
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Direction, LayoutPoint};
    use crate::layout::{compute_layout, Rng};

    #[derive(Debug, PartialEq)]
    enum Cmd {
        Line(usize),
        Circle(Vec2, f32),
        Text(String, f32, f32),
    }

    #[derive(Default)]
    struct Recorder {
        cmds: Vec<Cmd>,
    }

    impl Canvas for Recorder {
        fn stroke_polyline(&mut self, points: &[Vec2], _style: StrokeStyle) {
            self.cmds.push(Cmd::Line(points.len()));
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, _color: VectorColor) {
            self.cmds.push(Cmd::Circle(center, radius));
        }

        fn draw_text(&mut self, label: TextLabel) {
            self.cmds.push(Cmd::Text(label.text, label.x, label.y));
        }
    }

    #[test]
    fn empty_layout_draws_nothing() {
        let renderer = PathRenderer::new(&LayoutConfig::default());
        let mut canvas = Recorder::default();
        let drawn = renderer.draw(&[], &Layout::default(), &mut canvas);
        assert_eq!(drawn, 0);
        assert!(canvas.cmds.is_empty());
    }

    #[test]
    fn draws_line_then_marker_and_label_per_point() {
        let config = LayoutConfig::default();
        let records = vec![
            SolvedRecord::new("apple", Direction::Up),
            SolvedRecord::new("pear", Direction::Terminal),
        ];
        let layout = compute_layout(&records, 800.0, 800.0, &config, &mut Rng::new(4));
        let renderer = PathRenderer::new(&config);
        let mut canvas = Recorder::default();

        assert_eq!(renderer.draw(&records, &layout, &mut canvas), 2);
        assert_eq!(canvas.cmds[0], Cmd::Line(2));

        let p = layout.points[0];
        assert_eq!(canvas.cmds[1], Cmd::Circle(Vec2::new(p.x, p.y), 10.0));
        // Baseline sits gap + half the text size below the marker.
        assert_eq!(canvas.cmds[2], Cmd::Text("apple".into(), p.x, p.y + 40.0 + 15.0));
        assert_eq!(canvas.cmds[4], Cmd::Text("pear".into(), p.x, p.y + 40.0 + 15.0));
        assert_eq!(canvas.cmds.len(), 5);
    }

    #[test]
    fn anchor_only_layout_skips_the_line() {
        let config = LayoutConfig::default();
        let records = vec![SolvedRecord::new("solo", Direction::Terminal)];
        let layout = compute_layout(&records, 300.0, 300.0, &config, &mut Rng::new(1));
        let mut canvas = Recorder::default();

        PathRenderer::new(&config).draw(&records, &layout, &mut canvas);
        assert_eq!(canvas.cmds, vec![
            Cmd::Circle(Vec2::new(150.0, 150.0), 10.0),
            Cmd::Text("solo".into(), 150.0, 205.0),
        ]);
    }

    #[test]
    fn labels_stop_at_shorter_of_points_and_records() {
        let config = LayoutConfig::default();
        let layout = Layout {
            points: vec![LayoutPoint::new(50.0, 50.0), LayoutPoint::new(60.0, 60.0)],
            geometry: Default::default(),
        };
        let records = vec![SolvedRecord::new("only", Direction::Up)];
        let mut canvas = Recorder::default();
        assert_eq!(PathRenderer::new(&config).draw(&records, &layout, &mut canvas), 1);
    }
}

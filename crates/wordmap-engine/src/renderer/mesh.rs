//! Lyon-based mesh backend for the path renderer.
//!
//! Tessellates the stroked path and the filled markers on the CPU into a flat
//! triangle-list vertex buffer that a GPU or canvas host can upload as-is. Text
//! is not rasterized here; labels are collected for the host to draw.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::{Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    LineJoin, StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor,
    VertexBuffers,
};

use super::color::VectorColor;
use super::traits::{Canvas, StrokeStyle, TextLabel};

/// Curve flattening tolerance in surface units.
const TOLERANCE: f32 = 0.5;

/// Per-vertex data for path rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24

    fn at(x: f32, y: f32, color: VectorColor) -> Self {
        Self {
            x,
            y,
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }
}

struct FillVertexCtor {
    color: VectorColor,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        VectorVertex::at(vertex.position().x, vertex.position().y, self.color)
    }
}

struct StrokeVertexCtor {
    color: VectorColor,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        VectorVertex::at(vertex.position().x, vertex.position().y, self.color)
    }
}

/// [`Canvas`] that tessellates into a vertex buffer and keeps the labels.
///
/// Call [`clear`](Self::clear) before each redraw.
pub struct MeshCanvas {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
    labels: Vec<TextLabel>,
}

impl MeshCanvas {
    pub fn new() -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(4096 * VectorVertex::FLOATS),
            labels: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.labels.clear();
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Flat float buffer, `VectorVertex::FLOATS` per vertex.
    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    pub fn vertices(&self) -> &[VectorVertex] {
        bytemuck::cast_slice(&self.buffer)
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// Flush indexed geometry to the flat buffer as triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(bytemuck::cast_slice(std::slice::from_ref(v)));
        }
        self.discard_geometry();
    }

    fn discard_geometry(&mut self) {
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }
}

impl Default for MeshCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for MeshCanvas {
    fn stroke_polyline(&mut self, points: &[Vec2], style: StrokeStyle) {
        if points.len() < 2 || style.width <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(false); // open path
        let path = builder.build();

        let options = StrokeOptions::tolerance(TOLERANCE)
            .with_line_width(style.width)
            .with_line_join(LineJoin::Round);
        let result = self.stroke_tess.tessellate_path(
            &path,
            &options,
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color: style.color }),
        );
        match result {
            Ok(()) => self.flush_geometry(),
            Err(err) => {
                log::warn!("stroke tessellation failed: {:?}", err);
                self.discard_geometry();
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: VectorColor) {
        if radius <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
        let path = builder.build();

        let result = self.fill_tess.tessellate_path(
            &path,
            &FillOptions::tolerance(TOLERANCE),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { color }),
        );
        match result {
            Ok(()) => self.flush_geometry(),
            Err(err) => {
                log::warn!("fill tessellation failed: {:?}", err);
                self.discard_geometry();
            }
        }
    }

    fn draw_text(&mut self, label: TextLabel) {
        self.labels.push(label);
    }
}

use glam::Vec2;

/// Connected polyline of the walk.
///
/// Vertex 0 is always the anchor (surface center). Each movement record adds
/// one vertex; terminal records add none. Built once per layout pass and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathGeometry {
    vertices: Vec<Vec2>,
}

impl PathGeometry {
    pub(crate) fn starting_at(anchor: Vec2, capacity: usize) -> Self {
        let mut vertices = Vec::with_capacity(capacity + 1);
        vertices.push(anchor);
        Self { vertices }
    }

    pub(crate) fn line_to(&mut self, p: Vec2) {
        self.vertices.push(p);
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// First vertex, if the geometry is non-empty.
    pub fn start(&self) -> Option<Vec2> {
        self.vertices.first().copied()
    }

    /// Consecutive vertex pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn segment_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Sum of segment lengths.
    pub fn length(&self) -> f32 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }
}

use std::sync::Arc;

use super::geometry::PathGeometry;
use super::rng::{JitterSource, Rng};
use super::walk::{compute_layout, Layout};
use crate::api::config::LayoutConfig;
use crate::api::types::{LayoutPoint, SolvedRecord};

/// Read-only view of the latest layout pass.
///
/// Records and layout always come from the same recompute. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct LayoutSnapshot {
    records: Arc<[SolvedRecord]>,
    layout: Arc<Layout>,
    generation: u64,
}

impl Default for LayoutSnapshot {
    fn default() -> Self {
        Self {
            records: Arc::from(Vec::<SolvedRecord>::new()),
            layout: Arc::default(),
            generation: 0,
        }
    }
}

impl LayoutSnapshot {
    pub fn records(&self) -> &[SolvedRecord] {
        &self.records
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn points(&self) -> &[LayoutPoint] {
        &self.layout.points
    }

    pub fn geometry(&self) -> &PathGeometry {
        &self.layout.geometry
    }

    /// Incremented on every recompute.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Holds the solved records and the surface size, and keeps the layout in sync
/// with both.
///
/// Every change recomputes the full layout inline; there is no incremental append.
pub struct PathLayoutEngine<J: JitterSource = Rng> {
    config: LayoutConfig,
    jitter: J,
    width: f32,
    height: f32,
    snapshot: LayoutSnapshot,
    needs_redraw: bool,
}

#[cfg(feature = "entropy")]
impl PathLayoutEngine<Rng> {
    /// Engine with an entropy-seeded jitter source.
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_jitter(config, Rng::from_entropy())
    }
}

impl<J: JitterSource> PathLayoutEngine<J> {
    pub fn with_jitter(config: LayoutConfig, jitter: J) -> Self {
        Self {
            config: config.normalized(),
            jitter,
            width: 0.0,
            height: 0.0,
            snapshot: LayoutSnapshot::default(),
            needs_redraw: false,
        }
    }

    /// Replace the solved records and recompute. An empty list clears the layout.
    pub fn set_records(&mut self, records: impl Into<Vec<SolvedRecord>>) {
        let records: Vec<SolvedRecord> = records.into();
        self.snapshot.records = Arc::from(records);
        self.recompute();
    }

    /// Record the new drawable size. Recomputes only if records are held.
    pub fn on_surface_resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        if !self.snapshot.records.is_empty() {
            self.recompute();
        }
    }

    /// Swap the layout constants. Recomputes only if records are held.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config.normalized();
        if !self.snapshot.records.is_empty() {
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        let layout = compute_layout(
            &self.snapshot.records,
            self.width,
            self.height,
            &self.config,
            &mut self.jitter,
        );
        log::debug!(
            "layout pass {}: {} records -> {} points, {} segments on {}x{}",
            self.snapshot.generation + 1,
            self.snapshot.records.len(),
            layout.points.len(),
            layout.geometry.segment_count(),
            self.width,
            self.height,
        );
        self.snapshot.layout = Arc::new(layout);
        self.snapshot.generation += 1;
        self.needs_redraw = true;
    }

    /// Clone of the current state for a draw pass.
    pub fn snapshot(&self) -> LayoutSnapshot {
        self.snapshot.clone()
    }

    pub fn records(&self) -> &[SolvedRecord] {
        self.snapshot.records()
    }

    pub fn points(&self) -> &[LayoutPoint] {
        self.snapshot.points()
    }

    pub fn geometry(&self) -> &PathGeometry {
        self.snapshot.geometry()
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn surface(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Returns whether a recompute happened since the last call, and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}

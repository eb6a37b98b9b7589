use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::api::types::SolvedRecord;
use crate::layout::{JitterSource, LayoutSnapshot, PathLayoutEngine, Rng};

/// Engine behind a single mutex, for hosts that recompute and draw on
/// different threads.
///
/// Points and geometry live in one snapshot, so a reader never mixes output
/// from two recomputes.
pub struct SharedLayout<J: JitterSource = Rng> {
    engine: Mutex<PathLayoutEngine<J>>,
}

impl<J: JitterSource> SharedLayout<J> {
    pub fn new(engine: PathLayoutEngine<J>) -> Self {
        Self {
            engine: Mutex::new(engine),
        }
    }

    // Every recompute rebuilds from scratch, so state behind a poisoned lock is still whole.
    fn lock(&self) -> MutexGuard<'_, PathLayoutEngine<J>> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_records(&self, records: impl Into<Vec<SolvedRecord>>) {
        self.lock().set_records(records);
    }

    pub fn on_surface_resize(&self, width: f32, height: f32) {
        self.lock().on_surface_resize(width, height);
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        self.lock().snapshot()
    }

    pub fn take_redraw(&self) -> bool {
        self.lock().take_redraw()
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut PathLayoutEngine<J>) -> R) -> R {
        f(&mut self.lock())
    }
}

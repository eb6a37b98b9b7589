use std::fmt;

use wordmap_engine::{
    ingest, raw_records_from_json, LayoutConfig, LayoutPoint, MeshCanvas, PathLayoutEngine,
    PathRenderer, Rng, ValidationError,
};

/// Why a record batch from the host was refused.
#[derive(Debug)]
pub enum RunnerError {
    /// Payload is not a JSON array of `{ word, direction }` objects.
    Json(serde_json::Error),
    /// Payload parsed but failed record validation.
    Invalid(ValidationError),
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerError::Json(err) => write!(f, "malformed records JSON: {}", err),
            RunnerError::Invalid(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RunnerError {}

impl From<serde_json::Error> for RunnerError {
    fn from(err: serde_json::Error) -> Self {
        RunnerError::Json(err)
    }
}

impl From<ValidationError> for RunnerError {
    fn from(err: ValidationError) -> Self {
        RunnerError::Invalid(err)
    }
}

/// Owns the engine and the draw buffers the host reads.
///
/// The wasm exports keep one of these in a `thread_local!`, because
/// wasm-bindgen cannot hand a Rust struct with borrowed buffers to JS.
/// Every change that recomputes the layout also rebuilds the buffers.
pub struct PathRunner {
    engine: PathLayoutEngine<Rng>,
    renderer: PathRenderer,
    canvas: MeshCanvas,
    labels_json: String,
}

impl PathRunner {
    pub fn new(config: LayoutConfig, seed: u64) -> Self {
        let renderer = PathRenderer::new(&config);
        Self {
            engine: PathLayoutEngine::with_jitter(config, Rng::new(seed)),
            renderer,
            canvas: MeshCanvas::new(),
            labels_json: String::from("[]"),
        }
    }

    /// Build from a JSON config; an empty string means defaults.
    pub fn from_config_json(json: &str, seed: u64) -> Result<Self, serde_json::Error> {
        let config = if json.trim().is_empty() {
            LayoutConfig::default()
        } else {
            LayoutConfig::from_json(json)?
        };
        Ok(Self::new(config, seed))
    }

    /// Replace the records from a JSON array. On error the previous layout is kept.
    /// Returns the number of records accepted.
    pub fn set_records_json(&mut self, json: &str) -> Result<usize, RunnerError> {
        let raw = raw_records_from_json(json)?;
        let records = ingest(&raw)?;
        let count = records.len();
        self.engine.set_records(records);
        self.rebuild();
        Ok(count)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.on_surface_resize(width, height);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let snapshot = self.engine.snapshot();
        self.canvas.clear();
        self.renderer
            .draw(snapshot.records(), snapshot.layout(), &mut self.canvas);
        self.labels_json = serde_json::to_string(self.canvas.labels()).unwrap_or_else(|err| {
            log::warn!("label serialization failed: {}", err);
            String::from("[]")
        });
    }

    /// Returns whether the host should repaint, and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        self.engine.take_redraw()
    }

    // ---- Accessors for the host ----

    pub fn points(&self) -> &[LayoutPoint] {
        self.engine.points()
    }

    /// Points as a flat `[x, y, x, y, ...]` slice.
    pub fn point_floats(&self) -> &[f32] {
        bytemuck::cast_slice(self.engine.points())
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.point_floats().as_ptr()
    }

    pub fn point_count(&self) -> u32 {
        self.engine.points().len() as u32
    }

    pub fn vertex_floats(&self) -> &[f32] {
        self.canvas.buffer()
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.canvas.buffer().as_ptr()
    }

    pub fn vertex_count(&self) -> u32 {
        self.canvas.vertex_count() as u32
    }

    pub fn labels_json(&self) -> &str {
        &self.labels_json
    }
}

impl Default for PathRunner {
    fn default() -> Self {
        Self::new(LayoutConfig::default(), 1)
    }
}

//! WASM exports for the wordmap path engine.
//!
//! The host calls `wordmap_init` once, then pushes records and surface sizes.
//! After each change it reads the point and vertex buffers straight out of
//! wasm memory using the pointer/count accessors, and the labels as JSON.

pub mod runner;

pub use runner::{PathRunner, RunnerError};

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<PathRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the runner, creating a default one if `wordmap_init` was
/// never called.
fn with_runner<R>(f: impl FnOnce(&mut PathRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.get_or_insert_with(|| PathRunner::new(Default::default(), host_seed()));
        f(runner)
    })
}

fn host_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Initialize logging and the runner. `config_json` may be empty for defaults.
#[wasm_bindgen]
pub fn wordmap_init(config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = PathRunner::from_config_json(config_json, host_seed())
        .map_err(|err| JsValue::from_str(&format!("invalid config: {}", err)))?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("wordmap: initialized");
    Ok(())
}

/// Replace the solved records. Rejected batches leave the current layout intact.
#[wasm_bindgen]
pub fn wordmap_set_records(json: &str) -> Result<u32, JsValue> {
    with_runner(|r| r.set_records_json(json))
        .map(|count| count as u32)
        .map_err(|err| {
            log::warn!("wordmap: {}", err);
            JsValue::from_str(&err.to_string())
        })
}

#[wasm_bindgen]
pub fn wordmap_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(width, height));
}

#[wasm_bindgen]
pub fn wordmap_take_redraw() -> bool {
    with_runner(|r| r.take_redraw())
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn wordmap_points_ptr() -> *const f32 {
    with_runner(|r| r.points_ptr())
}

#[wasm_bindgen]
pub fn wordmap_point_count() -> u32 {
    with_runner(|r| r.point_count())
}

#[wasm_bindgen]
pub fn wordmap_vertices_ptr() -> *const f32 {
    with_runner(|r| r.vertices_ptr())
}

#[wasm_bindgen]
pub fn wordmap_vertex_count() -> u32 {
    with_runner(|r| r.vertex_count())
}

#[wasm_bindgen]
pub fn wordmap_labels_json() -> String {
    with_runner(|r| r.labels_json().to_owned())
}

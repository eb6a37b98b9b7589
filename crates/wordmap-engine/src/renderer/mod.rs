pub mod color;
pub mod path;
pub mod traits;
#[cfg(feature = "vectors")]
pub mod mesh;

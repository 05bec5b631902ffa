// File: crates/skyline-core/src/error.rs
// Summary: Error type for the rendering paths.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to allocate raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,

    #[error("pixel readback failed")]
    Readback,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

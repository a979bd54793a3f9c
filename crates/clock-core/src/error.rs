// File: crates/clock-core/src/error.rs
// Summary: Error type for time sampling and raster output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: u32 },
    /// For `TimeSource` implementations backed by clocks that can fail (RTCs, remote time).
    #[error("system clock unavailable: {0}")]
    ClockUnavailable(String),
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: u32, height: u32 },
    #[error("PNG encode failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClockError>;

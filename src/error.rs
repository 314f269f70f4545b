//! Error types for rasterline operations.

use crate::geometry::{Point, Rect};
use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rasterline operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Malformed input such as a non-positive scale factor.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Segment with zero extent on one axis, raised only under
    /// [`DegeneratePolicy::Reject`](crate::render::DegeneratePolicy::Reject).
    #[error("Degenerate segment ({}, {}) -> ({}, {})", from.x, from.y, to.x, to.y)]
    DegenerateSegment {
        /// First endpoint.
        from: Point,
        /// Second endpoint.
        to: Point,
    },

    /// Area touched by a segment does not fit inside the sink.
    #[error(
        "Out of bounds: {}x{} at ({}, {}) exceeds {}x{} at ({}, {})",
        area.width, area.height, area.x, area.y,
        bounds.width, bounds.height, bounds.x, bounds.y
    )]
    OutOfBounds {
        /// Screen-space area the segment would cover.
        area: Rect,
        /// Bounds reported by the sink.
        bounds: Rect,
    },

    /// Invalid dimensions for a framebuffer or pixel buffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Scene file does not exist or cannot be read.
    #[error("Config not found: {0}")]
    ConfigNotFound(String),

    /// Scene file is not valid YAML for a scene.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// 1-based line number, 0 when unknown.
        line: usize,
        /// Parser message.
        message: String,
    },
}

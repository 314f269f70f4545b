//! # Rasterline
//!
//! Integer line rasterization with pluggable pixel destinations.
//!
//! A single axis-driven DDA walks from one endpoint toward the other, one position
//! per unit step along the dominant axis, and hands each position to a sink. The
//! same walk serves unscaled output, doubled "chunky" pixels and arbitrary integer
//! scales, and the sink decides whether a position becomes a direct buffer write or
//! a renderer point/rectangle call.
//!
//! ## Quick Start
//!
//! ```rust
//! use rasterline::prelude::*;
//!
//! let mut fb = Framebuffer::new(128, 128)?;
//! let n = rasterize(Segment::from_coords(0, 0, 4, 2), &mut fb.sink(Rgba::RED))?;
//! assert_eq!(n, 4);
//!
//! // One 4x4 block per position, through a renderer handle
//! let mut canvas = Canvas::new(512, 512)?;
//! canvas.set_draw_color(Rgba::GREEN);
//! let view = ViewTransform::new(4, 0, 0)?;
//! rasterize_scaled(Segment::from_coords(10, 3, 100, 90), &view, &mut canvas.sink())?;
//! # Ok::<(), rasterline::Error>(())
//! ```
//!
//! ## Behaviour
//!
//! - Ties between the axes walk along Y.
//! - The far endpoint is excluded unless [`EndpointMode::Inclusive`] is chosen.
//! - Horizontal and vertical segments are drawn; [`DegeneratePolicy`] can skip or
//!   reject them instead.
//! - Output does not depend on endpoint order.
//!
//! ## Feature Flags
//!
//! - `cli` (default): the `rasterline` scene renderer binary
//!
//! [`EndpointMode::Inclusive`]: render::EndpointMode::Inclusive
//! [`DegeneratePolicy`]: render::DegeneratePolicy

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and packed pixel conversions.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, segments, rectangles).
pub mod geometry;

/// World-to-screen view transform.
pub mod view;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line rasterization and pixel sinks.
pub mod render;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Scene Modules
// ============================================================================

/// Scene configuration files.
pub mod config;

/// Rendering a scene to pixels.
pub mod scene;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for rasterline operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use rasterline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::{RenderMode, SceneConfig};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Axis, Point, Rect, Segment};
    pub use crate::output::PngEncoder;
    pub use crate::render::{
        plot_scaled, rasterize, rasterize_scaled, BlockSink, BufferSink, Canvas,
        DegeneratePolicy, EndpointMode, LineIter, PixelSink, RasterOptions, Rasterizer,
        Renderer, RendererSink,
    };
    pub use crate::view::ViewTransform;
}

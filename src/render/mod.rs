//! Rasterization and pixel destinations.
//!
//! # Algorithm
//!
//! - **Axis-driven DDA line**: one position per unit step along the dominant axis,
//!   minor axis interpolated with a truncated floating accumulator. Optionally
//!   scaled so each position becomes an `s × s` screen block.
//!
//! # Destinations
//!
//! - [`PixelSink`] / [`BlockSink`] closures
//! - [`BufferSink`]: direct writes into a linear ARGB8888 buffer
//! - [`RendererSink`]: point/rectangle calls on a [`Renderer`] such as [`Canvas`]

mod canvas;
mod line;
mod sink;

pub use canvas::Canvas;
pub use line::{
    plot_scaled, rasterize, rasterize_scaled, DegeneratePolicy, EndpointMode, LineIter,
    RasterOptions, Rasterizer,
};
pub use sink::{BlockSink, BufferSink, PixelSink, Renderer, RendererSink};

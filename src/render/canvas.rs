//! Software renderer with a current draw color.

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Rect;
use crate::render::sink::{Renderer, RendererSink};

/// A [`Framebuffer`] driven through renderer primitives.
///
/// Like a hardware renderer handle, it keeps a draw color that every primitive
/// uses; callers set it before drawing.
#[derive(Debug, Clone)]
pub struct Canvas {
    target: Framebuffer,
    draw_color: Rgba,
}

impl Canvas {
    /// Create a canvas of the given output size, draw color opaque black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self::from_framebuffer(Framebuffer::new(width, height)?))
    }

    /// Wrap an existing framebuffer.
    #[must_use]
    pub const fn from_framebuffer(target: Framebuffer) -> Self {
        Self {
            target,
            draw_color: Rgba::BLACK,
        }
    }

    /// Set the color used by subsequent primitives.
    pub fn set_draw_color(&mut self, color: Rgba) {
        self.draw_color = color;
    }

    /// Current draw color.
    #[must_use]
    pub const fn draw_color(&self) -> Rgba {
        self.draw_color
    }

    /// Fill the whole output with the draw color.
    pub fn clear(&mut self) {
        self.target.clear(self.draw_color);
    }

    /// Sink issuing renderer primitives on this canvas.
    pub fn sink(&mut self) -> RendererSink<'_, Self> {
        RendererSink::new(self)
    }

    /// Rendered pixels.
    #[must_use]
    pub const fn framebuffer(&self) -> &Framebuffer {
        &self.target
    }

    /// Take the rendered pixels.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.target
    }
}

impl Renderer for Canvas {
    fn draw_point(&mut self, x: i32, y: i32) {
        if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
            self.target.set_pixel(x, y, self.draw_color);
        }
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.target.fill_rect(rect, self.draw_color);
    }

    fn output_size(&self) -> Option<(u32, u32)> {
        Some((self.target.width(), self.target.height()))
    }
}

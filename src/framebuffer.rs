//! Core framebuffer for pixel rendering.
//!
//! A linear ARGB8888 pixel buffer. Rows are padded to a 64-byte boundary, so the
//! pitch (pixels per row) may exceed the visible width; pixel `(x, y)` lives at
//! index `y * pitch + x`, the layout a streaming texture upload expects.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::render::{BlockSink, BufferSink};
use crate::view::ViewTransform;

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// Pixels per aligned row chunk.
const PIXELS_PER_CHUNK: usize = ROW_ALIGNMENT / std::mem::size_of::<u32>();

/// Owned ARGB8888 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Pixels per row, including padding.
    pitch: usize,
    /// Packed ARGB pixels in row-major order.
    pixels: Vec<u32>,
}

impl Framebuffer {
    /// Create a new framebuffer cleared to transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterline::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(100, 60).unwrap();
    /// assert_eq!(fb.width(), 100);
    /// assert_eq!(fb.pitch(), 112);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let pitch = (width as usize).div_ceil(PIXELS_PER_CHUNK) * PIXELS_PER_CHUNK;
        let pixels = vec![0; pitch * height as usize];

        Ok(Self {
            width,
            height,
            pitch,
            pixels,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixels per row, including padding.
    #[must_use]
    pub const fn pitch(&self) -> usize {
        self.pitch
    }

    /// Visible area.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Raw packed pixels, padding included.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Raw packed pixels, padding included.
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Visible pixels of one row.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u32]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.pitch;
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Fill the visible area with a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let argb = color.to_argb();
        let width = self.width as usize;
        for row in self.pixels.chunks_exact_mut(self.pitch) {
            row[..width].fill(argb);
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Rgba::from_argb(self.pixels[self.pixel_index(x, y)]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.pixel_index(x, y);
        self.pixels[idx] = color.to_argb();
    }

    /// Fill a rectangular region with a solid color, clipped to the buffer.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let Some(clip) = rect.intersection(&self.bounds()) else {
            return;
        };

        let argb = color.to_argb();
        let (x0, w) = (clip.x as usize, clip.width as usize);
        for y in clip.y as usize..clip.bottom() as usize {
            let start = y * self.pitch + x0;
            self.pixels[start..start + w].fill(argb);
        }
    }

    /// Direct-write sink drawing `color` into this buffer.
    pub fn sink(&mut self, color: Rgba) -> BufferSink<'_> {
        BufferSink::from_parts(
            &mut self.pixels,
            self.width as usize,
            self.height as usize,
            self.pitch,
            color,
        )
    }

    /// Copy every pixel into `target` as one screen block of `view`, clipped.
    ///
    /// This is the upload-and-stretch step of direct-buffer rendering: lines are
    /// rasterized at world resolution, then presented at screen resolution.
    pub fn present_scaled(&self, view: &ViewTransform, target: &mut Framebuffer) {
        let mut sink = target.sink(Rgba::TRANSPARENT);
        for y in 0..self.height {
            let Some(row) = self.row(y) else {
                continue;
            };
            for (x, &argb) in row.iter().enumerate() {
                sink.set_color(Rgba::from_argb(argb));
                sink.fill_block(view.block(Point::new(x as i32, y as i32)));
            }
        }
    }

    /// Count visible pixels equal to `color`.
    #[must_use]
    pub fn count_pixels(&self, color: Rgba) -> usize {
        let argb = color.to_argb();
        (0..self.height)
            .filter_map(|y| self.row(y))
            .map(|row| row.iter().filter(|&&p| p == argb).count())
            .sum()
    }

    /// Tightly packed RGBA bytes without row padding, for encoders.
    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for y in 0..self.height {
            if let Some(row) = self.row(y) {
                for &p in row {
                    out.extend_from_slice(&Rgba::from_argb(p).to_array());
                }
            }
        }
        out
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.pitch + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Segment;
    use crate::render::{rasterize, PixelSink};

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        // Padded to 16 pixels (64 bytes)
        assert_eq!(fb.pitch(), 112);
        assert_eq!(fb.pixels().len(), 112 * 50);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
    }

    #[test]
    fn test_clear_leaves_padding() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        assert_eq!(fb.count_pixels(Rgba::RED), 100);
        // Padding column untouched
        assert_eq!(fb.pixels()[10], 0);
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));
        assert_eq!(fb.pixels()[5 * fb.pitch() + 5], Rgba::BLUE.to_argb());

        // Out of bounds
        fb.set_pixel(100, 100, Rgba::BLUE);
        assert_eq!(fb.get_pixel(100, 100), None);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.clear(Rgba::WHITE);
        fb.fill_rect(Rect::new(-5, 15, 10, 10), Rgba::RED);

        assert_eq!(fb.count_pixels(Rgba::RED), 5 * 5);
        assert_eq!(fb.get_pixel(4, 19), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(5, 19), Some(Rgba::WHITE));
    }

    #[test]
    fn test_sink_respects_pitch() {
        let mut fb = Framebuffer::new(20, 4).unwrap();
        {
            let mut sink = fb.sink(Rgba::GREEN);
            assert_eq!(PixelSink::bounds(&sink), Some(Rect::new(0, 0, 20, 4)));
            rasterize(Segment::from_coords(0, 0, 19, 3), &mut sink).unwrap();
        }
        assert_eq!(fb.count_pixels(Rgba::GREEN), 19);
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::GREEN));
        // Far endpoint excluded
        assert_eq!(fb.get_pixel(19, 3), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_present_scaled() {
        let mut world = Framebuffer::new(4, 4).unwrap();
        world.clear(Rgba::BLACK);
        world.set_pixel(1, 2, Rgba::RED);

        let view = ViewTransform::new(3, 2, 1).unwrap();
        let mut screen = Framebuffer::new(16, 16).unwrap();
        world.present_scaled(&view, &mut screen);

        assert_eq!(screen.count_pixels(Rgba::RED), 9);
        assert_eq!(screen.count_pixels(Rgba::BLACK), 16 * 9 - 9);
        assert_eq!(screen.get_pixel(5, 7), Some(Rgba::RED));
        assert_eq!(screen.get_pixel(7, 9), Some(Rgba::RED));
        // Offset margin untouched
        assert_eq!(screen.get_pixel(0, 0), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn test_to_rgba_bytes_is_compact() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.clear(Rgba::new(1, 2, 3, 4));

        let bytes = fb.to_rgba_bytes();
        assert_eq!(bytes.len(), 3 * 2 * 4);
        assert_eq!(&bytes[..4], &[1, 2, 3, 4]);
    }
}

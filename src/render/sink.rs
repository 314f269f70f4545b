//! Destinations for rasterized positions.
//!
//! A rasterizer never owns pixel storage. It hands each position to a
//! [`PixelSink`] (unscaled) or each screen block to a [`BlockSink`] (scaled), and
//! the sink decides what "drawing" means: a closure, a direct write into a linear
//! ARGB buffer, or a call on a [`Renderer`] handle.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};

/// Receives one call per rasterized position.
pub trait PixelSink {
    /// Emit a single position.
    fn plot(&mut self, point: Point);

    /// Addressable area, if limited. Segments reaching outside it are rejected
    /// before anything is plotted.
    fn bounds(&self) -> Option<Rect> {
        None
    }
}

impl<F: FnMut(Point)> PixelSink for F {
    fn plot(&mut self, point: Point) {
        self(point);
    }
}

/// Receives one call per scaled screen-space block.
pub trait BlockSink {
    /// Emit a filled block.
    fn fill_block(&mut self, block: Rect);

    /// Addressable screen area, if limited.
    fn bounds(&self) -> Option<Rect> {
        None
    }
}

impl<F: FnMut(Rect)> BlockSink for F {
    fn fill_block(&mut self, block: Rect) {
        self(block);
    }
}

/// A renderer handle with point and rectangle primitives.
///
/// Draw color and blend state belong to the renderer and are set by the caller
/// before rasterizing.
pub trait Renderer {
    /// Draw one pixel in the current draw color.
    fn draw_point(&mut self, x: i32, y: i32);

    /// Fill a rectangle in the current draw color.
    ///
    /// The default implementation draws every covered point.
    fn fill_rect(&mut self, rect: Rect) {
        for dy in 0..rect.height {
            for dx in 0..rect.width {
                self.draw_point(
                    rect.x.wrapping_add(dx as i32),
                    rect.y.wrapping_add(dy as i32),
                );
            }
        }
    }

    /// Output size in pixels, if known.
    fn output_size(&self) -> Option<(u32, u32)> {
        None
    }
}

/// Adapts a [`Renderer`] into both sink kinds.
///
/// Unscaled positions become `draw_point` calls, scaled blocks become `fill_rect`
/// calls.
#[derive(Debug)]
pub struct RendererSink<'a, R: Renderer + ?Sized> {
    renderer: &'a mut R,
}

impl<'a, R: Renderer + ?Sized> RendererSink<'a, R> {
    /// Wrap a renderer.
    pub fn new(renderer: &'a mut R) -> Self {
        Self { renderer }
    }

    fn output_bounds(&self) -> Option<Rect> {
        self.renderer.output_size().map(|(w, h)| Rect::new(0, 0, w, h))
    }
}

impl<R: Renderer + ?Sized> PixelSink for RendererSink<'_, R> {
    fn plot(&mut self, point: Point) {
        self.renderer.draw_point(point.x, point.y);
    }

    fn bounds(&self) -> Option<Rect> {
        self.output_bounds()
    }
}

impl<R: Renderer + ?Sized> BlockSink for RendererSink<'_, R> {
    fn fill_block(&mut self, block: Rect) {
        self.renderer.fill_rect(block);
    }

    fn bounds(&self) -> Option<Rect> {
        self.output_bounds()
    }
}

/// Direct writes into a caller-owned linear ARGB8888 buffer.
///
/// Pixel `(x, y)` lives at index `y * pitch + x`.
#[derive(Debug)]
pub struct BufferSink<'a> {
    pixels: &'a mut [u32],
    width: usize,
    height: usize,
    pitch: usize,
    color: u32,
}

impl<'a> BufferSink<'a> {
    /// Wrap a pixel buffer of rows `pitch` pixels apart, the first `width` of
    /// which are visible.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `pitch` is zero or smaller than
    /// `width`, or when the buffer length is not a multiple of `pitch`, and
    /// [`Error::InvalidDimensions`] when the buffer holds no full row.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterline::color::Rgba;
    /// use rasterline::geometry::Point;
    /// use rasterline::render::{BufferSink, PixelSink};
    ///
    /// let mut pixels = vec![0u32; 4 * 4];
    /// let mut sink = BufferSink::new(&mut pixels, 4, 4, Rgba::RED).unwrap();
    /// sink.plot(Point::new(1, 2));
    /// assert_eq!(pixels[2 * 4 + 1], Rgba::RED.to_argb());
    /// ```
    pub fn new(pixels: &'a mut [u32], width: u32, pitch: usize, color: Rgba) -> Result<Self> {
        let width = width as usize;
        if pitch == 0 || width > pitch {
            return Err(Error::InvalidArgument(format!(
                "pitch {pitch} cannot hold rows of width {width}"
            )));
        }

        if pixels.len() % pitch != 0 {
            return Err(Error::InvalidArgument(format!(
                "buffer of {} pixels is not a whole number of {pitch}-pixel rows",
                pixels.len()
            )));
        }

        let height = pixels.len() / pitch;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions {
                width: width as u32,
                height: height as u32,
            });
        }

        Ok(Self::from_parts(pixels, width, height, pitch, color))
    }

    /// Caller guarantees `width <= pitch` and `height * pitch <= pixels.len()`.
    pub(crate) fn from_parts(
        pixels: &'a mut [u32],
        width: usize,
        height: usize,
        pitch: usize,
        color: Rgba,
    ) -> Self {
        Self {
            pixels,
            width,
            height,
            pitch,
            color: color.to_argb(),
        }
    }

    /// Change the color used for subsequent writes.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color.to_argb();
    }

    /// Color currently written, unpacked.
    #[must_use]
    pub fn color(&self) -> Rgba {
        Rgba::from_argb(self.color)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.pitch + x)
    }
}

impl PixelSink for BufferSink<'_> {
    /// Out-of-range positions are ignored.
    fn plot(&mut self, point: Point) {
        if let Some(idx) = self.index(point.x, point.y) {
            self.pixels[idx] = self.color;
        }
    }

    fn bounds(&self) -> Option<Rect> {
        Some(Rect::new(0, 0, self.width as u32, self.height as u32))
    }
}

impl BlockSink for BufferSink<'_> {
    /// Blocks are clipped to the buffer.
    fn fill_block(&mut self, block: Rect) {
        let bounds = Rect::new(0, 0, self.width as u32, self.height as u32);
        let Some(clip) = block.intersection(&bounds) else {
            return;
        };

        let (x0, w) = (clip.x as usize, clip.width as usize);
        for y in clip.y as usize..clip.bottom() as usize {
            let start = y * self.pitch + x0;
            self.pixels[start..start + w].fill(self.color);
        }
    }

    fn bounds(&self) -> Option<Rect> {
        Some(Rect::new(0, 0, self.width as u32, self.height as u32))
    }
}

//! World-to-screen view transform.
//!
//! One world-space unit maps to an `s × s` block of screen pixels, shifted by a
//! screen-space offset. The transform is a plain value handed to each render call,
//! so a fullscreen toggle produces a new transform instead of mutating shared state.

use crate::error::{Error, Result};
use crate::geometry::{Point, Rect, Segment};

/// Integer scale plus screen-space offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewTransform {
    scale: u32,
    offset: Point,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ViewTransform {
    /// Scale 1, no offset.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            scale: 1,
            offset: Point::ORIGIN,
        }
    }

    /// Create a transform.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `scale` is not positive.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterline::view::ViewTransform;
    ///
    /// assert!(ViewTransform::new(3, 0, 0).is_ok());
    /// assert!(ViewTransform::new(0, 0, 0).is_err());
    /// ```
    pub fn new(scale: i32, offset_x: i32, offset_y: i32) -> Result<Self> {
        if scale <= 0 {
            return Err(Error::InvalidArgument(format!(
                "scale factor must be positive, got {scale}"
            )));
        }

        Ok(Self {
            scale: scale as u32,
            offset: Point::new(offset_x, offset_y),
        })
    }

    /// Largest integer scale at which a `world_w × world_h` viewport fits inside a
    /// `screen_w × screen_h` screen, centred with the leftover split evenly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a zero-sized world and
    /// [`Error::InvalidArgument`] when the screen is smaller than the world.
    pub fn letterbox(world_w: u32, world_h: u32, screen_w: u32, screen_h: u32) -> Result<Self> {
        if world_w == 0 || world_h == 0 {
            return Err(Error::InvalidDimensions {
                width: world_w,
                height: world_h,
            });
        }

        let scale = (screen_w / world_w).min(screen_h / world_h);
        if scale == 0 {
            return Err(Error::InvalidArgument(format!(
                "screen {screen_w}x{screen_h} is smaller than world {world_w}x{world_h}"
            )));
        }

        let offset_x = (screen_w - world_w * scale) / 2;
        let offset_y = (screen_h - world_h * scale) / 2;
        let scale = i32::try_from(scale)
            .map_err(|_| Error::InvalidArgument(format!("scale {scale} out of range")))?;

        Self::new(scale, offset_x as i32, offset_y as i32)
    }

    /// Scale factor in screen pixels per world unit.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Screen-space offset.
    #[must_use]
    pub const fn offset(&self) -> Point {
        self.offset
    }

    /// True for scale 1 without offset.
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        self.scale == 1 && self.offset.x == 0 && self.offset.y == 0
    }

    /// Top-left screen pixel of a world position.
    ///
    /// Wraps on overflow; [`Self::screen_bounds`] checks a whole segment first.
    #[must_use]
    pub const fn to_screen(&self, point: Point) -> Point {
        let s = self.scale as i32;
        Point::new(
            point.x.wrapping_mul(s).wrapping_add(self.offset.x),
            point.y.wrapping_mul(s).wrapping_add(self.offset.y),
        )
    }

    /// Screen block covered by a world position.
    #[must_use]
    pub const fn block(&self, point: Point) -> Rect {
        let p = self.to_screen(point);
        Rect::new(p.x, p.y, self.scale, self.scale)
    }

    /// Screen area covered by every block a segment can emit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the scaled coordinates leave the `i32`
    /// range.
    pub fn screen_bounds(&self, segment: &Segment) -> Result<Rect> {
        let world = segment.bounds();
        let s = i64::from(self.scale);
        let x0 = i64::from(world.x) * s + i64::from(self.offset.x);
        let y0 = i64::from(world.y) * s + i64::from(self.offset.y);
        let w = i64::from(world.width) * s;
        let h = i64::from(world.height) * s;

        let fits = |v: i64| v >= i64::from(i32::MIN) && v <= i64::from(i32::MAX);
        let fits_len = |v: i64| v <= i64::from(u32::MAX);
        if !(fits(x0) && fits(y0) && fits(x0 + w - 1) && fits(y0 + h - 1) && fits_len(w) && fits_len(h))
        {
            return Err(Error::InvalidArgument(format!(
                "segment {:?} -> {:?} overflows screen space at scale {}",
                segment.p1, segment.p2, self.scale
            )));
        }

        Ok(Rect::new(x0 as i32, y0 as i32, w as u32, h as u32))
    }

    /// World-space area visible on a `screen_w × screen_h` screen.
    #[must_use]
    pub fn world_size(&self, screen_w: u32, screen_h: u32) -> (u32, u32) {
        let usable = |len: u32, off: i32| len.saturating_sub(off.max(0) as u32) / self.scale;
        (usable(screen_w, self.offset.x), usable(screen_h, self.offset.y))
    }
}

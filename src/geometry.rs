//! Geometric primitives for rasterization.
//!
//! All coordinates are integers; world-space and screen-space share the same types
//! and are told apart by the [`ViewTransform`](crate::view::ViewTransform) between them.

/// A 2D point with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate along `axis`.
    #[must_use]
    pub const fn along(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// A line segment between two endpoints, in argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment {
    /// First endpoint.
    pub p1: Point,
    /// Second endpoint.
    pub p2: Point,
}

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Create a segment from coordinates.
    #[must_use]
    pub const fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Absolute extent along the X axis.
    #[must_use]
    pub const fn dx(&self) -> u32 {
        self.p1.x.abs_diff(self.p2.x)
    }

    /// Absolute extent along the Y axis.
    #[must_use]
    pub const fn dy(&self) -> u32 {
        self.p1.y.abs_diff(self.p2.y)
    }

    /// Axis of greatest extent. Ties fall to [`Axis::Y`].
    #[must_use]
    pub const fn dominant_axis(&self) -> Axis {
        if self.dx() > self.dy() {
            Axis::X
        } else {
            Axis::Y
        }
    }

    /// True when the segment has zero extent on at least one axis.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.p1.x == self.p2.x || self.p1.y == self.p2.y
    }

    /// Same segment with the endpoints swapped.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.p2, self.p1)
    }

    /// Inclusive bounding box of both endpoints.
    ///
    /// A segment spanning the whole `i32` range on an axis needs a width of
    /// 2^32, which saturates to `u32::MAX` and leaves out the last column or row.
    /// The rasterizer refuses such segments.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.p1.x.min(self.p2.x),
            self.p1.y.min(self.p2.y),
            self.dx().saturating_add(1),
            self.dy().saturating_add(1),
        )
    }
}

impl From<(Point, Point)> for Segment {
    fn from((p1, p2): (Point, Point)) -> Self {
        Self::new(p1, p2)
    }
}

/// An integer rectangle defined by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width of the rectangle.
    pub width: u32,
    /// Height of the rectangle.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge.
    #[must_use]
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// True when the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && (point.x as i64) < self.right()
            && (point.y as i64) < self.bottom()
    }

    /// Check if `other` lies entirely inside this rectangle.
    #[must_use]
    pub const fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Overlapping area of two rectangles, `None` when they are disjoint.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let x0 = i64::from(self.x.max(other.x));
        let y0 = i64::from(self.y.max(other.y));
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        Some(Self::new(x0 as i32, y0 as i32, (x1 - x0) as u32, (y1 - y0) as u32))
    }

    /// Area in pixels.
    #[must_use]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

//! Axis-driven DDA line rasterization.
//!
//! The walk steps one unit at a time along the dominant axis and interpolates the
//! minor axis with a floating accumulator that is truncated toward zero at every
//! step. There is no integer error term: the accumulator is advanced by repeated
//! `f64` addition, so a position whose ideal minor coordinate is a whole number can
//! land one unit off it after many steps. `f64` holds every `i32` exactly, so large
//! coordinates do not lose the fractional step. Output always stays inside the
//! segment's bounding box.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::{Axis, Point, Rect, Segment};
use crate::render::sink::{BlockSink, PixelSink};
use crate::view::ViewTransform;

/// What to do with a segment that has zero extent on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Rasterize horizontal and vertical segments like any other.
    #[default]
    Draw,
    /// Emit nothing and report zero positions.
    Skip,
    /// Fail with [`Error::DegenerateSegment`].
    Reject,
}

/// Whether the far endpoint along the dominant axis is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointMode {
    /// Stop one step short of the far endpoint. Polylines sharing endpoints
    /// plot each joint once.
    #[default]
    Exclusive,
    /// Emit the far endpoint too.
    Inclusive,
}

/// Rasterizer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RasterOptions {
    /// Degenerate segment handling.
    #[serde(default)]
    pub degenerate: DegeneratePolicy,
    /// Far endpoint handling.
    #[serde(default)]
    pub endpoint: EndpointMode,
}

/// Iterator over the positions of one segment, in dominant-axis order.
///
/// Produced by [`Rasterizer::positions`] or [`LineIter::new`]. Does not allocate.
#[derive(Debug, Clone)]
pub struct LineIter {
    major: Axis,
    pos: i32,
    remaining: u64,
    minor: f64,
    step: f64,
    minor_lo: i32,
    minor_hi: i32,
}

impl LineIter {
    /// Positions of `segment`, ignoring any degenerate policy.
    #[must_use]
    pub fn new(segment: Segment, endpoint: EndpointMode) -> Self {
        let major = segment.dominant_axis();
        let minor_axis = major.other();

        // Walk from whichever endpoint sits lower on the dominant axis; the minor
        // direction follows that same endpoint so argument order does not matter.
        let (from, to) = if segment.p1.along(major) <= segment.p2.along(major) {
            (segment.p1, segment.p2)
        } else {
            (segment.p2, segment.p1)
        };

        let major_extent = from.along(major).abs_diff(to.along(major));
        let (minor_from, minor_to) = (from.along(minor_axis), to.along(minor_axis));
        let minor_extent = minor_from.abs_diff(minor_to);

        let mut step = if major_extent == 0 {
            0.0
        } else {
            f64::from(minor_extent) / f64::from(major_extent)
        };
        if minor_to < minor_from {
            step = -step;
        }

        let remaining = match endpoint {
            EndpointMode::Exclusive => u64::from(major_extent),
            EndpointMode::Inclusive => u64::from(major_extent) + 1,
        };

        Self {
            major,
            pos: from.along(major),
            remaining,
            minor: f64::from(minor_from),
            step,
            minor_lo: minor_from.min(minor_to),
            minor_hi: minor_from.max(minor_to),
        }
    }

    /// Iterator that yields nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            major: Axis::Y,
            pos: 0,
            remaining: 0,
            minor: 0.0,
            step: 0.0,
            minor_lo: 0,
            minor_hi: 0,
        }
    }

    /// Dominant axis of the walk.
    #[must_use]
    pub const fn major_axis(&self) -> Axis {
        self.major
    }
}

impl Iterator for LineIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // `as` truncates toward zero
        let minor = (self.minor as i32).clamp(self.minor_lo, self.minor_hi);
        let point = match self.major {
            Axis::X => Point::new(self.pos, minor),
            Axis::Y => Point::new(minor, self.pos),
        };

        self.pos = self.pos.wrapping_add(1);
        self.minor += self.step;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for LineIter {}

impl std::iter::FusedIterator for LineIter {}

/// Line rasterizer with fixed options.
///
/// # Example
///
/// ```
/// use rasterline::geometry::{Point, Segment};
/// use rasterline::render::Rasterizer;
///
/// let mut points = Vec::new();
/// let n = Rasterizer::default()
///     .rasterize(Segment::from_coords(0, 0, 4, 2), &mut |p: Point| points.push(p))
///     .unwrap();
///
/// assert_eq!(n, 4);
/// assert_eq!(points, [(0, 0), (1, 0), (2, 1), (3, 1)].map(Point::from));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rasterizer {
    options: RasterOptions,
}

impl Rasterizer {
    /// Create a rasterizer with the given options.
    #[must_use]
    pub const fn new(options: RasterOptions) -> Self {
        Self { options }
    }

    /// Set the degenerate segment policy.
    #[must_use]
    pub const fn degenerate(mut self, policy: DegeneratePolicy) -> Self {
        self.options.degenerate = policy;
        self
    }

    /// Set the far endpoint mode.
    #[must_use]
    pub const fn endpoint(mut self, mode: EndpointMode) -> Self {
        self.options.endpoint = mode;
        self
    }

    /// Current options.
    #[must_use]
    pub const fn options(&self) -> RasterOptions {
        self.options
    }

    /// Positions of `segment` after applying the degenerate policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateSegment`] under [`DegeneratePolicy::Reject`], or
    /// [`Error::InvalidArgument`] when the segment runs from `i32::MIN` to
    /// `i32::MAX` on either axis, since its bounding box has no [`Rect`] form.
    pub fn positions(&self, segment: Segment) -> Result<LineIter> {
        if segment.is_degenerate() {
            match self.options.degenerate {
                DegeneratePolicy::Draw => {}
                DegeneratePolicy::Skip => {
                    debug!("skipping degenerate segment {:?} -> {:?}", segment.p1, segment.p2);
                    return Ok(LineIter::empty());
                }
                DegeneratePolicy::Reject => {
                    debug!("rejecting degenerate segment {:?} -> {:?}", segment.p1, segment.p2);
                    return Err(Error::DegenerateSegment {
                        from: segment.p1,
                        to: segment.p2,
                    });
                }
            }
        }

        if segment.dx() == u32::MAX || segment.dy() == u32::MAX {
            return Err(Error::InvalidArgument(format!(
                "segment {:?} -> {:?} spans the whole coordinate range",
                segment.p1, segment.p2
            )));
        }

        Ok(LineIter::new(segment, self.options.endpoint))
    }

    /// Emit every position of `segment` through `sink`.
    ///
    /// Returns the number of positions emitted. Nothing is emitted on error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] when the sink reports bounds that do not
    /// contain both endpoints, or [`Error::DegenerateSegment`] under
    /// [`DegeneratePolicy::Reject`].
    pub fn rasterize<S: PixelSink + ?Sized>(&self, segment: Segment, sink: &mut S) -> Result<usize> {
        let positions = self.positions(segment)?;
        check_bounds(segment.bounds(), sink.bounds())?;

        let mut count = 0;
        for point in positions {
            sink.plot(point);
            count += 1;
        }

        trace!("rasterized {:?} -> {:?}: {count} positions", segment.p1, segment.p2);
        Ok(count)
    }

    /// Emit one `s × s` screen block per position of `segment` through `sink`.
    ///
    /// Returns the number of blocks emitted. Nothing is emitted on error.
    ///
    /// # Errors
    ///
    /// As [`Self::rasterize`], checked against the scaled area, plus
    /// [`Error::InvalidArgument`] when scaled coordinates overflow.
    pub fn rasterize_scaled<B: BlockSink + ?Sized>(
        &self,
        segment: Segment,
        view: &ViewTransform,
        sink: &mut B,
    ) -> Result<usize> {
        let positions = self.positions(segment)?;
        let area = view.screen_bounds(&segment)?;
        check_bounds(area, sink.bounds())?;

        let mut count = 0;
        for point in positions {
            sink.fill_block(view.block(point));
            count += 1;
        }

        trace!(
            "rasterized {:?} -> {:?} at scale {}: {count} blocks",
            segment.p1,
            segment.p2,
            view.scale()
        );
        Ok(count)
    }
}

/// Rasterize with default options: degenerate segments drawn, far endpoint excluded.
///
/// # Errors
///
/// See [`Rasterizer::rasterize`].
pub fn rasterize<S: PixelSink + ?Sized>(segment: Segment, sink: &mut S) -> Result<usize> {
    Rasterizer::default().rasterize(segment, sink)
}

/// Scaled rasterization with default options.
///
/// # Errors
///
/// See [`Rasterizer::rasterize_scaled`].
pub fn rasterize_scaled<B: BlockSink + ?Sized>(
    segment: Segment,
    view: &ViewTransform,
    sink: &mut B,
) -> Result<usize> {
    Rasterizer::default().rasterize_scaled(segment, view, sink)
}

/// Emit a single world-space pixel as one screen block.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] when the block does not fit the sink, or
/// [`Error::InvalidArgument`] when scaled coordinates overflow.
pub fn plot_scaled<B: BlockSink + ?Sized>(point: Point, view: &ViewTransform, sink: &mut B) -> Result<()> {
    let area = view.screen_bounds(&Segment::new(point, point))?;
    check_bounds(area, sink.bounds())?;
    sink.fill_block(view.block(point));
    Ok(())
}

fn check_bounds(area: Rect, bounds: Option<Rect>) -> Result<()> {
    match bounds {
        Some(bounds) if !bounds.contains_rect(&area) => Err(Error::OutOfBounds { area, bounds }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(rasterizer: Rasterizer, segment: Segment) -> Vec<Point> {
        let mut points = Vec::new();
        rasterizer
            .rasterize(segment, &mut |p: Point| points.push(p))
            .expect("rasterization should succeed");
        points
    }

    fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_shallow_line_scenario() {
        let points = collect(Rasterizer::default(), Segment::from_coords(0, 0, 4, 2));
        assert_eq!(points, pts(&[(0, 0), (1, 0), (2, 1), (3, 1)]));
    }

    #[test]
    fn test_shallow_line_swapped() {
        let points = collect(Rasterizer::default(), Segment::from_coords(4, 2, 0, 0));
        assert_eq!(points, pts(&[(0, 0), (1, 0), (2, 1), (3, 1)]));
    }

    #[test]
    fn test_descending_line() {
        // Minor axis walks downward from the origin endpoint
        let points = collect(Rasterizer::default(), Segment::from_coords(0, 2, 4, 0));
        assert_eq!(points, pts(&[(0, 2), (1, 1), (2, 1), (3, 0)]));
        let swapped = collect(Rasterizer::default(), Segment::from_coords(4, 0, 0, 2));
        assert_eq!(swapped, points);
    }

    #[test]
    fn test_steep_line() {
        let points = collect(Rasterizer::default(), Segment::from_coords(0, 0, 2, 4));
        assert_eq!(points, pts(&[(0, 0), (0, 1), (1, 2), (1, 3)]));
    }

    #[test]
    fn test_diagonal_ties_to_y_axis() {
        let iter = LineIter::new(Segment::from_coords(0, 0, 5, 5), EndpointMode::Exclusive);
        assert_eq!(iter.major_axis(), Axis::Y);

        let points = collect(Rasterizer::default(), Segment::from_coords(0, 0, 5, 5));
        assert_eq!(points.len(), 5);
        for w in points.windows(2) {
            assert_eq!(w[1].x - w[0].x, 1);
            assert_eq!(w[1].y - w[0].y, 1);
        }
    }

    #[test]
    fn test_anti_diagonal() {
        let points = collect(Rasterizer::default(), Segment::from_coords(0, 4, 4, 0));
        assert_eq!(points, pts(&[(4, 0), (3, 1), (2, 2), (1, 3)]));
    }

    #[test]
    fn test_horizontal_drawn_by_default() {
        let points = collect(Rasterizer::default(), Segment::from_coords(0, 5, 10, 5));
        let expected: Vec<Point> = (0..10).map(|x| Point::new(x, 5)).collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn test_vertical_drawn_by_default() {
        let points = collect(Rasterizer::default(), Segment::from_coords(5, 10, 5, 0));
        let expected: Vec<Point> = (0..10).map(|y| Point::new(5, y)).collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn test_skip_policy_matches_for_both_axes() {
        let r = Rasterizer::default().degenerate(DegeneratePolicy::Skip);
        assert!(collect(r, Segment::from_coords(0, 5, 10, 5)).is_empty());
        assert!(collect(r, Segment::from_coords(5, 0, 5, 10)).is_empty());
        assert_eq!(collect(r, Segment::from_coords(0, 0, 3, 1)).len(), 3);
    }

    #[test]
    fn test_reject_policy() {
        let r = Rasterizer::default().degenerate(DegeneratePolicy::Reject);
        let mut calls = 0;
        let err = r
            .rasterize(Segment::from_coords(0, 5, 10, 5), &mut |_: Point| calls += 1)
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateSegment { .. }));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_single_point_segment() {
        let seg = Segment::from_coords(3, 3, 3, 3);
        assert!(collect(Rasterizer::default(), seg).is_empty());
        let inclusive = Rasterizer::default().endpoint(EndpointMode::Inclusive);
        assert_eq!(collect(inclusive, seg), pts(&[(3, 3)]));
    }

    #[test]
    fn test_inclusive_endpoint() {
        let r = Rasterizer::default().endpoint(EndpointMode::Inclusive);
        let points = collect(r, Segment::from_coords(0, 0, 4, 2));
        assert_eq!(points, pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]));
    }

    #[test]
    fn test_negative_coordinates() {
        let points = collect(Rasterizer::default(), Segment::from_coords(-4, -2, 0, 0));
        // Truncation toward zero, clamped into the bounding box
        assert_eq!(points, pts(&[(-4, -2), (-3, -1), (-2, -1), (-1, 0)]));
    }

    #[test]
    fn test_large_coordinates_match_translated_line() {
        let r = Rasterizer::default().endpoint(EndpointMode::Inclusive);
        let near = collect(r, Segment::from_coords(17, 0, 27, 20));

        for base in [16_777_200, 2_147_483_000] {
            let far = collect(r, Segment::from_coords(base + 17, 0, base + 27, 20));
            let shifted: Vec<Point> = near.iter().map(|p| Point::new(p.x + base, p.y)).collect();
            assert_eq!(far, shifted);
            assert_eq!(far.last(), Some(&Point::new(base + 27, 20)));
        }
        assert_eq!(near[10], Point::new(22, 10));
    }

    #[test]
    fn test_full_range_segment_rejected() {
        let mut count = 0;
        let mut sink = |_: Point| count += 1;
        for mode in [EndpointMode::Exclusive, EndpointMode::Inclusive] {
            let r = Rasterizer::default().endpoint(mode);
            let result = r.rasterize(Segment::from_coords(i32::MIN, 0, i32::MAX, 5), &mut sink);
            assert!(matches!(result, Err(Error::InvalidArgument(_))));
        }
        assert_eq!(count, 0);

        let widest = Rasterizer::default()
            .positions(Segment::from_coords(i32::MIN + 1, 0, i32::MAX, 5))
            .unwrap();
        assert_eq!(widest.len(), u32::MAX as usize - 1);
    }

    #[test]
    fn test_iterator_exact_size() {
        let iter = Rasterizer::default()
            .positions(Segment::from_coords(0, 0, 7, 3))
            .unwrap();
        assert_eq!(iter.size_hint(), (7, Some(7)));
        assert_eq!(iter.count(), 7);
    }

    #[test]
    fn test_scaled_blocks_tile() {
        let view = ViewTransform::new(3, 0, 0).unwrap();
        let mut blocks = Vec::new();
        let n = rasterize_scaled(Segment::from_coords(0, 0, 4, 0), &view, &mut |r: Rect| {
            blocks.push(r);
        })
        .unwrap();

        assert_eq!(n, 4);
        assert_eq!(
            blocks,
            vec![
                Rect::new(0, 0, 3, 3),
                Rect::new(3, 0, 3, 3),
                Rect::new(6, 0, 3, 3),
                Rect::new(9, 0, 3, 3),
            ]
        );
    }

    #[test]
    fn test_scaled_with_offset() {
        let view = ViewTransform::new(2, 10, 20).unwrap();
        let mut blocks = Vec::new();
        rasterize_scaled(Segment::from_coords(0, 0, 2, 1), &view, &mut |r: Rect| blocks.push(r)).unwrap();
        assert_eq!(blocks, vec![Rect::new(10, 20, 2, 2), Rect::new(12, 20, 2, 2)]);
    }

    #[test]
    fn test_plot_scaled() {
        let view = ViewTransform::new(4, 1, 1).unwrap();
        let mut blocks = Vec::new();
        plot_scaled(Point::new(2, 3), &view, &mut |r: Rect| blocks.push(r)).unwrap();
        assert_eq!(blocks, vec![Rect::new(9, 13, 4, 4)]);
    }

    /// Sink that only accepts a 10x10 area.
    struct Bounded(usize);

    impl PixelSink for Bounded {
        fn plot(&mut self, _point: Point) {
            self.0 += 1;
        }

        fn bounds(&self) -> Option<Rect> {
            Some(Rect::new(0, 0, 10, 10))
        }
    }

    #[test]
    fn test_out_of_bounds_fails_fast() {
        let mut sink = Bounded(0);
        let err = rasterize(Segment::from_coords(0, 0, 10, 3), &mut sink).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }));
        assert_eq!(sink.0, 0);

        assert_eq!(rasterize(Segment::from_coords(0, 0, 9, 3), &mut sink).unwrap(), 9);
    }
}

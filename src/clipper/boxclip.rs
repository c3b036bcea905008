//! Clipping against an axis-aligned box.
//!
//! The box is treated as four half-planes. A [`BoxTest`] decides up front
//! which of them the polygon can actually cross, so polygons that already
//! lie within some sides skip those passes entirely.

use log::debug;

use super::edge::{clip_stages, EdgeLogic};
use super::status::StatusOutput;
use super::{ClipStatus, VertexBuffer};
use crate::config::SMALL_EPSILON;
use crate::math::Vec2;

/// An axis-aligned clip box with inclusive float bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl ClipBox {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_coords(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self::new(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    /// Returns true if `p` lies inside the box or on its boundary.
    pub fn is_inside(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Bounding box of a set of points, or `None` when there are none.
    pub fn bounding(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }
}

/// One side of a [`ClipBox`], holding the coordinate of its line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoxEdge {
    /// Keeps `x >= value`.
    MinX(f32),
    /// Keeps `x <= value`.
    MaxX(f32),
    /// Keeps `y >= value`.
    MinY(f32),
    /// Keeps `y <= value`.
    MaxY(f32),
}

impl EdgeLogic for BoxEdge {
    fn inside(&self, p: Vec2) -> bool {
        match *self {
            BoxEdge::MinX(v) => p.x >= v,
            BoxEdge::MaxX(v) => p.x <= v,
            BoxEdge::MinY(v) => p.y >= v,
            BoxEdge::MaxY(v) => p.y <= v,
        }
    }

    fn intersect(&self, from: Vec2, to: Vec2) -> (f32, Vec2) {
        let (value, start, end) = match *self {
            BoxEdge::MinX(v) | BoxEdge::MaxX(v) => (v, from.x, to.x),
            BoxEdge::MinY(v) | BoxEdge::MaxY(v) => (v, from.y, to.y),
        };
        let span = end - start;
        let t = if span.abs() < SMALL_EPSILON {
            1.0
        } else {
            ((value - start) / span).clamp(0.0, 1.0)
        };

        // Snap onto the box side to keep the result exactly on the edge.
        let mut point = from.lerp(to, t);
        match *self {
            BoxEdge::MinX(v) | BoxEdge::MaxX(v) => point.x = v,
            BoxEdge::MinY(v) | BoxEdge::MaxY(v) => point.y = v,
        }
        (t, point)
    }
}

/// Which box sides a polygon needs to be clipped against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClipEdges {
    pub min_x: bool,
    pub max_x: bool,
    pub min_y: bool,
    pub max_y: bool,
}

impl ClipEdges {
    pub const ALL: Self = Self {
        min_x: true,
        max_x: true,
        min_y: true,
        max_y: true,
    };
    pub const NONE: Self = Self {
        min_x: false,
        max_x: false,
        min_y: false,
        max_y: false,
    };

    /// Number of active sides.
    pub fn count(&self) -> usize {
        [self.min_x, self.max_x, self.min_y, self.max_y]
            .iter()
            .filter(|&&on| on)
            .count()
    }
}

/// Decides which box sides need clipping for a given polygon.
pub trait BoxTest {
    fn edges(&self, clip_box: &ClipBox, polygon: &[Vec2]) -> ClipEdges;
}

impl<T: BoxTest + ?Sized> BoxTest for &T {
    fn edges(&self, clip_box: &ClipBox, polygon: &[Vec2]) -> ClipEdges {
        (**self).edges(clip_box, polygon)
    }
}

/// Always clips against all four sides.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxTestAll;

impl BoxTest for BoxTestAll {
    fn edges(&self, _clip_box: &ClipBox, _polygon: &[Vec2]) -> ClipEdges {
        ClipEdges::ALL
    }
}

/// Clips only against the sides the polygon's bounding box reaches past.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxTestBbox;

impl BoxTest for BoxTestBbox {
    fn edges(&self, clip_box: &ClipBox, polygon: &[Vec2]) -> ClipEdges {
        match ClipBox::bounding(polygon) {
            Some(bbox) => ClipEdges {
                min_x: bbox.min.x < clip_box.min.x,
                max_x: bbox.max.x > clip_box.max.x,
                min_y: bbox.min.y < clip_box.min.y,
                max_y: bbox.max.y > clip_box.max.y,
            },
            None => ClipEdges::NONE,
        }
    }
}

/// Clips a polygon against a [`ClipBox`].
///
/// # Example
/// ```
/// use rectclip::prelude::*;
///
/// let square = [
///     Vec2::new(0.0, 0.0),
///     Vec2::new(1.0, 0.0),
///     Vec2::new(1.0, 1.0),
///     Vec2::new(0.0, 1.0),
/// ];
/// let mut out = vertex_buffer();
/// let clip_box = ClipBox::from_coords(0.5, -1.0, 1.5, 1.0);
/// let mut clipper = BoxClipper::new(BoxTestBbox, NoStatus, clip_box, &square, &mut out);
/// assert_eq!(clipper.clip(), ClipStatus::Clipped);
/// assert_eq!(clipper.output_count(), 4);
/// ```
pub struct BoxClipper<'a, T, S> {
    test: T,
    status: S,
    clip_box: ClipBox,
    input: &'a [Vec2],
    output: &'a mut VertexBuffer,
    count: usize,
}

impl<'a, T: BoxTest, S: StatusOutput> BoxClipper<'a, T, S> {
    pub fn new(
        test: T,
        status: S,
        clip_box: ClipBox,
        input: &'a [Vec2],
        output: &'a mut VertexBuffer,
    ) -> Self {
        Self {
            test,
            status,
            clip_box,
            input,
            output,
            count: 0,
        }
    }

    /// Number of vertices written by the last [`clip`](Self::clip).
    pub fn output_count(&self) -> usize {
        self.count
    }

    /// Returns true if `p` lies within the clip box.
    pub fn is_inside(&self, p: Vec2) -> bool {
        self.clip_box.is_inside(p)
    }

    /// Clip the input polygon, leaving the result in the output buffer.
    pub fn clip(&mut self) -> ClipStatus {
        let edges = self.test.edges(&self.clip_box, self.input);
        let b = self.clip_box;
        let candidates = [
            (edges.min_x, BoxEdge::MinX(b.min.x)),
            (edges.max_x, BoxEdge::MaxX(b.max.x)),
            (edges.min_y, BoxEdge::MinY(b.min.y)),
            (edges.max_y, BoxEdge::MaxY(b.max.y)),
        ];

        let mut stages = [BoxEdge::MinX(0.0); 4];
        let mut active = 0;
        for (on, edge) in candidates {
            if on {
                stages[active] = edge;
                active += 1;
            }
        }

        let (result, count) = clip_stages(
            stages[..active].iter().copied(),
            &mut self.status,
            self.input,
            self.output,
        );
        debug!(
            "box clip: {} of {} vertices kept over {} pass(es), {}",
            count,
            self.input.len(),
            active,
            result
        );
        self.count = count;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipper::status::{NoStatus, VertexStatus, VertexStatusOutput};
    use crate::clipper::vertex_buffer;
    use approx::assert_relative_eq;

    fn unit_square() -> [Vec2; 4] {
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]
    }

    fn assert_unit_square_cut(out: &[Vec2]) {
        let expected = [
            Vec2::new(0.5, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.5, 1.0),
        ];
        assert_eq!(out.len(), expected.len());
        for (got, want) in out.iter().zip(expected.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-6);
        }
    }

    #[test]
    fn bbox_test_selects_crossed_sides() {
        let clip_box = ClipBox::from_coords(0.5, -1.0, 1.5, 1.0);
        let edges = BoxTestBbox.edges(&clip_box, &unit_square());
        assert_eq!(
            edges,
            ClipEdges {
                min_x: true,
                max_x: false,
                min_y: false,
                max_y: false,
            }
        );
        assert_eq!(edges.count(), 1);
        assert_eq!(BoxTestBbox.edges(&clip_box, &[]), ClipEdges::NONE);
    }

    #[test]
    fn square_against_half_box() {
        let square = unit_square();
        let clip_box = ClipBox::from_coords(0.5, -1.0, 1.5, 1.0);

        let mut out = vertex_buffer();
        let mut clipper = BoxClipper::new(BoxTestBbox, NoStatus, clip_box, &square, &mut out);
        assert_eq!(clipper.clip(), ClipStatus::Clipped);
        let count = clipper.output_count();
        assert_unit_square_cut(&out[..count]);
    }

    #[test]
    fn all_sides_gives_same_result() {
        let square = unit_square();
        let clip_box = ClipBox::from_coords(0.5, -1.0, 1.5, 1.0);

        let mut out = vertex_buffer();
        let mut clipper = BoxClipper::new(BoxTestAll, NoStatus, clip_box, &square, &mut out);
        assert_eq!(clipper.clip(), ClipStatus::Clipped);
        let count = clipper.output_count();
        assert_unit_square_cut(&out[..count]);
    }

    #[test]
    fn inside_polygon_is_untouched() {
        let square = unit_square();
        let clip_box = ClipBox::from_coords(-1.0, -1.0, 2.0, 2.0);

        for test in [&BoxTestAll as &dyn BoxTest, &BoxTestBbox] {
            let mut out = vertex_buffer();
            let mut clipper = BoxClipper::new(test, NoStatus, clip_box, &square, &mut out);
            assert_eq!(clipper.clip(), ClipStatus::Inside);
            assert_eq!(clipper.output_count(), 4);
            assert_eq!(&out[..4], &square);
        }
    }

    #[test]
    fn outside_polygon_is_rejected() {
        let tri = [
            Vec2::new(5.0, 0.0),
            Vec2::new(6.0, 0.0),
            Vec2::new(5.5, 1.0),
        ];
        let clip_box = ClipBox::from_coords(0.0, 0.0, 2.0, 2.0);
        let mut out = vertex_buffer();
        let mut clipper = BoxClipper::new(BoxTestAll, NoStatus, clip_box, &tri, &mut out);
        assert_eq!(clipper.clip(), ClipStatus::Outside);
        assert_eq!(clipper.output_count(), 0);
    }

    #[test]
    fn large_triangle_becomes_box() {
        let tri = [
            Vec2::new(-10.0, -10.0),
            Vec2::new(30.0, -10.0),
            Vec2::new(-10.0, 30.0),
        ];
        let clip_box = ClipBox::from_coords(0.0, 0.0, 4.0, 4.0);
        let mut out = vertex_buffer();
        let mut clipper = BoxClipper::new(BoxTestBbox, NoStatus, clip_box, &tri, &mut out);
        assert_eq!(clipper.clip(), ClipStatus::Clipped);
        let count = clipper.output_count();
        assert_eq!(count, 4);
        for p in &out[..count] {
            assert!(clip_box.is_inside(*p));
        }
    }

    #[test]
    fn three_sides_match_all_sides() {
        // Reaches past min x, max x and min y but stays below max y.
        let tri = [
            Vec2::new(-2.0, -2.0),
            Vec2::new(6.0, -2.0),
            Vec2::new(2.0, 3.0),
        ];
        let clip_box = ClipBox::from_coords(0.0, 0.0, 4.0, 4.0);
        let edges = BoxTestBbox.edges(&clip_box, &tri);
        assert_eq!(edges.count(), 3);
        assert!(!edges.max_y);

        let mut bbox_out = vertex_buffer();
        let mut clipper = BoxClipper::new(BoxTestBbox, NoStatus, clip_box, &tri, &mut bbox_out);
        assert_eq!(clipper.clip(), ClipStatus::Clipped);
        let bbox_count = clipper.output_count();

        let mut all_out = vertex_buffer();
        let mut clipper = BoxClipper::new(BoxTestAll, NoStatus, clip_box, &tri, &mut all_out);
        assert_eq!(clipper.clip(), ClipStatus::Clipped);
        let all_count = clipper.output_count();

        // Pentagon: the bottom corners cut off, apex untouched.
        assert_eq!(bbox_count, 5);
        assert_eq!(all_count, bbox_count);
        for (a, b) in bbox_out[..bbox_count].iter().zip(&all_out[..all_count]) {
            assert_relative_eq!(*a, *b, epsilon = 1e-6);
            assert!(clip_box.is_inside(*a));
        }
        assert!(bbox_out[..bbox_count].contains(&Vec2::new(2.0, 3.0)));
    }

    #[test]
    fn point_inside_test_includes_boundary() {
        let clip_box = ClipBox::from_coords(0.0, 0.0, 4.0, 2.0);
        assert!(clip_box.is_inside(Vec2::new(1.0, 1.0)));
        assert!(clip_box.is_inside(Vec2::new(4.0, 0.0)));
        assert!(!clip_box.is_inside(Vec2::new(4.5, 1.0)));
        assert!(!clip_box.is_inside(Vec2::new(1.0, -0.1)));

        let square = unit_square();
        let mut out = vertex_buffer();
        let clipper = BoxClipper::new(BoxTestAll, NoStatus, clip_box, &square, &mut out);
        assert!(clipper.is_inside(Vec2::new(3.0, 2.0)));
        assert!(!clipper.is_inside(Vec2::new(-1.0, 1.0)));
    }

    #[test]
    fn statuses_map_back_to_input() {
        let square = unit_square();
        let clip_box = ClipBox::from_coords(0.25, 0.25, 2.0, 2.0);
        let mut out = vertex_buffer();
        let mut status = VertexStatusOutput::new(square.len());
        let mut clipper = BoxClipper::new(BoxTestBbox, &mut status, clip_box, &square, &mut out);
        assert_eq!(clipper.clip(), ClipStatus::Clipped);
        let count = clipper.output_count();

        assert_eq!(status.statuses().len(), count);
        assert!(status.statuses().contains(&VertexStatus::Original(2)));
        for (i, s) in status.statuses().iter().enumerate() {
            if let Some(p) = s.locate(&square) {
                assert_relative_eq!(p, out[i], epsilon = 1e-5);
            }
        }
    }
}

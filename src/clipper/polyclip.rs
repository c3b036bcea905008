//! Clipping against a convex polygon.
//!
//! The clip polygon is given as its vertices plus one direction vector per
//! edge (`points[i] -> points[i + 1]`). By default vertices are taken in
//! counter-clockwise order with y pointing up, so the kept side of every edge
//! is its left side. A mirrored clipper keeps the right side instead, which
//! lets a clockwise polygon be used as is:
//!
//! ```
//! use rectclip::prelude::*;
//!
//! // Clockwise square.
//! let clip = [
//!     Vec2::new(0.0, 0.0),
//!     Vec2::new(0.0, 2.0),
//!     Vec2::new(2.0, 2.0),
//!     Vec2::new(2.0, 0.0),
//! ];
//! let edges = edge_vectors(&clip);
//! let tri = [Vec2::new(1.0, 1.0), Vec2::new(3.0, 1.0), Vec2::new(1.0, 3.0)];
//! let mut out = vertex_buffer();
//! let mut clipper = PolyClipper::new(NoStatus, &tri, &mut out, &clip, &edges)
//!     .mirrored(signed_area(&clip) < 0.0);
//! assert!(clipper.is_inside(Vec2::new(1.0, 1.0)));
//! assert_eq!(clipper.clip(), ClipStatus::Clipped);
//! ```

use log::debug;

use super::edge::{clip_stages, EdgeLogic};
use super::status::StatusOutput;
use super::{ClipStatus, VertexBuffer};
use crate::config::SMALL_EPSILON;
use crate::math::Vec2;

/// One edge of a convex clip polygon: a point on the edge and its direction.
///
/// Points on the left of the direction are inside, or on the right when
/// `mirrored` is set. Points on the line are inside either way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolyEdge {
    pub point: Vec2,
    pub direction: Vec2,
    pub mirrored: bool,
}

impl PolyEdge {
    pub fn new(point: Vec2, direction: Vec2) -> Self {
        Self {
            point,
            direction,
            mirrored: false,
        }
    }

    pub fn with_mirror(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }
}

impl EdgeLogic for PolyEdge {
    fn inside(&self, p: Vec2) -> bool {
        let side = self.direction.cross(p - self.point);
        if self.mirrored {
            side <= 0.0
        } else {
            side >= 0.0
        }
    }

    fn intersect(&self, from: Vec2, to: Vec2) -> (f32, Vec2) {
        let denom = self.direction.cross(to - from);
        // Segment parallel to the edge.
        let t = if denom.abs() < SMALL_EPSILON {
            1.0
        } else {
            (self.direction.cross(self.point - from) / denom).clamp(0.0, 1.0)
        };
        (t, from.lerp(to, t))
    }
}

/// Edge direction vectors for a closed polygon.
pub fn edge_vectors(points: &[Vec2]) -> Vec<Vec2> {
    let n = points.len();
    (0..n).map(|i| points[(i + 1) % n] - points[i]).collect()
}

/// Signed area of a closed polygon: positive when counter-clockwise.
pub fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    (0..n).map(|i| points[i].cross(points[(i + 1) % n])).sum::<f32>() * 0.5
}

/// Clips a polygon against a convex clip polygon, one edge at a time.
pub struct PolyClipper<'a, S> {
    status: S,
    input: &'a [Vec2],
    output: &'a mut VertexBuffer,
    points: &'a [Vec2],
    edges: &'a [Vec2],
    mirrored: bool,
    count: usize,
}

impl<'a, S: StatusOutput> PolyClipper<'a, S> {
    /// `points` and `edges` describe the clip polygon; extra entries in the
    /// longer of the two are ignored.
    pub fn new(
        status: S,
        input: &'a [Vec2],
        output: &'a mut VertexBuffer,
        points: &'a [Vec2],
        edges: &'a [Vec2],
    ) -> Self {
        Self {
            status,
            input,
            output,
            points,
            edges,
            mirrored: false,
            count: 0,
        }
    }

    /// Keep the right side of every edge, for clockwise clip polygons.
    pub fn mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    /// Number of vertices written by the last [`clip`](Self::clip).
    pub fn output_count(&self) -> usize {
        self.count
    }

    /// Returns true if `p` lies inside the clip polygon or on its boundary.
    pub fn is_inside(&self, p: Vec2) -> bool {
        self.clip_edges().all(|edge| edge.inside(p))
    }

    pub fn clip(&mut self) -> ClipStatus {
        let mirrored = self.mirrored;
        let stages = self
            .points
            .iter()
            .zip(self.edges.iter())
            .map(move |(&point, &direction)| {
                PolyEdge::new(point, direction).with_mirror(mirrored)
            });

        let (result, count) = clip_stages(stages, &mut self.status, self.input, self.output);
        debug!(
            "polygon clip: {} of {} vertices kept over {} edge(s), {}",
            count,
            self.input.len(),
            self.points.len().min(self.edges.len()),
            result
        );
        self.count = count;
        result
    }

    fn clip_edges(&self) -> impl Iterator<Item = PolyEdge> + '_ {
        self.points
            .iter()
            .zip(self.edges.iter())
            .map(move |(&point, &direction)| {
                PolyEdge::new(point, direction).with_mirror(self.mirrored)
            })
    }
}

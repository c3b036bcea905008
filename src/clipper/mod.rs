//! Polygon clipping.
//!
//! All clippers are built on the Sutherland-Hodgman single-edge pass in
//! [`edge`]. Two front ends apply it repeatedly:
//!
//! - [`boxclip`]: clipping against an axis-aligned box, skipping box sides
//!   the polygon cannot cross.
//! - [`polyclip`]: clipping against every edge of a convex polygon.
//!
//! Clippers never allocate. They read from a caller slice and write into a
//! caller-owned [`VertexBuffer`] of [`MAX_OUTPUT_VERTICES`] entries; vertices
//! beyond that capacity are dropped.

pub mod boxclip;
pub mod edge;
pub mod polyclip;
pub mod status;

pub use boxclip::{BoxClipper, BoxEdge, BoxTest, BoxTestAll, BoxTestBbox, ClipBox, ClipEdges};
pub use edge::{EdgeClipper, EdgeLogic};
pub use polyclip::{edge_vectors, signed_area, PolyClipper, PolyEdge};
pub use status::{NoStatus, StatusOutput, VertexStatus, VertexStatusOutput};

use crate::config::MAX_OUTPUT_VERTICES;
use crate::math::Vec2;

/// Fixed-capacity output storage for a clipper.
pub type VertexBuffer = [Vec2; MAX_OUTPUT_VERTICES];

/// Create a zeroed [`VertexBuffer`].
pub fn vertex_buffer() -> VertexBuffer {
    [Vec2::ZERO; MAX_OUTPUT_VERTICES]
}

/// Result of clipping a polygon.
///
/// Variants are ordered from most to least clipped, so the combined result
/// of several passes is their minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClipStatus {
    /// Fewer than three vertices survived; the output is empty.
    Outside,
    /// Part of the polygon was cut away.
    Clipped,
    /// The polygon was entirely inside; the output equals the input.
    Inside,
}

impl std::fmt::Display for ClipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipStatus::Outside => write!(f, "Outside"),
            ClipStatus::Clipped => write!(f, "Clipped"),
            ClipStatus::Inside => write!(f, "Inside"),
        }
    }
}

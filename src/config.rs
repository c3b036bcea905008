//! Compile-time tuning constants shared by the region and clipping code.

/// Capacity of a clipper output buffer. Clippers stop emitting vertices once
/// this many have been written; the rest of the polygon is dropped.
pub const MAX_OUTPUT_VERTICES: usize = 64;

/// Per-axis distance below which two emitted vertices are merged.
pub const EPSILON: f32 = 0.001;

/// Denominator magnitude below which a segment is treated as parallel to a
/// clip edge.
pub const SMALL_EPSILON: f32 = 0.000_001;

/// Number of rectangles a [`RectRegion`](crate::RectRegion) reserves at a time.
pub const REGION_GROWTH: usize = 64;

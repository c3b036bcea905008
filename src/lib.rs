//! 2D rectangle-region algebra and polygon clipping.
//!
//! This crate provides two independent pieces of geometry plumbing:
//!
//! - [`RectRegion`]: an arbitrary set of integer cells kept as a list of
//!   disjoint [`Rect`]s, with union ([`RectRegion::include`]) and difference
//!   ([`RectRegion::exclude`]).
//! - Sutherland-Hodgman polygon clippers against an axis-aligned box
//!   ([`BoxClipper`]) or a convex polygon ([`PolyClipper`]), with optional
//!   per-vertex provenance reporting through [`StatusOutput`].
//!
//! # Quick Start
//!
//! ```
//! use rectclip::prelude::*;
//!
//! let mut region = RectRegion::new();
//! region.include(Rect::new(0, 0, 10, 10))?;
//! region.exclude(Rect::new(2, 2, 4, 4))?;
//! assert_eq!(region.area(), 121 - 9);
//! # Ok::<(), rectclip::RegionError>(())
//! ```

// Public API - exposed to library consumers
pub mod clipper;
pub mod config;
pub mod error;
pub mod math;
pub mod rect;
pub mod region;

// Re-export commonly needed types at crate root for convenience
pub use clipper::{
    vertex_buffer, BoxClipper, ClipBox, ClipStatus, PolyClipper, StatusOutput, VertexBuffer,
};
pub use config::{EPSILON, MAX_OUTPUT_VERTICES};
pub use error::RegionError;
pub use math::Vec2;
pub use rect::Rect;
pub use region::RectRegion;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rectclip::prelude::*;
/// ```
pub mod prelude {
    // Regions
    pub use crate::rect::Rect;
    pub use crate::region::RectRegion;

    // Clipping
    pub use crate::clipper::{
        edge_vectors, signed_area, vertex_buffer, BoxClipper, BoxEdge, BoxTest, BoxTestAll,
        BoxTestBbox, ClipBox, ClipEdges, ClipStatus, EdgeClipper, EdgeLogic, NoStatus, PolyClipper,
        PolyEdge, StatusOutput, VertexBuffer, VertexStatus, VertexStatusOutput,
    };

    // Math
    pub use crate::math::Vec2;

    // Errors
    pub use crate::error::RegionError;
}

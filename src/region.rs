//! Disjoint-rectangle regions.
//!
//! A [`RectRegion`] describes an arbitrary set of integer cells as a list of
//! pairwise disjoint rectangles. Rectangles are added with
//! [`RectRegion::include`] and removed with [`RectRegion::exclude`]; both keep
//! the list disjoint by chopping or fragmenting the rectangles that overlap.

use log::trace;

use crate::config::REGION_GROWTH;
use crate::error::RegionError;
use crate::rect::Rect;

/// A 2D region stored as a set of non-overlapping rectangles.
///
/// The decomposition is not canonical: two regions covering the same cells
/// may hold different rectangles. Compare coverage with [`RectRegion::contains`]
/// or [`RectRegion::area`], not with the rectangle list.
#[derive(Clone, Debug, Default)]
pub struct RectRegion {
    rects: Vec<Rect>,
}

impl RectRegion {
    /// Create an empty region. No storage is allocated until the first include.
    pub fn new() -> Self {
        Self { rects: Vec::new() }
    }

    /// Create an empty region with room for at least `capacity` rectangles.
    pub fn with_capacity(capacity: usize) -> Result<Self, RegionError> {
        let mut region = Self::new();
        region.reserve_for(capacity)?;
        Ok(region)
    }

    /// Number of rectangles in the decomposition.
    pub fn count(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// The rectangle at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.count()`.
    pub fn rect_at(&self, index: usize) -> &Rect {
        &self.rects[index]
    }

    /// Mutable access to the rectangle at `index`.
    ///
    /// Editing a rectangle through this reference can break disjointness;
    /// the caller is responsible for keeping the region consistent.
    ///
    /// # Panics
    /// Panics if `index >= self.count()`.
    pub fn rect_at_mut(&mut self, index: usize) -> &mut Rect {
        &mut self.rects[index]
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rect> {
        self.rects.iter()
    }

    /// Remove every rectangle. Storage is kept for reuse.
    pub fn make_empty(&mut self) {
        self.rects.clear();
    }

    /// Returns true if the cell `(x, y)` is covered by the region.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rects.iter().any(|r| r.contains(x, y))
    }

    /// Total number of covered cells. Members are disjoint, so even a region
    /// covering the whole `i32` plane fits.
    pub fn area(&self) -> u128 {
        self.rects.iter().map(Rect::area).sum()
    }

    /// Smallest rectangle enclosing the whole region; empty for an empty region.
    pub fn bounding_box(&self) -> Rect {
        self.rects.iter().fold(Rect::EMPTY, |mut acc, r| {
            acc.union(r);
            acc
        })
    }

    /// Add `rect` to the region.
    ///
    /// Existing rectangles that overlap `rect` are chopped, fragmented or
    /// dropped, and `rect` itself is trimmed against rectangles that already
    /// cover part of it, so the region stays disjoint.
    pub fn include(&mut self, rect: Rect) -> Result<(), RegionError> {
        if rect.is_empty() {
            return Ok(());
        }
        if self.rects.is_empty() {
            return self.push_rect(rect);
        }

        let mut rect = rect;
        // The list shrinks and grows during the walk; `i` is re-checked against
        // the current length every iteration.
        let mut i = 0;
        while i < self.rects.len() {
            let r1 = self.rects[i];
            if !r1.intersects(&rect) {
                i += 1;
                continue;
            }

            if r1.contains_rect(&rect) {
                trace!("include {:?}: already covered by {:?}", rect, r1);
                return Ok(());
            }

            if rect.contains_rect(&r1) {
                trace!("include {:?}: supersedes {:?}", rect, r1);
                self.delete_rect(i);
                continue;
            }

            if let Some(piece) = chop_edge_intersection(&r1, &rect) {
                trace!("include {:?}: chopped {:?} to {:?}", rect, r1, piece);
                self.rects[i] = piece;
                i += 1;
                continue;
            }

            if let Some(piece) = chop_edge_intersection(&rect, &r1) {
                trace!("include {:?}: trimmed to {:?} by {:?}", rect, piece, r1);
                rect = piece;
                i += 1;
                continue;
            }

            trace!("include {:?}: fragmenting {:?}", rect, r1);
            self.delete_rect(i);
            self.fragment_rect(&r1, &rect)?;
        }

        self.push_rect(rect)
    }

    /// Remove the cells of `rect` from the region.
    pub fn exclude(&mut self, rect: Rect) -> Result<(), RegionError> {
        if rect.is_empty() {
            return Ok(());
        }

        let mut i = 0;
        while i < self.rects.len() {
            let r1 = self.rects[i];
            if !r1.intersects(&rect) {
                i += 1;
                continue;
            }

            if rect.contains_rect(&r1) {
                trace!("exclude {:?}: dropped {:?}", rect, r1);
                self.delete_rect(i);
                continue;
            }

            if let Some(piece) = chop_edge_intersection(&r1, &rect) {
                trace!("exclude {:?}: chopped {:?} to {:?}", rect, r1, piece);
                self.rects[i] = piece;
                i += 1;
                continue;
            }

            trace!("exclude {:?}: fragmenting {:?}", rect, r1);
            self.delete_rect(i);
            self.fragment_rect(&r1, &rect)?;
        }

        Ok(())
    }

    /// Restrict the region to the cells inside `clip`.
    pub fn clip_to(&mut self, clip: &Rect) {
        for r in &mut self.rects {
            r.intersect(clip);
        }
        self.rects.retain(|r| !r.is_empty());
    }

    /// Append a rectangle, growing storage in `REGION_GROWTH` blocks.
    fn push_rect(&mut self, rect: Rect) -> Result<(), RegionError> {
        if self.rects.len() == self.rects.capacity() {
            self.reserve_for(self.rects.len() + REGION_GROWTH)?;
        }
        self.rects.push(rect);
        Ok(())
    }

    fn reserve_for(&mut self, total: usize) -> Result<(), RegionError> {
        let additional = total.saturating_sub(self.rects.len());
        self.rects
            .try_reserve_exact(additional)
            .map_err(|source| RegionError::AllocationFailed {
                requested: total,
                source,
            })
    }

    /// Remove the rectangle at `index`, shifting the tail down.
    fn delete_rect(&mut self, index: usize) {
        self.rects.remove(index);
    }

    /// Push the parts of `rect` that lie outside `hole`.
    ///
    /// Pieces are a full-width band above and below the overlap plus the
    /// left and right stubs beside it; only the non-empty ones are pushed.
    fn fragment_rect(&mut self, rect: &Rect, hole: &Rect) -> Result<(), RegionError> {
        let cut = rect.intersection(hole);
        // A side gets a piece only when it has cells, so the +1/-1 below
        // never steps past the i32 range.
        if cut.ymin > rect.ymin {
            self.push_rect(Rect::new(rect.xmin, rect.ymin, rect.xmax, cut.ymin - 1))?;
        }
        if cut.ymax < rect.ymax {
            self.push_rect(Rect::new(rect.xmin, cut.ymax + 1, rect.xmax, rect.ymax))?;
        }
        if cut.xmin > rect.xmin {
            self.push_rect(Rect::new(rect.xmin, cut.ymin, cut.xmin - 1, cut.ymax))?;
        }
        if cut.xmax < rect.xmax {
            self.push_rect(Rect::new(cut.xmax + 1, cut.ymin, rect.xmax, cut.ymax))?;
        }
        Ok(())
    }
}

/// If `rect \ other` is a single rectangle, return it.
///
/// This holds when `other` spans `rect` along one axis and covers one of its
/// ends along the other, so the overlap can be sliced off an edge.
fn chop_edge_intersection(rect: &Rect, other: &Rect) -> Option<Rect> {
    let mut piece = *rect;
    piece.subtract(other);
    if piece.is_empty() || piece.intersects(other) {
        None
    } else {
        Some(piece)
    }
}

impl<'a> IntoIterator for &'a RectRegion {
    type Item = &'a Rect;
    type IntoIter = std::slice::Iter<'a, Rect>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}

//! Axis-aligned integer rectangles.
//!
//! Both the minimum and maximum bounds are inclusive: `Rect::new(0, 0, 0, 0)`
//! covers exactly one cell and `Rect::new(2, 2, 4, 4)` covers nine.

/// An axis-aligned rectangle with inclusive integer bounds.
///
/// A rectangle with `xmin > xmax` or `ymin > ymax` is empty. Empty rectangles
/// cover no points and never intersect anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub xmin: i32,
    pub ymin: i32,
    pub xmax: i32,
    pub ymax: i32,
}

impl Rect {
    /// The canonical empty rectangle.
    pub const EMPTY: Self = Self {
        xmin: 0,
        ymin: 0,
        xmax: -1,
        ymax: -1,
    };

    pub const fn new(xmin: i32, ymin: i32, xmax: i32, ymax: i32) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.xmin > self.xmax || self.ymin > self.ymax
    }

    /// Number of columns covered, or 0 when empty.
    pub fn width(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (i64::from(self.xmax) - i64::from(self.xmin) + 1) as u64
        }
    }

    /// Number of rows covered, or 0 when empty.
    pub fn height(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (i64::from(self.ymax) - i64::from(self.ymin) + 1) as u64
        }
    }

    /// Number of cells covered.
    ///
    /// A rectangle spanning the whole `i32` plane has 2^64 cells, one more
    /// than `u64` holds, so the count is a `u128`.
    pub fn area(&self) -> u128 {
        u128::from(self.width()) * u128::from(self.height())
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.xmin && x <= self.xmax && y >= self.ymin && y <= self.ymax
    }

    /// Returns true if every cell of `other` is covered by `self`.
    /// An empty `other` is contained by anything.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (other.xmin >= self.xmin
                && other.xmax <= self.xmax
                && other.ymin >= self.ymin
                && other.ymax <= self.ymax)
    }

    /// Returns true if both rectangles are non-empty and share at least one cell.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.xmin <= other.xmax
            && other.xmin <= self.xmax
            && self.ymin <= other.ymax
            && other.ymin <= self.ymax
    }

    /// Shrink `self` to the overlap with `other`. The result may be empty.
    pub fn intersect(&mut self, other: &Rect) {
        self.xmin = self.xmin.max(other.xmin);
        self.ymin = self.ymin.max(other.ymin);
        self.xmax = self.xmax.min(other.xmax);
        self.ymax = self.ymax.min(other.ymax);
    }

    /// The overlap of two rectangles, by value.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let mut r = *self;
        r.intersect(other);
        r
    }

    /// Grow `self` to the bounding box of both rectangles.
    /// Empty operands do not contribute.
    pub fn union(&mut self, other: &Rect) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = *other;
            return;
        }
        self.xmin = self.xmin.min(other.xmin);
        self.ymin = self.ymin.min(other.ymin);
        self.xmax = self.xmax.max(other.xmax);
        self.ymax = self.ymax.max(other.ymax);
    }

    /// Replace `self` with the smallest rectangle enclosing every cell of
    /// `self` not covered by `other`.
    ///
    /// The bounds only move when `other` spans `self` completely along one
    /// axis and covers one end of the other axis. When `other` covers all of
    /// `self` the result is [`Rect::EMPTY`].
    pub fn subtract(&mut self, other: &Rect) {
        if !self.intersects(other) {
            return;
        }
        if other.contains_rect(self) {
            *self = Rect::EMPTY;
            return;
        }

        let cut = self.intersection(other);
        let spans_rows = cut.ymin == self.ymin && cut.ymax == self.ymax;
        let spans_cols = cut.xmin == self.xmin && cut.xmax == self.xmax;

        // `other` does not contain `self`, so a cut flush with one end stops
        // short of the other and the +1/-1 stays inside the i32 range.
        if spans_rows {
            if cut.xmin == self.xmin {
                self.xmin = cut.xmax + 1;
            } else if cut.xmax == self.xmax {
                self.xmax = cut.xmin - 1;
            }
        } else if spans_cols {
            if cut.ymin == self.ymin {
                self.ymin = cut.ymax + 1;
            } else if cut.ymax == self.ymax {
                self.ymax = cut.ymin - 1;
            }
        }
    }

    /// Move the rectangle by the given offset.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.xmin += dx;
        self.xmax += dx;
        self.ymin += dy;
        self.ymax += dy;
    }

    /// Grow the rectangle so that it covers the cell `(x, y)`.
    pub fn extend(&mut self, x: i32, y: i32) {
        self.union(&Rect::new(x, y, x, y));
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::EMPTY
    }
}

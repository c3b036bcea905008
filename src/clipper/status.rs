//! Per-vertex provenance reporting for clippers.
//!
//! Every vertex a clipper emits is reported to a [`StatusOutput`] together
//! with where it came from in the stage's input. Multi-stage clippers call
//! [`StatusOutput::flip`] after each stage so the next stage's indices refer
//! to the previous stage's output.

use crate::math::Vec2;

/// Where a clipped vertex came from, relative to the original input polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VertexStatus {
    /// An unmodified input vertex.
    Original(usize),
    /// A point on the input edge `vertex -> vertex + 1` (wrapping) at
    /// parameter `pos` in `[0, 1]`.
    OnEdge { vertex: usize, pos: f32 },
    /// A point strictly inside the input polygon whose origin cannot be
    /// expressed in terms of a single input edge.
    Inside,
}

impl VertexStatus {
    /// Recover the vertex position from the original polygon.
    /// Returns `None` for [`VertexStatus::Inside`] or an out-of-range index.
    pub fn locate(&self, original: &[Vec2]) -> Option<Vec2> {
        match *self {
            VertexStatus::Original(i) => original.get(i).copied(),
            VertexStatus::OnEdge { vertex, pos } => {
                let a = original.get(vertex)?;
                let b = original.get((vertex + 1) % original.len())?;
                Some(a.lerp(*b, pos))
            }
            VertexStatus::Inside => None,
        }
    }
}

/// Receiver of per-vertex provenance events.
///
/// Indices passed as `from`/`next` refer to the current stage's input;
/// `to` is the index in the stage's output.
pub trait StatusOutput {
    /// Output vertex `to` is a copy of input vertex `from`.
    fn copy(&mut self, to: usize, from: usize);

    /// Output vertex `to` lies on the input edge `from -> next` at parameter `t`.
    fn on_edge(&mut self, to: usize, from: usize, next: usize, t: f32);

    /// Output vertex `to` is a synthetic interior point.
    fn inside(&mut self, to: usize);

    /// A stage finished with `count` output vertices; its output becomes the
    /// input of the next stage.
    fn flip(&mut self, count: usize);
}

impl<S: StatusOutput + ?Sized> StatusOutput for &mut S {
    fn copy(&mut self, to: usize, from: usize) {
        (**self).copy(to, from)
    }

    fn on_edge(&mut self, to: usize, from: usize, next: usize, t: f32) {
        (**self).on_edge(to, from, next, t)
    }

    fn inside(&mut self, to: usize) {
        (**self).inside(to)
    }

    fn flip(&mut self, count: usize) {
        (**self).flip(count)
    }
}

/// Discards all provenance events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStatus;

impl StatusOutput for NoStatus {
    fn copy(&mut self, _to: usize, _from: usize) {}
    fn on_edge(&mut self, _to: usize, _from: usize, _next: usize, _t: f32) {}
    fn inside(&mut self, _to: usize) {}
    fn flip(&mut self, _count: usize) {}
}

/// Tracks the provenance of every output vertex back to the original input
/// polygon across any number of clip stages.
///
/// Two status lists are kept: `current` describes the input of the running
/// stage and `next` collects its output. [`StatusOutput::flip`] swaps them.
#[derive(Debug, Clone)]
pub struct VertexStatusOutput {
    original_count: usize,
    current: Vec<VertexStatus>,
    next: Vec<VertexStatus>,
}

impl VertexStatusOutput {
    /// Start tracking a polygon of `original_count` vertices.
    pub fn new(original_count: usize) -> Self {
        Self {
            original_count,
            current: (0..original_count).map(VertexStatus::Original).collect(),
            next: Vec::with_capacity(original_count),
        }
    }

    /// Reuse the tracker for a new input polygon.
    pub fn reset(&mut self, original_count: usize) {
        self.original_count = original_count;
        self.current.clear();
        self.current.extend((0..original_count).map(VertexStatus::Original));
        self.next.clear();
    }

    /// Statuses of the most recent output, one per output vertex.
    pub fn statuses(&self) -> &[VertexStatus] {
        &self.current
    }

    pub fn status(&self, index: usize) -> Option<VertexStatus> {
        self.current.get(index).copied()
    }

    fn set(&mut self, to: usize, status: VertexStatus) {
        self.next.resize(to, VertexStatus::Inside);
        self.next.push(status);
    }

    fn input(&self, index: usize) -> VertexStatus {
        self.current
            .get(index)
            .copied()
            .unwrap_or(VertexStatus::Inside)
    }

    /// Parameter of `status` along original edge `edge`, if it lies on it.
    fn position_on(&self, status: VertexStatus, edge: usize) -> Option<f32> {
        match status {
            VertexStatus::Original(i) if i == edge => Some(0.0),
            VertexStatus::Original(i) if i == (edge + 1) % self.original_count => Some(1.0),
            VertexStatus::OnEdge { vertex, pos } if vertex == edge => Some(pos),
            _ => None,
        }
    }

    /// Combine the provenance of two input vertices into that of a point `t`
    /// of the way between them.
    fn compound(&self, a: VertexStatus, b: VertexStatus, t: f32) -> VertexStatus {
        let n = self.original_count;
        if n == 0 {
            return VertexStatus::Inside;
        }
        let candidates = match a {
            VertexStatus::Original(i) => [Some(i), Some((i + n - 1) % n)],
            VertexStatus::OnEdge { vertex, .. } => [Some(vertex), None],
            VertexStatus::Inside => [None, None],
        };
        for edge in candidates.into_iter().flatten() {
            if let (Some(pa), Some(pb)) = (self.position_on(a, edge), self.position_on(b, edge)) {
                return VertexStatus::OnEdge {
                    vertex: edge,
                    pos: pa + (pb - pa) * t,
                };
            }
        }
        VertexStatus::Inside
    }
}

impl StatusOutput for VertexStatusOutput {
    fn copy(&mut self, to: usize, from: usize) {
        let status = self.input(from);
        self.set(to, status);
    }

    fn on_edge(&mut self, to: usize, from: usize, next: usize, t: f32) {
        let status = self.compound(self.input(from), self.input(next), t);
        if status == VertexStatus::Inside {
            self.inside(to);
        } else {
            self.set(to, status);
        }
    }

    fn inside(&mut self, to: usize) {
        self.set(to, VertexStatus::Inside);
    }

    fn flip(&mut self, count: usize) {
        self.next.resize(count, VertexStatus::Inside);
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn on_edge(status: VertexStatus) -> (usize, f32) {
        match status {
            VertexStatus::OnEdge { vertex, pos } => (vertex, pos),
            other => panic!("expected OnEdge, got {:?}", other),
        }
    }

    #[test]
    fn originals_compound_to_edge_position() {
        let mut out = VertexStatusOutput::new(4);
        out.copy(0, 0);
        out.on_edge(1, 0, 1, 0.25);
        // Edge 3 -> 0 walked backwards from 0.
        out.on_edge(2, 0, 3, 0.5);
        out.flip(3);

        assert_eq!(out.status(0), Some(VertexStatus::Original(0)));
        let (v, p) = on_edge(out.statuses()[1]);
        assert_eq!(v, 0);
        assert_relative_eq!(p, 0.25);
        let (v, p) = on_edge(out.statuses()[2]);
        assert_eq!(v, 3);
        assert_relative_eq!(p, 0.5);
    }

    #[test]
    fn on_edge_compounds_across_stages() {
        let mut out = VertexStatusOutput::new(4);
        out.on_edge(0, 0, 1, 0.5);
        out.copy(1, 1);
        out.flip(2);

        // Halfway between (edge 0 at 0.5) and vertex 1 is edge 0 at 0.75.
        out.on_edge(0, 0, 1, 0.5);
        out.flip(1);
        let (v, p) = on_edge(out.statuses()[0]);
        assert_eq!(v, 0);
        assert_relative_eq!(p, 0.75);
    }

    #[test]
    fn unrelated_points_become_inside() {
        let mut out = VertexStatusOutput::new(4);
        out.on_edge(0, 0, 1, 0.5);
        out.on_edge(1, 1, 2, 0.5);
        out.flip(2);

        out.on_edge(0, 0, 1, 0.5);
        out.flip(1);
        assert_eq!(out.statuses(), &[VertexStatus::Inside]);
    }

    #[test]
    fn flip_truncates_rewritten_output() {
        let mut out = VertexStatusOutput::new(3);
        out.copy(0, 0);
        out.copy(1, 1);
        out.copy(1, 2);
        out.flip(2);
        assert_eq!(
            out.statuses(),
            &[VertexStatus::Original(0), VertexStatus::Original(2)]
        );
    }

    #[test]
    fn locate_recovers_positions() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        assert_eq!(VertexStatus::Original(2).locate(&square), Some(square[2]));
        let p = VertexStatus::OnEdge { vertex: 3, pos: 0.25 }
            .locate(&square)
            .unwrap();
        assert_relative_eq!(p, Vec2::new(0.0, 0.75));
        assert_eq!(VertexStatus::Inside.locate(&square), None);
    }
}

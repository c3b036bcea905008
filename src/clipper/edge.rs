//! Sutherland-Hodgman clipping against a single half-plane.

use approx::AbsDiffEq;
use log::warn;

use super::status::StatusOutput;
use super::{ClipStatus, VertexBuffer};
use crate::config::{EPSILON, MAX_OUTPUT_VERTICES};
use crate::math::Vec2;

/// A clip edge: a half-plane test plus segment intersection.
pub trait EdgeLogic {
    /// Returns true if `p` is on the kept side of the edge (boundary included).
    fn inside(&self, p: Vec2) -> bool;

    /// Intersect the segment `from -> to` with the edge line.
    ///
    /// Returns the parameter `t` along the segment, clamped to `[0, 1]`, and
    /// the intersection point.
    fn intersect(&self, from: Vec2, to: Vec2) -> (f32, Vec2);
}

impl<L: EdgeLogic + ?Sized> EdgeLogic for &L {
    fn inside(&self, p: Vec2) -> bool {
        (**self).inside(p)
    }

    fn intersect(&self, from: Vec2, to: Vec2) -> (f32, Vec2) {
        (**self).intersect(from, to)
    }
}

/// Clips one polygon against one edge.
///
/// The input polygon is closed implicitly (the last vertex connects to the
/// first). Consecutive output vertices closer than [`EPSILON`] on both axes
/// are merged, as is a final vertex that would coincide with the first.
pub struct EdgeClipper<'a, L, S> {
    logic: L,
    status: S,
    input: &'a [Vec2],
    output: &'a mut VertexBuffer,
    count: usize,
    truncated: bool,
}

impl<'a, L: EdgeLogic, S: StatusOutput> EdgeClipper<'a, L, S> {
    pub fn new(logic: L, status: S, input: &'a [Vec2], output: &'a mut VertexBuffer) -> Self {
        Self {
            logic,
            status,
            input,
            output,
            count: 0,
            truncated: false,
        }
    }

    /// Number of vertices written by the last [`clip`](Self::clip).
    pub fn output_count(&self) -> usize {
        self.count
    }

    /// Run the clip, writing the result into the output buffer.
    pub fn clip(&mut self) -> ClipStatus {
        self.count = 0;
        self.truncated = false;

        let n = self.input.len();
        if n == 0 {
            return ClipStatus::Outside;
        }

        let mut clipped = false;
        let mut crossings = 0;
        let mut prev = n - 1;
        let mut prev_inside = self.logic.inside(self.input[prev]);

        for cur in 0..n {
            let closing = cur == n - 1;
            let cur_inside = self.logic.inside(self.input[cur]);

            if cur_inside != prev_inside {
                crossings += 1;
                let (t, point) = self.logic.intersect(self.input[prev], self.input[cur]);
                // Entering exactly at `cur`: the copy below represents it.
                if !(cur_inside && point.abs_diff_eq(&self.input[cur], EPSILON)) {
                    self.emit_on_edge(point, prev, cur, t, closing);
                }
            }

            if cur_inside {
                self.emit_copy(cur, closing);
            } else {
                clipped = true;
            }

            // A convex polygon crosses a line at most twice; once back inside
            // the remaining vertices are all kept.
            if crossings >= 2 && cur_inside && !closing {
                for rest in cur + 1..n {
                    self.emit_copy(rest, rest == n - 1);
                }
                break;
            }

            prev = cur;
            prev_inside = cur_inside;
        }

        if self.truncated {
            warn!(
                "clip output truncated at {} vertices (input had {})",
                MAX_OUTPUT_VERTICES, n
            );
        }

        if self.count < 3 {
            self.count = 0;
            ClipStatus::Outside
        } else if clipped {
            ClipStatus::Clipped
        } else {
            ClipStatus::Inside
        }
    }

    fn emit_copy(&mut self, index: usize, closing: bool) {
        let point = self.input[index];
        if let Some(to) = self.push(point, closing) {
            self.status.copy(to, index);
        }
    }

    fn emit_on_edge(&mut self, point: Vec2, from: usize, next: usize, t: f32, closing: bool) {
        if let Some(to) = self.push(point, closing) {
            self.status.on_edge(to, from, next, t);
        }
    }

    /// Append `point` unless it duplicates its neighbour or the buffer is full.
    fn push(&mut self, point: Vec2, closing: bool) -> Option<usize> {
        if self.count > 0 {
            if point.abs_diff_eq(&self.output[self.count - 1], EPSILON) {
                return None;
            }
            if closing && point.abs_diff_eq(&self.output[0], EPSILON) {
                return None;
            }
        }
        if self.count >= MAX_OUTPUT_VERTICES {
            self.truncated = true;
            return None;
        }
        self.output[self.count] = point;
        self.count += 1;
        Some(self.count - 1)
    }
}

/// Run a sequence of edge clips, ping-ponging between `output` and a stack
/// temporary so the final stage always writes into `output`.
///
/// Stage `s` of `k` writes into `output` when `k - s` is odd. The status
/// output is flipped after every stage. Returns the combined status and the
/// final vertex count. With no stages the input is copied through unchanged.
pub(crate) fn clip_stages<L, I, S>(
    stages: I,
    status: &mut S,
    input: &[Vec2],
    output: &mut VertexBuffer,
) -> (ClipStatus, usize)
where
    L: EdgeLogic,
    I: ExactSizeIterator<Item = L>,
    S: StatusOutput,
{
    let total = stages.len();
    if total == 0 {
        let count = input.len().min(MAX_OUTPUT_VERTICES);
        if count < input.len() {
            warn!(
                "clip output truncated at {} vertices (input had {})",
                MAX_OUTPUT_VERTICES,
                input.len()
            );
        }
        output[..count].copy_from_slice(&input[..count]);
        for i in 0..count {
            status.copy(i, i);
        }
        status.flip(count);
        return (ClipStatus::Inside, count);
    }

    let mut temp = super::vertex_buffer();
    let mut result = ClipStatus::Inside;
    let mut count = input.len();

    for (stage, logic) in stages.enumerate() {
        let to_output = (total - stage) % 2 == 1;
        let (stage_result, stage_count) = if stage == 0 {
            if to_output {
                clip_stage(logic, status, input, output)
            } else {
                clip_stage(logic, status, input, &mut temp)
            }
        } else if to_output {
            clip_stage(logic, status, &temp[..count], output)
        } else {
            clip_stage(logic, status, &output[..count], &mut temp)
        };

        result = result.min(stage_result);
        count = stage_count;
        if result == ClipStatus::Outside {
            return (ClipStatus::Outside, 0);
        }
    }

    (result, count)
}

fn clip_stage<L: EdgeLogic, S: StatusOutput>(
    logic: L,
    status: &mut S,
    input: &[Vec2],
    output: &mut VertexBuffer,
) -> (ClipStatus, usize) {
    let mut clipper = EdgeClipper::new(logic, &mut *status, input, output);
    let result = clipper.clip();
    let count = clipper.output_count();
    status.flip(count);
    (result, count)
}

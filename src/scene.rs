//! Path model: stroke styling, the vector-path collaborator seam, and the
//! in-memory store that owns live strokes.
//!
//! The stroke controller only ever talks to a [`Scene`]: create a styled
//! empty path, append points to it, read it back, and simplify it when the
//! stroke completes. `PathStore` is the implementation shipped with the
//! crate; embedders with their own vector-graphics layer can substitute it.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashMap;

use uuid::Uuid;

use crate::consts::DEFAULT_COLOUR;
use crate::surface::Position;

/// Unique identifier for a path in a scene.
pub type PathId = Uuid;

/// Style options captured from a pen when a stroke is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrokeStyle {
    /// Stroke colour, any CSS colour string.
    pub colour: String,
}

impl StrokeStyle {
    #[must_use]
    pub fn new(colour: impl Into<String>) -> Self {
        Self { colour: colour.into() }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(DEFAULT_COLOUR)
    }
}

/// One continuous pointer-down-to-pointer-up path: an ordered point sequence
/// plus the style it was created with.
#[derive(Debug, Clone)]
pub struct Stroke {
    pub id: PathId,
    pub style: StrokeStyle,
    pub points: Vec<Position>,
}

/// The vector-path collaborator consumed by the stroke controller.
///
/// All operations are total: an unknown path id is a no-op (or `None`),
/// never an error.
pub trait Scene {
    /// Create a new empty path styled with `style` and return its id.
    fn create_path(&mut self, style: StrokeStyle) -> PathId;

    /// Append a point to the end of a path's point sequence.
    fn append_point(&mut self, id: &PathId, point: Position);

    /// The most recently appended point of a path, if it has any.
    fn last_point(&self, id: &PathId) -> Option<Position>;

    /// Number of points in a path; zero for unknown ids.
    fn point_count(&self, id: &PathId) -> usize;

    /// Reduce a path's point count while keeping every remaining point
    /// within `tolerance` surface units of the original shape.
    fn simplify(&mut self, id: &PathId, tolerance: f64);
}

/// In-memory path store, insertion-ordered for rendering.
#[derive(Debug, Default)]
pub struct PathStore {
    strokes: HashMap<PathId, Stroke>,
    order: Vec<PathId>,
}

impl PathStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a reference to a stroke by id.
    #[must_use]
    pub fn get(&self, id: &PathId) -> Option<&Stroke> {
        self.strokes.get(id)
    }

    /// Iterate strokes in creation order.
    pub fn strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.order.iter().filter_map(|id| self.strokes.get(id))
    }

    /// Number of strokes in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store holds no strokes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Scene for PathStore {
    fn create_path(&mut self, style: StrokeStyle) -> PathId {
        let id = Uuid::new_v4();
        self.strokes.insert(id, Stroke { id, style, points: Vec::new() });
        self.order.push(id);
        id
    }

    fn append_point(&mut self, id: &PathId, point: Position) {
        let Some(stroke) = self.strokes.get_mut(id) else {
            return;
        };
        stroke.points.push(point);
    }

    fn last_point(&self, id: &PathId) -> Option<Position> {
        self.strokes.get(id).and_then(|stroke| stroke.points.last().copied())
    }

    fn point_count(&self, id: &PathId) -> usize {
        self.strokes.get(id).map_or(0, |stroke| stroke.points.len())
    }

    fn simplify(&mut self, id: &PathId, tolerance: f64) {
        let Some(stroke) = self.strokes.get_mut(id) else {
            return;
        };
        stroke.points = rdp_simplify(&stroke.points, tolerance);
    }
}

/// Ramer–Douglas–Peucker polyline simplification.
///
/// Recursively removes points within `tolerance` distance of the line
/// between the first and last point. Sequences of two or fewer points pass
/// through unchanged.
#[must_use]
pub fn rdp_simplify(points: &[Position], tolerance: f64) -> Vec<Position> {
    let [first, interior @ .., last] = points else {
        return points.to_vec();
    };
    if interior.is_empty() {
        return points.to_vec();
    }

    // Interior point farthest from the first-to-last chord.
    let mut max_dist = 0.0;
    let mut max_idx = 0;
    for (i, p) in interior.iter().enumerate() {
        let dist = perpendicular_distance(*p, *first, *last);
        if dist > max_dist {
            max_dist = dist;
            max_idx = i + 1;
        }
    }

    if max_dist > tolerance {
        let mut left = rdp_simplify(&points[..=max_idx], tolerance);
        let right = rdp_simplify(&points[max_idx..], tolerance);
        left.pop(); // split point is the first element of `right`
        left.extend(right);
        left
    } else {
        vec![*first, *last]
    }
}

/// Distance from `p` to the line segment `a`–`b`. Falls back to the distance
/// to `a` when the segment is degenerate.
fn perpendicular_distance(p: Position, a: Position, b: Position) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq > 0.0 {
        let area = (dx * (a.y - p.y) - (a.x - p.x) * dy).abs();
        area / len_sq.sqrt()
    } else {
        let ex = p.x - a.x;
        let ey = p.y - a.y;
        (ex * ex + ey * ey).sqrt()
    }
}

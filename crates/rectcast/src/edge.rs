//! Edge primitives: where a segment crosses one finite axis-aligned edge.
//!
//! Both primitives return the fraction `t ∈ [0,1]` along the query segment,
//! or `NO_HIT`. They are the only divisions in the crate. Zero denominators
//! are not special-cased: `x/0 = ±∞` and `0/0 = NaN` both fail the closed
//! range checks below, which is exactly the "reject" we want for parallel
//! segments and zero-extent edges.

use nalgebra::Vector2;

use crate::geom2::Rect2;
use crate::raycast::NO_HIT;

/// One of the four rectangle edges (y up).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// `y = y_max`
    Top,
    /// `y = y_min`
    Bottom,
    /// `x = x_min`
    Left,
    /// `x = x_max`
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

#[inline]
fn in_unit(v: f64) -> bool {
    // false for NaN
    (0.0..=1.0).contains(&v)
}

/// Crossing with the horizontal edge `(edge_x, edge_y) → (edge_x + edge_width, edge_y)`.
#[inline]
pub fn intersect_horizontal(
    begin: Vector2<f64>,
    dir: Vector2<f64>,
    edge_x: f64,
    edge_y: f64,
    edge_width: f64,
) -> f64 {
    let t = (edge_y - begin.y) / dir.y;
    if !in_unit(t) {
        return NO_HIT;
    }
    let x_at = begin.x + dir.x * t;
    let u = (x_at - edge_x) / edge_width;
    if !in_unit(u) {
        return NO_HIT;
    }
    t
}

/// Crossing with the vertical edge `(edge_x, edge_y) → (edge_x, edge_y + edge_height)`.
#[inline]
pub fn intersect_vertical(
    begin: Vector2<f64>,
    dir: Vector2<f64>,
    edge_x: f64,
    edge_y: f64,
    edge_height: f64,
) -> f64 {
    let t = (edge_x - begin.x) / dir.x;
    if !in_unit(t) {
        return NO_HIT;
    }
    let y_at = begin.y + dir.y * t;
    let u = (y_at - edge_y) / edge_height;
    if !in_unit(u) {
        return NO_HIT;
    }
    t
}

/// Crossing with one named edge of `rect`.
#[inline]
pub fn intersect_edge(begin: Vector2<f64>, dir: Vector2<f64>, rect: &Rect2, edge: Edge) -> f64 {
    match edge {
        Edge::Top => intersect_horizontal(begin, dir, rect.x_min, rect.y_max(), rect.width),
        Edge::Bottom => intersect_horizontal(begin, dir, rect.x_min, rect.y_min, rect.width),
        Edge::Left => intersect_vertical(begin, dir, rect.x_min, rect.y_min, rect.height),
        Edge::Right => intersect_vertical(begin, dir, rect.x_max(), rect.y_min, rect.height),
    }
}

use nalgebra::Vector2;

use super::NO_HIT;
use crate::edge::{intersect_edge, Edge};
use crate::geom2::Rect2;
use crate::lookup::EdgeSelector;

/// Turn one selector into a fraction.
///
/// - `None`: `NO_HIT`.
/// - `Center`: `inside_value` (0 for entry, 1 for exit), no test.
/// - otherwise: the edges of `EdgeSelector::candidates` in order; the first
///   hit wins, so a corner tests its fallback edge only on a primary miss.
#[inline]
pub fn resolve(
    begin: Vector2<f64>,
    dir: Vector2<f64>,
    rect: &Rect2,
    selector: EdgeSelector,
    inside_value: f64,
) -> f64 {
    match selector {
        EdgeSelector::None => NO_HIT,
        EdgeSelector::Center => inside_value,
        _ => first_hit(begin, dir, rect, selector.candidates()),
    }
}

#[inline]
fn first_hit(begin: Vector2<f64>, dir: Vector2<f64>, rect: &Rect2, edges: &[Edge]) -> f64 {
    for &edge in edges {
        let t = intersect_edge(begin, dir, rect, edge);
        if t != NO_HIT {
            return t;
        }
    }
    NO_HIT
}

use nalgebra::Vector2;

use super::{raycast_line_rect, RectHit, NO_HIT};
use crate::cfg::AGREE_EPS;
use crate::edge::{intersect_edge, Edge};
use crate::geom2::Rect2;

/// Reference raycast: test all four edges, take the smallest / largest hit.
pub fn raycast_brute_force(begin: Vector2<f64>, end: Vector2<f64>, rect: &Rect2) -> RectHit {
    let dir = end - begin;
    let mut t_min = NO_HIT;
    let mut t_max = f64::NEG_INFINITY;
    for edge in Edge::ALL {
        let t = intersect_edge(begin, dir, rect, edge);
        if t != NO_HIT {
            t_min = t_min.min(t);
            t_max = t_max.max(t);
        }
    }
    let t_entry = if rect.contains(begin) { 0.0 } else { t_min };
    let t_exit = if rect.contains(end) {
        1.0
    } else if t_min != NO_HIT {
        t_max
    } else {
        NO_HIT
    };
    RectHit::from_fractions(t_entry, t_exit)
}

#[inline]
fn same_fraction(a: f64, b: f64) -> bool {
    (a == NO_HIT && b == NO_HIT) || (a - b).abs() <= AGREE_EPS
}

/// True if the lookup path and the brute-force reference agree within `AGREE_EPS`.
pub fn cross_check(begin: Vector2<f64>, end: Vector2<f64>, rect: &Rect2) -> bool {
    let fast = raycast_line_rect(begin, end, rect);
    let slow = raycast_brute_force(begin, end, rect);
    same_fraction(fast.t_entry, slow.t_entry) && same_fraction(fast.t_exit, slow.t_exit)
}

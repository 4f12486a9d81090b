//! Segment vs. rectangle raycast.
//!
//! Flow
//! - classify both endpoints (`sector::classify`),
//! - read the entry and exit selectors from `LOOKUP`,
//! - `resolve` each selector with at most two edge primitives.
//!
//! `raycast_brute_force` tests all four edges and is kept as the reference the
//! lookup path is checked against.

mod brute;
mod resolve;
mod types;

pub use brute::{cross_check, raycast_brute_force};
pub use resolve::resolve;
pub use types::{RectHit, NO_HIT};

use nalgebra::Vector2;

use crate::geom2::{Rect2, Seg2};
use crate::lookup::{Phase, LOOKUP};
use crate::sector::classify;

/// Entry and exit fractions of `begin → end` against `rect`.
///
/// `t_entry = 0` when `begin` is inside, `t_exit = 1` when `end` is inside,
/// both `NO_HIT` when the segment misses. Either both fractions are `NO_HIT`
/// or neither is (see `RectHit::from_fractions`).
pub fn raycast_line_rect(begin: Vector2<f64>, end: Vector2<f64>, rect: &Rect2) -> RectHit {
    let dir = end - begin;
    let start = classify(rect, begin).index();
    let stop = classify(rect, end).index();
    let cell = &LOOKUP[start][stop];
    let t_entry = resolve(begin, dir, rect, cell[Phase::Entry.index()], 0.0);
    let t_exit = resolve(begin, dir, rect, cell[Phase::Exit.index()], 1.0);
    RectHit::from_fractions(t_entry, t_exit)
}

#[inline]
pub fn raycast_seg_rect(seg: &Seg2, rect: &Rect2) -> RectHit {
    raycast_line_rect(seg.begin, seg.end, rect)
}

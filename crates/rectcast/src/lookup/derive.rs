//! Geometric rule behind `LOOKUP`.
//!
//! - If both endpoints are strictly above, strictly below, strictly left of,
//!   or strictly right of the rectangle, the segment stays in that open
//!   half-plane and misses: `None` for both phases.
//! - Otherwise the entry lies on the edge(s) facing the start sector and the
//!   exit on the edge(s) facing the end sector. A point about to enter from
//!   `Top` must cross `y = y_max` inside `[x_min, x_max]` first; from a corner
//!   sector either of the two adjacent edges can be first, never both at
//!   different fractions (a line meets a convex boundary at most twice).

use super::{EdgeSelector, Phase};
use crate::sector::{Band, Sector};

/// Selector for the edges that face `sector` (`Center` for `Inside`).
pub const fn facing(sector: Sector) -> EdgeSelector {
    match sector {
        Sector::TopLeft => EdgeSelector::TopLeft,
        Sector::Top => EdgeSelector::Top,
        Sector::TopRight => EdgeSelector::TopRight,
        Sector::Left => EdgeSelector::Left,
        Sector::Inside => EdgeSelector::Center,
        Sector::Right => EdgeSelector::Right,
        Sector::BottomLeft => EdgeSelector::BottomLeft,
        Sector::Bottom => EdgeSelector::Bottom,
        Sector::BottomRight => EdgeSelector::BottomRight,
    }
}

#[inline]
fn same_outside_band(a: Band, b: Band) -> bool {
    a == b && a != Band::Mid
}

/// Recompute one table entry from the sector geometry.
pub fn derive_selector(start: Sector, end: Sector, phase: Phase) -> EdgeSelector {
    if same_outside_band(start.row(), end.row()) || same_outside_band(start.col(), end.col()) {
        return EdgeSelector::None;
    }
    match phase {
        Phase::Entry => facing(start),
        Phase::Exit => facing(end),
    }
}

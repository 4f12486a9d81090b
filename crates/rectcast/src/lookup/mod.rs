//! Sector-pair lookup: which edges can hold the entry / exit crossing.
//!
//! Purpose
//! - Replace four edge tests by at most one (side) or two (corner, primary
//!   then fallback), and by none when the answer follows from the sectors
//!   alone (segment starts/ends inside, or lies in an outside half-plane).
//!
//! Layout
//! - `LOOKUP[start][end][phase]`, indices from `Sector::index` and
//!   `Phase::index`. The table is a literal `static` (see `table.rs`);
//!   `derive_selector` restates the geometric rule it was built from and the
//!   test-suite checks all 162 entries against it.

mod derive;
mod table;

pub use derive::{derive_selector, facing};
pub use table::LOOKUP;

use crate::edge::Edge;
use crate::sector::Sector;

/// Which crossing of the segment we are looking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Phase {
    /// First boundary point, taken from the start sector.
    Entry = 0,
    /// Last boundary point, taken from the end sector.
    Exit = 1,
}

impl Phase {
    pub const ALL: [Phase; 2] = [Phase::Entry, Phase::Exit];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Minimal set of edges to test for one phase.
///
/// Corner variants are ordered pairs: the horizontal edge is tried first, the
/// vertical edge only if the first one misses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeSelector {
    /// No crossing possible.
    None,
    Top,
    Bottom,
    Left,
    Right,
    /// Top, then Left.
    TopLeft,
    /// Top, then Right.
    TopRight,
    /// Bottom, then Left.
    BottomLeft,
    /// Bottom, then Right.
    BottomRight,
    /// Endpoint is inside: answer is the caller's inside value, no test.
    Center,
}

impl EdgeSelector {
    /// Edges tested, in order. Empty for `None` and `Center`.
    pub const fn candidates(self) -> &'static [Edge] {
        match self {
            EdgeSelector::None | EdgeSelector::Center => &[],
            EdgeSelector::Top => &[Edge::Top],
            EdgeSelector::Bottom => &[Edge::Bottom],
            EdgeSelector::Left => &[Edge::Left],
            EdgeSelector::Right => &[Edge::Right],
            EdgeSelector::TopLeft => &[Edge::Top, Edge::Left],
            EdgeSelector::TopRight => &[Edge::Top, Edge::Right],
            EdgeSelector::BottomLeft => &[Edge::Bottom, Edge::Left],
            EdgeSelector::BottomRight => &[Edge::Bottom, Edge::Right],
        }
    }

    #[inline]
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            EdgeSelector::TopLeft
                | EdgeSelector::TopRight
                | EdgeSelector::BottomLeft
                | EdgeSelector::BottomRight
        )
    }
}

/// Table read for one sector pair and phase.
#[inline]
pub fn lookup(start: Sector, end: Sector, phase: Phase) -> EdgeSelector {
    LOOKUP[start.index()][end.index()][phase.index()]
}

#[cfg(test)]
mod tests;

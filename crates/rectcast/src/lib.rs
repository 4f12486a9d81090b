//! Segment vs. axis-aligned rectangle raycasts via sector lookup.
//!
//! Overview
//! - `geom2`: value types (`Rect2`, `Seg2`) on top of `nalgebra::Vector2<f64>`.
//! - `sector`: 3×3 classification of a point against a rectangle.
//! - `edge`: the two edge primitives (horizontal, vertical); the only divisions.
//! - `lookup`: the static `(start, end, phase) -> EdgeSelector` table.
//! - `raycast`: selector resolution and the `raycast_line_rect` entry point.
//! - `sample`: reproducible random queries for benches and cross-checks.
//!
//! Conventions
//! - `y` grows upwards: "top" is `y > y_max`.
//! - Points on the rectangle boundary count as inside.
//! - A miss is reported as `NO_HIT` (`+∞`), never as an error.

pub mod api;
pub mod cfg;
pub mod edge;
pub mod geom2;
pub mod lookup;
pub mod raycast;
pub mod sample;
pub mod sector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Rect2, Seg2};
pub use nalgebra::Vector2 as Vec2;
pub use raycast::{raycast_line_rect, raycast_seg_rect, RectHit, NO_HIT};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::edge::{intersect_edge, intersect_horizontal, intersect_vertical, Edge};
    pub use crate::geom2::{Rect2, Seg2};
    pub use crate::lookup::{lookup, EdgeSelector, Phase, LOOKUP};
    pub use crate::raycast::{
        raycast_brute_force, raycast_line_rect, raycast_seg_rect, resolve, RectHit, NO_HIT,
    };
    pub use crate::sector::{classify, Sector};
    pub use nalgebra::Vector2 as Vec2;
}

//! 2D value types: axis-aligned rectangle and parametrized segment.
//!
//! Points and directions are plain `nalgebra::Vector2<f64>`; this module only
//! adds the two shapes the raycast needs.

mod types;

pub use types::{Rect2, Seg2};

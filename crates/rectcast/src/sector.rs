//! Sector classification: which cell of the 3×3 grid around a rectangle holds a point.
//!
//! Layout (y up, rectangle in the centre cell):
//!
//! ```text
//!   TopLeft    | Top    | TopRight
//!   -----------+--------+------------
//!   Left       | Inside | Right
//!   -----------+--------+------------
//!   BottomLeft | Bottom | BottomRight
//! ```
//!
//! Comparisons are strict against the bounds, so a coordinate equal to a bound
//! falls into the middle band for that axis. A point on the boundary is `Inside`.

use nalgebra::Vector2;

use crate::geom2::Rect2;

/// Position of one coordinate relative to `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    /// `v < min`
    Low,
    /// `min <= v <= max`
    Mid,
    /// `v > max`
    High,
}

/// One of the nine regions around (and including) a rectangle.
///
/// Discriminants are the dense row-major index used by the lookup table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Sector {
    TopLeft = 0,
    Top = 1,
    TopRight = 2,
    Left = 3,
    Inside = 4,
    Right = 5,
    BottomLeft = 6,
    Bottom = 7,
    BottomRight = 8,
}

impl Sector {
    /// All sectors in index order.
    pub const ALL: [Sector; 9] = [
        Sector::TopLeft,
        Sector::Top,
        Sector::TopRight,
        Sector::Left,
        Sector::Inside,
        Sector::Right,
        Sector::BottomLeft,
        Sector::Bottom,
        Sector::BottomRight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Combine a row band (y axis) and a column band (x axis).
    #[inline]
    pub const fn from_bands(row: Band, col: Band) -> Self {
        match (row, col) {
            (Band::High, Band::Low) => Sector::TopLeft,
            (Band::High, Band::Mid) => Sector::Top,
            (Band::High, Band::High) => Sector::TopRight,
            (Band::Mid, Band::Low) => Sector::Left,
            (Band::Mid, Band::Mid) => Sector::Inside,
            (Band::Mid, Band::High) => Sector::Right,
            (Band::Low, Band::Low) => Sector::BottomLeft,
            (Band::Low, Band::Mid) => Sector::Bottom,
            (Band::Low, Band::High) => Sector::BottomRight,
        }
    }

    /// Band of the y coordinate (`High` = above).
    #[inline]
    pub const fn row(self) -> Band {
        match self {
            Sector::TopLeft | Sector::Top | Sector::TopRight => Band::High,
            Sector::Left | Sector::Inside | Sector::Right => Band::Mid,
            Sector::BottomLeft | Sector::Bottom | Sector::BottomRight => Band::Low,
        }
    }

    /// Band of the x coordinate (`Low` = left).
    #[inline]
    pub const fn col(self) -> Band {
        match self {
            Sector::TopLeft | Sector::Left | Sector::BottomLeft => Band::Low,
            Sector::Top | Sector::Inside | Sector::Bottom => Band::Mid,
            Sector::TopRight | Sector::Right | Sector::BottomRight => Band::High,
        }
    }
}

/// Classify `p` against `rect` with four comparisons.
#[inline]
pub fn classify(rect: &Rect2, p: Vector2<f64>) -> Sector {
    let row = if p.y > rect.y_max() {
        Band::High
    } else if p.y < rect.y_min {
        Band::Low
    } else {
        Band::Mid
    };
    let col = if p.x < rect.x_min {
        Band::Low
    } else if p.x > rect.x_max() {
        Band::High
    } else {
        Band::Mid
    };
    Sector::from_bands(row, col)
}

//! `Rect2` and `Seg2`.
//!
//! - `Rect2`: closed axis-aligned box `(x_min, y_min, width, height)`.
//! - `Seg2`: ordered pair `(begin, end)`, `p(t) = begin + t·(end − begin)`.

use nalgebra::Vector2;

/// Closed axis-aligned rectangle.
///
/// Invariants:
/// - `width >= 0`, `height >= 0`. Zero extents are allowed; their edges are
///   degenerate and never report a hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect2 {
    pub x_min: f64,
    pub y_min: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect2 {
    /// Unchecked constructor; callers uphold the non-negative extent invariant.
    #[inline]
    pub const fn new(x_min: f64, y_min: f64, width: f64, height: f64) -> Self {
        Self {
            x_min,
            y_min,
            width,
            height,
        }
    }

    /// Checked constructor. None for non-finite inputs or negative extents.
    pub fn try_new(x_min: f64, y_min: f64, width: f64, height: f64) -> Option<Self> {
        let all_finite = [x_min, y_min, width, height].iter().all(|v| v.is_finite());
        if !all_finite || width < 0.0 || height < 0.0 {
            return None;
        }
        Some(Self::new(x_min, y_min, width, height))
    }

    /// Rectangle spanned by two arbitrary opposite corners.
    #[inline]
    pub fn from_corners(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        let x_min = a.x.min(b.x);
        let y_min = a.y.min(b.y);
        Self::new(x_min, y_min, a.x.max(b.x) - x_min, a.y.max(b.y) - y_min)
    }

    #[inline]
    pub fn x_max(&self) -> f64 {
        self.x_min + self.width
    }

    #[inline]
    pub fn y_max(&self) -> f64 {
        self.y_min + self.height
    }

    #[inline]
    pub fn min_corner(&self) -> Vector2<f64> {
        Vector2::new(self.x_min, self.y_min)
    }

    #[inline]
    pub fn max_corner(&self) -> Vector2<f64> {
        Vector2::new(self.x_max(), self.y_max())
    }

    /// Inclusive membership; boundary points are inside.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.x_min && p.x <= self.x_max() && p.y >= self.y_min && p.y <= self.y_max()
    }
}

/// Directed segment from `begin` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seg2 {
    pub begin: Vector2<f64>,
    pub end: Vector2<f64>,
}

impl Seg2 {
    #[inline]
    pub fn new(begin: Vector2<f64>, end: Vector2<f64>) -> Self {
        Self { begin, end }
    }

    /// `end − begin`.
    #[inline]
    pub fn dir(&self) -> Vector2<f64> {
        self.end - self.begin
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> Vector2<f64> {
        self.begin + self.dir() * t
    }

    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            begin: self.end,
            end: self.begin,
        }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.dir().norm()
    }
}

use nalgebra::Vector2;

use crate::geom2::Seg2;

/// "No intersection": larger than every valid fraction.
pub const NO_HIT: f64 = f64::INFINITY;

/// Result of one raycast: fractions along the query segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectHit {
    pub t_entry: f64,
    pub t_exit: f64,
}

impl RectHit {
    #[inline]
    pub const fn miss() -> Self {
        Self {
            t_entry: NO_HIT,
            t_exit: NO_HIT,
        }
    }

    /// Build a hit from independently resolved fractions.
    ///
    /// A line through a rectangle corner meets two edges at the same point;
    /// rounding can accept one of them and reject the other. If exactly one
    /// side is `NO_HIT`, the segment touches the boundary at the other side's
    /// fraction and both fractions take that value.
    #[inline]
    pub fn from_fractions(t_entry: f64, t_exit: f64) -> Self {
        match (t_entry == NO_HIT, t_exit == NO_HIT) {
            (false, true) => Self {
                t_entry,
                t_exit: t_entry,
            },
            (true, false) => Self {
                t_entry: t_exit,
                t_exit,
            },
            _ => Self { t_entry, t_exit },
        }
    }

    #[inline]
    pub fn has_hit(&self) -> bool {
        self.t_entry != NO_HIT
    }

    pub fn entry_point(&self, seg: &Seg2) -> Option<Vector2<f64>> {
        self.has_hit().then(|| seg.point_at(self.t_entry))
    }

    pub fn exit_point(&self, seg: &Seg2) -> Option<Vector2<f64>> {
        (self.t_exit != NO_HIT).then(|| seg.point_at(self.t_exit))
    }

    /// Part of `seg` inside the rectangle, if any.
    pub fn clip(&self, seg: &Seg2) -> Option<Seg2> {
        if !self.has_hit() || self.t_exit == NO_HIT {
            return None;
        }
        Some(Seg2::new(seg.point_at(self.t_entry), seg.point_at(self.t_exit)))
    }

    /// Same hit expressed along the reversed segment: `(a, b) ↦ (1 − b, 1 − a)`.
    pub fn reversed(&self) -> Self {
        if !self.has_hit() || self.t_exit == NO_HIT {
            return Self::miss();
        }
        Self {
            t_entry: 1.0 - self.t_exit,
            t_exit: 1.0 - self.t_entry,
        }
    }
}

//! Random raycast queries (rectangle + segment) with replay tokens.
//!
//! Purpose
//! - Deterministic query streams for benchmarks, cross-checks against the
//!   brute-force reference, and the CLI `sample` command.
//!
//! Model
//! - Rectangle centre uniform in `[-half_extent, half_extent]²`, width and
//!   height uniform in `[rect_min_size, rect_max_size]`.
//! - Segment endpoints uniform in the same window, so every sector pair
//!   shows up with non-trivial frequency.
//! - Determinism: every query is a pure function of `(seed, index)`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::geom2::{Rect2, Seg2};

/// Error type for the sampler.
#[derive(Debug)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sample params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    /// Half side of the square window holding rectangle centres and endpoints.
    pub half_extent: f64,
    pub rect_min_size: f64,
    pub rect_max_size: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            half_extent: 10.0,
            rect_min_size: 1.0,
            rect_max_size: 8.0,
        }
    }
}

impl SampleCfg {
    pub fn validate(&self) -> Result<(), SampleError> {
        if !self.half_extent.is_finite() || self.half_extent <= 0.0 {
            return Err(SampleError::invalid("half_extent must be finite and > 0"));
        }
        if !self.rect_min_size.is_finite() || !self.rect_max_size.is_finite() {
            return Err(SampleError::invalid("rect sizes must be finite"));
        }
        if self.rect_min_size < 0.0 {
            return Err(SampleError::invalid("rect_min_size must be >= 0"));
        }
        if self.rect_min_size > self.rect_max_size {
            return Err(SampleError::invalid("rect_min_size must be <= rect_max_size"));
        }
        Ok(())
    }
}

/// Replay token: `(seed, index)` identifies one query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer on seed and index.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// One raycast query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Query {
    pub rect: Rect2,
    pub seg: Seg2,
    pub replay: ReplayToken,
}

/// Draw the query identified by `tok`.
pub fn draw_query(cfg: SampleCfg, tok: ReplayToken) -> Result<Query, SampleError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let h = cfg.half_extent;
    let coord = |rng: &mut StdRng| -> f64 { rng.gen_range(-h..=h) };
    let cx = coord(&mut rng);
    let cy = coord(&mut rng);
    let w = rng.gen_range(cfg.rect_min_size..=cfg.rect_max_size);
    let ht = rng.gen_range(cfg.rect_min_size..=cfg.rect_max_size);
    let rect = Rect2::new(cx - 0.5 * w, cy - 0.5 * ht, w, ht);
    let begin = Vector2::new(coord(&mut rng), coord(&mut rng));
    let end = Vector2::new(coord(&mut rng), coord(&mut rng));
    Ok(Query {
        rect,
        seg: Seg2::new(begin, end),
        replay: tok,
    })
}

/// Draw indices `0..count` for `seed`.
pub fn draw_queries(cfg: SampleCfg, seed: u64, count: usize) -> Result<Vec<Query>, SampleError> {
    cfg.validate()?;
    (0..count as u64)
        .map(|index| draw_query(cfg, ReplayToken { seed, index }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_is_deterministic() {
        let cfg = SampleCfg::default();
        let tok = ReplayToken { seed: 7, index: 3 };
        let a = draw_query(cfg, tok).unwrap();
        let b = draw_query(cfg, tok).unwrap();
        assert_eq!(a, b);
        let batch = draw_queries(cfg, 7, 5).unwrap();
        assert_eq!(batch.len(), 5);
        assert_eq!(batch[3], a);
        assert_ne!(batch[2].seg, batch[3].seg);
    }

    #[test]
    fn queries_respect_bounds() {
        let cfg = SampleCfg {
            half_extent: 4.0,
            rect_min_size: 0.5,
            rect_max_size: 2.0,
        };
        for q in draw_queries(cfg, 11, 200).unwrap() {
            assert!(q.rect.width >= 0.5 && q.rect.width <= 2.0);
            assert!(q.rect.height >= 0.5 && q.rect.height <= 2.0);
            for p in [q.seg.begin, q.seg.end] {
                assert!(p.x.abs() <= 4.0 && p.y.abs() <= 4.0);
            }
        }
    }

    #[test]
    fn invalid_params_are_rejected() {
        let bad = [
            SampleCfg {
                half_extent: 0.0,
                ..SampleCfg::default()
            },
            SampleCfg {
                rect_min_size: -1.0,
                ..SampleCfg::default()
            },
            SampleCfg {
                rect_min_size: 5.0,
                rect_max_size: 1.0,
                ..SampleCfg::default()
            },
            SampleCfg {
                half_extent: f64::NAN,
                ..SampleCfg::default()
            },
        ];
        for cfg in bad {
            let err = draw_query(cfg, ReplayToken { seed: 0, index: 0 }).unwrap_err();
            assert!(err.to_string().starts_with("invalid sample params"));
        }
    }
}

//! Curated API surface for callers (CLI, benches, experiments).
//!
//! Prefer these re-exports over reaching into submodules.

// Geometry
pub use crate::geom2::{Rect2, Seg2};
pub use crate::sector::{classify, Band, Sector};
// Edge primitives
pub use crate::edge::{intersect_edge, intersect_horizontal, intersect_vertical, Edge};
// Lookup table
pub use crate::lookup::{derive_selector, facing, lookup, EdgeSelector, Phase, LOOKUP};
// Raycast
pub use crate::raycast::{
    cross_check, raycast_brute_force, raycast_line_rect, raycast_seg_rect, resolve, RectHit,
    NO_HIT,
};
// Sampling
pub use crate::sample::{draw_queries, draw_query, Query, ReplayToken, SampleCfg, SampleError};

/// Every `(start, end)` sector pair whose stored selectors disagree with the
/// geometric derivation. Empty for a consistent table.
pub fn audit_table() -> Vec<(Sector, Sector, Phase)> {
    let mut bad = Vec::new();
    for s in Sector::ALL {
        for e in Sector::ALL {
            for ph in Phase::ALL {
                if lookup(s, e, ph) != derive_selector(s, e, ph) {
                    bad.push((s, e, ph));
                }
            }
        }
    }
    bad
}

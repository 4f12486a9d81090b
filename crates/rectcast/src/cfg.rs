//! Tolerance defaults (internal).
//!
//! Policy
//! - The raycast itself is tolerance-free: hit/miss decisions are plain range
//!   checks on IEEE-754 results. Constants here are only for comparing two
//!   computations of the same fraction.

/// Max absolute difference between two fractions that are considered equal
/// (lookup path vs. brute force, segment vs. reversed segment).
pub const AGREE_EPS: f64 = 1e-9;

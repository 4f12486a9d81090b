//! The precomputed `(start, end, phase)` table.

use super::EdgeSelector;

const NONE: EdgeSelector = EdgeSelector::None;
const T: EdgeSelector = EdgeSelector::Top;
const B: EdgeSelector = EdgeSelector::Bottom;
const L: EdgeSelector = EdgeSelector::Left;
const R: EdgeSelector = EdgeSelector::Right;
const TL: EdgeSelector = EdgeSelector::TopLeft;
const TR: EdgeSelector = EdgeSelector::TopRight;
const BL: EdgeSelector = EdgeSelector::BottomLeft;
const BR: EdgeSelector = EdgeSelector::BottomRight;
const C: EdgeSelector = EdgeSelector::Center;

/// `LOOKUP[start][end] = [entry, exit]`, sectors in `Sector::index` order
/// (TopLeft, Top, TopRight, Left, Inside, Right, BottomLeft, Bottom, BottomRight).
#[rustfmt::skip]
pub static LOOKUP: [[[EdgeSelector; 2]; 9]; 9] = [
    // TopLeft ->
    [
        [NONE, NONE], [NONE, NONE], [NONE, NONE],
        [NONE, NONE], [TL, C], [TL, R],
        [NONE, NONE], [TL, B], [TL, BR],
    ],
    // Top ->
    [
        [NONE, NONE], [NONE, NONE], [NONE, NONE],
        [T, L], [T, C], [T, R],
        [T, BL], [T, B], [T, BR],
    ],
    // TopRight ->
    [
        [NONE, NONE], [NONE, NONE], [NONE, NONE],
        [TR, L], [TR, C], [NONE, NONE],
        [TR, BL], [TR, B], [NONE, NONE],
    ],
    // Left ->
    [
        [NONE, NONE], [L, T], [L, TR],
        [NONE, NONE], [L, C], [L, R],
        [NONE, NONE], [L, B], [L, BR],
    ],
    // Inside ->
    [
        [C, TL], [C, T], [C, TR],
        [C, L], [C, C], [C, R],
        [C, BL], [C, B], [C, BR],
    ],
    // Right ->
    [
        [R, TL], [R, T], [NONE, NONE],
        [R, L], [R, C], [NONE, NONE],
        [R, BL], [R, B], [NONE, NONE],
    ],
    // BottomLeft ->
    [
        [NONE, NONE], [BL, T], [BL, TR],
        [NONE, NONE], [BL, C], [BL, R],
        [NONE, NONE], [NONE, NONE], [NONE, NONE],
    ],
    // Bottom ->
    [
        [B, TL], [B, T], [B, TR],
        [B, L], [B, C], [B, R],
        [NONE, NONE], [NONE, NONE], [NONE, NONE],
    ],
    // BottomRight ->
    [
        [BR, TL], [BR, T], [NONE, NONE],
        [BR, L], [BR, C], [NONE, NONE],
        [NONE, NONE], [NONE, NONE], [NONE, NONE],
    ],
];

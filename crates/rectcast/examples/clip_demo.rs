//! Print entry/exit fractions for a few segments against the 10×10 box.
//!
//! Usage:
//!   cargo run -p rectcast --example clip_demo

use nalgebra::vector;
use rectcast::api::{classify, raycast_seg_rect, Rect2, Seg2};

fn main() {
    let rect = Rect2::new(0.0, 0.0, 10.0, 10.0);
    let segments = [
        Seg2::new(vector![-5.0, 5.0], vector![5.0, 5.0]),
        Seg2::new(vector![-5.0, -5.0], vector![15.0, 15.0]),
        Seg2::new(vector![2.0, 20.0], vector![8.0, 30.0]),
        Seg2::new(vector![-5.0, 15.0], vector![15.0, -5.0]),
    ];
    for seg in segments {
        let hit = raycast_seg_rect(&seg, &rect);
        let sectors = (classify(&rect, seg.begin), classify(&rect, seg.end));
        match hit.clip(&seg) {
            Some(inner) => println!(
                "{:?} -> {:?} {:?}: t_entry={:.3} t_exit={:.3} inside=({:.2},{:.2})..({:.2},{:.2})",
                seg.begin,
                seg.end,
                sectors,
                hit.t_entry,
                hit.t_exit,
                inner.begin.x,
                inner.begin.y,
                inner.end.x,
                inner.end.y
            ),
            None => println!("{:?} -> {:?} {:?}: no hit", seg.begin, seg.end, sectors),
        }
    }
}

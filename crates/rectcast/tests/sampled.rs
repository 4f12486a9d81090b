//! Seeded cross-checks over sampled query streams.

use rectcast::api::*;

#[test]
fn sampled_queries_agree_with_brute_force() {
    let queries = draw_queries(SampleCfg::default(), 2025, 20_000).unwrap();
    let mut hits = 0usize;
    for q in &queries {
        assert!(
            cross_check(q.seg.begin, q.seg.end, &q.rect),
            "disagreement at {:?}",
            q.replay
        );
        if raycast_seg_rect(&q.seg, &q.rect).has_hit() {
            hits += 1;
        }
    }
    // both outcomes must be well represented for the check to mean anything
    assert!(hits > 1_000, "hits={hits}");
    assert!(hits < queries.len() - 1_000, "hits={hits}");
}

#[test]
fn sampled_queries_cover_every_sector_pair() {
    let queries = draw_queries(SampleCfg::default(), 99, 20_000).unwrap();
    let mut seen = [[false; 9]; 9];
    for q in &queries {
        let s = classify(&q.rect, q.seg.begin).index();
        let e = classify(&q.rect, q.seg.end).index();
        seen[s][e] = true;
    }
    for (s, row) in seen.iter().enumerate() {
        for (e, hit) in row.iter().enumerate() {
            assert!(*hit, "pair ({s}, {e}) never sampled");
        }
    }
}

#[test]
fn clipped_part_lies_inside() {
    let queries = draw_queries(SampleCfg::default(), 5, 2_000).unwrap();
    for q in &queries {
        let h = raycast_seg_rect(&q.seg, &q.rect);
        if let Some(c) = h.clip(&q.seg) {
            let mid = c.point_at(0.5);
            let grown = Rect2::new(
                q.rect.x_min - 1e-9,
                q.rect.y_min - 1e-9,
                q.rect.width + 2e-9,
                q.rect.height + 2e-9,
            );
            assert!(grown.contains(mid), "{:?}", q.replay);
        }
    }
}

use super::*;

#[test]
fn literal_table_matches_geometric_rule() {
    for s in Sector::ALL {
        for e in Sector::ALL {
            for ph in Phase::ALL {
                assert_eq!(
                    lookup(s, e, ph),
                    derive_selector(s, e, ph),
                    "{s:?} -> {e:?} ({ph:?})"
                );
            }
        }
    }
}

#[test]
fn both_phases_agree_on_reachability() {
    // Either both phases can see the rectangle or neither can.
    for s in Sector::ALL {
        for e in Sector::ALL {
            let entry = lookup(s, e, Phase::Entry);
            let exit = lookup(s, e, Phase::Exit);
            assert_eq!(entry == EdgeSelector::None, exit == EdgeSelector::None);
        }
    }
}

#[test]
fn same_outside_sector_never_reaches() {
    for s in Sector::ALL.into_iter().filter(|s| *s != Sector::Inside) {
        assert_eq!(lookup(s, s, Phase::Entry), EdgeSelector::None);
        assert_eq!(lookup(s, s, Phase::Exit), EdgeSelector::None);
    }
    assert_eq!(
        lookup(Sector::Inside, Sector::Inside, Phase::Entry),
        EdgeSelector::Center
    );
    assert_eq!(
        lookup(Sector::Inside, Sector::Inside, Phase::Exit),
        EdgeSelector::Center
    );
}

#[test]
fn center_only_for_inside_endpoints() {
    for s in Sector::ALL {
        for e in Sector::ALL {
            assert_eq!(
                lookup(s, e, Phase::Entry) == EdgeSelector::Center,
                s == Sector::Inside
            );
            assert_eq!(
                lookup(s, e, Phase::Exit) == EdgeSelector::Center,
                e == Sector::Inside
            );
        }
    }
}

#[test]
fn table_counts() {
    let mut none = 0;
    let mut corner = 0;
    for row in LOOKUP.iter() {
        for cell in row.iter() {
            for sel in cell.iter() {
                if *sel == EdgeSelector::None {
                    none += 1;
                }
                if sel.is_corner() {
                    corner += 1;
                }
            }
        }
    }
    // 32 unreachable sector pairs (both phases); each corner sector has 4
    // reachable partners, once as start and once as end
    assert_eq!(none, 64);
    assert_eq!(corner, 32);
}

#[test]
fn candidates_are_ordered_horizontal_first() {
    let sel = [
        EdgeSelector::TopLeft,
        EdgeSelector::TopRight,
        EdgeSelector::BottomLeft,
        EdgeSelector::BottomRight,
    ];
    for s in sel {
        let c = s.candidates();
        assert_eq!(c.len(), 2);
        assert!(c[0].is_horizontal());
        assert!(!c[1].is_horizontal());
    }
    assert!(EdgeSelector::None.candidates().is_empty());
    assert!(EdgeSelector::Center.candidates().is_empty());
    assert_eq!(EdgeSelector::Left.candidates(), &[Edge::Left]);
}

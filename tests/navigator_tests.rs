mod common;
use common::{d, key};
use rshiftgrid::core::UnassignedNavigator;
use rshiftgrid::models::CellKey;
use std::collections::HashSet;

fn candidates(ids: &[&str]) -> Vec<CellKey> {
    ids.iter().map(|id| key(id, "2025-01-15")).collect()
}

#[test]
fn test_consecutive_advances_visit_each_candidate_once() {
    let mut nav = UnassignedNavigator::new();
    let list = candidates(&["A", "B", "C", "D"]);
    let day = d("2025-01-15");

    let visited: Vec<CellKey> = (0..list.len())
        .filter_map(|_| nav.advance(day, "closer", &list))
        .collect();

    assert_eq!(visited, list);
    let unique: HashSet<_> = visited.iter().collect();
    assert_eq!(unique.len(), list.len());

    // wraps around after a full cycle
    assert_eq!(nav.advance(day, "closer", &list), Some(list[0].clone()));
}

#[test]
fn test_other_target_resets_cursor() {
    let mut nav = UnassignedNavigator::new();
    let list = candidates(&["A", "B", "C"]);
    let day = d("2025-01-15");

    nav.advance(day, "closer", &list);
    nav.advance(day, "closer", &list);
    assert_eq!(nav.cursor(), 1);

    assert_eq!(nav.advance(day, "girl", &list), Some(list[0].clone()));
    assert_eq!(nav.last_target(), Some((day, "girl")));

    // a different date is a different target too
    nav.advance(day, "girl", &list);
    assert_eq!(nav.advance(d("2025-01-16"), "girl", &list), Some(list[0].clone()));
}

#[test]
fn test_empty_candidates_leave_state_untouched() {
    let mut nav = UnassignedNavigator::new();
    let list = candidates(&["A", "B"]);
    let day = d("2025-01-15");

    nav.advance(day, "closer", &list);
    nav.advance(day, "closer", &list);
    let before = nav.clone();

    assert_eq!(nav.advance(day, "closer", &[]), None);
    assert_eq!(nav.advance(d("2025-01-20"), "girl", &[]), None);
    assert_eq!(nav, before);
}

#[test]
fn test_shrinking_candidates_wrap_instead_of_panicking() {
    let mut nav = UnassignedNavigator::new();
    let day = d("2025-01-15");
    let full = candidates(&["A", "B", "C"]);

    nav.advance(day, "closer", &full);
    nav.advance(day, "closer", &full);
    nav.advance(day, "closer", &full);
    assert_eq!(nav.cursor(), 2);

    let shrunk = candidates(&["A", "B"]);
    assert_eq!(nav.advance(day, "closer", &shrunk), Some(shrunk[1].clone()));

    let single = candidates(&["B"]);
    assert_eq!(nav.advance(day, "closer", &single), Some(single[0].clone()));
    assert_eq!(nav.advance(day, "closer", &single), Some(single[0].clone()));
}

#[test]
fn test_reset_returns_to_no_target() {
    let mut nav = UnassignedNavigator::new();
    let list = candidates(&["A", "B"]);
    let day = d("2025-01-15");

    nav.advance(day, "closer", &list);
    nav.advance(day, "closer", &list);
    nav.reset();

    assert_eq!(nav.last_target(), None);
    assert_eq!(nav.advance(day, "closer", &list), Some(list[0].clone()));
}

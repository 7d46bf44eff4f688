mod common;
use common::{d, january, key, record, roster, session_with};
use chrono::NaiveDate;
use rshiftgrid::core::logic::Core;
use rshiftgrid::core::{RateCalendar, ShiftSession, StaffRoster};
use rshiftgrid::models::{BaseShiftRecord, ShiftStatus};

const STATUSES: [ShiftStatus; 3] = [
    ShiftStatus::Confirmed,
    ShiftStatus::Declined,
    ShiftStatus::Undecided,
];

/// Base data with a deterministic mix of statuses and locations.
fn mixed_records() -> Vec<BaseShiftRecord> {
    let mut out = Vec::new();
    for (i, staff) in ["A", "B", "C", "D"].iter().enumerate() {
        for (j, date) in january().into_iter().enumerate() {
            if (i + j) % 4 == 3 {
                continue;
            }
            let mut r = BaseShiftRecord::new(*staff, date, STATUSES[(i * 7 + j) % 3]);
            if (i + 2 * j) % 3 == 0 {
                r.location = Some(format!("Room {}", (i + j) % 5));
            }
            out.push(r);
        }
    }
    out
}

/// Overlay a second deterministic pattern of edits.
fn edited_session() -> ShiftSession {
    let mut session = session_with(mixed_records());

    for (i, staff) in ["A", "B", "C", "D", "ghost"].iter().enumerate() {
        for (j, date) in january().into_iter().enumerate() {
            let k = rshiftgrid::models::CellKey::new(*staff, date);
            if (i * 3 + j) % 5 == 0 {
                session.status_changed(&k, STATUSES[(i + j) % 3], Some("tester"));
            }
            if (i + j) % 6 == 0 {
                session.rate_changed(&k, 7000 + (j as i64) * 100);
            }
            if j % 9 == 0 {
                session.rate_changed(&k, -1);
            }
        }
    }

    session
}

fn brute_available(session: &ShiftSession, date: NaiveDate, role: &str) -> (usize, usize) {
    let mut available = 0;
    let mut unassigned = 0;
    for staff in session.roster().members().iter().filter(|s| s.role == role) {
        let k = rshiftgrid::models::CellKey::new(staff.id.clone(), date);
        if session.effective_status(&k) == ShiftStatus::Confirmed {
            available += 1;
            if session.location(&k).is_none() {
                unassigned += 1;
            }
        }
    }
    (available, unassigned)
}

#[test]
fn test_headcount_matches_brute_force() {
    let mut session = edited_session();
    let summary = session.summary().clone();

    for &date in session.window() {
        for role in ["closer", "girl"] {
            let (available, unassigned) = brute_available(&session, date, role);
            assert_eq!(summary.available_count(date, role), available, "{date} {role}");
            assert_eq!(summary.unassigned_count(date, role), unassigned, "{date} {role}");
            assert_eq!(summary.unassigned_cells(date, role).len(), unassigned);
        }
        assert_eq!(
            summary.day_available(date),
            summary.available_count(date, "closer") + summary.available_count(date, "girl")
        );
    }
}

#[test]
fn test_earnings_match_brute_force() {
    let mut session = edited_session();
    let summary = session.summary().clone();

    for staff in roster() {
        let mut days = 0;
        let mut earned = 0;
        for &date in session.window() {
            let k = rshiftgrid::models::CellKey::new(staff.id.clone(), date);
            if session.effective_status(&k) == ShiftStatus::Confirmed {
                days += 1;
                earned += session.effective_rate(&k);
            }
        }
        assert_eq!(summary.worked_days(&staff.id), days, "{}", staff.id);
        assert_eq!(summary.earnings(&staff.id), earned, "{}", staff.id);
    }
}

#[test]
fn test_role_earnings_sum_staff_earnings_exactly() {
    let mut session = edited_session();
    let summary = session.summary().clone();

    for role in ["closer", "girl"] {
        let expected: i64 = roster()
            .iter()
            .filter(|s| s.role == role)
            .map(|s| summary.earnings(&s.id))
            .sum();
        assert_eq!(summary.role_earnings(role), expected);
    }

    // staff outside the roster never leak into any total
    assert_eq!(summary.earnings("ghost"), 0);
    assert_eq!(
        summary.total_earnings(),
        summary.role_earnings("closer") + summary.role_earnings("girl")
    );
}

#[test]
fn test_cached_summary_equals_full_recompute() {
    let mut session = edited_session();
    let cached = session.summary().clone();

    let resolver = session.resolver();
    let fresh = Core::build_grid_summary(
        session.window(),
        session.roster(),
        &resolver,
        session.calendar(),
    );
    assert_eq!(cached, fresh);
}

#[test]
fn test_summary_never_serves_stale_values() {
    let mut session = session_with(vec![record("A", "2025-01-15", ShiftStatus::Undecided)]);
    let day = d("2025-01-15");

    assert_eq!(session.summary().available_count(day, "closer"), 0);

    session.status_changed(&key("A", "2025-01-15"), ShiftStatus::Confirmed, None);
    assert!(session.is_stale());
    assert_eq!(session.summary().available_count(day, "closer"), 1);
    assert_eq!(session.summary().earnings("A"), 10000);

    session.rate_changed(&key("A", "2025-01-15"), 13000);
    assert_eq!(session.summary().earnings("A"), 13000);
    assert_eq!(session.summary().role_earnings("closer"), 13000);
}

#[test]
fn test_weekend_and_holidays_use_holiday_rate() {
    let staff = roster();
    let calendar = RateCalendar::new(
        vec![chrono::Weekday::Sat, chrono::Weekday::Sun],
        vec![d("2025-01-13")],
    );
    let mut session = ShiftSession::new(Vec::new(), staff, january(), calendar).expect("session");

    // Saturday, public holiday (Monday), plain Wednesday
    for day in ["2025-01-18", "2025-01-13", "2025-01-15"] {
        session.status_changed(&key("A", day), ShiftStatus::Confirmed, None);
    }

    let summary = session.summary();
    assert_eq!(summary.worked_days("A"), 3);
    assert_eq!(summary.earnings("A"), 15000 + 15000 + 10000);
}

#[test]
fn test_roles_without_work_still_report_zero() {
    let mut session = session_with(Vec::new());
    let summary = session.summary();

    assert_eq!(summary.roles, vec!["closer".to_string(), "girl".to_string()]);
    assert_eq!(summary.role_earnings.get("girl"), Some(&0));
    assert_eq!(summary.available_count(d("2025-01-01"), "girl"), 0);
    assert_eq!(summary.unassigned_count(d("2025-01-01"), "nobody"), 0);
    assert!(summary.unassigned_cells(d("2025-02-01"), "girl").is_empty());
}

#[test]
fn test_unassigned_cells_are_ordered_by_staff_id() {
    let staff = vec![
        rshiftgrid::models::StaffMember::new("zed", "closer", 1, 1),
        rshiftgrid::models::StaffMember::new("amy", "closer", 1, 1),
        rshiftgrid::models::StaffMember::new("mo", "closer", 1, 1),
    ];
    let records = vec![
        record("zed", "2025-01-15", ShiftStatus::Confirmed),
        record("amy", "2025-01-15", ShiftStatus::Confirmed),
        record("mo", "2025-01-15", ShiftStatus::Confirmed).with_location("Ginza"),
    ];
    let roster = StaffRoster::build(staff.clone()).expect("roster");
    let mut session =
        ShiftSession::new(records, staff, vec![d("2025-01-15")], RateCalendar::default())
            .expect("session");

    let ids: Vec<String> = session
        .summary()
        .unassigned_cells(d("2025-01-15"), "closer")
        .iter()
        .map(|k| k.staff_id.clone())
        .collect();
    assert_eq!(ids, vec!["amy", "zed"]);
    assert_eq!(roster.roles(), vec!["closer".to_string()]);
}

#[test]
fn test_huge_rates_saturate_instead_of_overflowing() {
    let mut session = session_with(Vec::new());
    let wed = key("A", "2025-01-15");
    let thu = key("A", "2025-01-16");

    for k in [&wed, &thu] {
        session.status_changed(k, ShiftStatus::Confirmed, None);
        assert!(session.rate_changed(k, i64::MAX));
    }

    let summary = session.summary();
    assert_eq!(summary.worked_days("A"), 2);
    assert_eq!(summary.earnings("A"), i64::MAX);
    assert_eq!(summary.role_earnings("closer"), i64::MAX);
    assert_eq!(summary.total_earnings(), i64::MAX);

    // still queryable after further edits
    session.status_changed(&thu, ShiftStatus::Declined, None);
    assert_eq!(session.summary().earnings("A"), i64::MAX);
}

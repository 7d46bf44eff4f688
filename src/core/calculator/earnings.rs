//! Worked days and pay, per staff member and per role.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::core::calendar::RateCalendar;
use crate::core::resolver::Resolver;
use crate::core::roster::StaffRoster;
use crate::models::{CellKey, StaffMember, StaffTotals};

pub fn staff_totals(
    staff: &StaffMember,
    dates: &[NaiveDate],
    resolver: &Resolver<'_>,
    calendar: &RateCalendar,
) -> StaffTotals {
    let mut totals = StaffTotals::default();

    for &date in dates {
        let key = CellKey::new(staff.id.clone(), date);

        if resolver.effective_status(&key).is_confirmed() {
            totals.worked_days += 1;
            let rate = resolver.effective_rate(&key, staff, calendar.is_weekend(date));
            totals.earnings = totals.earnings.saturating_add(rate);
        }
    }

    totals
}

pub fn calculate_staff_totals(
    dates: &[NaiveDate],
    roster: &StaffRoster,
    resolver: &Resolver<'_>,
    calendar: &RateCalendar,
) -> HashMap<String, StaffTotals> {
    roster
        .members()
        .iter()
        .map(|s| (s.id.clone(), staff_totals(s, dates, resolver, calendar)))
        .collect()
}

/// Sum of staff earnings per role, saturating at `i64::MAX`. Every roster role gets an entry, even
/// when nobody in it worked.
pub fn calculate_role_earnings(
    roster: &StaffRoster,
    staff: &HashMap<String, StaffTotals>,
) -> HashMap<String, i64> {
    let mut out: HashMap<String, i64> = roster.roles().into_iter().map(|r| (r, 0)).collect();

    for member in roster.members() {
        let earned = staff.get(&member.id).map_or(0, |t| t.earnings);
        let total = out.entry(member.role.clone()).or_insert(0);
        *total = total.saturating_add(earned);
    }

    out
}

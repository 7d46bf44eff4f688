//! Per-day, per-role headcount: available staff and the unassigned subset.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::core::resolver::Resolver;
use crate::core::roster::StaffRoster;
use crate::models::{CellKey, DayRoleTotals};

pub fn day_role_totals(
    date: NaiveDate,
    role: &str,
    roster: &StaffRoster,
    resolver: &Resolver<'_>,
) -> DayRoleTotals {
    let mut totals = DayRoleTotals::default();

    for staff in roster.with_role(role) {
        let key = CellKey::new(staff.id.clone(), date);

        if !resolver.effective_status(&key).is_confirmed() {
            continue;
        }

        totals.available += 1;
        if resolver.is_unassigned(&key) {
            totals.unassigned.push(key);
        }
    }

    totals.unassigned.sort_by(|a, b| a.staff_id.cmp(&b.staff_id));
    totals
}

/// Headcount for every date of the window and every role of the roster.
pub fn calculate_headcount(
    dates: &[NaiveDate],
    roster: &StaffRoster,
    resolver: &Resolver<'_>,
) -> HashMap<NaiveDate, HashMap<String, DayRoleTotals>> {
    let roles = roster.roles();

    dates
        .iter()
        .map(|&date| {
            let per_role: HashMap<String, DayRoleTotals> = roles
                .iter()
                .map(|role| (role.clone(), day_role_totals(date, role, roster, resolver)))
                .collect();
            (date, per_role)
        })
        .collect()
}

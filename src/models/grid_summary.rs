use chrono::NaiveDate;
use std::collections::HashMap;

use super::cell_key::CellKey;

/// Headcount of one role on one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayRoleTotals {
    pub available: usize,
    /// Confirmed cells with no location, ordered by staff id.
    pub unassigned: Vec<CellKey>,
}

/// Worked days and pay of one staff member over the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaffTotals {
    pub worked_days: usize,
    pub earnings: i64,
}

/// Everything the grid derives from resolved cells in one recompute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridSummary {
    pub dates: Vec<NaiveDate>,
    pub roles: Vec<String>,
    pub day_roles: HashMap<NaiveDate, HashMap<String, DayRoleTotals>>,
    pub staff: HashMap<String, StaffTotals>,
    pub role_earnings: HashMap<String, i64>,
}

impl GridSummary {
    fn day_role(&self, date: NaiveDate, role: &str) -> Option<&DayRoleTotals> {
        self.day_roles.get(&date).and_then(|roles| roles.get(role))
    }

    pub fn available_count(&self, date: NaiveDate, role: &str) -> usize {
        self.day_role(date, role).map_or(0, |t| t.available)
    }

    pub fn unassigned_count(&self, date: NaiveDate, role: &str) -> usize {
        self.day_role(date, role).map_or(0, |t| t.unassigned.len())
    }

    pub fn unassigned_cells(&self, date: NaiveDate, role: &str) -> &[CellKey] {
        self.day_role(date, role)
            .map(|t| t.unassigned.as_slice())
            .unwrap_or(&[])
    }

    /// Available headcount of a day across every role.
    pub fn day_available(&self, date: NaiveDate) -> usize {
        self.day_roles
            .get(&date)
            .map_or(0, |roles| roles.values().map(|t| t.available).sum())
    }

    pub fn worked_days(&self, staff_id: &str) -> usize {
        self.staff.get(staff_id).map_or(0, |t| t.worked_days)
    }

    pub fn earnings(&self, staff_id: &str) -> i64 {
        self.staff.get(staff_id).map_or(0, |t| t.earnings)
    }

    pub fn role_earnings(&self, role: &str) -> i64 {
        self.role_earnings.get(role).copied().unwrap_or(0)
    }

    pub fn total_earnings(&self) -> i64 {
        self.role_earnings
            .values()
            .fold(0, |acc, &v| acc.saturating_add(v))
    }
}

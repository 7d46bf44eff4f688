// src/export/model.rs

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::roster::StaffRoster;
use crate::models::GridSummary;
use crate::utils::date::weekday_str;

/// Flat row: headcount of one role on one day.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DayRoleExport {
    pub date: String,
    pub weekday: String,
    pub role: String,
    pub available: usize,
    pub unassigned: usize,
}

/// Flat row: totals of one staff member over the window.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct StaffExport {
    pub staff_id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub worked_days: usize,
    pub earnings: i64,
}

/// Whole snapshot, used by the JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    pub days: Vec<DayRoleExport>,
    pub staff: Vec<StaffExport>,
    pub role_earnings: BTreeMap<String, i64>,
    pub total_earnings: i64,
}

/// One row per date and role, in window then roster order.
pub(crate) fn day_role_rows(summary: &GridSummary) -> Vec<DayRoleExport> {
    summary
        .dates
        .iter()
        .flat_map(move |&date| {
            summary.roles.iter().map(move |role| DayRoleExport {
                date: date.format("%Y-%m-%d").to_string(),
                weekday: weekday_str(date).to_string(),
                role: role.clone(),
                available: summary.available_count(date, role),
                unassigned: summary.unassigned_count(date, role),
            })
        })
        .collect()
}

pub(crate) fn staff_rows(summary: &GridSummary, roster: &StaffRoster) -> Vec<StaffExport> {
    roster
        .members()
        .iter()
        .map(|s| StaffExport {
            staff_id: s.id.clone(),
            name: s.display_name().to_string(),
            role: s.role.clone(),
            company: s.company.clone(),
            worked_days: summary.worked_days(&s.id),
            earnings: summary.earnings(&s.id),
        })
        .collect()
}

pub(crate) fn summary_export(summary: &GridSummary, roster: &StaffRoster) -> SummaryExport {
    SummaryExport {
        days: day_role_rows(summary),
        staff: staff_rows(summary, roster),
        role_earnings: summary
            .role_earnings
            .iter()
            .map(|(r, e)| (r.clone(), *e))
            .collect(),
        total_earnings: summary.total_earnings(),
    }
}

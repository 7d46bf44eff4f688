use chrono::NaiveDate;

use crate::core::calculator::{earnings, headcount};
use crate::core::calendar::RateCalendar;
use crate::core::resolver::Resolver;
use crate::core::roster::StaffRoster;
use crate::models::GridSummary;

pub struct Core;

impl Core {
    /// Full recompute of every derived total over all staff and all dates.
    pub fn build_grid_summary(
        dates: &[NaiveDate],
        roster: &StaffRoster,
        resolver: &Resolver<'_>,
        calendar: &RateCalendar,
    ) -> GridSummary {
        let day_roles = headcount::calculate_headcount(dates, roster, resolver);
        let staff = earnings::calculate_staff_totals(dates, roster, resolver, calendar);
        let role_earnings = earnings::calculate_role_earnings(roster, &staff);

        GridSummary {
            dates: dates.to_vec(),
            roles: roster.roles(),
            day_roles,
            staff,
            role_earnings,
        }
    }
}

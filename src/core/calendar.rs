//! Decides which days are paid at the holiday rate.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{parse_date, parse_weekday};

#[derive(Debug, Clone)]
pub struct RateCalendar {
    weekend: Vec<Weekday>,
    holidays: HashSet<NaiveDate>,
}

impl Default for RateCalendar {
    fn default() -> Self {
        Self {
            weekend: vec![Weekday::Sat, Weekday::Sun],
            holidays: HashSet::new(),
        }
    }
}

impl RateCalendar {
    pub fn new(weekend: Vec<Weekday>, holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            weekend,
            holidays: holidays.into_iter().collect(),
        }
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let weekend = cfg
            .weekend_days
            .iter()
            .map(|d| parse_weekday(d).ok_or_else(|| AppError::InvalidWeekday(d.clone())))
            .collect::<AppResult<Vec<_>>>()?;

        let holidays = cfg
            .holidays
            .iter()
            .map(|d| parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone())))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self::new(weekend, holidays))
    }

    /// True when the day is paid at the holiday rate: a weekend day or a
    /// listed public holiday.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend.contains(&date.weekday()) || self.holidays.contains(&date)
    }
}

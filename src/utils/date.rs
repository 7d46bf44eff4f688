use chrono::{Datelike, NaiveDate, Weekday};

use crate::errors::{AppError, AppResult};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The one canonical text form of a calendar date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Accepts `Sat`, `saturday`, `SAT`, ...
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    s.trim().parse::<Weekday>().ok()
}

pub fn weekday_str(d: NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

pub fn generate_from_period(p: &str) -> AppResult<Vec<NaiveDate>> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok(vec![d]);
    }

    // YYYY-MM
    if let Some(dm) = parse_date(&format!("{p}-01")) {
        return Ok(all_days_of_month(dm.year(), dm.month()));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        return Ok(all_days_of_year(year));
    }

    Err(AppError::InvalidDate(format!("Invalid period: {p}")))
}

pub fn generate_range(start: &str, end: &str) -> AppResult<Vec<NaiveDate>> {
    let s = generate_from_period(start)?;
    let e = generate_from_period(end)?;

    let (Some(&start_date), Some(&end_date)) = (s.first(), e.last()) else {
        return Ok(Vec::new());
    };

    Ok(start_date
        .iter_days()
        .take_while(|d| *d <= end_date)
        .collect())
}

/// Resolve a period argument: a single period (`YYYY`, `YYYY-MM`,
/// `YYYY-MM-DD`) or a `start:end` range of them. No period means the
/// current month.
pub fn resolve_period(period: Option<&str>) -> AppResult<Vec<NaiveDate>> {
    match period {
        Some(p) => match p.split_once(':') {
            Some((start, end)) => generate_range(start, end),
            None => generate_from_period(p),
        },
        None => Ok(current_month_dates()),
    }
}

pub fn current_month_dates() -> Vec<NaiveDate> {
    let today = today();
    all_days_of_month(today.year(), today.month())
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| {
            first
                .iter_days()
                .take_while(|d| d.month() == month)
                .collect()
        })
        .unwrap_or_default()
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .map(|first| first.iter_days().take_while(|d| d.year() == year).collect())
        .unwrap_or_default()
}

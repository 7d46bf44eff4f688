use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;
use crate::utils::date::parse_date;

/// Address of one grid cell: a staff member on a calendar day.
///
/// The date is a plain calendar date; no time of day or timezone ever
/// takes part in key equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    pub staff_id: String,
    pub date: NaiveDate,
}

impl CellKey {
    pub fn new(staff_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            staff_id: staff_id.into(),
            date,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.staff_id, self.date_str())
    }
}

/// Parses `STAFF@YYYY-MM-DD`. The staff id may itself contain `@`; the
/// date is always taken after the last one.
impl FromStr for CellKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (staff, date) = s
            .rsplit_once('@')
            .ok_or_else(|| AppError::InvalidCellKey(s.to_string()))?;

        if staff.trim().is_empty() {
            return Err(AppError::InvalidCellKey(s.to_string()));
        }

        let date = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        Ok(CellKey::new(staff.trim(), date))
    }
}

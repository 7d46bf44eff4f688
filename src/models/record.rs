use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{cell_key::CellKey, status::ShiftStatus};

/// One row of the immutable base dataset: a staff member's shift on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseShiftRecord {
    pub staff_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: ShiftStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl BaseShiftRecord {
    pub fn new(staff_id: impl Into<String>, date: NaiveDate, status: ShiftStatus) -> Self {
        Self {
            staff_id: staff_id.into(),
            date,
            status,
            location: None,
            rate: None,
            comment: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn key(&self) -> CellKey {
        CellKey::new(self.staff_id.clone(), self.date)
    }

    /// A location only counts as assigned when it carries some text.
    pub fn assigned_location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

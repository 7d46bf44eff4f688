use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{cell_key::CellKey, status::ShiftStatus};

/// Edit events forwarded by the grid shell.
///
/// Serialized with an `event` tag so edit scripts can be replayed from
/// YAML or JSON:
///
/// ```yaml
/// - event: status_changed
///   staff_id: A
///   date: 2025-01-15
///   status: confirmed
/// - event: rate_changed
///   staff_id: A
///   date: 2025-01-15
///   rate: 10000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EditEvent {
    StatusChanged {
        staff_id: String,
        date: NaiveDate,
        status: ShiftStatus,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        actor: Option<String>,
    },
    RateChanged {
        staff_id: String,
        date: NaiveDate,
        rate: i64,
    },
    CommentChanged {
        staff_id: String,
        date: NaiveDate,
        #[serde(default)]
        text: String,
    },
    LockToggled {
        staff_id: String,
        date: NaiveDate,
    },
    /// Location assignment belongs to the base dataset; replaying it
    /// rebuilds the record index rather than touching overrides.
    LocationAssigned {
        staff_id: String,
        date: NaiveDate,
        location: String,
    },
}

impl EditEvent {
    pub fn key(&self) -> CellKey {
        match self {
            EditEvent::StatusChanged { staff_id, date, .. }
            | EditEvent::RateChanged { staff_id, date, .. }
            | EditEvent::CommentChanged { staff_id, date, .. }
            | EditEvent::LockToggled { staff_id, date }
            | EditEvent::LocationAssigned { staff_id, date, .. } => {
                CellKey::new(staff_id.clone(), *date)
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditEvent::StatusChanged { .. } => "status_changed",
            EditEvent::RateChanged { .. } => "rate_changed",
            EditEvent::CommentChanged { .. } => "comment_changed",
            EditEvent::LockToggled { .. } => "lock_toggled",
            EditEvent::LocationAssigned { .. } => "location_assigned",
        }
    }
}

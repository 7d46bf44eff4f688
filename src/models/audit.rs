use chrono::{DateTime, Local};
use serde::Serialize;

use super::status::ShiftStatus;

/// One status transition of a cell. Never mutated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Local>,
    pub old_status: ShiftStatus,
    pub new_status: ShiftStatus,
    pub actor: String,
}

impl AuditEntry {
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

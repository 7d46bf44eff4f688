use serde::Serialize;

use super::status::ShiftStatus;

/// Session-local edit layered over a base record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Override {
    pub status: Option<ShiftStatus>,
    pub rate: Option<i64>,
    pub location_locked: bool,
    pub comment: Option<String>,
}

impl Override {
    /// An override with nothing set is the same as no override at all.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.rate.is_none() && !self.location_locked && self.comment.is_none()
    }
}

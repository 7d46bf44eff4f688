//! Resolution of effective cell values.
//!
//! Every getter consults the override first, then the base record, then
//! the type-level default. Nothing here mutates state.

use crate::core::index::RecordIndex;
use crate::core::store::OverrideStore;
use crate::models::{CellKey, ShiftStatus, StaffMember};

#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    index: &'a RecordIndex,
    store: &'a OverrideStore,
}

impl<'a> Resolver<'a> {
    pub fn new(index: &'a RecordIndex, store: &'a OverrideStore) -> Self {
        Self { index, store }
    }

    /// Status of the base record, `undecided` when there is none.
    pub fn base_status(&self, key: &CellKey) -> ShiftStatus {
        self.index.get(key).map(|r| r.status).unwrap_or_default()
    }

    pub fn effective_status(&self, key: &CellKey) -> ShiftStatus {
        self.store
            .get(key)
            .and_then(|o| o.status)
            .unwrap_or_else(|| self.base_status(key))
    }

    /// Override rate when set, else the staff's weekday/holiday rate.
    ///
    /// The base record's own `rate` is never read: totals always follow the
    /// override or the current standard rate.
    pub fn effective_rate(&self, key: &CellKey, staff: &StaffMember, is_weekend: bool) -> i64 {
        self.store
            .get(key)
            .and_then(|o| o.rate)
            .filter(|&r| r > 0)
            .unwrap_or_else(|| staff.default_rate(is_weekend))
    }

    pub fn is_locked(&self, key: &CellKey) -> bool {
        self.store.get(key).is_some_and(|o| o.location_locked)
    }

    pub fn effective_comment(&self, key: &CellKey) -> Option<&'a str> {
        self.store
            .get(key)
            .and_then(|o| o.comment.as_deref())
            .or_else(|| {
                self.index
                    .get(key)
                    .and_then(|r| r.comment.as_deref())
                    .filter(|c| !c.trim().is_empty())
            })
    }

    pub fn location(&self, key: &CellKey) -> Option<&'a str> {
        self.index.get(key).and_then(|r| r.assigned_location())
    }

    /// Confirmed but still without a location.
    pub fn is_unassigned(&self, key: &CellKey) -> bool {
        self.effective_status(key).is_confirmed() && self.location(key).is_none()
    }
}

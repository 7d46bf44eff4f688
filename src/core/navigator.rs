//! "Jump to next unassigned" selection state.
//!
//! Repeated activations of the same (date, role) indicator walk its
//! unassigned cells cyclically; a different indicator starts over at the
//! first cell. Scrolling and highlighting are left to the caller.

use chrono::NaiveDate;

use crate::models::CellKey;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnassignedNavigator {
    last_target: Option<(NaiveDate, String)>,
    cursor: usize,
}

impl UnassignedNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the next cell among `candidates` (ordered by staff id).
    ///
    /// With no candidates the state is left untouched. A candidate list
    /// that shrank since the last call is handled by wrapping the cursor.
    pub fn advance(
        &mut self,
        date: NaiveDate,
        role: &str,
        candidates: &[CellKey],
    ) -> Option<CellKey> {
        if candidates.is_empty() {
            return None;
        }

        let same_target = self
            .last_target
            .as_ref()
            .is_some_and(|(d, r)| *d == date && r == role);

        if same_target {
            self.cursor = (self.cursor + 1) % candidates.len();
        } else {
            self.cursor = 0;
            self.last_target = Some((date, role.to_string()));
        }

        candidates.get(self.cursor).cloned()
    }

    pub fn reset(&mut self) {
        self.last_target = None;
        self.cursor = 0;
    }

    pub fn last_target(&self) -> Option<(NaiveDate, &str)> {
        self.last_target.as_ref().map(|(d, r)| (*d, r.as_str()))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

//! Override Store and its audit log.
//!
//! All mutators are total: an invalid edit leaves the store untouched and
//! reports `false`. Only status changes are audited.

use chrono::{DateTime, Local};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::core::index::RecordIndex;
use crate::core::resolver::Resolver;
use crate::models::{AuditEntry, CellKey, Override, ShiftStatus};

/// Source of audit timestamps.
pub type Clock = fn() -> DateTime<Local>;

#[derive(Debug, Clone)]
pub struct OverrideStore {
    overrides: HashMap<CellKey, Override>,
    history: HashMap<CellKey, Vec<AuditEntry>>,
    dirty: HashSet<CellKey>,
    clock: Clock,
}

impl Default for OverrideStore {
    fn default() -> Self {
        Self::with_clock(Local::now)
    }
}

impl OverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            overrides: HashMap::new(),
            history: HashMap::new(),
            dirty: HashSet::new(),
            clock,
        }
    }

    pub fn get(&self, key: &CellKey) -> Option<&Override> {
        self.overrides.get(key)
    }

    /// Apply `f` to the cell's override, dropping it again if it ends up empty.
    fn update<F: FnOnce(&mut Override)>(&mut self, key: &CellKey, f: F) {
        let empty = {
            let entry = self.overrides.entry(key.clone()).or_default();
            f(entry);
            entry.is_empty()
        };

        if empty {
            self.overrides.remove(key);
        }
    }

    pub fn set_status(
        &mut self,
        index: &RecordIndex,
        key: &CellKey,
        new_status: ShiftStatus,
        actor: &str,
    ) -> bool {
        let (old_status, base_status) = {
            let resolver = Resolver::new(index, self);
            (resolver.effective_status(key), resolver.base_status(key))
        };

        if new_status == old_status {
            return false;
        }

        let entry = AuditEntry {
            timestamp: (self.clock)(),
            old_status,
            new_status,
            actor: actor.to_string(),
        };
        self.history.entry(key.clone()).or_default().push(entry);

        if new_status == base_status {
            self.update(key, |o| o.status = None);
        } else {
            self.update(key, |o| o.status = Some(new_status));
        }

        self.refresh_dirty_cell(index, key);

        debug!(
            cell = %key,
            old = %old_status,
            new = %new_status,
            actor,
            dirty = self.is_dirty(key),
            "status changed"
        );
        true
    }

    pub fn set_rate(&mut self, key: &CellKey, amount: i64) -> bool {
        if amount <= 0 {
            debug!(cell = %key, amount, "ignored non-positive rate");
            return false;
        }

        self.update(key, |o| o.rate = Some(amount));
        debug!(cell = %key, amount, "rate set");
        true
    }

    /// Flip the location lock of a confirmed cell that has a location.
    pub fn toggle_lock(&mut self, index: &RecordIndex, key: &CellKey) -> bool {
        let allowed = {
            let resolver = Resolver::new(index, self);
            resolver.effective_status(key).is_confirmed() && resolver.location(key).is_some()
        };

        if !allowed {
            debug!(cell = %key, "lock toggle refused: cell not confirmed or not assigned");
            return false;
        }

        self.update(key, |o| o.location_locked = !o.location_locked);
        debug!(cell = %key, locked = self.get(key).is_some_and(|o| o.location_locked), "lock toggled");
        true
    }

    /// Store trimmed text; blank text clears the override comment.
    pub fn set_comment(&mut self, key: &CellKey, text: &str) -> bool {
        let text = text.trim();
        let current = self.get(key).and_then(|o| o.comment.as_deref());

        let next = if text.is_empty() { None } else { Some(text) };
        if current == next {
            return false;
        }

        let next = next.map(str::to_string);
        self.update(key, |o| o.comment = next);
        true
    }

    pub fn is_dirty(&self, key: &CellKey) -> bool {
        self.dirty.contains(key)
    }

    /// Status transitions of a cell in insertion order.
    pub fn history(&self, key: &CellKey) -> &[AuditEntry] {
        self.history.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    fn refresh_dirty_cell(&mut self, index: &RecordIndex, key: &CellKey) {
        let dirty = {
            let resolver = Resolver::new(index, self);
            resolver.effective_status(key) != resolver.base_status(key)
        };

        if dirty {
            self.dirty.insert(key.clone());
        } else {
            self.dirty.remove(key);
        }
    }

    /// Recompute every dirty flag against a rebuilt index.
    pub fn refresh_dirty(&mut self, index: &RecordIndex) {
        let keys: Vec<CellKey> = self
            .overrides
            .keys()
            .chain(self.dirty.iter())
            .cloned()
            .collect();

        for key in keys {
            self.refresh_dirty_cell(index, &key);
        }
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    pub fn dirty_count(&self) -> usize {
        self.dirty.len()
    }

    /// Audit entries across every cell.
    pub fn audit_len(&self) -> usize {
        self.history.values().map(Vec::len).sum()
    }
}

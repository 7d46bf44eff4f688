//! The shift session: one explicit object owning the base dataset, the
//! overrides and the derived summary for an interactive editing session.
//!
//! Every mutation marks the cached summary stale; the next read recomputes
//! it in full, so readers always see the latest committed edit.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::core::calendar::RateCalendar;
use crate::core::index::RecordIndex;
use crate::core::logic::Core;
use crate::core::navigator::UnassignedNavigator;
use crate::core::resolver::Resolver;
use crate::core::roster::StaffRoster;
use crate::core::store::{Clock, OverrideStore};
use crate::errors::AppResult;
use crate::models::{
    AuditEntry, BaseShiftRecord, CellKey, EditEvent, GridSummary, Override, ShiftStatus,
    StaffMember,
};

pub const DEFAULT_ACTOR: &str = "system";

#[derive(Debug)]
pub struct ShiftSession {
    records: Vec<BaseShiftRecord>,
    index: RecordIndex,
    roster: StaffRoster,
    window: Vec<NaiveDate>,
    calendar: RateCalendar,
    store: OverrideStore,
    navigator: UnassignedNavigator,
    summary: Option<GridSummary>,
    default_actor: String,
}

impl ShiftSession {
    pub fn new(
        records: Vec<BaseShiftRecord>,
        staff: Vec<StaffMember>,
        window: Vec<NaiveDate>,
        calendar: RateCalendar,
    ) -> AppResult<Self> {
        let index = RecordIndex::build(records.iter().cloned())?;
        let roster = StaffRoster::build(staff)?;

        Ok(Self {
            records,
            index,
            roster,
            window,
            calendar,
            store: OverrideStore::new(),
            navigator: UnassignedNavigator::new(),
            summary: None,
            default_actor: DEFAULT_ACTOR.to_string(),
        })
    }

    /// Replace the audit clock. Meant to be called before any edit.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.store = OverrideStore::with_clock(clock);
        self
    }

    pub fn with_default_actor(mut self, actor: impl Into<String>) -> Self {
        self.default_actor = actor.into();
        self
    }

    // ---------------------------
    // Dataset lifecycle
    // ---------------------------

    /// Swap in a new base dataset. Overrides and audit history survive;
    /// dirty flags are recomputed against the new base statuses.
    pub fn reload(
        &mut self,
        records: Vec<BaseShiftRecord>,
        staff: Vec<StaffMember>,
    ) -> AppResult<()> {
        let index = RecordIndex::build(records.iter().cloned())?;
        let roster = StaffRoster::build(staff)?;

        self.records = records;
        self.index = index;
        self.roster = roster;
        self.store.refresh_dirty(&self.index);
        self.navigator.reset();
        self.invalidate();

        debug!(records = self.index.len(), staff = self.roster.len(), "dataset reloaded");
        Ok(())
    }

    pub fn set_window(&mut self, window: Vec<NaiveDate>) {
        self.window = window;
        self.navigator.reset();
        self.invalidate();
    }

    /// Record a location assignment made by the collaborator owning the
    /// base dataset. A blank location removes the assignment.
    pub fn assign_location(&mut self, key: &CellKey, location: &str) -> AppResult<()> {
        let location = Some(location.trim())
            .filter(|l| !l.is_empty())
            .map(str::to_string);

        let existing = self
            .records
            .iter()
            .position(|r| r.staff_id == key.staff_id && r.date == key.date);

        match existing {
            Some(i) => self.records[i].location = location,
            None => {
                let mut record =
                    BaseShiftRecord::new(key.staff_id.clone(), key.date, ShiftStatus::Undecided);
                record.location = location;
                self.records.push(record);
            }
        }

        self.index = RecordIndex::build(self.records.iter().cloned())?;
        self.store.refresh_dirty(&self.index);
        self.invalidate();

        debug!(cell = %key, location = ?self.location(key), "location assigned");
        Ok(())
    }

    // ---------------------------
    // Edits
    // ---------------------------

    pub fn apply(&mut self, event: &EditEvent) -> AppResult<bool> {
        let key = event.key();

        let changed = match event {
            EditEvent::StatusChanged { status, actor, .. } => {
                self.status_changed(&key, *status, actor.as_deref())
            }
            EditEvent::RateChanged { rate, .. } => self.rate_changed(&key, *rate),
            EditEvent::CommentChanged { text, .. } => self.comment_changed(&key, text),
            EditEvent::LockToggled { .. } => self.lock_toggled(&key),
            EditEvent::LocationAssigned { location, .. } => {
                self.assign_location(&key, location)?;
                true
            }
        };

        Ok(changed)
    }

    /// Change the status of a cell. Entering `confirmed` also prices the
    /// cell at the staff's standard rate for that day.
    pub fn status_changed(
        &mut self,
        key: &CellKey,
        status: ShiftStatus,
        actor: Option<&str>,
    ) -> bool {
        self.warn_unknown_staff(key);

        let actor = actor.unwrap_or(self.default_actor.as_str()).to_string();
        let was_confirmed = self.effective_status(key).is_confirmed();

        let changed = self.store.set_status(&self.index, key, status, &actor);
        if !changed {
            return false;
        }

        if status.is_confirmed()
            && !was_confirmed
            && let Some(rate) = self.default_rate(key)
        {
            self.store.set_rate(key, rate);
        }

        self.invalidate();
        true
    }

    pub fn rate_changed(&mut self, key: &CellKey, rate: i64) -> bool {
        self.warn_unknown_staff(key);

        let changed = self.store.set_rate(key, rate);
        if changed {
            self.invalidate();
        }
        changed
    }

    pub fn comment_changed(&mut self, key: &CellKey, text: &str) -> bool {
        self.store.set_comment(key, text)
    }

    pub fn lock_toggled(&mut self, key: &CellKey) -> bool {
        self.store.toggle_lock(&self.index, key)
    }

    fn warn_unknown_staff(&self, key: &CellKey) {
        if self.roster.get(&key.staff_id).is_none() {
            warn!(cell = %key, "edit targets a staff member missing from the roster");
        }
    }

    // ---------------------------
    // Cell reads
    // ---------------------------

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.index, &self.store)
    }

    pub fn effective_status(&self, key: &CellKey) -> ShiftStatus {
        self.resolver().effective_status(key)
    }

    /// Resolved rate of a cell. A staff id missing from the roster has no
    /// standard rate, so only an override can price it.
    pub fn effective_rate(&self, key: &CellKey) -> i64 {
        match self.roster.get(&key.staff_id) {
            Some(staff) => self.resolver().effective_rate(
                key,
                staff,
                self.calendar.is_weekend(key.date),
            ),
            None => self
                .store
                .get(key)
                .and_then(|o| o.rate)
                .filter(|&r| r > 0)
                .unwrap_or(0),
        }
    }

    pub fn default_rate(&self, key: &CellKey) -> Option<i64> {
        self.roster
            .get(&key.staff_id)
            .map(|s| s.default_rate(self.calendar.is_weekend(key.date)))
    }

    pub fn is_locked(&self, key: &CellKey) -> bool {
        self.resolver().is_locked(key)
    }

    pub fn effective_comment(&self, key: &CellKey) -> Option<&str> {
        self.resolver().effective_comment(key)
    }

    pub fn location(&self, key: &CellKey) -> Option<&str> {
        self.resolver().location(key)
    }

    pub fn is_dirty(&self, key: &CellKey) -> bool {
        self.store.is_dirty(key)
    }

    pub fn history(&self, key: &CellKey) -> &[AuditEntry] {
        self.store.history(key)
    }

    pub fn override_for(&self, key: &CellKey) -> Option<&Override> {
        self.store.get(key)
    }

    // ---------------------------
    // Aggregates and navigation
    // ---------------------------

    fn invalidate(&mut self) {
        self.summary = None;
    }

    pub fn is_stale(&self) -> bool {
        self.summary.is_none()
    }

    /// Force a full recompute of the derived totals.
    pub fn recompute(&mut self) -> &GridSummary {
        let summary = Core::build_grid_summary(
            &self.window,
            &self.roster,
            &Resolver::new(&self.index, &self.store),
            &self.calendar,
        );

        debug!(
            staff = self.roster.len(),
            days = self.window.len(),
            "grid summary recomputed"
        );

        self.summary.insert(summary)
    }

    /// Current totals, recomputed first if any edit happened since the
    /// last read.
    pub fn summary(&mut self) -> &GridSummary {
        if self.summary.is_none() {
            self.recompute();
        }
        self.summary.get_or_insert_with(GridSummary::default)
    }

    /// Next unassigned cell for a (date, role) indicator.
    pub fn advance(&mut self, date: NaiveDate, role: &str) -> Option<CellKey> {
        let candidates = self.summary().unassigned_cells(date, role).to_vec();
        self.navigator.advance(date, role, &candidates)
    }

    pub fn reset_navigator(&mut self) {
        self.navigator.reset();
    }

    pub fn navigator(&self) -> &UnassignedNavigator {
        &self.navigator
    }

    // ---------------------------
    // Accessors
    // ---------------------------

    pub fn roster(&self) -> &StaffRoster {
        &self.roster
    }

    pub fn index(&self) -> &RecordIndex {
        &self.index
    }

    pub fn store(&self) -> &OverrideStore {
        &self.store
    }

    pub fn window(&self) -> &[NaiveDate] {
        &self.window
    }

    pub fn calendar(&self) -> &RateCalendar {
        &self.calendar
    }

    pub fn records(&self) -> &[BaseShiftRecord] {
        &self.records
    }
}

//! Record Index: O(1) lookup of base records by cell.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::errors::{AppError, AppResult};
use crate::models::{BaseShiftRecord, CellKey};

/// Read-only index over the base dataset. There is no mutation API: when
/// the dataset changes the index is rebuilt wholesale.
#[derive(Debug, Clone, Default)]
pub struct RecordIndex {
    records: HashMap<CellKey, BaseShiftRecord>,
}

impl RecordIndex {
    /// Index every record, refusing a second record for the same cell.
    pub fn build<I>(records: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = BaseShiftRecord>,
    {
        let mut map = HashMap::new();

        for record in records {
            let key = record.key();
            if map.contains_key(&key) {
                return Err(AppError::DuplicateRecord(key.to_string()));
            }
            map.insert(key, record);
        }

        Ok(Self { records: map })
    }

    pub fn get(&self, key: &CellKey) -> Option<&BaseShiftRecord> {
        self.records.get(key)
    }

    pub fn lookup(&self, staff_id: &str, date: NaiveDate) -> Option<&BaseShiftRecord> {
        self.get(&CellKey::new(staff_id, date))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

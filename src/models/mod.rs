pub mod audit;
pub mod cell_key;
pub mod edit;
pub mod grid_summary;
pub mod override_entry;
pub mod record;
pub mod staff;
pub mod status;

pub use audit::AuditEntry;
pub use cell_key::CellKey;
pub use edit::EditEvent;
pub use grid_summary::{DayRoleTotals, GridSummary, StaffTotals};
pub use override_entry::Override;
pub use record::BaseShiftRecord;
pub use staff::StaffMember;
pub use status::ShiftStatus;

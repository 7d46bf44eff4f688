pub mod calculator;
pub mod calendar;
pub mod index;
pub mod logic;
pub mod navigator;
pub mod resolver;
pub mod roster;
pub mod session;
pub mod store;

pub use calendar::RateCalendar;
pub use index::RecordIndex;
pub use navigator::UnassignedNavigator;
pub use resolver::Resolver;
pub use roster::StaffRoster;
pub use session::ShiftSession;
pub use store::OverrideStore;

//! Loading of the base dataset and edit scripts from disk.

pub mod load;

pub use load::{DatasetFormat, load_edits, load_records, load_staff};

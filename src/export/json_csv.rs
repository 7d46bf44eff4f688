// src/export/json_csv.rs

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::model::SummaryExport;
use crate::ui::messages::info;

/// Export JSON pretty-printed.
pub(crate) fn export_json(snapshot: &SummaryExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(snapshot)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header included through serde).
pub(crate) fn export_csv<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for item in rows {
        wtr.serialize(item)?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}

use std::path::{Path, PathBuf};

use crate::core::roster::StaffRoster;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{day_role_rows, staff_rows, summary_export};
use crate::models::GridSummary;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the summary snapshot. CSV produces two files: the day/role
    /// table at `path` and the staff table next to it (`<stem>_staff.csv`).
    pub fn export(
        summary: &GridSummary,
        roster: &StaffRoster,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<Vec<PathBuf>> {
        match format {
            ExportFormat::Json => {
                ensure_writable(path, force)?;
                export_json(&summary_export(summary, roster), path)?;
                Ok(vec![path.to_path_buf()])
            }
            ExportFormat::Csv => {
                let staff_path = staff_csv_path(path);
                ensure_writable(path, force)?;
                ensure_writable(&staff_path, force)?;

                export_csv(&day_role_rows(summary), path)?;
                export_csv(&staff_rows(summary, roster), &staff_path)?;
                Ok(vec![path.to_path_buf(), staff_path])
            }
        }
    }
}

fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Ok(())
}

pub fn staff_csv_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "export".to_string());
    path.with_file_name(format!("{stem}_staff.csv"))
}

use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::path::Path;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::{BaseShiftRecord, EditEvent, StaffMember};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Json,
    Yaml,
}

impl DatasetFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(AppError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let format = DatasetFormat::from_path(path)?;

    let rows = match format {
        DatasetFormat::Csv => {
            let mut rdr = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(File::open(path)?);
            rdr.deserialize().collect::<Result<Vec<T>, _>>()?
        }
        DatasetFormat::Json => serde_json::from_str(&fs::read_to_string(path)?)?,
        DatasetFormat::Yaml => serde_yaml::from_str(&fs::read_to_string(path)?)?,
    };

    debug!(path = %path.display(), rows = rows.len(), "dataset loaded");
    Ok(rows)
}

pub fn load_staff(path: &Path) -> AppResult<Vec<StaffMember>> {
    read_rows(path)
}

pub fn load_records(path: &Path) -> AppResult<Vec<BaseShiftRecord>> {
    read_rows(path)
}

/// Edit scripts are YAML or JSON lists of tagged events; CSV cannot carry
/// the per-event fields.
pub fn load_edits(path: &Path) -> AppResult<Vec<EditEvent>> {
    match DatasetFormat::from_path(path)? {
        DatasetFormat::Csv => Err(AppError::UnsupportedFormat(format!(
            "{} (edit scripts must be YAML or JSON)",
            path.display()
        ))),
        _ => read_rows(path),
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_staff_file")]
    pub staff_file: String,
    #[serde(default = "default_records_file")]
    pub records_file: String,
    #[serde(default = "default_actor")]
    pub default_actor: String,
    #[serde(default = "default_weekend_days")]
    pub weekend_days: Vec<String>,
    #[serde(default)]
    pub holidays: Vec<String>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
}

/// Keys every config file is expected to carry, in file order.
pub const CONFIG_KEYS: &[&str] = &[
    "staff_file",
    "records_file",
    "default_actor",
    "weekend_days",
    "holidays",
    "separator_char",
    "show_weekday",
];

fn default_staff_file() -> String {
    Config::config_dir()
        .join("staff.csv")
        .to_string_lossy()
        .to_string()
}
fn default_records_file() -> String {
    Config::config_dir()
        .join("records.csv")
        .to_string_lossy()
        .to_string()
}
fn default_actor() -> String {
    "system".to_string()
}
fn default_weekend_days() -> Vec<String> {
    vec!["Sat".to_string(), "Sun".to_string()]
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_weekday() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            staff_file: default_staff_file(),
            records_file: default_records_file(),
            default_actor: default_actor(),
            weekend_days: default_weekend_days(),
            holidays: Vec::new(),
            separator_char: default_separator_char(),
            show_weekday: default_show_weekday(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rshiftgrid")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rshiftgrid.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Keys from [`CONFIG_KEYS`] absent in the file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

        let missing = match yaml.as_mapping() {
            Some(map) => CONFIG_KEYS
                .iter()
                .copied()
                .filter(|k| !map.contains_key(*k))
                .collect(),
            None => CONFIG_KEYS.to_vec(),
        };

        Ok(missing)
    }

    pub fn staff_path(&self) -> PathBuf {
        expand_tilde(&self.staff_file)
    }

    pub fn records_path(&self) -> PathBuf {
        expand_tilde(&self.records_file)
    }

    /// First character of `separator_char`, `-` when empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }
}

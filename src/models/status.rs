use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Attendance status of a shift cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    Confirmed,
    Declined,
    #[default]
    Undecided,
}

impl ShiftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::Confirmed => "confirmed",
            ShiftStatus::Declined => "declined",
            ShiftStatus::Undecided => "undecided",
        }
    }

    /// Parse user input; accepts the full name or its first letter.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "confirmed" | "c" => Some(Self::Confirmed),
            "declined" | "d" => Some(Self::Declined),
            "undecided" | "u" => Some(Self::Undecided),
            _ => None,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, ShiftStatus::Confirmed)
    }
}

impl fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
    }
}

use serde::{Deserialize, Serialize};

/// A member of staff as supplied by the roster.
///
/// `role` is an open tag ("closer", "girl", ...): new roles only need new
/// data, never new code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: String,
    pub weekday_rate: i64,
    pub holiday_rate: i64,
    #[serde(default)]
    pub company: String,
}

impl StaffMember {
    pub fn new(
        id: impl Into<String>,
        role: impl Into<String>,
        weekday_rate: i64,
        holiday_rate: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: None,
            role: role.into(),
            weekday_rate,
            holiday_rate,
            company: String::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.id)
    }

    /// Standard rate for a day, before any override.
    pub fn default_rate(&self, is_weekend: bool) -> i64 {
        if is_weekend {
            self.holiday_rate
        } else {
            self.weekday_rate
        }
    }
}

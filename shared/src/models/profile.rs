//! Customer Profile Model

use serde::{Deserialize, Serialize};

/// Customer profile (contact record joined into order snapshots)
///
/// Profiles are written by the customer-facing app; the admin platform
/// only reads them for notification payloads and order detail views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Profile {
    pub id: String,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Profile {
    /// Display name for emails: prefer `name`, fall back to `full_name`.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.full_name.as_deref().filter(|s| !s.is_empty()))
    }
}

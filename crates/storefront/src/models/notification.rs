//! User-facing notifications emitted by cart mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a notification, mirrored in its visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    /// Stable lowercase tag, used as a CSS class in templates.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

/// A single entry in the notification feed.
///
/// Created as a side effect of cart mutations. The feed is newest-first
/// and capped; see [`crate::store::CartStore`] for the retention rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Time-derived id, unique within a session.
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

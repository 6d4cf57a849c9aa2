//! Error and success banners.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// Errors auto-dismiss; successes stay until navigation
    pub expires_at: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn error(message: impl Into<String>, now: DateTime<Utc>, dismiss_after: Duration) -> Self {
        let expires_at = TimeDelta::from_std(dismiss_after)
            .ok()
            .and_then(|delta| now.checked_add_signed(delta));

        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            expires_at,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            expires_at: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }

    /// Banner text with its status glyph
    pub fn display_text(&self) -> String {
        match self.kind {
            NotificationKind::Error => format!("❌ {}", self.message),
            NotificationKind::Success => format!("✅ {}", self.message),
        }
    }
}

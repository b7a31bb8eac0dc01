use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What triggered a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    MessageSent,
    BankRegistered,
    Copied,
    Info,
}

impl NotificationKind {
    /// Canned (title, description) pair shown for this kind
    pub fn canned_text(&self) -> (&'static str, &'static str) {
        match self {
            NotificationKind::MessageSent => {
                ("Message sent!", "We'll get back to you within 24 hours.")
            }
            NotificationKind::BankRegistered => (
                "Registration Successful!",
                "Your bank has been registered. API credentials are now available.",
            ),
            NotificationKind::Copied => ("Copied!", "Code copied to clipboard."),
            NotificationKind::Info => ("Notice", ""),
        }
    }
}

/// One toast entry; carries its own expiry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

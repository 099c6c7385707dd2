//! Notification domain model.

use serde::{Deserialize, Serialize};

/// The closed set of notification kinds the dashboard produces.
///
/// Kinds are matched exhaustively wherever display metadata is needed, so an
/// unrecognized kind cannot fall through silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A new chat message arrived.
    Message,
    /// The current user was mentioned by name.
    Mention,
    /// A calendar event reminder.
    Event,
    /// Something needs attention (failed import, quota, ...).
    Alert,
    /// Housekeeping emitted by the application itself.
    System,
}

impl NotificationKind {
    /// Short human-readable label for list headers and filters.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Message => "Message",
            Self::Mention => "Mention",
            Self::Event => "Event",
            Self::Alert => "Alert",
            Self::System => "System",
        }
    }

    /// Accent color token used by the presentation layer.
    pub fn accent(&self) -> &'static str {
        match self {
            Self::Message => "blue",
            Self::Mention => "purple",
            Self::Event => "green",
            Self::Alert => "red",
            Self::System => "gray",
        }
    }
}

/// A single entry in the notification feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique notification identifier (UUID format).
    pub id: String,
    /// Kind of the notification.
    pub kind: NotificationKind,
    /// Short headline shown in the feed.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Timestamp when the notification was produced (RFC 3339 format).
    pub timestamp: String,
    /// Whether the user has seen this notification.
    pub read: bool,
    /// For `Event` notifications, the calendar event this refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

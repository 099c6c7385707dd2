//! Chat domain model.
//!
//! Entities reference each other by id, never by pointer: conversations name
//! their participants by user id, messages name their conversation and
//! channel by id. Joins happen at read time in `chat::view`.

use serde::{Deserialize, Serialize};

/// Presence indicator for a chat user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Online,
    Away,
    Offline,
}

/// A user as the chat store knows them. The chat store does not own user
/// identity; this is display data keyed by the shared user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatUser {
    pub id: String,
    pub name: String,
    /// Avatar asset key, if the user has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub presence: Presence,
}

/// Whether a conversation is one-to-one or a group with channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationKind {
    Direct,
    Group,
}

/// A named channel inside a group conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    pub name: String,
}

/// Compact copy of the latest message, denormalized onto the conversation
/// for list rendering. Updated in the same mutation that appends the
/// message, so the two are never observed out of sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePreview {
    pub message_id: String,
    pub sender_id: String,
    pub content: String,
    pub timestamp: String,
}

/// A conversation: direct chat or channel-carrying group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Unique conversation identifier (UUID format).
    pub id: String,
    pub kind: ConversationKind,
    pub name: String,
    /// Participant user ids. Weak references: relation plus lookup, never
    /// ownership of the user entities.
    pub participant_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<MessagePreview>,
    /// Unread messages in this conversation for the current user.
    pub unread_count: usize,
    pub is_pinned: bool,
    pub is_muted: bool,
    /// Users currently typing in this conversation.
    #[serde(default)]
    pub typing_user_ids: Vec<String>,
    /// Channels; empty for direct conversations.
    #[serde(default)]
    pub channels: Vec<Channel>,
    /// The channel new messages route to; `None` for direct conversations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_channel_id: Option<String>,
    /// Timestamp when the conversation was created (RFC 3339 format).
    pub created_at: String,
    /// Timestamp when the conversation last changed (RFC 3339 format).
    pub updated_at: String,
}

/// Kind of message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Text,
    Image,
    File,
    /// Produced by the application (user joined, channel renamed, ...).
    System,
}

/// A file attached to a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    pub name: String,
    pub size_bytes: u64,
}

/// Per-user acknowledgements of a message, aggregated by emoji.
///
/// `user_ids` is insertion-ordered and deduplicated; `count` always equals
/// its length, and an entry whose user set empties is removed outright
/// rather than kept at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub emoji: String,
    pub user_ids: Vec<String>,
    pub count: usize,
}

/// A single message inside a conversation.
///
/// Messages are stored keyed by conversation id as an append-ordered
/// sequence; insertion order is the display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message identifier (UUID format).
    pub id: String,
    pub conversation_id: String,
    /// Channel the message was sent to; set only for group conversations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    pub sender_id: String,
    pub kind: MessageKind,
    pub content: String,
    /// Timestamp when the message was sent (RFC 3339 format).
    pub timestamp: String,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Id of the message this replies to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// An item on a conversation's shared todo list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    pub completed: bool,
    /// Timestamp when the item was added (RFC 3339 format).
    pub created_at: String,
}

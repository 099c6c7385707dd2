//! Chat domain module.
//!
//! The structurally richest store in the layer: conversations with
//! per-conversation message sequences, per-message reactions aggregated by
//! emoji, per-conversation todo lists, and per-group channel routing.
//!
//! # Module Structure
//!
//! - `model`: Entities (`Conversation`, `Message`, `Reaction`, ...)
//! - `store`: State shape and mutation entry points (`ChatStore`)
//! - `view`: Pure derived views (active messages, joins, ordering)

mod model;
mod store;
pub mod view;

// Re-export public API
pub use model::{
    Attachment, Channel, ChatUser, Conversation, ConversationKind, Message, MessageKind,
    MessagePreview, Presence, Reaction, TodoItem,
};
pub use store::{ChatState, ChatStore};

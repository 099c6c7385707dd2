//! Chat store: conversations, messages, reactions, todos, channel routing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{
    ChatUser, Conversation, ConversationKind, Message, MessageKind, MessagePreview, Reaction,
    TodoItem,
};
use crate::store::{ListenerId, Store};

/// State owned by the [`ChatStore`].
///
/// Relations are flat, id-keyed maps: messages and todos are keyed by their
/// conversation id, and `active_channels` routes each group conversation to
/// the channel new messages go to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatState {
    /// Known users, keyed by user id.
    pub users: HashMap<String, ChatUser>,
    /// The signed-in user, sender of outgoing messages.
    pub current_user_id: String,
    pub conversations: Vec<Conversation>,
    pub active_conversation_id: Option<String>,
    /// Append-ordered message sequences keyed by conversation id; insertion
    /// order is display order.
    pub messages: HashMap<String, Vec<Message>>,
    /// Per-conversation todo lists keyed by conversation id.
    pub todos: HashMap<String, Vec<TodoItem>>,
    /// Active channel id keyed by conversation id (group conversations only).
    pub active_channels: HashMap<String, String>,
}

/// Observable store for the chat domain.
///
/// Every operation is a total function over the state; unknown conversation,
/// message, or todo ids leave state unchanged.
pub struct ChatStore {
    inner: Store<ChatState>,
}

impl ChatStore {
    /// Creates a store seeded with `initial`.
    pub fn new(initial: ChatState) -> Self {
        Self {
            inner: Store::new(initial),
        }
    }

    /// Sends a message from the current user to `conversation_id`.
    ///
    /// The channel id is resolved from the conversation's active-channel
    /// routing entry only when the conversation is a group; direct
    /// conversations never carry one. The per-conversation sequence and the
    /// conversation's `last_message` + `updated_at` change in the same
    /// mutation, so subscribers never observe them out of sync.
    ///
    /// Returns the id of the new message, or `None` when the conversation is
    /// unknown.
    pub fn send_message(
        &self,
        conversation_id: &str,
        kind: MessageKind,
        content: impl Into<String>,
    ) -> Option<String> {
        let content = content.into();
        let message_id = Uuid::new_v4().to_string();
        let mut sent = false;
        self.inner.update(|prev| {
            let mut next = prev.clone();
            let Some(conversation) = next
                .conversations
                .iter_mut()
                .find(|c| c.id == conversation_id)
            else {
                return prev.clone();
            };

            let channel_id = match conversation.kind {
                ConversationKind::Group => next.active_channels.get(conversation_id).cloned(),
                ConversationKind::Direct => None,
            };
            let timestamp = chrono::Utc::now().to_rfc3339();
            let message = Message {
                id: message_id.clone(),
                conversation_id: conversation_id.to_string(),
                channel_id,
                sender_id: next.current_user_id.clone(),
                kind,
                content: content.clone(),
                timestamp: timestamp.clone(),
                reactions: Vec::new(),
                attachments: Vec::new(),
                reply_to: None,
            };

            conversation.last_message = Some(MessagePreview {
                message_id: message.id.clone(),
                sender_id: message.sender_id.clone(),
                content: message.content.clone(),
                timestamp: timestamp.clone(),
            });
            conversation.updated_at = timestamp;

            next.messages
                .entry(conversation_id.to_string())
                .or_default()
                .push(message);
            sent = true;
            next
        });
        sent.then_some(message_id)
    }

    /// Adds `user_id` to the `emoji` reaction on `message_id`.
    ///
    /// Messages are not globally indexed by id; the lookup scans the
    /// conversation-keyed lists until found, an accepted O(total messages)
    /// cost at this scale. Idempotent per user: re-adding an existing
    /// reaction leaves the user set unchanged.
    pub fn add_reaction(&self, message_id: &str, emoji: &str, user_id: &str) {
        self.inner.update(|prev| {
            let mut next = prev.clone();
            let Some(message) = find_message_mut(&mut next, message_id) else {
                return prev.clone();
            };
            match message.reactions.iter_mut().find(|r| r.emoji == emoji) {
                Some(reaction) => {
                    if !reaction.user_ids.iter().any(|u| u == user_id) {
                        reaction.user_ids.push(user_id.to_string());
                    }
                    reaction.count = reaction.user_ids.len();
                }
                None => message.reactions.push(Reaction {
                    emoji: emoji.to_string(),
                    user_ids: vec![user_id.to_string()],
                    count: 1,
                }),
            }
            next
        });
    }

    /// Removes `user_id` from the `emoji` reaction on `message_id`.
    ///
    /// The count is recomputed from the user set; an entry that empties is
    /// deleted outright, never retained at zero. Absent message, emoji, or
    /// user are silent no-ops.
    pub fn remove_reaction(&self, message_id: &str, emoji: &str, user_id: &str) {
        self.inner.update(|prev| {
            let mut next = prev.clone();
            let Some(message) = find_message_mut(&mut next, message_id) else {
                return prev.clone();
            };
            if let Some(reaction) = message.reactions.iter_mut().find(|r| r.emoji == emoji) {
                reaction.user_ids.retain(|u| u != user_id);
                reaction.count = reaction.user_ids.len();
            }
            message.reactions.retain(|r| !r.user_ids.is_empty());
            next
        });
    }

    /// Adds the reaction when the user is absent from it, removes it
    /// otherwise.
    pub fn toggle_reaction(&self, message_id: &str, emoji: &str, user_id: &str) {
        let present = self.inner.read(|state| {
            state
                .messages
                .values()
                .flatten()
                .find(|m| m.id == message_id)
                .map(|m| {
                    m.reactions
                        .iter()
                        .any(|r| r.emoji == emoji && r.user_ids.iter().any(|u| u == user_id))
                })
                .unwrap_or(false)
        });
        if present {
            self.remove_reaction(message_id, emoji, user_id);
        } else {
            self.add_reaction(message_id, emoji, user_id);
        }
    }

    /// Switches the conversation the UI is focused on.
    pub fn set_active_conversation(&self, conversation_id: Option<&str>) {
        self.inner.update(|prev| ChatState {
            active_conversation_id: conversation_id.map(str::to_string),
            ..prev.clone()
        });
    }

    /// Zeroes the conversation's unread counter.
    pub fn mark_conversation_read(&self, conversation_id: &str) {
        self.with_conversation(conversation_id, |c| c.unread_count = 0);
    }

    /// Records or clears a typing indicator for `user_id`.
    pub fn set_typing(&self, conversation_id: &str, user_id: &str, typing: bool) {
        self.with_conversation(conversation_id, |c| {
            if typing {
                if !c.typing_user_ids.iter().any(|u| u == user_id) {
                    c.typing_user_ids.push(user_id.to_string());
                }
            } else {
                c.typing_user_ids.retain(|u| u != user_id);
            }
        });
    }

    /// Routes a group conversation's new messages to `channel_id` and marks
    /// it active on the conversation in the same mutation. No-op for direct
    /// conversations and unknown ids.
    pub fn set_active_channel(&self, conversation_id: &str, channel_id: &str) {
        self.inner.update(|prev| {
            let mut next = prev.clone();
            let Some(conversation) = next
                .conversations
                .iter_mut()
                .find(|c| c.id == conversation_id && c.kind == ConversationKind::Group)
            else {
                return prev.clone();
            };
            conversation.active_channel_id = Some(channel_id.to_string());
            next.active_channels
                .insert(conversation_id.to_string(), channel_id.to_string());
            next
        });
    }

    /// Pin/unpin the conversation in the list.
    pub fn toggle_pinned(&self, conversation_id: &str) {
        self.with_conversation(conversation_id, |c| c.is_pinned = !c.is_pinned);
    }

    /// Mute/unmute the conversation.
    pub fn toggle_muted(&self, conversation_id: &str) {
        self.with_conversation(conversation_id, |c| c.is_muted = !c.is_muted);
    }

    /// Appends a todo item to the conversation's list.
    ///
    /// Returns the id of the new item, or `None` for an unknown
    /// conversation.
    pub fn add_todo(
        &self,
        conversation_id: &str,
        content: impl Into<String>,
        emoji: Option<String>,
    ) -> Option<String> {
        let content = content.into();
        let todo_id = Uuid::new_v4().to_string();
        let mut added = false;
        self.inner.update(|prev| {
            if !prev.conversations.iter().any(|c| c.id == conversation_id) {
                return prev.clone();
            }
            let mut next = prev.clone();
            next.todos
                .entry(conversation_id.to_string())
                .or_default()
                .push(TodoItem {
                    id: todo_id.clone(),
                    content: content.clone(),
                    emoji: emoji.clone(),
                    completed: false,
                    created_at: chrono::Utc::now().to_rfc3339(),
                });
            added = true;
            next
        });
        added.then_some(todo_id)
    }

    /// Flips a todo item's completed flag.
    pub fn toggle_todo(&self, conversation_id: &str, todo_id: &str) {
        self.inner.update(|prev| {
            let mut next = prev.clone();
            if let Some(todo) = next
                .todos
                .get_mut(conversation_id)
                .and_then(|items| items.iter_mut().find(|t| t.id == todo_id))
            {
                todo.completed = !todo.completed;
            }
            next
        });
    }

    /// Removes a todo item from the conversation's list.
    pub fn delete_todo(&self, conversation_id: &str, todo_id: &str) {
        self.inner.update(|prev| {
            let mut next = prev.clone();
            if let Some(items) = next.todos.get_mut(conversation_id) {
                items.retain(|t| t.id != todo_id);
            }
            next
        });
    }

    /// Borrows the current state for a pure read.
    pub fn read<R>(&self, f: impl FnOnce(&ChatState) -> R) -> R {
        self.inner.read(f)
    }

    /// By-value copy of the current state.
    pub fn snapshot(&self) -> ChatState {
        self.inner.snapshot()
    }

    /// Registers a change listener; see [`Store::subscribe`].
    pub fn subscribe(&self, listener: impl Fn(&ChatState) + 'static) -> ListenerId {
        self.inner.subscribe(listener)
    }

    /// Deregisters a change listener.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.inner.unsubscribe(id)
    }

    fn with_conversation(&self, conversation_id: &str, f: impl Fn(&mut Conversation)) {
        self.inner.update(|prev| {
            let mut next = prev.clone();
            match next
                .conversations
                .iter_mut()
                .find(|c| c.id == conversation_id)
            {
                Some(conversation) => {
                    f(conversation);
                    next
                }
                None => prev.clone(),
            }
        });
    }
}

fn find_message_mut<'a>(state: &'a mut ChatState, message_id: &str) -> Option<&'a mut Message> {
    state
        .messages
        .values_mut()
        .flatten()
        .find(|m| m.id == message_id)
}

//! Pure derived views over [`ChatState`].
//!
//! Each function takes the current state and returns plain data. Nothing is
//! cached: views are recomputed on every read, which is what keeps them
//! impossible to desynchronize from the underlying state.

use super::model::{ChatUser, Conversation, ConversationKind, Message};
use super::store::ChatState;

/// Messages visible in the given conversation.
///
/// Direct conversations show their full sequence. Group conversations show
/// only messages on the currently active channel: a message sent to a
/// channel that is later deactivated stays stored but becomes invisible
/// until its channel is active again. Original order is preserved.
pub fn active_messages<'a>(state: &'a ChatState, conversation_id: &str) -> Vec<&'a Message> {
    let Some(conversation) = state.conversations.iter().find(|c| c.id == conversation_id) else {
        return Vec::new();
    };
    let Some(messages) = state.messages.get(conversation_id) else {
        return Vec::new();
    };
    match conversation.kind {
        ConversationKind::Direct => messages.iter().collect(),
        ConversationKind::Group => {
            let active = state.active_channels.get(conversation_id);
            messages
                .iter()
                .filter(|m| m.channel_id.as_ref() == active)
                .collect()
        }
    }
}

/// Resolves a conversation's participant ids against the user map.
///
/// Ids are weak references; participants with no matching user entry are
/// skipped rather than invented.
pub fn participants<'a>(state: &'a ChatState, conversation_id: &str) -> Vec<&'a ChatUser> {
    state
        .conversations
        .iter()
        .find(|c| c.id == conversation_id)
        .map(|conversation| {
            conversation
                .participant_ids
                .iter()
                .filter_map(|id| state.users.get(id))
                .collect()
        })
        .unwrap_or_default()
}

/// Conversation list in display order: pinned first, then most recently
/// updated. The sort is stable, so equal keys keep their stored order.
pub fn sorted_conversations(state: &ChatState) -> Vec<&Conversation> {
    let mut conversations: Vec<&Conversation> = state.conversations.iter().collect();
    conversations.sort_by(|a, b| {
        b.is_pinned
            .cmp(&a.is_pinned)
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });
    conversations
}

/// Total unread messages across all conversations, for the sidebar badge.
pub fn total_unread(state: &ChatState) -> usize {
    state.conversations.iter().map(|c| c.unread_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::model::{Channel, MessageKind, Presence};
    use crate::chat::store::ChatStore;

    fn group_conversation(id: &str) -> Conversation {
        Conversation {
            id: id.to_string(),
            kind: ConversationKind::Group,
            name: format!("Group {}", id),
            participant_ids: vec!["u-1".to_string(), "u-2".to_string(), "u-ghost".to_string()],
            last_message: None,
            unread_count: 0,
            is_pinned: false,
            is_muted: false,
            typing_user_ids: Vec::new(),
            channels: vec![
                Channel {
                    id: "general".to_string(),
                    name: "General".to_string(),
                },
                Channel {
                    id: "random".to_string(),
                    name: "Random".to_string(),
                },
            ],
            active_channel_id: Some("general".to_string()),
            created_at: "2026-03-01T09:00:00+00:00".to_string(),
            updated_at: "2026-03-01T09:00:00+00:00".to_string(),
        }
    }

    fn user(id: &str, name: &str) -> ChatUser {
        ChatUser {
            id: id.to_string(),
            name: name.to_string(),
            avatar: None,
            presence: Presence::Online,
        }
    }

    fn seeded_store() -> ChatStore {
        let conversation = group_conversation("c-1");
        let state = ChatState {
            users: [
                ("u-1".to_string(), user("u-1", "Ana")),
                ("u-2".to_string(), user("u-2", "Ben")),
            ]
            .into_iter()
            .collect(),
            current_user_id: "u-1".to_string(),
            active_channels: [("c-1".to_string(), "general".to_string())]
                .into_iter()
                .collect(),
            conversations: vec![conversation],
            ..ChatState::default()
        };
        ChatStore::new(state)
    }

    #[test]
    fn test_channel_switch_hides_and_restores_messages() {
        // Two messages on "general", switch to "random": view is empty;
        // switch back: both return in original order.
        let store = seeded_store();
        let first = store.send_message("c-1", MessageKind::Text, "one").unwrap();
        let second = store.send_message("c-1", MessageKind::Text, "two").unwrap();

        store.set_active_channel("c-1", "random");
        assert!(store.read(|s| active_messages(s, "c-1").is_empty()));
        // Stored sequence is untouched.
        assert_eq!(store.read(|s| s.messages["c-1"].len()), 2);

        store.set_active_channel("c-1", "general");
        let ids = store.read(|s| {
            active_messages(s, "c-1")
                .iter()
                .map(|m| m.id.clone())
                .collect::<Vec<_>>()
        });
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_active_messages_unknown_conversation_is_empty() {
        let store = seeded_store();
        assert!(store.read(|s| active_messages(s, "missing").is_empty()));
    }

    #[test]
    fn test_participants_join_skips_unknown_users() {
        let store = seeded_store();
        let names = store.read(|s| {
            participants(s, "c-1")
                .iter()
                .map(|u| u.name.clone())
                .collect::<Vec<_>>()
        });
        // "u-ghost" has no user entry and is skipped.
        assert_eq!(names, vec!["Ana", "Ben"]);
    }

    #[test]
    fn test_sorted_conversations_pinned_then_recent() {
        let mut old = group_conversation("c-old");
        old.updated_at = "2026-03-01T08:00:00+00:00".to_string();
        let mut recent = group_conversation("c-recent");
        recent.updated_at = "2026-03-01T12:00:00+00:00".to_string();
        let mut pinned = group_conversation("c-pinned");
        pinned.is_pinned = true;
        pinned.updated_at = "2026-03-01T07:00:00+00:00".to_string();

        let state = ChatState {
            conversations: vec![old, recent, pinned],
            ..ChatState::default()
        };
        let order: Vec<&str> = sorted_conversations(&state)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(order, vec!["c-pinned", "c-recent", "c-old"]);
    }

    #[test]
    fn test_total_unread_sums_conversations() {
        let mut a = group_conversation("c-a");
        a.unread_count = 2;
        let mut b = group_conversation("c-b");
        b.unread_count = 3;
        let state = ChatState {
            conversations: vec![a, b],
            ..ChatState::default()
        };
        assert_eq!(total_unread(&state), 5);
    }
}

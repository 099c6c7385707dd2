//! Deterministic seed data for the Pulseboard domain stores.
//!
//! This crate is the mock-data collaborator the store layer is constructed
//! with: each builder returns a fully populated state value that satisfies
//! every invariant the owning store maintains (unread counters match their
//! unread sets, reaction counts match their user sets, one attendance record
//! per key). Builders are deterministic so tests and demos reproduce
//! exactly.
//!
//! States can also round-trip through JSON fixture files; see [`fixtures`].

mod error;
mod fixtures;

pub use error::{Result, SeedError};
pub use fixtures::{dump_state, load_state};

use chrono::{TimeZone, Utc};

use pulseboard_core::academy::{
    AcademyState, AttendanceRecord, AttendanceStatus, CurriculumTopic, TopicStatus,
};
use pulseboard_core::chat::{
    Channel, ChatState, ChatUser, Conversation, ConversationKind, Message, MessageKind,
    MessagePreview, Presence, Reaction, TodoItem,
};
use pulseboard_core::notification::{Notification, NotificationKind, NotificationState};
use pulseboard_core::roles::{Permission, PermissionCategory, Role, RolesState};

/// The seed's fixed "now": 2026-03-02, a Monday morning.
const SEED_DATE: &str = "2026-03-02";

fn ts(hour: u32, minute: u32) -> String {
    // Safe to unwrap: the date is fixed and valid for every caller.
    Utc.with_ymd_and_hms(2026, 3, 2, hour, minute, 0)
        .unwrap()
        .to_rfc3339()
}

/// Notification feed: four entries, two unread, counter consistent.
pub fn notifications() -> NotificationState {
    let notifications = vec![
        Notification {
            id: "ntf-mention-standup".to_string(),
            kind: NotificationKind::Mention,
            title: "Liam mentioned you".to_string(),
            message: "@maya can you cover the standup notes?".to_string(),
            timestamp: ts(9, 40),
            read: false,
            event_id: None,
        },
        Notification {
            id: "ntf-event-parents".to_string(),
            kind: NotificationKind::Event,
            title: "Parents evening".to_string(),
            message: "Starts at 18:00 in the main hall".to_string(),
            timestamp: ts(9, 15),
            read: false,
            event_id: Some("evt-parents-evening".to_string()),
        },
        Notification {
            id: "ntf-alert-import".to_string(),
            kind: NotificationKind::Alert,
            title: "Grade import failed".to_string(),
            message: "3 rows were rejected; review and retry".to_string(),
            timestamp: ts(8, 50),
            read: true,
            event_id: None,
        },
        Notification {
            id: "ntf-system-backup".to_string(),
            kind: NotificationKind::System,
            title: "Nightly backup finished".to_string(),
            message: "All records archived".to_string(),
            timestamp: ts(4, 0),
            read: true,
            event_id: None,
        },
    ];
    let unread_count = notifications.iter().filter(|n| !n.read).count();
    NotificationState {
        notifications,
        unread_count,
    }
}

/// Chat: one direct conversation, one group with two channels, a reacted
/// message, and a todo list.
pub fn chat() -> ChatState {
    let users = [
        ChatUser {
            id: "user-maya".to_string(),
            name: "Maya Okafor".to_string(),
            avatar: Some("avatars/maya.png".to_string()),
            presence: Presence::Online,
        },
        ChatUser {
            id: "user-liam".to_string(),
            name: "Liam Chen".to_string(),
            avatar: None,
            presence: Presence::Away,
        },
        ChatUser {
            id: "user-sofia".to_string(),
            name: "Sofia Marino".to_string(),
            avatar: Some("avatars/sofia.png".to_string()),
            presence: Presence::Offline,
        },
    ]
    .into_iter()
    .map(|u| (u.id.clone(), u))
    .collect();

    let direct_messages = vec![
        Message {
            id: "msg-d1".to_string(),
            conversation_id: "conv-maya-liam".to_string(),
            channel_id: None,
            sender_id: "user-liam".to_string(),
            kind: MessageKind::Text,
            content: "Did the grade import go through?".to_string(),
            timestamp: ts(9, 2),
            reactions: Vec::new(),
            attachments: Vec::new(),
            reply_to: None,
        },
        Message {
            id: "msg-d2".to_string(),
            conversation_id: "conv-maya-liam".to_string(),
            channel_id: None,
            sender_id: "user-maya".to_string(),
            kind: MessageKind::Text,
            content: "Three rows bounced, rerunning now".to_string(),
            timestamp: ts(9, 5),
            reactions: Vec::new(),
            attachments: Vec::new(),
            reply_to: Some("msg-d1".to_string()),
        },
    ];

    let group_messages = vec![
        Message {
            id: "msg-g1".to_string(),
            conversation_id: "conv-staff-room".to_string(),
            channel_id: Some("ch-general".to_string()),
            sender_id: "user-sofia".to_string(),
            kind: MessageKind::Text,
            content: "Parents evening prep doc is up".to_string(),
            timestamp: ts(8, 45),
            reactions: vec![Reaction {
                emoji: "👍".to_string(),
                user_ids: vec!["user-maya".to_string(), "user-liam".to_string()],
                count: 2,
            }],
            attachments: Vec::new(),
            reply_to: None,
        },
        Message {
            id: "msg-g2".to_string(),
            conversation_id: "conv-staff-room".to_string(),
            channel_id: Some("ch-random".to_string()),
            sender_id: "user-liam".to_string(),
            kind: MessageKind::Text,
            content: "Coffee machine is fixed 🎉".to_string(),
            timestamp: ts(9, 30),
            reactions: Vec::new(),
            attachments: Vec::new(),
            reply_to: None,
        },
    ];

    let conversations = vec![
        Conversation {
            id: "conv-maya-liam".to_string(),
            kind: ConversationKind::Direct,
            name: "Liam Chen".to_string(),
            participant_ids: vec!["user-maya".to_string(), "user-liam".to_string()],
            last_message: Some(MessagePreview {
                message_id: "msg-d2".to_string(),
                sender_id: "user-maya".to_string(),
                content: "Three rows bounced, rerunning now".to_string(),
                timestamp: ts(9, 5),
            }),
            unread_count: 0,
            is_pinned: true,
            is_muted: false,
            typing_user_ids: Vec::new(),
            channels: Vec::new(),
            active_channel_id: None,
            created_at: ts(8, 0),
            updated_at: ts(9, 5),
        },
        Conversation {
            id: "conv-staff-room".to_string(),
            kind: ConversationKind::Group,
            name: "Staff Room".to_string(),
            participant_ids: vec![
                "user-maya".to_string(),
                "user-liam".to_string(),
                "user-sofia".to_string(),
            ],
            last_message: Some(MessagePreview {
                message_id: "msg-g2".to_string(),
                sender_id: "user-liam".to_string(),
                content: "Coffee machine is fixed 🎉".to_string(),
                timestamp: ts(9, 30),
            }),
            unread_count: 1,
            is_pinned: false,
            is_muted: false,
            typing_user_ids: Vec::new(),
            channels: vec![
                Channel {
                    id: "ch-general".to_string(),
                    name: "general".to_string(),
                },
                Channel {
                    id: "ch-random".to_string(),
                    name: "random".to_string(),
                },
            ],
            active_channel_id: Some("ch-general".to_string()),
            created_at: ts(7, 30),
            updated_at: ts(9, 30),
        },
    ];

    ChatState {
        users,
        current_user_id: "user-maya".to_string(),
        conversations,
        active_conversation_id: Some("conv-maya-liam".to_string()),
        messages: [
            ("conv-maya-liam".to_string(), direct_messages),
            ("conv-staff-room".to_string(), group_messages),
        ]
        .into_iter()
        .collect(),
        todos: [(
            "conv-staff-room".to_string(),
            vec![
                TodoItem {
                    id: "todo-agenda".to_string(),
                    content: "Draft parents evening agenda".to_string(),
                    emoji: Some("📋".to_string()),
                    completed: true,
                    created_at: ts(8, 10),
                },
                TodoItem {
                    id: "todo-handouts".to_string(),
                    content: "Print handouts".to_string(),
                    emoji: None,
                    completed: false,
                    created_at: ts(8, 12),
                },
            ],
        )]
        .into_iter()
        .collect(),
        active_channels: [("conv-staff-room".to_string(), "ch-general".to_string())]
            .into_iter()
            .collect(),
    }
}

/// Role catalogue: two system roles and two custom ones.
pub fn roles() -> RolesState {
    fn permission(id: &str, resource: &str, category: PermissionCategory, desc: &str) -> Permission {
        Permission {
            id: id.to_string(),
            resource: resource.to_string(),
            category,
            description: desc.to_string(),
        }
    }

    let roles = vec![
        Role {
            id: "role-admin".to_string(),
            name: "Administrator".to_string(),
            description: "Full access to every module".to_string(),
            permissions: vec![
                permission(
                    "perm-users-all",
                    "users",
                    PermissionCategory::UserManagement,
                    "Create, edit and deactivate users",
                ),
                permission(
                    "perm-settings-all",
                    "settings",
                    PermissionCategory::Settings,
                    "Change application settings",
                ),
            ],
            user_count: 2,
            is_system_role: true,
            is_active: true,
            created_at: ts(6, 0),
            updated_at: ts(6, 0),
        },
        Role {
            id: "role-teacher".to_string(),
            name: "Teacher".to_string(),
            description: "Classroom and grading access".to_string(),
            permissions: vec![permission(
                "perm-grades",
                "grades",
                PermissionCategory::ContentManagement,
                "Record and edit grades",
            )],
            user_count: 24,
            is_system_role: true,
            is_active: true,
            created_at: ts(6, 0),
            updated_at: ts(6, 30),
        },
        Role {
            id: "role-bursar".to_string(),
            name: "Bursar".to_string(),
            description: "Invoicing and payment records".to_string(),
            permissions: vec![permission(
                "perm-invoices",
                "invoices",
                PermissionCategory::Billing,
                "Issue and void invoices",
            )],
            user_count: 3,
            is_system_role: false,
            is_active: true,
            created_at: ts(7, 0),
            updated_at: ts(7, 0),
        },
        Role {
            id: "role-reporter".to_string(),
            name: "Report viewer".to_string(),
            description: "Read-only dashboards".to_string(),
            permissions: vec![permission(
                "perm-reports",
                "reports",
                PermissionCategory::Reports,
                "View attendance and grade reports",
            )],
            user_count: 7,
            is_system_role: false,
            is_active: false,
            created_at: ts(7, 15),
            updated_at: ts(8, 0),
        },
    ];

    RolesState {
        roles,
        ..RolesState::default()
    }
}

/// Academy: one morning of attendance marks and a small curriculum.
pub fn academy() -> AcademyState {
    AcademyState {
        attendance: vec![
            AttendanceRecord {
                id: "att-amara".to_string(),
                student_id: "stu-amara".to_string(),
                class_id: "class-7b".to_string(),
                date: SEED_DATE.to_string(),
                status: AttendanceStatus::Present,
                notes: None,
            },
            AttendanceRecord {
                id: "att-noah".to_string(),
                student_id: "stu-noah".to_string(),
                class_id: "class-7b".to_string(),
                date: SEED_DATE.to_string(),
                status: AttendanceStatus::Late,
                notes: Some("Bus delay".to_string()),
            },
        ],
        curriculum: vec![
            CurriculumTopic {
                id: "top-fractions".to_string(),
                subject: "Math".to_string(),
                unit: "Fractions and decimals".to_string(),
                progress: 100,
                status: TopicStatus::Completed,
                target_date: "2026-02-20".to_string(),
            },
            CurriculumTopic {
                id: "top-geometry".to_string(),
                subject: "Math".to_string(),
                unit: "Plane geometry".to_string(),
                progress: 45,
                status: TopicStatus::InProgress,
                target_date: "2026-04-10".to_string(),
            },
            CurriculumTopic {
                id: "top-romans".to_string(),
                subject: "History".to_string(),
                unit: "The Roman Empire".to_string(),
                progress: 0,
                status: TopicStatus::NotStarted,
                target_date: "2026-05-22".to_string(),
            },
        ],
        selected_date: SEED_DATE.to_string(),
        selected_class_id: Some("class-7b".to_string()),
    }
}

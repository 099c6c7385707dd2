//! Pulseboard core: the observable domain-store layer of the admin
//! dashboard.
//!
//! Each domain (notifications, chat, roles, academy) owns exactly one state
//! value inside a generic [`store::Store`], mutates it only through named
//! entry points, and exposes pure derived-view functions computed on every
//! read. Cross-field invariants (an unread counter matching the unread set,
//! a reaction count matching its user set) are maintained inside the
//! mutations, so subscribers can never observe them out of sync.
//!
//! Stores never call each other; composition across domains (mapping a chat
//! user id to a role, say) happens in the consuming layer, over snapshots.

pub mod academy;
pub mod chat;
pub mod notification;
pub mod roles;
pub mod store;

// Re-export the engine types used by every domain store's API
pub use store::{ListenerId, Store};

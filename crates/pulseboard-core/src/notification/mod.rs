//! Notification domain module.
//!
//! Tracks the dashboard's notification feed together with an incrementally
//! maintained unread counter.
//!
//! # Module Structure
//!
//! - `model`: Notification entity and kind (`Notification`, `NotificationKind`)
//! - `store`: State shape and mutation entry points (`NotificationStore`)

mod model;
mod store;

// Re-export public API
pub use model::{Notification, NotificationKind};
pub use store::{NotificationState, NotificationStore, unread};

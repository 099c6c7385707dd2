//! Academy domain module.
//!
//! Attendance marking with find-or-create semantics on a composite key, and
//! curriculum progress/status tracking with deliberately independent
//! setters.
//!
//! # Module Structure
//!
//! - `model`: Entities (`AttendanceRecord`, `CurriculumTopic`, ...)
//! - `store`: State shape and mutation entry points (`AcademyStore`)

mod model;
mod store;

// Re-export public API
pub use model::{AttendanceRecord, AttendanceStatus, CurriculumTopic, TopicStatus};
pub use store::{
    AcademyState, AcademyStore, attendance_for, attendance_status_of, completed_topic_count,
    topics_for_subject,
};

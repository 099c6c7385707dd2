//! Academy domain model.

use serde::{Deserialize, Serialize};

/// Attendance outcome for one student in one class on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

/// One attendance mark.
///
/// At most one record exists per `(student_id, class_id, date)` triple; a
/// new mark for an existing triple updates the record in place instead of
/// creating a duplicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Unique record identifier (UUID format).
    pub id: String,
    pub student_id: String,
    pub class_id: String,
    /// Calendar day of the mark (`YYYY-MM-DD`).
    pub date: String,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Completion state of a curriculum topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// A unit of the curriculum with its progress.
///
/// `progress` and `status` are not coupled by the store; callers that treat
/// reaching 100 as completed must set both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumTopic {
    pub id: String,
    pub subject: String,
    pub unit: String,
    /// Percentage complete, 0..=100.
    pub progress: u8,
    pub status: TopicStatus,
    /// Planned completion day (`YYYY-MM-DD`).
    pub target_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_serde_tags() {
        let record = AttendanceRecord {
            id: "a-1".to_string(),
            student_id: "s-1".to_string(),
            class_id: "k-1".to_string(),
            date: "2026-03-02".to_string(),
            status: AttendanceStatus::Late,
            notes: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["studentId"], "s-1");
        assert_eq!(json["status"], "late");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_topic_status_kebab_case() {
        assert_eq!(
            serde_json::to_value(TopicStatus::NotStarted).unwrap(),
            "not-started"
        );
        assert_eq!(
            serde_json::to_value(TopicStatus::InProgress).unwrap(),
            "in-progress"
        );
    }
}

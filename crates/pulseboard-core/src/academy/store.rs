//! Academy store: attendance upsert and curriculum setters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::{AttendanceRecord, AttendanceStatus, CurriculumTopic, TopicStatus};
use crate::store::{ListenerId, Store};

/// State owned by the [`AcademyStore`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademyState {
    pub attendance: Vec<AttendanceRecord>,
    pub curriculum: Vec<CurriculumTopic>,
    /// The day attendance marks apply to (`YYYY-MM-DD`).
    pub selected_date: String,
    /// Class currently shown in the attendance screen.
    pub selected_class_id: Option<String>,
}

/// Observable store for attendance and curriculum.
pub struct AcademyStore {
    inner: Store<AcademyState>,
}

impl AcademyStore {
    /// Creates a store seeded with `initial`.
    pub fn new(initial: AcademyState) -> Self {
        Self {
            inner: Store::new(initial),
        }
    }

    /// Records an attendance mark for the currently selected date.
    ///
    /// Find-or-create on the composite key `(student_id, class_id,
    /// selected_date)`: when a record for the triple exists, its status and
    /// notes are replaced in place (the record id is kept); otherwise a
    /// record with a fresh id is appended. Any number of calls for the same
    /// triple leave exactly one record, holding the most recent status.
    pub fn mark_attendance(
        &self,
        student_id: &str,
        class_id: &str,
        status: AttendanceStatus,
        notes: Option<String>,
    ) {
        self.inner.update(|prev| {
            let mut next = prev.clone();
            let existing = next.attendance.iter_mut().find(|r| {
                r.student_id == student_id && r.class_id == class_id && r.date == prev.selected_date
            });
            match existing {
                Some(record) => {
                    record.status = status;
                    record.notes = notes.clone();
                }
                None => next.attendance.push(AttendanceRecord {
                    id: Uuid::new_v4().to_string(),
                    student_id: student_id.to_string(),
                    class_id: class_id.to_string(),
                    date: prev.selected_date.clone(),
                    status,
                    notes: notes.clone(),
                }),
            }
            next
        });
    }

    /// Changes the day subsequent attendance marks apply to.
    pub fn set_selected_date(&self, date: impl Into<String>) {
        let date = date.into();
        self.inner.update(|prev| AcademyState {
            selected_date: date.clone(),
            ..prev.clone()
        });
    }

    /// Changes the class shown in the attendance screen.
    pub fn set_selected_class(&self, class_id: Option<&str>) {
        self.inner.update(|prev| AcademyState {
            selected_class_id: class_id.map(str::to_string),
            ..prev.clone()
        });
    }

    /// Sets a topic's progress, clamped to 0..=100.
    ///
    /// Independent of [`AcademyStore::update_curriculum_status`]: the store
    /// does not couple progress and status. Callers that treat crossing a
    /// threshold as a status change invoke both setters together.
    pub fn update_curriculum_progress(&self, id: &str, progress: u8) {
        self.inner.update(|prev| {
            let mut next = prev.clone();
            if let Some(topic) = next.curriculum.iter_mut().find(|t| t.id == id) {
                topic.progress = progress.min(100);
            }
            next
        });
    }

    /// Sets a topic's status. Unknown ids are a no-op.
    pub fn update_curriculum_status(&self, id: &str, status: TopicStatus) {
        self.inner.update(|prev| {
            let mut next = prev.clone();
            if let Some(topic) = next.curriculum.iter_mut().find(|t| t.id == id) {
                topic.status = status;
            }
            next
        });
    }

    /// Borrows the current state for a pure read.
    pub fn read<R>(&self, f: impl FnOnce(&AcademyState) -> R) -> R {
        self.inner.read(f)
    }

    /// By-value copy of the current state.
    pub fn snapshot(&self) -> AcademyState {
        self.inner.snapshot()
    }

    /// Registers a change listener; see [`Store::subscribe`].
    pub fn subscribe(&self, listener: impl Fn(&AcademyState) + 'static) -> ListenerId {
        self.inner.subscribe(listener)
    }

    /// Deregisters a change listener.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.inner.unsubscribe(id)
    }
}

/// Derived view: attendance records for one class on one day.
pub fn attendance_for<'a>(
    state: &'a AcademyState,
    class_id: &str,
    date: &str,
) -> Vec<&'a AttendanceRecord> {
    state
        .attendance
        .iter()
        .filter(|r| r.class_id == class_id && r.date == date)
        .collect()
}

/// Derived view: one student's status for a class/day, if marked.
pub fn attendance_status_of(
    state: &AcademyState,
    student_id: &str,
    class_id: &str,
    date: &str,
) -> Option<AttendanceStatus> {
    state
        .attendance
        .iter()
        .find(|r| r.student_id == student_id && r.class_id == class_id && r.date == date)
        .map(|r| r.status)
}

/// Derived view: curriculum topics for a subject, stored order.
pub fn topics_for_subject<'a>(state: &'a AcademyState, subject: &str) -> Vec<&'a CurriculumTopic> {
    state
        .curriculum
        .iter()
        .filter(|t| t.subject == subject)
        .collect()
}

/// Derived view: number of completed topics.
pub fn completed_topic_count(state: &AcademyState) -> usize {
    state
        .curriculum
        .iter()
        .filter(|t| t.status == TopicStatus::Completed)
        .count()
}

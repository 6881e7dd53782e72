//! Enrollment Domain Model
//!
//! Links a student to a course.

use chrono::{DateTime, Utc};

use super::ids::{CourseId, EnrollmentId, UserId};

/// Enrollment domain entity
#[derive(Debug, Clone)]
pub struct Enrollment {
    id: EnrollmentId,
    course_id: CourseId,
    student_id: UserId,
    enroll_date: DateTime<Utc>,
}

impl Enrollment {
    /// Restore an Enrollment from persisted data
    #[must_use]
    pub fn restore(id: EnrollmentId, course_id: CourseId, student_id: UserId, enroll_date: DateTime<Utc>) -> Self {
        Self {
            id,
            course_id,
            student_id,
            enroll_date,
        }
    }

    #[must_use]
    pub fn id(&self) -> EnrollmentId {
        self.id
    }

    #[must_use]
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    #[must_use]
    pub fn student_id(&self) -> UserId {
        self.student_id
    }

    #[must_use]
    pub fn enroll_date(&self) -> DateTime<Utc> {
        self.enroll_date
    }
}

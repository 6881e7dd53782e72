//! Enrollment DTOs

use serde::Serialize;

use crate::domain::models::Enrollment;

/// One entry of a course's class list
#[derive(Debug, Clone, Serialize)]
pub struct EnrolledStudentDto {
    pub student_id: i64,
}

impl From<&Enrollment> for EnrolledStudentDto {
    fn from(enrollment: &Enrollment) -> Self {
        Self {
            student_id: enrollment.student_id().value(),
        }
    }
}

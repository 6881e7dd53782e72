//! Enrollment Use Cases
//!
//! Students join courses; teachers review and prune their class lists.

mod enroll_student;
mod list_course_students;
mod remove_student;

pub use enroll_student::EnrollStudentUseCase;
pub use list_course_students::ListCourseStudentsUseCase;
pub use remove_student::RemoveStudentUseCase;

//! Course Use Cases
//!
//! Teachers create and manage the courses they own.

mod create_course;
mod delete_course;
mod get_course;
mod list_teacher_courses;
mod update_course;

pub use create_course::CreateCourseUseCase;
pub use delete_course::DeleteCourseUseCase;
pub use get_course::GetCourseUseCase;
pub use list_teacher_courses::ListTeacherCoursesUseCase;
pub use update_course::UpdateCourseUseCase;

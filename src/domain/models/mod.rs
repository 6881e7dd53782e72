//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod assignment;
pub mod course;
pub mod enrollment;
pub mod ids;
pub mod material;
pub mod submission;
pub mod user;

pub use assignment::{Assignment, NewAssignment};
pub use course::{Course, CourseChanges, NewCourse};
pub use enrollment::Enrollment;
pub use ids::{AssignmentId, CourseId, EnrollmentId, MaterialId, SubmissionId, UserId};
pub use material::{Material, NewMaterial};
pub use submission::{Grade, NewSubmission, Submission};
pub use user::{Identity, NewUser, User, UserRole};

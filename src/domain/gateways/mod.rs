//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod assignment_repository;
pub mod course_repository;
pub mod enrollment_repository;
pub mod material_repository;
pub mod material_storage;
pub mod password_hasher;
pub mod submission_repository;
pub mod token_service;
pub mod user_repository;

use std::sync::Arc;

pub use assignment_repository::AssignmentRepository;
pub use course_repository::CourseRepository;
pub use enrollment_repository::EnrollmentRepository;
pub use material_repository::MaterialRepository;
pub use material_storage::MaterialStorage;
pub use password_hasher::PasswordHasher;
pub use submission_repository::SubmissionRepository;
pub use token_service::TokenService;
pub use user_repository::UserRepository;

/// Every port the use cases need, ready to be wired into the application
#[derive(Clone)]
pub struct Gateways {
    pub users: Arc<dyn UserRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub enrollments: Arc<dyn EnrollmentRepository>,
    pub assignments: Arc<dyn AssignmentRepository>,
    pub submissions: Arc<dyn SubmissionRepository>,
    pub materials: Arc<dyn MaterialRepository>,
    pub material_storage: Arc<dyn MaterialStorage>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_service: Arc<dyn TokenService>,
}

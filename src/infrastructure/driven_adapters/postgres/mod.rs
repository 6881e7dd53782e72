//! PostgreSQL Repository Implementations
//!
//! Implement the domain repository traits using SQLx for PostgreSQL.

mod assignments;
mod courses;
mod enrollments;
mod materials;
mod submissions;
mod users;

use std::sync::Arc;

use sqlx::PgPool;

pub use assignments::PostgresAssignmentRepository;
pub use courses::PostgresCourseRepository;
pub use enrollments::PostgresEnrollmentRepository;
pub use materials::PostgresMaterialRepository;
pub use submissions::PostgresSubmissionRepository;
pub use users::PostgresUserRepository;

use crate::shared::errors::RepositoryError;

/// Translate unique-constraint violations into `RepositoryError::Conflict`
fn map_write_error(err: sqlx::Error, entity: &str) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let constraint = db_err.constraint().unwrap_or(entity).to_string();
            return RepositoryError::Conflict(constraint);
        }
    }
    RepositoryError::Database(err)
}

/// All PostgreSQL repositories sharing one pool
pub struct PostgresRepositories {
    pub users: Arc<PostgresUserRepository>,
    pub courses: Arc<PostgresCourseRepository>,
    pub enrollments: Arc<PostgresEnrollmentRepository>,
    pub assignments: Arc<PostgresAssignmentRepository>,
    pub submissions: Arc<PostgresSubmissionRepository>,
    pub materials: Arc<PostgresMaterialRepository>,
}

impl PostgresRepositories {
    #[must_use]
    pub fn new(pool: &PgPool) -> Self {
        Self {
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            courses: Arc::new(PostgresCourseRepository::new(pool.clone())),
            enrollments: Arc::new(PostgresEnrollmentRepository::new(pool.clone())),
            assignments: Arc::new(PostgresAssignmentRepository::new(pool.clone())),
            submissions: Arc::new(PostgresSubmissionRepository::new(pool.clone())),
            materials: Arc::new(PostgresMaterialRepository::new(pool.clone())),
        }
    }
}

//! Material Repository Gateway

use async_trait::async_trait;

use crate::domain::models::{CourseId, Material, NewMaterial};
use crate::shared::errors::RepositoryError;

/// Repository trait for teaching material metadata
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MaterialRepository: Send + Sync {
    /// Record an upload, replacing the entry of a same-named file in the course
    async fn upsert(&self, material: &NewMaterial) -> Result<Material, RepositoryError>;

    /// List the materials of a course, ordered by file name
    async fn find_by_course(&self, course_id: CourseId) -> Result<Vec<Material>, RepositoryError>;
}

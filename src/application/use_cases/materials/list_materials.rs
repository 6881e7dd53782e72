//! List Materials Use Case

use std::sync::Arc;

use crate::application::use_cases::access::require_owned_course;
use crate::domain::gateways::{CourseRepository, MaterialRepository};
use crate::domain::models::{CourseId, Identity, Material};
use crate::shared::errors::UseCaseError;

/// Use case for listing the materials of a course the caller owns
pub struct ListMaterialsUseCase {
    course_repository: Arc<dyn CourseRepository>,
    material_repository: Arc<dyn MaterialRepository>,
}

impl ListMaterialsUseCase {
    #[must_use]
    pub fn new(course_repository: Arc<dyn CourseRepository>, material_repository: Arc<dyn MaterialRepository>) -> Self {
        Self {
            course_repository,
            material_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the course doesn't exist or isn't owned by the caller.
    pub async fn execute(&self, caller: &Identity, course_id: CourseId) -> Result<Vec<Material>, UseCaseError> {
        require_owned_course(self.course_repository.as_ref(), course_id, caller).await?;
        Ok(self.material_repository.find_by_course(course_id).await?)
    }
}

//! Upload Material Use Case
//!
//! Stores a teaching material file for a course owned by the caller.

use std::sync::Arc;

use crate::application::use_cases::access::require_owned_course;
use crate::domain::gateways::{CourseRepository, MaterialRepository, MaterialStorage};
use crate::domain::models::material::secure_filename;
use crate::domain::models::{CourseId, Identity, Material, NewMaterial};
use crate::shared::errors::{DomainError, UseCaseError};

/// Input for uploading a material
#[derive(Debug)]
pub struct UploadMaterialCommand {
    pub course_id: CourseId,
    pub file_name: String,
    pub contents: Vec<u8>,
}

/// Use case for uploading teaching material
pub struct UploadMaterialUseCase {
    course_repository: Arc<dyn CourseRepository>,
    material_repository: Arc<dyn MaterialRepository>,
    material_storage: Arc<dyn MaterialStorage>,
}

impl UploadMaterialUseCase {
    #[must_use]
    pub fn new(
        course_repository: Arc<dyn CourseRepository>,
        material_repository: Arc<dyn MaterialRepository>,
        material_storage: Arc<dyn MaterialStorage>,
    ) -> Self {
        Self {
            course_repository,
            material_repository,
            material_storage,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the course doesn't exist or isn't owned by the caller.
    /// Returns `DomainError::InvalidFileName` if the name is unusable once sanitized.
    /// Returns `UseCaseError::Storage` if the file cannot be written.
    pub async fn execute(&self, caller: &Identity, command: UploadMaterialCommand) -> Result<Material, UseCaseError> {
        tracing::info!(
            course_id = %command.course_id,
            teacher_id = %caller.user_id,
            file_name = %command.file_name,
            size = command.contents.len(),
            "Uploading course material"
        );

        let course = require_owned_course(self.course_repository.as_ref(), command.course_id, caller).await?;
        let file_name = secure_filename(&command.file_name)?;

        let size_bytes = i64::try_from(command.contents.len())
            .map_err(|_| DomainError::InvalidState("file too large".to_string()))?;
        let stored_path = self
            .material_storage
            .save(course.id(), &file_name, &command.contents)
            .await?;

        let material = self
            .material_repository
            .upsert(&NewMaterial {
                course_id: course.id(),
                file_name,
                stored_path,
                size_bytes,
                uploaded_by: caller.user_id,
            })
            .await?;

        tracing::info!(material_id = %material.id(), course_id = %course.id(), "Material uploaded successfully");
        Ok(material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::courses::fixtures::{course, teacher};
    use crate::domain::gateways::course_repository::MockCourseRepository;
    use crate::domain::gateways::material_repository::MockMaterialRepository;
    use crate::domain::gateways::material_storage::MockMaterialStorage;
    use crate::domain::models::MaterialId;
    use chrono::Utc;

    fn command(file_name: &str) -> UploadMaterialCommand {
        UploadMaterialCommand {
            course_id: CourseId::new(1),
            file_name: file_name.to_string(),
            contents: b"lecture notes".to_vec(),
        }
    }

    fn owned_courses() -> MockCourseRepository {
        let mut repo = MockCourseRepository::new();
        repo.expect_find_owned().returning(|id, t| Ok(Some(course(id.value(), t.value()))));
        repo
    }

    #[tokio::test]
    async fn should_store_sanitized_file_and_record_it() {
        let mut storage = MockMaterialStorage::new();
        storage
            .expect_save()
            .withf(|_, name, contents| name == "notes_week1.txt" && contents == b"lecture notes")
            .returning(|course_id, name, _| Ok(format!("uploads/{course_id}/{name}")));
        let mut materials = MockMaterialRepository::new();
        materials.expect_upsert().returning(|m| {
            Ok(Material::restore(
                MaterialId::new(1),
                m.course_id,
                m.file_name.clone(),
                m.stored_path.clone(),
                m.size_bytes,
                m.uploaded_by,
                Utc::now(),
            ))
        });

        let use_case = UploadMaterialUseCase::new(Arc::new(owned_courses()), Arc::new(materials), Arc::new(storage));
        let material = use_case
            .execute(&teacher(1), command("../notes week1.txt"))
            .await
            .unwrap();

        assert_eq!(material.file_name(), "notes_week1.txt");
        assert_eq!(material.stored_path(), "uploads/1/notes_week1.txt");
        assert_eq!(material.size_bytes(), 13);
    }

    #[tokio::test]
    async fn should_reject_unusable_file_name() {
        let mut storage = MockMaterialStorage::new();
        storage.expect_save().never();

        let use_case = UploadMaterialUseCase::new(
            Arc::new(owned_courses()),
            Arc::new(MockMaterialRepository::new()),
            Arc::new(storage),
        );
        let err = use_case.execute(&teacher(1), command("../..")).await.unwrap_err();

        assert!(matches!(err, UseCaseError::Domain(DomainError::InvalidFileName(_))));
    }

    #[tokio::test]
    async fn should_not_store_for_foreign_course() {
        let mut courses = MockCourseRepository::new();
        courses.expect_find_owned().returning(|_, _| Ok(None));
        let mut storage = MockMaterialStorage::new();
        storage.expect_save().never();

        let use_case = UploadMaterialUseCase::new(
            Arc::new(courses),
            Arc::new(MockMaterialRepository::new()),
            Arc::new(storage),
        );
        let err = use_case.execute(&teacher(2), command("notes.txt")).await.unwrap_err();

        assert!(matches!(err, UseCaseError::NotFound(_)));
    }
}

//! Create Assignment Use Case

use std::sync::Arc;

use crate::application::use_cases::access::require_owned_course;
use crate::domain::gateways::{AssignmentRepository, CourseRepository};
use crate::domain::models::assignment::parse_due_date;
use crate::domain::models::{Assignment, CourseId, Identity, NewAssignment};
use crate::shared::errors::{DomainError, UseCaseError};

/// Input for creating an assignment
#[derive(Debug, Clone)]
pub struct CreateAssignmentCommand {
    pub course_id: CourseId,
    pub name: String,
    pub due_date: String,
    pub description: Option<String>,
}

/// Use case for adding an assignment to a course the caller owns
pub struct CreateAssignmentUseCase {
    course_repository: Arc<dyn CourseRepository>,
    assignment_repository: Arc<dyn AssignmentRepository>,
}

impl CreateAssignmentUseCase {
    #[must_use]
    pub fn new(
        course_repository: Arc<dyn CourseRepository>,
        assignment_repository: Arc<dyn AssignmentRepository>,
    ) -> Self {
        Self {
            course_repository,
            assignment_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the course doesn't exist or isn't owned by the caller.
    /// Returns `UseCaseError::Domain` if the due date or name is invalid.
    pub async fn execute(
        &self,
        caller: &Identity,
        command: CreateAssignmentCommand,
    ) -> Result<Assignment, UseCaseError> {
        tracing::info!(course_id = %command.course_id, name = %command.name, "Creating assignment");

        let due_date = parse_due_date(&command.due_date)?;
        if command.name.trim().is_empty() {
            return Err(DomainError::InvalidState("assignment name must not be blank".to_string()).into());
        }

        let course = require_owned_course(self.course_repository.as_ref(), command.course_id, caller).await?;

        let assignment = self
            .assignment_repository
            .create(&NewAssignment {
                course_id: course.id(),
                name: command.name,
                due_date,
                description: command.description,
            })
            .await?;

        tracing::info!(assignment_id = %assignment.id(), course_id = %course.id(), "Assignment created successfully");
        Ok(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::courses::fixtures::{course, teacher};
    use crate::domain::gateways::assignment_repository::MockAssignmentRepository;
    use crate::domain::gateways::course_repository::MockCourseRepository;
    use crate::domain::models::assignment::format_due_date;
    use crate::domain::models::AssignmentId;
    use chrono::Utc;

    fn command(due_date: &str) -> CreateAssignmentCommand {
        CreateAssignmentCommand {
            course_id: CourseId::new(1),
            name: "Assignment 1".to_string(),
            due_date: due_date.to_string(),
            description: Some("Solve these problems".to_string()),
        }
    }

    #[tokio::test]
    async fn should_create_assignment_in_owned_course() {
        let mut courses = MockCourseRepository::new();
        courses.expect_find_owned().returning(|id, t| Ok(Some(course(id.value(), t.value()))));
        let mut assignments = MockAssignmentRepository::new();
        assignments.expect_create().returning(|a| {
            Ok(Assignment::restore(
                AssignmentId::new(11),
                a.course_id,
                a.name.clone(),
                a.due_date,
                a.description.clone(),
                Utc::now(),
            ))
        });

        let use_case = CreateAssignmentUseCase::new(Arc::new(courses), Arc::new(assignments));
        let assignment = use_case
            .execute(&teacher(1), command("2024-05-31T23:59:59Z"))
            .await
            .unwrap();

        assert_eq!(assignment.id(), AssignmentId::new(11));
        assert_eq!(format_due_date(assignment.due_date()), "2024-05-31T23:59:59Z");
    }

    #[tokio::test]
    async fn should_reject_invalid_due_date_before_touching_storage() {
        let mut courses = MockCourseRepository::new();
        courses.expect_find_owned().never();

        let use_case = CreateAssignmentUseCase::new(Arc::new(courses), Arc::new(MockAssignmentRepository::new()));
        let err = use_case.execute(&teacher(1), command("tomorrow")).await.unwrap_err();

        assert!(matches!(err, UseCaseError::Domain(DomainError::InvalidState(_))));
    }

    #[tokio::test]
    async fn should_not_add_assignment_to_foreign_course() {
        let mut courses = MockCourseRepository::new();
        courses.expect_find_owned().returning(|_, _| Ok(None));
        let mut assignments = MockAssignmentRepository::new();
        assignments.expect_create().never();

        let use_case = CreateAssignmentUseCase::new(Arc::new(courses), Arc::new(assignments));
        let err = use_case
            .execute(&teacher(2), command("2024-05-31T23:59:59Z"))
            .await
            .unwrap_err();

        assert!(matches!(err, UseCaseError::NotFound(_)));
    }
}

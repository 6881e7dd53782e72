//! Assignment DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::assignment::format_due_date;
use crate::domain::models::Assignment;

/// DTO for creating an assignment
///
/// `due_date` is parsed by the use case so that a bad date reports the
/// accepted format.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAssignmentDto {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,

    pub due_date: String,

    pub description: Option<String>,
}

/// Body returned after creating an assignment
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentCreatedDto {
    pub id: i64,
    pub name: String,
}

impl From<&Assignment> for AssignmentCreatedDto {
    fn from(assignment: &Assignment) -> Self {
        Self {
            id: assignment.id().value(),
            name: assignment.name().to_string(),
        }
    }
}

/// Assignment response DTO
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentResponseDto {
    pub id: i64,
    pub name: String,
    pub due_date: String,
    pub description: Option<String>,
}

impl From<&Assignment> for AssignmentResponseDto {
    fn from(assignment: &Assignment) -> Self {
        Self {
            id: assignment.id().value(),
            name: assignment.name().to_string(),
            due_date: format_due_date(assignment.due_date()),
            description: assignment.description().map(str::to_string),
        }
    }
}

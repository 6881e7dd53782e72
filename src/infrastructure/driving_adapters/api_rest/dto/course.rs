//! Course DTOs

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::domain::models::{Course, CourseChanges};

/// Wrap any present value, `null` included, so it can be told apart from an absent field
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// DTO for creating a course
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourseDto {
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: String,

    pub description: Option<String>,
}

/// DTO for updating a course
///
/// Absent fields keep their current value; an explicit `null` description clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "present")]
    #[allow(clippy::option_option)]
    pub description: Option<Option<String>>,
}

impl From<UpdateCourseDto> for CourseChanges {
    fn from(dto: UpdateCourseDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
        }
    }
}

/// Body returned after creating a course
#[derive(Debug, Clone, Serialize)]
pub struct CourseCreatedDto {
    pub id: i64,
    pub title: String,
}

impl From<&Course> for CourseCreatedDto {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().value(),
            title: course.title().to_string(),
        }
    }
}

/// Course response DTO
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponseDto {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
}

impl From<&Course> for CourseResponseDto {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().value(),
            title: course.title().to_string(),
            description: course.description().map(str::to_string),
        }
    }
}

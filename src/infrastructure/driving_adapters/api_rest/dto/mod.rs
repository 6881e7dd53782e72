//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod assignment;
pub mod auth;
pub mod common;
pub mod course;
pub mod enrollment;
pub mod material;
pub mod submission;

pub use assignment::{AssignmentCreatedDto, AssignmentResponseDto, CreateAssignmentDto};
pub use auth::{AccessTokenDto, LoginDto, RegisterUserDto, UserResponseDto};
pub use common::MessageDto;
pub use course::{CourseCreatedDto, CourseResponseDto, CreateCourseDto, UpdateCourseDto};
pub use enrollment::EnrolledStudentDto;
pub use material::MaterialResponseDto;
pub use submission::{MarkSubmissionDto, SubmissionCreatedDto, SubmitAssignmentDto};

//! Assignment Use Cases

mod create_assignment;
mod get_assignment;
mod list_assignments;

pub use create_assignment::{CreateAssignmentCommand, CreateAssignmentUseCase};
pub use get_assignment::GetAssignmentUseCase;
pub use list_assignments::ListAssignmentsUseCase;

pub(crate) const ASSIGNMENT_NOT_FOUND: &str = "Assignment not found";

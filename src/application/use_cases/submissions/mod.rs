//! Submission Use Cases
//!
//! Enrolled students hand in work; course owners mark it.

mod mark_submission;
mod submit_assignment;

pub use mark_submission::{MarkSubmissionCommand, MarkSubmissionUseCase};
pub use submit_assignment::{SubmitAssignmentCommand, SubmitAssignmentUseCase};

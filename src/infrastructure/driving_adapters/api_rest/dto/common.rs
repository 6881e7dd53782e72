//! Shared DTOs

use serde::Serialize;

/// Plain confirmation body, e.g. `{"message": "Course deleted successfully"}`
#[derive(Debug, Clone, Serialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

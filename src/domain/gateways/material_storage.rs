//! Material Storage Gateway
//!
//! Where uploaded file contents end up.

use async_trait::async_trait;

use crate::domain::models::CourseId;
use crate::shared::errors::StorageError;

/// Storage trait for uploaded file contents
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MaterialStorage: Send + Sync {
    /// Store `contents` under an already-sanitized file name, overwriting any
    /// previous file of that name for the course. Returns the stored location.
    async fn save(&self, course_id: CourseId, file_name: &str, contents: &[u8]) -> Result<String, StorageError>;
}

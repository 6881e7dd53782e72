//! Teaching Material DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::Material;

/// Material response DTO; the storage path stays server-side
#[derive(Debug, Clone, Serialize)]
pub struct MaterialResponseDto {
    pub id: i64,
    pub file_name: String,
    pub size_bytes: i64,
    pub uploaded_at: DateTime<Utc>,
}

impl From<&Material> for MaterialResponseDto {
    fn from(material: &Material) -> Self {
        Self {
            id: material.id().value(),
            file_name: material.file_name().to_string(),
            size_bytes: material.size_bytes(),
            uploaded_at: material.uploaded_at(),
        }
    }
}

//! PostgreSQL Material Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::MaterialRepository;
use crate::domain::models::{CourseId, Material, MaterialId, NewMaterial, UserId};
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct MaterialRow {
    id: i64,
    course_id: i64,
    file_name: String,
    stored_path: String,
    size_bytes: i64,
    uploaded_by: i64,
    uploaded_at: DateTime<Utc>,
}

impl From<MaterialRow> for Material {
    fn from(row: MaterialRow) -> Self {
        Material::restore(
            MaterialId::new(row.id),
            CourseId::new(row.course_id),
            row.file_name,
            row.stored_path,
            row.size_bytes,
            UserId::new(row.uploaded_by),
            row.uploaded_at,
        )
    }
}

/// PostgreSQL implementation of MaterialRepository
pub struct PostgresMaterialRepository {
    pool: PgPool,
}

impl PostgresMaterialRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaterialRepository for PostgresMaterialRepository {
    async fn upsert(&self, material: &NewMaterial) -> Result<Material, RepositoryError> {
        let row = sqlx::query_as::<_, MaterialRow>(
            r#"
            INSERT INTO materials (course_id, file_name, stored_path, size_bytes, uploaded_by)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (course_id, file_name) DO UPDATE
            SET stored_path = EXCLUDED.stored_path,
                size_bytes = EXCLUDED.size_bytes,
                uploaded_by = EXCLUDED.uploaded_by,
                uploaded_at = NOW()
            RETURNING id, course_id, file_name, stored_path, size_bytes, uploaded_by, uploaded_at
            "#,
        )
        .bind(material.course_id.value())
        .bind(&material.file_name)
        .bind(&material.stored_path)
        .bind(material.size_bytes)
        .bind(material.uploaded_by.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(Material::from(row))
    }

    async fn find_by_course(&self, course_id: CourseId) -> Result<Vec<Material>, RepositoryError> {
        let rows = sqlx::query_as::<_, MaterialRow>(
            r#"
            SELECT id, course_id, file_name, stored_path, size_bytes, uploaded_by, uploaded_at
            FROM materials
            WHERE course_id = $1
            ORDER BY file_name ASC
            "#,
        )
        .bind(course_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Material::from).collect())
    }
}

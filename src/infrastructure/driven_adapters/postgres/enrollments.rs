//! PostgreSQL Enrollment Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::map_write_error;
use crate::domain::gateways::EnrollmentRepository;
use crate::domain::models::{CourseId, Enrollment, EnrollmentId, UserId};
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    id: i64,
    course_id: i64,
    student_id: i64,
    enroll_date: DateTime<Utc>,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(row: EnrollmentRow) -> Self {
        Enrollment::restore(
            EnrollmentId::new(row.id),
            CourseId::new(row.course_id),
            UserId::new(row.student_id),
            row.enroll_date,
        )
    }
}

/// PostgreSQL implementation of EnrollmentRepository
pub struct PostgresEnrollmentRepository {
    pool: PgPool,
}

impl PostgresEnrollmentRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for PostgresEnrollmentRepository {
    async fn find(&self, course_id: CourseId, student_id: UserId) -> Result<Option<Enrollment>, RepositoryError> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            SELECT id, course_id, student_id, enroll_date
            FROM enrollments
            WHERE course_id = $1 AND student_id = $2
            "#,
        )
        .bind(course_id.value())
        .bind(student_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Enrollment::from))
    }

    async fn find_by_course(&self, course_id: CourseId) -> Result<Vec<Enrollment>, RepositoryError> {
        let rows = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            SELECT id, course_id, student_id, enroll_date
            FROM enrollments
            WHERE course_id = $1
            ORDER BY enroll_date ASC, id ASC
            "#,
        )
        .bind(course_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Enrollment::from).collect())
    }

    async fn create(&self, course_id: CourseId, student_id: UserId) -> Result<Enrollment, RepositoryError> {
        let row = sqlx::query_as::<_, EnrollmentRow>(
            r#"
            INSERT INTO enrollments (course_id, student_id)
            VALUES ($1, $2)
            RETURNING id, course_id, student_id, enroll_date
            "#,
        )
        .bind(course_id.value())
        .bind(student_id.value())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "enrollments"))?;

        Ok(Enrollment::from(row))
    }

    async fn delete(&self, course_id: CourseId, student_id: UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM enrollments WHERE course_id = $1 AND student_id = $2")
            .bind(course_id.value())
            .bind(student_id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

//! PostgreSQL Assignment Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::AssignmentRepository;
use crate::domain::models::{Assignment, AssignmentId, CourseId, NewAssignment};
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct AssignmentRow {
    id: i64,
    course_id: i64,
    name: String,
    due_date: DateTime<Utc>,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<AssignmentRow> for Assignment {
    fn from(row: AssignmentRow) -> Self {
        Assignment::restore(
            AssignmentId::new(row.id),
            CourseId::new(row.course_id),
            row.name,
            row.due_date,
            row.description,
            row.created_at,
        )
    }
}

/// PostgreSQL implementation of AssignmentRepository
pub struct PostgresAssignmentRepository {
    pool: PgPool,
}

impl PostgresAssignmentRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentRepository for PostgresAssignmentRepository {
    async fn find_in_course(
        &self,
        course_id: CourseId,
        id: AssignmentId,
    ) -> Result<Option<Assignment>, RepositoryError> {
        let row = sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT id, course_id, name, due_date, description, created_at
            FROM assignments
            WHERE id = $1 AND course_id = $2
            "#,
        )
        .bind(id.value())
        .bind(course_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Assignment::from))
    }

    async fn find_by_course(&self, course_id: CourseId) -> Result<Vec<Assignment>, RepositoryError> {
        let rows = sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT id, course_id, name, due_date, description, created_at
            FROM assignments
            WHERE course_id = $1
            ORDER BY due_date ASC, id ASC
            "#,
        )
        .bind(course_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Assignment::from).collect())
    }

    async fn create(&self, assignment: &NewAssignment) -> Result<Assignment, RepositoryError> {
        let row = sqlx::query_as::<_, AssignmentRow>(
            r#"
            INSERT INTO assignments (course_id, name, due_date, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, course_id, name, due_date, description, created_at
            "#,
        )
        .bind(assignment.course_id.value())
        .bind(&assignment.name)
        .bind(assignment.due_date)
        .bind(&assignment.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(Assignment::from(row))
    }
}

//! PostgreSQL Course Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::CourseRepository;
use crate::domain::models::{Course, CourseId, NewCourse, UserId};
use crate::shared::errors::RepositoryError;

/// Database row representation for courses table
#[derive(Debug, sqlx::FromRow)]
struct CourseRow {
    id: i64,
    title: String,
    description: Option<String>,
    teacher_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course::restore(
            CourseId::new(row.id),
            row.title,
            row.description,
            UserId::new(row.teacher_id),
            row.created_at,
            row.updated_at,
        )
    }
}

/// PostgreSQL implementation of CourseRepository
pub struct PostgresCourseRepository {
    pool: PgPool,
}

impl PostgresCourseRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, RepositoryError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, title, description, teacher_id, created_at, updated_at
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Course::from))
    }

    async fn find_owned(&self, id: CourseId, teacher_id: UserId) -> Result<Option<Course>, RepositoryError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, title, description, teacher_id, created_at, updated_at
            FROM courses
            WHERE id = $1 AND teacher_id = $2
            "#,
        )
        .bind(id.value())
        .bind(teacher_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Course::from))
    }

    async fn find_by_teacher(&self, teacher_id: UserId) -> Result<Vec<Course>, RepositoryError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, title, description, teacher_id, created_at, updated_at
            FROM courses
            WHERE teacher_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(teacher_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn create(&self, course: &NewCourse) -> Result<Course, RepositoryError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            INSERT INTO courses (title, description, teacher_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, teacher_id, created_at, updated_at
            "#,
        )
        .bind(&course.title)
        .bind(&course.description)
        .bind(course.teacher_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(Course::from(row))
    }

    async fn update(&self, course: &Course) -> Result<Option<Course>, RepositoryError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            UPDATE courses
            SET title = $2,
                description = $3,
                updated_at = $4
            WHERE id = $1
            RETURNING id, title, description, teacher_id, created_at, updated_at
            "#,
        )
        .bind(course.id().value())
        .bind(course.title())
        .bind(course.description())
        .bind(course.updated_at())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Course::from))
    }

    async fn delete(&self, id: CourseId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

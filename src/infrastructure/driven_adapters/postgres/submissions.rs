//! PostgreSQL Submission Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::gateways::SubmissionRepository;
use crate::domain::models::{AssignmentId, Grade, NewSubmission, Submission, SubmissionId, UserId};
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct SubmissionRow {
    id: i64,
    assignment_id: i64,
    student_id: i64,
    content: Option<String>,
    marks: Option<i32>,
    feedback: Option<String>,
    submission_date: DateTime<Utc>,
}

impl TryFrom<SubmissionRow> for Submission {
    type Error = RepositoryError;

    fn try_from(row: SubmissionRow) -> Result<Self, Self::Error> {
        let grade = Grade::new(row.marks, row.feedback)
            .map_err(|e| RepositoryError::Mapping(format!("Failed to restore grade: {}", e)))?;

        Ok(Submission::restore(
            SubmissionId::new(row.id),
            AssignmentId::new(row.assignment_id),
            UserId::new(row.student_id),
            row.content,
            grade,
            row.submission_date,
        ))
    }
}

/// PostgreSQL implementation of SubmissionRepository
pub struct PostgresSubmissionRepository {
    pool: PgPool,
}

impl PostgresSubmissionRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for PostgresSubmissionRepository {
    async fn find(
        &self,
        assignment_id: AssignmentId,
        student_id: UserId,
    ) -> Result<Option<Submission>, RepositoryError> {
        let row = sqlx::query_as::<_, SubmissionRow>(
            r#"
            SELECT id, assignment_id, student_id, content, marks, feedback, submission_date
            FROM submissions
            WHERE assignment_id = $1 AND student_id = $2
            "#,
        )
        .bind(assignment_id.value())
        .bind(student_id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Submission::try_from).transpose()
    }

    async fn upsert(&self, submission: &NewSubmission) -> Result<Submission, RepositoryError> {
        let row = sqlx::query_as::<_, SubmissionRow>(
            r#"
            INSERT INTO submissions (assignment_id, student_id, content)
            VALUES ($1, $2, $3)
            ON CONFLICT (assignment_id, student_id) DO UPDATE
            SET content = EXCLUDED.content,
                marks = NULL,
                feedback = NULL,
                submission_date = NOW()
            RETURNING id, assignment_id, student_id, content, marks, feedback, submission_date
            "#,
        )
        .bind(submission.assignment_id.value())
        .bind(submission.student_id.value())
        .bind(&submission.content)
        .fetch_one(&self.pool)
        .await?;

        Submission::try_from(row)
    }

    async fn update_grade(&self, submission: &Submission) -> Result<Option<Submission>, RepositoryError> {
        let row = sqlx::query_as::<_, SubmissionRow>(
            r#"
            UPDATE submissions
            SET marks = $2,
                feedback = $3
            WHERE id = $1
            RETURNING id, assignment_id, student_id, content, marks, feedback, submission_date
            "#,
        )
        .bind(submission.id().value())
        .bind(submission.grade().marks())
        .bind(submission.grade().feedback())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Submission::try_from).transpose()
    }
}

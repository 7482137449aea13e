//! PostgreSQL Repository Implementation
//!
//! One row per question; answers are embedded as an ordered JSONB array
//! so the aggregate is read and written as a single unit. Vote counts
//! are incremented inside the database with a targeted per-element
//! update keyed by answer id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use kernel::id::{AnswerId, QuestionId};

use crate::domain::question::{Answer, Question};
use crate::domain::repository::QuestionRepository;
use crate::error::{QuestionError, QuestionResult};

/// PostgreSQL-backed question repository
#[derive(Clone)]
pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const QUESTION_COLUMNS: &str = r#"
    question_id,
    title,
    description,
    tags,
    asked_by,
    answers,
    created_at,
    updated_at
"#;

impl QuestionRepository for PgQuestionRepository {
    async fn create(&self, question: &Question) -> QuestionResult<()> {
        let answers: Vec<AnswerDoc> = question.answers.iter().map(AnswerDoc::from_answer).collect();

        sqlx::query(
            r#"
            INSERT INTO questions (
                question_id,
                title,
                description,
                tags,
                asked_by,
                answers,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(question.question_id.as_uuid())
        .bind(&question.title)
        .bind(&question.description)
        .bind(&question.tags)
        .bind(&question.asked_by)
        .bind(Json(answers))
        .bind(question.created_at)
        .bind(question.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, question_id: &QuestionId) -> QuestionResult<Option<Question>> {
        let row = sqlx::query_as::<_, QuestionRow>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE question_id = $1"
        ))
        .bind(question_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(QuestionRow::into_question))
    }

    async fn list_all(&self) -> QuestionResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(QuestionRow::into_question).collect())
    }

    async fn update_answers(&self, question: &Question) -> QuestionResult<()> {
        let answers: Vec<AnswerDoc> = question.answers.iter().map(AnswerDoc::from_answer).collect();

        let result = sqlx::query(
            r#"
            UPDATE questions SET
                answers = $2,
                updated_at = $3
            WHERE question_id = $1
            "#,
        )
        .bind(question.question_id.as_uuid())
        .bind(Json(answers))
        .bind(question.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(QuestionError::QuestionNotFound);
        }

        Ok(())
    }

    async fn increment_votes(
        &self,
        question_id: &QuestionId,
        answer_id: &AnswerId,
        delta: i64,
    ) -> QuestionResult<Option<Answer>> {
        // Single statement: the matching array element is rewritten in
        // place and the post-update element is returned, so concurrent
        // votes serialize on the row instead of racing a
        // read-modify-write in the application.
        let updated = sqlx::query_scalar::<_, Json<AnswerDoc>>(
            r#"
            UPDATE questions SET
                answers = (
                    SELECT COALESCE(
                        jsonb_agg(
                            CASE WHEN elem->>'answerId' = $2
                                 THEN jsonb_set(elem, '{votes}', to_jsonb((elem->>'votes')::bigint + $3))
                                 ELSE elem
                            END
                            ORDER BY ord
                        ),
                        '[]'::jsonb
                    )
                    FROM jsonb_array_elements(answers) WITH ORDINALITY AS a(elem, ord)
                ),
                updated_at = $4
            WHERE question_id = $1
              AND EXISTS (
                  SELECT 1 FROM jsonb_array_elements(answers) AS a(elem)
                  WHERE elem->>'answerId' = $2
              )
            RETURNING (
                SELECT elem FROM jsonb_array_elements(answers) AS a(elem)
                WHERE elem->>'answerId' = $2
            )
            "#,
        )
        .bind(question_id.as_uuid())
        .bind(answer_id.to_string())
        .bind(delta)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated.map(|doc| doc.0.into_answer()))
    }

    async fn find_asked_by(&self, username: &str) -> QuestionResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE asked_by = $1 ORDER BY created_at DESC"
        ))
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(QuestionRow::into_question).collect())
    }

    async fn find_answered_by(&self, username: &str) -> QuestionResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(&format!(
            r#"
            SELECT {QUESTION_COLUMNS} FROM questions
            WHERE EXISTS (
                SELECT 1 FROM jsonb_array_elements(answers) AS a(elem)
                WHERE elem->>'answeredBy' = $1
            )
            ORDER BY created_at DESC
            "#
        ))
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(QuestionRow::into_question).collect())
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct QuestionRow {
    question_id: Uuid,
    title: String,
    description: String,
    tags: Vec<String>,
    asked_by: String,
    answers: Json<Vec<AnswerDoc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl QuestionRow {
    fn into_question(self) -> Question {
        Question {
            question_id: QuestionId::from_uuid(self.question_id),
            title: self.title,
            description: self.description,
            tags: self.tags,
            asked_by: self.asked_by,
            answers: self
                .answers
                .0
                .into_iter()
                .map(AnswerDoc::into_answer)
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Answer as stored inside the `answers` JSONB array
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswerDoc {
    answer_id: Uuid,
    text: String,
    answered_by: String,
    votes: i64,
    is_accepted: bool,
    created_at: DateTime<Utc>,
}

impl AnswerDoc {
    fn from_answer(answer: &Answer) -> Self {
        Self {
            answer_id: answer.answer_id.into_uuid(),
            text: answer.text.clone(),
            answered_by: answer.answered_by.clone(),
            votes: answer.votes,
            is_accepted: answer.is_accepted,
            created_at: answer.created_at,
        }
    }

    fn into_answer(self) -> Answer {
        Answer {
            answer_id: AnswerId::from_uuid(self.answer_id),
            text: self.text,
            answered_by: self.answered_by,
            votes: self.votes,
            is_accepted: self.is_accepted,
            created_at: self.created_at,
        }
    }
}

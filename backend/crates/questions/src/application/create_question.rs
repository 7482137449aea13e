//! Create Question Use Case

use std::sync::Arc;

use crate::domain::question::Question;
use crate::domain::repository::QuestionRepository;
use crate::error::{QuestionError, QuestionResult};

/// Create question input
///
/// `asked_by` comes from the authenticated caller identity, never from
/// the request body.
pub struct CreateQuestionInput {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub asked_by: String,
}

/// Create question use case
pub struct CreateQuestionUseCase<R>
where
    R: QuestionRepository,
{
    repo: Arc<R>,
}

impl<R> CreateQuestionUseCase<R>
where
    R: QuestionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateQuestionInput) -> QuestionResult<Question> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(QuestionError::Validation(
                "Title must not be empty".to_string(),
            ));
        }

        let description = input.description.trim().to_string();
        if description.is_empty() {
            return Err(QuestionError::Validation(
                "Description must not be empty".to_string(),
            ));
        }

        let question = Question::new(title, description, input.tags, input.asked_by);

        self.repo.create(&question).await?;

        tracing::info!(
            question_id = %question.question_id,
            asked_by = %question.asked_by,
            "Question created"
        );

        Ok(question)
    }
}

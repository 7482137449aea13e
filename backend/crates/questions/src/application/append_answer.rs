//! Append Answer Use Case

use std::sync::Arc;

use kernel::id::QuestionId;

use crate::domain::question::{Answer, Question};
use crate::domain::repository::QuestionRepository;
use crate::error::{QuestionError, QuestionResult};

/// Append answer input
///
/// `answered_by` comes from the authenticated caller identity, never
/// from the request body.
pub struct AppendAnswerInput {
    pub question_id: QuestionId,
    pub text: String,
    pub answered_by: String,
}

/// Append answer use case
pub struct AppendAnswerUseCase<R>
where
    R: QuestionRepository,
{
    repo: Arc<R>,
}

impl<R> AppendAnswerUseCase<R>
where
    R: QuestionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Append a new answer and return the updated question
    pub async fn execute(&self, input: AppendAnswerInput) -> QuestionResult<Question> {
        let text = input.text.trim().to_string();
        if text.is_empty() {
            return Err(QuestionError::Validation(
                "Answer text must not be empty".to_string(),
            ));
        }

        let mut question = self
            .repo
            .find_by_id(&input.question_id)
            .await?
            .ok_or(QuestionError::QuestionNotFound)?;

        let answer = Answer::new(text, input.answered_by);
        let answer_id = answer.answer_id;
        question.append_answer(answer);

        // The whole aggregate is persisted as one write
        self.repo.update_answers(&question).await?;

        tracing::info!(
            question_id = %question.question_id,
            answer_id = %answer_id,
            "Answer added"
        );

        Ok(question)
    }
}

//! Accept Answer Use Case

use std::sync::Arc;

use kernel::id::{AnswerId, QuestionId};

use crate::domain::question::Answer;
use crate::domain::repository::QuestionRepository;
use crate::error::{QuestionError, QuestionResult};

/// Accept answer use case
///
/// Any caller may accept, not just the asker; the route is deliberately
/// unrestricted. Re-accepting a different answer moves the flag.
pub struct AcceptAnswerUseCase<R>
where
    R: QuestionRepository,
{
    repo: Arc<R>,
}

impl<R> AcceptAnswerUseCase<R>
where
    R: QuestionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Accept one answer and return it
    pub async fn execute(
        &self,
        question_id: &QuestionId,
        answer_id: &AnswerId,
    ) -> QuestionResult<Answer> {
        let mut question = self
            .repo
            .find_by_id(question_id)
            .await?
            .ok_or(QuestionError::QuestionNotFound)?;

        let accepted = question.accept_answer(answer_id)?.clone();

        // Clear-then-set reaches the store as one write of the whole
        // answer sequence; concurrent readers never observe zero or two
        // accepted answers.
        self.repo.update_answers(&question).await?;

        tracing::info!(
            question_id = %question.question_id,
            answer_id = %accepted.answer_id,
            "Answer accepted"
        );

        Ok(accepted)
    }
}

//! Cast Vote Use Case

use std::sync::Arc;

use kernel::id::{AnswerId, QuestionId};

use crate::domain::question::Answer;
use crate::domain::repository::QuestionRepository;
use crate::domain::vote::VoteType;
use crate::error::{QuestionError, QuestionResult};

/// Cast vote input
pub struct CastVoteInput {
    pub question_id: QuestionId,
    pub answer_id: AnswerId,
    /// Wire value; must be "up" or "down"
    pub vote_type: String,
}

/// Cast vote use case
///
/// Voting is not attributed or deduplicated: the same caller may vote
/// on the same answer repeatedly and every vote counts.
pub struct CastVoteUseCase<R>
where
    R: QuestionRepository,
{
    repo: Arc<R>,
}

impl<R> CastVoteUseCase<R>
where
    R: QuestionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Apply a vote and return the updated answer
    pub async fn execute(&self, input: CastVoteInput) -> QuestionResult<Answer> {
        let vote = VoteType::parse(&input.vote_type).ok_or_else(|| {
            QuestionError::Validation("voteType must be \"up\" or \"down\"".to_string())
        })?;

        // Load first so an unknown question and an unknown answer fail
        // with distinct messages before any write is attempted.
        let question = self
            .repo
            .find_by_id(&input.question_id)
            .await?
            .ok_or(QuestionError::QuestionNotFound)?;

        if question.answer(&input.answer_id).is_none() {
            return Err(QuestionError::AnswerNotFound);
        }

        // The counter is incremented at the store level; concurrent
        // votes on the same answer are never lost to read-modify-write.
        let updated = self
            .repo
            .increment_votes(&input.question_id, &input.answer_id, vote.delta())
            .await?
            .ok_or(QuestionError::AnswerNotFound)?;

        tracing::debug!(
            question_id = %input.question_id,
            answer_id = %input.answer_id,
            vote = %vote,
            votes = updated.votes,
            "Vote applied"
        );

        Ok(updated)
    }
}

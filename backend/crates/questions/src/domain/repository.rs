//! Repository Trait
//!
//! Interface for question persistence. Implementation is in the
//! infrastructure layer. The store is the only shared mutable resource;
//! reads take no locks.

use kernel::id::{AnswerId, QuestionId};

use crate::domain::question::{Answer, Question};
use crate::error::QuestionResult;

/// Question repository trait
#[trait_variant::make(QuestionRepository: Send)]
pub trait LocalQuestionRepository {
    /// Persist a new question
    async fn create(&self, question: &Question) -> QuestionResult<()>;

    /// Find a question by id
    async fn find_by_id(&self, question_id: &QuestionId) -> QuestionResult<Option<Question>>;

    /// All questions, most recently created first
    async fn list_all(&self) -> QuestionResult<Vec<Question>>;

    /// Write a question's answer sequence (and updated_at) in one unit
    ///
    /// Used by append and accept: the whole aggregate's answers are
    /// persisted as a single write so no partial state is observable.
    async fn update_answers(&self, question: &Question) -> QuestionResult<()>;

    /// Atomically add `delta` to one answer's vote counter
    ///
    /// Returns the updated answer, or `None` if the question or answer
    /// id is unknown. The increment happens at the store level so
    /// concurrent votes on the same answer are never lost.
    async fn increment_votes(
        &self,
        question_id: &QuestionId,
        answer_id: &AnswerId,
        delta: i64,
    ) -> QuestionResult<Option<Answer>>;

    /// Questions asked by a username, most recent first
    async fn find_asked_by(&self, username: &str) -> QuestionResult<Vec<Question>>;

    /// Questions containing at least one answer by a username,
    /// most recent first
    async fn find_answered_by(&self, username: &str) -> QuestionResult<Vec<Question>>;
}

//! Question Queries
//!
//! Read-only listing and filtering. No locks are taken and no state is
//! mutated.

use std::sync::Arc;

use kernel::id::QuestionId;

use crate::domain::question::Question;
use crate::domain::repository::QuestionRepository;
use crate::error::{QuestionError, QuestionResult};

/// A user's activity: questions they asked and questions they answered
///
/// A question answered by its own asker appears in both sequences;
/// the overlap is expected.
pub struct ProfileActivity {
    pub asked: Vec<Question>,
    pub answered: Vec<Question>,
}

/// Read-only query service
pub struct QuestionQueries<R>
where
    R: QuestionRepository,
{
    repo: Arc<R>,
}

impl<R> QuestionQueries<R>
where
    R: QuestionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All questions, most recently created first
    pub async fn list(&self) -> QuestionResult<Vec<Question>> {
        self.repo.list_all().await
    }

    /// A single question by id
    pub async fn get(&self, question_id: &QuestionId) -> QuestionResult<Question> {
        self.repo
            .find_by_id(question_id)
            .await?
            .ok_or(QuestionError::QuestionNotFound)
    }

    /// Questions asked and answered by a username
    pub async fn profile_activity(&self, username: &str) -> QuestionResult<ProfileActivity> {
        let asked = self.repo.find_asked_by(username).await?;
        let answered = self.repo.find_answered_by(username).await?;

        Ok(ProfileActivity { asked, answered })
    }
}

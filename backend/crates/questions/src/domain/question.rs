//! Question/Answer Aggregate
//!
//! A question exclusively owns its answers: answers have no identity or
//! lifecycle outside their parent question, and every mutation goes
//! through the aggregate so its invariants hold on each persisted state.
//!
//! ## Invariant
//! At most one answer per question has `is_accepted = true` at any time.

use chrono::{DateTime, Utc};
use kernel::id::{AnswerId, QuestionId};

use crate::error::QuestionError;

/// Answer entity, embedded in its parent question
#[derive(Debug, Clone)]
pub struct Answer {
    /// Unique within the parent question
    pub answer_id: AnswerId,
    pub text: String,
    /// Username captured from the authenticated caller at creation
    pub answered_by: String,
    /// Signed, unbounded; repeated votes accumulate
    pub votes: i64,
    pub is_accepted: bool,
    pub created_at: DateTime<Utc>,
}

impl Answer {
    /// Create a new answer (zero votes, not accepted)
    pub fn new(text: impl Into<String>, answered_by: impl Into<String>) -> Self {
        Self {
            answer_id: AnswerId::new(),
            text: text.into(),
            answered_by: answered_by.into(),
            votes: 0,
            is_accepted: false,
            created_at: Utc::now(),
        }
    }
}

/// Question aggregate root
#[derive(Debug, Clone)]
pub struct Question {
    pub question_id: QuestionId,
    pub title: String,
    pub description: String,
    /// Order-insignificant set of tags (deduplicated, no empties)
    pub tags: Vec<String>,
    /// Username captured from the authenticated caller at creation;
    /// not re-validated against the live user later
    pub asked_by: String,
    /// Ordered, append-only
    pub answers: Vec<Answer>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    /// Create a new question with no answers
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        asked_by: impl Into<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            question_id: QuestionId::new(),
            title: title.into(),
            description: description.into(),
            tags: normalize_tags(tags),
            asked_by: asked_by.into(),
            answers: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Look up an answer by id
    pub fn answer(&self, answer_id: &AnswerId) -> Option<&Answer> {
        self.answers.iter().find(|a| &a.answer_id == answer_id)
    }

    /// Append an answer to the end of the sequence
    ///
    /// Existing answers are never reordered or removed.
    pub fn append_answer(&mut self, answer: Answer) {
        self.answers.push(answer);
        self.touch();
    }

    /// Mark one answer as accepted
    ///
    /// Clears the acceptance flag on every answer, then sets it on the
    /// target, as one in-memory mutation; the caller persists the whole
    /// aggregate in a single write so no intermediate state with zero
    /// or two accepted answers is ever observable.
    ///
    /// Fails with [`QuestionError::AnswerNotFound`] (without mutating
    /// anything) if the id is unknown. Re-accepting a different answer
    /// moves the flag; there is no un-accept operation.
    pub fn accept_answer(&mut self, answer_id: &AnswerId) -> Result<&Answer, QuestionError> {
        let target = self
            .answers
            .iter()
            .position(|a| &a.answer_id == answer_id)
            .ok_or(QuestionError::AnswerNotFound)?;

        for answer in &mut self.answers {
            answer.is_accepted = false;
        }
        self.answers[target].is_accepted = true;
        self.touch();

        Ok(&self.answers[target])
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Trim tags, drop empties, and deduplicate keeping first occurrence
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_string();
        if tag.is_empty() || normalized.contains(&tag) {
            continue;
        }
        normalized.push(tag);
    }
    normalized
}

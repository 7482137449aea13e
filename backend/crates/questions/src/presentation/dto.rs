//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::queries::ProfileActivity;
use crate::domain::question::{Answer, Question};

// ============================================================================
// Requests
// ============================================================================

/// Create question request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Post answer request
///
/// The author is taken from the authenticated caller, so the body only
/// carries the text.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAnswerRequest {
    pub text: String,
}

/// Vote request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    /// "up" or "down"
    pub vote_type: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Answer as serialized in responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub id: String,
    pub text: String,
    pub answered_by: String,
    pub votes: i64,
    pub is_accepted: bool,
    pub created_at: DateTime<Utc>,
}

impl AnswerResponse {
    pub fn from_answer(answer: &Answer) -> Self {
        Self {
            id: answer.answer_id.to_string(),
            text: answer.text.clone(),
            answered_by: answer.answered_by.clone(),
            votes: answer.votes,
            is_accepted: answer.is_accepted,
            created_at: answer.created_at,
        }
    }
}

/// Question as serialized in responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub asked_by: String,
    pub answers: Vec<AnswerResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl QuestionResponse {
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.question_id.to_string(),
            title: question.title.clone(),
            description: question.description.clone(),
            tags: question.tags.clone(),
            asked_by: question.asked_by.clone(),
            answers: question
                .answers
                .iter()
                .map(AnswerResponse::from_answer)
                .collect(),
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }
}

/// Response after posting an answer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPostedResponse {
    pub message: String,
    pub question: QuestionResponse,
}

/// Response after a vote or an accept
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerUpdatedResponse {
    pub message: String,
    pub answer: AnswerResponse,
}

/// Response for a user's profile activity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileActivityResponse {
    /// Questions the user asked
    pub questions: Vec<QuestionResponse>,
    /// Questions the user answered (may overlap with `questions`)
    pub answered: Vec<QuestionResponse>,
}

impl ProfileActivityResponse {
    pub fn from_activity(activity: &ProfileActivity) -> Self {
        Self {
            questions: activity
                .asked
                .iter()
                .map(QuestionResponse::from_question)
                .collect(),
            answered: activity
                .answered
                .iter()
                .map(QuestionResponse::from_question)
                .collect(),
        }
    }
}

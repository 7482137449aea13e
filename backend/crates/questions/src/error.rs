//! Question Error Types
//!
//! This module provides question-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Question-specific result type alias
pub type QuestionResult<T> = Result<T, QuestionError>;

/// Question-specific error variants
#[derive(Debug, Error)]
pub enum QuestionError {
    /// Referenced question id does not exist
    #[error("Question not found")]
    QuestionNotFound,

    /// Referenced answer id does not exist within the question
    #[error("Answer not found")]
    AnswerNotFound,

    /// Request field failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QuestionError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            QuestionError::QuestionNotFound | QuestionError::AnswerNotFound => {
                StatusCode::NOT_FOUND
            }
            QuestionError::Validation(_) => StatusCode::BAD_REQUEST,
            QuestionError::Database(_) | QuestionError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QuestionError::QuestionNotFound | QuestionError::AnswerNotFound => ErrorKind::NotFound,
            QuestionError::Validation(_) => ErrorKind::BadRequest,
            QuestionError::Database(_) | QuestionError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            QuestionError::Database(e) => {
                tracing::error!(error = %e, "Question database error");
            }
            QuestionError::Internal(msg) => {
                tracing::error!(message = %msg, "Question internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Question error");
            }
        }
    }
}

impl IntoResponse for QuestionError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for QuestionError {
    fn from(err: AppError) -> Self {
        QuestionError::Internal(err.to_string())
    }
}

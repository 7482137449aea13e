//! Application Layer
//!
//! Use cases for aggregate mutations plus the read-only query service.

pub mod accept_answer;
pub mod append_answer;
pub mod cast_vote;
pub mod create_question;
pub mod queries;

// Re-exports
pub use accept_answer::AcceptAnswerUseCase;
pub use append_answer::{AppendAnswerInput, AppendAnswerUseCase};
pub use cast_vote::{CastVoteInput, CastVoteUseCase};
pub use create_question::{CreateQuestionInput, CreateQuestionUseCase};
pub use queries::{ProfileActivity, QuestionQueries};

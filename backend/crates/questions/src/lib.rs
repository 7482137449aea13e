//! Questions Backend Module
//!
//! The Question/Answer aggregate: questions own an ordered collection of
//! embedded answers, with voting and single-accepted-answer state
//! transitions.
//!
//! Clean Architecture structure:
//! - `domain/` - Aggregate, value objects, repository trait
//! - `application/` - Use cases (mutations) and read-only queries
//! - `infra/` - PostgreSQL implementation (answers embedded as JSONB)
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Consistency Model
//! - A question and its answers form one write unit; accepting an
//!   answer clears every other acceptance flag and persists the whole
//!   aggregate in a single write
//! - Vote counts are incremented atomically at the store level, so
//!   concurrent votes on the same answer are never lost
//! - Repeated votes by the same caller accumulate; there is no
//!   duplicate-vote or self-vote restriction

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{QuestionError, QuestionResult};
pub use infra::postgres::PgQuestionRepository;
pub use presentation::router::questions_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::question::*;
    pub use crate::domain::vote::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgQuestionRepository as QuestionStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;

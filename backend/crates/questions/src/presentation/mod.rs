//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::QuestionsAppState;
pub use router::{questions_router, questions_router_generic};

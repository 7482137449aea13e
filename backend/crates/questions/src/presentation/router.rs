//! Questions Router
//!
//! Public routes (reads plus accept) are merged with bearer-protected
//! routes (create, answer, vote); the protected sub-router runs behind
//! the auth gate from the auth crate.

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::infra::postgres::PgAuthRepository;
use auth::presentation::middleware::{AuthGateState, require_auth};

use crate::domain::repository::QuestionRepository;
use crate::infra::postgres::PgQuestionRepository;
use crate::presentation::handlers::{self, QuestionsAppState};

/// Create the Questions router with PostgreSQL repositories
pub fn questions_router(
    repo: PgQuestionRepository,
    gate: AuthGateState<PgAuthRepository>,
) -> Router {
    questions_router_generic(repo, gate)
}

/// Create a generic Questions router for any repository implementations
pub fn questions_router_generic<R, U>(repo: R, gate: AuthGateState<U>) -> Router
where
    R: QuestionRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = QuestionsAppState {
        repo: Arc::new(repo),
    };

    // Accept is deliberately public: any caller, not just the asker,
    // may accept an answer.
    let public = Router::new()
        .route("/", get(handlers::list_questions::<R>))
        .route("/{id}", get(handlers::get_question::<R>))
        .route(
            "/{id}/answers/{answer_id}/accept",
            put(handlers::accept_answer::<R>),
        )
        .route("/user/{username}", get(handlers::profile_activity::<R>));

    let protected = Router::new()
        .route("/", post(handlers::create_question::<R>))
        .route("/{id}/answers", post(handlers::post_answer::<R>))
        .route(
            "/{id}/answers/{answer_id}/vote",
            put(handlers::cast_vote::<R>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_auth::<U>));

    public.merge(protected).with_state(state)
}

//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use kernel::id::{AnswerId, QuestionId};
use kernel::identity::CallerIdentity;

use crate::application::{
    AcceptAnswerUseCase, AppendAnswerInput, AppendAnswerUseCase, CastVoteInput, CastVoteUseCase,
    CreateQuestionInput, CreateQuestionUseCase, QuestionQueries,
};
use crate::domain::repository::QuestionRepository;
use crate::error::QuestionResult;
use crate::presentation::dto::{
    AnswerPostedResponse, AnswerResponse, AnswerUpdatedResponse, CreateQuestionRequest,
    PostAnswerRequest, ProfileActivityResponse, QuestionResponse, VoteRequest,
};

/// Shared state for question handlers
#[derive(Clone)]
pub struct QuestionsAppState<R>
where
    R: QuestionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Create Question
// ============================================================================

/// POST /api/questions
pub async fn create_question<R>(
    State(state): State<QuestionsAppState<R>>,
    Extension(caller): Extension<CallerIdentity>,
    Json(req): Json<CreateQuestionRequest>,
) -> QuestionResult<impl IntoResponse>
where
    R: QuestionRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateQuestionUseCase::new(state.repo.clone());

    let input = CreateQuestionInput {
        title: req.title,
        description: req.description,
        tags: req.tags,
        asked_by: caller.username,
    };

    let question = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(QuestionResponse::from_question(&question)),
    ))
}

// ============================================================================
// List / Get
// ============================================================================

/// GET /api/questions
pub async fn list_questions<R>(
    State(state): State<QuestionsAppState<R>>,
) -> QuestionResult<Json<Vec<QuestionResponse>>>
where
    R: QuestionRepository + Clone + Send + Sync + 'static,
{
    let queries = QuestionQueries::new(state.repo.clone());

    let questions = queries.list().await?;

    Ok(Json(
        questions.iter().map(QuestionResponse::from_question).collect(),
    ))
}

/// GET /api/questions/{id}
pub async fn get_question<R>(
    State(state): State<QuestionsAppState<R>>,
    Path(id): Path<Uuid>,
) -> QuestionResult<Json<QuestionResponse>>
where
    R: QuestionRepository + Clone + Send + Sync + 'static,
{
    let queries = QuestionQueries::new(state.repo.clone());

    let question = queries.get(&QuestionId::from_uuid(id)).await?;

    Ok(Json(QuestionResponse::from_question(&question)))
}

// ============================================================================
// Post Answer
// ============================================================================

/// POST /api/questions/{id}/answers
pub async fn post_answer<R>(
    State(state): State<QuestionsAppState<R>>,
    Path(id): Path<Uuid>,
    Extension(caller): Extension<CallerIdentity>,
    Json(req): Json<PostAnswerRequest>,
) -> QuestionResult<impl IntoResponse>
where
    R: QuestionRepository + Clone + Send + Sync + 'static,
{
    let use_case = AppendAnswerUseCase::new(state.repo.clone());

    let input = AppendAnswerInput {
        question_id: QuestionId::from_uuid(id),
        text: req.text,
        answered_by: caller.username,
    };

    let question = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(AnswerPostedResponse {
            message: "Answer added successfully".to_string(),
            question: QuestionResponse::from_question(&question),
        }),
    ))
}

// ============================================================================
// Vote
// ============================================================================

/// PUT /api/questions/{id}/answers/{answer_id}/vote
pub async fn cast_vote<R>(
    State(state): State<QuestionsAppState<R>>,
    Path((id, answer_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<VoteRequest>,
) -> QuestionResult<Json<AnswerUpdatedResponse>>
where
    R: QuestionRepository + Clone + Send + Sync + 'static,
{
    let use_case = CastVoteUseCase::new(state.repo.clone());

    let input = CastVoteInput {
        question_id: QuestionId::from_uuid(id),
        answer_id: AnswerId::from_uuid(answer_id),
        vote_type: req.vote_type,
    };

    let answer = use_case.execute(input).await?;

    Ok(Json(AnswerUpdatedResponse {
        message: "Vote updated".to_string(),
        answer: AnswerResponse::from_answer(&answer),
    }))
}

// ============================================================================
// Accept
// ============================================================================

/// PUT /api/questions/{id}/answers/{answer_id}/accept
pub async fn accept_answer<R>(
    State(state): State<QuestionsAppState<R>>,
    Path((id, answer_id)): Path<(Uuid, Uuid)>,
) -> QuestionResult<Json<AnswerUpdatedResponse>>
where
    R: QuestionRepository + Clone + Send + Sync + 'static,
{
    let use_case = AcceptAnswerUseCase::new(state.repo.clone());

    let answer = use_case
        .execute(
            &QuestionId::from_uuid(id),
            &AnswerId::from_uuid(answer_id),
        )
        .await?;

    Ok(Json(AnswerUpdatedResponse {
        message: "Answer accepted".to_string(),
        answer: AnswerResponse::from_answer(&answer),
    }))
}

// ============================================================================
// Profile Activity
// ============================================================================

/// GET /api/questions/user/{username}
pub async fn profile_activity<R>(
    State(state): State<QuestionsAppState<R>>,
    Path(username): Path<String>,
) -> QuestionResult<Json<ProfileActivityResponse>>
where
    R: QuestionRepository + Clone + Send + Sync + 'static,
{
    let queries = QuestionQueries::new(state.repo.clone());

    let activity = queries.profile_activity(&username).await?;

    Ok(Json(ProfileActivityResponse::from_activity(&activity)))
}

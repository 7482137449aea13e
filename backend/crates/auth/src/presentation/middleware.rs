//! Auth Middleware
//!
//! The auth gate: middleware for routes that mutate on behalf of a
//! caller. Verifies the bearer credential, loads the user, and attaches
//! a [`CallerIdentity`] to the request for downstream handlers.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::AuthenticateUseCase;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
}

/// Middleware that requires a valid bearer token
///
/// On success the request carries a `CallerIdentity` extension; on any
/// failure (no header, bad scheme, bad token, deleted user) the request
/// is rejected with 401 and never reaches the handler. No stored state
/// is mutated; the only side effect is one credential-store read.
pub async fn require_auth<R>(
    State(state): State<AuthGateState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = match extract_bearer(req.headers()) {
        Ok(token) => token,
        Err(e) => return Err(e.into_response()),
    };

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.tokens.clone());

    let caller = match use_case.execute(token).await {
        Ok(caller) => caller,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(caller);

    Ok(next.run(req).await)
}

/// Extract the bearer credential from the Authorization header
///
/// Fails with [`AuthError::MissingCredential`] if the header is absent,
/// not valid ASCII, or does not use the bearer scheme.
pub fn extract_bearer(headers: &HeaderMap) -> AuthResult<&str> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?;

    let header = header.to_str().map_err(|_| AuthError::MissingCredential)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingCredential)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MissingCredential);
    }

    Ok(token)
}

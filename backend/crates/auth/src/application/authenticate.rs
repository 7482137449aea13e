//! Authenticate Use Case
//!
//! Turns a presented bearer token into a verified [`CallerIdentity`]:
//! verify the token, then load the referenced user from the credential
//! store (one read, no writes). A token whose user has been deleted is
//! rejected the same way as a bad token.

use std::sync::Arc;

use kernel::identity::CallerIdentity;

use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Authenticate use case
pub struct AuthenticateUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> AuthenticateUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<CallerIdentity> {
        let claims = self.tokens.verify(token)?;

        let user = self
            .repo
            .find_by_id(&UserId::from_uuid(claims.sub))
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(CallerIdentity {
            user_id: user.user_id.into_uuid(),
            username: user.username.into_db(),
            email: user.email.into_db(),
        })
    }
}

//! Register Use Case
//!
//! Creates a new user account and issues its first token.

use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub token: String,
    pub user_id: String,
    pub username: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate identity fields
        let username = UserName::new(&input.username)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let email = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Uniqueness checks
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }
        if self.repo.exists_by_username(&username).await? {
            return Err(AuthError::UserNameTaken);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Create and persist
        let user = User::new(username, email, password_hash);
        self.repo.create(&user).await?;

        // Issue the first token so registration doubles as login
        let token = self.tokens.issue(&user.user_id, &user.username)?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(RegisterOutput {
            token,
            user_id: user.user_id.to_string(),
            username: user.username.into_db(),
        })
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::Claims;
use auth::PasswordError;
use chrono::Duration;
use chrono::Utc;

use crate::domain::user::models::IssuedToken;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::AuthError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for registration and login.
///
/// Hashing and verification are CPU-bound and run on the blocking pool.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    token_ttl: Duration,
    // Verified against when the email is unknown, so both failure paths pay
    // for one hash verification.
    dummy_hash: String,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Hasher and token signer sharing the process-wide secret
    /// * `token_ttl` - Lifetime of issued tokens
    ///
    /// # Errors
    /// * `PasswordError` - The placeholder digest could not be produced
    pub fn new(
        repository: Arc<UR>,
        authenticator: Arc<Authenticator>,
        token_ttl: Duration,
    ) -> Result<Self, PasswordError> {
        let dummy_hash = authenticator.hash_password("placeholder-password")?;

        Ok(Self {
            repository,
            authenticator,
            token_ttl,
            dummy_hash,
        })
    }

    async fn hash_password(&self, password: Password) -> Result<String, AuthError> {
        let authenticator = Arc::clone(&self.authenticator);

        let hashed =
            tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
                .await
                .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;

        Ok(hashed?)
    }

    async fn reject_unknown_email(&self, password: Password) -> AuthError {
        let authenticator = Arc::clone(&self.authenticator);
        let dummy_hash = self.dummy_hash.clone();

        let outcome = tokio::task::spawn_blocking(move || {
            authenticator.verify_password(password.expose(), &dummy_hash)
        })
        .await;

        match outcome {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Placeholder digest verification failed");
            }
            Err(e) => {
                tracing::error!(error = %e, "Placeholder digest verification task failed");
            }
        }

        AuthError::AuthenticationFailure
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError> {
        let password_hash = self.hash_password(command.password).await?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<IssuedToken, AuthError> {
        let Some(user) = self.repository.find_by_email(&command.email).await? else {
            tracing::debug!("Login attempt for unknown email");
            return Err(self.reject_unknown_email(command.password).await);
        };

        let claims = Claims::for_email(user.email.as_str(), self.token_ttl);
        let expires_at = claims.exp;

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let stored_hash = user.password_hash.clone();

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(password.expose(), &stored_hash, &claims)
        })
        .await
        .map_err(|e| PasswordError::VerificationFailed(e.to_string()))??;

        tracing::info!(user_id = %user.id, expires_at, "Token issued");

        Ok(IssuedToken {
            access_token: result.access_token,
            expires_at,
        })
    }
}

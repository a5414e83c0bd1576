use async_trait::async_trait;

use crate::domain::user::models::IssuedToken;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::user::errors::AuthError;

/// Port for the credential-issuance operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account. No token is issued.
    ///
    /// # Errors
    /// * `DuplicateAccount` - Email is already registered
    /// * `StorageFailure` - Database operation failed
    /// * `Password` - Hashing failed
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError>;

    /// Verify credentials and mint a bearer token.
    ///
    /// # Errors
    /// * `AuthenticationFailure` - Unknown email or wrong password
    /// * `StorageFailure` - Database operation failed
    /// * `Password` / `Token` - Verification or signing failed
    async fn login(&self, command: LoginCommand) -> Result<IssuedToken, AuthError>;
}

/// Persistence operations for user accounts (the credential store).
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `DuplicateAccount` - Email is already registered
    /// * `StorageFailure` - Database operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve user by exact (case-sensitive) email.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `StorageFailure` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;
}

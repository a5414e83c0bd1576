use thiserror::Error;

/// Boundary validation failures for incoming credentials
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
}

/// Top-level error for registration and login
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    // Unknown email and wrong password collapse into this single variant.
    #[error("Invalid credentials")]
    AuthenticationFailure,

    #[error("Account already exists for email: {0}")]
    DuplicateAccount(String),

    #[error("Storage failure: {0}")]
    StorageFailure(String),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] auth::JwtError),
}

impl From<auth::AuthenticationError> for AuthError {
    fn from(err: auth::AuthenticationError) -> Self {
        match err {
            auth::AuthenticationError::InvalidCredentials => AuthError::AuthenticationFailure,
            auth::AuthenticationError::PasswordError(e) => AuthError::Password(e),
            auth::AuthenticationError::JwtError(e) => AuthError::Token(e),
        }
    }
}

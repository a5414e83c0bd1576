use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::ValidationError;

/// Registered account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: DisplayName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display label for an account. Not unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    const MAX_LENGTH: usize = 100;

    /// Create a display name.
    ///
    /// Surrounding whitespace is trimmed before the checks.
    ///
    /// # Errors
    /// * `MissingField` - Name is empty or whitespace only
    /// * `TooLong` - Name is longer than 100 characters
    pub fn new(name: String) -> Result<Self, ValidationError> {
        let name = name.trim();
        let length = name.chars().count();

        if length == 0 {
            Err(ValidationError::MissingField("name"))
        } else if length > Self::MAX_LENGTH {
            Err(ValidationError::TooLong {
                field: "name",
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Kept exactly as supplied: no case folding and no trimming, so two
/// addresses are the same account only if they are byte-for-byte equal.
/// Display-name forms (`Alice <a@x.com>`) are rejected so the stored value is
/// always the bare address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `MissingField` - Email is empty
    /// * `InvalidEmail` - Email does not conform to RFC 5322 or carries display text
    pub fn new(email: String) -> Result<Self, ValidationError> {
        if email.is_empty() {
            return Err(ValidationError::MissingField("email"));
        }

        let options = email_address::Options::default().without_display_text();

        email_address::EmailAddress::parse_with_options(&email, options)
            .map(|_| EmailAddress(email))
            .map_err(|e| ValidationError::InvalidEmail(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password as received from the client.
///
/// Never printed: `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// # Errors
    /// * `MissingField` - Password is empty
    pub fn new(password: String) -> Result<Self, ValidationError> {
        if password.is_empty() {
            return Err(ValidationError::MissingField("password"));
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Command to register a new account
#[derive(Debug)]
pub struct RegisterCommand {
    pub name: DisplayName,
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterCommand {
    pub fn new(name: DisplayName, email: EmailAddress, password: Password) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

/// Command to exchange credentials for a token.
///
/// The email is not format-checked: a malformed address is simply an unknown
/// account.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: String,
    pub password: Password,
}

impl LoginCommand {
    /// # Errors
    /// * `MissingField` - Email or password is empty
    pub fn new(email: String, password: String) -> Result<Self, ValidationError> {
        if email.is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        Ok(Self {
            email,
            password: Password::new(password)?,
        })
    }
}

/// Bearer token minted by a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_at: i64,
}

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Payload carried by an issued bearer token.
///
/// Tokens are signed, not encrypted: everything in here is readable by any
/// holder of the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Account email the token was issued to
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Claims for `email` valid from now until `now + ttl`.
    pub fn for_email(email: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            email: email.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

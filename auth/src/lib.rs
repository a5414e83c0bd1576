//! Authentication utilities library
//!
//! Provides the credential primitives used by the auth service:
//! - Password hashing (Argon2id, tunable cost)
//! - JWT token generation and validation (HS256, expiry enforced on decode)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{HashCost, PasswordHasher};
//!
//! let hasher = PasswordHasher::with_cost(HashCost::new(1024, 1, 1)).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_email("a@x.com", Duration::hours(1));
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.email, "a@x.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims, HashCost};
//! use chrono::Duration;
//!
//! let auth = Authenticator::with_hash_cost(
//!     b"secret_key_at_least_32_bytes_long!",
//!     HashCost::new(1024, 1, 1),
//! )
//! .unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let claims = Claims::for_email("a@x.com", Duration::hours(1));
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Validate token
//! let decoded: Claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.email, "a@x.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::HashCost;
pub use password::PasswordError;
pub use password::PasswordHasher;

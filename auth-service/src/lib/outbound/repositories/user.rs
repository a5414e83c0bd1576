use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::AuthError;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: PgRow) -> Result<User, AuthError> {
        let storage = |e: sqlx::Error| AuthError::StorageFailure(e.to_string());
        let corrupt = |e: crate::user::errors::ValidationError| {
            AuthError::StorageFailure(format!("Corrupt user row: {}", e))
        };

        Ok(User {
            id: UserId(row.try_get("id").map_err(storage)?),
            name: DisplayName::new(row.try_get("name").map_err(storage)?).map_err(corrupt)?,
            email: EmailAddress::new(row.try_get("email").map_err(storage)?).map_err(corrupt)?,
            password_hash: row.try_get("password_hash").map_err(storage)?,
            created_at: row.try_get("created_at").map_err(storage)?,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, AuthError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id.0)
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
                    return AuthError::DuplicateAccount(user.email.as_str().to_string());
                }
            }
            AuthError::StorageFailure(e.to_string())
        })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::StorageFailure(e.to_string()))?;

        row.map(Self::row_to_user).transpose()
    }
}

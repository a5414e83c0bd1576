//! Runs against a live Postgres. Set `DATABASE_URL` to a server where the
//! test user may create databases, then run with `--ignored`.

mod common;

use std::sync::Arc;

use auth_service::domain::user::models::DisplayName;
use auth_service::domain::user::models::EmailAddress;
use auth_service::domain::user::models::User;
use auth_service::domain::user::models::UserId;
use auth_service::domain::user::ports::UserRepository;
use auth_service::user::errors::AuthError;
use common::TestApp;
use common::TestDb;
use reqwest::StatusCode;
use serde_json::json;

fn user(email: &str) -> User {
    User {
        id: UserId::new(),
        name: DisplayName::new("Alice".to_string()).unwrap(),
        email: EmailAddress::new(email.to_string()).unwrap(),
        password_hash: "$argon2id$v=19$m=1024,t=1,p=1$c2FsdA$aGFzaA".to_string(),
        created_at: chrono::Utc::now(),
    }
}

#[tokio::test]
#[ignore]
async fn test_repository_roundtrip() {
    let db = TestDb::new().await;
    let repository = db.repository();

    let created = repository.create(user("a@x.com")).await.unwrap();
    let found = repository
        .find_by_email("a@x.com")
        .await
        .unwrap()
        .expect("user should exist");

    assert_eq!(found.id, created.id);
    assert_eq!(found.name.as_str(), "Alice");
    assert_eq!(found.password_hash, created.password_hash);

    assert!(repository.find_by_email("A@x.com").await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn test_repository_unique_email() {
    let db = TestDb::new().await;
    let repository = db.repository();

    repository.create(user("a@x.com")).await.unwrap();
    let result = repository.create(user("a@x.com")).await;

    assert!(matches!(result, Err(AuthError::DuplicateAccount(_))));
}

#[tokio::test]
#[ignore]
async fn test_concurrent_registration_single_winner() {
    let db = TestDb::new().await;
    let app = Arc::new(TestApp::spawn_with(db.repository()).await);

    let attempts = (0..8).map(|i| {
        let app = Arc::clone(&app);
        tokio::spawn(async move {
            app.post("/register")
                .json(&json!({
                    "name": format!("Racer {}", i),
                    "email": "race@example.com",
                    "password": "pass_word!"
                }))
                .send()
                .await
                .expect("Failed to execute request")
                .status()
        })
    });

    let mut created = 0;
    for attempt in attempts.collect::<Vec<_>>() {
        let status = attempt.await.unwrap();
        if status == StatusCode::CREATED {
            created += 1;
        } else {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    assert_eq!(created, 1);
}

#[tokio::test]
#[ignore]
async fn test_register_and_login_against_postgres() {
    let db = TestDb::new().await;
    let app = TestApp::spawn_with(db.repository()).await;

    let response = app
        .post("/register")
        .json(&json!({
            "name": "Alice",
            "email": "alice@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let stored: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE email = $1")
        .bind("alice@example.com")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert!(stored.starts_with("$argon2id$"));
    assert!(!stored.contains("pass_word!"));

    let response = app
        .post("/login")
        .json(&json!({
            "email": "alice@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

use std::sync::Arc;

use auth::Authenticator;
use auth_service::config::Config;
use auth_service::domain::user::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Refuse to start without a signing secret, before touching the database.
    let config = Config::load()?;

    tracing::info!(
        db_host = %config.database.host,
        db_port = config.database.port,
        db_name = %config.database.name,
        http_port = config.server.http_port,
        jwt_ttl_minutes = config.jwt.ttl.num_minutes(),
        hash_memory_kib = config.hashing.memory_kib,
        hash_iterations = config.hashing.iterations,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout)
        .connect_with(config.database.connect_options())
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::with_hash_cost(
        config.jwt.secret.as_bytes(),
        config.hashing,
    )?);
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        authenticator,
        config.jwt.ttl,
    )?);

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(auth_service)).await?;

    Ok(())
}

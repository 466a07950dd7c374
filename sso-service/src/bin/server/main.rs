use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sso_service::config::Config;
use sso_service::domain::auth::service::AuthService;
use sso_service::domain::auth::service::AuthSettings;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::outbound::repositories::PostgresAppRepository;
use sso_service::outbound::repositories::PostgresUserRepository;
use sso_service::outbound::token::JwtTokenIssuer;
use sso_service::proto::auth_server::AuthServer;
use sso_service::telemetry;
use tokio::signal::unix::signal;
use tokio::signal::unix::SignalKind;
use tonic::transport::Server;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;

    telemetry::init_tracing(config.env);

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        env = ?config.env,
        "Service starting"
    );

    tracing::info!(
        grpc_port = config.server.grpc_port,
        token_ttl_minutes = config.token.ttl_minutes,
        admin_lookup_enabled = config.admin.lookup_enabled,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let auth_service = Arc::new(AuthService::new(
        Arc::new(PostgresUserRepository::new(pg_pool.clone())),
        Arc::new(PostgresAppRepository::new(pg_pool)),
        Arc::new(JwtTokenIssuer::new()),
        AuthSettings {
            token_ttl: config.token.ttl(),
            admin_lookup_enabled: config.admin.lookup_enabled,
        },
    ));

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    let grpc_service = AuthGrpcService::new(auth_service);
    tracing::info!(
        address = %grpc_address,
        port = config.server.grpc_port,
        protocol = "grpc",
        "gRpc server listening"
    );

    Server::builder()
        .add_service(AuthServer::new(grpc_service))
        .serve_with_shutdown(grpc_address, shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(e) => {
            tracing::error!(error = %e, "Failed to install SIGTERM handler");
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!(signal = "SIGINT", "Stopping server"),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to listen for SIGINT, stopping server")
                }
            }
            return;
        }
    };

    let received = tokio::select! {
        _ = tokio::signal::ctrl_c() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    };

    tracing::info!(signal = received, "Stopping server");
}

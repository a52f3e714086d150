use std::process::ExitCode;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pwd_policy::server::routes::password::VALIDATE_PATH;
use pwd_policy::server::{AppState, ServerConfig, build_app_router};
use pwd_policy::{RuleSet, Validator};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pwd_policy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid server configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        addr = %config.addr(),
        environment = ?config.environment,
        "Loaded server configuration"
    );

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server terminated with an error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn run(config: ServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.addr()).await?;
    let addr = listener.local_addr()?;

    let validator = Validator::new(RuleSet::standard());
    tracing::info!(rules = ?validator.rules().names().collect::<Vec<_>>(), "Rule set loaded");

    let app = build_app_router(AppState::new(validator, config));

    tracing::info!("Server listening on {addr}");
    tracing::info!("Validation endpoint: POST http://{addr}{VALIDATE_PATH}");
    tracing::info!("Health check: GET http://{addr}/");

    let token = CancellationToken::new();
    tokio::spawn(shutdown_signal(token.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { token.cancelled().await })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Cancels `token` on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
    token.cancel();
}

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use repo_search_api::config::AppConfig;
use repo_search_api::github::GithubClient;
use repo_search_api::routes;
use repo_search_api::state::AppState;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env().context("Invalid configuration")?;

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    tracing::info!(
        environment = %config.environment,
        upstream = %config.github_api_url,
        "Starting repo-search-api v{}",
        env!("CARGO_PKG_VERSION")
    );

    let github = GithubClient::new(config.github_api_url.clone())
        .context("Failed to build GitHub client")?;
    let state = AppState::new(config.clone(), Arc::new(github));

    for route in routes::ROUTES {
        tracing::info!(method = route.method, path = route.path, "Route available");
    }

    let app = routes::build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server ({}) running on http://{}", config.environment, addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_tx))
        .into_future();

    let deadline = async move {
        // Sender lives inside the server future; a closed channel means it finished.
        if shutdown_rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(SHUTDOWN_GRACE).await;
    };

    tokio::select! {
        res = server => {
            res.context("Server error")?;
            tracing::info!("HTTP server closed");
        }
        _ = deadline => {
            tracing::warn!("Forcing shutdown due to timeout");
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn shutdown_signal(shutdown_tx: watch::Sender<bool>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
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

    tracing::info!("Shutdown signal received, shutting down");
    let _ = shutdown_tx.send(true);
}

use std::sync::Arc;
use std::time::Duration;

use salvo::{listener::TcpListener, Server};

use app::use_case::{UserApi, UserService};
use config::AppConfig;
use domain::validation::UserValidator;
use infra::database::{connection, store::PgUserStore};
use infra::router;
use infra::service::UuidGenerator;

mod app;
mod config;
mod domain;
mod error;
mod infra;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error configuring service: {err}. Exiting");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let pool = match connection::create_pool(&config).await {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!(error = %err, "failed to connect to the database. Exiting");
            std::process::exit(1);
        }
    };
    tracing::info!("connected to the database successfully");

    let service = Arc::new(UserService::new(
        PgUserStore::new(pool),
        UuidGenerator,
        UserValidator,
    ));

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address);

    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(
        Server::new(listener).serve_with_graceful_shutdown(router::app(service.clone()), async {
            stop_rx.await.ok();
        }),
    );

    shutdown_signal().await;
    tracing::info!("shutting down server...");

    let _ = stop_tx.send(());
    if tokio::time::timeout(SHUTDOWN_TIMEOUT, server).await.is_err() {
        tracing::error!("failed to shutdown gracefully: in-flight requests outlived the deadline");
    } else {
        tracing::info!("server shutdown gracefully");
    }

    service.shutdown().await;
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Expect to install the interrupt signal handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Expect to install the terminate signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{http::StatusCode, middleware, Router};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;

use crate::config::Settings;
use crate::domain::{ChatRepository, MessageRepository, UserRepository};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    PgChatRepository, PgMessageRepository, PgUserRepository,
};
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub users: Arc<dyn UserRepository>,
    pub chats: Arc<dyn ChatRepository>,
    pub messages: Arc<dyn MessageRepository>,
}

impl AppState {
    pub fn new(
        db: PgPool,
        users: Arc<dyn UserRepository>,
        chats: Arc<dyn ChatRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            db,
            users,
            chats,
            messages,
        }
    }

    /// State backed by the PostgreSQL repositories
    pub fn from_pool(db: PgPool) -> Self {
        Self::new(
            db.clone(),
            Arc::new(PgUserRepository::new(db.clone())),
            Arc::new(PgChatRepository::new(db.clone())),
            Arc::new(PgMessageRepository::new(db)),
        )
    }
}

/// Wrap the routes in the timeout, request logging, tracing and CORS layers.
///
/// Request logging sits outside the timeout so timed out requests are
/// still logged and counted.
pub fn build_router(state: AppState, settings: &Settings) -> Router {
    routes::create_router(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            settings.server.request_timeout(),
        ))
        .layer(middleware::from_fn(logging::request_logging))
        .layer(logging::create_trace_layer())
        .layer(cors::create_cors_layer(&settings.cors))
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
    db: PgPool,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        // Create database pool
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        if settings.database.run_migrations {
            database::run_migrations(&db).await?;
        } else {
            tracing::info!("Skipping database migrations");
        }

        let state = AppState::from_pool(db.clone());
        let router = build_router(state, &settings);

        // Bind to address
        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            listener,
            router,
            db,
        })
    }

    /// Run the server until a shutdown signal arrives, then close the pool
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        self.db.close().await;
        tracing::info!("Database pool closed");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => tracing::warn!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received, draining connections");
}

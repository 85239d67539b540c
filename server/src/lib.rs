//! In-memory todo service over HTTP.
//!
//! # Overview
//! Serves paginated listing and CRUD for short prioritized todos:
//!
//! ```text
//! GET    /todos?first_n=&page_no=  -> list_todos
//! POST   /todos                    -> create_todo
//! GET    /todos/{id}               -> get_todo
//! PUT    /todos/{id}               -> update_todo
//! DELETE /todos/{id}               -> delete_todo
//! GET    /health                   -> health_check
//! ```
//!
//! # Design
//! - The store is an explicit value injected through axum state, so every
//!   router (and every test) owns an isolated collection.
//! - One `RwLock` guards the whole store; mutations take the write half.
//! - Errors are a single `TodoError` enum rendered as `{ "error", "code" }`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod pagination;
pub mod store;
pub mod validation;

use axum::http::HeaderName;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub use config::ServerConfig;
pub use error::{TodoError, TodoResult};
pub use model::{Page, Priority, Todo, TodoCreate, TodoId, TodoUpdate};
pub use store::{SharedStore, TodoStore};

/// Router over an empty store.
pub fn app() -> Router {
    app_with_store(TodoStore::new().into_shared())
}

/// Router over the five sample todos.
pub fn app_with_samples() -> Router {
    app_with_store(TodoStore::with_samples().into_shared())
}

/// Router over the given store, with request tracing and `x-request-id`.
pub fn app_with_store(store: SharedStore) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .route("/health", get(handlers::health_check))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(store)
}

/// Serve `router` on `listener` until the process is asked to stop.
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Serve `store` on `listener` without signal handling, for embedding in tests.
pub async fn run(listener: TcpListener, store: TodoStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_store(store.into_shared())).await
}

/// Wait for Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received");
}

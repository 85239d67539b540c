use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_server::{ServerConfig, TodoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        seed_sample_todos = config.seed_sample_todos,
        "Loaded server configuration"
    );

    let store = if config.seed_sample_todos {
        TodoStore::with_samples()
    } else {
        TodoStore::new()
    };
    tracing::info!(todos = store.count(), "Store initialised");

    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!(%addr, "Starting server");

    todo_server::serve(listener, todo_server::app_with_store(store.into_shared()))
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

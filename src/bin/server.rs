//! Taskboard web server entry point.
//!
//! Reads configuration from the environment, selects a storage adapter
//! (`PostgreSQL` when `DATABASE_URL` is set, in-memory otherwise), and
//! serves the task routes until the process exits.
//!
//! Environment:
//!
//! - `TASKBOARD_BIND` — listen address, default `127.0.0.1:3000`
//! - `DATABASE_URL` — `PostgreSQL` connection URL, optional
//! - `RUST_LOG` — tracing filter, default `info`

use std::sync::Arc;

use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::adapters::postgres::{PostgresTaskRepository, establish_pool};
use taskboard::web::{self, AppState, ServerConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let router = match config.database_url.as_deref() {
        Some(url) => {
            info!("using PostgreSQL task storage");
            let pool = establish_pool(url)?;
            let repository = Arc::new(PostgresTaskRepository::new(pool));
            web::build_router(AppState::new(repository)?)
        }
        None => {
            warn!("DATABASE_URL not set, using in-memory task storage");
            let repository = Arc::new(InMemoryTaskRepository::new());
            web::build_router(AppState::new(repository)?)
        }
    };

    web::serve(router, config.bind_addr).await?;
    Ok(())
}

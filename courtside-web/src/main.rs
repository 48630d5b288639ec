//! courtside-web - Read-only basketball statistics browser
//!
//! Serves conference/division-grouped team listings, team pages with
//! season-filterable schedules, and game pages with a segment-paginated
//! play-by-play viewer, all over a static SQLite database.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use courtside_common::config;
use courtside_web::{build_router, db, AppState};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "courtside-web", about = "Read-only basketball statistics browser")]
struct Args {
    /// Path to the statistics database (read-only)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber before anything else
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Courtside (courtside-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();
    let config = config::resolve(args.database, args.port);
    info!("Database path: {}", config.database.display());

    // The dataset is static; the service never writes
    let pool = match db::connect_readonly(&config.database).await {
        Ok(pool) => {
            info!("✓ Connected to database (read-only)");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e);
        }
    };

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", config.port)).await?;
    info!("courtside-web listening on http://127.0.0.1:{}", config.port);
    info!("Health check: http://127.0.0.1:{}/health", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}

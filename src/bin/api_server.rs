// API Server Binary Entry Point
//
// Purpose: Start the Axum API server over the emissions calculator
// Usage: cargo run --features api --bin api_server

use greendex_calculator::{AppState, create_router};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "greendex_calculator=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    // PROJECT_ACTIVITIES_PATH: JSON file of project id -> activities (optional)
    let activities_path = std::env::var("PROJECT_ACTIVITIES_PATH").ok();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Configuration:");
    tracing::info!("  PROJECT_ACTIVITIES_PATH: {}", activities_path.as_deref().unwrap_or("(none)"));
    tracing::info!("  PORT: {}", port);

    let state = AppState::new(activities_path.as_deref())?;
    if state.activities.is_empty() {
        tracing::warn!("No project activities loaded; requests must send them inline");
    } else {
        tracing::info!("{} projects with shared activities", state.activities.len());
    }

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}

//! Expense Tracker Server
//!
//! Main entry point for the expense tracker web service.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use expense_tracker_api::{AppState, create_router};
use expense_tracker_core::Tracker;
use expense_tracker_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "expense_tracker=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // State lives for the whole process; nothing is persisted
    let state = AppState::new(Tracker::new(), config.display.clone());
    let app = create_router(state);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        currency_symbol = %config.display.currency_symbol,
        "Server listening on {}", addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}

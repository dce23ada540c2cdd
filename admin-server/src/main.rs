//! admin-server — Rentiva marketplace admin backend
//!
//! Long-running service that:
//! - Serves the admin/vendor dashboards' CRUD API (vendors, products,
//!   tags, coupons, orders, delivery partners)
//! - Orchestrates order status updates: audit history plus customer and
//!   delivery-partner email notifications
//! - Delegates persistence to hosted PostgreSQL and email delivery to SES

mod api;
mod config;
mod db;
mod email;
mod error;
mod orders;
mod state;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admin_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting admin-server (env: {})", config.environment);

    // Initialize application state
    let state = AppState::new(&config).await?;

    // Build router and serve
    let app = api::create_router(state);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("admin-server HTTP listening on {http_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

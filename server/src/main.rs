use anyhow::{Context, Result};
use ipo_dashboard::backend::{config::DashboardConfig, create_router, initialize_backend};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ipo_dashboard=info,tower_http=info"));

    // init() also routes `log` records from the library through this subscriber
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = DashboardConfig::load().context("Failed to load dashboard configuration")?;

    info!("Setting up backend");
    let app_state = initialize_backend(&config)?;
    let app = create_router(app_state, config.allowed_origin.as_deref())?;

    let listener = TcpListener::bind(config.bind_address.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    info!("Dashboard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

use anyhow::Result;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pediatric_care_backend::backend::{create_router, initialize_backend};
use pediatric_care_backend::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Initialize logging; `log` records from the library are forwarded too
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    info!("🚀 Starting pediatric care backend with {:?}", config);

    let app_state = initialize_backend(&config.data_dir).await?;
    let app = create_router(app_state, config.allowed_origin.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("🌐 Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

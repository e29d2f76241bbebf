mod config;
mod config_manager;
mod error;
mod landing_page;
mod llm;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translation_backend=debug,tower_http=debug")),
        )
        .init();

    let (config, source) = Config::discover()?;
    info!("Loaded configuration from: {}", source);

    // The model client is built once here and shared through the state
    let app_state = AppState::new(&config.llm_config)?;
    info!("Using LLM provider: {}", app_state.llm.provider_name());

    let app = routes::build_app(app_state);

    let addr = config.system_config.bind_address();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

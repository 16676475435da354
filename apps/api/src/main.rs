mod config;
mod db;
mod errors;
mod export;
mod form;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;
mod store;
mod suggestions;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{InMemoryResumeRepository, PgResumeRepository, ResumeRepository};
use crate::suggestions::TextSuggester;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume API v{}", env!("CARGO_PKG_VERSION"));

    // Resume store: Postgres when configured, otherwise process memory
    let resumes: Arc<dyn ResumeRepository> = match &config.database_url {
        Some(url) => Arc::new(PgResumeRepository::new(create_pool(url).await?)),
        None => {
            warn!("DATABASE_URL not set; saved resumes are kept in memory only");
            Arc::new(InMemoryResumeRepository::new())
        }
    };

    // Suggestion proxy
    let suggester: Option<Arc<dyn TextSuggester>> = match &config.anthropic_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone()).context("Failed to build LLM client")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(client))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; suggestions are disabled");
            None
        }
    };

    let state = AppState { resumes, suggester };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(config: &Config) -> Result<CorsLayer> {
    match &config.cors_origin {
        Some(origin) => {
            let origin: HeaderValue = origin
                .parse()
                .with_context(|| format!("CORS_ORIGIN '{origin}' is not a valid header value"))?;
            info!("CORS restricted to {:?}", origin);
            Ok(CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any))
        }
        None => Ok(CorsLayer::permissive()),
    }
}

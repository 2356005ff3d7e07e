mod catalog;
mod config;
mod errors;
mod matching;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::store::{spawn_periodic_reload, CatalogStore};
use crate::config::Config;
use crate::matching::policy::ScoringPolicy;
use crate::matching::recommender::RuleBasedRecommender;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparsable env values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Toolfinder API v{}", env!("CARGO_PKG_VERSION"));

    // Scoring policy: file (optional) + env overrides, validated before serving
    let policy = ScoringPolicy::from_config(&config)?;
    info!(
        "Scoring policy: weights {}/{}/{}, min_score {}, max_results {:?}",
        policy.weights.workflow,
        policy.weights.challenge,
        policy.weights.skill,
        policy.min_score,
        policy.max_results
    );
    let recommender = Arc::new(RuleBasedRecommender::new(policy));

    // Catalog starts empty; the first load runs in the background so /health answers at once
    let catalog = Arc::new(CatalogStore::new(config.catalog_source()));
    {
        let store = Arc::clone(&catalog);
        tokio::spawn(async move {
            if let Err(e) = store.reload().await {
                error!("Initial catalog load failed: {e}");
            }
        });
    }
    if let Some(secs) = config.catalog_reload_secs {
        spawn_periodic_reload(Arc::clone(&catalog), Duration::from_secs(secs));
        info!("Catalog reload every {secs}s");
    }

    // Build app state
    let state = AppState {
        config: config.clone(),
        catalog,
        recommender,
    };

    // Build router
    let app = build_router(state)
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client's host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

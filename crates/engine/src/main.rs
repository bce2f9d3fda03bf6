//! Rucksack Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rucksack_engine::api;
use rucksack_engine::infrastructure::config::{AppConfig, StoreBackend};
use rucksack_engine::infrastructure::correlation::CORRELATION_HEADER;
use rucksack_engine::infrastructure::memory::InMemoryPlayerRepo;
use rucksack_engine::infrastructure::neo4j::{ensure_schema, Neo4jPlayerRepo};
use rucksack_engine::infrastructure::ports::PlayerRepo;
use rucksack_engine::use_cases::player::demo_player;
use rucksack_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rucksack_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Rucksack Engine");

    let config = AppConfig::from_env()?;

    let player_repo: Arc<dyn PlayerRepo> = match &config.store {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory player store; call POST /init to seed");
            Arc::new(InMemoryPlayerRepo::new())
        }
        StoreBackend::Neo4j(neo4j) => {
            tracing::info!("Connecting to Neo4j at {}", neo4j.uri);
            let graph = neo4rs::Graph::new(&neo4j.uri, &neo4j.user, &neo4j.password)
                .await
                .with_context(|| format!("Failed to connect to Neo4j at {}", neo4j.uri))?;

            // Ensure database schema (constraints and indexes)
            ensure_schema(&graph).await?;
            Arc::new(Neo4jPlayerRepo::new(graph))
        }
    };

    let template = demo_player().context("Demo player template is invalid")?;
    let app = Arc::new(App::new(player_repo, template));

    let mut router = api::router(app);
    if let Some(cors) = build_cors_layer(config.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }

    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port)
        .parse()
        .context("SERVER_HOST/SERVER_PORT do not form a valid socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Rucksack Engine stopped");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins?;

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE, CORRELATION_HEADER])
        .expose_headers([CORRELATION_HEADER]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}

/// Resolve on Ctrl+C or SIGTERM so in-flight requests can finish.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

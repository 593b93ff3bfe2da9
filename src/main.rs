// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::ingest_service::IngestService;
use crate::application::notifier::Notifier;
use crate::application::report_service::ReportService;
use crate::application::sample_repository::SampleRepository;
use crate::domain::chart::Canvas;
use crate::infrastructure::config::load_config;
use crate::infrastructure::discord_notifier::DiscordNotifier;
use crate::infrastructure::influx_repository::InfluxRepository;
use crate::infrastructure::memory_repository::InMemoryRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, post_data, report_page, style};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_config()?;
    let canvas = Canvas::new(config.chart.width, config.chart.height)?;

    // Create repository (infrastructure layer)
    let repository: Arc<dyn SampleRepository> = match config.influx {
        Some(influx) => {
            tracing::info!("Storing samples in InfluxDB at {}", influx.host);
            Arc::new(InfluxRepository::new(
                influx.host,
                influx.token,
                influx.database,
                influx.retention_policy,
            ))
        }
        None => {
            tracing::warn!("No [influx] section configured, samples are kept in memory only");
            Arc::new(InMemoryRepository::new())
        }
    };

    let notifier: Option<Arc<dyn Notifier>> = match config.webhook {
        Some(webhook) => Some(Arc::new(DiscordNotifier::new(webhook.url))),
        None => {
            tracing::warn!("No webhook configured, notifications are disabled");
            None
        }
    };

    // Create services (application layer)
    let state = Arc::new(AppState {
        ingest_service: IngestService::new(repository.clone(), notifier),
        report_service: ReportService::new(repository, canvas),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(report_page))
        .route("/style.css", get(style))
        .route("/data", post(post_data))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
    tracing::info!("Starting weather-reports service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}

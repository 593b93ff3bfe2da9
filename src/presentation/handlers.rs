// HTTP request handlers
use crate::application::ingest_service::IngestError;
use crate::domain::sample::SampleInput;
use crate::infrastructure::http_response::{CSS, HTML, accepts_brotli, text_response};
use crate::presentation::app_state::AppState;
use crate::presentation::page::render_page;
use crate::presentation::style::stylesheet;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Report page with one chart per metric
pub async fn report_page(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let page = match state.report_service.build_report().await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("Error building report: {:#}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Weather data is currently unavailable",
            )
                .into_response();
        }
    };

    match text_response(HTML, render_page(&page), accepts_brotli(&headers)).await {
        Ok(response) => response.into_response(),
        Err(status) => status.into_response(),
    }
}

pub async fn style(headers: HeaderMap) -> impl IntoResponse {
    match text_response(CSS, stylesheet(), accepts_brotli(&headers)).await {
        Ok(response) => response.into_response(),
        Err(status) => status.into_response(),
    }
}

/// Record a sample posted by the sensor station
pub async fn post_data(
    State(state): State<Arc<AppState>>,
    Json(input): Json<SampleInput>,
) -> impl IntoResponse {
    match state.ingest_service.record(input).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e @ IngestError::Invalid(_)) => {
            tracing::warn!("Rejected sample: {}", e);
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response()
        }
        Err(e @ IngestError::Storage(_)) => {
            tracing::error!("{}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to store sample").into_response()
        }
    }
}

//! API handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::api::AppState;
use crate::netlist::suggest_optimizations;
use crate::types::{ReportRecord, Suggestion};

/// Health check
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        source: state.source_kind().to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub source: String,
}

/// Design report
pub async fn report(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReportRecord>>, (StatusCode, String)> {
    let records = state.source.fetch().await.map_err(|e| {
        tracing::error!(error = %e, source = state.source_kind(), "Report fetch failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    tracing::debug!(records = records.len(), "Serving report");
    Ok(Json(records))
}

/// Optimization hints for every wire in the report
pub async fn optimizations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Suggestion>>, (StatusCode, String)> {
    let records = state
        .source
        .fetch()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(suggest_optimizations(&records)))
}

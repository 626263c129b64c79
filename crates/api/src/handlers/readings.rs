//! Handler for sensor reading ingestion.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use gaswatch_core::alert::{LeakAlert, LEAK_ALERT_THRESHOLD};
use gaswatch_core::error::CoreError;
use gaswatch_core::reading::ReadingInput;
use gaswatch_db::repositories::ReadingRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Acknowledgement returned once the reading is committed.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub status: &'static str,
}

/// POST /data
///
/// Validate, store, then evaluate the leak threshold. The alert is only
/// queued here; its delivery outcome never changes this response.
pub async fn ingest_reading(
    State(state): State<AppState>,
    payload: Result<Json<ReadingInput>, JsonRejection>,
) -> AppResult<Json<IngestResponse>> {
    let Json(input) = payload.map_err(|e| CoreError::Validation(e.body_text()))?;
    let new_reading = input.into_new_reading(Utc::now())?;

    let reading = ReadingRepo::create(&state.pool, &new_reading).await?;
    tracing::debug!(
        reading_id = reading.id,
        gas_level = reading.gas_level,
        gas_leak = reading.gas_leak,
        "Reading stored"
    );

    if let Some(alert) = LeakAlert::evaluate(
        reading.id,
        reading.gas_level,
        reading.gas_leak,
        reading.recorded_at,
    ) {
        tracing::warn!(
            reading_id = reading.id,
            gas_leak = reading.gas_leak,
            threshold = LEAK_ALERT_THRESHOLD,
            "Leak threshold exceeded, dispatching alert"
        );
        state.alerts.dispatch(alert);
    }

    Ok(Json(IngestResponse { status: "success" }))
}

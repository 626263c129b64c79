//! Valve endpoint. Echoes the requested state; no actuator is driven and
//! nothing is stored.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::Json;
use gaswatch_core::error::CoreError;
use gaswatch_core::valve::parse_valve_state;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// Query parameters for the valve endpoint.
#[derive(Debug, Deserialize)]
pub struct ValveQuery {
    pub state: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValveStateResponse {
    pub valve_state: bool,
}

/// GET /control-valve?state=<bool>
pub async fn control_valve(
    query: Result<Query<ValveQuery>, QueryRejection>,
) -> AppResult<Json<ValveStateResponse>> {
    let Query(query) = query.map_err(|e| CoreError::Validation(e.body_text()))?;
    let raw = query
        .state
        .ok_or_else(|| CoreError::Validation("state: query parameter is required".to_string()))?;
    let valve_state = parse_valve_state(&raw)?;

    tracing::info!(valve_state, "Valve state requested, no actuation performed");

    Ok(Json(ValveStateResponse { valve_state }))
}

//! Route definitions for telemetry ingestion.

use axum::routing::post;
use axum::Router;

use crate::handlers::readings;
use crate::state::AppState;

/// ```text
/// POST /data    -> ingest_reading
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/data", post(readings::ingest_reading))
}

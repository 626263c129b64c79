pub mod health;
pub mod readings;
pub mod valve;

use axum::Router;

use crate::state::AppState;

/// Build the sensor-facing route tree. Paths sit at the root because
/// deployed firmware posts to `/data` directly.
///
/// ```text
/// POST /data                      ingest a reading
/// GET  /control-valve?state=...   echo the requested valve state
/// GET  /health                    service + alert delivery health
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(readings::router())
        .merge(valve::router())
}

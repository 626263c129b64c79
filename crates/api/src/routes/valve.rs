use axum::routing::get;
use axum::Router;

use crate::handlers::valve;
use crate::state::AppState;

/// ```text
/// GET /control-valve?state=<bool>    -> control_valve
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/control-valve", get(valve::control_valve))
}
